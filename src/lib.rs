// Reusable library API — the CLI is a thin layer over these modules
pub mod direction;
pub mod errors;
pub mod grid;
mod lines;
pub mod log;
pub mod reader;
pub mod solution;
pub mod solver;
