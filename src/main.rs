use std::process::ExitCode;
use clap::Parser;
use std::time::Instant;

use wordseek::errors::PuzzleError;
use wordseek::grid::Spacing;
use wordseek::reader;
use wordseek::solution::DEFAULT_MASK_CHAR;
use wordseek::solver::{self, NotFoundPolicy};

/// Word search puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to read the puzzle from; should first contain a rectangular
    /// search field, then an empty line, then lines containing
    /// whitespace-delimited words to search for
    file: String,

    /// Horizontal spacing in the search field, i.e. how many meaningless
    /// characters separate each two search field characters on each line
    #[arg(short = 'H', long, default_value_t = 0)]
    horizontal_spacing: usize,

    /// Vertical spacing in the search field, i.e. how many meaningless lines
    /// separate each two search field lines
    #[arg(short = 'V', long, default_value_t = 0)]
    vertical_spacing: usize,

    /// Only show mask of letters belonging to found words, do not show
    /// remaining text
    #[arg(short, long)]
    mask_only: bool,

    /// Character to use in mask for letters in found words
    #[arg(short = 'M', long, default_value_t = DEFAULT_MASK_CHAR)]
    mask_char: char,

    /// Only show remaining text after removing letters belonging to found
    /// words, do not show mask
    #[arg(short, long)]
    remaining_text_only: bool,

    /// What to do with words not found in the grid: error, keep, or ignore
    #[arg(short, long, default_value = "error")]
    not_found: String,
}

/// Entry point of the wordseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDSEEK_DEBUG").is_ok();
    wordseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordseek CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Read the puzzle file and split it into a grid and a word list.
/// 3. Solve the puzzle under the configured not-found policy.
/// 4. Print the mask and/or the remaining text on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed puzzle, missing
/// words, unreadable file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();
    let policy: NotFoundPolicy = cli.not_found.parse()?;

    // 1. Read and split the puzzle file
    let t_load = Instant::now();
    let text = std::fs::read_to_string(&cli.file)?;
    let (grid, words) = reader::read_puzzle(
        &text,
        Spacing::Exact(cli.horizontal_spacing),
        Spacing::Exact(cli.vertical_spacing),
    )?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!(
        "Loaded a {}x{} grid and {} words from {}",
        grid.height(),
        grid.width(),
        words.len(),
        cli.file
    );

    // 2. Solve the puzzle
    let t_solve = Instant::now();
    let solution = solver::solve(&grid, &words, None, policy)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Print the requested views on stdout
    if !cli.remaining_text_only {
        println!("{}", solution.mask_string(cli.mask_char, ' '));
    }
    if !cli.mask_only {
        println!("{}", solution.remaining_text());
    }

    // 4. Print diagnostics (grid size, timings, match counts) to stderr
    let found = solution
        .word_positions()
        .values()
        .filter(|p| p.is_some())
        .count();
    eprintln!(
        "Loaded puzzle in {load_secs:.3}s; found {found}/{} words in {solve_secs:.3}s.",
        words.len()
    );

    Ok(())
}
