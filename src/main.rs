//! Wordle Recommender - CLI
//!
//! Suggests the next guess for a Wordle-style game, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use wordle_recommender::{
    commands::{analyze_word, derive_opener, run_benchmark, run_simple, sample_targets, solve_word},
    core::Word,
    output::{
        Diagnostics, print_analysis_result, print_benchmark_result, print_opener_report,
        print_solve_result,
    },
    solver::{OPENING_WORD, Scan, Session},
    wordlists::{DEFAULT_ANSWERS_PATH, DEFAULT_GUESSES_PATH, WordLists, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_recommender",
    about = "Entropy-guided next-guess recommender for Wordle-style puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Allowed guesses list, one word per line
    #[arg(short, long, global = true, env = "WORDLE_GUESSES", default_value = DEFAULT_GUESSES_PATH)]
    guesses: PathBuf,

    /// Possible answers list, one word per line
    #[arg(short, long, global = true, env = "WORDLE_ANSWERS", default_value = DEFAULT_ANSWERS_PATH)]
    answers: PathBuf,

    /// Guess only from the answers list (ignores --guesses)
    #[arg(long, global = true)]
    answers_as_guesses: bool,

    /// Opening suggestion for every new session
    #[arg(short, long, global = true, default_value = OPENING_WORD)]
    opening: String,

    /// Print diagnostics (remaining counts, top-ranked guesses) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Score the guess pool on one thread
    #[arg(long, global = true)]
    serial: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive recommender without TUI)
    Simple,

    /// Play the recommendations against a known target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of best guesses to list alongside
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Benchmark the recommender by playing many answers
    Benchmark {
        /// Number of answers to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample answers at random with this seed instead of taking the first N
        #[arg(long)]
        seed: Option<u64>,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Re-derive the best opening word for the loaded lists
    Opener {
        /// Number of top openers to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn load_wordlists(cli: &Cli) -> Result<WordLists> {
    let lists = if cli.answers_as_guesses {
        WordLists::answers_only(load_from_file(&cli.answers)?)?
    } else {
        WordLists::from_files(&cli.guesses, &cli.answers)?
    };
    Ok(lists)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let diagnostics = Diagnostics::new(cli.verbose);

    let lists = load_wordlists(&cli).context("loading word lists")?;
    let opening =
        Word::new(&cli.opening).with_context(|| format!("invalid opening word '{}'", cli.opening))?;
    let scan = if cli.serial {
        Scan::Serial
    } else {
        Scan::Parallel
    };

    if diagnostics.enabled() {
        eprintln!(
            "{} {} allowed guesses, {} possible answers, opening {}",
            "[diag]".bright_black(),
            lists.allowed_guesses().len(),
            lists.possible_answers().len(),
            opening
        );
    }

    let mut session = Session::with_opening(&lists, opening.clone()).with_scan(scan);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            use wordle_recommender::interactive::{App, run_tui};
            run_tui(App::new(session, cli.verbose))
        }
        Commands::Simple => run_simple(&mut session, diagnostics),
        Commands::Solve { word } => {
            let result = solve_word(&mut session, &word)?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &lists, top, scan)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            first_word,
        } => {
            let forced_first = first_word
                .map(|w| Word::new(&w).with_context(|| format!("invalid first word '{w}'")))
                .transpose()?;

            match &forced_first {
                Some(word) => println!(
                    "Running benchmark on {count} words with forced first word: {word}..."
                ),
                None => println!("Running benchmark on {count} words..."),
            }

            let targets = sample_targets(lists.possible_answers(), count, seed);
            let result = run_benchmark(&mut session, &targets, forced_first.as_ref(), true)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Opener { top } => {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
            spinner.set_message(format!(
                "Scoring {} guesses against {} answers",
                lists.allowed_guesses().len(),
                lists.possible_answers().len()
            ));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let report = derive_opener(&lists, &opening, top, scan);
            spinner.finish_and_clear();

            print_opener_report(&report);
            Ok(())
        }
    }
}
