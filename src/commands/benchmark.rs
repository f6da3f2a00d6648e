//! Benchmark command
//!
//! Plays full sessions against a sample of answers and summarizes how many
//! guesses they took.

use super::solve::play_out;
use crate::core::Word;
use crate::solver::Session;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Targets not solved within the turn cap
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed → number of solved targets
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct targets from the answers
///
/// Without a seed the first `count` answers are used, so runs are repeatable
/// by default.
#[must_use]
pub fn sample_targets(answers: &[Word], count: usize, seed: Option<u64>) -> Vec<&Word> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            answers.choose_multiple(&mut rng, count).collect()
        }
        None => answers.iter().take(count).collect(),
    }
}

/// Run a session against each target word
///
/// If `forced_first` is provided it replaces the opening suggestion.
///
/// # Errors
/// Returns an error if the progress bar template is rejected or a session
/// fails; neither happens with targets from the answers list.
pub fn run_benchmark(
    session: &mut Session,
    targets: &[&Word],
    forced_first: Option<&Word>,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed = Vec::new();
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (idx, &target) in targets.iter().enumerate() {
        let result = play_out(session, target, forced_first)?;
        let guesses = result.guesses.len();

        if result.success {
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(result.target);
        }

        let solved = idx + 1 - failed.len();
        if solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failed.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TURNS;
    use crate::wordlists::WordLists;

    fn lists() -> WordLists {
        WordLists::from_strs(
            "salet\ncrane\nslate\nirate\ncrate\ngrate\ntrace\nplate\nbrace\ngrace\n",
            "irate\ncrate\ngrate\nslate\nplate\ntrace\nbrace\ngrace\n",
        )
        .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let lists = lists();
        let mut session = Session::new(&lists);
        let targets = sample_targets(lists.possible_answers(), 8, None);

        let result = run_benchmark(&mut session, &targets, None, false).unwrap();

        assert_eq!(result.total_words, 8);
        assert_eq!(result.solved + result.failed.len(), 8);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_TURNS);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let lists = lists();
        let mut session = Session::new(&lists);
        let targets = sample_targets(lists.possible_answers(), 5, None);

        let result = run_benchmark(&mut session, &targets, None, false).unwrap();

        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        let weighted: usize = result.distribution.iter().map(|(g, c)| g * c).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_with_forced_first_word() {
        let lists = lists();
        let mut session = Session::new(&lists);
        let targets = sample_targets(lists.possible_answers(), 3, None);
        let first = Word::new("grate").unwrap();

        let result = run_benchmark(&mut session, &targets, Some(&first), false).unwrap();

        // grate is the third target: solved on the forced first guess
        assert_eq!(result.min_guesses, 1);
    }

    #[test]
    fn seeded_sampling_is_repeatable_and_distinct() {
        let lists = lists();
        let a = sample_targets(lists.possible_answers(), 4, Some(7));
        let b = sample_targets(lists.possible_answers(), 4, Some(7));

        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
        for (i, w) in a.iter().enumerate() {
            assert!(!a[i + 1..].contains(w));
        }
    }

    #[test]
    fn sampling_caps_at_list_size() {
        let lists = lists();
        assert_eq!(sample_targets(lists.possible_answers(), 100, None).len(), 8);
        assert_eq!(sample_targets(lists.possible_answers(), 100, Some(1)).len(), 8);
    }
}
