//! Display functions for command results

use super::formatters::{colored_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, OpenerReport, SolveResult};
use crate::core::{MAX_TURNS, Word};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let tiles = Word::new(&step.word).map_or_else(
            |_| step.word.to_uppercase(),
            |word| colored_guess(&word, step.feedback),
        );
        println!("\nTurn {turn}: {tiles}  {}", step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_partition);

    print_ranking("Best guesses", &result.top, Some(result.word.as_str()));
}

/// Print the result of re-deriving the opening word
pub fn print_opener_report(report: &OpenerReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", report.total_candidates);
    println!(
        "   Best:        {} ({:.4} bits)",
        report.best.to_uppercase().bright_green().bold(),
        report.best_entropy
    );

    let rank = report
        .configured_rank
        .map_or_else(|| "not in guess list".to_string(), |r| format!("rank {r}"));
    println!(
        "   Configured:  {} ({:.4} bits, {rank})",
        report.configured.to_uppercase().bright_yellow().bold(),
        report.configured_entropy
    );

    if report.configured_is_best() {
        println!("\n{}", "✅ Configured opening word is optimal".green().bold());
    } else {
        println!(
            "\n{}",
            format!(
                "⚠ {} scores {:.4} bits higher",
                report.best.to_uppercase(),
                report.best_entropy - report.configured_entropy
            )
            .yellow()
            .bold()
        );
    }

    print_ranking("Top openers", &report.top, Some(report.configured.as_str()));
}

fn print_ranking(title: &str, ranked: &[(String, f64)], highlight: Option<&str>) {
    if ranked.is_empty() {
        return;
    }

    println!("\n🏆 {}", format!("{title}:").bright_cyan().bold());
    for (i, (word, entropy)) in ranked.iter().enumerate() {
        let bar = entropy_bar(*entropy, 20);
        let name = if highlight == Some(word.as_str()) {
            word.to_uppercase().bright_yellow().bold()
        } else {
            word.to_uppercase().normal()
        };
        println!("   {:>3}. {name} [{}] {entropy:.3}", i + 1, bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_TURNS {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        println!(
            "\n❌ {} ({}):",
            "Not solved".red().bold(),
            result.failed.len()
        );
        for word in result.failed.iter().take(20) {
            println!("   {}", word.to_uppercase());
        }
        if result.failed.len() > 20 {
            println!("   ... and {} more", result.failed.len() - 20);
        }
    }
}
