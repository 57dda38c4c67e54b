//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, kind_label};
use crate::commands::{BenchmarkResult, ListSummary, RankedWord, SolveOutcome, SolveResult};
use crate::core::Feedback;
use crate::solver::{GuessRecord, LossReason, MAX_ROUNDS, Suggestion};
use colored::Colorize;

/// Print a suggested guess with its round and remaining candidates
pub fn print_suggestion(suggestion: &Suggestion) {
    println!("{}", "─".repeat(60).bright_black());
    println!(
        "Round {}/{MAX_ROUNDS}: {} candidates remaining",
        suggestion.round, suggestion.remaining
    );
    let score = suggestion
        .score
        .map(|s| format!(" (score {s:.3})"))
        .unwrap_or_default();
    println!(
        "\n  Guess: {}  {}{}\n",
        suggestion.word.bright_white().bold(),
        kind_label(suggestion.kind).bright_black(),
        score.bright_black()
    );
}

/// Print the end of a won game
pub fn print_won(word: &str, feedback: &Feedback, rounds: u8, history: &[GuessRecord]) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} {}",
        "Solved:".bright_green().bold(),
        colored_guess(word, feedback)
    );
    println!(
        "  Found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "round" } else { "rounds" }
    );

    println!("\n  Guess history:");
    for (i, record) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            record.word.bright_white().bold(),
            record.feedback.to_emoji()
        );
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the end of a lost game
pub fn print_lost(reason: LossReason, rounds: u8, remaining: &[String]) {
    println!("\n{}", "═".repeat(60).red());
    match reason {
        LossReason::Exhausted => println!(
            "  {} after round {rounds}. The feedback may have been entered wrong.",
            "No word matches".red().bold()
        ),
        LossReason::OutOfRounds => println!(
            "  {} after {rounds} rounds",
            "Out of rounds".red().bold()
        ),
    }
    if !remaining.is_empty() {
        println!("  Still possible: {}", remaining.join(", ").yellow());
    }
    println!("{}\n", "═".repeat(60).red());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_guess(&step.word, &step.feedback),
            kind_label(step.kind).bright_black()
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match &result.outcome {
        SolveOutcome::Solved { word, rounds } if *word == result.target => println!(
            "{}",
            format!("Solved in {rounds} rounds").green().bold()
        ),
        SolveOutcome::Solved { word, rounds } => println!(
            "{}",
            format!("Settled on {word} after {rounds} rounds").red().bold()
        ),
        SolveOutcome::Failed { reason, remaining } => {
            let message = match reason {
                LossReason::Exhausted => "Target is not in the dictionary".to_string(),
                LossReason::OutOfRounds => format!(
                    "Out of rounds with {} candidates left",
                    remaining.len()
                ),
            };
            println!("{}", message.red().bold());
        }
    }
}

/// Print the result of a benchmark
#[allow(clippy::cast_precision_loss)] // Word counts are far below 2^52
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if result.total_words == 0 {
        0.0
    } else {
        result.solved as f64 / result.total_words as f64 * 100.0
    };

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({success_rate:.1}%)",
        result.solved.to_string().green()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_rounds.to_string().green());
    println!("   Worst case:       {}", result.max_rounds.to_string().yellow());
    println!("   Explorations:     {}", result.explorations);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=usize::from(MAX_ROUNDS) {
        let count = result.distribution.get(&rounds).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, result.total_words as f64, 40);
        println!("   {rounds}: {} {count:4}", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for failure in result.failures.iter().take(20) {
            println!("   {} ({})", failure.word, failure.guesses.join(" → "));
        }
        if result.failures.len() > 20 {
            println!("   ... and {} more", result.failures.len() - 20);
        }
    }
}

/// Print an opening-word ranking
pub fn print_ranking(ranking: &[RankedWord]) {
    let Some(best) = ranking.first() else {
        return;
    };
    println!("\n{}", "Top guesses:".bright_cyan().bold());
    for (i, row) in ranking.iter().enumerate() {
        println!(
            "  {:>3}. {} {} {:.3}  (rank {})",
            i + 1,
            row.word.bright_white().bold(),
            create_progress_bar(row.score, best.score, 20).green(),
            row.score,
            row.rank
        );
    }
    println!();
}

/// Print the dictionaries available at one word length
pub fn print_lists(lists: &[ListSummary], word_length: usize) {
    println!(
        "\n{}",
        format!("Dictionaries ({word_length} letters):").bright_cyan().bold()
    );
    for list in lists {
        println!("  {:<16} {:>7} words", list.name, list.words);
    }
    println!();
}
