//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use crate::solver::GuessKind;
use colored::{ColoredString, Colorize};

/// Render each letter of `word` on its feedback color
#[must_use]
pub fn colored_guess(word: &str, feedback: &Feedback) -> String {
    word.chars()
        .zip(feedback.marks())
        .map(|(letter, &mark)| colored_letter(letter, mark).to_string())
        .collect()
}

fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Correct => cell.black().on_green().bold(),
        Mark::Present => cell.black().on_yellow().bold(),
        Mark::Absent => cell.white().on_bright_black(),
    }
}

/// Short label shown next to a suggested guess
#[must_use]
pub const fn kind_label(kind: GuessKind) -> &'static str {
    match kind {
        GuessKind::Opening => "opening",
        GuessKind::Scored => "best score",
        GuessKind::Exploration => "exploring new letters",
        GuessKind::Chosen => "your choice",
    }
}

/// Create a progress bar string
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)] // Clamped to [0, width]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_handles_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        let rendered = colored_guess("crane", &Feedback::parse("G-Y--").unwrap());
        assert_eq!(rendered, " C  R  A  N  E ");
    }
}
