//! Interactive play mode
//!
//! Text loop over a [`Session`]: the engine suggests a guess, the player
//! enters the colors the game showed for it.

use super::rank::RankedWord;
use crate::core::Feedback;
use crate::output::formatters::colored_guess;
use crate::output::{print_lost, print_ranking, print_suggestion, print_won};
use crate::solver::{PositionFrequencies, RandomChoice, Session, SolverError, Step, scoring};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line typed at the feedback prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Quit,
    NewGame,
    /// Shortcut for all-correct feedback
    Win,
    /// Replace the suggested guess
    Use(String),
    Top,
    Help,
    Feedback(Feedback),
}

impl PlayCommand {
    /// Parse one input line; `None` when it is neither a command nor feedback
    ///
    /// ```
    /// use wordle_assist::commands::PlayCommand;
    ///
    /// assert_eq!(PlayCommand::parse("q"), Some(PlayCommand::Quit));
    /// assert_eq!(PlayCommand::parse("use Slate"), Some(PlayCommand::Use("slate".into())));
    /// assert!(matches!(PlayCommand::parse("GY-G-"), Some(PlayCommand::Feedback(_))));
    /// assert_eq!(PlayCommand::parse("hello"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let lower = input.to_lowercase();
        match lower.as_str() {
            "quit" | "q" | "exit" => return Some(Self::Quit),
            "new" | "n" => return Some(Self::NewGame),
            "win" | "correct" | "solved" => return Some(Self::Win),
            "top" | "t" => return Some(Self::Top),
            "help" | "h" | "?" => return Some(Self::Help),
            _ => {}
        }
        if let Some(word) = lower.strip_prefix("use ") {
            return Some(Self::Use(word.trim().to_string()));
        }
        Feedback::parse(input).map(Self::Feedback)
    }
}

/// Games finished during one play run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayStats {
    pub games: usize,
    pub won: usize,
}

/// Run the interactive loop, reading commands from `input`
///
/// With `auto_confirm` unset, every feedback entry is echoed back and must be
/// confirmed before it is applied. End of input quits.
///
/// # Errors
///
/// Returns an error if the session has no dictionary to start from or reading
/// input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop
pub fn run_play<R: RandomChoice>(
    session: &mut Session<R>,
    input: &mut impl BufRead,
    auto_confirm: bool,
) -> Result<PlayStats> {
    println!("\n{}", "Wordle Assistant".bright_cyan().bold());
    println!(
        "{} letters, dictionaries: {}\n",
        session.config().word_length(),
        session.config().dictionaries()
    );
    print_help();

    let mut stats = PlayStats::default();
    let mut step = session.start()?;
    let mut announce = true;

    loop {
        match step {
            Step::Guess(ref suggestion) => {
                if announce {
                    print_suggestion(suggestion);
                }
                announce = true;

                let Some(line) = prompt(input, "Feedback")? else {
                    break;
                };
                let Some(command) = PlayCommand::parse(&line) else {
                    println!("{}", "Invalid input, type 'help' for the options".red());
                    announce = false;
                    continue;
                };

                match command {
                    PlayCommand::Quit => break,
                    PlayCommand::NewGame => {
                        session.reset();
                        step = session.start()?;
                        println!("\nNew game started\n");
                    }
                    PlayCommand::Help => {
                        print_help();
                        announce = false;
                    }
                    PlayCommand::Top => {
                        print_ranking(&top_candidates(session, 5)?);
                        announce = false;
                    }
                    PlayCommand::Use(word) => match session.set_guess(&word) {
                        Ok(chosen) => step = Step::Guess(chosen),
                        Err(e) => {
                            println!("{}", e.to_string().red());
                            announce = false;
                        }
                    },
                    PlayCommand::Win => {
                        let feedback = Feedback::all_correct(session.config().word_length());
                        step = submit(session, &feedback, input, auto_confirm, step);
                    }
                    PlayCommand::Feedback(feedback) => {
                        step = submit(session, &feedback, input, auto_confirm, step);
                    }
                }
            }
            Step::Won {
                ref word,
                ref feedback,
                rounds,
            } => {
                print_won(word, feedback, rounds, session.history());
                stats.games += 1;
                stats.won += 1;
                if !play_again(input)? {
                    break;
                }
                step = session.start()?;
            }
            Step::Lost {
                reason,
                rounds,
                ref remaining,
            } => {
                print_lost(reason, rounds, remaining);
                stats.games += 1;
                if !play_again(input)? {
                    break;
                }
                step = session.start()?;
            }
        }
    }

    println!("\nThanks for playing! {} of {} games won\n", stats.won, stats.games);
    Ok(stats)
}

/// Apply `feedback`, keeping `current` when the player declines or the entry is rejected
fn submit<R: RandomChoice>(
    session: &mut Session<R>,
    feedback: &Feedback,
    input: &mut impl BufRead,
    auto_confirm: bool,
    current: Step,
) -> Step {
    let mut confirm = |guess: &str, feedback: &Feedback| {
        auto_confirm || ask_confirmation(input, guess, feedback)
    };
    match session.submit_confirmed(feedback, &mut confirm) {
        Ok(None) => {
            println!("Not submitted\n");
            current
        }
        Ok(Some(next)) => next,
        Err(e) => {
            println!("{}\n", format!("Feedback rejected: {e}").red());
            current
        }
    }
}

fn ask_confirmation(input: &mut impl BufRead, guess: &str, feedback: &Feedback) -> bool {
    println!("  {}", colored_guess(guess, feedback));
    matches!(
        prompt(input, "Submit this feedback? (y/n)"),
        Ok(Some(answer)) if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    )
}

fn play_again(input: &mut impl BufRead) -> io::Result<bool> {
    Ok(prompt(input, "Play again? (y/n)")?
        .is_some_and(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
}

/// Best `n` remaining candidates, scored the way the next guess is
fn top_candidates<R: RandomChoice>(
    session: &Session<R>,
    n: usize,
) -> Result<Vec<RankedWord>, SolverError> {
    let word_length = session.config().word_length();
    let table = PositionFrequencies::compute(session.candidates(), word_length);
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let feedback = session.history().last().map(|record| &record.feedback);
    Ok(scoring::rank(session.candidates(), feedback, &table)?
        .into_iter()
        .take(n)
        .map(|(entry, score)| RankedWord {
            word: entry.headword().to_string(),
            rank: entry.rank(),
            score,
        })
        .collect())
}

fn print_help() {
    println!("After each guess, enter the colors the game showed:");
    println!("  - G/g/🟩 for green (correct position)");
    println!("  - Y/y/🟨 for yellow (wrong position)");
    println!("  - -/_/⬜ for gray (not in word)");
    println!("Commands: 'win', 'use WORD', 'top', 'new', 'quit'\n");
}

/// Read one trimmed line; `None` at end of input
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::solver::{Phase, SeededRandom, SessionConfig};
    use std::io::Cursor;

    fn session() -> Session<SeededRandom> {
        let words: Vec<WordEntry> = ["crane", "slate", "trace"]
            .iter()
            .map(|w| WordEntry::new(0, w).unwrap())
            .collect();
        Session::with_dictionary(SessionConfig::default(), words, SeededRandom::new(1))
    }

    #[test]
    fn parse_commands() {
        assert_eq!(PlayCommand::parse(" QUIT "), Some(PlayCommand::Quit));
        assert_eq!(PlayCommand::parse("n"), Some(PlayCommand::NewGame));
        assert_eq!(PlayCommand::parse("win"), Some(PlayCommand::Win));
        assert_eq!(PlayCommand::parse("top"), Some(PlayCommand::Top));
        assert_eq!(
            PlayCommand::parse("use  crate"),
            Some(PlayCommand::Use("crate".into()))
        );
        assert_eq!(
            PlayCommand::parse("🟩🟨⬜⬜🟩"),
            Some(PlayCommand::Feedback(Feedback::parse("GY--G").unwrap()))
        );
        assert_eq!(PlayCommand::parse(""), None);
    }

    #[test]
    fn feedback_then_quit() {
        let mut session = session();
        // CRANE against SLATE leaves one candidate
        let mut input = Cursor::new("--G-G\nn\n");
        let stats = run_play(&mut session, &mut input, true).unwrap();

        assert_eq!(stats, PlayStats { games: 1, won: 1 });
        assert_eq!(session.phase(), Phase::Won);
    }

    #[test]
    fn declined_feedback_is_not_applied() {
        let mut session = session();
        let mut input = Cursor::new("--G-G\nno\nquit\n");
        let stats = run_play(&mut session, &mut input, false).unwrap();

        assert_eq!(stats.games, 0);
        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 3);
    }

    #[test]
    fn confirmed_win_shortcut() {
        let mut session = session();
        let mut input = Cursor::new("win\ny\nn\n");
        let stats = run_play(&mut session, &mut input, false).unwrap();

        assert_eq!(stats, PlayStats { games: 1, won: 1 });
        assert_eq!(session.history()[0].word, "CRANE");
    }

    #[test]
    fn bad_entries_keep_the_game_going() {
        let mut session = session();
        let mut input = Cursor::new("hello\nGG\nuse cat\ntop\n");
        let stats = run_play(&mut session, &mut input, true).unwrap();

        assert_eq!(stats.games, 0);
        assert!(session.history().is_empty());
        assert_eq!(session.phase(), Phase::FirstRound);
    }

    #[test]
    fn chosen_word_receives_the_feedback() {
        let mut session = session();
        let mut input = Cursor::new("use trace\n-----\n");
        let stats = run_play(&mut session, &mut input, true).unwrap();

        assert_eq!(stats.games, 1);
        assert_eq!(session.history()[0].word, "TRACE");
        assert_eq!(session.phase(), Phase::Lost);
    }
}
