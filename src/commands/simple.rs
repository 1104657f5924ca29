//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one whole guess per line.

use crate::core::SlotError;
use crate::engine::GameEngine;
use crate::output::formatters::tries_label;
use crate::output::{print_banner, print_goodbye, print_round, print_submission};
use crate::session::Session;
use crate::source::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Type a whole guess into the engine's slots, one character per slot
///
/// Slots are cleared first. A guess shorter than the word leaves the last
/// slot empty, which the engine reports as incomplete.
///
/// # Errors
///
/// Returns `SlotError` for whitespace or for more characters than slots.
pub fn enter_guess(engine: &mut GameEngine, guess: &str) -> Result<(), SlotError> {
    engine.clear_slots();
    for (i, ch) in guess.chars().enumerate() {
        if let Err(err) = engine.set_char(i, ch) {
            engine.clear_slots();
            return Err(err);
        }
    }
    Ok(())
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// engine rejects a round result.
pub async fn run_simple<S: WordSource>(session: &mut Session<S>) -> Result<()> {
    print_banner(session.engine().state().mistake_limit());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if let Some(event) = session.next_word().await? {
        print_round(&event);
    }

    loop {
        if session.engine().state().is_game_over() {
            let Some(answer) = prompt(&mut lines, "Play again? (yes/no)").await? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                println!("\n🔄 New game started!\n");
                if let Some(event) = session.new_game().await? {
                    print_round(&event);
                }
                continue;
            }
            print_goodbye();
            return Ok(());
        }

        if session.engine().current_word().is_none() {
            let Some(answer) = prompt(&mut lines, "Press Enter to try again, or 'quit'").await?
            else {
                return Ok(());
            };
            if is_quit(&answer) {
                print_goodbye();
                return Ok(());
            }
            if let Some(event) = session.next_word().await? {
                print_round(&event);
            }
            continue;
        }

        let state = session.engine().state();
        let label = format!(
            "Your guess {}",
            tries_label(state.mistake_count(), state.mistake_limit()).dimmed()
        );
        let Some(input) = prompt(&mut lines, &label).await? else {
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            cmd if is_quit(cmd) => {
                print_goodbye();
                return Ok(());
            }
            "new" | "n" => {
                println!("\n🔄 New game started!\n");
                if let Some(event) = session.new_game().await? {
                    print_round(&event);
                }
            }
            "skip" | "s" => {
                if let Some(event) = session.next_word().await? {
                    print_round(&event);
                }
            }
            _ => {
                if let Err(err) = enter_guess(session.engine_mut(), &input) {
                    println!("{} {err}\n", "❌".red());
                    continue;
                }
                match session.submit().await {
                    Ok(submission) => print_submission(&submission, session.engine().state()),
                    Err(err) => println!("{} {err}\n", "❌".red()),
                }
            }
        }
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

/// Prompt and read one trimmed line; `None` at end of input
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush()?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::engine::Outcome;

    fn engine_with_word(word: &str) -> GameEngine {
        let mut engine = GameEngine::seeded(&GameConfig::default(), 2);
        let ticket = engine.begin_round().unwrap();
        engine.complete_round(ticket, Ok(word.to_string())).unwrap();
        engine
    }

    #[test]
    fn enter_guess_fills_slots() {
        let mut engine = engine_with_word("purple");
        enter_guess(&mut engine, "purple").unwrap();
        assert!(matches!(engine.submit_guess(), Ok(Outcome::Correct { .. })));
    }

    #[test]
    fn short_guess_is_incomplete() {
        let mut engine = engine_with_word("purple");
        enter_guess(&mut engine, "pur").unwrap();
        assert_eq!(engine.submit_guess(), Ok(Outcome::Incomplete));
        assert_eq!(engine.state().mistake_count(), 0);
    }

    #[test]
    fn long_guess_is_rejected() {
        let mut engine = engine_with_word("purple");
        assert_eq!(
            enter_guess(&mut engine, "purples"),
            Err(SlotError::OutOfRange { index: 6, len: 6 })
        );
        assert!(engine.assembler().slots().iter().all(Option::is_none));
    }

    #[test]
    fn guess_with_space_is_rejected() {
        let mut engine = engine_with_word("purple");
        assert_eq!(enter_guess(&mut engine, "pur le"), Err(SlotError::Whitespace));
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("quiet"));
    }
}
