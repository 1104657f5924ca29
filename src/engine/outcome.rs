//! Values the engine hands to the presentation layer

use crate::error::RoundError;

/// Handle for one outstanding word fetch
///
/// Returned by the engine when a fetch must be started; the fetch result is
/// handed back together with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundTicket(pub(crate) u64);

impl RoundTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to evaluate yet; inputs should shake
    Incomplete,
    /// Guess matched; a new round was requested with `next_round`
    Correct { next_round: RoundTicket },
    /// Guess missed and tries remain
    Incorrect {
        mistake_count: u32,
        mistake_limit: u32,
    },
    /// Final allowed guess missed
    GameOver { success_count: u32 },
}

impl Outcome {
    /// Short status line in the game's wording
    #[must_use]
    pub fn status_text(&self) -> String {
        match self {
            Self::Incomplete => "Fill in every letter first".to_string(),
            Self::Correct { .. } => "Correct!".to_string(),
            Self::Incorrect { .. } => "Not the word".to_string(),
            Self::GameOver { success_count } => game_over_text(*success_count),
        }
    }
}

/// Game-over overlay text
#[must_use]
pub fn game_over_text(success_count: u32) -> String {
    format!("You guessed {success_count} words")
}

/// Result of applying a word fetch to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// A round is live; show `scrambled`
    Started { scrambled: String },
    /// No round; counters untouched and the fetch flag is clear
    Failed { error: RoundError },
}
