//! Game state engine
//!
//! Turns completed guesses into outcomes and drives the round lifecycle.

mod game;
mod outcome;
mod state;

pub use game::GameEngine;
pub use outcome::{Outcome, RoundEvent, RoundTicket, game_over_text};
pub use state::GameState;
