//! Guess evaluation and round lifecycle
//!
//! The engine never performs I/O. Starting a round hands out a
//! [`RoundTicket`]; the caller fetches a word however it likes and passes the
//! result back through [`GameEngine::complete_round`]. At most one fetch is
//! outstanding at any time.

use super::outcome::{Outcome, RoundEvent, RoundTicket};
use super::state::GameState;
use crate::config::GameConfig;
use crate::core::{GuessAssembler, Scrambler, SlotError, Word};
use crate::error::{EngineError, RoundError, WordSourceError};
use rand::Rng;
use rand::rngs::StdRng;

/// The live round: answer plus the scramble on display
#[derive(Debug, Clone)]
struct Round {
    word: Word,
    scrambled: String,
}

/// Game state engine
///
/// Owns the counters, the guess slots, the scrambler and the current round.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    state: GameState,
    assembler: GuessAssembler,
    scrambler: Scrambler<R>,
    round: Option<Round>,
    pending: Option<RoundTicket>,
    next_ticket: u64,
}

impl GameEngine<StdRng> {
    /// Create an engine with an OS-seeded scrambler
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_scrambler(config, Scrambler::from_entropy())
    }

    /// Create an engine whose scrambles are reproducible
    #[must_use]
    pub fn seeded(config: &GameConfig, seed: u64) -> Self {
        Self::with_scrambler(config, Scrambler::seeded(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine around a given scrambler
    pub fn with_scrambler(config: &GameConfig, scrambler: Scrambler<R>) -> Self {
        Self {
            state: GameState::new(config.mistake_limit),
            assembler: GuessAssembler::new(config.word_length),
            scrambler,
            round: None,
            pending: None,
            next_ticket: 0,
        }
    }

    #[inline]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub const fn assembler(&self) -> &GuessAssembler {
        &self.assembler
    }

    /// Answer of the live round, if any
    pub fn current_word(&self) -> Option<&Word> {
        self.round.as_ref().map(|round| &round.word)
    }

    /// Scramble of the live round, if any
    pub fn scrambled(&self) -> Option<&str> {
        self.round.as_ref().map(|round| round.scrambled.as_str())
    }

    /// True while a word fetch is outstanding
    #[inline]
    pub const fn is_fetch_in_progress(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the outstanding fetch
    #[inline]
    pub const fn pending_ticket(&self) -> Option<RoundTicket> {
        self.pending
    }

    /// Write one character of input into a slot
    ///
    /// # Errors
    /// See [`GuessAssembler::set_slot`].
    pub fn set_slot(&mut self, index: usize, input: &str) -> Result<(), SlotError> {
        self.assembler.set_slot(index, input)
    }

    /// Write a character into a slot
    ///
    /// # Errors
    /// See [`GuessAssembler::set_char`].
    pub fn set_char(&mut self, index: usize, ch: char) -> Result<(), SlotError> {
        self.assembler.set_char(index, ch)
    }

    /// Empty a slot; returns `true` if it was already empty
    ///
    /// # Errors
    /// See [`GuessAssembler::backspace_slot`].
    pub fn backspace_slot(&mut self, index: usize) -> Result<bool, SlotError> {
        self.assembler.backspace_slot(index)
    }

    /// Empty every guess slot
    pub fn clear_slots(&mut self) {
        self.assembler.clear();
    }

    /// Ask for a new round
    ///
    /// Returns `Some(ticket)` when the caller must fetch a word now, or `None`
    /// when a fetch is already outstanding (its result will start the round).
    /// The current round is dropped immediately either way.
    pub fn begin_round(&mut self) -> Option<RoundTicket> {
        if let Some(ticket) = self.pending {
            tracing::debug!(ticket = ticket.id(), "fetch already in progress");
            self.round = None;
            return None;
        }
        Some(self.request_round())
    }

    fn request_round(&mut self) -> RoundTicket {
        let ticket = RoundTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.round = None;
        self.assembler.clear();
        tracing::debug!(ticket = ticket.id(), "round requested");
        ticket
    }

    /// Apply the result of the fetch started for `ticket`
    ///
    /// On success the word is scrambled, the slots are re-shaped to its length
    /// and the round goes live. On failure no round is active and counters are
    /// untouched. Either way the fetch flag is cleared.
    ///
    /// # Errors
    /// Returns `EngineError::StaleTicket` if `ticket` is not the outstanding
    /// fetch; the engine is left unchanged.
    pub fn complete_round(
        &mut self,
        ticket: RoundTicket,
        fetched: Result<String, WordSourceError>,
    ) -> Result<RoundEvent, EngineError> {
        if self.pending != Some(ticket) {
            return Err(EngineError::StaleTicket);
        }
        self.pending = None;

        let word = fetched
            .map_err(RoundError::from)
            .and_then(|text| Word::new(text).map_err(RoundError::from));

        match word {
            Ok(word) => {
                let scrambled = self.scrambler.scramble_word(&word);
                self.assembler.resize(word.len());
                tracing::debug!(ticket = ticket.id(), %scrambled, "round started");
                self.round = Some(Round {
                    word,
                    scrambled: scrambled.clone(),
                });
                Ok(RoundEvent::Started { scrambled })
            }
            Err(error) => {
                tracing::warn!(ticket = ticket.id(), %error, "round failed to start");
                self.round = None;
                Ok(RoundEvent::Failed { error })
            }
        }
    }

    /// Give up on the outstanding fetch without starting a round
    ///
    /// # Errors
    /// Returns `EngineError::StaleTicket` if `ticket` is not outstanding.
    pub fn abandon_round(&mut self, ticket: RoundTicket) -> Result<(), EngineError> {
        if self.pending != Some(ticket) {
            return Err(EngineError::StaleTicket);
        }
        tracing::debug!(ticket = ticket.id(), "round abandoned");
        self.pending = None;
        Ok(())
    }

    /// Evaluate a guess against the live round
    ///
    /// Checks run in a fixed order so exactly one outcome fires: empty guess,
    /// exact match, final allowed miss, ordinary miss. The final miss ends the
    /// game without incrementing the mistake counter.
    ///
    /// # Errors
    /// - `EngineError::GameOver` once the game has ended
    /// - `EngineError::NoActiveRound` when no word is live
    pub fn evaluate(&mut self, guess: Option<&str>) -> Result<Outcome, EngineError> {
        let Some(guess) = guess.filter(|g| !g.is_empty()) else {
            return Ok(Outcome::Incomplete);
        };

        if self.state.is_game_over() {
            return Err(EngineError::GameOver {
                success_count: self.state.success_count(),
            });
        }

        let round = self.round.as_ref().ok_or(EngineError::NoActiveRound)?;

        if round.word.matches(guess) {
            self.state.record_success();
            let next_round = self.request_round();
            tracing::info!(successes = self.state.success_count(), "word guessed");
            return Ok(Outcome::Correct { next_round });
        }

        if self.state.on_last_try() {
            self.state.end_game();
            tracing::info!(successes = self.state.success_count(), "game over");
            return Ok(Outcome::GameOver {
                success_count: self.state.success_count(),
            });
        }

        self.state.record_mistake();
        self.assembler.clear();
        tracing::info!(
            mistakes = self.state.mistake_count(),
            limit = self.state.mistake_limit(),
            "wrong guess"
        );
        Ok(Outcome::Incorrect {
            mistake_count: self.state.mistake_count(),
            mistake_limit: self.state.mistake_limit(),
        })
    }

    /// Assemble the slots and evaluate the result
    ///
    /// # Errors
    /// See [`GameEngine::evaluate`].
    pub fn submit_guess(&mut self) -> Result<Outcome, EngineError> {
        let guess = self.assembler.assemble();
        self.evaluate(guess.as_deref())
    }

    /// Start over: zero counters, clear slots and ask for a new round
    ///
    /// Legal in every state. Returns the ticket to fetch for, or `None` when
    /// an outstanding fetch will supply the new game's first word.
    pub fn reset(&mut self) -> Option<RoundTicket> {
        self.state.reset();
        self.assembler.clear();
        tracing::info!("new game");
        self.begin_round()
    }
}
