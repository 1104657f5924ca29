//! Async driver pairing the engine with a word source
//!
//! Runs each requested fetch to completion (bounded by the fetch timeout)
//! before returning, so callers only ever see settled state.

use std::time::Duration;

use crate::config::GameConfig;
use crate::engine::{GameEngine, Outcome, RoundEvent, RoundTicket};
use crate::error::EngineError;
use crate::source::{WordSource, fetch_with_timeout};

/// What one submission produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub outcome: Outcome,
    /// The follow-up round start after a correct guess
    pub round: Option<RoundEvent>,
}

/// Engine plus word source
#[derive(Debug)]
pub struct Session<S> {
    engine: GameEngine,
    source: S,
    fetch_timeout: Duration,
}

impl<S: WordSource> Session<S> {
    pub fn new(engine: GameEngine, source: S, fetch_timeout: Duration) -> Self {
        Self {
            engine,
            source,
            fetch_timeout,
        }
    }

    /// Build an engine from `config` and wrap it
    pub fn from_config(config: &GameConfig, source: S, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => GameEngine::seeded(config, seed),
            None => GameEngine::new(config),
        };
        Self::new(engine, source, config.fetch_timeout())
    }

    pub const fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Start a fresh round ("get another word")
    ///
    /// # Errors
    /// See [`GameEngine::complete_round`].
    pub async fn next_word(&mut self) -> Result<Option<RoundEvent>, EngineError> {
        match self.engine.begin_round() {
            Some(ticket) => self.run_fetch(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Reset counters and start the first round of a new game
    ///
    /// # Errors
    /// See [`GameEngine::complete_round`].
    pub async fn new_game(&mut self) -> Result<Option<RoundEvent>, EngineError> {
        match self.engine.reset() {
            Some(ticket) => self.run_fetch(ticket).await.map(Some),
            None => Ok(None),
        }
    }

    /// Evaluate a whole guess, fetching the next word on success
    ///
    /// # Errors
    /// See [`GameEngine::evaluate`].
    pub async fn guess(&mut self, guess: &str) -> Result<Submission, EngineError> {
        let outcome = self.engine.evaluate(Some(guess))?;
        self.follow_up(outcome).await
    }

    /// Evaluate the engine's assembled slots
    ///
    /// # Errors
    /// See [`GameEngine::evaluate`].
    pub async fn submit(&mut self) -> Result<Submission, EngineError> {
        let outcome = self.engine.submit_guess()?;
        self.follow_up(outcome).await
    }

    async fn follow_up(&mut self, outcome: Outcome) -> Result<Submission, EngineError> {
        let round = match outcome {
            Outcome::Correct { next_round } => Some(self.run_fetch(next_round).await?),
            _ => None,
        };
        Ok(Submission { outcome, round })
    }

    async fn run_fetch(&mut self, ticket: RoundTicket) -> Result<RoundEvent, EngineError> {
        let fetched = fetch_with_timeout(&self.source, self.fetch_timeout).await;
        self.engine.complete_round(ticket, fetched)
    }
}
