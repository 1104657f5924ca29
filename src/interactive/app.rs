//! TUI application state and logic

use super::focus;
use super::input::KeyInput;
use crate::engine::{GameEngine, Outcome, RoundEvent, RoundTicket};
use crate::error::{EngineError, WordSourceError};
use crate::source::{WordSource, fetch_with_timeout};
use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub focus: usize,
    pub messages: Vec<Message>,
    pub flash: Flash,
    pub should_quit: bool,
    /// Message of the last failed round start, shown where the word would be
    pub round_error: Option<String>,
}

/// Follow-up work the runtime must perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Fetch a word for this round ticket
    Fetch(RoundTicket),
}

/// Visual feedback on the letter boxes until the next key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    None,
    /// Incomplete guess
    Shake,
    /// Wrong guess
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            focus: 0,
            messages: vec![Message {
                text: "Unscramble the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            flash: Flash::None,
            should_quit: false,
            round_error: None,
        }
    }

    /// Text for the scrambled-word panel
    #[must_use]
    pub fn word_display(&self) -> String {
        if self.engine.is_fetch_in_progress() {
            "...".to_string()
        } else if let Some(scrambled) = self.engine.scrambled() {
            scrambled.to_string()
        } else {
            String::new()
        }
    }

    /// Kick off the first round
    pub fn start(&mut self) -> Option<AppAction> {
        self.request_word()
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyInput) -> Option<AppAction> {
        self.flash = Flash::None;

        match key {
            KeyInput::Quit => {
                self.should_quit = true;
                None
            }
            KeyInput::NewGame => self.new_game(),
            _ if self.engine.state().is_game_over() => match key {
                KeyInput::Enter | KeyInput::Char('n' | 'N') => self.new_game(),
                _ => None,
            },
            KeyInput::Char(c) => {
                self.type_char(c);
                None
            }
            KeyInput::Backspace => {
                self.backspace();
                None
            }
            KeyInput::Left => {
                self.move_focus(self.focus.saturating_sub(1));
                None
            }
            KeyInput::Right => {
                self.move_focus(self.focus + 1);
                None
            }
            KeyInput::Tab => self.request_word(),
            KeyInput::Enter => self.submit(),
        }
    }

    fn type_char(&mut self, c: char) {
        // Spaces never reach a box
        if c.is_whitespace() {
            return;
        }
        if self.engine.set_char(self.focus, c).is_ok() {
            self.focus = focus::after_input(self.focus, self.engine.assembler().len());
        }
    }

    fn backspace(&mut self) {
        if let Ok(was_empty) = self.engine.backspace_slot(self.focus) {
            self.focus = focus::after_backspace(self.focus, was_empty);
        }
    }

    fn move_focus(&mut self, target: usize) {
        self.focus = focus::redirect(target, self.engine.assembler());
    }

    fn submit(&mut self) -> Option<AppAction> {
        match self.engine.submit_guess() {
            Ok(Outcome::Incomplete) => {
                self.flash = Flash::Shake;
                None
            }
            Ok(Outcome::Correct { next_round }) => {
                self.add_message("Correct!", MessageStyle::Success);
                self.focus = 0;
                self.round_error = None;
                Some(AppAction::Fetch(next_round))
            }
            Ok(Outcome::Incorrect { .. }) => {
                self.add_message("Not the word", MessageStyle::Error);
                self.flash = Flash::Error;
                self.focus = 0;
                None
            }
            Ok(Outcome::GameOver { success_count }) => {
                tracing::debug!(success_count, "showing game over");
                None
            }
            Err(EngineError::NoActiveRound) => {
                self.add_message("No word yet. Press Tab to fetch one.", MessageStyle::Info);
                None
            }
            Err(err) => {
                tracing::debug!(%err, "guess ignored");
                None
            }
        }
    }

    fn request_word(&mut self) -> Option<AppAction> {
        if self.engine.is_fetch_in_progress() {
            self.add_message("Already fetching a word...", MessageStyle::Info);
            return None;
        }
        self.focus = 0;
        self.round_error = None;
        self.engine.begin_round().map(AppAction::Fetch)
    }

    fn new_game(&mut self) -> Option<AppAction> {
        self.focus = 0;
        self.round_error = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.engine.reset().map(AppAction::Fetch)
    }

    /// Apply a finished word fetch
    pub fn apply_round(&mut self, ticket: RoundTicket, fetched: Result<String, WordSourceError>) {
        match self.engine.complete_round(ticket, fetched) {
            Ok(RoundEvent::Started { .. }) => {
                self.focus = 0;
                self.round_error = None;
            }
            Ok(RoundEvent::Failed { error }) => {
                self.round_error = Some(error.user_message().to_string());
                self.add_message(error.user_message(), MessageStyle::Error);
            }
            Err(err) => tracing::debug!(%err, "dropping fetch result"),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// A word fetch running on the tokio runtime
struct PendingFetch {
    ticket: RoundTicket,
    handle: JoinHandle<Result<String, WordSourceError>>,
}

fn spawn_fetch<S>(source: &S, timeout: Duration, ticket: RoundTicket) -> PendingFetch
where
    S: WordSource + Clone + Send + Sync + 'static,
{
    let source = source.clone();
    let handle = tokio::spawn(async move { fetch_with_timeout(&source, timeout).await });
    PendingFetch { ticket, handle }
}

async fn wait_for(
    pending: &mut Option<PendingFetch>,
) -> Result<Result<String, WordSourceError>, JoinError> {
    match pending {
        Some(fetch) => (&mut fetch.handle).await,
        None => std::future::pending().await,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<S>(app: App, source: S, fetch_timeout: Duration) -> Result<()>
where
    S: WordSource + Clone + Send + Sync + 'static,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, &source, fetch_timeout).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    mut app: App,
    source: &S,
    fetch_timeout: Duration,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource + Clone + Send + Sync + 'static,
{
    let mut events = EventStream::new();
    let mut pending: Option<PendingFetch> = app
        .start()
        .map(|AppAction::Fetch(ticket)| spawn_fetch(source, fetch_timeout, ticket));

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    // Only process key press events (fixes Windows double-input bug)
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(AppAction::Fetch(ticket)) =
                            KeyInput::from_key_event(key).and_then(|input| app.handle_key(input))
                        {
                            pending = Some(spawn_fetch(source, fetch_timeout, ticket));
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            joined = wait_for(&mut pending), if pending.is_some() => {
                if let Some(fetch) = pending.take() {
                    let fetched = joined.unwrap_or_else(|e| {
                        Err(WordSourceError::Network(format!("fetch task failed: {e}")))
                    });
                    app.apply_round(fetch.ticket, fetched);
                }
            }
        }

        if app.should_quit {
            if let Some(fetch) = pending.take() {
                fetch.handle.abort();
                app.engine.abandon_round(fetch.ticket)?;
            }
            break;
        }
    }

    Ok(())
}
