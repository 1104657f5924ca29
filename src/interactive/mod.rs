//! Interactive terminal UI
//!
//! Letter boxes, score and messages rendered with ratatui; the word fetch
//! runs on the tokio runtime while keys keep flowing.

mod app;
pub mod focus;
mod input;
mod rendering;

pub use app::{App, AppAction, Flash, Message, MessageStyle, run_tui};
pub use input::KeyInput;
