//! TUI rendering with ratatui
//!
//! Layout for the scramble game screen.

use super::app::{App, Flash, MessageStyle};
use crate::engine::game_over_text;
use crate::output::formatters::{spaced, tries_indicator, tries_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Width of one letter box including borders
const BOX_WIDTH: u16 = 5;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Scrambled word
            Constraint::Length(3), // Letter boxes
            Constraint::Length(4), // Score
            Constraint::Min(5),    // Messages
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_word(f, app, chunks[1]);
    render_boxes(f, app, chunks[2]);
    render_score(f, app, chunks[3]);
    render_messages(f, app, chunks[4]);
    render_help(f, app, chunks[5]);

    if app.engine.state().is_game_over() {
        render_game_over(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref error) = app.round_error {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            spaced(&app.word_display()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let paragraph = Paragraph::new(vec![Line::raw(""), line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Scrambled Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_boxes(f: &mut Frame, app: &App, area: Rect) {
    let slots = app.engine.assembler().slots();
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(slots.iter().map(|_| Constraint::Length(BOX_WIDTH)))
        .flex(Flex::Center)
        .split(area);

    for (i, (slot, cell)) in slots.iter().zip(boxes.iter()).enumerate() {
        let border_color = match app.flash {
            Flash::Error => Color::Red,
            Flash::Shake => Color::Magenta,
            Flash::None if i == app.focus => Color::Yellow,
            Flash::None => Color::DarkGray,
        };
        let letter = slot.map(String::from).unwrap_or_default();
        let widget = Paragraph::new(letter)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if i == app.focus {
                        BorderType::Double
                    } else {
                        BorderType::Plain
                    })
                    .style(Style::default().fg(border_color)),
            );
        f.render_widget(widget, *cell);
    }
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let state = app.engine.state();
    let content = vec![
        Line::from(vec![
            Span::raw(format!(
                "{}  ",
                tries_label(state.mistake_count(), state.mistake_limit())
            )),
            Span::styled(
                tries_indicator(state.mistake_count(), state.mistake_limit()),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(vec![
            Span::raw("Words guessed: "),
            Span::styled(
                state.success_count().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.engine.state().is_game_over() {
        "Enter: New Game | Esc: Quit"
    } else if app.engine.is_fetch_in_progress() {
        "Loading word... | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Tab: New Word | Ctrl-N: New Game | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_game_over(f: &mut Frame, app: &App) {
    let area = centered(f.area(), 40, 7);
    let content = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::raw(game_over_text(app.engine.state().success_count())),
        Line::raw("Press Enter for a new game"),
    ];

    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Red)),
    );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
