//! TUI rendering with ratatui
//!
//! The tile grid, the hint keyboard, and the message log.

use super::app::{App, MessageStyle};
use crate::core::{LetterResult, WORD_LEN};
use crate::game::{GameSession, MAX_GUESSES};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S, L>(f: &mut Frame, app: &App<S, L>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Grid
            Constraint::Length(5),  // Keyboard
            Constraint::Min(3),     // Messages
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, app.game.session(), chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app.game.session(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app.game.session(), chunks[4]);
}

fn result_style(result: Option<LetterResult>) -> Style {
    match result {
        Some(LetterResult::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
        Some(LetterResult::Miss) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn render_header(f: &mut Frame, session: &GameSession, area: Rect) {
    let header = Paragraph::new(format!("💚 WORDLE · {}", session.day_key()))
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::LightMagenta)),
        );
    f.render_widget(header, area);
}

fn render_grid<S, L>(f: &mut Frame, app: &App<S, L>, area: Rect) {
    let session = app.game.session();
    let revealing_row = app
        .reveal_progress()
        .map(|p| (session.results().len() - 1, (p * WORD_LEN as f64) as usize));

    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for r in 0..MAX_GUESSES {
        let row = session.rows().get(r);
        let score = session.results().get(r);

        let spans: Vec<Span> = (0..WORD_LEN)
            .flat_map(|c| {
                let letter = row.and_then(|row| row.cells()[c]).unwrap_or(' ');
                let shown = match revealing_row {
                    Some((rr, revealed)) if rr == r => c < revealed,
                    _ => true,
                };
                let result = score.filter(|_| shown).map(|s| s.results()[c]);
                [
                    Span::styled(format!(" {letter} "), result_style(result)),
                    Span::raw(" "),
                ]
            })
            .collect();

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, session: &GameSession, area: Rect) {
    let keys = session.key_states();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .map(|ch| Span::styled(format!(" {ch} "), result_style(keys.get(ch))))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S, L>(f: &mut Frame, app: &App<S, L>, area: Rect) {
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

fn render_status(f: &mut Frame, session: &GameSession, area: Rect) {
    let help_text = if session.is_game_over() {
        "Tab: Share | Esc: Quit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let status = Paragraph::new(format!(
        "{}/{MAX_GUESSES} · {help_text}",
        session.guesses_used()
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
