//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{LetterCell, Status};
use crate::output::formatters::{KEYBOARD_ROWS, KeyHint, key_hint, status_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Status line
            Constraint::Min(10),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_status_line(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Keyboard + messages
        ])
        .split(chunks[2]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let mut text = status_line(&app.engine, app.last_notification.message());
    if app.cheated
        && let Some(secret) = app.engine.secret()
    {
        text = format!("{text}\tYou cheated! The secret word is: {secret}");
    }
    let text = text.replace('\t', "    ");

    let color = if app.last_notification.is_illegal() {
        Color::Red
    } else {
        Color::White
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn cell_style(cell: &LetterCell) -> Style {
    let style = match cell.status() {
        Status::RightPos => Style::default().fg(Color::Black).bg(Color::Green),
        Status::WrongPos => Style::default().fg(Color::Black).bg(Color::Yellow),
        Status::Empty if cell.is_unset() => Style::default().fg(Color::DarkGray),
        Status::Empty => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let current = engine.num_attempts();

    let mut lines = vec![Line::from("")];
    for (attempt, row) in engine.rows().iter().enumerate() {
        let mut spans = vec![Span::raw("  ")];
        for (pos, cell) in row.iter().enumerate() {
            let is_cursor =
                !engine.is_over() && attempt == current && pos == engine.cursor_pos();
            let text = match cell.char() {
                Some(ch) => format!(" {ch} "),
                None if is_cursor => " _ ".to_string(),
                None => " · ".to_string(),
            };
            spans.push(Span::styled(text, cell_style(cell)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn key_style(hint: KeyHint) -> Style {
    match hint {
        KeyHint::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyHint::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyHint::Used => Style::default().fg(Color::DarkGray),
        KeyHint::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for keys in KEYBOARD_ROWS {
        let mut spans = vec![Span::raw(" ")];
        for ch in keys.chars() {
            spans.push(Span::styled(
                format!(" {ch} "),
                key_style(key_hint(&app.engine, ch)),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let distribution: Vec<String> = app.stats.guess_distribution[1..]
        .iter()
        .enumerate()
        .map(|(i, count)| format!("{}:{count}", i + 1))
        .collect();
    let dist = Paragraph::new(distribution.join(" ")).alignment(Alignment::Center);
    f.render_widget(dist, chunks[1]);

    let help_text = if app.engine.is_over() {
        "n: New Game | q: Quit"
    } else {
        "A-Z: Type | Enter: Guess | Ctrl-N: New | Ctrl-R: Cheat | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
