//! TUI rendering with ratatui
//!
//! Gallows, word and letters for the full-screen interface.

use super::app::{App, MessageStyle};
use crate::core::{GameStatus, MAX_ERRORS};
use crate::output::formatters::format_used_letters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word and messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.game.status() {
        GameStatus::Playing => Color::White,
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
    };

    let lines: Vec<Line> = app
        .drawings
        .stage(app.game.errors())
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().fg(color)).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(3), // Used letters
            Constraint::Length(3), // Error budget
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_used_letters(f, app, chunks[1]);
    render_budget(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    // Spaced out so neighbouring placeholders stay countable
    let spaced: String = app
        .game
        .revealed()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let content = Line::from(vec![Span::styled(
        spaced,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" Word ({} letters) ", app.game.secret().len()))
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_used_letters(f: &mut Frame, app: &App, area: Rect) {
    let letters = format_used_letters(&app.game);
    let paragraph = Paragraph::new(letters).block(
        Block::default()
            .title(" Used letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.game.remaining_errors();
    let percent = (remaining * 100 / MAX_ERRORS) as u16;

    let color = match remaining {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Errors left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_ERRORS}"));
    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = if app.game.is_over() {
        (" Ctrl-N: new game | Esc: quit ", Color::Green)
    } else {
        (" Letter or whole word, then Enter ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let win_rate = if app.stats.total_games > 0 {
        app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
    } else {
        0.0
    };

    let status = Paragraph::new(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}% | Esc: Quit",
        app.stats.total_games, app.stats.games_won, win_rate
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    f.render_widget(status, area);
}
