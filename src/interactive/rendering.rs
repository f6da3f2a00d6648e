//! TUI rendering with ratatui
//!
//! Visualizations for the recommender interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, MAX_TURNS, Tile, WORD_LENGTH, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE RECOMMENDER - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_TURNS as u16 + 2), // Guess grid
            Constraint::Min(7),                       // Current guess info
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_current_guess(f, app, chunks[1]);
}

fn tile_style(tile: Tile) -> Style {
    let bg = match tile {
        Tile::Hit => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Miss => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile_spans(word: &Word, feedback: Feedback, cursor: Option<usize>) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (i, (letter, &tile)) in word.text().chars().zip(feedback.tiles()).enumerate() {
        let mut style = tile_style(tile);
        if cursor == Some(i) {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

/// One row per turn: played guesses, the row being edited, then empty rows
fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let mut lines: Vec<Line> = history
        .iter()
        .map(|record| Line::from(tile_spans(&record.guess, record.feedback, None)))
        .collect();

    if app.input_mode != InputMode::Finished
        && let Some(guess) = &app.guess
    {
        let cursor = (app.input_mode == InputMode::Tiles).then_some(app.cursor);
        lines.push(Line::from(tile_spans(guess, app.tiles, cursor)));
    }

    while lines.len() < MAX_TURNS {
        lines.push(Line::from(Span::styled(
            " ·  ·  ·  ·  · ",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Turn {}/{MAX_TURNS} ", app.session.turn().min(MAX_TURNS)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let (Some(guess), Some(metrics)) = (&app.guess, &app.metrics) else {
        let text = if app.session.is_solved() {
            "Solved!"
        } else {
            "No suggestion available"
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let suggested = app.session.suggestion() == Some(guess);
    let entropy_bar_len = (metrics.entropy * 2.0).min(16.0) as usize;
    let entropy_bar =
        "█".repeat(entropy_bar_len) + &"░".repeat(16_usize.saturating_sub(entropy_bar_len));

    let content = vec![
        Line::from(vec![
            Span::raw(if suggested { "Suggested: " } else { "Playing:   " }),
            Span::styled(
                guess.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Entropy:   [{entropy_bar}] {:.3} bits",
            metrics.entropy
        )),
        Line::from(format!("Info gain: {:.1}x reduction", metrics.entropy.exp2())),
        Line::from(format!(
            "Expected:  {:.1} candidates remain",
            metrics.expected_remaining
        )),
        Line::from(format!("Worst:     {} candidates", metrics.max_partition)),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Percentage(50), // Candidates / ranked guesses
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.lists().possible_answers().len();
    let remaining = app.session.candidates().len();
    let total_bits = (total as f64).log2();
    let bits_gained = if remaining > 0 {
        total_bits - (remaining as f64).log2()
    } else {
        total_bits
    };
    let progress_pct = if total_bits > 0.0 {
        ((bits_gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {remaining} candidates remain"
        ));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();

    let mut lines = if candidates.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if candidates.len() <= 12 {
        candidates
            .iter()
            .map(|candidate| {
                Line::from(Span::styled(
                    format!("  • {}", candidate.text().to_uppercase()),
                    Style::default().fg(Color::Green),
                ))
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (candidates.len() as f64).log2()
            )),
        ]
    };

    if !app.ranked.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Top guesses:",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (word, entropy) in &app.ranked {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<5}", word.to_uppercase())),
                Span::styled(format!(" {entropy:.3}b"), Style::default().fg(Color::Cyan)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL),
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Finished => (
            " Game over ",
            "Press 'n' for new game, 'u' to undo, or 'q' to quit".to_string(),
            Color::Green,
        ),
        InputMode::Tiles => (
            " Feedback ",
            "←/→ move | Space/↑/↓ or 1-5 cycle | g/y/- set | Enter submit | Tab own word"
                .to_string(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word to Try (5 letters) | ESC to cancel ",
            app.manual_word.to_uppercase(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let opening = Paragraph::new(format!(
        "Opening: {}",
        app.session.opening().text().to_uppercase()
    ))
    .alignment(Alignment::Center);
    f.render_widget(opening, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.session.candidates().len());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Game | u: Undo")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
