//! TUI rendering with ratatui
//!
//! Tiles, clock and found words for Slice Mode.

use super::app::{App, MessageStyle};
use crate::game::{GameOverReason, SessionState};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
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
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    if app.is_over() {
        render_game_over(f, app, main_chunks[0]);
    } else {
        render_board(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚔ WORDRONIN - Slice Mode")
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

fn render_board<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    render_tiles(f, app, chunks[0]);
    render_found(f, app, chunks[1]);
}

fn render_tiles<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let letters = app.session.round().letters();

    let mut tiles = Vec::with_capacity(letters.len() * 2);
    let mut numbers = Vec::with_capacity(letters.len() * 2);
    for (i, &letter) in letters.iter().enumerate() {
        let style = if app.is_selected(i) {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        tiles.push(Span::styled(format!("[{letter}]"), style));
        tiles.push(Span::raw(" "));
        numbers.push(Span::styled(
            format!("{:^3} ", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let content = vec![
        Line::from(""),
        Line::from(tiles).alignment(Alignment::Center),
        Line::from(numbers).alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Round {} ", app.session.rounds_played()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_found<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let round = app.session.round();

    let items: Vec<ListItem> = round
        .found_in_order()
        .iter()
        .rev()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{word:<10}"), Style::default().fg(Color::Green)),
                Span::styled(
                    format!(" +{}", crate::core::points_for_word(word.chars().count())),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        round.found().len(),
        round.possible().len()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_game_over<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (banner, color) = match app.session.state() {
        SessionState::GameOver(GameOverReason::AllRoundsCleared) => {
            ("🎉 ALL ROUNDS CLEARED! 🎉", Color::Green)
        }
        _ => ("⏰ TIME'S UP", Color::Red),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            banner,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Final score: {}", app.session.total_score())),
    ];

    for (i, summary) in app.session.summaries().iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Round {}: {} ({} pts)", i + 1, summary.base_word, summary.score),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::raw("Found: "),
            Span::styled(summary.found.join(", "), Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Missed: "),
            Span::styled(
                summary.missing.join(", "),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Clock
            Constraint::Length(5), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_clock(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_clock<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let countdown = app.session.countdown();
    let remaining = countdown.remaining();
    let percent = clock_percent(remaining, app.session.config().round_duration);

    let color = if countdown.is_warning() || countdown.is_expired() {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}s"));
    f.render_widget(gauge, area);
}

/// Share of the round left, 0 to 100
fn clock_percent(remaining: u32, duration: u32) -> u16 {
    let duration = u64::from(duration.max(1));
    let remaining = u64::from(remaining).min(duration);
    u16::try_from(remaining * 100 / duration).unwrap_or(100)
}

fn render_score<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let round = app.session.round();

    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                app.session.total_score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Round:  {} / {}", round.score(), round.max_score())),
        Line::from(format!(
            "Rounds: {} of {}",
            app.session.rounds_played(),
            app.session.config().rounds
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, content, color) = if app.is_over() {
        (
            " Tab/n: New Game | q: Quit ".to_string(),
            String::new(),
            Color::Green,
        )
    } else {
        (
            format!(
                " Word (min {} letters) | Enter: Slice | Backspace: Undo letter ",
                app.session.round().min_length()
            ),
            app.current_word(),
            Color::Yellow,
        )
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

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = if app.is_over() {
        "Mode: Game Over"
    } else {
        "Mode: Playing"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let missing = app.session.round().missing().len();
    let missing = Paragraph::new(format!("Words left: {missing}")).alignment(Alignment::Center);
    f.render_widget(missing, chunks[1]);

    let help = Paragraph::new("Esc: Clear/Quit | Tab: New Game | 1-9: Tile")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_percent_scales() {
        assert_eq!(clock_percent(60, 60), 100);
        assert_eq!(clock_percent(30, 60), 50);
        assert_eq!(clock_percent(0, 60), 0);
        assert_eq!(clock_percent(5, 0), 100);
    }

    #[test]
    fn clock_percent_long_rounds() {
        assert_eq!(clock_percent(50_000_000, 50_000_000), 100);
        assert_eq!(clock_percent(25_000_000, 50_000_000), 50);
        assert_eq!(clock_percent(u32::MAX, u32::MAX), 100);
    }
}
