//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
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
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 COUNTDOWN - Letters Round")
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

fn render_board_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Letters
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn letter_span(letter: Option<char>) -> Span<'static> {
    match letter {
        Some(c) => Span::styled(
            format!(" {c} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let mut letters = app.state.current_letters.chars();
    let mut tiles = Vec::with_capacity(app.rules.max_letters_total * 2);
    for _ in 0..app.rules.max_letters_total {
        tiles.push(letter_span(letters.next()));
        tiles.push(Span::raw(" "));
    }

    let per_type = app.rules.max_letters_per_type;
    let content = vec![
        Line::from(""),
        Line::from(tiles).alignment(Alignment::Center),
        Line::from(""),
        Line::from(format!(
            "Vowels {}/{per_type}   Consonants {}/{per_type}",
            app.state.used_vowels.len(),
            app.state.used_consonants.len()
        ))
        .alignment(Alignment::Center),
    ];

    let title = format!(" Round {} of {} ", app.state.round, app.rules.max_rounds);
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .map(|entry| {
            let (mark, style) = if entry.valid {
                ("✓", Style::default().fg(Color::Green))
            } else {
                ("✗", Style::default().fg(Color::Red))
            };
            let best = entry
                .longest_word
                .as_deref()
                .map_or_else(|| "-".to_string(), str::to_uppercase);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}: {:<9} ", entry.round, entry.letters)),
                Span::styled(format!("{mark} {:<9}", entry.guess.to_uppercase()), style),
                Span::styled(format!(" best {best}"), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" Rounds ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Length(3), // Rounds gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let score = Paragraph::new(Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            app.state.score.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, chunks[0]);

    render_round_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_round_progress(f: &mut Frame, app: &App, area: Rect) {
    let played = app.history.len().min(usize::from(app.rules.max_rounds));
    let max = usize::from(app.rules.max_rounds).max(1);
    let percent = u16::try_from(played * 100 / max).unwrap_or(100);

    let gauge = Gauge::default()
        .block(Block::default().title(" Rounds Played ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{played}/{}", app.rules.max_rounds));
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
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " 🏁 GAME OVER 🏁 | Press 'r' for a new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Drawing => (
            " Draw: 'v' vowel, 'c' consonant | TAB to guess ",
            "",
            Color::Yellow,
        ),
        InputMode::Guessing => (
            " Enter your word | ENTER to submit, ESC to cancel ",
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
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
    let help_text = match app.input_mode {
        InputMode::GameOver => "r: New Game | q: Quit",
        InputMode::Drawing => "v: Vowel | c: Consonant | TAB: Guess | r: Reset | q: Quit",
        InputMode::Guessing => "Enter: Submit | Esc: Back | Ctrl-C: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
