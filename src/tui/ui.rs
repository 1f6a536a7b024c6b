//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::features::focus::view::{Controls, HistoryView, View, EMPTY_HISTORY};
use crate::tui::app::KEY_HINT;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, view: &View, status: Option<&str>) {
    let completion_height = if view.completion.is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),                 // Timer
            Constraint::Length(completion_height), // Completion message
            Constraint::Min(3),                    // History
            Constraint::Length(1),                 // Weekly stats
            Constraint::Length(1),                 // Status bar
        ])
        .split(frame.area());

    render_timer(frame, view, chunks[0]);
    if let Some(message) = view.completion {
        render_completion(frame, message, chunks[1]);
    }
    render_history(frame, &view.history, chunks[2]);
    render_weekly(frame, &view.weekly, chunks[3]);
    render_status_bar(frame, status, chunks[4]);
}

/// Render the countdown, status line, minutes field, and controls.
fn render_timer(frame: &mut Frame<'_>, view: &View, area: Rect) {
    let accent = if view.running { Color::Green } else { Color::Cyan };

    let lines = vec![
        Line::from(Span::styled(
            view.display.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.status, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::raw("Minutes: "),
            Span::styled(
                format!("[{:>4}]", view.duration_input),
                enabled_style(view.controls.duration_input),
            ),
        ]),
        control_line(view.controls),
    ];

    let timer = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" zentro ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );

    frame.render_widget(timer, area);
}

fn control_line(controls: Controls) -> Line<'static> {
    Line::from(vec![
        Span::styled("[s] Start", enabled_style(controls.start)),
        Span::raw("   "),
        Span::styled("[p] Pause", enabled_style(controls.pause)),
        Span::raw("   "),
        Span::styled("[r] Reset", enabled_style(true)),
    ])
}

fn enabled_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

/// Render the completion message.
fn render_completion(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let panel = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Time for a break ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(panel, area);
}

/// Render the session history.
fn render_history(frame: &mut Frame<'_>, history: &HistoryView, area: Rect) {
    let block = Block::default()
        .title(" Recent Sessions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    match history {
        HistoryView::Empty => {
            let empty = Paragraph::new(EMPTY_HISTORY)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
        }
        HistoryView::Entries(lines) => {
            let items: Vec<ListItem<'_>> = lines
                .iter()
                .map(|line| {
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{:<24}", line.label)),
                        Span::styled(line.duration.as_str(), Style::default().fg(Color::Cyan)),
                    ]))
                })
                .collect();

            frame.render_widget(List::new(items).block(block), area);
        }
    }
}

/// Render the weekly statistic.
fn render_weekly(frame: &mut Frame<'_>, weekly: &str, area: Rect) {
    let stats = Paragraph::new(weekly)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);

    frame.render_widget(stats, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, status: Option<&str>, area: Rect) {
    let status = Paragraph::new(status.unwrap_or(KEY_HINT)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::TimerState;
    use chrono::Local;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(view: &View) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, view, None)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_renders_idle_screen() {
        let view = View::build(&TimerState::idle(25), "25", None, &[], Local::now());
        let text = screen_text(&view);

        assert!(text.contains("25:00"));
        assert!(text.contains("Ready to focus"));
        assert!(text.contains("No sessions yet."));
        assert!(text.contains("0 sessions completed this week"));
    }

    #[test]
    fn test_renders_completion_panel() {
        let view = View::build(
            &TimerState::idle(25),
            "25",
            Some("Your potential is endless."),
            &[],
            Local::now(),
        );
        let text = screen_text(&view);

        assert!(text.contains("Your potential is endless."));
    }
}
