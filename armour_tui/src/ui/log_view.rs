//! Message log view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .message_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if line.contains("Error") || line.contains("Failed") {
                Style::default().fg(Color::Red)
            } else if line.contains("Warning") || line.contains("invalid syntax") {
                Style::default().fg(Color::Yellow)
            } else if line.contains("▶") {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if line.starts_with("  ") {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Log ({} hits recorded) ", app.reports.len())),
    );

    f.render_widget(list, area);
}
