//! UI rendering

mod armour_view;
mod help_view;
mod log_view;
mod roster_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Roster => roster_view::draw(f, app, chunks[1]),
        Tab::Armour => armour_view::draw(f, app, chunks[1]),
        Tab::Log => log_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);

    if app.prompt.is_some() {
        draw_prompt(f, app, f.area());
    }
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = if app.prompt.is_some() {
        vec![("Enter", "Confirm"), ("Esc", "Cancel")]
    } else {
        match app.current_tab {
            Tab::Roster => vec![
                ("↑/↓", "Character"),
                ("←/→", "Slot"),
                ("Space", "ATK/DMG"),
                ("p/s/b/m", "Calculate"),
                ("e/u", "Equip/Unequip"),
            ],
            Tab::Armour => vec![("↑/↓", "Scroll"), ("l", "Load armour")],
            Tab::Log => vec![("↑/↓", "Scroll log"), ("j", "Export hits")],
            Tab::Help => vec![],
        }
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Homebrew Armour "))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

fn draw_prompt(f: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = app.prompt else {
        return;
    };
    let popup = centered_rect(60, 3, area);

    let line = Line::from(vec![
        Span::styled(app.prompt_input.clone(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::Yellow)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", prompt.title())),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rect of `percent_x` width and `height` rows centred in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Label padded to a column followed by a value
pub fn value_line(name: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:14}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}
