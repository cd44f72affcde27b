//! Help tab view

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, area: Rect) {
    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("F1-F4", "Jump to tab (Roster/Armour/Log/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/↓", "Select character / scroll"),
        key_line("←/→", "Select body slot"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section("═══ Characters ═══"),
        key_line("a", "Add a character"),
        key_line("n", "Rename selected character"),
        key_line("x / Delete", "Remove selected character"),
        key_line("o", "Load a character file into the selection"),
        key_line("e", "Equip armour on the selected slot"),
        key_line("u", "Take off the outermost layer of the slot"),
        Line::from(""),
        section("═══ Hits ═══"),
        key_line("0-9 / Backspace", "Edit the focused ATK or DMG field"),
        key_line("Space", "Switch between ATK and DMG"),
        key_line("p / s / b / m", "Piercing / slashing / bludgeoning / spell"),
        Line::from(""),
        section("═══ Files ═══"),
        key_line("l", "Load armour definitions (.hba)"),
        key_line("c", "Load a configuration (.hacfg)"),
        key_line("w", "Save characters and configuration"),
        key_line("j", "Export recorded hits as JSON"),
        Line::from(""),
        section("═══ Hit Location (last digit of ATK) ═══"),
        Line::from("  0     Feet      1-2   Legs     3-5   Torso"),
        Line::from("  6     Arms      7     Hands    8-9   Head"),
        Line::from(""),
        Line::from(Span::styled(
            "Damage Reduction:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Every layer on the hit slot reduces the damage by its value"),
        Line::from("  Final damage never drops below 0"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
