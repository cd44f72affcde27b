//! Roster tab view - characters, worn armour and hit calculation

use super::value_line;
use crate::app::{App, InputField};
use armour_core::{BodySlot, DamageType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_characters(f, app, chunks[0]);
    draw_slots(f, app, chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // ATK / DMG
            Constraint::Min(0),    // Last hit
        ])
        .split(chunks[2]);

    draw_inputs(f, app, right[0]);
    draw_last_hit(f, app, right[1]);
}

fn draw_characters(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .roster()
        .names()
        .enumerate()
        .map(|(i, name)| {
            let (prefix, style) = if i == app.selected_character {
                ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", prefix, name), style)))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Line::from(Span::styled(
            "  [a] Add a character",
            Style::default().fg(Color::DarkGray),
        )))])
    } else {
        List::new(items)
    };

    f.render_widget(
        list.block(Block::default().borders(Borders::ALL).title(" Characters ")),
        area,
    );
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let Some(name) = app.selected_name() else {
        let paragraph = Paragraph::new("No character selected")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Armour Worn "));
        f.render_widget(paragraph, area);
        return;
    };
    let Some(character) = app.session.character(&name) else {
        return;
    };
    let catalog = app.session.catalog();

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("  {:10} {:>4} {:>4} {:>4} {:>4}", "", "P", "S", "B", "M"),
        Style::default().fg(Color::DarkGray),
    ))];

    for (slot, layers) in character.slots() {
        let is_selected = slot == app.selected_slot();
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(slot_label(slot), style),
            if layers.is_empty() {
                Span::styled("  (nothing)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw("")
            },
        ]));

        for armour in layers {
            let line = match catalog.get(armour) {
                Some(def) => {
                    let values: String = DamageType::all()
                        .iter()
                        .map(|dt| format!(" {:>4}", def.reduction(*dt)))
                        .collect();
                    Line::from(vec![
                        Span::styled(format!("    {:8}", armour), Style::default().fg(Color::Cyan)),
                        Span::styled(values, Style::default().fg(Color::White)),
                    ])
                }
                None => Line::from(vec![
                    Span::styled(format!("    {:8}", armour), Style::default().fg(Color::Red)),
                    Span::styled(" undefined", Style::default().fg(Color::Red)),
                ]),
            };
            lines.push(line);
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", character.name)),
    );
    f.render_widget(paragraph, area);
}

fn draw_inputs(f: &mut Frame, app: &App, area: Rect) {
    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        Line::from(vec![
            Span::styled(format!("{} ", if focused { ">" } else { " " }), style),
            Span::styled(format!("{:5}", label), Style::default().fg(Color::Gray)),
            Span::styled(
                if value.is_empty() { "_".to_string() } else { value.to_string() },
                style,
            ),
        ])
    };

    let lines = vec![
        field("ATK", &app.attack_input, app.focus == InputField::Attack),
        field("DMG", &app.damage_input, app.focus == InputField::Damage),
        Line::from(Span::styled(
            "  [p]ierce [s]lash [b]ludgeon [m]agic",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Hit "));
    f.render_widget(paragraph, area);
}

fn draw_last_hit(f: &mut Frame, app: &App, area: Rect) {
    let Some(report) = &app.last_report else {
        let paragraph = Paragraph::new("No hits yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Last Hit "));
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            report.character.clone(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        value_line("Roll", report.roll.to_string(), Color::White),
        value_line("Location", report.slot.to_string(), Color::White),
        value_line(
            "Raw",
            format!("{} {}", report.raw_damage, report.damage_type),
            Color::White,
        ),
        Line::from(""),
    ];

    for layer in &report.layers {
        lines.push(value_line(&layer.armour, format!("-{}", layer.reduction), Color::Cyan));
    }
    for armour in &report.unknown_armour {
        lines.push(value_line(armour, "undefined".to_string(), Color::Red));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Final: ", Style::default().fg(Color::Gray)),
        Span::styled(
            report.final_damage.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Last Hit "));
    f.render_widget(paragraph, area);
}

fn slot_label(slot: BodySlot) -> String {
    let key = slot.key();
    let mut label: String = key[..1].to_uppercase();
    label.push_str(&key[1..]);
    format!("{:10}", label)
}
