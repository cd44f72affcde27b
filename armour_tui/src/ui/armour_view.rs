//! Armour tab view - the loaded armour definitions

use crate::app::App;
use armour_core::DamageType;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let catalog = app.session.catalog();

    let header = Row::new(
        std::iter::once(Cell::from("Armour")).chain(
            DamageType::all()
                .iter()
                .map(|dt| Cell::from(dt.key().to_string())),
        ),
    )
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = catalog
        .iter()
        .skip(app.catalog_scroll)
        .map(|def| {
            Row::new(
                std::iter::once(Cell::from(def.name.clone())).chain(
                    DamageType::all()
                        .iter()
                        .map(|dt| Cell::from(def.reduction(*dt).to_string())),
                ),
            )
            .style(Style::default().fg(Color::White))
        })
        .collect();

    let source = match app.session.catalog_path() {
        Some(path) => path.display().to_string(),
        None => "in memory".to_string(),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Armour Types: {} ({}) ", catalog.len(), source)),
    );

    f.render_widget(table, area);
}
