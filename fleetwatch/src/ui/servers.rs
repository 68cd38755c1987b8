//! Server list table with the current selection highlighted.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::types::Server;
use crate::ui::theme::Theme;
use crate::ui::util::truncate_middle;

pub fn draw_servers(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    servers: &[Server],
    selected_id: Option<u64>,
    theme: &Theme,
) {
    let name_width = (area.width.saturating_sub(24)).max(8) as usize;

    let header = Row::new(vec!["", "Name", "IP", "Status"]).style(
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = servers
        .iter()
        .map(|s| {
            let is_selected = selected_id == Some(s.id);
            let marker = if is_selected { "▶" } else { " " };
            let status_color = if s.is_active() { theme.ok } else { theme.critical };
            let row = Row::new(vec![
                Cell::from(marker),
                Cell::from(truncate_middle(&s.name, name_width)),
                Cell::from(s.ip_address.clone()),
                Cell::from(s.status.clone()).style(Style::default().fg(status_color)),
            ]);
            if is_selected {
                row.style(theme.selected)
            } else {
                row.style(Style::default().fg(theme.text))
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(15),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Servers"));

    f.render_widget(table, area);
}
