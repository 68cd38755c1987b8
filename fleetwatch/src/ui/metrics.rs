//! Per-server resource gauges and CPU history chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Sparkline},
};

use crate::types::{MetricSample, Server};
use crate::ui::theme::Theme;
use crate::ui::util::pct;

pub fn draw_metrics(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    server: Option<&Server>,
    samples: &[MetricSample],
    theme: &Theme,
) {
    let title = match server {
        Some(s) => format!("Metrics — {}", s.name),
        None => "Metrics".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if server.is_none() {
        f.render_widget(
            Paragraph::new("Select a server with ↑/↓").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    }
    let Some(latest) = samples.last() else {
        f.render_widget(
            Paragraph::new("waiting for data...").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(inner);

    let gauges = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(rows[0]);

    draw_usage_gauge(f, gauges[0], "CPU", latest.cpu_usage, theme.cpu);
    draw_usage_gauge(f, gauges[1], "RAM", latest.ram_usage, theme.ram);
    draw_usage_gauge(f, gauges[2], "Disk", latest.disk_usage, theme.disk);
    draw_usage_gauge(f, gauges[3], "App", latest.app_usage, theme.app);

    // CPU over the fetched series
    let max_points = rows[1].width as usize;
    let start = samples.len().saturating_sub(max_points);
    let data: Vec<u64> = samples[start..]
        .iter()
        .map(|m| m.cpu_usage.clamp(0.0, 100.0).round() as u64)
        .collect();
    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::TOP).title("CPU history"))
        .data(&data)
        .max(100)
        .style(Style::default().fg(theme.cpu));
    f.render_widget(spark, rows[1]);
}

fn draw_usage_gauge(f: &mut ratatui::Frame<'_>, area: Rect, label: &str, value: f64, color: Color) {
    let clamped = if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let g = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(clamped.round() as u16)
        .label(format!("{label} {}", pct(value)));
    f.render_widget(g, area);
}
