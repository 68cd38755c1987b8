//! Network traffic sparkline for the selected server.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Sparkline},
};

use crate::types::TrafficSample;
use crate::ui::theme::Theme;

pub fn draw_net_spark(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    traffic: &[TrafficSample],
    theme: &Theme,
) {
    let now = traffic.last().map(|t| t.network_traffic).unwrap_or(0.0);
    let peak = traffic
        .iter()
        .map(|t| t.network_traffic)
        .fold(0.0f64, f64::max);
    let title = format!("Network (MB/s) — now: {now:.1} | peak: {peak:.1}");

    let max_points = area.width.saturating_sub(2) as usize;
    let start = traffic.len().saturating_sub(max_points);
    let data: Vec<u64> = traffic[start..]
        .iter()
        .map(|t| {
            if t.network_traffic.is_finite() && t.network_traffic > 0.0 {
                t.network_traffic.round() as u64
            } else {
                0
            }
        })
        .collect();

    let spark = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .data(&data)
        .style(Style::default().fg(theme.net));
    f.render_widget(spark, area);
}
