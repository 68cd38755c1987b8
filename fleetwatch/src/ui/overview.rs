//! Overview cards: health score gauge + history, servers online, alert
//! summary.

use std::collections::VecDeque;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Sparkline},
};

use crate::health::count_active;
use crate::history::tail_window;
use crate::types::{AlertCounts, Server};
use crate::ui::theme::Theme;

pub fn draw_overview(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    servers: &[Server],
    alerts: Option<&AlertCounts>,
    score: Option<u8>,
    score_hist: &VecDeque<u64>,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    draw_health_card(f, cols[0], score, score_hist, theme);
    draw_status_card(f, cols[1], servers, score.is_some(), theme);
    draw_alerts_card(f, cols[2], alerts, theme);
}

fn draw_health_card(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    score: Option<u8>,
    score_hist: &VecDeque<u64>,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title("System Health");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // No snapshot yet: an absent score is "unknown", never a perfect 100
    let Some(s) = score else {
        f.render_widget(
            Paragraph::new("waiting for data...").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let color = theme.score_color(s);
    let g = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(s as u16)
        .label(format!("{s}%"));
    f.render_widget(g, rows[0]);

    let data = tail_window(score_hist, rows[1].width as usize);
    let spark = Sparkline::default()
        .data(&data)
        .max(100)
        .style(Style::default().fg(color));
    f.render_widget(spark, rows[1]);
}

fn draw_status_card(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    servers: &[Server],
    loaded: bool,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title("Server Status");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !loaded && servers.is_empty() {
        f.render_widget(
            Paragraph::new("waiting for data...").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    }

    let active = count_active(servers);
    let total = servers.len();
    let badge = if active == total { "All Online" } else { "Partial" };
    let badge_color = if active == total { theme.ok } else { theme.warning };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{active}/{total}"),
                Style::default().fg(theme.text),
            ),
            Span::styled(" Servers Online", Style::default().fg(theme.dim)),
        ]),
        Line::from(Span::styled(badge, Style::default().fg(badge_color))),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_alerts_card(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    alerts: Option<&AlertCounts>,
    theme: &Theme,
) {
    let block = Block::default().borders(Borders::ALL).title("Alert Summary");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(a) = alerts else {
        f.render_widget(
            Paragraph::new("waiting for data...").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:>3}", a.critical), Style::default().fg(theme.critical)),
            Span::styled(" Critical", Style::default().fg(theme.dim)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>3}", a.medium), Style::default().fg(theme.warning)),
            Span::styled(" Medium", Style::default().fg(theme.dim)),
        ]),
        Line::from(vec![
            Span::styled(format!("{:>3}", a.low), Style::default().fg(theme.ok)),
            Span::styled(" Low", Style::default().fg(theme.dim)),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
