//! Performance insight list with severity colors and trend arrows.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::health::{Insight, TrendDirection};
use crate::ui::theme::{insight_symbol, Theme};

pub fn draw_insights(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    insights: &[Insight],
    has_selection: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Performance Insights");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !has_selection {
        f.render_widget(
            Paragraph::new("Select a server to see insights").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    }
    if insights.is_empty() {
        f.render_widget(
            Paragraph::new("waiting for data...").style(Style::default().fg(theme.dim)),
            inner,
        );
        return;
    }

    let mut lines = Vec::with_capacity(insights.len() * 2);
    for insight in insights {
        let color = theme.insight_color(insight.kind);
        let mut spans = vec![
            Span::styled(insight_symbol(insight.kind), Style::default().fg(color)),
            Span::styled(
                format!(" {}: ", insight.metric),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                insight.value.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        match insight.trend {
            Some(TrendDirection::Up) => {
                spans.push(Span::styled(" ↑", Style::default().fg(theme.critical)));
            }
            Some(TrendDirection::Down) => {
                spans.push(Span::styled(" ↓", Style::default().fg(theme.ok)));
            }
            None => {}
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(Span::styled(
            format!("  {}", insight.message),
            Style::default().fg(theme.dim),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
