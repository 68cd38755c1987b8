//! Top header with endpoint, online count, and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

pub fn draw_header(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    base_url: &str,
    online: Option<(usize, usize)>,
    fetch_error: bool,
    theme: &Theme,
) {
    let mut spans = vec![Span::styled(
        "fleetwatch",
        Style::default().fg(theme.accent),
    )];
    spans.push(Span::styled(format!(" — {base_url}"), Style::default().fg(theme.dim)));
    match online {
        Some((active, total)) => {
            spans.push(Span::raw(" | "));
            let color = if active == total { theme.ok } else { theme.warning };
            spans.push(Span::styled(
                format!("{active}/{total} online"),
                Style::default().fg(color),
            ));
        }
        None => {
            spans.push(Span::styled(" | connecting...", Style::default().fg(theme.dim)));
        }
    }
    if fetch_error {
        spans.push(Span::styled(" | fetch error", Style::default().fg(theme.critical)));
    }
    spans.push(Span::styled(
        "  (q quit, ↑/↓ server, d theme, c/j/r export)",
        Style::default().fg(theme.dim),
    ));

    f.render_widget(
        Block::default()
            .title(Line::from(spans))
            .borders(Borders::BOTTOM),
        area,
    );
}
