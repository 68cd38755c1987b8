//! Dark/light themes and the severity lookup for insight rendering.

use ratatui::style::{Color, Modifier, Style};

use crate::health::InsightKind;

#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub ok: Color,
    pub warning: Color,
    pub critical: Color,
    pub info: Color,
    pub cpu: Color,
    pub ram: Color,
    pub disk: Color,
    pub app: Color,
    pub net: Color,
    pub selected: Style,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            ok: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            info: Color::Blue,
            cpu: Color::Cyan,
            ram: Color::Magenta,
            disk: Color::Yellow,
            app: Color::Green,
            net: Color::Blue,
            selected: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            ok: Color::Green,
            warning: Color::LightYellow,
            critical: Color::LightRed,
            info: Color::LightBlue,
            cpu: Color::Blue,
            ram: Color::Magenta,
            disk: Color::LightYellow,
            app: Color::Green,
            net: Color::LightBlue,
            selected: Style::default()
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Display color per insight severity. Closed lookup, one arm per
    /// variant.
    pub fn insight_color(&self, kind: InsightKind) -> Color {
        match kind {
            InsightKind::Critical => self.critical,
            InsightKind::Warning => self.warning,
            InsightKind::Info => self.info,
            InsightKind::Success => self.ok,
        }
    }

    /// Tiered color for the fleet health score: >80 healthy, >60 degraded,
    /// otherwise critical.
    pub fn score_color(&self, score: u8) -> Color {
        if score > 80 {
            self.ok
        } else if score > 60 {
            self.warning
        } else {
            self.critical
        }
    }
}

pub fn insight_symbol(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Critical => "✖",
        InsightKind::Warning => "⚠",
        InsightKind::Info => "ℹ",
        InsightKind::Success => "✔",
    }
}
