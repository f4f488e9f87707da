use crate::logic::rules::{
    condition::{COLD_TEMP_C, HOT_TEMP_C},
    irrigation::HEAT_TEMP_C,
};
use crate::models::RiskLevel;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const RAIN: Color = Color::Blue;

    pub fn title() -> Style {
        Self::nav_key()
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Status line: failures in the medium-risk colour, everything else calm
    pub fn status(failed: bool) -> Style {
        let level = if failed { RiskLevel::Medium } else { RiskLevel::Good };
        Style::default().fg(level.color())
    }

    /// Cold, mild, heat-stress and hot bands on the condition and irrigation thresholds
    pub fn temperature(temp_c: f64) -> Color {
        if temp_c < COLD_TEMP_C {
            Color::LightBlue
        } else if temp_c <= HEAT_TEMP_C {
            Color::Green
        } else if temp_c <= HOT_TEMP_C {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    pub fn risk(level: RiskLevel) -> Style {
        let style = Style::default().fg(level.color());
        if level.is_alert() {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Self::dim()
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}
