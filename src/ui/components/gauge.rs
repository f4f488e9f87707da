//! Gauges for the four forecast readings.
//!
//! Colour bands and notes come from the advisory rules' own thresholds, so a
//! red humidity gauge always coincides with a high disease badge and a red
//! wind gauge with a closed spray window.

use crate::logic::rules::{
    condition::{COLD_TEMP_C, HOT_TEMP_C},
    disease::FUNGAL_HUMIDITY,
    irrigation::{DRY_HUMIDITY, HEAT_TEMP_C, SKIP_TODAY_RAIN_MM},
    spray_window::MAX_SPRAY_WIND_KMH,
};
use crate::models::{ForecastDay, RiskLevel};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, LineGauge, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Temperature,
    Humidity,
    Wind,
    Rainfall,
}

impl Reading {
    pub const ALL: [Reading; 4] = [
        Reading::Temperature,
        Reading::Humidity,
        Reading::Wind,
        Reading::Rainfall,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Reading::Temperature => "Temperature",
            Reading::Humidity => "Humidity",
            Reading::Wind => "Wind",
            Reading::Rainfall => "Rainfall",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Reading::Temperature => "°C",
            Reading::Humidity => "%",
            Reading::Wind => " km/h",
            Reading::Rainfall => " mm",
        }
    }

    /// Full-scale value of the bar
    fn scale(&self) -> f64 {
        match self {
            Reading::Temperature => 45.0,
            Reading::Humidity => 100.0,
            Reading::Wind => 40.0,
            Reading::Rainfall => 20.0,
        }
    }

    pub fn value(&self, day: &ForecastDay) -> f64 {
        match self {
            Reading::Temperature => day.temperature_c,
            Reading::Humidity => day.humidity_percent,
            Reading::Wind => day.wind_speed_kmh,
            Reading::Rainfall => day.rainfall_mm,
        }
    }

    pub fn color(&self, value: f64) -> Color {
        match self {
            Reading::Temperature => Theme::temperature(value),
            Reading::Humidity if value > FUNGAL_HUMIDITY => RiskLevel::High.color(),
            Reading::Humidity if value < DRY_HUMIDITY => RiskLevel::Medium.color(),
            Reading::Humidity => RiskLevel::Low.color(),
            Reading::Wind if value > MAX_SPRAY_WIND_KMH => RiskLevel::Bad.color(),
            Reading::Wind => RiskLevel::Good.color(),
            Reading::Rainfall if value > 0.0 => Theme::RAIN,
            Reading::Rainfall => Theme::DIM,
        }
    }

    /// Short hint naming the rule a value trips
    pub fn note(&self, value: f64) -> Option<&'static str> {
        match self {
            Reading::Temperature if value > HOT_TEMP_C => Some("very hot"),
            Reading::Temperature if value > HEAT_TEMP_C => Some("heat stress"),
            Reading::Temperature if value < COLD_TEMP_C => Some("cold"),
            Reading::Humidity if value > FUNGAL_HUMIDITY => Some("fungal risk"),
            Reading::Humidity if value < DRY_HUMIDITY => Some("dry air"),
            Reading::Wind if value > MAX_SPRAY_WIND_KMH => Some("no spraying"),
            Reading::Rainfall if value > SKIP_TODAY_RAIN_MM => Some("skip irrigation"),
            Reading::Rainfall if value > 0.0 => Some("spray washout"),
            _ => None,
        }
    }
}

pub struct ReadingGauge {
    reading: Reading,
    value: f64,
}

impl ReadingGauge {
    pub fn new(reading: Reading, value: f64) -> Self {
        Self { reading, value }
    }

    pub fn for_day(reading: Reading, day: &ForecastDay) -> Self {
        Self::new(reading, reading.value(day))
    }

    fn ratio(&self) -> f64 {
        let ratio = self.value / self.reading.scale();
        if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Widget for ReadingGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.reading.title())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let color = self.reading.color(self.value);
        LineGauge::default()
            .ratio(self.ratio())
            .label(Span::styled(
                format!("{:.0}{}", self.value, self.reading.unit()),
                Style::default().fg(color),
            ))
            .filled_style(Style::default().fg(color))
            .unfilled_style(Theme::dim())
            .render(Rect { height: 1, ..inner }, buf);

        if inner.height >= 2 {
            if let Some(note) = self.reading.note(self.value) {
                let note_area = Rect {
                    y: inner.y + 1,
                    height: 1,
                    ..inner
                };
                Paragraph::new(Span::styled(note, Style::default().fg(color)))
                    .render(note_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn bands_match_rule_thresholds() {
        assert_eq!(Reading::Humidity.color(90.0), RiskLevel::High.color());
        assert_eq!(Reading::Humidity.color(FUNGAL_HUMIDITY), RiskLevel::Low.color());
        assert_eq!(Reading::Humidity.color(30.0), RiskLevel::Medium.color());

        assert_eq!(Reading::Wind.color(MAX_SPRAY_WIND_KMH), RiskLevel::Good.color());
        assert_eq!(Reading::Wind.color(15.1), RiskLevel::Bad.color());

        assert_eq!(Reading::Rainfall.color(0.0), Theme::DIM);
        assert_eq!(Reading::Rainfall.color(0.5), Theme::RAIN);
    }

    #[test]
    fn notes_name_the_tripped_rule() {
        assert_eq!(Reading::Temperature.note(36.0), Some("very hot"));
        assert_eq!(Reading::Temperature.note(33.0), Some("heat stress"));
        assert_eq!(Reading::Temperature.note(25.0), None);
        assert_eq!(Reading::Rainfall.note(3.0), Some("skip irrigation"));
        assert_eq!(Reading::Rainfall.note(1.0), Some("spray washout"));
        assert_eq!(Reading::Wind.note(10.0), None);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(ReadingGauge::new(Reading::Rainfall, 80.0).ratio(), 1.0);
        assert_eq!(ReadingGauge::new(Reading::Temperature, -5.0).ratio(), 0.0);
        assert_eq!(ReadingGauge::new(Reading::Wind, f64::NAN).ratio(), 0.0);
    }

    #[test]
    fn renders_value_and_note() {
        let area = Rect::new(0, 0, 24, 5);
        let mut buf = Buffer::empty(area);
        ReadingGauge::new(Reading::Humidity, 90.0).render(area, &mut buf);

        assert!(row(&buf, 0).contains("Humidity"));
        assert!(row(&buf, 1).contains("90%"));
        assert!(row(&buf, 2).contains("fungal risk"));
    }
}
