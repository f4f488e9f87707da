use crate::error::{AdvisorError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of forecast data, the unit of input to the advisory engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub rainfall_mm: f64,
    pub condition: WeatherCondition,
}

impl ForecastDay {
    pub fn new(
        date: NaiveDate,
        temperature_c: f64,
        humidity_percent: f64,
        wind_speed_kmh: f64,
        rainfall_mm: f64,
        condition: WeatherCondition,
    ) -> Self {
        Self {
            date,
            temperature_c,
            humidity_percent,
            wind_speed_kmh,
            rainfall_mm,
            condition,
        }
    }

    /// Check that values are physically plausible.
    ///
    /// The engine itself never calls this; it is applied where forecast
    /// values enter the program (hand-entered values, fetched days).
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("temperature", self.temperature_c),
            ("humidity", self.humidity_percent),
            ("wind speed", self.wind_speed_kmh),
            ("rainfall", self.rainfall_mm),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AdvisorError::InvalidForecast(format!(
                    "{} on {} is not a finite number",
                    name, self.date
                )));
            }
        }

        if !(0.0..=100.0).contains(&self.humidity_percent) {
            return Err(AdvisorError::InvalidForecast(format!(
                "humidity {:.0}% on {} is outside 0-100",
                self.humidity_percent, self.date
            )));
        }
        if self.wind_speed_kmh < 0.0 {
            return Err(AdvisorError::InvalidForecast(format!(
                "negative wind speed on {}",
                self.date
            )));
        }
        if self.rainfall_mm < 0.0 {
            return Err(AdvisorError::InvalidForecast(format!(
                "negative rainfall on {}",
                self.date
            )));
        }

        Ok(())
    }

    pub fn has_rain(&self) -> bool {
        self.rainfall_mm > 0.0
    }
}

/// Sky condition categories produced by the forecast source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl WeatherCondition {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunny" | "clear" => Some(WeatherCondition::Sunny),
            "cloudy" | "clouds" => Some(WeatherCondition::Cloudy),
            "rainy" | "rain" => Some(WeatherCondition::Rainy),
            "stormy" | "storm" | "thunderstorm" => Some(WeatherCondition::Stormy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Stormy => "Stormy",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "☀",
            WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rainy => "🌧",
            WeatherCondition::Stormy => "⛈",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
