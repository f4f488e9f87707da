use crate::config::ForecastConfig;
use crate::error::Result;
use crate::models::{ForecastDay, Location, WeatherCondition};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// Generator shape: ~30% of days fall in a wet spell, temperatures sit
// around 28°C, humidity 40-89%, wind 5-24 km/h.
const WET_SPELL_THRESHOLD: f64 = 0.7;
const TEMP_BASE_C: f64 = 28.0;
const HUMIDITY_BASE: f64 = 40.0;
const HUMIDITY_SPREAD: f64 = 50.0;
const WIND_BASE_KMH: f64 = 5.0;
const WIND_SPREAD_KMH: f64 = 20.0;
const WET_RAIN_SPREAD_MM: f64 = 15.0;

/// Simulated forecast provider.
///
/// Stands in for a real weather API: produces plausible monsoon-season
/// days for any location after a configurable delay.
pub struct MockForecastSource {
    config: ForecastConfig,
    rng: StdRng,
}

impl MockForecastSource {
    pub fn new(config: ForecastConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Fetch the forecast starting today
    pub async fn fetch(&mut self, location: &Location) -> Result<Vec<ForecastDay>> {
        let today = Local::now().date_naive();
        self.fetch_from(location, today).await
    }

    pub async fn fetch_from(
        &mut self,
        location: &Location,
        start: NaiveDate,
    ) -> Result<Vec<ForecastDay>> {
        tracing::debug!(
            "Generating {}-day forecast for {}",
            self.config.days,
            location.label()
        );

        if self.config.simulated_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.simulated_latency_ms)).await;
        }

        let days = (0..self.config.days)
            .filter_map(|offset| start.checked_add_days(chrono::Days::new(offset as u64)))
            .map(|date| self.generate_day(date))
            .collect();

        Ok(days)
    }

    fn generate_day(&mut self, date: NaiveDate) -> ForecastDay {
        let wet_spell = self.rng.gen::<f64>() > WET_SPELL_THRESHOLD;

        let temperature_c = (TEMP_BASE_C + (self.rng.gen::<f64>() * 5.0 - 2.0)).floor();
        let humidity_percent = (HUMIDITY_BASE + self.rng.gen::<f64>() * HUMIDITY_SPREAD).floor();
        let wind_speed_kmh = (WIND_BASE_KMH + self.rng.gen::<f64>() * WIND_SPREAD_KMH).floor();

        let (rainfall_mm, condition) = if wet_spell {
            let rain = (self.rng.gen::<f64>() * WET_RAIN_SPREAD_MM).floor();
            let condition = if self.rng.gen::<f64>() > 0.5 {
                WeatherCondition::Rainy
            } else {
                WeatherCondition::Cloudy
            };
            (rain, condition)
        } else {
            (0.0, WeatherCondition::Sunny)
        };

        ForecastDay::new(
            date,
            temperature_c,
            humidity_percent,
            wind_speed_kmh,
            rainfall_mm,
            condition,
        )
    }
}
