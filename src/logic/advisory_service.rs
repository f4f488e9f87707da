use crate::config::Config;
use crate::datasources::MockForecastSource;
use crate::error::{AdvisorError, Result};
use crate::logic::rules::AdvisoryEngine;
use crate::models::{Advisory, ForecastDay, Location};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Forecast and advisory produced by a single refresh
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub location: Location,
    pub fetched_at: DateTime<Utc>,
    pub forecast: Vec<ForecastDay>,
    pub advisory: Advisory,
}

impl AdvisoryReport {
    /// First forecast day; `None` only for a hand-built report with no days
    pub fn today(&self) -> Option<&ForecastDay> {
        self.forecast.first()
    }
}

/// Ties the forecast source to the rule engine for the configured location.
pub struct AdvisoryService {
    location: Location,
    source: MockForecastSource,
    engine: AdvisoryEngine,
}

impl AdvisoryService {
    pub fn new(config: &Config) -> Self {
        if config.location.name.is_none() {
            tracing::info!(
                "No location name configured - using coordinates {}",
                config.location.label()
            );
        }

        Self {
            location: config.location.clone(),
            source: MockForecastSource::new(config.forecast.clone()),
            engine: AdvisoryEngine::new(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Fetch a fresh forecast and evaluate today against tomorrow
    pub async fn refresh(&mut self) -> Result<AdvisoryReport> {
        let forecast = self.fetch_forecast().await?;

        if forecast.len() < 2 {
            return Err(AdvisorError::DataSourceUnavailable(format!(
                "forecast returned {} day(s), need at least 2",
                forecast.len()
            )));
        }

        let advisory = self.engine.evaluate(&forecast[0], &forecast[1]);
        tracing::info!(
            "Advisory for {}: {} with {} action(s)",
            self.location.label(),
            advisory.condition_label,
            advisory.actions.len()
        );

        Ok(AdvisoryReport {
            location: self.location.clone(),
            fetched_at: Utc::now(),
            forecast,
            advisory,
        })
    }

    /// Fetch and validate the forecast only
    pub async fn fetch_forecast(&mut self) -> Result<Vec<ForecastDay>> {
        let forecast = self.source.fetch(&self.location).await?;
        for day in &forecast {
            day.validate()?;
        }
        tracing::debug!("Forecast updated: {} day(s)", forecast.len());
        Ok(forecast)
    }
}
