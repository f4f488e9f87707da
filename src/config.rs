use crate::error::{AdvisorError, Result};
use crate::models::Location;
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The engine compares today with tomorrow, so fewer days is useless.
pub const MIN_FORECAST_DAYS: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub forecast: ForecastConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForecastConfig {
    #[serde(default = "default_days")]
    pub days: u32,
    /// Fixed seed for reproducible mock forecasts
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_days() -> u32 {
    5
}

fn default_latency_ms() -> u64 {
    800
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            seed: None,
            simulated_latency_ms: default_latency_ms(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AdvisorError::Config(format!(
                "Config file not found at {:?}. Run `kisan init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Parse YAML text, substituting `${VAR}` placeholders first
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.forecast.days < MIN_FORECAST_DAYS {
            return Err(AdvisorError::Config(format!(
                "forecast.days must be at least {}, got {}",
                MIN_FORECAST_DAYS, self.forecast.days
            )));
        }
        if !self.location.is_valid() {
            return Err(AdvisorError::Config(format!(
                "location ({}, {}) is not a valid coordinate",
                self.location.latitude, self.location.longitude
            )));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("kisan-advisor").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/kisan-advisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join("kisan-advisor");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up Kisan Advisor!");
        println!();

        println!("Farm Location");
        let name: String = Input::new()
            .with_prompt("  Village or district (blank to show coordinates)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let defaults = Location::default();
        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(defaults.latitude)
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(defaults.longitude)
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Forecast");
        let days: u32 = Input::new()
            .with_prompt("  Days to forecast")
            .default(default_days())
            .validate_with(|d: &u32| {
                if *d >= MIN_FORECAST_DAYS {
                    Ok(())
                } else {
                    Err(format!("need at least {} days", MIN_FORECAST_DAYS))
                }
            })
            .interact_text()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            location: Location::new(latitude, longitude).with_name(name),
            forecast: ForecastConfig {
                days,
                ..ForecastConfig::default()
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AdvisorError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# Kisan Advisor Configuration\n# Generated by `kisan init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AdvisorError::Config(format!("Invalid placeholder pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}
