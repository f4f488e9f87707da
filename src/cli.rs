use clap::{Parser, Subcommand};
use kisan_advisor::models::{AiResponseKind, WeatherCondition};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kisan", version, about = "Farm weather advisory TUI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fixed seed for the mock forecast (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive setup
    Init,
    /// Print today's advisory for the configured location
    Advise {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the forecast for the configured location
    Forecast {
        #[arg(long)]
        json: bool,
    },
    /// Run the rules on hand-entered weather values
    Evaluate {
        /// Temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,
        /// Relative humidity in %
        #[arg(long)]
        humidity: f64,
        /// Wind speed in km/h
        #[arg(long)]
        wind: f64,
        /// Rainfall today in mm
        #[arg(long, default_value_t = 0.0)]
        rain: f64,
        /// Rainfall tomorrow in mm
        #[arg(long, default_value_t = 0.0)]
        next_rain: f64,
        /// Sky condition today (sunny, cloudy, rainy, stormy)
        #[arg(long, value_parser = parse_condition, default_value = "sunny")]
        condition: WeatherCondition,
        /// Evaluate a single rule by id (see `kisan rules`)
        #[arg(long)]
        rule: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// List the advisory rules
    Rules,
    /// Validate a saved AI service response and print it
    Inspect {
        /// Response kind (disease, crop, market, schemes)
        #[arg(value_parser = parse_response_kind)]
        kind: AiResponseKind,
        /// File holding the raw response text
        file: PathBuf,
    },
}

fn parse_condition(s: &str) -> Result<WeatherCondition, String> {
    WeatherCondition::from_str(s).ok_or_else(|| format!("unknown sky condition '{}'", s))
}

fn parse_response_kind(s: &str) -> Result<AiResponseKind, String> {
    AiResponseKind::from_str(s).ok_or_else(|| format!("unknown response kind '{}'", s))
}
