use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    #[error("Invalid forecast: {0}")]
    InvalidForecast(String),

    #[error("Unknown rule '{0}' (see `kisan rules`)")]
    UnknownRule(String),

    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
