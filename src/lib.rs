pub mod app;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;
pub mod ui;

pub use error::{AdvisorError, Result};
pub use logic::{compute_advisory, AdvisoryEngine};
