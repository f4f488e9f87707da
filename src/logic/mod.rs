pub mod advisory_service;
pub mod rules;

pub use advisory_service::{AdvisoryReport, AdvisoryService};
pub use rules::{compute_advisory, AdvisoryEngine, RuleInfo, RuleOutcome};
