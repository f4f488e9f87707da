pub mod condition;
pub mod disease;
pub mod engine;
pub mod field_activity;
pub mod irrigation;
pub mod spray_window;

pub use engine::{compute_advisory, AdvisoryEngine, RuleInfo};

use crate::models::{Action, ForecastDay, RiskAssessment, RiskCategory};
use serde::Serialize;

/// Result of evaluating one risk rule: its assessment plus any actions it raised
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOutcome {
    pub risk: RiskAssessment,
    pub actions: Vec<Action>,
}

impl RuleOutcome {
    pub fn new(risk: RiskAssessment) -> Self {
        Self {
            risk,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// Trait for per-category risk rules
///
/// Every rule always produces an assessment; only the actions are optional.
pub trait RiskRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Category this rule assesses
    fn category(&self) -> RiskCategory;

    /// Evaluate today's forecast with tomorrow's as lookahead
    fn evaluate(&self, current: &ForecastDay, next: &ForecastDay) -> RuleOutcome;
}
