use super::{RiskRule, RuleOutcome};
use crate::models::{
    Action, ActionIcon, ForecastDay, RiskAssessment, RiskCategory, RiskLevel,
};

pub const FUNGAL_HUMIDITY: f64 = 85.0;
const FUNGAL_TEMP_C: f64 = 24.0;

/// Fungal disease risk
///
/// Leaf fungi spread when warm days coincide with saturated air.
///
/// Risk conditions:
/// - Humidity >85%
/// - Temperature >24°C
pub struct DiseaseRule;

impl RiskRule for DiseaseRule {
    fn id(&self) -> &'static str {
        "disease_risk"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn category(&self) -> RiskCategory {
        RiskCategory::Disease
    }

    fn evaluate(&self, current: &ForecastDay, _next: &ForecastDay) -> RuleOutcome {
        if current.humidity_percent > FUNGAL_HUMIDITY && current.temperature_c > FUNGAL_TEMP_C {
            RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Disease,
                RiskLevel::High,
                "High Fungal Risk",
            ))
            .with_action(Action::warning(
                ActionIcon::Search,
                "Inspect leaves for fungal spots due to high humidity.",
            ))
        } else {
            RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Disease,
                RiskLevel::Low,
                "Low Disease Risk",
            ))
        }
    }
}
