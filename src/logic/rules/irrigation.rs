use super::{RiskRule, RuleOutcome};
use crate::models::{
    Action, ActionIcon, ForecastDay, RiskAssessment, RiskCategory, RiskLevel,
};

pub const SKIP_TODAY_RAIN_MM: f64 = 2.0;
const SKIP_TOMORROW_RAIN_MM: f64 = 5.0;
pub const HEAT_TEMP_C: f64 = 32.0;
pub const DRY_HUMIDITY: f64 = 40.0;

/// Irrigation need, from rain in hand or forecast against evaporation load.
///
/// Branches are exclusive, first match wins:
/// - Not needed: >2mm rain today or >5mm tomorrow
/// - Needed: >32°C with humidity <40%
/// - Moderate: everything else
pub struct IrrigationRule;

impl RiskRule for IrrigationRule {
    fn id(&self) -> &'static str {
        "irrigation"
    }

    fn name(&self) -> &'static str {
        "Irrigation Need"
    }

    fn category(&self) -> RiskCategory {
        RiskCategory::Irrigation
    }

    fn evaluate(&self, current: &ForecastDay, next: &ForecastDay) -> RuleOutcome {
        if current.rainfall_mm > SKIP_TODAY_RAIN_MM || next.rainfall_mm > SKIP_TOMORROW_RAIN_MM {
            RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Irrigation,
                RiskLevel::Low,
                "Irrigation: Not Needed",
            ))
            .with_action(Action::suggestion(
                ActionIcon::Droplets,
                "Skip irrigation, rain is forecasted.",
            ))
        } else if current.temperature_c > HEAT_TEMP_C && current.humidity_percent < DRY_HUMIDITY {
            RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Irrigation,
                RiskLevel::High,
                "Irrigation: Needed",
            ))
            .with_action(Action::suggestion(
                ActionIcon::Sun,
                "Soil moisture loss high. Irrigate in evening.",
            ))
        } else {
            RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Irrigation,
                RiskLevel::Medium,
                "Irrigation: Moderate",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{day, dry_next, next_with_rain};

    #[test]
    fn rain_today_skips_irrigation() {
        let outcome = IrrigationRule.evaluate(&day(20.0, 50.0, 5.0, 3.0), &dry_next());
        assert_eq!(outcome.risk.level, RiskLevel::Low);
        assert_eq!(outcome.risk.label, "Irrigation: Not Needed");
        assert_eq!(outcome.actions[0].text, "Skip irrigation, rain is forecasted.");
    }

    #[test]
    fn heavy_rain_tomorrow_skips_irrigation_even_in_heat() {
        let outcome = IrrigationRule.evaluate(&day(38.0, 20.0, 5.0, 0.0), &next_with_rain(6.0));
        assert_eq!(outcome.risk.level, RiskLevel::Low);
    }

    #[test]
    fn hot_dry_day_needs_irrigation() {
        let outcome = IrrigationRule.evaluate(&day(33.0, 39.0, 5.0, 0.0), &next_with_rain(5.0));
        assert_eq!(outcome.risk.level, RiskLevel::High);
        assert_eq!(outcome.actions[0].icon, ActionIcon::Sun);
    }

    #[test]
    fn otherwise_moderate_without_action() {
        let outcome = IrrigationRule.evaluate(&day(32.0, 30.0, 5.0, 2.0), &dry_next());
        assert_eq!(outcome.risk.level, RiskLevel::Medium);
        assert_eq!(outcome.risk.label, "Irrigation: Moderate");
        assert!(outcome.actions.is_empty());
    }
}
