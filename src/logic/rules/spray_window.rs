use super::{RiskRule, RuleOutcome};
use crate::models::{
    Action, ActionIcon, ForecastDay, RiskAssessment, RiskCategory, RiskLevel,
};

pub const MAX_SPRAY_WIND_KMH: f64 = 15.0;

/// Spray window rule - blocks chemical spraying in wind or rain
///
/// Conditions for a bad window:
/// - Wind >15 km/h (drift)
/// - Any rain today or tomorrow (wash-off)
///
/// Only today's wind and today's rain raise their own warnings; rain
/// tomorrow closes the window without a separate action.
pub struct SprayWindowRule;

impl RiskRule for SprayWindowRule {
    fn id(&self) -> &'static str {
        "spray_window"
    }

    fn name(&self) -> &'static str {
        "Spray Window"
    }

    fn category(&self) -> RiskCategory {
        RiskCategory::Spray
    }

    fn evaluate(&self, current: &ForecastDay, next: &ForecastDay) -> RuleOutcome {
        let windy = current.wind_speed_kmh > MAX_SPRAY_WIND_KMH;

        if !windy && !current.has_rain() && !next.has_rain() {
            return RuleOutcome::new(RiskAssessment::new(
                RiskCategory::Spray,
                RiskLevel::Good,
                "Spray: Good Window",
            ));
        }

        let mut outcome = RuleOutcome::new(RiskAssessment::new(
            RiskCategory::Spray,
            RiskLevel::Bad,
            "Spray: Bad Window",
        ));
        if windy {
            outcome = outcome.with_action(Action::warning(
                ActionIcon::Wind,
                "Avoid spraying today due to high winds.",
            ));
        }
        if current.has_rain() {
            outcome = outcome.with_action(Action::warning(
                ActionIcon::CloudRain,
                "Do not spray chemicals, rain expected.",
            ));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{day, dry_next, next_with_rain};

    #[test]
    fn calm_dry_days_are_a_good_window() {
        let outcome = SprayWindowRule.evaluate(&day(25.0, 50.0, 15.0, 0.0), &dry_next());
        assert_eq!(outcome.risk.level, RiskLevel::Good);
        assert_eq!(outcome.risk.label, "Spray: Good Window");
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn wind_alone_warns_about_wind_only() {
        let outcome = SprayWindowRule.evaluate(&day(20.0, 50.0, 20.0, 0.0), &dry_next());
        assert_eq!(outcome.risk.level, RiskLevel::Bad);
        assert_eq!(outcome.actions.len(), 1);
        assert_eq!(outcome.actions[0].icon, ActionIcon::Wind);
    }

    #[test]
    fn wind_and_rain_raise_both_warnings_in_order() {
        let outcome = SprayWindowRule.evaluate(&day(20.0, 50.0, 20.0, 1.0), &dry_next());
        let icons: Vec<_> = outcome.actions.iter().map(|a| a.icon).collect();
        assert_eq!(icons, vec![ActionIcon::Wind, ActionIcon::CloudRain]);
    }

    #[test]
    fn rain_tomorrow_closes_window_without_action() {
        let outcome = SprayWindowRule.evaluate(&day(20.0, 50.0, 5.0, 0.0), &next_with_rain(0.5));
        assert_eq!(outcome.risk.level, RiskLevel::Bad);
        assert!(outcome.actions.is_empty());
    }
}
