use super::{
    condition::condition_label, disease::DiseaseRule, field_activity::activity_hints,
    irrigation::IrrigationRule, spray_window::SprayWindowRule, RiskRule, RuleOutcome,
};
use crate::models::{Advisory, ForecastDay, RiskCategory, MAX_ACTIONS};
use serde::Serialize;

/// Registered rule as listed by `kisan rules`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub category: RiskCategory,
}

pub struct AdvisoryEngine {
    rules: Vec<Box<dyn RiskRule>>,
}

impl AdvisoryEngine {
    /// Rules are registered in the order their risks and actions are reported.
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(DiseaseRule),
            Box::new(SprayWindowRule),
            Box::new(IrrigationRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, current: &ForecastDay, next: &ForecastDay) -> Advisory {
        let label = condition_label(current);
        let mut risks = Vec::with_capacity(self.rules.len());
        let mut actions = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(current, next);
            debug_assert_eq!(outcome.risk.category, rule.category());
            tracing::debug!(
                rule = rule.id(),
                category = %rule.category(),
                level = %outcome.risk.level,
                actions = outcome.actions.len(),
                "Rule evaluated"
            );
            risks.push(outcome.risk);
            actions.extend(outcome.actions);
        }

        actions.extend(activity_hints(current, label));
        if actions.len() > MAX_ACTIONS {
            tracing::debug!("Dropping {} actions over the limit", actions.len() - MAX_ACTIONS);
            actions.truncate(MAX_ACTIONS);
        }

        Advisory {
            condition_label: label,
            condition_icon: current.condition,
            risks,
            actions,
        }
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        current: &ForecastDay,
        next: &ForecastDay,
    ) -> Option<RuleOutcome> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .map(|rule| rule.evaluate(current, next))
    }

    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id(),
                name: r.name(),
                category: r.category(),
            })
            .collect()
    }
}

impl Default for AdvisoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the advisory for `current` using `next` as the lookahead day.
pub fn compute_advisory(current: &ForecastDay, next: &ForecastDay) -> Advisory {
    AdvisoryEngine::new().evaluate(current, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{day, dry_next, next_with_rain, sunny};
    use crate::models::{ActionIcon, ConditionLabel, RiskCategory, RiskLevel, WeatherCondition};

    fn levels(advisory: &Advisory) -> Vec<RiskLevel> {
        advisory.risks.iter().map(|r| r.level).collect()
    }

    #[test]
    fn hot_and_dry_day() {
        let advisory = compute_advisory(&sunny(36.0, 30.0, 5.0, 0.0), &dry_next());

        assert_eq!(advisory.condition_label, ConditionLabel::HotAndDry);
        assert_eq!(advisory.condition_icon, WeatherCondition::Sunny);
        assert_eq!(
            levels(&advisory),
            vec![RiskLevel::Low, RiskLevel::Good, RiskLevel::High]
        );
        assert_eq!(
            advisory.risk(RiskCategory::Irrigation).map(|r| r.label.as_str()),
            Some("Irrigation: Needed")
        );
        assert!(advisory.has_action("Soil moisture loss high. Irrigate in evening."));
        assert!(advisory.has_action("Good day for drying harvested crops."));
        assert!(advisory.has_action("Ideal conditions for sowing or weeding."));
        assert_eq!(advisory.actions.len(), 3);
    }

    #[test]
    fn fungal_risk_day() {
        let advisory = compute_advisory(&day(27.0, 90.0, 5.0, 0.0), &dry_next());

        assert_eq!(
            advisory.risk(RiskCategory::Disease).map(|r| r.level),
            Some(RiskLevel::High)
        );
        assert!(advisory.has_action("Inspect leaves for fungal spots due to high humidity."));
        assert_eq!(advisory.condition_label, ConditionLabel::Humid);
    }

    #[test]
    fn windy_day_blocks_spraying_without_rain_warning() {
        let advisory = compute_advisory(&day(20.0, 50.0, 20.0, 0.0), &dry_next());

        assert_eq!(
            advisory.risk(RiskCategory::Spray).map(|r| r.level),
            Some(RiskLevel::Bad)
        );
        assert!(advisory.has_action("Avoid spraying today due to high winds."));
        assert!(!advisory.has_action("Do not spray chemicals, rain expected."));
    }

    #[test]
    fn light_rain_day_skips_irrigation() {
        let advisory = compute_advisory(&day(20.0, 50.0, 5.0, 3.0), &dry_next());

        let irrigation = advisory.risk(RiskCategory::Irrigation).unwrap();
        assert_eq!(irrigation.level, RiskLevel::Low);
        assert_eq!(irrigation.label, "Irrigation: Not Needed");
        assert!(advisory.has_action("Skip irrigation, rain is forecasted."));
    }

    #[test]
    fn actions_truncate_in_generation_order() {
        // Fungal + wind + rain + skip-irrigation all fire; only the first three survive.
        let advisory = compute_advisory(&day(27.0, 90.0, 20.0, 3.0), &dry_next());
        let icons: Vec<_> = advisory.actions.iter().map(|a| a.icon).collect();
        assert_eq!(
            icons,
            vec![ActionIcon::Search, ActionIcon::Wind, ActionIcon::CloudRain]
        );
    }

    #[test]
    fn risks_always_cover_each_category_in_order() {
        let conditions = [
            WeatherCondition::Sunny,
            WeatherCondition::Cloudy,
            WeatherCondition::Rainy,
            WeatherCondition::Stormy,
        ];
        let engine = AdvisoryEngine::new();

        for temp in [5.0, 15.0, 24.5, 30.0, 33.0, 36.0] {
            for humidity in [10.0, 39.0, 60.0, 81.0, 90.0] {
                for wind in [0.0, 9.0, 15.0, 16.0, 30.0] {
                    for rain in [0.0, 1.0, 3.0, 8.0] {
                        for condition in conditions {
                            let current = ForecastDay {
                                condition,
                                ..day(temp, humidity, wind, rain)
                            };
                            for next in [dry_next(), next_with_rain(1.0), next_with_rain(6.0)] {
                                let advisory = engine.evaluate(&current, &next);
                                let categories: Vec<_> =
                                    advisory.risks.iter().map(|r| r.category).collect();
                                assert_eq!(categories, RiskCategory::ALL.to_vec());
                                assert!(advisory.actions.len() <= MAX_ACTIONS);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let engine = AdvisoryEngine::new();
        let current = sunny(31.0, 70.0, 12.0, 1.0);
        let next = next_with_rain(4.0);
        assert_eq!(engine.evaluate(&current, &next), engine.evaluate(&current, &next));
        assert_eq!(engine.evaluate(&current, &next), compute_advisory(&current, &next));
    }

    #[test]
    fn single_rule_lookup() {
        let engine = AdvisoryEngine::new();
        let outcome = engine
            .evaluate_rule("spray_window", &day(20.0, 50.0, 5.0, 0.0), &next_with_rain(1.0))
            .unwrap();
        assert_eq!(outcome.risk.level, RiskLevel::Bad);
        assert!(engine
            .evaluate_rule("unknown", &day(20.0, 50.0, 5.0, 0.0), &dry_next())
            .is_none());

        let ids: Vec<_> = engine.list_rules().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["disease_risk", "spray_window", "irrigation"]);
    }

    #[test]
    fn rules_are_registered_in_category_order() {
        let categories: Vec<_> = AdvisoryEngine::new()
            .list_rules()
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, RiskCategory::ALL.to_vec());
    }
}
