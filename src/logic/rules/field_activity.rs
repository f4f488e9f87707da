use crate::models::{Action, ActionIcon, ConditionLabel, ForecastDay, WeatherCondition};

const CALM_WIND_KMH: f64 = 10.0;

/// General farm-work hints, independent of the risk categories.
pub fn activity_hints(current: &ForecastDay, label: ConditionLabel) -> Vec<Action> {
    let mut hints = Vec::new();

    if label == ConditionLabel::HotAndDry {
        hints.push(Action::suggestion(
            ActionIcon::Sun,
            "Good day for drying harvested crops.",
        ));
    }
    if current.condition == WeatherCondition::Sunny && current.wind_speed_kmh < CALM_WIND_KMH {
        hints.push(Action::suggestion(
            ActionIcon::Sprout,
            "Ideal conditions for sowing or weeding.",
        ));
    }

    hints
}
