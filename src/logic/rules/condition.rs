use crate::models::{ConditionLabel, ForecastDay};

pub const HOT_TEMP_C: f64 = 35.0;
const DRY_HUMIDITY: f64 = 40.0;
pub const COLD_TEMP_C: f64 = 15.0;
const RAINY_MM: f64 = 5.0;
const HUMID_PERCENT: f64 = 80.0;
const WINDY_KMH: f64 = 15.0;

/// Headline label for the day. Checks run in priority order, first match wins.
pub fn condition_label(day: &ForecastDay) -> ConditionLabel {
    if day.temperature_c > HOT_TEMP_C && day.humidity_percent < DRY_HUMIDITY {
        ConditionLabel::HotAndDry
    } else if day.temperature_c < COLD_TEMP_C {
        ConditionLabel::Cold
    } else if day.rainfall_mm > RAINY_MM {
        ConditionLabel::Rainy
    } else if day.humidity_percent > HUMID_PERCENT {
        ConditionLabel::Humid
    } else if day.wind_speed_kmh > WINDY_KMH {
        ConditionLabel::Windy
    } else {
        ConditionLabel::Pleasant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::day;

    #[test]
    fn hot_and_dry_needs_both_conditions() {
        assert_eq!(condition_label(&day(36.0, 30.0, 5.0, 0.0)), ConditionLabel::HotAndDry);
        assert_eq!(condition_label(&day(36.0, 40.0, 5.0, 0.0)), ConditionLabel::Pleasant);
        assert_eq!(condition_label(&day(35.0, 30.0, 5.0, 0.0)), ConditionLabel::Pleasant);
    }

    #[test]
    fn cold_outranks_rain_humidity_and_wind() {
        assert_eq!(condition_label(&day(10.0, 95.0, 30.0, 20.0)), ConditionLabel::Cold);
        assert_eq!(condition_label(&day(15.0, 50.0, 5.0, 0.0)), ConditionLabel::Pleasant);
    }

    #[test]
    fn rain_outranks_humidity_and_wind() {
        assert_eq!(condition_label(&day(25.0, 95.0, 30.0, 6.0)), ConditionLabel::Rainy);
        assert_eq!(condition_label(&day(25.0, 50.0, 5.0, 5.0)), ConditionLabel::Pleasant);
    }

    #[test]
    fn humid_outranks_wind() {
        assert_eq!(condition_label(&day(25.0, 81.0, 30.0, 0.0)), ConditionLabel::Humid);
        assert_eq!(condition_label(&day(25.0, 80.0, 16.0, 0.0)), ConditionLabel::Windy);
        assert_eq!(condition_label(&day(25.0, 80.0, 15.0, 0.0)), ConditionLabel::Pleasant);
    }
}
