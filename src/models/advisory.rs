use super::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Maximum number of actions carried by an advisory
pub const MAX_ACTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Disease,
    Spray,
    Irrigation,
}

impl RiskCategory {
    /// Fixed order in which risks appear in an advisory
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Disease,
        RiskCategory::Spray,
        RiskCategory::Irrigation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Disease => "Disease",
            RiskCategory::Spray => "Spray",
            RiskCategory::Irrigation => "Irrigation",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Good,
    Bad,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Good => "good",
            RiskLevel::Bad => "bad",
        }
    }

    /// High and bad levels call for attention
    pub fn is_alert(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Bad)
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            RiskLevel::High | RiskLevel::Bad => Color::Red,
            RiskLevel::Medium => Color::Yellow,
            RiskLevel::Low | RiskLevel::Good => Color::Green,
        }
    }

    pub fn symbol(&self) -> &'static str {
        if self.is_alert() {
            "⚠"
        } else {
            "●"
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub level: RiskLevel,
    pub label: String,
}

impl RiskAssessment {
    pub fn new(category: RiskCategory, level: RiskLevel, label: impl Into<String>) -> Self {
        Self {
            category,
            level,
            label: label.into(),
        }
    }
}

/// Icon hint used by renderers to pick a glyph for an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionIcon {
    Search,
    Wind,
    CloudRain,
    Droplets,
    Sun,
    Sprout,
}

impl ActionIcon {
    pub fn symbol(&self) -> &'static str {
        match self {
            ActionIcon::Search => "🔍",
            ActionIcon::Wind => "💨",
            ActionIcon::CloudRain => "🌧",
            ActionIcon::Droplets => "💧",
            ActionIcon::Sun => "☀",
            ActionIcon::Sprout => "🌱",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            ActionIcon::Search => Color::LightRed,
            ActionIcon::Wind => Color::Gray,
            ActionIcon::CloudRain => Color::Blue,
            ActionIcon::Droplets => Color::LightBlue,
            ActionIcon::Sun => Color::Yellow,
            ActionIcon::Sprout => Color::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Warning,
    Suggestion,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Warning => "Warning",
            ActionKind::Suggestion => "Suggestion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub icon: ActionIcon,
    pub kind: ActionKind,
    pub text: String,
}

impl Action {
    pub fn warning(icon: ActionIcon, text: impl Into<String>) -> Self {
        Self {
            icon,
            kind: ActionKind::Warning,
            text: text.into(),
        }
    }

    pub fn suggestion(icon: ActionIcon, text: impl Into<String>) -> Self {
        Self {
            icon,
            kind: ActionKind::Suggestion,
            text: text.into(),
        }
    }
}

/// Headline description of today's weather
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionLabel {
    #[serde(rename = "Hot & Dry")]
    HotAndDry,
    Cold,
    Rainy,
    Humid,
    Windy,
    Pleasant,
}

impl ConditionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionLabel::HotAndDry => "Hot & Dry",
            ConditionLabel::Cold => "Cold",
            ConditionLabel::Rainy => "Rainy",
            ConditionLabel::Humid => "Humid",
            ConditionLabel::Windy => "Windy",
            ConditionLabel::Pleasant => "Pleasant",
        }
    }
}

impl std::fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub condition_label: ConditionLabel,
    pub condition_icon: WeatherCondition,
    pub risks: Vec<RiskAssessment>,
    pub actions: Vec<Action>,
}

impl Advisory {
    pub fn risk(&self, category: RiskCategory) -> Option<&RiskAssessment> {
        self.risks.iter().find(|r| r.category == category)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Action> {
        self.actions
            .iter()
            .filter(|a| a.kind == ActionKind::Warning)
    }

    pub fn has_action(&self, text: &str) -> bool {
        self.actions.iter().any(|a| a.text == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_alerts() {
        assert!(RiskLevel::High.is_alert());
        assert!(RiskLevel::Bad.is_alert());
        assert!(!RiskLevel::Medium.is_alert());
        assert!(!RiskLevel::Low.is_alert());
        assert!(!RiskLevel::Good.is_alert());
    }

    #[test]
    fn serializes_wire_names() {
        let risk = RiskAssessment::new(RiskCategory::Spray, RiskLevel::Bad, "Spray: Bad Window");
        let json = serde_json::to_value(&risk).unwrap();
        assert_eq!(json["category"], "spray");
        assert_eq!(json["level"], "bad");

        let action = Action::suggestion(ActionIcon::CloudRain, "x");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["icon"], "CloudRain");
        assert_eq!(json["kind"], "suggestion");

        let json = serde_json::to_string(&ConditionLabel::HotAndDry).unwrap();
        assert_eq!(json, "\"Hot & Dry\"");
    }

    #[test]
    fn advisory_lookup_helpers() {
        let advisory = Advisory {
            condition_label: ConditionLabel::Windy,
            condition_icon: WeatherCondition::Cloudy,
            risks: vec![
                RiskAssessment::new(RiskCategory::Disease, RiskLevel::Low, "Low Disease Risk"),
                RiskAssessment::new(RiskCategory::Spray, RiskLevel::Bad, "Spray: Bad Window"),
            ],
            actions: vec![
                Action::warning(ActionIcon::Wind, "Avoid spraying today due to high winds."),
                Action::suggestion(ActionIcon::Sprout, "Ideal conditions for sowing or weeding."),
            ],
        };

        assert_eq!(
            advisory.risk(RiskCategory::Spray).map(|r| r.level),
            Some(RiskLevel::Bad)
        );
        assert!(advisory.risk(RiskCategory::Irrigation).is_none());
        assert_eq!(advisory.warnings().count(), 1);
        assert!(advisory.has_action("Avoid spraying today due to high winds."));
        assert!(!advisory.has_action("Skip irrigation, rain is forecasted."));
    }
}
