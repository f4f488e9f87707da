//! Typed shapes for the JSON the generative-AI service returns.
//!
//! Raw text from the service is untrusted: it may be wrapped in Markdown code
//! fences, omit fields, or carry free-form enum values. Everything goes
//! through [`AiResponse::parse`], which strips fences, fills defaults and
//! rejects responses missing the fields a renderer cannot do without.

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiResponseKind {
    Disease,
    Crop,
    Market,
    Schemes,
}

impl AiResponseKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "disease" | "diagnosis" => Some(AiResponseKind::Disease),
            "crop" | "crops" => Some(AiResponseKind::Crop),
            "market" | "mandi" => Some(AiResponseKind::Market),
            "schemes" | "scheme" => Some(AiResponseKind::Schemes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiResponseKind::Disease => "disease",
            AiResponseKind::Crop => "crop",
            AiResponseKind::Market => "market",
            AiResponseKind::Schemes => "schemes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum AiResponse {
    Disease(DiseaseDiagnosis),
    Crop(CropAdvice),
    Market(MarketReport),
    Schemes(Vec<GovernmentScheme>),
}

impl AiResponse {
    pub fn parse(kind: AiResponseKind, raw: &str) -> Result<Self> {
        let body = strip_code_fences(raw);
        if body.is_empty() {
            return Err(AdvisorError::InvalidResponse(format!(
                "empty {} response",
                kind.as_str()
            )));
        }

        let response = match kind {
            AiResponseKind::Disease => {
                let diagnosis: DiseaseDiagnosis = serde_json::from_str(body)?;
                require_text("plant_name", &diagnosis.plant_name)?;
                AiResponse::Disease(diagnosis)
            }
            AiResponseKind::Crop => {
                let advice: CropAdvice = serde_json::from_str(body)?;
                for crop in &advice.recommended_crops {
                    require_text("recommended_crops[].name", &crop.name)?;
                }
                AiResponse::Crop(advice)
            }
            AiResponseKind::Market => {
                let report: MarketReport = serde_json::from_str(body)?;
                for group in &report.groups {
                    for item in &group.items {
                        require_text("groups[].items[].name", &item.name)?;
                    }
                }
                AiResponse::Market(report)
            }
            AiResponseKind::Schemes => {
                let schemes: Vec<GovernmentScheme> = serde_json::from_str(body)?;
                for scheme in &schemes {
                    require_text("name", &scheme.name)?;
                }
                AiResponse::Schemes(schemes)
            }
        };

        tracing::debug!("Parsed {} AI response", kind.as_str());
        Ok(response)
    }

    pub fn kind(&self) -> AiResponseKind {
        match self {
            AiResponse::Disease(_) => AiResponseKind::Disease,
            AiResponse::Crop(_) => AiResponseKind::Crop,
            AiResponse::Market(_) => AiResponseKind::Market,
            AiResponse::Schemes(_) => AiResponseKind::Schemes,
        }
    }
}

/// Remove ```json / ``` fences the model sometimes wraps around its output
pub fn strip_code_fences(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest.strip_prefix("json").unwrap_or(rest);
    }
    if let Some(rest) = body.trim_end().strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdvisorError::InvalidResponse(format!(
            "missing required field '{}'",
            field
        )));
    }
    Ok(())
}

// Field-level leniency: the model is free to emit `null`, numbers or a bare
// string where a list is expected. Those degrade to defaults instead of
// failing the whole response.

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_text_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    };
    Ok(items)
}

fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes"),
        _ => false,
    };
    Ok(flag)
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseDiagnosis {
    #[serde(default, deserialize_with = "lenient_text")]
    pub plant_name: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_healthy: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub diagnosis: String,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub symptoms: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub treatments: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAdvice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommended_crops: Vec<CropSuggestion>,
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub soil_health_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropSuggestion {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub season: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: String,
    #[serde(default)]
    pub market_potential: MarketPotential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MarketPotential {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl MarketPotential {
    fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => MarketPotential::High,
            "medium" | "moderate" => MarketPotential::Medium,
            "low" => MarketPotential::Low,
            _ => MarketPotential::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for MarketPotential {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::from_label).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    #[serde(default, deserialize_with = "lenient_text")]
    pub market_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<MarketGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketGroup {
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<MarketItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketItem {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub price: String,
    #[serde(default)]
    pub trend: PriceTrend,
    #[serde(default, deserialize_with = "lenient_text")]
    pub news: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
    #[default]
    Unknown,
}

impl PriceTrend {
    fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "up" | "rising" => PriceTrend::Up,
            "down" | "falling" => PriceTrend::Down,
            "stable" | "flat" => PriceTrend::Stable,
            _ => PriceTrend::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PriceTrend::Up => "↑",
            PriceTrend::Down => "↓",
            PriceTrend::Stable => "→",
            PriceTrend::Unknown => "?",
        }
    }
}

impl<'de> Deserialize<'de> for PriceTrend {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Self::from_label).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GovernmentScheme {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub benefits: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub eligibility: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub official_link_query: String,
}
