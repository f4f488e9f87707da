//! Plain-text rendering for the non-interactive subcommands.
//!
//! Each view wraps a borrowed model and implements `Display`, so callers
//! can `print!` it directly or call `to_string()`.

use crate::logic::{AdvisoryReport, RuleInfo, RuleOutcome};
use crate::models::{Advisory, AiResponse, ForecastDay, RiskAssessment};
use std::fmt;

pub struct AdvisoryView<'a>(pub &'a Advisory);

impl fmt::Display for AdvisoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let advisory = self.0;
        writeln!(
            f,
            "{} {}",
            advisory.condition_icon.symbol(),
            advisory.condition_label
        )?;
        writeln!(f)?;

        writeln!(f, "Risks")?;
        for risk in &advisory.risks {
            write_risk(f, risk)?;
        }
        writeln!(f)?;

        if advisory.actions.is_empty() {
            return writeln!(f, "No actions today.");
        }

        let warnings = advisory.warnings().count();
        if warnings > 0 {
            writeln!(f, "Actions ({} warning(s))", warnings)?;
        } else {
            writeln!(f, "Actions")?;
        }
        for action in &advisory.actions {
            writeln!(
                f,
                "  {} [{}] {}",
                action.icon.symbol(),
                action.kind.as_str(),
                action.text
            )?;
        }
        Ok(())
    }
}

pub struct ReportView<'a>(pub &'a AdvisoryReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        match report.today() {
            Some(today) => {
                writeln!(
                    f,
                    "{} - {}",
                    report.location.label(),
                    today.date.format("%A, %d %b %Y")
                )?;
                writeln!(
                    f,
                    "{:.0}°C • Humidity {:.0}% • Wind {:.0} km/h • Rain {:.0} mm",
                    today.temperature_c,
                    today.humidity_percent,
                    today.wind_speed_kmh,
                    today.rainfall_mm
                )?;
            }
            None => writeln!(f, "{}", report.location.label())?,
        }
        writeln!(f)?;
        write!(f, "{}", AdvisoryView(&report.advisory))
    }
}

pub struct ForecastTable<'a>(pub &'a [ForecastDay]);

impl fmt::Display for ForecastTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:<8} {:>6} {:>9} {:>10} {:>8}",
            "Date", "Sky", "Temp", "Humidity", "Wind", "Rain"
        )?;
        for day in self.0 {
            writeln!(
                f,
                "{:<12} {:<8} {:>4.0}°C {:>8.0}% {:>5.0} km/h {:>5.0} mm",
                day.date.format("%a %d %b").to_string(),
                day.condition.as_str(),
                day.temperature_c,
                day.humidity_percent,
                day.wind_speed_kmh,
                day.rainfall_mm
            )?;
        }
        Ok(())
    }
}

/// Output of `kisan evaluate --rule`
pub struct RuleOutcomeView<'a>(pub &'a RuleOutcome);

impl fmt::Display for RuleOutcomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_risk(f, &self.0.risk)?;
        for action in &self.0.actions {
            writeln!(f, "  {} {}", action.icon.symbol(), action.text)?;
        }
        Ok(())
    }
}

pub struct RuleList<'a>(pub &'a [RuleInfo]);

impl fmt::Display for RuleList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.0 {
            writeln!(f, "{:<14} {:<11} {}", rule.id, rule.category.as_str(), rule.name)?;
        }
        Ok(())
    }
}

pub struct AiResponseView<'a>(pub &'a AiResponse);

impl fmt::Display for AiResponseView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AiResponse::Disease(d) => {
                let status = if d.is_healthy { "Healthy" } else { "Diseased" };
                writeln!(f, "{} - {} ({})", d.plant_name, d.diagnosis, status)?;
                if !d.description.is_empty() {
                    writeln!(f, "{}", d.description)?;
                }
                write_list(f, "Symptoms", &d.symptoms)?;
                write_list(f, "Treatments", &d.treatments)
            }
            AiResponse::Crop(advice) => {
                writeln!(f, "Recommended crops")?;
                for crop in &advice.recommended_crops {
                    writeln!(
                        f,
                        "  {} [{}] market potential: {:?}",
                        crop.name, crop.season, crop.market_potential
                    )?;
                    if !crop.reason.is_empty() {
                        writeln!(f, "    {}", crop.reason)?;
                    }
                }
                write_list(f, "Soil health tips", &advice.soil_health_tips)
            }
            AiResponse::Market(report) => {
                writeln!(f, "{}", report.market_summary)?;
                for group in &report.groups {
                    writeln!(f, "{}", group.category)?;
                    for item in &group.items {
                        writeln!(f, "  {} {} {}", item.trend.symbol(), item.name, item.price)?;
                        if !item.news.is_empty() {
                            writeln!(f, "    {}", item.news)?;
                        }
                    }
                }
                Ok(())
            }
            AiResponse::Schemes(schemes) => {
                for scheme in schemes {
                    writeln!(f, "{}", scheme.name)?;
                    for (label, value) in [
                        ("About", &scheme.description),
                        ("Benefits", &scheme.benefits),
                        ("Eligibility", &scheme.eligibility),
                    ] {
                        if !value.is_empty() {
                            writeln!(f, "  {}: {}", label, value)?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

fn write_risk(f: &mut fmt::Formatter<'_>, risk: &RiskAssessment) -> fmt::Result {
    writeln!(
        f,
        "  {} {:<11} {} ({})",
        risk.level.symbol(),
        risk.category.as_str(),
        risk.label,
        risk.level
    )
}

fn write_list(f: &mut fmt::Formatter<'_>, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}", title)?;
    for item in items {
        writeln!(f, "  - {}", item)?;
    }
    Ok(())
}
