use serde::{Deserialize, Serialize};

/// Fallback coordinates (New Delhi) when no location is configured
pub const DEFAULT_LATITUDE: f64 = 28.61;
pub const DEFAULT_LONGITUDE: f64 = 77.20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            latitude,
            longitude,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    /// Name if set, otherwise the rounded coordinates
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.2}, {:.2}", self.latitude, self.longitude),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_coordinates() {
        let loc = Location::new(18.5204, 73.8567);
        assert_eq!(loc.label(), "18.52, 73.86");
        assert_eq!(loc.with_name("Pune").label(), "Pune");
    }

    #[test]
    fn blank_name_is_ignored() {
        let loc = Location::default().with_name("   ");
        assert_eq!(loc.name, None);
        assert_eq!(loc.label(), "28.61, 77.20");
    }

    #[test]
    fn coordinate_bounds() {
        assert!(Location::default().is_valid());
        assert!(!Location::new(91.0, 0.0).is_valid());
        assert!(!Location::new(0.0, -181.0).is_valid());
        assert!(!Location::new(f64::NAN, 0.0).is_valid());
    }
}
