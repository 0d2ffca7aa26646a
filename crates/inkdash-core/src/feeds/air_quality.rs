use alloc::string::{String, ToString};
use serde_json::Value;

use crate::json::FieldLookup;

/// Radon level assumed when the sensor reports none. The page only shows
/// radon when it differs from this.
pub const DEFAULT_RADON_LEVEL: &str = "good";

/// Indoor readings from the air-quality sensor bridge.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualitySnapshot {
    pub indoor_temp_c: f32,
    pub indoor_humidity_pct: f32,
    pub radon_level: String,
}

impl Default for AirQualitySnapshot {
    fn default() -> Self {
        Self {
            indoor_temp_c: 0.0,
            indoor_humidity_pct: 0.0,
            radon_level: DEFAULT_RADON_LEVEL.to_string(),
        }
    }
}

impl AirQualitySnapshot {
    pub fn from_json(doc: &Value) -> Self {
        Self {
            indoor_temp_c: doc.f32_or(&["data", "temperature"], 0.0),
            indoor_humidity_pct: doc.f32_or(&["data", "humidity"], 0.0),
            radon_level: doc
                .str_or(&["data", "radon_24h_level"], DEFAULT_RADON_LEVEL)
                .to_string(),
        }
    }

    pub fn radon_notable(&self) -> bool {
        self.radon_level != DEFAULT_RADON_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_radon_defaults_to_good() {
        let aq = AirQualitySnapshot::from_json(&json!({ "data": { "temperature": 21.3 } }));
        assert_eq!(aq.indoor_temp_c, 21.3);
        assert_eq!(aq.indoor_humidity_pct, 0.0);
        assert_eq!(aq.radon_level, "good");
        assert!(!aq.radon_notable());
    }

    #[test]
    fn test_notable_radon() {
        let aq = AirQualitySnapshot::from_json(&json!({ "data": { "radon_24h_level": "poor" } }));
        assert!(aq.radon_notable());
    }
}
