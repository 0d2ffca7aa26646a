use alloc::string::{String, ToString};
use serde_json::Value;

use crate::json::FieldLookup;

/// Symbol code used when the forecast carries none.
pub const UNKNOWN_SYMBOL: &str = "unknown";

/// Current outdoor conditions.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub air_temperature_c: f32,
    pub relative_humidity_pct: f32,
    pub wind_speed_ms: f32,
    pub symbol_code: String,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            air_temperature_c: 0.0,
            relative_humidity_pct: 0.0,
            wind_speed_ms: 0.0,
            symbol_code: UNKNOWN_SYMBOL.to_string(),
        }
    }
}

impl WeatherSnapshot {
    pub fn from_json(doc: &Value) -> Self {
        let detail = |field: &str| doc.f32_or(&["data", "instant", "details", field], 0.0);

        Self {
            air_temperature_c: detail("air_temperature"),
            relative_humidity_pct: detail("relative_humidity"),
            wind_speed_ms: detail("wind_speed"),
            symbol_code: doc
                .str_or(&["data", "next_1_hours", "summary", "symbol_code"], UNKNOWN_SYMBOL)
                .to_string(),
        }
    }
}
