use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde_json::Value;

use crate::json::FieldLookup;

/// First heater in a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaterDevice {
    pub ambient_temp_c: f32,
    pub power_on: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaterRoom {
    pub name: String,
    pub device: HeaterDevice,
}

/// Per-room heater state, rooms in feed order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaterStatus {
    pub rooms: Vec<HeaterRoom>,
}

impl HeaterStatus {
    pub fn from_json(doc: &Value) -> Self {
        let rooms = doc
            .entries_at(&["data", "rooms"])
            .filter_map(|(name, devices)| {
                // Only the first device per room is shown.
                let first = devices.as_array()?.first()?;
                Some(HeaterRoom {
                    name: name.to_string(),
                    device: HeaterDevice {
                        ambient_temp_c: first.f32_or(&["ambient_temp"], 0.0),
                        // `power` is a flag or the current draw in watts.
                        power_on: first.bool_or(&["power"], false),
                    },
                })
            })
            .collect();
        Self { rooms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_device_only_and_empty_rooms_skipped() {
        let doc = json!({ "data": { "rooms": {
            "Stue": [
                { "ambient_temp": 21.5, "power": 1200.0 },
                { "ambient_temp": 30.0, "power": 0 }
            ],
            "Bad": [],
            "Kontor": [{ "ambient_temp": 18.0, "power": false }]
        }}});
        let status = HeaterStatus::from_json(&doc);

        assert_eq!(status.rooms.len(), 2);
        // feed order
        assert_eq!(status.rooms[0].name, "Stue");
        assert_eq!(status.rooms[0].device.ambient_temp_c, 21.5);
        assert!(status.rooms[0].device.power_on);
        assert_eq!(status.rooms[1].name, "Kontor");
        assert!(!status.rooms[1].device.power_on);
    }

    #[test]
    fn test_missing_fields_default() {
        let doc = json!({ "data": { "rooms": { "Loft": [{}] } } });
        let status = HeaterStatus::from_json(&doc);
        assert_eq!(
            status.rooms[0].device,
            HeaterDevice {
                ambient_temp_c: 0.0,
                power_on: false
            }
        );
        assert!(HeaterStatus::from_json(&json!({ "data": 5 })).rooms.is_empty());
    }
}
