//! Battery gauge: single-cell Li-ion voltage to a displayed percentage.

/// Voltage treated as a full cell.
pub const FULL_VOLTAGE: f32 = 4.2;

/// Voltage treated as an empty cell.
pub const EMPTY_VOLTAGE: f32 = 3.3;

/// Readings outside this window mean no battery is attached (USB-only
/// power, floating ADC pin) rather than a flat or overcharged cell.
pub const PLAUSIBLE_RANGE: core::ops::RangeInclusive<f32> = 2.5..=5.5;

/// Default threshold below which the gauge shows the low-battery label.
pub const DEFAULT_LOW_VOLTAGE: f32 = 3.4;

/// Linear map with saturation, truncated toward zero.
pub fn percentage(voltage: f32) -> u8 {
    if voltage >= FULL_VOLTAGE {
        100
    } else if voltage <= EMPTY_VOLTAGE {
        0
    } else {
        ((voltage - EMPTY_VOLTAGE) / (FULL_VOLTAGE - EMPTY_VOLTAGE) * 100.0) as u8
    }
}

/// A voltage sample that passed the plausibility gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub voltage: f32,
    pub percent: u8,
}

impl BatteryReading {
    pub fn is_low(&self, threshold: f32) -> bool {
        self.voltage < threshold
    }
}

/// Apply the plausibility gate; `None` hides the gauge without raising an
/// error.
pub fn reading(voltage: f32) -> Option<BatteryReading> {
    PLAUSIBLE_RANGE
        .contains(&voltage)
        .then(|| BatteryReading {
            voltage,
            percent: percentage(voltage),
        })
}
