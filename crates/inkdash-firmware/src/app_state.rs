//! Firmware-level error type.

use core::fmt::{Display, Write as _};

use thiserror_no_std::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("WiFi connection failed: {0}")]
    Wifi(heapless::String<64>),
    #[error("Time sync failed: {0}")]
    TimeSync(heapless::String<64>),
    #[error("Display error: {0}")]
    Display(heapless::String<64>),
}

/// Render `value` into a fixed-capacity message, cutting it off at 64 bytes.
pub fn message(value: impl Display) -> heapless::String<64> {
    let mut text = heapless::String::new();
    let _ = write!(text, "{}", value);
    text
}
