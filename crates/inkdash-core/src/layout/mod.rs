//! Dashboard page layout.
//!
//! [`render`] turns one wake cycle's feed states into a complete page of
//! draw-ops: weather, battery, indoor air and heaters in the left column,
//! upcoming calendar days in the right column, and an error banner in the
//! footer. It never fails; anything missing is drawn with defaults and
//! tagged in the banner.

mod calendar_column;
mod constants;
mod footer;
mod left_column;
mod wifi_error;

pub use constants::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
pub use wifi_error::{WIFI_ERROR_HELP, WIFI_ERROR_MESSAGE, wifi_error};

use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use serde::{Deserialize, Serialize};

use crate::battery::{BatteryReading, DEFAULT_LOW_VOLTAGE};
use crate::draw::{Canvas, DrawOp, INK, PAPER};
use crate::feeds::{
    AirQualitySnapshot, CalendarDay, FeedKind, FeedState, HeaterStatus, WeatherSnapshot,
};
use crate::text::{DEFAULT_BANNER_MAX_CHARS, DEFAULT_TEXT_BUDGET_CHARS, ErrorBanner};
use crate::time::LocalTime;
use constants::*;

/// Calendar days shown: today and tomorrow.
pub const DEFAULT_CALENDAR_HORIZON_DAYS: usize = 2;

/// Tunables of the page layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Character budget for event summaries and dinner text.
    pub text_budget_chars: usize,
    pub calendar_horizon_days: usize,
    pub banner_max_chars: usize,
    /// Below this voltage the gauge shows the low-battery label.
    pub low_battery_voltage: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_budget_chars: DEFAULT_TEXT_BUDGET_CHARS,
            calendar_horizon_days: DEFAULT_CALENDAR_HORIZON_DAYS,
            banner_max_chars: DEFAULT_BANNER_MAX_CHARS,
            low_battery_voltage: DEFAULT_LOW_VOLTAGE,
        }
    }
}

/// Everything one page is drawn from.
#[derive(Debug, Clone)]
pub struct RenderInputs<'a> {
    /// Local time, `None` when time sync failed.
    pub now: Option<LocalTime>,
    pub weather: &'a FeedState<WeatherSnapshot>,
    pub calendar: &'a FeedState<Vec<CalendarDay>>,
    pub air_quality: &'a FeedState<AirQualitySnapshot>,
    pub heater: &'a FeedState<HeaterStatus>,
    /// Gated battery reading, `None` when no battery is present.
    pub battery: Option<BatteryReading>,
}

/// A finished page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub ops: Vec<DrawOp>,
    pub errors: ErrorBanner,
}

/// Lay out the full dashboard page.
pub fn render(inputs: &RenderInputs<'_>, config: &LayoutConfig) -> RenderResult {
    let mut canvas = Canvas::new();
    let mut errors = ErrorBanner::new();

    let failed = [
        (FeedKind::Weather, inputs.weather.failure()),
        (FeedKind::Calendar, inputs.calendar.failure()),
        (FeedKind::AirQuality, inputs.air_quality.failure()),
        (FeedKind::Heater, inputs.heater.failure()),
    ];
    for (kind, err) in failed {
        if let Some(err) = err {
            log::warn!("{} feed unavailable: {}", kind.tag(), err);
            errors.push(kind.tag());
        }
    }

    canvas.clear(PAPER);

    left_column::draw_header(&mut canvas, inputs.now, inputs.battery, config);
    if let Some(weather) = model_or_default(inputs.weather) {
        left_column::draw_weather(&mut canvas, &weather);
    }
    if let Some(air) = model_or_default(inputs.air_quality) {
        left_column::draw_air_quality(&mut canvas, &air);
    }
    if let Some(heater) = model_or_default(inputs.heater) {
        left_column::draw_heaters(&mut canvas, &heater);
    }

    // Full height; the footer band, when drawn, covers the bottom end.
    canvas.line(
        Point::new(DIVIDER_X_PX, 0),
        Point::new(DIVIDER_X_PX, DISPLAY_HEIGHT_PX as i32 - 1),
        INK,
    );

    calendar_column::draw(&mut canvas, inputs.calendar, inputs.now, config);

    footer::draw(&mut canvas, &errors, config.banner_max_chars);
    canvas.flip();

    RenderResult {
        ops: canvas.into_ops(),
        errors,
    }
}

/// Model to draw for one feed; `None` omits the block (feed disabled).
fn model_or_default<T: Clone + Default>(state: &FeedState<T>) -> Option<T> {
    match state {
        FeedState::Disabled => None,
        FeedState::Failed(_) => Some(T::default()),
        FeedState::Ready(model) => Some(model.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::time::TimeZone;
    use alloc::string::String;

    fn fixed_now() -> LocalTime {
        // Monday 2024-01-01 18:30 UTC
        LocalTime::from_unix(1_704_133_800, &TimeZone::UTC)
    }

    fn printed(ops: &[DrawOp]) -> Vec<String> {
        ops.iter().filter_map(DrawOp::text).map(String::from).collect()
    }

    #[test]
    fn test_page_is_cleared_first_and_flipped_last() {
        let disabled_w = FeedState::Disabled;
        let disabled_c = FeedState::Disabled;
        let disabled_a = FeedState::Disabled;
        let disabled_h = FeedState::Disabled;
        let inputs = RenderInputs {
            now: None,
            weather: &disabled_w,
            calendar: &disabled_c,
            air_quality: &disabled_a,
            heater: &disabled_h,
            battery: None,
        };
        let result = render(&inputs, &LayoutConfig::default());

        assert_eq!(result.ops.first(), Some(&DrawOp::Clear(PAPER)));
        assert_eq!(result.ops.last(), Some(&DrawOp::Flip));
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_divider_runs_to_the_bottom_edge() {
        let weather = FeedState::Ready(WeatherSnapshot::default());
        let disabled_c = FeedState::Disabled;
        let disabled_a = FeedState::Disabled;
        let disabled_h = FeedState::Disabled;
        let inputs = RenderInputs {
            now: Some(fixed_now()),
            weather: &weather,
            calendar: &disabled_c,
            air_quality: &disabled_a,
            heater: &disabled_h,
            battery: None,
        };
        let result = render(&inputs, &LayoutConfig::default());
        assert!(result.errors.is_empty());

        let bottom = result.ops.iter().find_map(|op| match op {
            DrawOp::DrawLine { line, .. } if line.start.x == DIVIDER_X_PX => Some(line.end),
            _ => None,
        });
        assert_eq!(bottom, Some(Point::new(DIVIDER_X_PX, 479)));
    }

    #[test]
    fn test_failed_feeds_are_tagged_in_fetch_order() {
        let weather = FeedState::Failed(FetchError::Timeout);
        let calendar = FeedState::Failed(FetchError::Http { status: 500 });
        let air = FeedState::Ready(AirQualitySnapshot::default());
        let heater = FeedState::Failed(FetchError::MalformedJson);
        let inputs = RenderInputs {
            now: Some(fixed_now()),
            weather: &weather,
            calendar: &calendar,
            air_quality: &air,
            heater: &heater,
            battery: None,
        };
        let result = render(&inputs, &LayoutConfig::default());

        assert_eq!(result.errors.tags(), ["Vaer", "Kalender", "Ovner"]);
        let text = printed(&result.ops);
        assert!(text.iter().any(|t| t == "Feil: Vaer, Kalender, Ovner"));
        // weather defaults are still drawn
        assert!(text.iter().any(|t| t == "0.0 C"));
    }
}
