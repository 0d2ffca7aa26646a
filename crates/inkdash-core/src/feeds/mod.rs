//! Feed documents and the models mapped from them.
//!
//! Each feed is fetched independently every wake. Mapping from a parsed
//! document to a model is total: missing or mistyped fields fall back to
//! defaults, and only an unreachable endpoint or an unparseable body marks a
//! feed as failed.

mod air_quality;
mod calendar;
mod heater;
mod weather;

pub use air_quality::{AirQualitySnapshot, DEFAULT_RADON_LEVEL};
pub use calendar::{CalendarDay, Event, MAX_STUDENTS, calendar_days};
pub use heater::{HeaterDevice, HeaterRoom, HeaterStatus};
pub use weather::{UNKNOWN_SYMBOL, WeatherSnapshot};

use serde_json::Value;

use crate::error::FetchError;
use crate::json::parse_document;

/// The four data sources the dashboard pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Weather,
    Calendar,
    AirQuality,
    Heater,
}

impl FeedKind {
    /// Fetch order; also the order tags appear in the footer banner.
    pub const ALL: [Self; 4] = [Self::Weather, Self::Calendar, Self::AirQuality, Self::Heater];

    /// Position in [`FeedKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label used in the footer error banner.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Weather => "Vaer",
            Self::Calendar => "Kalender",
            Self::AirQuality => "Inneluft",
            Self::Heater => "Ovner",
        }
    }

    /// Base file name used by fixture-backed sources.
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Calendar => "calendar",
            Self::AirQuality => "air_quality",
            Self::Heater => "heater",
        }
    }
}

/// Outcome of one feed for one wake cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState<T> {
    /// No endpoint configured; left off the page without an error tag.
    Disabled,
    /// Endpoint configured but the fetch or parse failed.
    Failed(FetchError),
    Ready(T),
}

impl<T> FeedState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FeedState<U> {
        match self {
            Self::Disabled => FeedState::Disabled,
            Self::Failed(err) => FeedState::Failed(err),
            Self::Ready(value) => FeedState::Ready(f(value)),
        }
    }
}

impl FeedState<Value> {
    /// Turn a fetch result into a parsed document state.
    pub fn from_body(body: Result<alloc::vec::Vec<u8>, FetchError>) -> Self {
        match body.and_then(|bytes| parse_document(&bytes)) {
            Ok(doc) => Self::Ready(doc),
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_tags_are_distinct() {
        for (i, a) in FeedKind::ALL.iter().enumerate() {
            for b in &FeedKind::ALL[i + 1..] {
                assert_ne!(a.tag(), b.tag());
            }
        }
        for (i, kind) in FeedKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_state_from_body() {
        let ok = FeedState::from_body(Ok(vec![b'{', b'}']));
        assert!(ok.ready().is_some());

        let bad = FeedState::from_body(Ok(b"<html>".to_vec()));
        assert_eq!(bad, FeedState::Failed(FetchError::MalformedJson));

        let down = FeedState::from_body(Err(FetchError::Timeout));
        assert!(down.is_failed());
    }
}
