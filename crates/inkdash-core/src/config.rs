//! Dashboard configuration.
//!
//! [`DashboardConfig`] is the raw, borrowed form: the simulator parses it
//! from a JSON file and the firmware assembles it from compile-time
//! environment variables. [`DashboardConfig::validate`] turns it into
//! [`Settings`], the checked form a wake cycle runs on.

use core::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::error::UrlError;
use crate::feeds::FeedKind;
use crate::http::HttpUrl;
use crate::layout::LayoutConfig;
use crate::schedule::{DEFAULT_SLEEP_SECS, ScheduleError, SleepPlan, WakeSchedule};
use crate::time::TimeZone;

pub const DEFAULT_MAX_CONNECTION_ATTEMPTS: u32 = 20;
pub const DEFAULT_RETRY_INTERVAL_SECS: u32 = 60;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u32 = 15;
/// The air-quality bridge polls its sensor over Bluetooth before answering.
pub const DEFAULT_AIR_QUALITY_TIMEOUT_SECS: u32 = 25;
pub const DEFAULT_UPDATE_INTERVAL_SECS: u32 = 1800;
pub const DEFAULT_WAKE_TIMES: &str = "05:00,12:00,18:00";
/// Shortest sleep any setting may ask for, the same floor the wake table has.
pub const MIN_SLEEP_SECS: u32 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(heapless::String<64>),
    #[error("invalid {feed:?} endpoint: {reason}")]
    InvalidUrl { feed: FeedKind, reason: UrlError },
    #[error("invalid wake schedule: {0}")]
    Schedule(ScheduleError),
    #[error("{field} of {secs} s is below the {} s minimum", MIN_SLEEP_SECS)]
    SleepTooShort { field: &'static str, secs: u32 },
}

impl From<ScheduleError> for ConfigError {
    fn from(value: ScheduleError) -> Self {
        Self::Schedule(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(bound(deserialize = "'de: 'a"), default)]
pub struct DashboardConfig<'a> {
    pub internet: InternetConfig<'a>,
    pub endpoints: EndpointConfig<'a>,
    pub http_timeout_secs: u32,
    pub air_quality_timeout_secs: u32,
    /// Comma-separated `HH:MM` wake times; empty selects the fixed
    /// update interval instead.
    pub wake_times: &'a str,
    pub update_interval_secs: u32,
    /// Sleep used when the wake table is active but the time is unknown.
    pub default_sleep_secs: u32,
    pub time_zone: TimeZone,
    pub layout: LayoutConfig,
}

impl Default for DashboardConfig<'_> {
    fn default() -> Self {
        Self {
            internet: InternetConfig::default(),
            endpoints: EndpointConfig::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            air_quality_timeout_secs: DEFAULT_AIR_QUALITY_TIMEOUT_SECS,
            wake_times: DEFAULT_WAKE_TIMES,
            update_interval_secs: DEFAULT_UPDATE_INTERVAL_SECS,
            default_sleep_secs: DEFAULT_SLEEP_SECS,
            time_zone: TimeZone::default(),
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(bound(deserialize = "'de: 'a"), default)]
pub struct InternetConfig<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
    pub max_connection_attempts: u32,
    pub retry_interval_secs: u32,
}

impl Default for InternetConfig<'_> {
    fn default() -> Self {
        Self {
            ssid: "",
            password: "",
            max_connection_attempts: DEFAULT_MAX_CONNECTION_ATTEMPTS,
            retry_interval_secs: DEFAULT_RETRY_INTERVAL_SECS,
        }
    }
}

/// Feed URLs. A missing endpoint disables that feed.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(bound(deserialize = "'de: 'a"), default)]
pub struct EndpointConfig<'a> {
    pub weather: Option<&'a str>,
    pub calendar: Option<&'a str>,
    pub air_quality: Option<&'a str>,
    pub heater: Option<&'a str>,
}

impl<'a> EndpointConfig<'a> {
    pub fn get(&self, kind: FeedKind) -> Option<&'a str> {
        match kind {
            FeedKind::Weather => self.weather,
            FeedKind::Calendar => self.calendar,
            FeedKind::AirQuality => self.air_quality,
            FeedKind::Heater => self.heater,
        }
    }
}

impl<'a> DashboardConfig<'a> {
    /// Parse a JSON config document. Strings are borrowed from `json`.
    pub fn from_json(json: &'a str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| {
            let mut message = heapless::String::new();
            // Overlong messages are cut off at capacity.
            let _ = write!(message, "{}", err);
            ConfigError::Parse(message)
        })
    }

    /// Check every field once so the cycle never has to.
    pub fn validate(&self) -> Result<Settings<'a>, ConfigError> {
        let mut endpoints = [None; FeedKind::ALL.len()];
        for kind in FeedKind::ALL {
            let Some(url) = self.endpoints.get(kind).filter(|url| !url.trim().is_empty()) else {
                log::info!("{} feed disabled, no endpoint", kind.tag());
                continue;
            };
            let url = HttpUrl::parse(url)
                .map_err(|reason| ConfigError::InvalidUrl { feed: kind, reason })?;
            endpoints[kind.index()] = Some(url);
        }

        for (field, secs) in [
            ("update_interval_secs", self.update_interval_secs),
            ("retry_interval_secs", self.internet.retry_interval_secs),
            ("default_sleep_secs", self.default_sleep_secs),
        ] {
            if secs < MIN_SLEEP_SECS {
                return Err(ConfigError::SleepTooShort { field, secs });
            }
        }

        let sleep = if self.wake_times.trim().is_empty() {
            SleepPlan::Interval {
                secs: self.update_interval_secs,
            }
        } else {
            SleepPlan::WakeTable(WakeSchedule::parse_list(self.wake_times)?)
        };

        Ok(Settings {
            ssid: self.internet.ssid,
            password: self.internet.password,
            max_connection_attempts: self.internet.max_connection_attempts.max(1),
            retry_interval_secs: self.internet.retry_interval_secs,
            endpoints,
            http_timeout_secs: self.http_timeout_secs,
            air_quality_timeout_secs: self.air_quality_timeout_secs,
            sleep,
            default_sleep_secs: self.default_sleep_secs,
            time_zone: self.time_zone,
            layout: self.layout,
        })
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
    pub max_connection_attempts: u32,
    pub retry_interval_secs: u32,
    endpoints: [Option<HttpUrl<'a>>; FeedKind::ALL.len()],
    pub http_timeout_secs: u32,
    pub air_quality_timeout_secs: u32,
    pub sleep: SleepPlan,
    pub default_sleep_secs: u32,
    pub time_zone: TimeZone,
    pub layout: LayoutConfig,
}

impl<'a> Settings<'a> {
    /// Endpoint of an enabled feed.
    pub fn endpoint(&self, kind: FeedKind) -> Option<&HttpUrl<'a>> {
        self.endpoints[kind.index()].as_ref()
    }

    pub fn timeout_secs(&self, kind: FeedKind) -> u32 {
        match kind {
            FeedKind::AirQuality => self.air_quality_timeout_secs,
            _ => self.http_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{DstRule, TimeOfDay};

    const FULL: &str = r#"{
        "internet": { "ssid": "hjemme", "password": "hemmelig", "max_connection_attempts": 5 },
        "endpoints": {
            "weather": "http://192.168.1.20:5000/weather",
            "calendar": "http://192.168.1.20:5000/bigcalendar"
        },
        "wake_times": "06:30, 15:00",
        "time_zone": { "std_offset_secs": 0, "dst": "none" },
        "layout": { "text_budget_chars": 40 }
    }"#;

    #[test]
    fn test_parse_full_config() {
        let config = DashboardConfig::from_json(FULL).unwrap();
        assert_eq!(config.internet.ssid, "hjemme");
        assert_eq!(config.internet.max_connection_attempts, 5);
        assert_eq!(config.internet.retry_interval_secs, DEFAULT_RETRY_INTERVAL_SECS);
        assert_eq!(config.endpoints.heater, None);
        assert_eq!(config.time_zone.dst, DstRule::None);
        assert_eq!(config.layout.text_budget_chars, 40);
        assert_eq!(config.layout.calendar_horizon_days, 2);

        let settings = config.validate().unwrap();
        assert!(settings.endpoint(FeedKind::Weather).is_some());
        assert!(settings.endpoint(FeedKind::AirQuality).is_none());
        assert_eq!(settings.endpoint(FeedKind::Calendar).unwrap().path, "/bigcalendar");
        assert_eq!(
            settings.sleep,
            SleepPlan::WakeTable(
                WakeSchedule::new(&[TimeOfDay::new(6, 30), TimeOfDay::new(15, 0)]).unwrap()
            )
        );
    }

    #[test]
    fn test_defaults() {
        let settings = DashboardConfig::from_json("{}").unwrap().validate().unwrap();
        assert_eq!(settings.max_connection_attempts, 20);
        assert_eq!(settings.timeout_secs(FeedKind::AirQuality), 25);
        assert_eq!(settings.timeout_secs(FeedKind::Heater), 15);
        assert_eq!(settings.time_zone, TimeZone::default());
        assert_eq!(settings.sleep.sleep_secs(Some(TimeOfDay::new(4, 59)), 1800), 60);
        assert!(FeedKind::ALL.iter().all(|kind| settings.endpoint(*kind).is_none()));
    }

    #[test]
    fn test_empty_wake_times_selects_interval() {
        let config = DashboardConfig {
            wake_times: "",
            update_interval_secs: 600,
            ..DashboardConfig::default()
        };
        let settings = config.validate().unwrap();
        assert_eq!(settings.sleep, SleepPlan::Interval { secs: 600 });
    }

    #[test]
    fn test_validation_errors() {
        let bad_url = DashboardConfig {
            endpoints: EndpointConfig {
                heater: Some("https://mill.example/rooms"),
                ..EndpointConfig::default()
            },
            ..DashboardConfig::default()
        };
        assert_eq!(
            bad_url.validate(),
            Err(ConfigError::InvalidUrl {
                feed: FeedKind::Heater,
                reason: UrlError::UnsupportedScheme,
            })
        );

        let bad_schedule = DashboardConfig {
            wake_times: "12:00,05:00",
            ..DashboardConfig::default()
        };
        assert_eq!(
            bad_schedule.validate(),
            Err(ConfigError::Schedule(ScheduleError::NotAscending { index: 1 }))
        );

        let busy_loop = DashboardConfig {
            wake_times: "",
            update_interval_secs: 0,
            ..DashboardConfig::default()
        };
        assert_eq!(
            busy_loop.validate(),
            Err(ConfigError::SleepTooShort {
                field: "update_interval_secs",
                secs: 0,
            })
        );

        let mut fast_retry = DashboardConfig::default();
        fast_retry.internet.retry_interval_secs = 59;
        assert!(matches!(
            fast_retry.validate(),
            Err(ConfigError::SleepTooShort { field: "retry_interval_secs", .. })
        ));

        assert!(matches!(
            DashboardConfig::from_json("{ \"internet\": 3 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
