//! Configuration baked in at build time by `build.rs`.

use inkdash_core::config::{DEFAULT_WAKE_TIMES, DashboardConfig, EndpointConfig, InternetConfig};

pub const WIFI_SSID: &str = env!("WIFI_SSID");
pub const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");

/// Host queried for the wall-clock time on every wake.
pub const NTP_SERVER: &str = match option_env!("NTP_SERVER") {
    Some(server) => server,
    None => "pool.ntp.org",
};

const WAKE_TIMES: &str = match option_env!("WAKE_TIMES") {
    Some(times) => times,
    None => DEFAULT_WAKE_TIMES,
};

pub fn dashboard_config() -> DashboardConfig<'static> {
    DashboardConfig {
        internet: InternetConfig {
            ssid: WIFI_SSID,
            password: WIFI_PASSWORD,
            ..InternetConfig::default()
        },
        endpoints: EndpointConfig {
            weather: option_env!("WEATHER_URL"),
            calendar: option_env!("CALENDAR_URL"),
            air_quality: option_env!("AIR_QUALITY_URL"),
            heater: option_env!("HEATER_URL"),
        },
        wake_times: WAKE_TIMES,
        ..DashboardConfig::default()
    }
}
