//! One wake cycle: read the clock and battery, fetch every enabled feed,
//! render the page and work out how long to sleep.
//!
//! Hardware sits behind the [`FeedSource`], [`Clock`] and [`BatteryMonitor`]
//! traits so the same cycle runs on the device, in the simulator and in
//! tests. Nothing here is retained between cycles except what the caller
//! keeps in [`SessionState`].

use alloc::vec::Vec;
use log::{debug, error, info, warn};
use serde_json::Value;

use crate::battery::{self, BatteryReading};
use crate::config::Settings;
use crate::draw::DrawOp;
use crate::error::FetchError;
use crate::feeds::{
    AirQualitySnapshot, CalendarDay, FeedKind, FeedState, HeaterStatus, WeatherSnapshot,
    calendar_days,
};
use crate::http::HttpUrl;
use crate::layout::{RenderInputs, WIFI_ERROR_MESSAGE, render, wifi_error};
use crate::session::SessionState;
use crate::text::ErrorBanner;
use crate::time::LocalTime;

/// Where feed bodies come from.
pub trait FeedSource {
    /// Fetch the raw body of one enabled feed within `timeout_secs`.
    fn fetch(
        &mut self,
        kind: FeedKind,
        url: &HttpUrl<'_>,
        timeout_secs: u32,
    ) -> impl Future<Output = Result<Vec<u8>, FetchError>>;
}

/// Wall-clock source.
pub trait Clock {
    /// Current UTC time as Unix seconds, `None` when time sync failed.
    fn unix_seconds(&mut self) -> impl Future<Output = Option<u64>>;
}

pub trait BatteryMonitor {
    /// Pack voltage, `None` when it could not be sampled.
    fn voltage(&mut self) -> impl Future<Output = Option<f32>>;
}

/// Everything gathered for one cycle, built fresh on every wake.
#[derive(Debug, Clone)]
pub struct CycleContext {
    pub unix_secs: Option<u64>,
    pub now: Option<LocalTime>,
    pub weather: FeedState<WeatherSnapshot>,
    pub calendar: FeedState<Vec<CalendarDay>>,
    pub air_quality: FeedState<AirQualitySnapshot>,
    pub heater: FeedState<HeaterStatus>,
    pub battery: Option<BatteryReading>,
    connectivity_lost: bool,
}

impl CycleContext {
    /// Read the clock and battery, then fetch the feeds in banner order.
    pub async fn gather<F, C, B>(
        settings: &Settings<'_>,
        feeds: &mut F,
        clock: &mut C,
        battery: &mut B,
    ) -> Self
    where
        F: FeedSource,
        C: Clock,
        B: BatteryMonitor,
    {
        let unix_secs = clock.unix_seconds().await;
        let now = unix_secs.map(|secs| LocalTime::from_unix(secs, &settings.time_zone));
        if now.is_none() {
            warn!("Time unavailable, date and calendar are disabled this cycle");
        }
        let battery = read_battery(battery).await;

        let weather = fetch_feed(settings, feeds, FeedKind::Weather).await;
        let calendar = fetch_feed(settings, feeds, FeedKind::Calendar).await;
        let air_quality = fetch_feed(settings, feeds, FeedKind::AirQuality).await;
        let heater = fetch_feed(settings, feeds, FeedKind::Heater).await;
        let connectivity_lost = all_unreachable(&[&weather, &calendar, &air_quality, &heater]);

        Self {
            unix_secs,
            now,
            weather: weather.map(|doc| WeatherSnapshot::from_json(&doc)),
            calendar: calendar.map(|doc| calendar_days(&doc)),
            air_quality: air_quality.map(|doc| AirQualitySnapshot::from_json(&doc)),
            heater: heater.map(|doc| HeaterStatus::from_json(&doc)),
            battery,
            connectivity_lost,
        }
    }

    /// Every enabled feed failed because the network is down.
    pub fn connectivity_lost(&self) -> bool {
        self.connectivity_lost
    }

    pub fn inputs(&self) -> RenderInputs<'_> {
        RenderInputs {
            now: self.now,
            weather: &self.weather,
            calendar: &self.calendar,
            air_quality: &self.air_quality,
            heater: &self.heater,
            battery: self.battery,
        }
    }
}

/// What the caller should show and how long to sleep afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    pub ops: Vec<DrawOp>,
    pub errors: ErrorBanner,
    /// `false` when the panel already shows this page and a refresh would
    /// only cost power.
    pub refresh: bool,
    pub sleep_secs: u32,
    pub connectivity_lost: bool,
}

/// Run one complete wake cycle.
pub async fn run_cycle<F, C, B>(
    settings: &Settings<'_>,
    session: &mut SessionState,
    feeds: &mut F,
    clock: &mut C,
    battery: &mut B,
) -> CycleOutcome
where
    F: FeedSource,
    C: Clock,
    B: BatteryMonitor,
{
    let context = CycleContext::gather(settings, feeds, clock, battery).await;
    if context.connectivity_lost() {
        return wifi_error_outcome(settings, session, context.unix_secs);
    }
    dashboard_outcome(settings, session, &context)
}

/// Render the dashboard from an already gathered context.
pub fn dashboard_outcome(
    settings: &Settings<'_>,
    session: &mut SessionState,
    context: &CycleContext,
) -> CycleOutcome {
    let result = render(&context.inputs(), &settings.layout);

    if result.errors.is_empty() {
        session.reset_on_success(context.unix_secs);
    } else {
        session.mark_connected(context.unix_secs);
        let streak = session.record_fetch_failure();
        warn!(
            "{} feed(s) failed, {} degraded cycle(s) in a row",
            result.errors.tags().len(),
            streak
        );
    }

    let sleep_secs = settings.sleep.sleep_secs(
        context.now.map(|now| now.time_of_day()),
        settings.default_sleep_secs,
    );
    info!(
        "Dashboard rendered with {} draw-ops, sleeping {} s",
        result.ops.len(),
        sleep_secs
    );
    session.finish_cycle();

    CycleOutcome {
        ops: result.ops,
        errors: result.errors,
        refresh: true,
        sleep_secs,
        connectivity_lost: false,
    }
}

/// The WiFi error page, also used by the firmware when association never
/// succeeded and no feed was attempted.
pub fn wifi_error_outcome(
    settings: &Settings<'_>,
    session: &mut SessionState,
    unix_secs: Option<u64>,
) -> CycleOutcome {
    let failures = session.record_wifi_failure();
    error!(
        "Network unreachable ({} failed cycle(s)), retrying in {} s",
        failures, settings.retry_interval_secs
    );
    if let Some(age) = session.secs_since_update(unix_secs) {
        warn!("Last dashboard update was {} s ago", age);
    }
    session.finish_cycle();

    CycleOutcome {
        ops: wifi_error(WIFI_ERROR_MESSAGE),
        errors: ErrorBanner::new(),
        // The page stays on the panel through later retries.
        refresh: failures == 1,
        sleep_secs: settings.retry_interval_secs,
        connectivity_lost: true,
    }
}

async fn fetch_feed<F: FeedSource>(
    settings: &Settings<'_>,
    feeds: &mut F,
    kind: FeedKind,
) -> FeedState<Value> {
    let Some(url) = settings.endpoint(kind) else {
        return FeedState::Disabled;
    };

    let body = feeds.fetch(kind, url, settings.timeout_secs(kind)).await;
    if let Ok(bytes) = &body {
        info!("{} feed: {} bytes from {}{}", kind.tag(), bytes.len(), url.host, url.path);
    }
    FeedState::from_body(body)
}

async fn read_battery<B: BatteryMonitor>(monitor: &mut B) -> Option<BatteryReading> {
    let voltage = monitor.voltage().await?;
    let reading = battery::reading(voltage);
    if reading.is_none() {
        debug!("Battery voltage {:.2} V out of range, gauge hidden", voltage);
    }
    reading
}

fn all_unreachable(states: &[&FeedState<Value>]) -> bool {
    let mut enabled = states
        .iter()
        .filter(|state| !matches!(state, FeedState::Disabled))
        .peekable();
    enabled.peek().is_some()
        && enabled.all(|state| state.failure().is_some_and(FetchError::is_connectivity))
}
