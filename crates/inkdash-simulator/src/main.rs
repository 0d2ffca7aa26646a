//! Desktop simulator for the inkdash e-paper dashboard.
//!
//! Runs one wake cycle of `inkdash-core` against feed fixtures on disk and
//! writes the resulting page as a PNG, so layouts can be checked without a
//! panel or a network.
//!
//! # Usage
//!
//! ```text
//! inkdash-simulator [FIXTURES_DIR] [--out page.png] [--at 2024-01-03T08:00]
//!                   [--battery 3.9] [--offline] [--window]
//! ```
//!
//! The fixtures directory holds `config.json` plus one file per feed:
//! `<feed>.json` is served as the body, `<feed>.http` as a raw HTTP response
//! that goes through the same response parser as the firmware. A feed with
//! neither file answers 404.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, anyhow, bail};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay};
use log::{info, warn};

use inkdash_core::config::DashboardConfig;
use inkdash_core::cycle::{BatteryMonitor, Clock, FeedSource, run_cycle};
use inkdash_core::draw::replay;
use inkdash_core::error::FetchError;
use inkdash_core::feeds::FeedKind;
use inkdash_core::http::{HttpUrl, parse_response};
use inkdash_core::layout::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use inkdash_core::session::SessionState;
use inkdash_core::time::days_from_civil;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

struct Args {
    fixtures: PathBuf,
    out: PathBuf,
    /// Unix seconds; `None` uses the host clock.
    at: Option<u64>,
    battery: Option<f32>,
    offline: bool,
    window: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut args = Self {
            fixtures: PathBuf::from("crates/inkdash-simulator/fixtures"),
            out: PathBuf::from("inkdash.png"),
            at: None,
            battery: None,
            offline: false,
            window: false,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--out" => args.out = iter.next().context("--out needs a path")?.into(),
                "--at" => {
                    let value = iter.next().context("--at needs a time")?;
                    args.at = Some(parse_instant(&value)?);
                }
                "--battery" => {
                    let value = iter.next().context("--battery needs a voltage")?;
                    args.battery = Some(value.parse().context("--battery is not a number")?);
                }
                "--offline" => args.offline = true,
                "--window" => args.window = true,
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                dir => args.fixtures = dir.into(),
            }
        }
        Ok(args)
    }
}

/// Unix seconds, or a UTC `YYYY-MM-DDTHH:MM` timestamp.
fn parse_instant(value: &str) -> anyhow::Result<u64> {
    if let Ok(secs) = value.parse() {
        return Ok(secs);
    }

    let (date, time) = value.split_once('T').context("expected YYYY-MM-DDTHH:MM")?;
    let mut date = date.splitn(3, '-').map(str::parse::<i32>);
    let mut time = time.splitn(2, ':').map(str::parse::<i64>);
    let (Some(Ok(year)), Some(Ok(month)), Some(Ok(day))) = (date.next(), date.next(), date.next())
    else {
        bail!("bad date in {value}");
    };
    let (Some(Ok(hour)), Some(Ok(minute))) = (time.next(), time.next()) else {
        bail!("bad time in {value}");
    };

    let days = days_from_civil(year, u8::try_from(month)?, u8::try_from(day)?);
    let secs = days * 86_400 + hour * 3_600 + minute * 60;
    u64::try_from(secs).context("time before 1970")
}

// ---------------------------------------------------------------------------
// Host-side collaborators
// ---------------------------------------------------------------------------

/// Serves feed bodies from the fixtures directory.
struct FixtureFeeds {
    dir: PathBuf,
    offline: bool,
}

impl FixtureFeeds {
    fn read(&self, kind: FeedKind) -> Result<Vec<u8>, FetchError> {
        let stem = kind.file_stem();

        match fs::read(self.dir.join(format!("{stem}.http"))) {
            Ok(raw) => return parse_response(&raw).map(|body| body.into_owned()),
            Err(err) if err.kind() != ErrorKind::NotFound => return Err(FetchError::Connect),
            Err(_) => {}
        }
        match fs::read(self.dir.join(format!("{stem}.json"))) {
            Ok(body) => Ok(body),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(FetchError::Http { status: 404 }),
            Err(_) => Err(FetchError::Connect),
        }
    }
}

impl FeedSource for FixtureFeeds {
    async fn fetch(
        &mut self,
        kind: FeedKind,
        url: &HttpUrl<'_>,
        _timeout_secs: u32,
    ) -> Result<Vec<u8>, FetchError> {
        if self.offline {
            return Err(FetchError::NotConnected);
        }
        info!("Serving {}{} from fixtures", url.host, url.path);
        self.read(kind)
    }
}

struct HostClock(Option<u64>);

impl Clock for HostClock {
    async fn unix_seconds(&mut self) -> Option<u64> {
        self.0.or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .ok()
                .map(|d| d.as_secs())
        })
    }
}

struct FixedBattery(Option<f32>);

impl BatteryMonitor for FixedBattery {
    async fn voltage(&mut self) -> Option<f32> {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn load_config(dir: &Path) -> anyhow::Result<String> {
    let path = dir.join("config.json");
    match fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("{} not found, every feed is disabled", path.display());
            Ok(String::from("{}"))
        }
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse()?;
    info!("Starting inkdash simulator with fixtures in {}", args.fixtures.display());

    let config_text = load_config(&args.fixtures)?;
    let settings = DashboardConfig::from_json(&config_text)
        .and_then(|config| config.validate())
        .map_err(|err| anyhow!("invalid config: {err}"))?;

    let mut session = SessionState::new();
    let mut feeds = FixtureFeeds {
        dir: args.fixtures.clone(),
        offline: args.offline,
    };
    let outcome = embassy_futures::block_on(run_cycle(
        &settings,
        &mut session,
        &mut feeds,
        &mut HostClock(args.at),
        &mut FixedBattery(args.battery),
    ));
    if !outcome.errors.is_empty() {
        warn!("Feeds with errors: {}", outcome.errors.tags().join(", "));
    }

    let mut display =
        SimulatorDisplay::<BinaryColor>::new(Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX));
    let flipped = replay(&outcome.ops, &mut display)?;
    if !flipped {
        warn!("Page was drawn without a final flip");
    }

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::LcdWhite)
        .build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    info!(
        "Wrote {} ({} draw-ops), device would sleep {} s",
        args.out.display(),
        outcome.ops.len(),
        outcome.sleep_secs
    );

    if args.window {
        show_window(&display, &output_settings)?;
    }
    Ok(())
}

#[cfg(feature = "window")]
fn show_window(
    display: &SimulatorDisplay<BinaryColor>,
    output_settings: &embedded_graphics_simulator::OutputSettings,
) -> anyhow::Result<()> {
    let mut window = embedded_graphics_simulator::Window::new("inkdash", output_settings);
    window.show_static(display);
    Ok(())
}

#[cfg(not(feature = "window"))]
fn show_window(
    _display: &SimulatorDisplay<BinaryColor>,
    _output_settings: &embedded_graphics_simulator::OutputSettings,
) -> anyhow::Result<()> {
    bail!("built without the `window` feature")
}
