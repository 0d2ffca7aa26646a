#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_net::{Stack, StackResources};
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::rtc_cntl::Rtc;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::Controller;
use esp_radio::wifi::WifiController;
use inkdash_core::config::Settings;
use inkdash_core::cycle::{CycleOutcome, run_cycle, wifi_error_outcome};
use inkdash_core::draw::DrawOp;
use inkdash_core::schedule::DEFAULT_SLEEP_SECS;
use inkdash_core::session::SessionState;
use inkdash_firmware::app_state::{AppError, message};
use inkdash_firmware::http_client::HttpFeedSource;
use inkdash_firmware::panel::Panel;
use inkdash_firmware::power::{self, AdcBattery};
use inkdash_firmware::sntp_clock::SntpClock;
use inkdash_firmware::{net, settings};
use log::{error, info};

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    rtt_target::rprintln!("PANIC: {}", info);
    loop {}
}

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

macro_rules! mk_static {
    ($t:ty,$val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

/// TCP, UDP, DNS and DHCP each hold one socket.
const NET_SOCKETS: usize = 4;
const PANEL_SPI_MHZ: u32 = 4;

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    rtt_target::rtt_init_log!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: 73744);
    // Framebuffer and response bodies live in PSRAM.
    esp_alloc::psram_allocator!(&peripherals.PSRAM, esp_hal::psram);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut rtc = Rtc::new(peripherals.LPWR);
    let mut session = power::restore_session();
    info!(
        "Wake {} (wifi failures {}, degraded cycles {})",
        session.cycles, session.wifi_failures, session.fetch_failures
    );

    let settings = match settings::dashboard_config().validate() {
        Ok(settings) => settings,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            power::deep_sleep(&mut rtc, DEFAULT_SLEEP_SECS)
        }
    };

    let radio: &'static Controller<'static> = match esp_radio::init() {
        Ok(radio) => mk_static!(Controller<'static>, radio),
        Err(err) => {
            error!("Radio init failed: {:?}", err);
            power::deep_sleep(&mut rtc, settings.retry_interval_secs)
        }
    };
    let (mut controller, interfaces) =
        match esp_radio::wifi::new(radio, peripherals.WIFI, Default::default()) {
            Ok(parts) => parts,
            Err(err) => {
                error!("WiFi init failed: {:?}", err);
                power::deep_sleep(&mut rtc, settings.retry_interval_secs)
            }
        };

    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;
    let (stack, mut runner) = embassy_net::new(
        interfaces.sta,
        embassy_net::Config::dhcpv4(Default::default()),
        mk_static!(StackResources<NET_SOCKETS>, StackResources::<NET_SOCKETS>::new()),
        seed,
    );

    let mut battery = AdcBattery::new(peripherals.ADC1, peripherals.GPIO1);

    // The stack runner never returns; the cycle finishing ends the race.
    let outcome = match select(
        runner.run(),
        wake_cycle(&settings, &mut session, &mut controller, stack, &mut battery),
    )
    .await
    {
        Either::First(never) => match never {},
        Either::Second(outcome) => outcome,
    };

    if outcome.refresh {
        let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
        let dc = Output::new(peripherals.GPIO11, Level::Low, OutputConfig::default());
        let rst = Output::new(peripherals.GPIO12, Level::High, OutputConfig::default());
        let busy = Input::new(peripherals.GPIO13, InputConfig::default().with_pull(Pull::None));

        let pushed = Spi::new(
            peripherals.SPI2,
            SpiConfig::default()
                .with_frequency(Rate::from_mhz(PANEL_SPI_MHZ))
                .with_mode(Mode::_0),
        )
        .map_err(|err| AppError::Display(message(format_args!("{:?}", err))))
        .and_then(|spi| {
            let spi = spi.with_sck(peripherals.GPIO7).with_mosi(peripherals.GPIO9);
            let Ok(device) = ExclusiveDevice::new_no_delay(spi, cs);
            push_page(device, busy, dc, rst, &outcome.ops)
        });
        if let Err(err) = pushed {
            error!("{}", err);
        }
    } else {
        info!("Panel already shows this page, skipping refresh");
    }

    power::store_session(&session);
    power::deep_sleep(&mut rtc, outcome.sleep_secs)
}

/// Join the network, then fetch and render. Falls back to the WiFi error
/// page when association fails.
async fn wake_cycle(
    settings: &Settings<'static>,
    session: &mut SessionState,
    controller: &mut WifiController<'static>,
    stack: Stack<'static>,
    battery: &mut AdcBattery,
) -> CycleOutcome {
    let connected = net::connect(
        controller,
        stack,
        settings.ssid,
        settings.password,
        settings.max_connection_attempts,
    )
    .await;

    let outcome = match connected {
        Ok(()) => {
            let mut clock = SntpClock::new(stack, settings::NTP_SERVER);
            let mut feeds = HttpFeedSource::new(stack);
            run_cycle(settings, session, &mut feeds, &mut clock, battery).await
        }
        Err(err) => {
            error!("{}", err);
            wifi_error_outcome(settings, session, None)
        }
    };

    net::disconnect(controller).await;
    outcome
}

fn push_page(
    spi: impl SpiDevice,
    busy: impl InputPin,
    dc: impl OutputPin,
    rst: impl OutputPin,
    ops: &[DrawOp],
) -> Result<(), AppError> {
    let mut panel = Panel::new(spi, busy, dc, rst, Delay::new())?;
    panel.show(ops)?;
    panel.sleep()
}
