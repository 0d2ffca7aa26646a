//! Battery sensing, RTC-memory session persistence and deep sleep.

use core::time::Duration as CoreDuration;

use embassy_time::Timer;
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation};
use esp_hal::peripherals::{ADC1, GPIO1};
use esp_hal::rtc_cntl::Rtc;
use esp_hal::rtc_cntl::sleep::TimerWakeupSource;
use inkdash_core::cycle::BatteryMonitor;
use inkdash_core::session::{SESSION_BYTES, SessionState};
use log::{info, warn};

/// The pack is measured through a 1:1 resistor divider.
const DIVIDER_RATIO: f32 = 2.0;
const SAMPLES: u32 = 8;

type BatteryPin = AdcPin<GPIO1<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;

/// Pack voltage from the calibrated ADC1 channel on GPIO1.
pub struct AdcBattery {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: BatteryPin,
}

impl AdcBattery {
    pub fn new(adc1: ADC1<'static>, pin: GPIO1<'static>) -> Self {
        let mut config = AdcConfig::new();
        let pin =
            config.enable_pin_with_cal::<_, AdcCalCurve<ADC1<'static>>>(pin, Attenuation::_11dB);
        Self {
            adc: Adc::new(adc1, config),
            pin,
        }
    }

    fn sample_millivolts(&mut self) -> Option<u16> {
        nb::block!(self.adc.read_oneshot(&mut self.pin)).ok()
    }
}

impl BatteryMonitor for AdcBattery {
    async fn voltage(&mut self) -> Option<f32> {
        let mut total = 0u32;
        for _ in 0..SAMPLES {
            total += u32::from(self.sample_millivolts()?);
            Timer::after_millis(2).await;
        }
        let pin_millivolts = total as f32 / SAMPLES as f32;
        Some(pin_millivolts * DIVIDER_RATIO / 1000.0)
    }
}

/// Encoded [`SessionState`], kept through deep sleep. Holds garbage after a
/// cold boot, which the magic tag in the encoding rejects.
#[esp_hal::ram(unstable(rtc_fast, persistent))]
static mut SESSION_SLOT: [u8; SESSION_BYTES] = [0; SESSION_BYTES];

pub fn restore_session() -> SessionState {
    // SAFETY: single-threaded access before the executor runs any other task.
    let slot = unsafe { &*(&raw const SESSION_SLOT) };
    SessionState::restore(slot)
}

pub fn store_session(session: &SessionState) {
    // SAFETY: called once, right before deep sleep.
    let slot = unsafe { &mut *(&raw mut SESSION_SLOT) };
    if let Err(err) = session.store(slot) {
        warn!("Session not saved: {}", err);
    }
}

/// Power down until the timer fires; the chip reboots on wake.
pub fn deep_sleep(rtc: &mut Rtc<'_>, secs: u32) -> ! {
    info!("Entering deep sleep for {} s", secs);
    let timer = TimerWakeupSource::new(CoreDuration::from_secs(secs.into()));
    rtc.sleep_deep(&[&timer])
}
