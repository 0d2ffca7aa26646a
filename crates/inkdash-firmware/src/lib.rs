//! ESP32-S3 firmware-specific modules for inkdash
//!
//! This crate contains hardware-specific code that cannot compile on desktop
//! targets: WiFi association, the embassy-net HTTP and SNTP clients, the
//! Waveshare panel driver, the battery ADC, RTC memory and deep sleep.
//! Everything it does per wake is driven by `inkdash_core::cycle`.

#![no_std]

extern crate alloc;

pub mod app_state;
pub mod http_client;
pub mod net;
pub mod panel;
pub mod power;
pub mod settings;
pub mod sntp_clock;
