//! Hardware-independent core library for inkdash
//!
//! This crate contains all platform-agnostic logic for the inkdash e-paper
//! dashboard: feed-to-model mapping, calendar day selection, the page layout
//! renderer (which emits draw-ops rather than touching a panel), the wake-time
//! scheduler, the battery gauge, and the per-wake cycle orchestration.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets (ESP32-S3) and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod battery;
pub mod config;
pub mod cycle;
pub mod day_selector;
pub mod draw;
pub mod error;
pub mod feeds;
pub mod framebuffer;
pub mod http;
pub mod json;
pub mod layout;
pub mod schedule;
pub mod session;
pub mod sntp;
pub mod text;
pub mod time;
