//! Waveshare 7.5" V2 e-paper panel (800x480, black/white).
//!
//! Wiring on the reTerminal E1001 board:
//! SCK=GPIO7 MOSI=GPIO9 CS=GPIO10 DC=GPIO11 RST=GPIO12 BUSY=GPIO13.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;
use epd_waveshare::epd7in5_v2::Epd7in5;
use epd_waveshare::prelude::*;
use inkdash_core::draw::{DrawOp, replay};
use inkdash_core::framebuffer::FrameBuffer;
use log::{info, warn};

use crate::app_state::{AppError, message};

pub struct Panel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    spi: SPI,
    epd: Epd7in5<SPI, BUSY, DC, RST, DELAY>,
    delay: DELAY,
}

impl<SPI, BUSY, DC, RST, DELAY> Panel<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Reset and initialise the controller.
    pub fn new(
        mut spi: SPI,
        busy: BUSY,
        dc: DC,
        rst: RST,
        mut delay: DELAY,
    ) -> Result<Self, AppError> {
        let epd = Epd7in5::new(&mut spi, busy, dc, rst, &mut delay, None)
            .map_err(|err| AppError::Display(message(format_args!("init: {:?}", err))))?;
        Ok(Self { spi, epd, delay })
    }

    /// Replay `ops` into a fresh framebuffer and push it with a full refresh.
    pub fn show(&mut self, ops: &[DrawOp]) -> Result<(), AppError> {
        let mut frame = FrameBuffer::new();
        let flipped = match replay(ops, &mut frame) {
            Ok(flipped) => flipped,
            Err(never) => match never {},
        };
        if !flipped {
            warn!("Page has no flip, pushing it anyway");
        }

        self.epd
            .update_and_display_frame(&mut self.spi, frame.as_bytes(), &mut self.delay)
            .map_err(|err| AppError::Display(message(format_args!("refresh: {:?}", err))))?;
        info!("Panel refreshed");
        Ok(())
    }

    /// Put the controller into deep sleep; it keeps the image unpowered.
    pub fn sleep(&mut self) -> Result<(), AppError> {
        self.epd
            .sleep(&mut self.spi, &mut self.delay)
            .map_err(|err| AppError::Display(message(format_args!("sleep: {:?}", err))))
    }
}
