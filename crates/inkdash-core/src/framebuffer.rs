//! Packed 1-bpp framebuffer for the 7.5" e-paper panel.
//!
//! The page is replayed into this RAM buffer and the raw bytes are streamed
//! to the panel in one transfer. Rows are packed MSB first with a set bit
//! meaning black ink, which is the layout the panel's second data-start
//! command expects.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::draw::{INK, PAPER};
use crate::layout::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};

const WIDTH: usize = DISPLAY_WIDTH_PX as usize;
const HEIGHT: usize = DISPLAY_HEIGHT_PX as usize;
const ROW_BYTES: usize = WIDTH / 8;

/// Buffer length in bytes (800 x 480 / 8 = 48,000).
pub const BUFFER_LEN: usize = ROW_BYTES * HEIGHT;

/// Bounding box of pixels that have changed since the last take.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Heap-allocated page buffer implementing `DrawTarget<Color = BinaryColor>`.
pub struct FrameBuffer {
    bits: Vec<u8>,
    dirty: Option<DirtyRect>,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Allocate a blank (all white) page.
    pub fn new() -> Self {
        Self {
            bits: vec![0x00; BUFFER_LEN],
            dirty: None,
        }
    }

    /// Raw bytes in panel order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Colour of a pixel, `None` outside the page.
    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        let (x, y) = Self::in_bounds(x, y)?;
        let (idx, mask) = Self::locate(x, y);
        Some(if self.bits[idx] & mask != 0 { INK } else { PAPER })
    }

    /// Region touched since the previous call, then reset.
    pub fn take_dirty(&mut self) -> Option<Rectangle> {
        let rect = self.dirty.take()?.to_rectangle();
        debug!(
            "Dirty region {}x{} at ({}, {})",
            rect.size.width, rect.size.height, rect.top_left.x, rect.top_left.y
        );
        Some(rect)
    }

    fn in_bounds(x: i32, y: i32) -> Option<(usize, usize)> {
        (x >= 0 && y >= 0 && (x as usize) < WIDTH && (y as usize) < HEIGHT)
            .then_some((x as usize, y as usize))
    }

    #[inline]
    fn locate(x: usize, y: usize) -> (usize, u8) {
        (y * ROW_BYTES + x / 8, 0x80 >> (x % 8))
    }

    /// Write a single pixel, expanding the dirty rect only if it changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: BinaryColor) {
        let (idx, mask) = Self::locate(x, y);
        let old = self.bits[idx];
        let new = if color == INK { old | mask } else { old & !mask };
        if new != old {
            self.bits[idx] = new;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some((x, y)) = Self::in_bounds(coord.x, coord.y) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color == INK { 0xFF } else { 0x00 };
        if self.bits.iter().any(|b| *b != fill) {
            self.bits.fill(fill);
            self.dirty = Some(DirtyRect {
                min_x: 0,
                min_y: 0,
                max_x: WIDTH - 1,
                max_y: HEIGHT - 1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_white_and_clean() {
        let mut fb = FrameBuffer::new();
        assert_eq!(fb.as_bytes().len(), 48_000);
        assert_eq!(fb.pixel(0, 0), Some(PAPER));
        assert!(fb.take_dirty().is_none());
    }

    #[test]
    fn test_bit_order_is_msb_first() {
        let mut fb = FrameBuffer::new();
        fb.draw_iter([Pixel(Point::new(0, 0), INK), Pixel(Point::new(9, 1), INK)])
            .unwrap();
        assert_eq!(fb.as_bytes()[0], 0x80);
        assert_eq!(fb.as_bytes()[ROW_BYTES + 1], 0x40);
        assert_eq!(fb.pixel(9, 1), Some(INK));
    }

    #[test]
    fn test_dirty_rect_covers_changes_only() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(&Rectangle::new(Point::new(10, 20), Size::new(5, 3)), INK)
            .unwrap();
        assert_eq!(
            fb.take_dirty(),
            Some(Rectangle::new(Point::new(10, 20), Size::new(5, 3)))
        );

        // painting white on white changes nothing
        fb.fill_solid(&Rectangle::new(Point::new(100, 100), Size::new(5, 5)), PAPER)
            .unwrap();
        assert!(fb.take_dirty().is_none());
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut fb = FrameBuffer::new();
        fb.fill_solid(&Rectangle::new(Point::new(795, 475), Size::new(20, 20)), INK)
            .unwrap();
        fb.draw_iter([Pixel(Point::new(-1, 5), INK)]).unwrap();
        assert_eq!(fb.pixel(799, 479), Some(INK));
        assert_eq!(fb.pixel(800, 479), None);
        assert_eq!(
            fb.take_dirty(),
            Some(Rectangle::new(Point::new(795, 475), Size::new(5, 5)))
        );
    }

    #[test]
    fn test_clear_to_ink() {
        let mut fb = FrameBuffer::new();
        fb.clear(INK).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
        assert_eq!(fb.take_dirty().map(|r| r.size), Some(Size::new(800, 480)));
    }
}
