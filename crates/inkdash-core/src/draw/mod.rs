//! Draw-op model for the e-paper page.
//!
//! The layout never touches a display directly. It records an ordered list
//! of [`DrawOp`]s through a [`Canvas`], which the firmware (or simulator, or
//! a test) replays onto any binary-colour `DrawTarget` with [`replay`].

mod canvas;
mod icons;
mod replay;

pub use canvas::Canvas;
pub use replay::replay;

use alloc::string::String;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_6X13_BOLD, FONT_7X13_BOLD, FONT_9X18_BOLD, FONT_10X20};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Rectangle};

/// Black ink on the panel.
pub const INK: BinaryColor = BinaryColor::On;

/// Unprinted (white) paper.
pub const PAPER: BinaryColor = BinaryColor::Off;

/// Icon edge length in pixels.
pub const ICON_SIZE_PX: u32 = 48;

// ----------------------------------------------------------------------------
// Fonts
// ----------------------------------------------------------------------------

/// Fonts available to the layout, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    /// Date header and calendar day names.
    Title,
    /// Temperature and section headings.
    Heading,
    Body,
    Small,
}

impl FontId {
    pub fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Self::Title => &FONT_10X20,
            Self::Heading => &FONT_9X18_BOLD,
            Self::Body => &FONT_7X13_BOLD,
            Self::Small => &FONT_6X13_BOLD,
        }
    }

    /// Horizontal distance from one glyph origin to the next.
    pub fn advance(self) -> i32 {
        let font = self.mono();
        (font.character_size.width + font.character_spacing) as i32
    }

    /// Pixels from the top of a glyph cell to its baseline.
    pub fn ascent(self) -> i32 {
        self.mono().baseline as i32
    }

    /// Width of `glyphs` cells in pixels.
    pub fn text_width(self, glyphs: usize) -> i32 {
        glyphs as i32 * self.advance()
    }
}

// ----------------------------------------------------------------------------
// Icons
// ----------------------------------------------------------------------------

/// Weather icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Cloud,
    Rain,
    Snow,
}

impl Icon {
    /// Pick an icon by keyword in priority order; unmatched codes show a cloud.
    pub fn for_symbol(code: &str) -> Self {
        if code.contains("clear") || code.contains("fair") {
            Self::Sun
        } else if code.contains("rain") || code.contains("sleet") {
            Self::Rain
        } else if code.contains("snow") {
            Self::Snow
        } else {
            Self::Cloud
        }
    }

    /// Packed 1-bpp bitmap, rows MSB first.
    pub fn bitmap(self) -> &'static [u8] {
        match self {
            Self::Sun => &icons::SUN,
            Self::Cloud => &icons::CLOUD,
            Self::Rain => &icons::RAIN,
            Self::Snow => &icons::SNOW,
        }
    }
}

// ----------------------------------------------------------------------------
// Ops
// ----------------------------------------------------------------------------

/// One rendering instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(BinaryColor),
    SetFont(FontId),
    /// Baseline-left position of the next `Print`.
    SetCursor(Point),
    SetTextColor(BinaryColor),
    /// ASCII text at the cursor; advances the cursor.
    Print(String),
    DrawLine { line: Line, color: BinaryColor },
    DrawRect { rect: Rectangle, color: BinaryColor },
    FillRect { rect: Rectangle, color: BinaryColor },
    DrawCircle { circle: Circle, color: BinaryColor },
    DrawBitmap { icon: Icon, origin: Point },
    /// Push the finished page to the panel.
    Flip,
}

impl DrawOp {
    /// Text carried by a `Print` op.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Print(text) => Some(text),
            _ => None,
        }
    }
}
