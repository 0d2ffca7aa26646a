//! Footer band carrying the error banner.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::constants::*;
use crate::draw::{Canvas, FontId, INK, PAPER};
use crate::text::ErrorBanner;

/// Black band with white text, drawn only when something failed.
pub(super) fn draw(canvas: &mut Canvas, errors: &ErrorBanner, max_chars: usize) {
    let Some(text) = errors.text(max_chars) else {
        return;
    };

    canvas.fill_rect(
        Rectangle::new(
            Point::new(0, FOOTER_Y_PX),
            Size::new(DISPLAY_WIDTH_PX, FOOTER_HEIGHT_PX),
        ),
        INK,
    );
    canvas.set_font(FontId::Body);
    canvas.set_text_color(PAPER);
    canvas.text_at(FOOTER_TEXT_X_PX, FOOTER_TEXT_Y_PX, &text);
    canvas.set_text_color(INK);
}
