//! WiFi error page
//!
//! Shown instead of the dashboard when the network never came up, so the
//! panel is never left blank. Displays a centred message and a help line.

use alloc::vec::Vec;

use super::constants::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX};
use crate::draw::{Canvas, DrawOp, FontId, PAPER};
use crate::text::shape;

pub const WIFI_ERROR_MESSAGE: &str = "WiFi-feil, prøver igjen";
pub const WIFI_ERROR_HELP: &str = "Sjekk nettverksnavn og passord";

/// Full-page draw-ops for the WiFi error screen.
pub fn wifi_error(message: &str) -> Vec<DrawOp> {
    let mut canvas = Canvas::new();
    canvas.clear(PAPER);

    let font = FontId::Title;
    let line_height = font.mono().character_size.height as i32;
    let center_y = (DISPLAY_HEIGHT_PX / 2) as i32;
    canvas.set_font(font);

    // Main message one line-height above centre, help one below
    centred(&mut canvas, font, center_y - line_height, message);
    centred(&mut canvas, font, center_y + line_height, WIFI_ERROR_HELP);

    canvas.flip();
    canvas.into_ops()
}

fn centred(canvas: &mut Canvas, font: FontId, y: i32, text: &str) {
    let width = font.text_width(shape(text).len());
    let x = ((DISPLAY_WIDTH_PX as i32 - width) / 2).max(0);
    canvas.text_at(x, y, text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Point;

    #[test]
    fn test_page_shape() {
        let ops = wifi_error(WIFI_ERROR_MESSAGE);
        assert_eq!(ops.first(), Some(&DrawOp::Clear(PAPER)));
        assert_eq!(ops.last(), Some(&DrawOp::Flip));

        // "prøver" carries a slash mark over its o
        assert!(ops.iter().any(|op| matches!(op, DrawOp::DrawLine { .. })));
        assert!(ops.iter().any(|op| op.text() == Some(WIFI_ERROR_HELP)));
    }

    #[test]
    fn test_message_is_centred() {
        let ops = wifi_error("ABCD");
        let cursor = ops
            .iter()
            .find_map(|op| match op {
                DrawOp::SetCursor(p) => Some(*p),
                _ => None,
            })
            .unwrap();
        assert_eq!(cursor, Point::new((800 - 40) / 2, 240 - 20));
    }
}
