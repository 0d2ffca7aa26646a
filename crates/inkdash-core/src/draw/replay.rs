//! Replays recorded draw-ops onto an `embedded-graphics` target.

use embedded_graphics::Drawable;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::PrimitiveStyle;
use embedded_graphics::text::Text;

use super::{DrawOp, FontId, ICON_SIZE_PX, INK};

/// Draw `ops` in order onto `target`.
///
/// Text is placed with an alphabetic baseline, so `SetCursor` behaves like a
/// GFX `setCursor`. Returns whether the list ended the page with `Flip`.
pub fn replay<D>(ops: &[DrawOp], target: &mut D) -> Result<bool, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let mut font = FontId::Body;
    let mut cursor = Point::zero();
    let mut color = INK;
    let mut flipped = false;

    for op in ops {
        match op {
            DrawOp::Clear(fill) => target.clear(*fill)?,
            DrawOp::SetFont(id) => font = *id,
            DrawOp::SetCursor(point) => cursor = *point,
            DrawOp::SetTextColor(c) => color = *c,
            DrawOp::Print(text) => {
                let style = MonoTextStyle::new(font.mono(), color);
                cursor = Text::new(text, cursor, style).draw(target)?;
            }
            DrawOp::DrawLine { line, color } => {
                line.into_styled(PrimitiveStyle::with_stroke(*color, 1))
                    .draw(target)?;
            }
            DrawOp::DrawRect { rect, color } => {
                rect.into_styled(PrimitiveStyle::with_stroke(*color, 1))
                    .draw(target)?;
            }
            DrawOp::FillRect { rect, color } => target.fill_solid(rect, *color)?,
            DrawOp::DrawCircle { circle, color } => {
                circle
                    .into_styled(PrimitiveStyle::with_stroke(*color, 1))
                    .draw(target)?;
            }
            DrawOp::DrawBitmap { icon, origin } => {
                let raw = ImageRaw::<BinaryColor>::new(icon.bitmap(), ICON_SIZE_PX);
                Image::new(&raw, *origin).draw(target)?;
            }
            DrawOp::Flip => flipped = true,
        }
    }
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Canvas, Icon, PAPER};
    use crate::framebuffer::FrameBuffer;
    use embedded_graphics::primitives::Rectangle;

    fn ink_in(fb: &FrameBuffer, area: Rectangle) -> usize {
        area.points()
            .filter(|p| fb.pixel(p.x, p.y) == Some(INK))
            .count()
    }

    #[test]
    fn test_flip_is_reported() {
        let mut fb = FrameBuffer::new();
        assert!(!replay(&[DrawOp::Clear(PAPER)], &mut fb).unwrap());
        assert!(replay(&[DrawOp::Clear(PAPER), DrawOp::Flip], &mut fb).unwrap());
    }

    #[test]
    fn test_text_lands_above_baseline() {
        let mut canvas = Canvas::new();
        canvas.set_font(FontId::Title);
        canvas.text_at(20, 50, "HH");

        let mut fb = FrameBuffer::new();
        replay(canvas.ops(), &mut fb).unwrap();

        let above = Rectangle::new(Point::new(20, 30), Size::new(20, 20));
        let below = Rectangle::new(Point::new(20, 51), Size::new(20, 10));
        assert!(ink_in(&fb, above) > 0);
        assert_eq!(ink_in(&fb, below), 0);
    }

    #[test]
    fn test_white_text_on_black_band() {
        let band = Rectangle::new(Point::new(0, 455), Size::new(800, 25));
        let mut canvas = Canvas::new();
        canvas.fill_rect(band, INK);
        canvas.set_text_color(PAPER);
        canvas.text_at(10, 473, "Feil");

        let mut fb = FrameBuffer::new();
        replay(canvas.ops(), &mut fb).unwrap();
        assert!(ink_in(&fb, band) < band.size.width as usize * band.size.height as usize);
        assert_eq!(fb.pixel(700, 470), Some(INK));
    }

    #[test]
    fn test_bitmap_is_placed_at_origin() {
        let mut fb = FrameBuffer::new();
        let ops = [DrawOp::DrawBitmap {
            icon: Icon::Sun,
            origin: Point::new(100, 180),
        }];
        replay(&ops, &mut fb).unwrap();

        let icon = Rectangle::new(Point::new(100, 180), Size::new(ICON_SIZE_PX, ICON_SIZE_PX));
        assert!(ink_in(&fb, icon) > 100);
        assert_eq!(fb.take_dirty().map(|r| icon.contains(r.top_left)), Some(true));
    }
}
