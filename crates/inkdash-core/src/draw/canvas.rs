//! Draw-op recorder with GFX-style cursor bookkeeping.

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, Rectangle};

use super::{DrawOp, FontId, INK, Icon};
use crate::text::{Mark, shape};

/// Records draw-ops while tracking font, cursor and text colour, so marks for
/// shaped glyphs can be placed relative to the glyph they decorate.
#[derive(Debug, Clone)]
pub struct Canvas {
    ops: Vec<DrawOp>,
    font: FontId,
    cursor: Point,
    color: BinaryColor,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            font: FontId::Body,
            cursor: Point::zero(),
            color: INK,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn clear(&mut self, color: BinaryColor) {
        self.ops.push(DrawOp::Clear(color));
    }

    pub fn set_font(&mut self, font: FontId) {
        if font != self.font {
            self.font = font;
            self.ops.push(DrawOp::SetFont(font));
        }
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
        self.ops.push(DrawOp::SetCursor(self.cursor));
    }

    pub fn set_text_color(&mut self, color: BinaryColor) {
        if color != self.color {
            self.color = color;
            self.ops.push(DrawOp::SetTextColor(color));
        }
    }

    /// Shape and print `text` at the cursor, advancing it.
    pub fn print(&mut self, text: &str) {
        let mut run = String::new();
        for token in shape(text) {
            run.push(token.base);
            if let Some(mark) = token.mark {
                self.flush_run(&mut run);
                let cell_x = self.cursor.x - self.font.advance();
                self.draw_mark(mark, cell_x, token.base.is_ascii_uppercase());
            }
        }
        self.flush_run(&mut run);
    }

    /// Move to `(x, y)` and print.
    pub fn text_at(&mut self, x: i32, y: i32, text: &str) {
        self.set_cursor(x, y);
        self.print(text);
    }

    pub fn line(&mut self, start: Point, end: Point, color: BinaryColor) {
        self.ops.push(DrawOp::DrawLine {
            line: Line::new(start, end),
            color,
        });
    }

    pub fn rect(&mut self, rect: Rectangle, color: BinaryColor) {
        self.ops.push(DrawOp::DrawRect { rect, color });
    }

    pub fn fill_rect(&mut self, rect: Rectangle, color: BinaryColor) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    pub fn bitmap(&mut self, icon: Icon, origin: Point) {
        self.ops.push(DrawOp::DrawBitmap { icon, origin });
    }

    pub fn flip(&mut self) {
        self.ops.push(DrawOp::Flip);
    }

    fn flush_run(&mut self, run: &mut String) {
        if run.is_empty() {
            return;
        }
        self.cursor.x += self.font.text_width(run.chars().count());
        self.ops.push(DrawOp::Print(core::mem::take(run)));
    }

    /// Decorate the glyph cell starting at `cell_x` on the current baseline.
    fn draw_mark(&mut self, mark: Mark, cell_x: i32, uppercase: bool) {
        let width = self.font.mono().character_size.width as i32;
        let ascent = self.font.ascent();
        let baseline = self.cursor.y;
        // Top of the letter body the mark sits on.
        let body_top = if uppercase {
            baseline - ascent + 1
        } else {
            baseline - ascent * 3 / 5
        };
        let mid = cell_x + width / 2;
        let color = self.color;

        match mark {
            Mark::Slash => self.line(
                Point::new(cell_x + 1, baseline),
                Point::new(cell_x + width - 2, body_top),
                color,
            ),
            Mark::Ring => {
                let diameter = (width / 2).max(3) as u32;
                let top_left = Point::new(mid - diameter as i32 / 2, body_top - diameter as i32 - 1);
                self.ops.push(DrawOp::DrawCircle {
                    circle: Circle::new(top_left, diameter),
                    color,
                });
            }
            Mark::Acute => self.line(
                Point::new(mid - 1, body_top - 2),
                Point::new(mid + 2, body_top - 5),
                color,
            ),
            Mark::Grave => self.line(
                Point::new(mid - 2, body_top - 5),
                Point::new(mid + 1, body_top - 2),
                color,
            ),
            Mark::Diaeresis => {
                let dot = Size::new(2, 2);
                let y = body_top - 4;
                self.fill_rect(Rectangle::new(Point::new(cell_x + width / 4, y), dot), color);
                self.fill_rect(
                    Rectangle::new(Point::new(cell_x + width * 3 / 4 - 1, y), dot),
                    color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PAPER;

    #[test]
    fn test_plain_text_is_one_print() {
        let mut canvas = Canvas::new();
        canvas.set_font(FontId::Title);
        canvas.text_at(20, 50, "Hum: 45%");

        assert_eq!(
            canvas.ops(),
            [
                DrawOp::SetFont(FontId::Title),
                DrawOp::SetCursor(Point::new(20, 50)),
                DrawOp::Print("Hum: 45%".into()),
            ]
        );
        assert_eq!(canvas.cursor(), Point::new(20 + 8 * 10, 50));
    }

    #[test]
    fn test_marked_glyph_splits_run_and_decorates_its_cell() {
        let mut canvas = Canvas::new();
        canvas.set_font(FontId::Title);
        canvas.text_at(100, 60, "Søn");

        let ops = canvas.ops();
        assert_eq!(ops[2], DrawOp::Print("So".into()));
        match &ops[3] {
            DrawOp::DrawLine { line, color } => {
                assert_eq!(*color, INK);
                // inside the second cell
                assert!(line.start.x >= 110 && line.end.x < 120);
                assert_eq!(line.start.y, 60);
            }
            other => panic!("expected slash, got {other:?}"),
        }
        assert_eq!(ops[4], DrawOp::Print("n".into()));
        assert_eq!(canvas.cursor().x, 130);
    }

    #[test]
    fn test_digraph_stays_in_run() {
        let mut canvas = Canvas::new();
        canvas.print("bær");
        assert_eq!(canvas.ops().last(), Some(&DrawOp::Print("baer".into())));
    }

    #[test]
    fn test_ring_sits_above_capital() {
        let mut canvas = Canvas::new();
        canvas.set_font(FontId::Body);
        canvas.text_at(0, 40, "Å");
        let circle = canvas.ops().iter().find_map(|op| match op {
            DrawOp::DrawCircle { circle, .. } => Some(*circle),
            _ => None,
        });
        let circle = circle.unwrap();
        assert!(circle.top_left.y + (circle.diameter as i32) < 40 - 4);
    }

    #[test]
    fn test_redundant_state_changes_are_skipped() {
        let mut canvas = Canvas::new();
        canvas.set_font(FontId::Body);
        canvas.set_text_color(INK);
        assert!(canvas.ops().is_empty());

        canvas.set_text_color(PAPER);
        canvas.set_text_color(PAPER);
        assert_eq!(canvas.ops(), [DrawOp::SetTextColor(PAPER)]);
    }
}
