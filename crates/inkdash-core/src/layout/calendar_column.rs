//! Right column: the upcoming calendar days, today highlighted.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::LayoutConfig;
use super::constants::*;
use crate::day_selector::select_days;
use crate::draw::{Canvas, FontId, INK, PAPER};
use crate::feeds::{CalendarDay, Event, FeedState, MAX_STUDENTS};
use crate::text::{format_event_time, student_label, truncate};
use crate::time::{LocalTime, Weekday};

pub(super) const CALENDAR_UNAVAILABLE: &str = "Kalender ikke tilgjengelig";

/// Body-font characters that fit across the right column.
const ROW_CHARS: usize = 72;

/// Baseline allocator that stops handing out rows above the footer band.
struct Rows {
    y: i32,
}

impl Rows {
    fn next(&mut self, step: i32) -> Option<i32> {
        if self.y > CALENDAR_BOTTOM_Y_PX {
            return None;
        }
        let y = self.y;
        self.y += step;
        Some(y)
    }

    fn skip(&mut self, step: i32) {
        self.y += step;
    }
}

pub(super) fn draw(
    canvas: &mut Canvas,
    calendar: &FeedState<Vec<CalendarDay>>,
    now: Option<LocalTime>,
    config: &LayoutConfig,
) {
    let days = match calendar {
        FeedState::Disabled => return,
        FeedState::Failed(_) => return draw_unavailable(canvas),
        FeedState::Ready(days) => days,
    };
    let Some(now) = now else {
        log::warn!("No local time, calendar days cannot be matched");
        return draw_unavailable(canvas);
    };

    let selected = select_days(now.weekday, config.calendar_horizon_days, days);
    let mut rows = Rows {
        y: CALENDAR_TOP_Y_PX,
    };
    for (offset, slot) in selected.into_iter().enumerate() {
        // Days without a record are skipped without a placeholder.
        let Some(day) = slot else { continue };
        draw_day(canvas, &mut rows, day, now.weekday.offset(offset), offset == 0, config);
        rows.skip(DAY_GAP_PX);
    }
}

fn draw_unavailable(canvas: &mut Canvas) {
    canvas.set_font(FontId::Body);
    canvas.text_at(RIGHT_X_PX, UNAVAILABLE_Y_PX, CALENDAR_UNAVAILABLE);
}

fn draw_day(
    canvas: &mut Canvas,
    rows: &mut Rows,
    day: &CalendarDay,
    weekday: Weekday,
    is_today: bool,
    config: &LayoutConfig,
) {
    let budget = config.text_budget_chars;

    if let Some(y) = rows.next(DAY_NAME_STEP_PX) {
        let name = if day.name.is_empty() {
            weekday.name_nb()
        } else {
            day.name.as_str()
        };
        canvas.set_font(FontId::Title);
        if is_today {
            canvas.fill_rect(
                Rectangle::new(
                    Point::new(RIGHT_X_PX - DAY_HIGHLIGHT_INSET_PX, y - DAY_HIGHLIGHT_ASCENT_PX),
                    Size::new(RIGHT_WIDTH_PX, DAY_HIGHLIGHT_HEIGHT_PX),
                ),
                INK,
            );
            canvas.set_text_color(PAPER);
            canvas.text_at(RIGHT_X_PX, y, name);
            canvas.set_text_color(INK);
        } else {
            canvas.text_at(RIGHT_X_PX, y, name);
        }
    }

    canvas.set_font(FontId::Body);
    if let Some(dinner) = &day.dinner
        && let Some(y) = rows.next(DETAIL_STEP_PX)
    {
        canvas.text_at(RIGHT_X_PX, y, &format!("Middag: {}", truncate(dinner, budget)));
    }

    if !day.waste_types.is_empty()
        && let Some(y) = rows.next(DETAIL_STEP_PX)
    {
        let line = format!("Avfall: {}", day.waste_types.join(", "));
        canvas.text_at(RIGHT_X_PX, y, &truncate(&line, ROW_CHARS));
    }

    let (this_week, next_week) = day.split_events();
    draw_events(canvas, rows, "Hendelser:", &this_week, budget);
    draw_events(canvas, rows, "Neste uke:", &next_week, budget);

    draw_lessons(canvas, rows, day);
}

fn draw_events(canvas: &mut Canvas, rows: &mut Rows, header: &str, events: &[&Event], budget: usize) {
    if events.is_empty() {
        return;
    }
    if let Some(y) = rows.next(SECTION_HEADER_STEP_PX) {
        canvas.text_at(RIGHT_X_PX, y, header);
    }
    for event in events {
        let Some(y) = rows.next(EVENT_STEP_PX) else {
            return;
        };
        canvas.text_at(RIGHT_INDENT_X_PX, y, &event_line(event, budget));
    }
}

/// `HH:MM summary`, or just the summary for all-day events.
fn event_line(event: &Event, budget: usize) -> String {
    let summary = truncate(&event.summary, budget);
    let time = format_event_time(&event.start);
    if time.is_empty() {
        summary
    } else {
        format!("{time} {summary}")
    }
}

fn draw_lessons(canvas: &mut Canvas, rows: &mut Rows, day: &CalendarDay) {
    if day.lessons_by_student.is_empty() {
        return;
    }
    let students = &day.lessons_by_student[..day.lessons_by_student.len().min(MAX_STUDENTS)];

    if let Some(y) = rows.next(LESSON_HEADER_STEP_PX) {
        canvas.text_at(RIGHT_X_PX, y, "Timeplan:");
    }
    if let Some(y) = rows.next(LESSON_HEADER_STEP_PX) {
        for ((key, _), x) in students.iter().zip(LESSON_COLUMNS_X_PX) {
            canvas.text_at(x, y, student_label(key));
        }
    }

    canvas.set_font(FontId::Small);
    let longest = students.iter().map(|(_, l)| l.len()).max().unwrap_or(0);
    for index in 0..longest {
        let Some(y) = rows.next(LESSON_STEP_PX) else {
            break;
        };
        for ((_, lessons), x) in students.iter().zip(LESSON_COLUMNS_X_PX) {
            if let Some(lesson) = lessons.get(index) {
                canvas.text_at(x, y, &truncate(lesson, LESSON_CHARS));
            }
        }
    }
    canvas.set_font(FontId::Body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawOp;
    use crate::error::FetchError;
    use crate::feeds::calendar_days;
    use crate::time::TimeZone;
    use serde_json::json;

    /// Wednesday 2024-01-03 08:00 UTC.
    fn wednesday() -> LocalTime {
        LocalTime::from_unix(1_704_268_800, &TimeZone::UTC)
    }

    fn render_days(doc: serde_json::Value, now: Option<LocalTime>) -> Canvas {
        let mut canvas = Canvas::new();
        let state = FeedState::Ready(calendar_days(&doc));
        draw(&mut canvas, &state, now, &LayoutConfig::default());
        canvas
    }

    fn texts(canvas: &Canvas) -> Vec<String> {
        canvas
            .ops()
            .iter()
            .filter_map(DrawOp::text)
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_today_is_highlighted_and_tomorrow_is_not() {
        let doc = json!({ "data": [
            { "weekday_index": 3, "name": "Torsdag" },
            { "weekday_index": 2, "name": "Onsdag" }
        ]});
        let canvas = render_days(doc, Some(wednesday()));
        let ops = canvas.ops();

        let fills = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillRect { color, .. } if *color == INK))
            .count();
        assert_eq!(fills, 1);
        assert_eq!(texts(&canvas), ["Onsdag", "Torsdag"]);

        let onsdag = ops.iter().position(|op| op.text() == Some("Onsdag")).unwrap();
        assert_eq!(ops[onsdag - 2], DrawOp::SetTextColor(PAPER));
        assert_eq!(ops[onsdag + 1], DrawOp::SetTextColor(INK));
    }

    #[test]
    fn test_day_sections() {
        let doc = json!({ "data": [{
            "weekday_index": 2,
            "name": "Onsdag",
            "dinner": "Pizza",
            "waste": [{ "type": "Papir" }],
            "events": [
                { "start": "2024-01-03T18:00:00", "summary": "Fotball" },
                { "start": "2024-01-10", "summary": "Ferie", "is_next_week": true }
            ],
            "timeplaner": { "4a_Ola": ["Norsk", "Matte"], "6b_Kari": ["Gym"] }
        }]});
        let canvas = render_days(doc, Some(wednesday()));
        assert_eq!(
            texts(&canvas),
            [
                "Onsdag",
                "Middag: Pizza",
                "Avfall: Papir",
                "Hendelser:",
                "18 Fotball",
                "Neste uke:",
                "Ferie",
                "Timeplan:",
                "Ola",
                "Kari",
                "Norsk",
                "Gym",
                "Matte",
            ]
        );
    }

    #[test]
    fn test_first_two_students_in_feed_order() {
        let doc = json!({ "data": [{
            "weekday_index": 2,
            "name": "Onsdag",
            "timeplaner": { "6b_Kari": ["Gym"], "4a_Ola": ["Norsk"], "1c_Per": ["Lek"] }
        }]});
        let canvas = render_days(doc, Some(wednesday()));
        assert_eq!(
            texts(&canvas),
            ["Onsdag", "Timeplan:", "Kari", "Ola", "Gym", "Norsk"]
        );
    }

    #[test]
    fn test_empty_name_falls_back_to_weekday() {
        let doc = json!({ "data": [{ "weekday_index": 2 }] });
        let canvas = render_days(doc, Some(wednesday()));
        assert_eq!(texts(&canvas), ["Onsdag"]);
    }

    #[test]
    fn test_no_time_replaces_calendar() {
        let doc = json!({ "data": [{ "weekday_index": 2, "name": "Onsdag" }] });
        let canvas = render_days(doc, None);
        assert_eq!(texts(&canvas), [CALENDAR_UNAVAILABLE]);
    }

    #[test]
    fn test_failed_and_disabled_feeds() {
        let mut canvas = Canvas::new();
        let failed = FeedState::Failed(FetchError::Timeout);
        draw(&mut canvas, &failed, Some(wednesday()), &LayoutConfig::default());
        assert_eq!(texts(&canvas), [CALENDAR_UNAVAILABLE]);

        let mut canvas = Canvas::new();
        draw(&mut canvas, &FeedState::Disabled, Some(wednesday()), &LayoutConfig::default());
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_long_day_stays_above_footer() {
        let events: Vec<_> = (0..60)
            .map(|i| json!({ "start": "2024-01-03T10:15:00", "summary": format!("Event {i}") }))
            .collect();
        let doc = json!({ "data": [{ "weekday_index": 2, "events": events }] });
        let canvas = render_days(doc, Some(wednesday()));

        let lowest = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetCursor(p) => Some(p.y),
                _ => None,
            })
            .max()
            .unwrap();
        assert!(lowest <= CALENDAR_BOTTOM_Y_PX);
        assert!(texts(&canvas).len() < 60);
    }
}
