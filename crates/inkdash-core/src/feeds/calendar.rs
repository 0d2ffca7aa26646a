use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde_json::Value;

use crate::json::FieldLookup;
use crate::time::Weekday;

/// Lesson columns shown per day.
pub const MAX_STUDENTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    /// ISO-like `YYYY-MM-DDTHH:MM[:SS]`; only the time part is displayed.
    pub start: String,
    pub summary: String,
    pub is_next_week: bool,
}

/// One day record of the calendar feed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarDay {
    /// `None` when the record has no usable weekday and can never match.
    pub weekday: Option<Weekday>,
    pub name: String,
    pub waste_types: Vec<String>,
    pub dinner: Option<String>,
    pub events: Vec<Event>,
    /// `(student key, lessons)` in feed order.
    pub lessons_by_student: Vec<(String, Vec<String>)>,
}

impl CalendarDay {
    pub fn from_json(day: &Value) -> Self {
        let weekday = day
            .i64_at(&["weekday_index"])
            .and_then(|i| u8::try_from(i).ok())
            .and_then(Weekday::new);

        let dinner = day
            .str_at(&["dinner"])
            .filter(|d| !d.trim().is_empty())
            .map(ToString::to_string);

        let waste_types = day
            .array_at(&["waste"])
            .iter()
            .filter_map(|w| w.str_at(&["type"]))
            .map(ToString::to_string)
            .collect();

        let events = day
            .array_at(&["events"])
            .iter()
            .map(|e| Event {
                start: e.str_or(&["start"], "").to_string(),
                summary: e.str_or(&["summary"], "").to_string(),
                is_next_week: e.bool_or(&["is_next_week"], false),
            })
            .collect();

        let lessons_by_student = day
            .entries_at(&["timeplaner"])
            .map(|(student, lessons)| {
                let lessons = lessons
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(ToString::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                (student.to_string(), lessons)
            })
            .collect();

        Self {
            weekday,
            name: day.str_or(&["name"], "").to_string(),
            waste_types,
            dinner,
            events,
            lessons_by_student,
        }
    }

    /// Events belonging to this week, then those flagged for next week.
    pub fn split_events(&self) -> (Vec<&Event>, Vec<&Event>) {
        self.events.iter().partition(|e| !e.is_next_week)
    }
}

/// Map the calendar document's `data` array to day records in feed order.
pub fn calendar_days(doc: &Value) -> Vec<CalendarDay> {
    doc.array_at(&["data"])
        .iter()
        .map(CalendarDay::from_json)
        .collect()
}
