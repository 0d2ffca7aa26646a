//! Text limiting and formatting used by the page layout.

mod shaping;

pub use shaping::{GlyphToken, Mark, cell_count, shape};

use alloc::string::String;
use alloc::vec::Vec;

/// Cell budget for event summaries and dinner text.
pub const DEFAULT_TEXT_BUDGET_CHARS: usize = 32;

/// Maximum characters in the footer error banner, label included.
pub const DEFAULT_BANNER_MAX_CHARS: usize = 72;

/// Appended to truncated text; counts toward the budget.
pub const ELLIPSIS: &str = "...";

/// Label in front of the footer error list.
pub const BANNER_LABEL: &str = "Feil: ";

/// Cap `text` at `budget` drawn cells, ending in `...` when cut.
///
/// Cells are counted after shaping, so digraph expansions such as `æ` to
/// `ae` count twice.
pub fn truncate(text: &str, budget: usize) -> String {
    if text.chars().map(cell_count).sum::<usize>() <= budget {
        return String::from(text);
    }
    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        used += cell_count(ch);
        if used > keep {
            break;
        }
        out.push(ch);
    }
    out.push_str(&ELLIPSIS[..budget.min(ELLIPSIS.len())]);
    out
}

/// Render an event start timestamp as `HH:MM`, or `HH` on the whole hour.
///
/// The time part starts after the 11-character `YYYY-MM-DDT` prefix. Returns
/// an empty string when the timestamp has no time part (all-day events).
pub fn format_event_time(start: &str) -> String {
    let clock: String = start.chars().skip(11).take(5).collect();
    match clock.split_once(':') {
        Some((hour, "00")) => String::from(hour),
        _ => clock,
    }
}

/// Display label for a timetable key: `"2b_Ola"` becomes `"Ola"`.
///
/// Only a non-empty prefix before the first underscore is stripped.
pub fn student_label(key: &str) -> &str {
    match key.find('_') {
        Some(pos) if pos > 0 => &key[pos + 1..],
        _ => key,
    }
}

/// Accumulates short failure tags for the footer banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    tags: Vec<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: &str) {
        self.tags.push(String::from(tag));
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// `Feil: a, b, c`, capped at `max_chars` overall.
    pub fn text(&self, max_chars: usize) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let mut line = String::from(BANNER_LABEL);
        line.push_str(&self.tags.join(", "));
        Some(truncate(&line, max_chars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_summary() {
        let summary = "Foreldremøte i gymsalen med påfølgende dugnad ute!";
        assert_eq!(summary.chars().count(), 50);

        let cut = truncate(summary, DEFAULT_TEXT_BUDGET_CHARS);
        assert_eq!(cut.chars().count(), DEFAULT_TEXT_BUDGET_CHARS);
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_short_and_exact() {
        assert_eq!(truncate("Taco", 32), "Taco");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdefg", 6), "abc...");
        assert_eq!(truncate("abcdefg", 2), "..");
    }

    #[test]
    fn test_truncate_counts_shaped_cells() {
        assert_eq!(truncate("øåøåøå", 5), "øå...");
        assert_eq!(truncate("æøåæøå", 5), "æ...");
        assert_eq!(truncate("Smørbrød", 8), "Smørbrød");

        let dinner = "Blåbærsyltetøy, rømmegrøt og kjøttkaker";
        let cut = truncate(dinner, DEFAULT_TEXT_BUDGET_CHARS);
        assert!(cut.ends_with(ELLIPSIS));
        assert!(shape(&cut).len() <= DEFAULT_TEXT_BUDGET_CHARS);

        let full = "æææææææææææææææææææææææææææææææ";
        assert_eq!(shape(&truncate(full, DEFAULT_TEXT_BUDGET_CHARS)).len(), 31);
    }

    #[test]
    fn test_event_time() {
        assert_eq!(format_event_time("2024-01-01T18:00:00"), "18");
        assert_eq!(format_event_time("2024-01-01T18:30:00"), "18:30");
        assert_eq!(format_event_time("2024-01-01T07:05"), "07:05");
        assert_eq!(format_event_time("2024-01-01"), "");
    }

    #[test]
    fn test_student_label() {
        assert_eq!(student_label("2b_Ola"), "Ola");
        assert_eq!(student_label("a_b_c"), "b_c");
        assert_eq!(student_label("_Kari"), "_Kari");
        assert_eq!(student_label("Per"), "Per");
    }

    #[test]
    fn test_banner() {
        let mut banner = ErrorBanner::new();
        assert_eq!(banner.text(72), None);

        banner.push("Vaer");
        banner.push("Kalender");
        assert_eq!(banner.text(72).as_deref(), Some("Feil: Vaer, Kalender"));
        assert_eq!(banner.text(12).as_deref(), Some("Feil: Vae..."));
    }
}
