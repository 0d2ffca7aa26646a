//! Matching of upcoming weekdays to calendar feed records.

use alloc::vec::Vec;

use crate::feeds::CalendarDay;
use crate::time::Weekday;

/// Weekdays shown on the page: today, then each following day.
pub fn target_weekdays(today: Weekday, horizon: usize) -> impl Iterator<Item = Weekday> {
    (0..horizon).map(move |k| today.offset(k))
}

/// Pick the record for each target weekday in order.
///
/// The first record with a matching weekday wins; later duplicates are
/// ignored. A target without any record yields `None` and is skipped by the
/// renderer.
pub fn select_days(
    today: Weekday,
    horizon: usize,
    days: &[CalendarDay],
) -> Vec<Option<&CalendarDay>> {
    target_weekdays(today, horizon)
        .map(|target| days.iter().find(|day| day.weekday == Some(target)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn day(index: u8, name: &str) -> CalendarDay {
        CalendarDay {
            weekday: Weekday::new(index),
            name: name.to_string(),
            ..CalendarDay::default()
        }
    }

    #[test]
    fn test_targets_wrap_through_the_week() {
        for today in 0..7u8 {
            let today = Weekday::new(today).unwrap();
            let targets: Vec<u8> = target_weekdays(today, 4).map(Weekday::index).collect();
            let expected: Vec<u8> = (0..4).map(|k| (today.index() + k) % 7).collect();
            assert_eq!(targets, expected);
        }
    }

    #[test]
    fn test_missing_tomorrow_is_empty_slot() {
        let days = [day(1, "Tirsdag"), day(3, "Torsdag"), day(5, "Lørdag")];
        let selected = select_days(Weekday::new(3).unwrap(), 2, &days);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].map(|d| d.name.as_str()), Some("Torsdag"));
        assert!(selected[1].is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let days = [day(0, "first"), day(0, "second")];
        let selected = select_days(Weekday::MONDAY, 1, &days);
        assert_eq!(selected[0].map(|d| d.name.as_str()), Some("first"));
    }

    #[test]
    fn test_sunday_wraps_to_monday() {
        let days = [day(0, "Mandag"), day(6, "Søndag")];
        let selected = select_days(Weekday::SUNDAY, 2, &days);
        assert_eq!(selected[0].map(|d| d.name.as_str()), Some("Søndag"));
        assert_eq!(selected[1].map(|d| d.name.as_str()), Some("Mandag"));
    }

    #[test]
    fn test_zero_horizon() {
        assert!(select_days(Weekday::MONDAY, 0, &[day(0, "x")]).is_empty());
    }
}
