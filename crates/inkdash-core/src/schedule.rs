//! Wake-time scheduling for deep-sleep operation.
//!
//! The device is configured with a handful of wake-of-day targets. After each
//! render it sleeps until the next target strictly after "now"; when nothing
//! is left today it sleeps across midnight to tomorrow's first target.

use heapless::Vec;
use thiserror_no_std::Error;

use crate::time::TimeOfDay;

/// Maximum number of wake-of-day entries a schedule can hold.
pub const MAX_WAKE_TIMES: usize = 12;

/// Sleep used when the clock could not be read (30 minutes).
pub const DEFAULT_SLEEP_SECS: u32 = 1800;

const MINUTES_PER_DAY: u32 = 1440;

/// Extra minute added when the next wake is tomorrow, so the RTC never fires
/// just before the target and renders a stale day.
const WRAP_GUARD_MINUTES: u32 = 1;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("wake schedule is empty")]
    Empty,
    #[error("wake schedule holds more than {max} entries")]
    TooManyEntries { max: usize },
    #[error("invalid wake time {hour}:{minute}")]
    InvalidTime { hour: u8, minute: u8 },
    #[error("wake time at index {index} is not after the previous one")]
    NotAscending { index: usize },
    #[error("wake time is not in HH:MM form")]
    Malformed,
}

/// Parse a single `HH:MM` entry.
pub fn parse_wake_time(text: &str) -> Result<TimeOfDay, ScheduleError> {
    let (h, m) = text.trim().split_once(':').ok_or(ScheduleError::Malformed)?;
    let hour: u8 = h.parse().map_err(|_| ScheduleError::Malformed)?;
    let minute: u8 = m.parse().map_err(|_| ScheduleError::Malformed)?;
    if hour > 23 || minute > 59 {
        return Err(ScheduleError::InvalidTime { hour, minute });
    }
    Ok(TimeOfDay::new(hour, minute))
}

/// Ordered, non-empty list of daily wake targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeSchedule {
    entries: Vec<TimeOfDay, MAX_WAKE_TIMES>,
}

impl WakeSchedule {
    /// Validate entries: non-empty, in range, strictly ascending.
    pub fn new(entries: &[TimeOfDay]) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::Empty);
        }
        let mut out = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.hour > 23 || entry.minute > 59 {
                return Err(ScheduleError::InvalidTime {
                    hour: entry.hour,
                    minute: entry.minute,
                });
            }
            if index > 0 && entry.minutes() <= entries[index - 1].minutes() {
                return Err(ScheduleError::NotAscending { index });
            }
            out.push(*entry).map_err(|_| ScheduleError::TooManyEntries {
                max: MAX_WAKE_TIMES,
            })?;
        }
        Ok(Self { entries: out })
    }

    /// Parse a comma-separated list such as `"05:00,12:00,18:00"`.
    pub fn parse_list(list: &str) -> Result<Self, ScheduleError> {
        let mut entries: Vec<TimeOfDay, MAX_WAKE_TIMES> = Vec::new();
        for part in list.split(',').filter(|p| !p.trim().is_empty()) {
            entries
                .push(parse_wake_time(part)?)
                .map_err(|_| ScheduleError::TooManyEntries {
                    max: MAX_WAKE_TIMES,
                })?;
        }
        Self::new(&entries)
    }

    pub fn entries(&self) -> &[TimeOfDay] {
        &self.entries
    }

    /// First wake of the day, used when wrapping past midnight.
    pub fn first(&self) -> TimeOfDay {
        // Non-empty by construction.
        self.entries[0]
    }

    /// The first entry strictly after `now` today, if any.
    pub fn next_today(&self, now: TimeOfDay) -> Option<TimeOfDay> {
        let current = now.minutes();
        self.entries.iter().copied().find(|e| e.minutes() > current)
    }

    /// Minutes to sleep from `now` until the next wake target.
    pub fn sleep_minutes(&self, now: TimeOfDay) -> u32 {
        let current = now.minutes();
        match self.next_today(now) {
            Some(next) => next.minutes() - current,
            None => (MINUTES_PER_DAY - current) + self.first().minutes() + WRAP_GUARD_MINUTES,
        }
    }
}

/// Whole seconds to sleep from `now` until the next scheduled wake.
pub fn next_wake_seconds(now: TimeOfDay, schedule: &WakeSchedule) -> u32 {
    schedule.sleep_minutes(now) * 60
}

/// How long to sleep at the end of a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SleepPlan {
    /// Deep-sleep variant: wake at fixed times of day.
    WakeTable(WakeSchedule),
    /// Continuously-running variant: refresh every N seconds.
    Interval { secs: u32 },
}

impl SleepPlan {
    /// Seconds until the next refresh; falls back to `fallback_secs` when the
    /// wake table is in use but the time is unknown.
    pub fn sleep_secs(&self, now: Option<TimeOfDay>, fallback_secs: u32) -> u32 {
        match (self, now) {
            (Self::WakeTable(schedule), Some(now)) => next_wake_seconds(now, schedule),
            (Self::WakeTable(_), None) => fallback_secs,
            (Self::Interval { secs }, _) => *secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_a_day() -> WakeSchedule {
        WakeSchedule::new(&[
            TimeOfDay::new(5, 0),
            TimeOfDay::new(12, 0),
            TimeOfDay::new(18, 0),
        ])
        .unwrap()
    }

    #[test]
    fn test_one_minute_before_first_wake() {
        assert_eq!(next_wake_seconds(TimeOfDay::new(4, 59), &three_a_day()), 60);
    }

    #[test]
    fn test_exactly_on_last_entry_wraps_to_tomorrow() {
        let expected = ((24 * 60 - 18 * 60) + 5 * 60 + 1) * 60;
        assert_eq!(
            next_wake_seconds(TimeOfDay::new(18, 0), &three_a_day()),
            expected
        );
    }

    #[test]
    fn test_exactly_on_entry_rolls_to_next_entry() {
        assert_eq!(
            next_wake_seconds(TimeOfDay::new(12, 0), &three_a_day()),
            6 * 3600
        );
    }

    #[test]
    fn test_before_first_entry_of_day() {
        assert_eq!(
            next_wake_seconds(TimeOfDay::new(0, 30), &three_a_day()),
            (4 * 60 + 30) * 60
        );
    }

    #[test]
    fn test_after_last_entry_of_day() {
        // 23:10 -> 05:00 tomorrow is 5h50m, plus the guard minute
        assert_eq!(
            next_wake_seconds(TimeOfDay::new(23, 10), &three_a_day()),
            (5 * 60 + 50 + 1) * 60
        );
    }

    #[test]
    fn test_single_entry_schedule() {
        let schedule = WakeSchedule::new(&[TimeOfDay::new(6, 30)]).unwrap();
        assert_eq!(next_wake_seconds(TimeOfDay::new(6, 0), &schedule), 30 * 60);
        assert_eq!(
            next_wake_seconds(TimeOfDay::new(6, 30), &schedule),
            (24 * 60 + 1) * 60
        );
    }

    #[test]
    fn test_sleep_is_never_below_a_minute() {
        let schedule = three_a_day();
        for hour in 0..24 {
            for minute in 0..60 {
                assert!(next_wake_seconds(TimeOfDay::new(hour, minute), &schedule) >= 60);
            }
        }
    }

    #[test]
    fn test_schedule_validation() {
        assert_eq!(WakeSchedule::new(&[]), Err(ScheduleError::Empty));
        assert_eq!(
            WakeSchedule::new(&[TimeOfDay::new(12, 0), TimeOfDay::new(5, 0)]),
            Err(ScheduleError::NotAscending { index: 1 })
        );
        assert_eq!(
            WakeSchedule::new(&[TimeOfDay::new(24, 0)]),
            Err(ScheduleError::InvalidTime { hour: 24, minute: 0 })
        );
    }

    #[test]
    fn test_parse_list() {
        let schedule = WakeSchedule::parse_list("05:00, 12:00,18:30").unwrap();
        assert_eq!(schedule.entries().len(), 3);
        assert_eq!(schedule.entries()[2], TimeOfDay::new(18, 30));
        assert_eq!(
            WakeSchedule::parse_list("5h"),
            Err(ScheduleError::Malformed)
        );
        assert_eq!(WakeSchedule::parse_list(""), Err(ScheduleError::Empty));
    }

    #[test]
    fn test_sleep_plan_fallback_without_time() {
        let plan = SleepPlan::WakeTable(three_a_day());
        assert_eq!(plan.sleep_secs(None, DEFAULT_SLEEP_SECS), DEFAULT_SLEEP_SECS);
        assert_eq!(
            SleepPlan::Interval { secs: 900 }.sleep_secs(Some(TimeOfDay::new(1, 0)), 60),
            900
        );
    }
}
