//! Local calendar time for the dashboard.
//!
//! The firmware only ever knows UTC seconds (from SNTP); everything the page
//! shows is local wall-clock time. The conversions here are pure integer
//! arithmetic so they can be tested on the host.

use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

const SECS_PER_DAY: i64 = 86_400;

/// Day of the week, Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weekday(u8);

impl Weekday {
    pub const MONDAY: Self = Self(0);
    pub const SUNDAY: Self = Self(6);

    /// Norwegian day names, Monday first.
    const NAMES_NB: [&'static str; 7] = [
        "Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag", "Lørdag", "Søndag",
    ];

    /// Build from a Monday-based index, rejecting anything outside 0..=6.
    pub const fn new(index: u8) -> Option<Self> {
        if index < 7 { Some(Self(index)) } else { None }
    }

    /// Remap a platform weekday where Sunday = 0.
    pub const fn from_sunday_based(wday: u8) -> Self {
        Self((wday % 7 + 6) % 7)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// The weekday `days` after this one.
    pub const fn offset(self, days: usize) -> Self {
        Self(((self.0 as usize + days % 7) % 7) as u8)
    }

    pub const fn name_nb(self) -> &'static str {
        Self::NAMES_NB[self.0 as usize]
    }
}

/// Hour and minute of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

impl TimeOfDay {
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub const fn minutes(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

/// Daylight-saving rule applied on top of the standard offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DstRule {
    None,
    /// +1h from the last Sunday of March 01:00 UTC until the last Sunday of
    /// October 01:00 UTC.
    #[default]
    #[serde(rename = "eu")]
    EuropeanUnion,
}

/// A fixed standard offset plus a DST rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    pub std_offset_secs: i32,
    pub dst: DstRule,
}

impl TimeZone {
    pub const UTC: Self = Self {
        std_offset_secs: 0,
        dst: DstRule::None,
    };

    /// Offset from UTC in effect at the given UTC instant.
    pub fn offset_at(&self, unix_secs: i64) -> i32 {
        let dst = match self.dst {
            DstRule::None => 0,
            DstRule::EuropeanUnion if eu_summer_time(unix_secs) => 3600,
            DstRule::EuropeanUnion => 0,
        };
        self.std_offset_secs + dst
    }
}

impl Default for TimeZone {
    /// Central European time, matching the dashboard's home location.
    fn default() -> Self {
        Self {
            std_offset_secs: 3600,
            dst: DstRule::EuropeanUnion,
        }
    }
}

/// Broken-down local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: Weekday,
}

impl LocalTime {
    /// Convert UTC seconds since the Unix epoch to local time in `tz`.
    pub fn from_unix(unix_secs: u64, tz: &TimeZone) -> Self {
        let utc = unix_secs as i64;
        let local = utc + i64::from(tz.offset_at(utc));
        let days = local.div_euclid(SECS_PER_DAY);
        let secs_of_day = local.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            hour: (secs_of_day / 3600) as u8,
            minute: (secs_of_day % 3600 / 60) as u8,
            second: (secs_of_day % 60) as u8,
            weekday: weekday_from_days(days),
        }
    }

    pub const fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::new(self.hour, self.minute)
    }

    /// `DD.MM.YYYY`, the header format of the left column.
    pub fn date_label(&self) -> String {
        format!("{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Days since 1970-01-01 to proleptic Gregorian (year, month, day).
pub fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
    (year, month, day)
}

/// Proleptic Gregorian date to days since 1970-01-01.
pub fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// 1970-01-01 was a Thursday (index 3).
fn weekday_from_days(days: i64) -> Weekday {
    Weekday((days + 3).rem_euclid(7) as u8)
}

/// Epoch day of the last Sunday in a 31-day month.
fn last_sunday_of(year: i32, month: u8) -> i64 {
    let last = days_from_civil(year, month, 31);
    let back = (i64::from(weekday_from_days(last).index()) + 1) % 7;
    last - back
}

fn eu_summer_time(unix_secs: i64) -> bool {
    let (year, _, _) = civil_from_days(unix_secs.div_euclid(SECS_PER_DAY));
    let start = last_sunday_of(year, 3) * SECS_PER_DAY + 3600;
    let end = last_sunday_of(year, 10) * SECS_PER_DAY + 3600;
    (start..end).contains(&unix_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunday_based_remap() {
        assert_eq!(Weekday::from_sunday_based(0), Weekday::SUNDAY);
        assert_eq!(Weekday::from_sunday_based(1), Weekday::MONDAY);
        assert_eq!(Weekday::from_sunday_based(6).index(), 5);
    }

    #[test]
    fn test_weekday_offset_wraps() {
        assert_eq!(Weekday::SUNDAY.offset(1), Weekday::MONDAY);
        assert_eq!(Weekday::MONDAY.offset(13).index(), 6);
        assert!(Weekday::new(7).is_none());
    }

    #[test]
    fn test_civil_round_trip_known_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        assert_eq!(days_from_civil(2024, 2, 29), 19_782);
    }

    #[test]
    fn test_from_unix_utc() {
        // 2024-01-01T18:30:05Z, a Monday
        let t = LocalTime::from_unix(1_704_133_805, &TimeZone::UTC);
        assert_eq!((t.year, t.month, t.day), (2024, 1, 1));
        assert_eq!((t.hour, t.minute, t.second), (18, 30, 5));
        assert_eq!(t.weekday, Weekday::MONDAY);
        assert_eq!(t.date_label(), "01.01.2024");
    }

    #[test]
    fn test_central_european_winter_and_summer() {
        let tz = TimeZone::default();

        // 2024-01-15T23:30:00Z -> 00:30 next day in CET
        let winter = LocalTime::from_unix(1_705_361_400, &tz);
        assert_eq!((winter.day, winter.hour, winter.minute), (16, 0, 30));

        // 2024-07-01T12:00:00Z -> 14:00 CEST
        let summer = LocalTime::from_unix(1_719_835_200, &tz);
        assert_eq!(summer.hour, 14);
    }

    #[test]
    fn test_eu_dst_boundaries_2024() {
        // Summer time starts 2024-03-31T01:00:00Z, ends 2024-10-27T01:00:00Z
        let start = 1_711_846_800;
        let end = 1_729_990_800;
        assert!(!eu_summer_time(start - 1));
        assert!(eu_summer_time(start));
        assert!(eu_summer_time(end - 1));
        assert!(!eu_summer_time(end));
    }
}
