//! `chrono` backed adapter over `NaiveDateTime`.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::adapter::{DateAdapter, FormatKey};
use crate::error::DateError;

/// Date adapter for naive (timezone-free) local date-times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChronoAdapter;

impl ChronoAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Midnight on the first day of `year`-`month`.
    pub fn month_start(year: i32, month: u32) -> Result<NaiveDateTime, DateError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(DateError::InvalidMonth { year, month })
    }

    /// Midnight on the given calendar day.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

impl DateAdapter for ChronoAdapter {
    type Date = NaiveDateTime;

    fn is_after(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a > b
    }

    fn is_before(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a < b
    }

    fn is_same_day(&self, a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
        a.date() == b.date()
    }

    fn add_days(&self, date: &NaiveDateTime, days: i64) -> NaiveDateTime {
        let shifted = if days >= 0 {
            date.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        // Out of chrono's range: stay put.
        shifted.unwrap_or(*date)
    }

    fn start_of_month(&self, date: &NaiveDateTime) -> NaiveDateTime {
        Self::month_start(date.year(), date.month()).unwrap_or(*date)
    }

    fn end_of_month(&self, date: &NaiveDateTime) -> NaiveDateTime {
        let (year, month) = if date.month() == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), date.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .and_then(|last| last.and_hms_milli_opt(23, 59, 59, 999))
            .unwrap_or(*date)
    }

    fn year(&self, date: &NaiveDateTime) -> i32 {
        date.year()
    }

    fn month(&self, date: &NaiveDateTime) -> u32 {
        date.month()
    }

    fn day_of_month(&self, date: &NaiveDateTime) -> u32 {
        date.day()
    }

    fn hours(&self, date: &NaiveDateTime) -> u32 {
        date.hour()
    }

    fn minutes(&self, date: &NaiveDateTime) -> u32 {
        date.minute()
    }

    fn set_hours(&self, date: &NaiveDateTime, hours: u32) -> NaiveDateTime {
        date.with_hour(hours).unwrap_or(*date)
    }

    fn set_minutes(&self, date: &NaiveDateTime, minutes: u32) -> NaiveDateTime {
        date.with_minute(minutes).unwrap_or(*date)
    }

    fn set_seconds(&self, date: &NaiveDateTime, seconds: u32) -> NaiveDateTime {
        date.with_second(seconds).unwrap_or(*date)
    }

    fn format(&self, date: &NaiveDateTime, key: FormatKey) -> String {
        match key {
            FormatKey::FullOrdinalWeek => format!(
                "{}, {} {}{} {}",
                date.format("%A"),
                date.format("%B"),
                date.day(),
                ordinal_suffix(date.day()),
                date.year()
            ),
            other => date.format(other.pattern()).to_string(),
        }
    }

    fn parse(&self, input: &str, key: FormatKey) -> Result<NaiveDateTime, DateError> {
        let err = || DateError::Parse {
            input: input.to_string(),
            format: key.pattern().to_string(),
        };
        match key {
            FormatKey::Date => NaiveDate::parse_from_str(input, key.pattern())
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .ok_or_else(err),
            FormatKey::DateTime => {
                NaiveDateTime::parse_from_str(input, key.pattern()).map_err(|_| err())
            }
            FormatKey::Hours12 | FormatKey::Hours24 => {
                // Times land on the epoch day.
                let time = NaiveTime::parse_from_str(input, key.pattern()).map_err(|_| err())?;
                NaiveDate::from_ymd_opt(1970, 1, 1)
                    .map(|d| d.and_time(time))
                    .ok_or_else(err)
            }
            FormatKey::FullOrdinalWeek | FormatKey::MonthYear => Err(err()),
        }
    }
}
