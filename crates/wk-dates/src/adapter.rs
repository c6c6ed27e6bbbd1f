//! Pluggable date adapter.
//!
//! Calendar logic never touches a concrete date type. Everything it needs
//! goes through [`DateAdapter`].

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Named output formats understood by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKey {
    /// "Sunday, March 10th 2024"
    FullOrdinalWeek,
    /// "March 2024"
    MonthYear,
    /// "2024/03/10"
    Date,
    /// "2024/03/10 14:05"
    DateTime,
    /// "2:05 PM"
    Hours12,
    /// "14:05"
    Hours24,
}

impl FormatKey {
    /// strftime-style pattern used by the chrono adapter.
    ///
    /// `FullOrdinalWeek` has no pattern of its own; the ordinal suffix is
    /// computed separately.
    pub fn pattern(&self) -> &'static str {
        match self {
            FormatKey::FullOrdinalWeek => "%A, %B %-d %Y",
            FormatKey::MonthYear => "%B %Y",
            FormatKey::Date => "%Y/%m/%d",
            FormatKey::DateTime => "%Y/%m/%d %H:%M",
            FormatKey::Hours12 => "%-I:%M %p",
            FormatKey::Hours24 => "%H:%M",
        }
    }
}

/// Operations over an abstract date value.
///
/// Months are 1-based. Comparisons use the full timestamp unless the name
/// says `day`.
pub trait DateAdapter {
    type Date: Clone + std::fmt::Debug;

    fn is_after(&self, a: &Self::Date, b: &Self::Date) -> bool;
    fn is_before(&self, a: &Self::Date, b: &Self::Date) -> bool;
    fn is_same_day(&self, a: &Self::Date, b: &Self::Date) -> bool;

    /// Shift by whole days; negative values go backwards.
    fn add_days(&self, date: &Self::Date, days: i64) -> Self::Date;

    /// First day of the month at midnight.
    fn start_of_month(&self, date: &Self::Date) -> Self::Date;
    /// Last day of the month at the last representable millisecond.
    fn end_of_month(&self, date: &Self::Date) -> Self::Date;

    fn year(&self, date: &Self::Date) -> i32;
    fn month(&self, date: &Self::Date) -> u32;
    fn day_of_month(&self, date: &Self::Date) -> u32;
    fn hours(&self, date: &Self::Date) -> u32;
    fn minutes(&self, date: &Self::Date) -> u32;

    fn set_hours(&self, date: &Self::Date, hours: u32) -> Self::Date;
    fn set_minutes(&self, date: &Self::Date, minutes: u32) -> Self::Date;
    fn set_seconds(&self, date: &Self::Date, seconds: u32) -> Self::Date;

    fn format(&self, date: &Self::Date, key: FormatKey) -> String;
    fn parse(&self, input: &str, key: FormatKey) -> Result<Self::Date, DateError>;
}
