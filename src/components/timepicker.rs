//! Time picker option generation
//!
//! Times are handled as seconds since midnight. The dropdown lists one
//! option per `step` seconds, optionally limited by min/max date-times.

use serde::{Deserialize, Serialize};
use wk_dates::{DateAdapter, DateError, FormatKey};

pub const SECONDS_IN_DAY: u32 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12")]
    Hours12,
    #[serde(rename = "24")]
    Hours24,
}

impl TimeFormat {
    fn format_key(self) -> FormatKey {
        match self {
            TimeFormat::Hours12 => FormatKey::Hours12,
            TimeFormat::Hours24 => FormatKey::Hours24,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimePickerConfig {
    pub format: TimeFormat,
    /// Seconds between options.
    pub step: u32,
    pub creatable: bool,
    pub ignore_min_max_date_component: bool,
}

impl Default for TimePickerConfig {
    fn default() -> Self {
        Self {
            format: TimeFormat::Hours12,
            step: 900,
            creatable: false,
            ignore_min_max_date_component: false,
        }
    }
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeOption {
    pub id: u32,
    pub label: String,
}

/// Display label for a time of day.
pub fn seconds_to_label(seconds: u32, format: TimeFormat) -> String {
    let hours = (seconds / 3600) % 24;
    let minutes = (seconds % 3600) / 60;
    match format {
        TimeFormat::Hours24 => format!("{:02}:{:02}", hours, minutes),
        TimeFormat::Hours12 => {
            let suffix = if hours < 12 { "AM" } else { "PM" };
            let hour12 = match hours % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", hour12, minutes, suffix)
        }
    }
}

pub struct TimePicker<A> {
    adapter: A,
    config: TimePickerConfig,
}

impl<A: DateAdapter> TimePicker<A> {
    pub fn new(adapter: A, config: TimePickerConfig) -> Self {
        Self { adapter, config }
    }

    pub fn config(&self) -> &TimePickerConfig {
        &self.config
    }

    pub fn seconds_of(&self, date: &A::Date) -> u32 {
        self.adapter.hours(date) * 3600 + self.adapter.minutes(date) * 60
    }

    /// `date` moved to `seconds` past its midnight.
    pub fn apply(&self, date: &A::Date, seconds: u32) -> A::Date {
        let seconds = seconds % SECONDS_IN_DAY;
        let a = &self.adapter;
        a.set_seconds(
            &a.set_minutes(&a.set_hours(date, seconds / 3600), (seconds % 3600) / 60),
            0,
        )
    }

    /// Every step of the day, without limits.
    pub fn all_steps(&self) -> Vec<u32> {
        let step = self.config.step.max(1);
        if SECONDS_IN_DAY % step != 0 {
            tracing::warn!(step, "time picker step does not divide a day evenly");
        }
        (0..SECONDS_IN_DAY).step_by(step as usize).collect()
    }

    /// Lower bound in seconds for `min` relative to the day of `value`.
    ///
    /// A minimum on an earlier day opens the whole day; one on a later day
    /// closes it.
    fn lower_bound(&self, min: &A::Date, value: Option<&A::Date>) -> Option<u32> {
        match value {
            Some(value) if !self.config.ignore_min_max_date_component => {
                if self.adapter.is_same_day(min, value) {
                    Some(self.seconds_of(min))
                } else if self.adapter.is_before(min, value) {
                    Some(0)
                } else {
                    None
                }
            }
            _ => Some(self.seconds_of(min)),
        }
    }

    fn upper_bound(&self, max: &A::Date, value: Option<&A::Date>) -> Option<u32> {
        match value {
            Some(value) if !self.config.ignore_min_max_date_component => {
                if self.adapter.is_same_day(max, value) {
                    Some(self.seconds_of(max))
                } else if self.adapter.is_after(max, value) {
                    Some(SECONDS_IN_DAY - 1)
                } else {
                    None
                }
            }
            _ => Some(self.seconds_of(max)),
        }
    }

    /// Steps within the optional `[min, max]` window.
    pub fn steps(
        &self,
        value: Option<&A::Date>,
        min: Option<&A::Date>,
        max: Option<&A::Date>,
    ) -> Vec<u32> {
        let lower = match min {
            Some(min) => self.lower_bound(min, value),
            None => Some(0),
        };
        let upper = match max {
            Some(max) => self.upper_bound(max, value),
            None => Some(SECONDS_IN_DAY - 1),
        };
        let (Some(lower), Some(upper)) = (lower, upper) else {
            tracing::debug!("time window excludes the selected day");
            return Vec::new();
        };
        self.all_steps()
            .into_iter()
            .filter(|s| (lower..=upper).contains(s))
            .collect()
    }

    pub fn options(&self, steps: &[u32]) -> Vec<TimeOption> {
        steps
            .iter()
            .map(|&id| TimeOption {
                id,
                label: seconds_to_label(id, self.config.format),
            })
            .collect()
    }

    /// Step closest to the time of `date`; earlier step wins ties.
    pub fn nearest_step(&self, steps: &[u32], date: &A::Date) -> Option<u32> {
        let seconds = self.seconds_of(date);
        steps
            .iter()
            .copied()
            .min_by_key(|s| s.abs_diff(seconds))
    }

    /// Parse typed input in the configured format to seconds.
    pub fn parse_input(&self, input: &str) -> Result<u32, DateError> {
        let parsed = self
            .adapter
            .parse(input.trim(), self.config.format.format_key())?;
        Ok(self.seconds_of(&parsed))
    }

    /// Option for typed input. Off-step times only pass when creatable.
    pub fn option_for_input(&self, steps: &[u32], input: &str) -> Option<TimeOption> {
        let seconds = self.parse_input(input).ok()?;
        if !self.config.creatable && !steps.contains(&seconds) {
            return None;
        }
        Some(TimeOption {
            id: seconds,
            label: seconds_to_label(seconds, self.config.format),
        })
    }
}
