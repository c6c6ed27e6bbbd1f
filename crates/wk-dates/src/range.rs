//! Date range selection state machine
//!
//! Phases: EMPTY → START_ONLY → COMPLETE → START_ONLY → ...
//! with END_ONLY reachable when a caller seeds only the end date.
//!
//! In unlocked mode the chronological order decides which slot a click
//! fills. In locked mode the caller pins the slot being edited and ordering
//! is left to the caller.

use serde::{Deserialize, Serialize};

use crate::adapter::DateAdapter;

/// Which end of the range an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputRole {
    StartDate,
    EndDate,
}

/// Phase of a range value, derived from which ends are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangePhase {
    Empty,
    StartOnly,
    EndOnly,
    Complete,
}

/// How a selection event chooses the slot to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    #[default]
    Unlocked,
    Locked(InputRole),
}

/// A committed `(start, end)` pair where either side may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValue<T> {
    pub start: Option<T>,
    pub end: Option<T>,
}

impl<T> Default for RangeValue<T> {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
        }
    }
}

impl<T> RangeValue<T> {
    pub fn new(start: Option<T>, end: Option<T>) -> Self {
        Self { start, end }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn start_only(start: T) -> Self {
        Self::new(Some(start), None)
    }

    pub fn end_only(end: T) -> Self {
        Self::new(None, Some(end))
    }

    pub fn complete(start: T, end: T) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn phase(&self) -> RangePhase {
        match (&self.start, &self.end) {
            (None, None) => RangePhase::Empty,
            (Some(_), None) => RangePhase::StartOnly,
            (None, Some(_)) => RangePhase::EndOnly,
            (Some(_), Some(_)) => RangePhase::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == RangePhase::Complete
    }
}

impl<T: Clone> RangeValue<T> {
    /// Apply a "select `date`" event and return the next committed value.
    ///
    /// The receiver is left untouched.
    pub fn select<A>(&self, adapter: &A, date: T, mode: SelectionMode) -> RangeValue<T>
    where
        A: DateAdapter<Date = T>,
    {
        let next = match mode {
            SelectionMode::Locked(InputRole::StartDate) => {
                RangeValue::new(Some(date), self.end.clone())
            }
            SelectionMode::Locked(InputRole::EndDate) => {
                RangeValue::new(self.start.clone(), Some(date))
            }
            SelectionMode::Unlocked => self.select_unlocked(adapter, date),
        };

        tracing::debug!(
            from = ?self.phase(),
            to = ?next.phase(),
            ?mode,
            "range selection"
        );
        next
    }

    fn select_unlocked<A>(&self, adapter: &A, date: T) -> RangeValue<T>
    where
        A: DateAdapter<Date = T>,
    {
        match (&self.start, &self.end) {
            // Starting a new range
            (None, None) | (Some(_), Some(_)) => RangeValue::start_only(date),

            // End needs a start: order the pick against the end
            (None, Some(end)) => {
                if adapter.is_after(&date, end) {
                    RangeValue::complete(end.clone(), date)
                } else {
                    RangeValue::complete(date, end.clone())
                }
            }

            // Start needs an end: order the pick against the start
            (Some(start), None) => {
                if adapter.is_after(&date, start) {
                    RangeValue::complete(start.clone(), date)
                } else {
                    RangeValue::complete(date, start.clone())
                }
            }
        }
    }
}

/// Value held by a date picker: one date, or a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DateValue<T> {
    Single(Option<T>),
    Range(RangeValue<T>),
}

impl<T> Default for DateValue<T> {
    fn default() -> Self {
        DateValue::Single(None)
    }
}

impl<T> DateValue<T> {
    pub fn as_range(&self) -> Option<&RangeValue<T>> {
        match self {
            DateValue::Range(r) => Some(r),
            DateValue::Single(_) => None,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, DateValue::Range(_))
    }
}
