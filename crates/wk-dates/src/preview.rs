//! Read-only range previews.
//!
//! Everything here is derived from a committed range plus an optional
//! highlighted (hovered or keyboard-focused) date. Nothing is written back.

use crate::adapter::DateAdapter;
use crate::helpers::DateHelpers;
use crate::range::RangeValue;

/// A committed range seen through a transient highlighted date.
pub struct RangePreview<'a, A: DateAdapter> {
    helpers: &'a DateHelpers<A>,
    value: &'a RangeValue<A::Date>,
    highlighted: Option<&'a A::Date>,
}

impl<'a, A: DateAdapter> RangePreview<'a, A> {
    pub fn new(
        helpers: &'a DateHelpers<A>,
        value: &'a RangeValue<A::Date>,
        highlighted: Option<&'a A::Date>,
    ) -> Self {
        Self {
            helpers,
            value,
            highlighted,
        }
    }

    fn adapter(&self) -> &A {
        self.helpers.adapter()
    }

    fn clamp(&self, date: &A::Date) -> A::Date {
        self.helpers.clamp_to_day_start(date)
    }

    /// Start and the end (or highlighted date standing in for it), sorted
    /// and clamped to day start. `None` without a start.
    pub fn ordered_dates(&self) -> Option<(A::Date, A::Date)> {
        let first = self.value.start.as_ref()?;
        let second = self.value.end.as_ref().or(self.highlighted)?;
        let first = self.clamp(first);
        let second = self.clamp(second);
        if self.adapter().is_after(&first, &second) {
            Some((second, first))
        } else {
            Some((first, second))
        }
    }

    /// Day falls inside a complete committed range.
    pub fn is_pseudo_selected(&self, date: &A::Date) -> bool {
        match (&self.value.start, &self.value.end) {
            (Some(start), Some(end)) => self.helpers.is_day_in_range(
                &self.clamp(date),
                &self.clamp(start),
                &self.clamp(end),
            ),
            _ => false,
        }
    }

    /// Day falls between the single committed end and the highlighted date.
    pub fn is_pseudo_highlighted(&self, date: &A::Date) -> bool {
        let Some(highlighted) = self.highlighted else {
            return false;
        };
        let anchor = match (&self.value.start, &self.value.end) {
            (Some(start), None) => start,
            (None, Some(end)) => end,
            _ => return false,
        };
        let (lo, hi) = if self.adapter().is_after(highlighted, anchor) {
            (anchor, highlighted)
        } else {
            (highlighted, anchor)
        };
        self.helpers
            .is_day_in_range(&self.clamp(date), &self.clamp(lo), &self.clamp(hi))
    }

    /// A half-open range is being previewed towards a different day.
    pub fn has_range_highlighted(&self) -> bool {
        let Some(highlighted) = self.highlighted else {
            return false;
        };
        match (&self.value.start, &self.value.end) {
            (Some(start), None) => !self.adapter().is_same_day(start, highlighted),
            (None, Some(end)) => !self.adapter().is_same_day(end, highlighted),
            _ => false,
        }
    }

    /// The preview extends to the right of the committed end.
    pub fn has_range_on_right(&self) -> bool {
        if !self.has_range_highlighted() {
            return false;
        }
        let Some(highlighted) = self.highlighted else {
            return false;
        };
        let after = |d: &Option<A::Date>| {
            d.as_ref()
                .map(|d| self.adapter().is_after(highlighted, d))
                .unwrap_or(false)
        };
        after(&self.value.start) || after(&self.value.end)
    }

    /// Padding cell outside the displayed month that still belongs to the
    /// visual range.
    ///
    /// Days after the 15th look forward to the next month's first day,
    /// earlier days look back to the previous month's last day.
    pub fn is_outside_month_within_range(&self, date: &A::Date) -> bool {
        let Some((lo, hi)) = self.ordered_dates() else {
            return false;
        };
        let adapter = self.adapter();
        if adapter.is_same_day(&lo, &hi) {
            return false;
        }

        let date = self.clamp(date);
        if adapter.day_of_month(&date) > 15 {
            let end_of_month = adapter.end_of_month(&date);
            let first_of_next = self.clamp(&adapter.add_days(&end_of_month, 1));
            self.helpers.is_on_or_before_day(&lo, &end_of_month)
                && self.helpers.is_on_or_after_day(&hi, &first_of_next)
        } else {
            let start_of_month = adapter.start_of_month(&date);
            let last_of_previous = self.clamp(&self.helpers.sub_days(&start_of_month, 1));
            self.helpers.is_on_or_after_day(&hi, &start_of_month)
                && self.helpers.is_on_or_before_day(&lo, &last_of_previous)
        }
    }
}
