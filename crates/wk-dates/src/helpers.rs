//! Derived date operations built on top of an adapter.

use crate::adapter::DateAdapter;

/// Adapter plus the day-level comparisons the calendar needs.
#[derive(Debug, Clone, Default)]
pub struct DateHelpers<A> {
    adapter: A,
}

impl<A: DateAdapter> DateHelpers<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn sub_days(&self, date: &A::Date, days: i64) -> A::Date {
        self.adapter.add_days(date, -days)
    }

    /// Midnight of the same day (milliseconds are left alone).
    pub fn clamp_to_day_start(&self, date: &A::Date) -> A::Date {
        let a = &self.adapter;
        a.set_seconds(&a.set_minutes(&a.set_hours(date, 0), 0), 0)
    }

    pub fn is_on_or_before_day(&self, a: &A::Date, b: &A::Date) -> bool {
        self.adapter.is_same_day(a, b) || self.adapter.is_before(a, b)
    }

    pub fn is_on_or_after_day(&self, a: &A::Date, b: &A::Date) -> bool {
        self.adapter.is_same_day(a, b) || self.adapter.is_after(a, b)
    }

    /// Inclusive on both ends.
    pub fn is_day_in_range(&self, day: &A::Date, start: &A::Date, end: &A::Date) -> bool {
        !self.adapter.is_before(day, start) && !self.adapter.is_after(day, end)
    }

    pub fn is_start_of_month(&self, date: &A::Date) -> bool {
        self.adapter.day_of_month(date) == 1
    }

    pub fn is_end_of_month(&self, date: &A::Date) -> bool {
        self.adapter
            .is_same_day(date, &self.adapter.end_of_month(date))
    }

    /// Same-day comparison that treats a missing side as "not the same".
    pub fn is_same_day_opt(&self, a: &A::Date, b: Option<&A::Date>) -> bool {
        b.map(|b| self.adapter.is_same_day(a, b)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChronoAdapter;

    fn d(y: i32, m: u32, day: u32) -> chrono::NaiveDateTime {
        ChronoAdapter::ymd(y, m, day).unwrap()
    }

    #[test]
    fn test_clamp_to_day_start() {
        let h = DateHelpers::new(ChronoAdapter);
        let late = chrono::NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(17, 42, 9)
            .unwrap();
        assert_eq!(h.clamp_to_day_start(&late), d(2024, 3, 10));
    }

    #[test]
    fn test_day_in_range_is_inclusive() {
        let h = DateHelpers::new(ChronoAdapter);
        let (start, end) = (d(2024, 3, 5), d(2024, 3, 10));
        assert!(h.is_day_in_range(&d(2024, 3, 5), &start, &end));
        assert!(h.is_day_in_range(&d(2024, 3, 10), &start, &end));
        assert!(h.is_day_in_range(&d(2024, 3, 7), &start, &end));
        assert!(!h.is_day_in_range(&d(2024, 3, 11), &start, &end));
        assert!(!h.is_day_in_range(&d(2024, 3, 4), &start, &end));
    }

    #[test]
    fn test_on_or_before_and_after() {
        let h = DateHelpers::new(ChronoAdapter);
        assert!(h.is_on_or_before_day(&d(2024, 3, 5), &d(2024, 3, 5)));
        assert!(h.is_on_or_before_day(&d(2024, 3, 4), &d(2024, 3, 5)));
        assert!(!h.is_on_or_before_day(&d(2024, 3, 6), &d(2024, 3, 5)));
        assert!(h.is_on_or_after_day(&d(2024, 3, 6), &d(2024, 3, 5)));
    }

    #[test]
    fn test_month_edges() {
        let h = DateHelpers::new(ChronoAdapter);
        assert!(h.is_start_of_month(&d(2024, 4, 1)));
        assert!(h.is_end_of_month(&d(2024, 4, 30)));
        assert!(!h.is_end_of_month(&d(2024, 4, 29)));
    }
}
