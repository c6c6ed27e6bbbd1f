//! Date Range Selection Tests
//!
//! Drives the range state machine through a day cell the way a calendar
//! would: click events in, committed values out.

mod common;

use chrono::NaiveDateTime;
use common::{day, init_tracing};
use widget_kit::components::day::{Day, DayConfig, DayEvent, DayOutput, DayProps, DayState};
use widget_kit::locale::DatepickerLocale;
use widget_kit::{ChronoAdapter, DateValue, InputRole, RangeValue, SelectionMode, Theme};
use wk_dates::RangePhase;

fn cell() -> Day<ChronoAdapter> {
    Day::new(ChronoAdapter::new())
}

fn range_props(date: NaiveDateTime, value: RangeValue<NaiveDateTime>) -> DayProps<NaiveDateTime> {
    let config = DayConfig {
        range: true,
        ..DayConfig::default()
    };
    DayProps::new(date, DateValue::Range(value), &config)
}

/// Click `date` against `value` and return the committed range.
fn click(value: RangeValue<NaiveDateTime>, date: NaiveDateTime) -> RangeValue<NaiveDateTime> {
    let props = range_props(date, value);
    let (_, outputs) = cell().handle(&props, DayState::default(), &DayEvent::Click);
    outputs
        .into_iter()
        .find_map(|o| match o {
            DayOutput::Select {
                value: DateValue::Range(r),
            } => Some(r),
            _ => None,
        })
        .expect("click should select")
}

// =============================================================================
// Unlocked selection
// =============================================================================

#[test]
fn test_two_clicks_build_a_range() {
    init_tracing();

    let first = click(RangeValue::empty(), day(2024, 3, 10));
    assert_eq!(first.phase(), RangePhase::StartOnly);

    let second = click(first, day(2024, 3, 15));
    assert_eq!(second, RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15)));
}

#[test]
fn test_earlier_second_click_reorders() {
    let first = click(RangeValue::empty(), day(2024, 3, 15));
    let second = click(first, day(2024, 3, 10));

    assert_eq!(second, RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15)));
}

#[test]
fn test_click_after_complete_restarts() {
    let complete = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let next = click(complete, day(2024, 4, 1));

    assert_eq!(next, RangeValue::start_only(day(2024, 4, 1)));
}

#[test]
fn test_seeded_end_is_completed_in_order() {
    let seeded = RangeValue::end_only(day(2024, 3, 15));

    let before = click(seeded.clone(), day(2024, 3, 1));
    assert_eq!(before, RangeValue::complete(day(2024, 3, 1), day(2024, 3, 15)));

    let after = click(seeded, day(2024, 3, 20));
    assert_eq!(after, RangeValue::complete(day(2024, 3, 15), day(2024, 3, 20)));
}

#[test]
fn test_same_day_twice_is_a_one_day_range() {
    let first = click(RangeValue::empty(), day(2024, 3, 10));
    let second = click(first, day(2024, 3, 10));

    assert!(second.is_complete());
    assert_eq!(second.start, second.end);
}

// =============================================================================
// Locked selection
// =============================================================================

fn locked_props(
    date: NaiveDateTime,
    value: RangeValue<NaiveDateTime>,
    role: Option<InputRole>,
) -> DayProps<NaiveDateTime> {
    let mut props = range_props(date, value);
    props.has_locked_behavior = true;
    props.selected_input = role;
    props
}

#[test]
fn test_locked_end_input_only_writes_end() {
    let value = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let props = locked_props(day(2024, 3, 20), value, Some(InputRole::EndDate));

    let next = cell().next_value(&props, day(2024, 3, 20));
    assert_eq!(
        next,
        DateValue::Range(RangeValue::complete(day(2024, 3, 10), day(2024, 3, 20)))
    );
}

#[test]
fn test_locked_start_may_pass_end() {
    let value = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let props = locked_props(day(2024, 3, 20), value, Some(InputRole::StartDate));

    let next = cell().next_value(&props, day(2024, 3, 20));
    assert_eq!(
        next,
        DateValue::Range(RangeValue::complete(day(2024, 3, 20), day(2024, 3, 15)))
    );
}

#[test]
fn test_locked_without_input_clears() {
    let value = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let props = locked_props(day(2024, 3, 12), value, None);

    assert_eq!(
        cell().next_value(&props, day(2024, 3, 12)),
        DateValue::Range(RangeValue::empty())
    );
}

#[test]
fn test_state_machine_matches_direct_select() {
    let adapter = ChronoAdapter::new();
    let start = RangeValue::start_only(day(2024, 3, 10));

    let direct = start.select(&adapter, day(2024, 3, 5), SelectionMode::Unlocked);
    assert_eq!(click(start, day(2024, 3, 5)), direct);
}

// =============================================================================
// Previews while hovering
// =============================================================================

#[test]
fn test_hover_preview_marks_days_between() {
    let value = RangeValue::start_only(day(2024, 3, 10));
    let mut props = range_props(day(2024, 3, 12), value);
    props.highlighted_date = Some(day(2024, 3, 14));

    let style = cell().style_props(&props, &DayState::default());
    assert!(style.pseudo_highlighted);
    assert!(style.has_range_highlighted);
    assert!(!style.selected);
}

#[test]
fn test_committed_range_marks_days_between() {
    let value = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let style = cell().style_props(&range_props(day(2024, 3, 12), value), &DayState::default());

    assert!(style.pseudo_selected);
    assert!(style.has_range_selected);
    assert!(!style.start_date && !style.end_date);
}

#[test]
fn test_render_labels_range_ends() {
    let value = RangeValue::complete(day(2024, 3, 10), day(2024, 3, 15));
    let locale = DatepickerLocale::default();
    let theme = Theme::light();

    let start = cell().render(
        &range_props(day(2024, 3, 10), value.clone()),
        &DayState::default(),
        &theme,
        &locale,
    );
    let end = cell().render(
        &range_props(day(2024, 3, 15), value),
        &DayState::default(),
        &theme,
        &locale,
    );

    let label = |view: &widget_kit::components::day::DayView| {
        view.day
            .prop("aria-label")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    assert!(label(&start).starts_with(&locale.selected_start_date_label));
    assert!(label(&end).starts_with(&locale.selected_end_date_label));
    assert_eq!(start.day.prop("$startDate"), Some(&serde_json::json!(true)));
    assert_eq!(end.day.prop("$endDate"), Some(&serde_json::json!(true)));
}

#[test]
fn test_disabled_day_ignores_click() {
    let mut props = range_props(day(2024, 3, 10), RangeValue::empty());
    props.disabled = true;

    let (_, outputs) = cell().handle(&props, DayState::default(), &DayEvent::Click);
    assert!(outputs.is_empty());
}
