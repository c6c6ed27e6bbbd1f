//! Calendar day cell
//!
//! A day cell owns only hover and focus-visible state. Selection is
//! computed here but committed by the owner of the date value, which
//! receives [`DayOutput::Select`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wk_dates::{
    DateAdapter, DateHelpers, DateValue, FormatKey, InputRole, RangePreview, RangeValue,
    SelectionMode,
};

use super::{to_props, Element};
use crate::locale::DatepickerLocale;
use crate::overrides::{Component, Overrides};
use crate::style::Props;
use crate::theme::Theme;

pub const DAY: &str = "Day";
pub const DAY_LABEL: &str = "DayLabel";

/// Cell density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Default,
    High,
}

/// Day defaults applied when props are built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayConfig {
    pub disabled: bool,
    pub highlighted: bool,
    pub range: bool,
    pub peek_next_month: bool,
    pub has_locked_behavior: bool,
    pub density: Density,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            highlighted: false,
            range: false,
            peek_next_month: true,
            has_locked_behavior: false,
            density: Density::Default,
        }
    }
}

/// Inputs to a day cell
#[derive(Debug, Clone)]
pub struct DayProps<T> {
    pub date: T,
    /// Displayed month (1-based); defaults to the date's own month.
    pub month: Option<u32>,
    pub value: DateValue<T>,
    pub range: bool,
    pub highlighted: bool,
    pub highlighted_date: Option<T>,
    pub disabled: bool,
    pub peek_next_month: bool,
    pub has_locked_behavior: bool,
    pub selected_input: Option<InputRole>,
    pub density: Density,
    pub date_label: Option<String>,
    pub focused_calendar: bool,
    pub overrides: Overrides,
}

impl<T> DayProps<T> {
    pub fn new(date: T, value: DateValue<T>, config: &DayConfig) -> Self {
        Self {
            date,
            month: None,
            value,
            range: config.range,
            highlighted: config.highlighted,
            highlighted_date: None,
            disabled: config.disabled,
            peek_next_month: config.peek_next_month,
            has_locked_behavior: config.has_locked_behavior,
            selected_input: None,
            density: config.density,
            date_label: None,
            focused_calendar: false,
            overrides: Overrides::new(),
        }
    }
}

/// Local interaction state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayState {
    pub is_hovered: bool,
    pub is_focus_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEvent {
    Click,
    KeyDown { key: String },
    Focus { focus_visible: bool },
    Blur,
    MouseOver,
    MouseLeave,
}

/// Notifications for the cell's owner
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutput<T> {
    Select { value: DateValue<T> },
    Click { date: T },
    Focus { date: T },
    Blur { date: T },
    MouseOver { date: T },
    MouseLeave { date: T },
}

/// Style props handed to the `Day` and `DayLabel` elements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStyleProps<T> {
    #[serde(rename = "$date")]
    pub date: T,
    #[serde(rename = "$density")]
    pub density: Density,
    #[serde(rename = "$disabled")]
    pub disabled: bool,
    #[serde(rename = "$endDate")]
    pub end_date: bool,
    #[serde(rename = "$hasDateLabel")]
    pub has_date_label: bool,
    #[serde(rename = "$hasRangeHighlighted")]
    pub has_range_highlighted: bool,
    #[serde(rename = "$hasRangeOnRight")]
    pub has_range_on_right: bool,
    #[serde(rename = "$hasRangeSelected")]
    pub has_range_selected: bool,
    #[serde(rename = "$highlightedDate")]
    pub highlighted_date: Option<T>,
    #[serde(rename = "$isHighlighted")]
    pub is_highlighted: bool,
    #[serde(rename = "$isHovered")]
    pub is_hovered: bool,
    #[serde(rename = "$isFocusVisible")]
    pub is_focus_visible: bool,
    #[serde(rename = "$startOfMonth")]
    pub start_of_month: bool,
    #[serde(rename = "$endOfMonth")]
    pub end_of_month: bool,
    #[serde(rename = "$month")]
    pub month: u32,
    #[serde(rename = "$outsideMonth")]
    pub outside_month: bool,
    #[serde(rename = "$outsideMonthWithinRange")]
    pub outside_month_within_range: bool,
    #[serde(rename = "$peekNextMonth")]
    pub peek_next_month: bool,
    #[serde(rename = "$pseudoHighlighted")]
    pub pseudo_highlighted: bool,
    #[serde(rename = "$pseudoSelected")]
    pub pseudo_selected: bool,
    #[serde(rename = "$range")]
    pub range: bool,
    #[serde(rename = "$selected")]
    pub selected: bool,
    #[serde(rename = "$startDate")]
    pub start_date: bool,
    #[serde(rename = "$hasLockedBehavior")]
    pub has_locked_behavior: bool,
    #[serde(rename = "$selectedInput")]
    pub selected_input: Option<InputRole>,
    #[serde(rename = "$value")]
    pub value: DateValue<T>,
}

/// What the host renders for one day
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub day: Element,
    pub label: Option<Element>,
    /// Day-of-month text; absent for hidden padding cells.
    pub day_number: Option<u32>,
    pub interactive: bool,
}

/// Day cell logic over a date adapter.
#[derive(Debug, Clone, Default)]
pub struct Day<A> {
    helpers: DateHelpers<A>,
}

impl<A> Day<A>
where
    A: DateAdapter,
    A::Date: Serialize,
{
    pub fn new(adapter: A) -> Self {
        Self {
            helpers: DateHelpers::new(adapter),
        }
    }

    fn adapter(&self) -> &A {
        self.helpers.adapter()
    }

    pub fn month(&self, props: &DayProps<A::Date>) -> u32 {
        props
            .month
            .unwrap_or_else(|| self.adapter().month(&props.date))
    }

    pub fn is_outside_month(&self, props: &DayProps<A::Date>) -> bool {
        self.month(props) != self.adapter().month(&props.date)
    }

    pub fn is_selected(&self, props: &DayProps<A::Date>) -> bool {
        let date = &props.date;
        match &props.value {
            DateValue::Range(r) => {
                self.helpers.is_same_day_opt(date, r.start.as_ref())
                    || self.helpers.is_same_day_opt(date, r.end.as_ref())
            }
            DateValue::Single(v) => self.helpers.is_same_day_opt(date, v.as_ref()),
        }
    }

    /// Value the owner should commit when `date` is picked.
    ///
    /// Start-after-end situations in locked mode are left for the owner to
    /// validate.
    pub fn next_value(&self, props: &DayProps<A::Date>, date: A::Date) -> DateValue<A::Date> {
        match &props.value {
            DateValue::Range(current) if props.range => {
                let next = if props.has_locked_behavior {
                    match props.selected_input {
                        Some(role) => current.select(self.adapter(), date, SelectionMode::Locked(role)),
                        None => RangeValue::empty(),
                    }
                } else {
                    current.select(self.adapter(), date, SelectionMode::Unlocked)
                };
                DateValue::Range(next)
            }
            _ => DateValue::Single(Some(date)),
        }
    }

    /// Apply an event to the local state.
    pub fn handle(
        &self,
        props: &DayProps<A::Date>,
        state: DayState,
        event: &DayEvent,
    ) -> (DayState, Vec<DayOutput<A::Date>>) {
        let date = props.date.clone();
        let mut next = state;
        let mut outputs = Vec::new();

        match event {
            DayEvent::Click => {
                if !props.disabled {
                    outputs.push(DayOutput::Click { date: date.clone() });
                    outputs.push(DayOutput::Select {
                        value: self.next_value(props, date),
                    });
                }
            }
            DayEvent::KeyDown { key } => {
                if key == "Enter" && props.highlighted && !props.disabled {
                    outputs.push(DayOutput::Select {
                        value: self.next_value(props, date),
                    });
                }
            }
            DayEvent::Focus { focus_visible } => {
                if *focus_visible {
                    next.is_focus_visible = true;
                }
                outputs.push(DayOutput::Focus { date });
            }
            DayEvent::Blur => {
                next.is_focus_visible = false;
                outputs.push(DayOutput::Blur { date });
            }
            DayEvent::MouseOver => {
                next.is_hovered = true;
                outputs.push(DayOutput::MouseOver { date });
            }
            DayEvent::MouseLeave => {
                next.is_hovered = false;
                outputs.push(DayOutput::MouseLeave { date });
            }
        }

        (next, outputs)
    }

    pub fn style_props(
        &self,
        props: &DayProps<A::Date>,
        state: &DayState,
    ) -> DayStyleProps<A::Date> {
        let date = &props.date;
        let empty = RangeValue::empty();
        let range_value = props.value.as_range();
        let preview = RangePreview::new(
            &self.helpers,
            range_value.unwrap_or(&empty),
            props.highlighted_date.as_ref(),
        );
        let is_range = range_value.is_some() && props.range;
        let complete = range_value.map(RangeValue::is_complete).unwrap_or(false);

        let selected = self.is_selected(props);
        let has_range_highlighted = is_range && preview.has_range_highlighted();
        let outside_month = !props.peek_next_month && self.is_outside_month(props);
        let outside_month_within_range = is_range
            && outside_month
            && !props.peek_next_month
            && preview.is_outside_month_within_range(date);
        let same_as = |end: Option<&A::Date>| self.helpers.is_same_day_opt(date, end);

        DayStyleProps {
            date: date.clone(),
            density: props.density,
            disabled: props.disabled,
            end_date: complete
                && is_range
                && selected
                && same_as(range_value.and_then(|r| r.end.as_ref())),
            has_date_label: props.date_label.is_some(),
            has_range_highlighted,
            has_range_on_right: has_range_highlighted && preview.has_range_on_right(),
            has_range_selected: complete,
            highlighted_date: props.highlighted_date.clone(),
            is_highlighted: props.highlighted,
            is_hovered: state.is_hovered,
            is_focus_visible: state.is_focus_visible,
            start_of_month: self.helpers.is_start_of_month(date),
            end_of_month: self.helpers.is_end_of_month(date),
            month: self.month(props),
            outside_month,
            outside_month_within_range,
            peek_next_month: props.peek_next_month,
            pseudo_highlighted: props.range
                && !props.highlighted
                && !selected
                && preview.is_pseudo_highlighted(date),
            pseudo_selected: props.range && !selected && preview.is_pseudo_selected(date),
            range: props.range,
            selected,
            start_date: complete
                && is_range
                && selected
                && same_as(range_value.and_then(|r| r.start.as_ref())),
            has_locked_behavior: props.has_locked_behavior,
            selected_input: props.selected_input,
            value: props.value.clone(),
        }
    }

    pub fn aria_label(
        &self,
        props: &DayProps<A::Date>,
        style: &DayStyleProps<A::Date>,
        locale: &DatepickerLocale,
    ) -> String {
        let label = if style.selected {
            if style.range {
                if style.end_date {
                    &locale.selected_end_date_label
                } else {
                    &locale.selected_start_date_label
                }
            } else {
                &locale.selected_label
            }
        } else if style.disabled {
            &locale.date_not_available_label
        } else {
            &locale.choose_label
        };
        let available = if style.disabled {
            ""
        } else {
            locale.date_available_label.as_str()
        };
        format!(
            "{} {}. {}",
            label,
            self.adapter().format(&props.date, FormatKey::FullOrdinalWeek),
            available
        )
    }

    /// Roving tab stop: the highlighted day, or the selected day when
    /// nothing is highlighted.
    pub fn tab_index(&self, props: &DayProps<A::Date>) -> i32 {
        if self.should_hold_focus(props) {
            0
        } else {
            -1
        }
    }

    /// Whether the host should move focus to this cell after mount/update.
    pub fn should_focus(&self, props: &DayProps<A::Date>) -> bool {
        props.focused_calendar && self.should_hold_focus(props)
    }

    fn should_hold_focus(&self, props: &DayProps<A::Date>) -> bool {
        props.highlighted || (props.highlighted_date.is_none() && self.is_selected(props))
    }

    pub fn render(
        &self,
        props: &DayProps<A::Date>,
        state: &DayState,
        theme: &Theme,
        locale: &DatepickerLocale,
    ) -> DayView {
        let style = self.style_props(props, state);
        let shared = to_props(&style);
        let hidden = !props.peek_next_month && style.outside_month;

        let mut base = Props::new();
        base.insert("role".into(), "gridcell".into());
        if !hidden {
            base.insert("aria-label".into(), self.aria_label(props, &style, locale).into());
            base.insert("aria-roledescription".into(), "button".into());
            base.insert("tabIndex".into(), self.tab_index(props).into());
        }
        base.extend(shared.clone());

        let day = Element::build(
            &props.overrides,
            DAY,
            &Component::styled("StyledDay"),
            theme,
            base,
        );

        if hidden {
            return DayView {
                day,
                label: None,
                day_number: None,
                interactive: false,
            };
        }

        let label = props.date_label.as_ref().map(|text| {
            let mut label_props = shared;
            label_props.insert("children".into(), Value::String(text.clone()));
            Element::build(
                &props.overrides,
                DAY_LABEL,
                &Component::styled("StyledDayLabel"),
                theme,
                label_props,
            )
        });

        DayView {
            day,
            label,
            day_number: Some(self.adapter().day_of_month(&props.date)),
            interactive: true,
        }
    }
}
