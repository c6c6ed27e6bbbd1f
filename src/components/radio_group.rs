//! Radio group
//!
//! The group owns focus tracking across its radios and projects shared
//! props (name, checked state, roving tab index) onto each child.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Element;
use crate::overrides::{Component, Overrides};
use crate::style::Props;
use crate::theme::Theme;

pub const RADIO_GROUP_ROOT: &str = "RadioGroupRoot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPlacement {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

/// Group-level props with their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadioGroupConfig {
    pub name: String,
    pub value: String,
    pub disabled: bool,
    pub auto_focus: bool,
    pub label_placement: LabelPlacement,
    pub align: Align,
    pub error: bool,
    pub required: bool,
}

/// Accessibility attributes forwarded to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroupAria {
    pub id: Option<String>,
    pub label: Option<String>,
    pub labelledby: Option<String>,
    pub describedby: Option<String>,
    pub errormessage: Option<String>,
}

/// One child radio as declared by the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Focus tracking; `focused_index` is `None` when no radio has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RadioGroupState {
    pub is_focus_visible: bool,
    pub focused_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioGroupEvent {
    Focus { index: usize, focus_visible: bool },
    Blur { index: usize },
    Change { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioGroupOutput {
    Focus { index: usize },
    Blur { index: usize },
    Change { value: String },
}

impl RadioGroupState {
    pub fn handle(self, event: &RadioGroupEvent) -> (Self, Vec<RadioGroupOutput>) {
        let mut next = self;
        let output = match event {
            RadioGroupEvent::Focus {
                index,
                focus_visible,
            } => {
                if *focus_visible {
                    next.is_focus_visible = true;
                }
                next.focused_index = Some(*index);
                RadioGroupOutput::Focus { index: *index }
            }
            RadioGroupEvent::Blur { index } => {
                next.is_focus_visible = false;
                next.focused_index = None;
                RadioGroupOutput::Blur { index: *index }
            }
            RadioGroupEvent::Change { value } => RadioGroupOutput::Change {
                value: value.clone(),
            },
        };
        (next, vec![output])
    }
}

/// Props projected onto one radio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioProps {
    pub value: String,
    pub name: String,
    pub checked: bool,
    pub disabled: bool,
    pub error: bool,
    pub auto_focus: bool,
    pub is_focused: bool,
    pub is_focus_visible: bool,
    /// `"0"` for the roving tab stop, `"-1"` otherwise.
    pub tab_index: String,
    pub align: Align,
    pub label_placement: LabelPlacement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroupView {
    pub root: Element,
    pub radios: Vec<RadioProps>,
}

pub fn radio_props(
    config: &RadioGroupConfig,
    state: &RadioGroupState,
    options: &[RadioOption],
) -> Vec<RadioProps> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let checked = config.value == option.value;
            let tab_stop = checked || (index == 0 && config.value.is_empty());
            RadioProps {
                value: option.value.clone(),
                name: config.name.clone(),
                checked,
                disabled: config.disabled || option.disabled,
                error: config.error,
                auto_focus: config.auto_focus,
                is_focused: state.focused_index == Some(index),
                is_focus_visible: state.is_focus_visible,
                tab_index: if tab_stop { "0" } else { "-1" }.to_string(),
                align: config.align,
                label_placement: config.label_placement,
            }
        })
        .collect()
}

pub fn render(
    config: &RadioGroupConfig,
    aria: &RadioGroupAria,
    state: &RadioGroupState,
    options: &[RadioOption],
    overrides: &Overrides,
    theme: &Theme,
) -> RadioGroupView {
    let mut base = Props::new();
    base.insert("role".into(), "radiogroup".into());
    let optional = [
        ("id", &aria.id),
        ("aria-label", &aria.label),
        ("aria-labelledby", &aria.labelledby),
        ("aria-describedby", &aria.describedby),
        ("aria-errormessage", &aria.errormessage),
    ];
    for (key, value) in optional {
        if let Some(value) = value {
            base.insert(key.into(), Value::String(value.clone()));
        }
    }
    if config.error {
        base.insert("aria-invalid".into(), Value::Bool(true));
    }
    base.insert("$align".into(), serde_json::json!(config.align));
    base.insert("$disabled".into(), config.disabled.into());
    base.insert("$error".into(), config.error.into());
    base.insert("$required".into(), config.required.into());

    RadioGroupView {
        root: Element::build(
            overrides,
            RADIO_GROUP_ROOT,
            &Component::styled("StyledRadioGroupRoot"),
            theme,
            base,
        ),
        radios: radio_props(config, state, options),
    }
}
