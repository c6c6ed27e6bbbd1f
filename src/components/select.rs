//! Select defaults and option filtering
//!
//! Options are untyped objects; `label_key` and `value_key` name the fields
//! used for display and identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// A select option: any object carrying the label and value keys.
pub type SelectOption = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Mini,
    Compact,
    #[default]
    Default,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    #[default]
    Select,
    Search,
}

/// Select props with their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectConfig {
    #[serde(rename = "aria-label")]
    pub aria_label: Option<String>,
    #[serde(rename = "aria-describedby")]
    pub aria_describedby: Option<String>,
    #[serde(rename = "aria-errormessage")]
    pub aria_errormessage: Option<String>,
    #[serde(rename = "aria-labelledby")]
    pub aria_labelledby: Option<String>,
    pub auto_focus: bool,
    pub backspace_removes: bool,
    pub clearable: bool,
    pub close_on_select: bool,
    pub creatable: bool,
    pub delete_removes: bool,
    pub disabled: bool,
    pub error: bool,
    pub positive: bool,
    pub escape_clears_value: bool,
    pub filter_out_selected: bool,
    pub ignore_case: bool,
    pub is_loading: bool,
    pub label_key: String,
    pub max_dropdown_height: String,
    pub multi: bool,
    pub on_blur_resets_input: bool,
    pub on_close_resets_input: bool,
    pub on_select_resets_input: bool,
    pub open_on_click: bool,
    pub start_open: bool,
    pub options: Vec<SelectOption>,
    pub required: bool,
    pub searchable: bool,
    pub size: Size,
    #[serde(rename = "type")]
    pub type_: SelectType,
    pub value: Vec<SelectOption>,
    pub value_key: String,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            aria_label: None,
            aria_describedby: None,
            aria_errormessage: None,
            aria_labelledby: None,
            auto_focus: false,
            backspace_removes: true,
            clearable: true,
            close_on_select: true,
            creatable: false,
            delete_removes: true,
            disabled: false,
            error: false,
            positive: false,
            escape_clears_value: true,
            filter_out_selected: true,
            ignore_case: true,
            is_loading: false,
            label_key: "label".to_string(),
            max_dropdown_height: "900px".to_string(),
            multi: false,
            on_blur_resets_input: true,
            on_close_resets_input: true,
            on_select_resets_input: true,
            open_on_click: true,
            start_open: false,
            options: Vec::new(),
            required: false,
            searchable: true,
            size: Size::Default,
            type_: SelectType::Select,
            value: Vec::new(),
            value_key: "id".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPos {
    #[default]
    Any,
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchProp {
    #[default]
    Any,
    Label,
    Value,
}

/// Parameters for [`default_filter_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub filter_out_selected: bool,
    pub ignore_case: bool,
    pub label_key: String,
    pub value_key: String,
    pub match_pos: MatchPos,
    pub match_prop: MatchProp,
    pub trim_filter: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            filter_out_selected: true,
            ignore_case: true,
            label_key: "label".to_string(),
            value_key: "value".to_string(),
            match_pos: MatchPos::Any,
            match_prop: MatchProp::Any,
            trim_filter: true,
        }
    }
}

impl From<&SelectConfig> for FilterParams {
    fn from(config: &SelectConfig) -> Self {
        Self {
            filter_out_selected: config.filter_out_selected,
            ignore_case: config.ignore_case,
            label_key: config.label_key.clone(),
            value_key: config.value_key.clone(),
            ..Self::default()
        }
    }
}

/// String form of an option field; missing fields read as empty.
fn field_text(option: &SelectOption, key: &str) -> String {
    match option.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Options matching `filter_value`, minus already-selected ones.
///
/// The filter is a literal substring (or prefix, with [`MatchPos::Start`])
/// of the label, the value, or either.
pub fn default_filter_options(
    options: &[SelectOption],
    filter_value: &str,
    exclude: &[SelectOption],
    params: &FilterParams,
) -> Vec<SelectOption> {
    let excluded: HashSet<String> = if params.filter_out_selected {
        exclude
            .iter()
            .map(|o| field_text(o, &params.value_key))
            .collect()
    } else {
        HashSet::new()
    };

    let needle = if params.trim_filter {
        filter_value.trim()
    } else {
        filter_value
    };
    let needle = if params.ignore_case {
        needle.to_lowercase()
    } else {
        needle.to_string()
    };

    let matches = |text: String| {
        let text = if params.ignore_case {
            text.to_lowercase()
        } else {
            text
        };
        match params.match_pos {
            MatchPos::Any => text.contains(&needle),
            MatchPos::Start => text.starts_with(&needle),
        }
    };

    options
        .iter()
        .filter(|option| {
            let value = field_text(option, &params.value_key);
            if excluded.contains(&value) {
                return false;
            }
            if needle.is_empty() {
                return true;
            }
            let label = field_text(option, &params.label_key);
            match params.match_prop {
                MatchProp::Value => matches(value),
                MatchProp::Label => matches(label),
                MatchProp::Any => matches(value) || matches(label),
            }
        })
        .cloned()
        .collect()
}
