//! Built-in defaults (layer 1)
//!
//! Every component's default props plus the light theme and English
//! strings.

use serde::{Deserialize, Serialize};

use crate::components::day::DayConfig;
use crate::components::radio_group::RadioGroupConfig;
use crate::components::select::SelectConfig;
use crate::components::tabs::TabsConfig;
use crate::components::timepicker::TimePickerConfig;
use crate::locale::Locale;
use crate::theme::Theme;

/// Built-in default configuration values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Theme tokens (default: light)
    pub theme: Theme,

    /// User-facing strings (default: English)
    pub locale: Locale,

    pub select: SelectConfig,

    /// Time picker (default: 12-hour, 15 minute steps)
    pub timepicker: TimePickerConfig,

    /// Datepicker day cell
    pub day: DayConfig,

    pub tabs: TabsConfig,

    pub radio_group: RadioGroupConfig,
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "theme": self.theme,
            "locale": self.locale,
            "select": self.select,
            "timepicker": self.timepicker,
            "day": self.day,
            "tabs": self.tabs,
            "radio_group": self.radio_group,
            "overrides": {}
        })
    }
}
