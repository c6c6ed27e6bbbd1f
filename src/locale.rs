//! User-facing strings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatepickerLocale {
    pub choose_label: String,
    pub date_available_label: String,
    pub date_not_available_label: String,
    pub selected_label: String,
    pub selected_start_date_label: String,
    pub selected_end_date_label: String,
}

impl Default for DatepickerLocale {
    fn default() -> Self {
        Self {
            choose_label: "Choose".to_string(),
            date_available_label: "It's available.".to_string(),
            date_not_available_label: "Not available.".to_string(),
            selected_label: "Selected.".to_string(),
            selected_start_date_label: "Selected start date.".to_string(),
            selected_end_date_label: "Selected end date.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DatatableLocale {
    pub numerical_filter_range: String,
    pub numerical_filter_single_value: String,
}

impl Default for DatatableLocale {
    fn default() -> Self {
        Self {
            numerical_filter_range: "Range".to_string(),
            numerical_filter_single_value: "Single value".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppNavBarLocale {
    pub main_navigation_label: String,
    pub secondary_navigation_label: String,
}

impl Default for AppNavBarLocale {
    fn default() -> Self {
        Self {
            main_navigation_label: "Main navigation".to_string(),
            secondary_navigation_label: "Secondary navigation".to_string(),
        }
    }
}

/// All strings, English defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    pub datepicker: DatepickerLocale,
    pub datatable: DatatableLocale,
    pub app_nav_bar: AppNavBarLocale,
}
