//! Widget Kit - presentational widget logic without a renderer
//!
//! This crate holds the host-agnostic half of a themeable widget library:
//! consumer override resolution, style and props merging, layered
//! configuration, and the interaction state of calendar, tabs, radio group,
//! navigation, select, time picker and data table widgets. A host renders
//! the views these functions return.

pub mod components;
pub mod config;
pub mod locale;
pub mod overrides;
pub mod style;
pub mod theme;

pub use components::Element;
pub use config::{BuiltinDefaults, ConfigError, EffectiveConfig};
pub use locale::Locale;
pub use overrides::{
    merge_overrides, parse_overrides, resolve, Component, ComponentRegistry, Configuration,
    Override, OverrideError, OverridePatch, Overrides,
};
pub use style::{Props, StyleContext, StyleObject};
pub use theme::Theme;

pub use wk_dates::{ChronoAdapter, DateAdapter, DateValue, InputRole, RangeValue, SelectionMode};
pub use wk_merge::{deep_merge, merge_all, Merger};
