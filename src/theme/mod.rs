//! Theme consumed by style resolution
//!
//! The theme is read-only input: sizing scale, colour palette, typography
//! and breakpoints. Widgets look values up by key and fall back to the raw
//! value when the key is not part of the theme.

mod light;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::style::StyleObject;

/// Text direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// Responsive breakpoints in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            small: 320,
            medium: 600,
            large: 1136,
        }
    }
}

impl Breakpoints {
    /// Ascending list, used to expand responsive values.
    pub fn ascending(&self) -> [u32; 3] {
        [self.small, self.medium, self.large]
    }
}

/// A typography token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub font_family: String,
    pub font_size: String,
    pub font_weight: String,
    pub line_height: String,
}

impl Font {
    pub fn to_style(&self) -> StyleObject {
        let mut style = StyleObject::new();
        style.insert("fontFamily".into(), self.font_family.clone().into());
        style.insert("fontSize".into(), self.font_size.clone().into());
        style.insert("fontWeight".into(), self.font_weight.clone().into());
        style.insert("lineHeight".into(), self.line_height.clone().into());
        style
    }
}

/// Theme tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub name: String,
    pub direction: Direction,
    pub breakpoints: Breakpoints,
    pub sizing: BTreeMap<String, String>,
    pub colors: BTreeMap<String, String>,
    pub typography: BTreeMap<String, Font>,
}

impl Default for Theme {
    fn default() -> Self {
        light::light_theme()
    }
}

impl Theme {
    pub fn light() -> Self {
        light::light_theme()
    }

    pub fn sizing(&self, key: &str) -> Option<&str> {
        self.sizing.get(key).map(String::as_str)
    }

    pub fn color(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    pub fn font(&self, key: &str) -> Option<&Font> {
        self.typography.get(key)
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == Direction::Rtl
    }

    /// `@media` headers for each breakpoint, smallest first.
    pub fn media_queries(&self) -> Vec<String> {
        self.breakpoints
            .ascending()
            .iter()
            .map(|px| crate::style::min_width_query(*px))
            .collect()
    }
}
