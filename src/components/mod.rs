//! Widget view models
//!
//! Each widget is a set of pure functions:
//! - a transition `(state, event) -> (state, outputs)` for local
//!   interaction state (focus, hover)
//! - a projection `(props, state) -> view` the host renders
//!
//! Host lifecycle points (mount, update) are explicit calls such as
//! [`day::Day::should_focus`].

pub mod app_nav_bar;
pub mod block;
pub mod data_table;
pub mod day;
pub mod icon;
pub mod radio_group;
pub mod select;
pub mod tabs;
pub mod timepicker;

use serde::Serialize;
use serde_json::Value;

use crate::overrides::{resolve, Component, Overrides};
use crate::style::{Props, StyleContext};
use crate::theme::Theme;

/// A resolved sub-element: what to render and with which props.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub component: Component,
    pub props: Props,
}

impl Element {
    /// Resolve the override registered under `key` against `default`.
    ///
    /// `base` props come first and override props are spread on top, so a
    /// consumer can replace any attribute.
    pub fn build(
        overrides: &Overrides,
        key: &str,
        default: &Component,
        theme: &Theme,
        base: Props,
    ) -> Self {
        let (component, extra) = {
            let ctx = StyleContext::new(theme, &base);
            resolve(overrides.get(key), default, &ctx)
        };
        let mut props = base;
        props.extend(extra);
        Self { component, props }
    }

    pub fn prop(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }
}

/// Serialize a `$`-prefixed style prop struct into a props map.
pub(crate) fn to_props<S: Serialize>(style_props: &S) -> Props {
    match serde_json::to_value(style_props) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::warn!("style props did not serialize to an object");
            Props::new()
        }
    }
}
