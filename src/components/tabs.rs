//! Tabs
//!
//! The tab list is stateless: the active key lives with the owner and a
//! tab selection only emits [`TabsOutput::Change`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Element;
use crate::overrides::{merge_overrides, Component, Overrides};
use crate::style::Props;
use crate::theme::Theme;

pub const ROOT: &str = "Root";
pub const TAB_BAR: &str = "TabBar";
pub const TAB_CONTENT: &str = "TabContent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsConfig {
    pub disabled: bool,
    pub orientation: Orientation,
    pub render_all: bool,
}

/// A tab as declared by the consumer.
#[derive(Debug, Clone, Default)]
pub struct TabSpec {
    /// Explicit key; the tab's index is used when absent.
    pub key: Option<String>,
    pub title: String,
    pub disabled: bool,
    pub overrides: Overrides,
}

impl TabSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Effective key of the tab at `index`.
pub fn tab_key(tab: &TabSpec, index: usize) -> String {
    tab.key.clone().unwrap_or_else(|| index.to_string())
}

/// Props handed to one tab.
#[derive(Debug, Clone)]
pub struct TabView {
    pub key: String,
    /// Same as the key; panels point at it with `aria-labelledby`.
    pub id: String,
    pub title: String,
    pub active: bool,
    pub disabled: bool,
    pub orientation: Orientation,
    /// Group overrides merged with the tab's own.
    pub overrides: Overrides,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub key: String,
    pub element: Element,
    /// Whether the panel's children are rendered.
    pub show_content: bool,
}

#[derive(Debug, Clone)]
pub struct TabsView {
    pub root: Element,
    pub tab_bar: Element,
    pub tabs: Vec<TabView>,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabsOutput {
    Change { active_key: String },
}

/// Selecting a tab reports its key; the owner decides whether to activate.
pub fn select(key: &str) -> TabsOutput {
    tracing::debug!(active_key = key, "tab selected");
    TabsOutput::Change {
        active_key: key.to_string(),
    }
}

fn shared_props(config: &TabsConfig) -> Props {
    let mut props = Props::new();
    props.insert("$disabled".into(), config.disabled.into());
    props.insert("$orientation".into(), serde_json::json!(config.orientation));
    props
}

pub fn tabs(
    config: &TabsConfig,
    active_key: Option<&str>,
    specs: &[TabSpec],
    overrides: &Overrides,
) -> Vec<TabView> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let key = tab_key(spec, index);
            TabView {
                id: key.clone(),
                active: active_key == Some(key.as_str()),
                key,
                title: spec.title.clone(),
                disabled: config.disabled || spec.disabled,
                orientation: config.orientation,
                overrides: merge_overrides(overrides, &spec.overrides),
            }
        })
        .collect()
}

pub fn panels(
    config: &TabsConfig,
    active_key: Option<&str>,
    specs: &[TabSpec],
    overrides: &Overrides,
    theme: &Theme,
) -> Vec<PanelView> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let key = tab_key(spec, index);
            let active = active_key == Some(key.as_str());

            let mut base = shared_props(config);
            base.insert("role".into(), "tabpanel".into());
            base.insert("$active".into(), active.into());
            let mut element = Element::build(
                overrides,
                TAB_CONTENT,
                &Component::styled("StyledTabContent"),
                theme,
                base,
            );
            // The panel's label reference is not overridable.
            element
                .props
                .insert("aria-labelledby".into(), Value::String(key.clone()));

            PanelView {
                key,
                element,
                show_content: config.render_all || active,
            }
        })
        .collect()
}

pub fn render(
    config: &TabsConfig,
    active_key: Option<&str>,
    specs: &[TabSpec],
    overrides: &Overrides,
    theme: &Theme,
) -> TabsView {
    let mut root_base = shared_props(config);
    root_base.insert("data-baseweb".into(), "tabs".into());
    let mut bar_base = shared_props(config);
    bar_base.insert("role".into(), "tablist".into());

    TabsView {
        root: Element::build(overrides, ROOT, &Component::styled("StyledRoot"), theme, root_base),
        tab_bar: Element::build(
            overrides,
            TAB_BAR,
            &Component::styled("StyledTabBar"),
            theme,
            bar_base,
        ),
        tabs: tabs(config, active_key, specs, overrides),
        panels: panels(config, active_key, specs, overrides, theme),
    }
}
