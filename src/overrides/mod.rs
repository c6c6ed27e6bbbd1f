//! Consumer overrides for widget sub-elements
//!
//! Every widget renders a fixed set of named sub-elements (`Root`, `Day`,
//! `TabBar`, ...). A consumer can replace any of them or patch their props
//! and style:
//! - absent: render the default element with no extra props
//! - [`Override::Component`]: render the replacement instead
//! - [`Override::Patch`]: optional replacement plus props/style patches,
//!   each either a static object or a function of the [`StyleContext`]

mod merge;
mod registry;
mod resolve;

pub use merge::{merge_configuration, merge_override, merge_overrides};
pub use registry::{parse_overrides, ComponentRegistry};
pub use resolve::{resolve, resolve_named};

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::style::{Props, StyleContext};

/// Overrides keyed by sub-element name.
pub type Overrides = BTreeMap<String, Override>;

/// Host-agnostic render function for a replacement component.
pub type RenderFn = Arc<dyn Fn(&Props) -> Value + Send + Sync>;

/// Something the host can render: a built-in styled element or a
/// consumer-supplied replacement.
#[derive(Clone)]
pub struct Component {
    name: Arc<str>,
    render: Option<RenderFn>,
}

impl Component {
    /// A built-in element the host knows by name.
    pub fn styled(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            render: None,
        }
    }

    /// A replacement carrying its own render function.
    pub fn custom<F>(name: &str, render: F) -> Self
    where
        F: Fn(&Props) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Arc::from(name),
            render: Some(Arc::new(render)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_custom(&self) -> bool {
        self.render.is_some()
    }

    /// Run the replacement's render function, if it has one.
    pub fn render(&self, props: &Props) -> Option<Value> {
        self.render.as_ref().map(|f| f(props))
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && match (&self.render, &other.render) {
                (None, None) => true,
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("custom", &self.is_custom())
            .finish()
    }
}

/// Function form of a props or style patch.
pub type ConfigurationFn = Arc<dyn Fn(&StyleContext<'_>) -> Map<String, Value> + Send + Sync>;

/// A props or style patch.
#[derive(Clone)]
pub enum Configuration {
    Static(Map<String, Value>),
    Dynamic(ConfigurationFn),
}

impl Configuration {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> Map<String, Value> + Send + Sync + 'static,
    {
        Configuration::Dynamic(Arc::new(f))
    }

    /// Evaluate against the current theme and element props.
    pub fn evaluate(&self, ctx: &StyleContext<'_>) -> Map<String, Value> {
        match self {
            Configuration::Static(map) => map.clone(),
            Configuration::Dynamic(f) => f(ctx),
        }
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Configuration::Static(a), Configuration::Static(b)) => a == b,
            (Configuration::Dynamic(a), Configuration::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Configuration::Static(map) => f.debug_tuple("Static").field(map).finish(),
            Configuration::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(map: Map<String, Value>) -> Self {
        Configuration::Static(map)
    }
}

/// Patch form of an override.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverridePatch {
    pub component: Option<Component>,
    pub props: Option<Configuration>,
    pub style: Option<Configuration>,
}

impl OverridePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_component(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }

    pub fn with_props(mut self, props: impl Into<Configuration>) -> Self {
        self.props = Some(props.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<Configuration>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// A consumer override for one sub-element.
#[derive(Debug, Clone, PartialEq)]
pub enum Override {
    Component(Component),
    Patch(OverridePatch),
}

impl Override {
    /// Static props patch.
    pub fn props(props: Map<String, Value>) -> Self {
        Override::Patch(OverridePatch::new().with_props(props))
    }

    /// Static style patch.
    pub fn style(style: Map<String, Value>) -> Self {
        Override::Patch(OverridePatch::new().with_style(style))
    }

    /// Normalise to patch form; a bare component becomes its `component`.
    pub fn into_patch(self) -> OverridePatch {
        match self {
            Override::Component(c) => OverridePatch::new().with_component(c),
            Override::Patch(p) => p,
        }
    }
}

impl From<Component> for Override {
    fn from(component: Component) -> Self {
        Override::Component(component)
    }
}

impl From<OverridePatch> for Override {
    fn from(patch: OverridePatch) -> Self {
        Override::Patch(patch)
    }
}

/// Errors for override handling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverrideError {
    #[error("Invalid override for {name}: {reason}")]
    InvalidOverride { name: String, reason: String },

    #[error("Unknown component '{component}' in override for {name}")]
    UnknownComponent { name: String, component: String },
}
