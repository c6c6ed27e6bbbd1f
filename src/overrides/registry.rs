//! Overrides from untyped data
//!
//! Overrides stored in config files arrive as JSON. Component replacements
//! are referenced by name and looked up in a [`ComponentRegistry`]. Shapes
//! other than a name or a `{component, props, style}` object are rejected.

use serde_json::Value;
use std::collections::BTreeMap;

use super::{Component, Configuration, Override, OverrideError, OverridePatch, Overrides};

const PATCH_KEYS: &[&str] = &["component", "props", "style"];

/// Named components available to untyped overrides.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, Component>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, component: Component) -> &mut Self {
        self.components
            .insert(component.name().to_string(), component);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.get(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn lookup(&self, name: &str, component: &str) -> Result<Component, OverrideError> {
        self.get(component)
            .cloned()
            .ok_or_else(|| OverrideError::UnknownComponent {
                name: name.to_string(),
                component: component.to_string(),
            })
    }
}

impl Override {
    /// Parse the override for sub-element `name` from untyped data.
    pub fn from_value(
        name: &str,
        value: &Value,
        registry: &ComponentRegistry,
    ) -> Result<Override, OverrideError> {
        let invalid = |reason: String| {
            tracing::warn!(element = name, %reason, "rejecting override");
            OverrideError::InvalidOverride {
                name: name.to_string(),
                reason,
            }
        };

        match value {
            Value::String(component) => Ok(Override::Component(registry.lookup(name, component)?)),
            Value::Object(map) => {
                if let Some(key) = map.keys().find(|k| !PATCH_KEYS.contains(&k.as_str())) {
                    return Err(invalid(format!("unexpected key '{}'", key)));
                }

                let mut patch = OverridePatch::new();
                match map.get("component") {
                    None | Some(Value::Null) => {}
                    Some(Value::String(component)) => {
                        patch.component = Some(registry.lookup(name, component)?);
                    }
                    Some(other) => {
                        return Err(invalid(format!(
                            "component must be a name, got {}",
                            kind_of(other)
                        )))
                    }
                }
                patch.props = configuration(map.get("props"), "props").map_err(invalid)?;
                patch.style = configuration(map.get("style"), "style").map_err(invalid)?;

                Ok(Override::Patch(patch))
            }
            other => Err(invalid(format!(
                "expected a component name or an override object, got {}",
                kind_of(other)
            ))),
        }
    }
}

fn configuration(value: Option<&Value>, field: &str) -> Result<Option<Configuration>, String> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(Configuration::Static(map.clone()))),
        Some(other) => Err(format!("{} must be an object, got {}", field, kind_of(other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a whole `{name: override}` map.
pub fn parse_overrides(
    value: &Value,
    registry: &ComponentRegistry,
) -> Result<Overrides, OverrideError> {
    match value {
        Value::Null => Ok(Overrides::new()),
        Value::Object(map) => map
            .iter()
            .map(|(name, v)| Ok((name.clone(), Override::from_value(name, v, registry)?)))
            .collect(),
        other => Err(OverrideError::InvalidOverride {
            name: "<overrides>".to_string(),
            reason: format!("expected an object of overrides, got {}", kind_of(other)),
        }),
    }
}
