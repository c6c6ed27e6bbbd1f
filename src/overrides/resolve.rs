//! Override resolution
//!
//! `resolve(override, default)` picks the element to render and the extra
//! props to spread onto it. Pure: the same inputs always give equal output.

use serde_json::Value;

use super::{Component, Override, Overrides};
use crate::style::{Props, StyleContext, STYLE_PROP};

/// Resolve one override against its default element.
///
/// - absent → `(default, {})`
/// - bare component → `(component, {})`
/// - patch → `(patch.component or default, props ∪ {"$style": style})`
pub fn resolve(
    override_: Option<&Override>,
    default: &Component,
    ctx: &StyleContext<'_>,
) -> (Component, Props) {
    match override_ {
        None => (default.clone(), Props::new()),
        Some(Override::Component(component)) => {
            tracing::trace!(default = default.name(), replacement = component.name(), "override replaced");
            (component.clone(), Props::new())
        }
        Some(Override::Patch(patch)) => {
            let component = patch.component.clone().unwrap_or_else(|| default.clone());
            let mut props = patch
                .props
                .as_ref()
                .map(|p| p.evaluate(ctx))
                .unwrap_or_default();
            if let Some(style) = &patch.style {
                props.insert(STYLE_PROP.to_string(), Value::Object(style.evaluate(ctx)));
            }
            tracing::trace!(
                element = component.name(),
                extra_props = props.len(),
                "override patched"
            );
            (component, props)
        }
    }
}

/// Look up `name` in an override map, then resolve against a styled
/// element of the same name.
pub fn resolve_named(
    overrides: &Overrides,
    name: &str,
    ctx: &StyleContext<'_>,
) -> (Component, Props) {
    resolve(overrides.get(name), &Component::styled(name), ctx)
}
