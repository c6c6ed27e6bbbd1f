//! Property-based tests for override map merging.
//! Merged maps resolve to the styles the inputs imply, for arbitrary patches.

use proptest::prelude::*;
use serde_json::{Map, Value};
use widget_kit::{merge_overrides, Component, Element, Override, Overrides, Props, Theme};

const ELEMENTS: [&str; 3] = ["Root", "Tab", "Panel"];

fn style_map() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-e]{1,3}", "[a-z0-9]{0,6}", 0..5)
        .prop_map(|m| m.into_iter().map(|(k, v)| (k, Value::String(v))).collect())
}

fn overrides() -> impl Strategy<Value = Overrides> {
    prop::collection::btree_map(prop::sample::select(ELEMENTS.to_vec()), style_map(), 0..3).prop_map(
        |m| {
            m.into_iter()
                .map(|(name, style)| (name.to_string(), Override::style(style)))
                .collect()
        },
    )
}

/// `$style` each element resolves to, `None` when the element has none.
fn resolved_styles(overrides: &Overrides) -> Vec<Option<Value>> {
    let theme = Theme::light();
    ELEMENTS
        .iter()
        .map(|name| {
            Element::build(overrides, name, &Component::styled(name), &theme, Props::new())
                .prop("$style")
                .cloned()
        })
        .collect()
}

proptest! {
    /// merge(A, {}) resolves exactly like A
    #[test]
    fn merging_empty_keeps_styles(a in overrides()) {
        let merged = merge_overrides(&a, &Overrides::new());
        prop_assert_eq!(resolved_styles(&merged), resolved_styles(&a));
    }

    /// merge(A, A) resolves exactly like A
    #[test]
    fn merging_with_itself_is_idempotent(a in overrides()) {
        let merged = merge_overrides(&a, &a);
        prop_assert_eq!(resolved_styles(&merged), resolved_styles(&a));
    }

    /// Every style leaf of the child survives the merge; parent leaves the
    /// child does not set survive too.
    #[test]
    fn child_leaves_win(parent in overrides(), child in overrides()) {
        let merged = merge_overrides(&parent, &child);
        let styles = resolved_styles(&merged);

        for (index, name) in ELEMENTS.iter().enumerate() {
            let got = styles[index].as_ref().and_then(Value::as_object);
            let style_of = |o: &Overrides| match o.get(*name) {
                Some(Override::Patch(p)) => p.style.as_ref().map(|s| match s {
                    widget_kit::Configuration::Static(map) => map.clone(),
                    widget_kit::Configuration::Dynamic(_) => Map::new(),
                }),
                _ => None,
            };
            let parent_style = style_of(&parent).unwrap_or_default();
            let child_style = style_of(&child).unwrap_or_default();

            for (key, value) in &child_style {
                prop_assert_eq!(got.and_then(|g| g.get(key)), Some(value));
            }
            for (key, value) in &parent_style {
                if !child_style.contains_key(key) {
                    prop_assert_eq!(got.and_then(|g| g.get(key)), Some(value));
                }
            }
        }
    }
}
