//! Override Resolution Tests
//!
//! End-to-end checks of consumer overrides: parsing from data, resolving
//! against default elements, and merging parent and child maps.

mod common;

use common::init_tracing;
use serde_json::{json, Map, Value};
use widget_kit::style::style_of;
use widget_kit::{
    merge_overrides, parse_overrides, resolve, Component, ComponentRegistry, Configuration,
    Element, Override, OverridePatch, Overrides, Props, StyleContext, Theme,
};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_absent_override_renders_default() {
    init_tracing();
    let theme = Theme::light();
    let props = Props::new();
    let ctx = StyleContext::new(&theme, &props);
    let default = Component::styled("StyledRoot");

    let (component, extra) = resolve(None, &default, &ctx);
    assert_eq!(component, default);
    assert!(extra.is_empty());
}

#[test]
fn test_component_override_replaces_element() {
    let theme = Theme::light();
    let props = Props::new();
    let ctx = StyleContext::new(&theme, &props);
    let fancy = Component::custom("Fancy", |props| json!({"fancy": props.len()}));

    let (component, extra) = resolve(
        Some(&Override::Component(fancy.clone())),
        &Component::styled("StyledRoot"),
        &ctx,
    );
    assert_eq!(component, fancy);
    assert!(extra.is_empty());
    assert_eq!(component.render(&Props::new()), Some(json!({"fancy": 0})));
}

#[test]
fn test_patch_spreads_props_and_style() {
    let theme = Theme::light();
    let props = Props::new();
    let ctx = StyleContext::new(&theme, &props);
    let patch = OverridePatch::new()
        .with_props(object(json!({"id": "root", "title": "hello"})))
        .with_style(object(json!({"color": "red"})));

    let (component, extra) = resolve(
        Some(&Override::Patch(patch)),
        &Component::styled("StyledRoot"),
        &ctx,
    );
    assert_eq!(component.name(), "StyledRoot");
    assert_eq!(extra.get("id"), Some(&json!("root")));
    assert_eq!(extra.get("$style"), Some(&json!({"color": "red"})));
}

#[test]
fn test_dynamic_style_sees_theme_and_props() {
    let theme = Theme::light();
    let mut overrides = Overrides::new();
    overrides.insert(
        "Root".into(),
        Override::Patch(OverridePatch::new().with_style(Configuration::dynamic(|ctx| {
            let color = if ctx.flag("$disabled") {
                ctx.theme.color("mono400")
            } else {
                ctx.theme.color("accent")
            };
            style_of([("color", color.unwrap_or_default())])
        }))),
    );

    let mut base = Props::new();
    base.insert("$disabled".into(), true.into());
    let element = Element::build(&overrides, "Root", &Component::styled("StyledRoot"), &theme, base);

    assert_eq!(element.prop("$style"), Some(&json!({"color": "#CBCBCB"})));
    assert_eq!(element.prop("$disabled"), Some(&json!(true)));
}

#[test]
fn test_override_props_win_over_base() {
    let theme = Theme::light();
    let mut overrides = Overrides::new();
    overrides.insert("Root".into(), Override::props(object(json!({"role": "presentation"}))));

    let mut base = Props::new();
    base.insert("role".into(), "tablist".into());
    let element = Element::build(&overrides, "Root", &Component::styled("StyledRoot"), &theme, base);

    assert_eq!(element.prop("role"), Some(&json!("presentation")));
}

// =============================================================================
// Parsing and merging
// =============================================================================

#[test]
fn test_parsed_overrides_resolve_like_built_ones() {
    let mut registry = ComponentRegistry::new();
    registry.register(Component::styled("FancyRoot"));

    let parsed = parse_overrides(
        &json!({
            "Root": {"component": "FancyRoot", "style": {"padding": "4px"}},
            "Label": "FancyRoot"
        }),
        &registry,
    )
    .unwrap();

    let theme = Theme::light();
    let root = Element::build(&parsed, "Root", &Component::styled("StyledRoot"), &theme, Props::new());
    assert_eq!(root.component.name(), "FancyRoot");
    assert_eq!(root.prop("$style"), Some(&json!({"padding": "4px"})));

    let label = Element::build(&parsed, "Label", &Component::styled("StyledLabel"), &theme, Props::new());
    assert_eq!(label.component.name(), "FancyRoot");
}

#[test]
fn test_merge_deep_merges_styles_and_child_component_wins() {
    let mut parent = Overrides::new();
    parent.insert(
        "Tab".into(),
        Override::Patch(
            OverridePatch::new()
                .with_component(Component::styled("ParentTab"))
                .with_style(object(json!({"color": "red", ":hover": {"color": "blue"}}))),
        ),
    );
    let mut child = Overrides::new();
    child.insert(
        "Tab".into(),
        Override::Patch(
            OverridePatch::new()
                .with_component(Component::styled("ChildTab"))
                .with_style(object(json!({":hover": {"background": "black"}}))),
        ),
    );
    child.insert("Panel".into(), Override::Component(Component::styled("ChildPanel")));

    let merged = merge_overrides(&parent, &child);
    assert_eq!(merged.len(), 2);

    let theme = Theme::light();
    let tab = Element::build(&merged, "Tab", &Component::styled("StyledTab"), &theme, Props::new());
    assert_eq!(tab.component.name(), "ChildTab");
    assert_eq!(
        tab.prop("$style"),
        Some(&json!({"color": "red", ":hover": {"color": "blue", "background": "black"}}))
    );

    let panel = Element::build(&merged, "Panel", &Component::styled("StyledPanel"), &theme, Props::new());
    assert_eq!(panel.component.name(), "ChildPanel");
}

#[test]
fn test_merge_with_empty_map_keeps_overrides() {
    let mut parent = Overrides::new();
    parent.insert("Root".into(), Override::style(object(json!({"margin": 0}))));

    let merged = merge_overrides(&parent, &Overrides::new());

    let theme = Theme::light();
    let root = Element::build(&merged, "Root", &Component::styled("StyledRoot"), &theme, Props::new());
    assert_eq!(root.prop("$style"), Some(&json!({"margin": 0})));
}
