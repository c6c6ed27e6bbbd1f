//! Block: a box whose style comes from props
//!
//! Each style prop is either a single value or an array of responsive
//! values. Index 0 applies everywhere; index `i` applies from the `i`-th
//! theme breakpoint up.

use serde_json::{Map, Value};

use super::Element;
use crate::overrides::{Component, Overrides};
use crate::style::{merge_maps, min_width_query, Props, StyleObject, STYLE_PROP};
use crate::theme::Theme;

pub const BLOCK: &str = "Block";

/// How a prop's value maps onto CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    /// Theme colour key or raw colour.
    Color,
    /// Theme sizing key or raw length.
    Sizing,
    /// Theme typography key, spread into font properties.
    Font,
    Raw,
}

const STYLE_PROPS: &[(&str, Lookup)] = &[
    ("color", Lookup::Color),
    ("backgroundColor", Lookup::Color),
    ("backgroundAttachment", Lookup::Raw),
    ("backgroundClip", Lookup::Raw),
    ("backgroundImage", Lookup::Raw),
    ("backgroundOrigin", Lookup::Raw),
    ("backgroundPosition", Lookup::Raw),
    ("backgroundRepeat", Lookup::Raw),
    ("backgroundSize", Lookup::Raw),
    ("font", Lookup::Font),
    ("alignContent", Lookup::Raw),
    ("alignItems", Lookup::Raw),
    ("alignSelf", Lookup::Raw),
    ("flexDirection", Lookup::Raw),
    ("display", Lookup::Raw),
    ("flex", Lookup::Raw),
    ("flexWrap", Lookup::Raw),
    ("grid", Lookup::Raw),
    ("gridArea", Lookup::Raw),
    ("gridAutoColumns", Lookup::Raw),
    ("gridAutoFlow", Lookup::Raw),
    ("gridAutoRows", Lookup::Raw),
    ("gridColumn", Lookup::Raw),
    ("gridColumnEnd", Lookup::Raw),
    ("gridColumnGap", Lookup::Sizing),
    ("gridColumnStart", Lookup::Raw),
    ("gridGap", Lookup::Sizing),
    ("gridRow", Lookup::Raw),
    ("gridRowEnd", Lookup::Raw),
    ("gridRowGap", Lookup::Sizing),
    ("gridRowStart", Lookup::Raw),
    ("gridTemplate", Lookup::Raw),
    ("gridTemplateAreas", Lookup::Raw),
    ("gridTemplateColumns", Lookup::Raw),
    ("gridTemplateRows", Lookup::Raw),
    ("justifyContent", Lookup::Raw),
    ("justifyItems", Lookup::Raw),
    ("justifySelf", Lookup::Raw),
    ("placeContent", Lookup::Raw),
    ("placeItems", Lookup::Raw),
    ("placeSelf", Lookup::Raw),
    ("position", Lookup::Raw),
    ("width", Lookup::Sizing),
    ("minWidth", Lookup::Sizing),
    ("maxWidth", Lookup::Sizing),
    ("height", Lookup::Sizing),
    ("minHeight", Lookup::Sizing),
    ("maxHeight", Lookup::Sizing),
    ("overflow", Lookup::Raw),
    ("margin", Lookup::Sizing),
    ("marginTop", Lookup::Sizing),
    ("marginRight", Lookup::Sizing),
    ("marginBottom", Lookup::Sizing),
    ("marginLeft", Lookup::Sizing),
    ("padding", Lookup::Sizing),
    ("paddingTop", Lookup::Sizing),
    ("paddingRight", Lookup::Sizing),
    ("paddingBottom", Lookup::Sizing),
    ("paddingLeft", Lookup::Sizing),
    ("left", Lookup::Sizing),
    ("top", Lookup::Sizing),
    ("right", Lookup::Sizing),
    ("bottom", Lookup::Sizing),
    ("textOverflow", Lookup::Raw),
    ("whiteSpace", Lookup::Raw),
];

fn lookup_for(prop: &str) -> Option<Lookup> {
    STYLE_PROPS
        .iter()
        .find(|(name, _)| *name == prop)
        .map(|(_, lookup)| *lookup)
}

/// Whether `prop` is one of the block style props.
pub fn is_style_prop(prop: &str) -> bool {
    lookup_for(prop).is_some()
}

/// CSS declarations for one value of one prop.
fn declarations(theme: &Theme, prop: &str, lookup: Lookup, value: &Value) -> StyleObject {
    let mut out = StyleObject::new();
    match (lookup, value) {
        (_, Value::Null) => {}
        (Lookup::Font, Value::String(key)) => match theme.font(key) {
            Some(font) => out = font.to_style(),
            None => tracing::debug!(font = %key, "unknown typography key"),
        },
        (Lookup::Color, Value::String(key)) => {
            let color = theme.color(key).unwrap_or(key.as_str());
            out.insert(prop.to_string(), Value::String(color.to_string()));
        }
        (Lookup::Sizing, Value::String(key)) => {
            let size = theme.sizing(key).unwrap_or(key.as_str());
            out.insert(prop.to_string(), Value::String(size.to_string()));
        }
        (Lookup::Sizing, Value::Number(n)) => {
            out.insert(prop.to_string(), Value::String(format!("{}px", n)));
        }
        (_, other) => {
            out.insert(prop.to_string(), other.clone());
        }
    }
    out
}

/// Style object for the block style props found in `props`.
///
/// Props that are not block style props are ignored. Responsive entries
/// beyond the number of theme breakpoints are dropped.
pub fn block_style(theme: &Theme, props: &Props) -> StyleObject {
    let queries: Vec<String> = theme
        .breakpoints
        .ascending()
        .iter()
        .map(|px| min_width_query(*px))
        .collect();

    let mut style = StyleObject::new();
    for (prop, value) in props {
        let Some(lookup) = lookup_for(prop) else {
            continue;
        };
        match value {
            Value::Array(values) => {
                for (i, v) in values.iter().enumerate() {
                    let decls = declarations(theme, prop, lookup, v);
                    if i == 0 {
                        style.extend(decls);
                        continue;
                    }
                    let Some(query) = queries.get(i - 1) else {
                        tracing::debug!(prop = %prop, index = i, "responsive value past last breakpoint");
                        break;
                    };
                    let entry = style
                        .entry(query.clone())
                        .or_insert_with(|| Value::Object(Map::new()));
                    if let Value::Object(block) = entry {
                        block.extend(decls);
                    }
                }
            }
            single => style.extend(declarations(theme, prop, lookup, single)),
        }
    }
    style
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub element: Element,
    /// Computed style, with the override style deep-merged on top.
    pub style: StyleObject,
}

/// `as_` is the rendered tag; `props` mixes style props and pass-through
/// attributes.
pub fn render(as_: &str, props: &Props, overrides: &Overrides, theme: &Theme) -> BlockView {
    let mut base = Props::new();
    base.insert("$as".into(), Value::String(as_.to_string()));
    for (key, value) in props {
        let key = if is_style_prop(key) {
            format!("${}", key)
        } else {
            key.clone()
        };
        base.insert(key, value.clone());
    }
    base.insert("data-baseweb".into(), "block".into());

    let element = Element::build(overrides, BLOCK, &Component::styled("StyledBlock"), theme, base);
    let computed = block_style(theme, props);
    let style = match element.prop(STYLE_PROP) {
        Some(Value::Object(patch)) => merge_maps(&computed, patch),
        _ => computed,
    };
    BlockView { element, style }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::Override;
    use crate::style::style_of;
    use serde_json::json;

    fn props(value: Value) -> Props {
        match value {
            Value::Object(map) => map,
            _ => panic!("props must be an object"),
        }
    }

    #[test]
    fn test_theme_lookups() {
        let style = block_style(
            &Theme::light(),
            &props(json!({
                "color": "accent",
                "backgroundColor": "#123456",
                "marginTop": "scale600",
                "width": 100,
                "display": "flex",
            })),
        );
        assert_eq!(
            Value::Object(style),
            json!({
                "color": "#276EF1",
                "backgroundColor": "#123456",
                "marginTop": "16px",
                "width": "100px",
                "display": "flex",
            })
        );
    }

    #[test]
    fn test_font_spreads_typography() {
        let style = block_style(&Theme::light(), &props(json!({"font": "LabelSmall"})));
        assert_eq!(style.get("fontSize"), Some(&json!("14px")));
        assert_eq!(style.get("fontWeight"), Some(&json!("500")));
        assert!(style.get("font").is_none());
    }

    #[test]
    fn test_responsive_values() {
        let style = block_style(
            &Theme::light(),
            &props(json!({"padding": ["scale300", "scale600", null, "scale900"]})),
        );
        assert_eq!(
            Value::Object(style),
            json!({
                "padding": "8px",
                "@media screen and (min-width: 320px)": {"padding": "16px"},
                "@media screen and (min-width: 600px)": {},
                "@media screen and (min-width: 1136px)": {"padding": "32px"},
            })
        );
    }

    #[test]
    fn test_responsive_props_share_media_blocks() {
        let style = block_style(
            &Theme::light(),
            &props(json!({"display": ["none", "block"], "color": ["primary", "accent"]})),
        );
        assert_eq!(
            style.get("@media screen and (min-width: 320px)"),
            Some(&json!({"display": "block", "color": "#276EF1"}))
        );
    }

    #[test]
    fn test_render_passes_through_and_merges_override() {
        let mut overrides = Overrides::new();
        overrides.insert(BLOCK.into(), Override::style(style_of([("color", "red")])));
        let view = render(
            "section",
            &props(json!({"color": "primary", "marginTop": "scale300", "id": "hero"})),
            &overrides,
            &Theme::light(),
        );
        assert_eq!(view.element.prop("$as"), Some(&json!("section")));
        assert_eq!(view.element.prop("$color"), Some(&json!("primary")));
        assert_eq!(view.element.prop("id"), Some(&json!("hero")));
        assert_eq!(view.element.prop("data-baseweb"), Some(&json!("block")));
        assert_eq!(view.style.get("color"), Some(&json!("red")));
        assert_eq!(view.style.get("marginTop"), Some(&json!("8px")));
        assert!(view.style.get("id").is_none());
    }
}
