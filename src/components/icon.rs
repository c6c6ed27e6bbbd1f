//! Icon SVG styling

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Element;
use crate::overrides::{Component, Overrides};
use crate::style::{Props, StyleObject};
use crate::theme::Theme;

pub const SVG: &str = "Svg";

/// Icon size: a theme sizing key, a raw CSS length, or pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    Px(f64),
    Token(String),
}

impl From<&str> for IconSize {
    fn from(s: &str) -> Self {
        IconSize::Token(s.to_string())
    }
}

impl From<u32> for IconSize {
    fn from(px: u32) -> Self {
        IconSize::Px(f64::from(px))
    }
}

/// Resolved CSS size; `scale600` when unset.
pub fn resolve_size(theme: &Theme, size: Option<&IconSize>) -> String {
    match size {
        None => theme.sizing("scale600").unwrap_or("16px").to_string(),
        Some(IconSize::Token(token)) => theme
            .sizing(token)
            .map(str::to_string)
            .unwrap_or_else(|| token.clone()),
        Some(IconSize::Px(px)) => format!("{}px", px),
    }
}

/// Resolved fill colour; `currentColor` when unset.
pub fn resolve_color(theme: &Theme, color: Option<&str>) -> String {
    match color {
        None => "currentColor".to_string(),
        Some(c) => theme.color(c).unwrap_or(c).to_string(),
    }
}

pub fn svg_style(theme: &Theme, size: Option<&IconSize>, color: Option<&str>) -> StyleObject {
    let size = resolve_size(theme, size);
    let color = resolve_color(theme, color);
    let mut style = StyleObject::new();
    style.insert("display".into(), "inline-block".into());
    style.insert("fill".into(), Value::String(color.clone()));
    style.insert("color".into(), Value::String(color));
    style.insert("height".into(), Value::String(size.clone()));
    style.insert("width".into(), Value::String(size));
    style
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub size: Option<IconSize>,
    pub color: Option<String>,
    /// Accessible title rendered as the SVG's `<title>`.
    pub title: Option<String>,
    pub view_box: Option<String>,
    pub overrides: Overrides,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconView {
    pub svg: Element,
    pub style: StyleObject,
    pub title: Option<String>,
}

pub fn render(props: &IconProps, theme: &Theme) -> IconView {
    let mut base = Props::new();
    base.insert("data-baseweb".into(), "icon".into());
    if let Some(size) = &props.size {
        base.insert("$size".into(), serde_json::json!(size));
    }
    if let Some(color) = &props.color {
        base.insert("$color".into(), Value::String(color.clone()));
    }
    if let Some(view_box) = &props.view_box {
        base.insert("viewBox".into(), Value::String(view_box.clone()));
    }
    IconView {
        svg: Element::build(&props.overrides, SVG, &Component::styled("StyledSvg"), theme, base),
        style: svg_style(theme, props.size.as_ref(), props.color.as_deref()),
        title: props.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let style = svg_style(&Theme::light(), None, None);
        assert_eq!(
            Value::Object(style),
            json!({
                "display": "inline-block",
                "fill": "currentColor",
                "color": "currentColor",
                "height": "16px",
                "width": "16px",
            })
        );
    }

    #[test]
    fn test_size_resolution() {
        let theme = Theme::light();
        assert_eq!(resolve_size(&theme, Some(&"scale800".into())), "24px");
        assert_eq!(resolve_size(&theme, Some(&20u32.into())), "20px");
        assert_eq!(resolve_size(&theme, Some(&"2em".into())), "2em");
    }

    #[test]
    fn test_color_resolution() {
        let theme = Theme::light();
        assert_eq!(resolve_color(&theme, Some("accent")), "#276EF1");
        assert_eq!(resolve_color(&theme, Some("rebeccapurple")), "rebeccapurple");
    }

    #[test]
    fn test_size_deserializes_from_number_or_string() {
        let px: IconSize = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(px, IconSize::Px(12.0));
        let token: IconSize = serde_json::from_value(json!("scale300")).unwrap();
        assert_eq!(token, IconSize::Token("scale300".into()));
    }

    #[test]
    fn test_render_carries_title_and_props() {
        let props = IconProps {
            size: Some("scale300".into()),
            title: Some("Close".into()),
            ..Default::default()
        };
        let view = render(&props, &Theme::light());
        assert_eq!(view.title.as_deref(), Some("Close"));
        assert_eq!(view.svg.prop("$size"), Some(&json!("scale300")));
        assert_eq!(view.svg.prop("data-baseweb"), Some(&json!("icon")));
        assert_eq!(view.style.get("width"), Some(&json!("8px")));
    }
}
