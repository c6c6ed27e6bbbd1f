//! Plain style objects and the context style functions are evaluated in.
//!
//! Styles never become class names here. They stay nested JSON objects
//! (`{"color": "red", "@media ...": {...}}`) for the host's styling engine.

use serde_json::{Map, Value};

use crate::theme::Theme;

/// A nested CSS-in-JS style object.
pub type StyleObject = Map<String, Value>;

/// Props handed to a rendered element.
pub type Props = Map<String, Value>;

/// Key under which a resolved override style travels in props.
pub const STYLE_PROP: &str = "$style";

/// Inputs available to dynamic props and style functions.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub theme: &'a Theme,
    pub props: &'a Props,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a Theme, props: &'a Props) -> Self {
        Self { theme, props }
    }

    /// Boolean `$flag` from the element props; missing means false.
    pub fn flag(&self, name: &str) -> bool {
        self.props.get(name).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// Deep-merge two maps into a new one; `patch` wins on leaves.
pub fn merge_maps(base: &Map<String, Value>, patch: &Map<String, Value>) -> Map<String, Value> {
    let merged = wk_merge::merge_all(
        Value::Object(Map::new()),
        [&Value::Object(base.clone()), &Value::Object(patch.clone())],
    );
    match merged {
        Value::Object(map) => map,
        // merge_all always starts from an object
        _ => Map::new(),
    }
}

pub fn min_width_query(px: u32) -> String {
    format!("@media screen and (min-width: {}px)", px)
}

pub fn max_width_query(px: u32) -> String {
    format!("@media screen and (max-width: {}px)", px)
}

/// Shorthand for building a one-off style object from pairs.
pub fn style_of<I, K, V>(pairs: I) -> StyleObject
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
