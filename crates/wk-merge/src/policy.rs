//! Cloneable predicates.
//!
//! A policy decides which values are containers that get merged key by key.
//! Everything else is a leaf and is replaced outright.

use serde_json::Value;

/// Decides whether a value is merged recursively or replaced.
pub trait MergePolicy {
    /// Returns true when `value` should be merged field by field.
    fn is_cloneable(&self, value: &Value) -> bool;
}

impl<F> MergePolicy for F
where
    F: Fn(&Value) -> bool,
{
    fn is_cloneable(&self, value: &Value) -> bool {
        self(value)
    }
}

/// Objects and arrays are both cloneable.
///
/// Arrays are merged position by position, so `[1, 2, 3]` merged with `[9]`
/// yields `[9, 2, 3]` rather than a concatenation. Widget style overrides
/// rely on this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByIndex;

impl MergePolicy for ByIndex {
    fn is_cloneable(&self, value: &Value) -> bool {
        matches!(value, Value::Object(_) | Value::Array(_))
    }
}

/// Only objects are cloneable; arrays are leaves and the later one wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceSequences;

impl MergePolicy for ReplaceSequences {
    fn is_cloneable(&self, value: &Value) -> bool {
        value.is_object()
    }
}
