//! Deep merge of plain nested structures.
//!
//! Sources are applied left to right. Leaf values from later sources win;
//! containers are merged key by key. Arrays are treated as keyed structures
//! whose keys are their indices, so two arrays of different lengths merge
//! element by element:
//!
//! ```
//! use serde_json::json;
//! let merged = wk_merge::deep_merge(json!({"a": [1, 2, 3]}), &json!({"a": [9]}));
//! assert_eq!(merged, json!({"a": [9, 2, 3]}));
//! ```
//!
//! `null` stands for an absent value: a `null` target starts from `{}` and
//! `null` sources contribute nothing. Merging never fails.

mod policy;

pub use policy::{ByIndex, MergePolicy, ReplaceSequences};

use serde_json::{Map, Value};

/// Merge `source` into `target` with the [`ByIndex`] policy.
pub fn deep_merge(target: Value, source: &Value) -> Value {
    Merger::new().merge(target, [source])
}

/// Merge any number of sources into `target` with the [`ByIndex`] policy.
pub fn merge_all<'a, I>(target: Value, sources: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    Merger::new().merge(target, sources)
}

/// A deep merger parameterised by its cloneable predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger<P = ByIndex> {
    policy: P,
}

impl Merger<ByIndex> {
    pub fn new() -> Self {
        Self { policy: ByIndex }
    }
}

impl<P: MergePolicy> Merger<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Merge every source into `target`, returning the merged value.
    ///
    /// A target the policy does not consider cloneable (including `null`)
    /// is replaced by an empty object before merging.
    pub fn merge<'a, I>(&self, target: Value, sources: I) -> Value
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut target = if self.policy.is_cloneable(&target) {
            target
        } else {
            Value::Object(Map::new())
        };

        let mut applied = 0usize;
        for source in sources {
            self.merge_into(&mut target, source);
            applied += 1;
        }
        tracing::trace!(sources = applied, "deep merge");

        target
    }

    /// Fold `source` into an already-cloneable `target`.
    fn merge_into(&self, target: &mut Value, source: &Value) {
        match source {
            Value::Object(map) => {
                for (key, incoming) in map {
                    self.merge_entry(target, Slot::Key(key), incoming);
                }
            }
            Value::Array(items) => {
                for (index, incoming) in items.iter().enumerate() {
                    self.merge_entry(target, Slot::Index(index), incoming);
                }
            }
            // Scalars and null carry no keys.
            _ => {}
        }
    }

    fn merge_entry(&self, target: &mut Value, slot: Slot<'_>, incoming: &Value) {
        if !self.policy.is_cloneable(incoming) {
            put_slot(target, slot, incoming.clone());
            return;
        }

        let mut merged = match take_slot(target, slot) {
            Some(existing) if self.policy.is_cloneable(&existing) => existing,
            _ => empty_like(incoming),
        };
        self.merge_into(&mut merged, incoming);
        put_slot(target, slot, merged);
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot<'k> {
    Key(&'k str),
    Index(usize),
}

impl Slot<'_> {
    /// Index this slot addresses inside an array, if any.
    fn as_index(&self) -> Option<usize> {
        match self {
            Slot::Index(i) => Some(*i),
            Slot::Key(k) => k.parse().ok(),
        }
    }

    fn to_key(self) -> String {
        match self {
            Slot::Key(k) => k.to_string(),
            Slot::Index(i) => i.to_string(),
        }
    }
}

fn empty_like(value: &Value) -> Value {
    if value.is_array() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn take_slot(target: &mut Value, slot: Slot<'_>) -> Option<Value> {
    match target {
        Value::Object(map) => map.get_mut(&slot.to_key()).map(std::mem::take),
        Value::Array(items) => slot
            .as_index()
            .and_then(|i| items.get_mut(i))
            .map(std::mem::take),
        _ => None,
    }
}

fn put_slot(target: &mut Value, slot: Slot<'_>, value: Value) {
    if let Value::Array(items) = target {
        match slot.as_index() {
            Some(i) if i < items.len() => {
                items[i] = value;
                return;
            }
            Some(i) if i == items.len() => {
                items.push(value);
                return;
            }
            // A named key, or an index past the end, turns the sequence
            // into a keyed structure instead of padding it.
            Some(_) | None => promote_to_keyed(target),
        }
    }

    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        map.insert(slot.to_key(), value);
    }
}

fn promote_to_keyed(target: &mut Value) {
    if let Value::Array(items) = std::mem::take(target) {
        let map = items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect::<Map<String, Value>>();
        *target = Value::Object(map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let result = deep_merge(json!({"k": "old"}), &json!({"k": 5}));
        assert_eq!(result, json!({"k": 5}));
    }

    #[test]
    fn test_nested_objects_merge() {
        let result = deep_merge(json!({"k": {"a": 1}}), &json!({"k": {"b": 2}}));
        assert_eq!(result, json!({"k": {"a": 1, "b": 2}}));
    }

    #[test]
    fn test_null_target_is_empty() {
        let a = json!({"color": "red", "nested": {"x": [1, 2]}});
        assert_eq!(deep_merge(Value::Null, &a), a);
    }

    #[test]
    fn test_no_sources_is_identity() {
        let a = json!({"a": 1, "b": {"c": true}});
        assert_eq!(merge_all(a.clone(), []), a);
    }

    #[test]
    fn test_null_sources_are_skipped() {
        let a = json!({"a": 1});
        let result = merge_all(a.clone(), [&Value::Null, &Value::Null]);
        assert_eq!(result, a);
    }

    #[test]
    fn test_null_leaf_overwrites() {
        let result = deep_merge(json!({"a": {"b": 1}}), &json!({"a": null}));
        assert_eq!(result, json!({"a": null}));
    }

    #[test]
    fn test_arrays_merge_by_index() {
        // Sequences are merged position by position, never concatenated.
        let result = deep_merge(json!({"a": [1, 2, 3]}), &json!({"a": [9]}));
        assert_eq!(result, json!({"a": [9, 2, 3]}));

        let result = deep_merge(json!({"a": [1]}), &json!({"a": [7, 8, 9]}));
        assert_eq!(result, json!({"a": [7, 8, 9]}));
    }

    #[test]
    fn test_arrays_of_objects_merge_elementwise() {
        let result = deep_merge(
            json!({"rows": [{"x": 1}, {"x": 2}]}),
            &json!({"rows": [{"y": 1}]}),
        );
        assert_eq!(result, json!({"rows": [{"x": 1, "y": 1}, {"x": 2}]}));
    }

    #[test]
    fn test_container_replaces_scalar() {
        let result = deep_merge(json!({"a": 3}), &json!({"a": {"b": 1}}));
        assert_eq!(result, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_array_into_object_uses_index_keys() {
        let result = deep_merge(json!({"a": {"x": 1}}), &json!({"a": ["p"]}));
        assert_eq!(result, json!({"a": {"x": 1, "0": "p"}}));
    }

    #[test]
    fn test_object_into_array_promotes() {
        let result = deep_merge(json!({"a": ["p", "q"]}), &json!({"a": {"1": "r", "z": 0}}));
        assert_eq!(result, json!({"a": {"0": "p", "1": "r", "z": 0}}));
    }

    #[test]
    fn test_index_key_past_end_promotes_without_padding() {
        let result = deep_merge(json!({"a": [1]}), &json!({"a": {"18446744073709551615": 1}}));
        assert_eq!(result, json!({"a": {"0": 1, "18446744073709551615": 1}}));

        let result = deep_merge(json!({"a": ["p"]}), &json!({"a": {"4000000000": "q"}}));
        assert_eq!(result, json!({"a": {"0": "p", "4000000000": "q"}}));
    }

    #[test]
    fn test_index_key_at_end_appends() {
        let result = deep_merge(json!({"a": ["p"]}), &json!({"a": {"1": "q"}}));
        assert_eq!(result, json!({"a": ["p", "q"]}));
    }

    #[test]
    fn test_source_is_not_mutated() {
        let source = json!({"a": {"b": [1, 2]}});
        let snapshot = source.clone();
        let _ = deep_merge(json!({"a": {"b": [0, 0, 0]}}), &source);
        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_replace_sequences_policy() {
        let merger = Merger::with_policy(ReplaceSequences);
        let result = merger.merge(
            json!({"schemes": ["A", "B", "C"], "cache": {"spm": "off"}}),
            [&json!({"schemes": ["X"], "cache": {"dd": "on"}})],
        );
        assert_eq!(
            result,
            json!({"schemes": ["X"], "cache": {"spm": "off", "dd": "on"}})
        );
    }

    #[test]
    fn test_scalar_target_becomes_object() {
        let result = deep_merge(json!(42), &json!({"a": 1}));
        assert_eq!(result, json!({"a": 1}));
    }
}
