//! Override map merging
//!
//! Combines a parent's overrides with a child's. The later map wins on
//! component replacement; props and style patches are deep-merged.

use std::collections::BTreeSet;

use super::{Configuration, Override, OverridePatch, Overrides};
use crate::style::merge_maps;

/// Merge two override maps key by key.
///
/// Every key present in either map appears in the result, always in patch
/// form.
pub fn merge_overrides(target: &Overrides, source: &Overrides) -> Overrides {
    let names: BTreeSet<&String> = target.keys().chain(source.keys()).collect();
    tracing::trace!(keys = names.len(), "merging override maps");

    names
        .into_iter()
        .map(|name| {
            let merged = merge_override(target.get(name), source.get(name));
            (name.clone(), Override::Patch(merged))
        })
        .collect()
}

/// Merge two single overrides; `source` takes precedence.
pub fn merge_override(target: Option<&Override>, source: Option<&Override>) -> OverridePatch {
    let target = target.cloned().map(Override::into_patch).unwrap_or_default();
    let source = source.cloned().map(Override::into_patch).unwrap_or_default();

    OverridePatch {
        component: source.component.or(target.component),
        props: merge_slot(target.props, source.props),
        style: merge_slot(target.style, source.style),
    }
}

fn merge_slot(
    target: Option<Configuration>,
    source: Option<Configuration>,
) -> Option<Configuration> {
    match (target, source) {
        (Some(t), Some(s)) => Some(merge_configuration(t, s)),
        (t, s) => s.or(t),
    }
}

/// Combine two props or style patches.
///
/// Two static objects are deep-merged now; otherwise the result is a
/// function that evaluates both sides and deep-merges the results.
pub fn merge_configuration(target: Configuration, source: Configuration) -> Configuration {
    match (target, source) {
        (Configuration::Static(t), Configuration::Static(s)) => {
            Configuration::Static(merge_maps(&t, &s))
        }
        (t, s) => Configuration::dynamic(move |ctx| merge_maps(&t.evaluate(ctx), &s.evaluate(ctx))),
    }
}
