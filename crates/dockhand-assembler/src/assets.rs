//! Asset aggregation.
//!
//! Builds the reverse index from asset name to the specs that declare
//! it. The index is derived state: every pass rebuilds it from scratch
//! off the current apps and libs.

use std::collections::BTreeMap;

use dockhand_specs::model::{Asset, SpecGraph};

/// Rebuilds `graph.assets` from the current apps and libs.
///
/// Each declared asset gains the declaring spec's name in `used_by`,
/// and in `required_by` when declared with `required: true`. Iteration
/// order does not affect the resulting sets.
pub fn aggregate_assets(graph: &mut SpecGraph) {
    let mut assets: BTreeMap<String, Asset> = BTreeMap::new();
    for (spec_name, spec) in graph.apps_and_libs() {
        for decl in &spec.assets {
            let entry = assets.entry(decl.name.clone()).or_default();
            let _ = entry.used_by.insert(spec_name.clone());
            if decl.required {
                let _ = entry.required_by.insert(spec_name.clone());
            }
        }
    }
    graph.assets = assets;
}
