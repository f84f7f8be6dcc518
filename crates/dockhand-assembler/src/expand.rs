//! In-place library expansion.
//!
//! Rewrites each spec's direct `depends.libs` set into its full
//! transitive closure. Closures are fixed points, so both passes are
//! idempotent.

use std::collections::{BTreeMap, BTreeSet};

use dockhand_common::error::Result;
use dockhand_specs::model::{DepKind, SpecGraph};

use crate::closure::closure;

/// Replaces every app's `depends.libs` with its transitive lib closure.
///
/// Must run before lib filtering: a lib reachable only through an app's
/// indirect dependencies is discovered here.
///
/// # Errors
///
/// Returns an error if an app references an undefined lib or the lib
/// relation is cyclic.
pub fn expand_libs_in_apps(graph: &mut SpecGraph) -> Result<()> {
    let expanded = expanded_lib_sets(graph, DepKind::Apps)?;
    for (name, libs) in expanded {
        if let Some(spec) = graph.apps.get_mut(&name) {
            spec.depends.libs = libs;
        }
    }
    Ok(())
}

/// Replaces every lib's `depends.libs` with its transitive lib closure.
///
/// # Errors
///
/// Returns an error if a lib references an undefined lib or the lib
/// relation is cyclic.
pub fn expand_libs_in_libs(graph: &mut SpecGraph) -> Result<()> {
    let expanded = expanded_lib_sets(graph, DepKind::Libs)?;
    for (name, libs) in expanded {
        if let Some(spec) = graph.libs.get_mut(&name) {
            spec.depends.libs = libs;
        }
    }
    Ok(())
}

/// Computes the lib closure of every component in the `root` mapping
/// that declares at least one lib. Reads the graph without mutating it
/// so all closures see the original direct sets.
fn expanded_lib_sets(
    graph: &SpecGraph,
    root: DepKind,
) -> Result<BTreeMap<String, BTreeSet<String>>> {
    let mut expanded = BTreeMap::new();
    for (name, spec) in graph.components(root) {
        if spec.depends.libs.is_empty() {
            continue;
        }
        let libs = closure(graph, root, name, DepKind::Libs)?;
        let _ = expanded.insert(name.clone(), libs);
    }
    Ok(expanded)
}
