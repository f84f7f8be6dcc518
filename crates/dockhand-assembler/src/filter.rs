//! Active-set filtering.
//!
//! Removes every entry of a kind that the active-set computation did
//! not reach. The graph shrinks in place.

use dockhand_common::config::DockhandConfig;
use dockhand_common::error::Result;
use dockhand_specs::model::{SpecGraph, SpecKind};

use crate::active::{active_apps, active_bundles, active_libs, active_services};

/// Computes the active set for `kind` and deletes everything outside it.
///
/// Callers must respect the assembly order (bundles, apps, expansion,
/// libs, services); [`crate::pipeline::assemble`] enforces it.
///
/// # Errors
///
/// Returns an error if the active-set computation for `kind` fails.
pub fn filter_active(kind: SpecKind, graph: &mut SpecGraph, config: &DockhandConfig) -> Result<()> {
    match kind {
        SpecKind::Bundles => {
            let active = active_bundles(config, graph)?;
            graph.bundles.retain(|name, _| active.contains(name));
        }
        SpecKind::Apps => {
            let active = active_apps(graph)?;
            graph.apps.retain(|name, _| active.contains(name));
        }
        SpecKind::Libs => {
            let active = active_libs(graph);
            graph.libs.retain(|name, _| active.contains(name));
        }
        SpecKind::Services => {
            let active = active_services(graph);
            graph.services.retain(|name, _| active.contains(name));
        }
    }
    tracing::debug!(%kind, surviving = ?surviving_names(kind, graph), "filtered active set");
    Ok(())
}

fn surviving_names(kind: SpecKind, graph: &SpecGraph) -> Vec<&String> {
    match kind {
        SpecKind::Bundles => graph.bundles.keys().collect(),
        SpecKind::Apps => graph.apps.keys().collect(),
        SpecKind::Libs => graph.libs.keys().collect(),
        SpecKind::Services => graph.services.keys().collect(),
    }
}
