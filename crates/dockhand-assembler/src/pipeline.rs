//! The fixed-order assembly pipeline.
//!
//! Filtering and expansion do not commute: apps must be filtered before
//! their libraries are expanded so inactive apps cannot pull libs into
//! the active set, and libs must be filtered only after expansion so a
//! lib reachable purely transitively is discovered before the cut. The
//! sequence lives here, in one place, rather than in caller discipline.

use dockhand_common::config::DockhandConfig;
use dockhand_common::error::Result;
use dockhand_specs::model::{SpecGraph, SpecKind};

use crate::assets::aggregate_assets;
use crate::expand::{expand_libs_in_apps, expand_libs_in_libs};
use crate::filter::filter_active;

/// Runs the full assembly: bundle and app filtering, app-side library
/// expansion, lib and service filtering, then asset aggregation.
///
/// Consumes the raw graph and returns the reduced one; downstream
/// consumers treat the result as read-only.
///
/// # Errors
///
/// Returns an error on any missing reference, unknown configured
/// bundle, or dependency cycle. A failed assembly yields no graph.
pub fn assemble(mut graph: SpecGraph, config: &DockhandConfig) -> Result<SpecGraph> {
    tracing::info!(bundles = ?config.bundles, "assembling active specification graph");
    filter_active(SpecKind::Bundles, &mut graph, config)?;
    filter_active(SpecKind::Apps, &mut graph, config)?;
    expand_libs_in_apps(&mut graph)?;
    filter_active(SpecKind::Libs, &mut graph, config)?;
    filter_active(SpecKind::Services, &mut graph, config)?;
    aggregate_assets(&mut graph);
    Ok(graph)
}

/// Expands library closures in every app and lib without filtering
/// anything.
///
/// Flows that resolve a single named component (for example targeted
/// testing) use this variant so specs outside the active bundle set
/// are not discarded.
///
/// # Errors
///
/// Returns an error on a missing lib reference or a cyclic lib relation.
pub fn expand_all(mut graph: SpecGraph) -> Result<SpecGraph> {
    tracing::info!("expanding library closures without filtering");
    expand_libs_in_apps(&mut graph)?;
    expand_libs_in_libs(&mut graph)?;
    Ok(graph)
}
