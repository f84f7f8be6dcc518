//! Process-wide memoized graph accessors.
//!
//! Each accessor is populated once per process by its first successful
//! call and never invalidated; a restart is the only way to observe
//! changed specs or configuration. Failed assemblies are never cached.
//! First population is guarded by a lock so concurrent callers observe
//! the same graph.

use std::sync::{Arc, Mutex, PoisonError};

use dockhand_common::config::DockhandConfig;
use dockhand_common::error::Result;
use dockhand_specs::model::SpecGraph;
use dockhand_specs::source::SpecSource;

use crate::pipeline;

static ASSEMBLED: Mutex<Option<Arc<SpecGraph>>> = Mutex::new(None);
static EXPANDED: Mutex<Option<Arc<SpecGraph>>> = Mutex::new(None);

/// Returns the filtered-and-expanded graph, assembling it on first call.
///
/// This is the view compose compilation consumes.
///
/// # Errors
///
/// Returns an error if loading or assembly fails; the failure is not
/// cached and a later call retries from scratch.
pub fn assembled_specs(
    source: &dyn SpecSource,
    config: &DockhandConfig,
) -> Result<Arc<SpecGraph>> {
    let mut slot = ASSEMBLED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(graph) = slot.as_ref() {
        return Ok(Arc::clone(graph));
    }
    let graph = Arc::new(pipeline::assemble(source.load()?, config)?);
    *slot = Some(Arc::clone(&graph));
    Ok(graph)
}

/// Returns the library-expanded but unfiltered graph, computing it on
/// first call.
///
/// Used by flows that resolve components outside the active bundle set,
/// such as single-component test targets.
///
/// # Errors
///
/// Returns an error if loading or expansion fails; the failure is not
/// cached.
pub fn expanded_libs_specs(source: &dyn SpecSource) -> Result<Arc<SpecGraph>> {
    let mut slot = EXPANDED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(graph) = slot.as_ref() {
        return Ok(Arc::clone(graph));
    }
    let graph = Arc::new(pipeline::expand_all(source.load()?)?);
    *slot = Some(Arc::clone(&graph));
    Ok(graph)
}

/// Clears both caches. Test harness hook; production control flow must
/// never call this — restart the process instead.
#[doc(hidden)]
pub fn reset_for_tests() {
    *ASSEMBLED.lock().unwrap_or_else(PoisonError::into_inner) = None;
    *EXPANDED.lock().unwrap_or_else(PoisonError::into_inner) = None;
}
