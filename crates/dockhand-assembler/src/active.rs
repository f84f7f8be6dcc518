//! Per-kind active-set computation.
//!
//! An entry is active when it is reachable from the configured bundle
//! selection. Each kind has its own reachability strategy; the filter
//! dispatches on [`dockhand_specs::model::SpecKind`] so every strategy
//! is checked at compile time.

use std::collections::BTreeSet;

use dockhand_common::config::DockhandConfig;
use dockhand_common::error::{DockhandError, Result};
use dockhand_specs::model::{DepKind, SpecGraph};

use crate::closure::closure;

/// Validates the configured bundle names against the graph.
///
/// # Errors
///
/// Returns [`DockhandError::UnknownBundle`] for any configured name the
/// graph does not define. Unknown bundles fail the assembly rather than
/// being dropped silently.
pub fn active_bundles(config: &DockhandConfig, graph: &SpecGraph) -> Result<BTreeSet<String>> {
    let mut active = BTreeSet::new();
    for name in &config.bundles {
        if !graph.bundles.contains_key(name) {
            return Err(DockhandError::UnknownBundle { name: name.clone() });
        }
        let _ = active.insert(name.clone());
    }
    Ok(active)
}

/// Returns every app required by any surviving bundle: the bundles'
/// direct apps plus each app's app-dependency closure.
///
/// # Errors
///
/// Returns an error if a bundle references an undefined app or the app
/// relation is cyclic.
pub fn active_apps(graph: &SpecGraph) -> Result<BTreeSet<String>> {
    let mut active = BTreeSet::new();
    for bundle in graph.bundles.values() {
        for app_name in &bundle.apps {
            let _ = active.insert(app_name.clone());
            active.extend(closure(graph, DepKind::Apps, app_name, DepKind::Apps)?);
        }
    }
    Ok(active)
}

/// Returns every lib referenced in a surviving app's `depends.libs`.
///
/// Must run after app-side library expansion so transitively reachable
/// libs are already present in those sets.
#[must_use]
pub fn active_libs(graph: &SpecGraph) -> BTreeSet<String> {
    let mut active = BTreeSet::new();
    for spec in graph.apps.values() {
        active.extend(spec.depends.libs.iter().cloned());
    }
    active
}

/// Returns every service referenced by a surviving app or listed by a
/// surviving bundle.
#[must_use]
pub fn active_services(graph: &SpecGraph) -> BTreeSet<String> {
    let mut active = BTreeSet::new();
    for spec in graph.apps.values() {
        active.extend(spec.depends.services.iter().cloned());
    }
    for bundle in graph.bundles.values() {
        active.extend(bundle.services.iter().cloned());
    }
    active
}

#[cfg(test)]
mod tests {
    use dockhand_specs::model::{Bundle, ComponentSpec, Depends};

    use super::*;

    fn app(apps: &[&str], libs: &[&str], services: &[&str]) -> ComponentSpec {
        ComponentSpec {
            depends: Depends {
                apps: apps.iter().map(ToString::to_string).collect(),
                libs: libs.iter().map(ToString::to_string).collect(),
                services: services.iter().map(ToString::to_string).collect(),
            },
            ..ComponentSpec::default()
        }
    }

    fn graph_with_bundle(bundle_apps: &[&str], bundle_services: &[&str]) -> SpecGraph {
        let mut graph = SpecGraph::default();
        let _ = graph.bundles.insert(
            "web".into(),
            Bundle {
                apps: bundle_apps.iter().map(ToString::to_string).collect(),
                services: bundle_services.iter().map(ToString::to_string).collect(),
            },
        );
        graph
    }

    #[test]
    fn configured_bundles_are_validated() {
        let graph = graph_with_bundle(&[], &[]);
        let config = DockhandConfig {
            bundles: vec!["web".into()],
            ..DockhandConfig::default()
        };
        let active = active_bundles(&config, &graph).expect("should validate");
        assert!(active.contains("web"));
    }

    #[test]
    fn unknown_configured_bundle_is_fatal() {
        let graph = graph_with_bundle(&[], &[]);
        let config = DockhandConfig {
            bundles: vec!["web".into(), "ghost".into()],
            ..DockhandConfig::default()
        };
        let err = active_bundles(&config, &graph).expect_err("should fail");
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn active_apps_follows_the_app_closure() {
        let mut graph = graph_with_bundle(&["api"], &[]);
        let _ = graph.apps.insert("api".into(), app(&["worker"], &[], &[]));
        let _ = graph.apps.insert("worker".into(), app(&[], &[], &[]));
        let _ = graph.apps.insert("orphan".into(), app(&[], &[], &[]));

        let active = active_apps(&graph).expect("should resolve");
        assert!(active.contains("api"));
        assert!(active.contains("worker"));
        assert!(!active.contains("orphan"));
    }

    #[test]
    fn active_apps_missing_reference_fails() {
        let mut graph = graph_with_bundle(&["api"], &[]);
        let _ = graph.apps.insert("api".into(), app(&["ghost"], &[], &[]));
        assert!(active_apps(&graph).is_err());
    }

    #[test]
    fn active_libs_reads_app_lib_sets() {
        let mut graph = SpecGraph::default();
        let _ = graph.apps.insert("api".into(), app(&[], &["core", "utils"], &[]));
        let active = active_libs(&graph);
        assert_eq!(active.len(), 2);
        assert!(active.contains("core"));
        assert!(active.contains("utils"));
    }

    #[test]
    fn active_services_unions_apps_and_bundles() {
        let mut graph = graph_with_bundle(&["api"], &["nginx"]);
        let _ = graph.apps.insert("api".into(), app(&[], &[], &["postgres"]));
        let active = active_services(&graph);
        assert!(active.contains("postgres"));
        assert!(active.contains("nginx"));
    }
}
