//! Deployment ordering using `petgraph`.
//!
//! Builds a directed graph over the surviving apps' app-dependency
//! relation and resolves a start order in which every dependency comes
//! up before its dependents.

use std::collections::BTreeMap;

use dockhand_common::error::{DockhandError, Result};
use dockhand_specs::model::SpecGraph;

/// Returns the surviving apps in deployment order, dependencies first.
///
/// # Errors
///
/// Returns [`DockhandError::CyclicDependency`] if the app relation
/// contains a cycle.
pub fn deployment_order(graph: &SpecGraph) -> Result<Vec<String>> {
    let mut dag = petgraph::Graph::<String, ()>::new();
    let mut nodes = BTreeMap::new();

    for name in graph.apps.keys() {
        let _ = nodes.insert(name.clone(), dag.add_node(name.clone()));
    }
    for (name, spec) in &graph.apps {
        for dep in &spec.depends.apps {
            // Edge points from dependency to dependent so the
            // topological sort yields dependencies first.
            if let (Some(&dependent), Some(&dependency)) = (nodes.get(name), nodes.get(dep)) {
                let _ = dag.add_edge(dependency, dependent, ());
            }
        }
    }

    match petgraph::algo::toposort(&dag, None) {
        Ok(indices) => Ok(indices
            .iter()
            .filter_map(|&idx| dag.node_weight(idx).cloned())
            .collect()),
        Err(cycle) => Err(DockhandError::CyclicDependency {
            cycle: dag
                .node_weight(cycle.node_id())
                .cloned()
                .into_iter()
                .collect(),
        }),
    }
}
