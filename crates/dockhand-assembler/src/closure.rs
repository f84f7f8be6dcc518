//! Transitive closure of a named dependency relation.
//!
//! The walk is pure: it reads the graph and never mutates a spec.
//! Each recursive step resolves a dependency within its own kind, so a
//! lib's further libs are looked up in the `libs` mapping even when the
//! root is an app.

use std::collections::BTreeSet;

use dockhand_common::error::{DockhandError, Result};
use dockhand_specs::model::{DepKind, SpecGraph};

/// Computes the full `dep` closure of `name`, where `name` is resolved
/// in the `root` component mapping.
///
/// The result never contains `name` itself. Duplicate edges collapse;
/// traversal order does not affect the result.
///
/// # Errors
///
/// Returns [`DockhandError::MissingReference`] if `name` or any
/// transitive dependency is absent from its mapping, and
/// [`DockhandError::CyclicDependency`] if the relation revisits a name
/// already on the traversal path.
pub fn closure(
    graph: &SpecGraph,
    root: DepKind,
    name: &str,
    dep: DepKind,
) -> Result<BTreeSet<String>> {
    let mut path = Vec::new();
    walk(graph, root, name, dep, &mut path)
}

fn walk(
    graph: &SpecGraph,
    root: DepKind,
    name: &str,
    dep: DepKind,
    path: &mut Vec<String>,
) -> Result<BTreeSet<String>> {
    let spec =
        graph
            .components(root)
            .get(name)
            .ok_or_else(|| DockhandError::MissingReference {
                kind: root.as_str(),
                name: name.to_owned(),
            })?;

    let direct = spec.depends.get(dep);
    let mut all = direct.clone();

    path.push(name.to_owned());
    for dependency in direct {
        if let Some(start) = path.iter().position(|seen| seen == dependency) {
            let mut cycle: Vec<String> = path[start..].to_vec();
            cycle.push(dependency.clone());
            return Err(DockhandError::CyclicDependency { cycle });
        }
        all.extend(walk(graph, dep, dependency, dep, path)?);
    }
    let _ = path.pop();

    Ok(all)
}
