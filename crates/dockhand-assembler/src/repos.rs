//! Repository inventory and container co-location queries.
//!
//! Answers which source trees end up inside which container: an app or
//! lib is packaged together with every lib it transitively depends on,
//! so their repos are synchronized into the same container.

use std::collections::BTreeSet;

use dockhand_common::config::DockhandConfig;
use dockhand_common::error::Result;
use dockhand_specs::model::SpecGraph;
use dockhand_specs::repo::Repo;

/// Returns the repo of the named app or lib, if it declares one.
///
/// # Errors
///
/// Returns [`dockhand_common::error::DockhandError::MissingReference`]
/// if the name is neither an app nor a lib.
pub fn repo_of(name: &str, graph: &SpecGraph) -> Result<Option<Repo>> {
    let spec = graph.app_or_lib(name)?;
    Ok(spec.repo.as_deref().map(Repo::new))
}

/// Returns every repo guaranteed to live in the same container as the
/// named app or lib: its own repo plus the repo of every lib in its
/// expanded `depends.libs`.
///
/// The graph must already be library-expanded. Specs without a repo
/// contribute nothing; duplicate locations collapse.
///
/// # Errors
///
/// Returns an error if the name or any of its lib dependencies is
/// undefined.
pub fn same_container_repos(name: &str, graph: &SpecGraph) -> Result<BTreeSet<Repo>> {
    let spec = graph.app_or_lib(name)?;
    let mut repos = BTreeSet::new();
    if let Some(repo) = spec.repo.as_deref() {
        let _ = repos.insert(Repo::new(repo));
    }
    for lib_name in &spec.depends.libs {
        if let Some(repo) = repo_of(lib_name, graph)? {
            let _ = repos.insert(repo);
        }
    }
    Ok(repos)
}

/// Returns the repo holding the specification documents themselves.
#[must_use]
pub fn specs_repo(config: &DockhandConfig) -> Repo {
    Repo::new(config.specs_repo.as_str())
}

/// Returns every repo declared by any app or lib in the graph,
/// optionally including the specs repo.
#[must_use]
pub fn all_repos(graph: &SpecGraph, config: &DockhandConfig, include_specs_repo: bool) -> BTreeSet<Repo> {
    let mut repos = BTreeSet::new();
    if include_specs_repo && !config.specs_repo.is_empty() {
        let _ = repos.insert(specs_repo(config));
    }
    for (_, spec) in graph.apps_and_libs() {
        if let Some(repo) = spec.repo.as_deref() {
            let _ = repos.insert(Repo::new(repo));
        }
    }
    repos
}

#[cfg(test)]
mod tests {
    use dockhand_specs::model::{ComponentSpec, Depends};

    use super::*;

    fn component(repo: Option<&str>, libs: &[&str]) -> ComponentSpec {
        ComponentSpec {
            depends: Depends {
                libs: libs.iter().map(ToString::to_string).collect(),
                ..Depends::default()
            },
            repo: repo.map(ToString::to_string),
            ..ComponentSpec::default()
        }
    }

    /// api (repo r-api) with expanded libs {l1, l2}; l1 and l2 share a repo.
    fn expanded_graph() -> SpecGraph {
        let mut graph = SpecGraph::default();
        let _ = graph
            .apps
            .insert("api".into(), component(Some("github.com/x/api"), &["l1", "l2"]));
        let _ = graph
            .libs
            .insert("l1".into(), component(Some("github.com/x/shared"), &[]));
        let _ = graph
            .libs
            .insert("l2".into(), component(Some("github.com/x/shared"), &[]));
        let _ = graph.libs.insert("l3".into(), component(None, &[]));
        graph
    }

    #[test]
    fn co_located_repos_collapse_duplicates() {
        let graph = expanded_graph();
        let repos = same_container_repos("api", &graph).expect("should resolve");
        assert_eq!(repos.len(), 2);
        assert!(repos.contains(&Repo::new("github.com/x/api")));
        assert!(repos.contains(&Repo::new("github.com/x/shared")));
    }

    #[test]
    fn lib_without_repo_is_skipped() {
        let mut graph = expanded_graph();
        if let Some(api) = graph.apps.get_mut("api") {
            let _ = api.depends.libs.insert("l3".into());
        }
        let repos = same_container_repos("api", &graph).expect("should resolve");
        assert_eq!(repos.len(), 2);
    }

    #[test]
    fn unknown_component_fails() {
        let graph = expanded_graph();
        assert!(same_container_repos("ghost", &graph).is_err());
        assert!(repo_of("ghost", &graph).is_err());
    }

    #[test]
    fn repo_of_lib_resolves_through_libs_mapping() {
        let graph = expanded_graph();
        let repo = repo_of("l1", &graph).expect("should resolve");
        assert_eq!(repo, Some(Repo::new("github.com/x/shared")));
        assert_eq!(repo_of("l3", &graph).expect("should resolve"), None);
    }

    #[test]
    fn all_repos_spans_apps_libs_and_specs_repo() {
        let graph = expanded_graph();
        let config = DockhandConfig {
            specs_repo: "github.com/x/specs".into(),
            ..DockhandConfig::default()
        };
        let with_specs = all_repos(&graph, &config, true);
        assert_eq!(with_specs.len(), 3);
        assert!(with_specs.contains(&Repo::new("github.com/x/specs")));

        let without_specs = all_repos(&graph, &config, false);
        assert_eq!(without_specs.len(), 2);
    }
}
