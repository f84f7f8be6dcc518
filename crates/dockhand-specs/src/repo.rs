//! Source repository identity and checkout paths.
//!
//! A repo is identified by its location string; two handles with the
//! same location are the same repo regardless of where the checkout
//! lives on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use dockhand_common::config::DockhandConfig;
use serde::{Deserialize, Serialize};

/// Handle to a source repository, identified by location.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Repo(String);

impl Repo {
    /// Creates a repo handle from a location string.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Returns the repo location string.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.0
    }

    /// Returns the final path component of the location, with any
    /// `.git` suffix stripped.
    #[must_use]
    pub fn short_name(&self) -> &str {
        let tail = self.0.rsplit('/').next().unwrap_or(&self.0);
        tail.strip_suffix(".git").unwrap_or(tail)
    }

    /// Returns the managed checkout path under `repos_dir`.
    ///
    /// The full location is flattened into a single directory name so
    /// that repos with the same short name cannot collide.
    #[must_use]
    pub fn managed_path(&self, repos_dir: &Path) -> PathBuf {
        let flattened: String = self
            .0
            .chars()
            .map(|c| if c == '/' || c == ':' { '_' } else { c })
            .collect();
        repos_dir.join(flattened)
    }

    /// Returns the local checkout path, honoring any configured
    /// per-repo override.
    #[must_use]
    pub fn local_path(&self, config: &DockhandConfig) -> PathBuf {
        config
            .repo_overrides
            .get(&self.0)
            .cloned()
            .unwrap_or_else(|| self.managed_path(&config.repos_dir))
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
