//! User configuration model.
//!
//! The configuration selects which bundles are active and where
//! specification and source repositories live. Unknown keys are
//! rejected so that a typo in `bundles` cannot silently deactivate
//! an environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DockhandError, Result};

/// Root configuration for dockhand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DockhandConfig {
    /// Bundle names to activate, in the order the user listed them.
    #[serde(default)]
    pub bundles: Vec<String>,

    /// Location of the repository holding the specification documents.
    #[serde(default)]
    pub specs_repo: String,

    /// Per-repository local path overrides, keyed by repo location.
    #[serde(default)]
    pub repo_overrides: BTreeMap<String, PathBuf>,

    /// Root directory for managed repository checkouts.
    #[serde(default = "default_repos_dir")]
    pub repos_dir: PathBuf,
}

fn default_repos_dir() -> PathBuf {
    PathBuf::from(crate::constants::DEFAULT_REPOS_DIR)
}

impl Default for DockhandConfig {
    fn default() -> Self {
        Self {
            bundles: Vec::new(),
            specs_repo: String::new(),
            repo_overrides: BTreeMap::new(),
            repos_dir: default_repos_dir(),
        }
    }
}

impl DockhandConfig {
    /// Parses a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or contains
    /// unrecognized keys.
    pub fn from_yaml(document: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path).map_err(|e| DockhandError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_bundles() {
        let config = DockhandConfig::default();
        assert!(config.bundles.is_empty());
        assert_eq!(
            config.repos_dir,
            PathBuf::from(crate::constants::DEFAULT_REPOS_DIR)
        );
    }

    #[test]
    fn parses_full_document() {
        let config = DockhandConfig::from_yaml(
            "bundles: [web, jobs]\n\
             specs_repo: github.com/example/specs\n\
             repo_overrides:\n  github.com/example/api: /home/dev/api\n",
        )
        .expect("should parse");
        assert_eq!(config.bundles, vec!["web", "jobs"]);
        assert_eq!(config.specs_repo, "github.com/example/specs");
        assert_eq!(
            config.repo_overrides["github.com/example/api"],
            PathBuf::from("/home/dev/api")
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = DockhandConfig::from_yaml("bundles: [web]\n").expect("should parse");
        assert_eq!(config.bundles, vec!["web"]);
        assert!(config.specs_repo.is_empty());
        assert!(config.repo_overrides.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = DockhandConfig::from_yaml("bundel: [web]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "bundles: [web]\n").expect("write");
        let config = DockhandConfig::load(&path).expect("should load");
        assert_eq!(config.bundles, vec!["web"]);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let result = DockhandConfig::load(Path::new("/nonexistent/config.yml"));
        let msg = result.expect_err("should fail").to_string();
        assert!(msg.contains("/nonexistent/config.yml"), "got: {msg}");
    }
}
