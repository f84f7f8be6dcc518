//! Unified error types for the dockhand workspace.
//!
//! Resolution errors are unrecoverable: any of them aborts the current
//! graph assembly and propagates to the caller, which presents them to
//! the end user. No partial graph survives a failed assembly.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A `depends` entry names a spec absent from the graph.
    #[error("{kind} {name} was referenced but not found")]
    MissingReference {
        /// Spec type of the missing entry ("bundles", "apps", "libs", "services").
        kind: &'static str,
        /// Name of the missing entry.
        name: String,
    },

    /// A configured bundle name does not exist in the specification graph.
    #[error("bundle \"{name}\" is activated in the configuration but not defined in the specs")]
    UnknownBundle {
        /// The unknown bundle name.
        name: String,
    },

    /// The dependency relation contains a cycle.
    #[error("cyclic dependency detected: {}", .cycle.join(" -> "))]
    CyclicDependency {
        /// Names along the cycle, first name repeated at the end.
        cycle: Vec<String>,
    },

    /// YAML deserialization failed.
    #[error("YAML error: {source}")]
    Yaml {
        /// Underlying YAML error.
        #[from]
        source: serde_yaml::Error,
    },

    /// JSON serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DockhandError>;
