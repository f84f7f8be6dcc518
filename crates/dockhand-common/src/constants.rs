//! System-wide constants and default paths.

/// Default path of the user configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/dockhand/config.yml";

/// Default root directory for managed repository checkouts.
pub const DEFAULT_REPOS_DIR: &str = "/etc/dockhand/repos";

/// Default file name of the specification document.
pub const DEFAULT_SPECS_FILE: &str = "dockhand.yml";

/// Configuration key holding the activated bundle list.
pub const CONFIG_BUNDLES_KEY: &str = "bundles";

/// Configuration keys recognized by `dockhand config`.
pub const CONFIG_KEY_WHITELIST: &[&str] = &["bundles", "specs_repo", "repo_overrides", "repos_dir"];

/// Application name used in CLI output and log messages.
pub const APP_NAME: &str = "dockhand";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "dockhand";
