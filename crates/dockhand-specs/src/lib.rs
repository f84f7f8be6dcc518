//! # dockhand-specs
//!
//! Data model for the declarative specification graph.
//!
//! Handles:
//! - **Model**: `SpecGraph` and the per-kind spec records (bundles,
//!   apps, libs, services) plus derived asset entries.
//! - **Repo**: source repository identity and local checkout paths.
//! - **Source**: the `SpecSource` collaborator contract that supplies
//!   raw graphs to the assembler.

pub mod model;
pub mod repo;
pub mod source;
