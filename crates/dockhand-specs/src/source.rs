//! The `SpecSource` collaborator contract.
//!
//! How specification documents reach the process is not this crate's
//! concern; the assembler only needs something that can hand over a
//! schema-shaped [`SpecGraph`]. A YAML-document adapter is provided
//! for callers that already hold the document text.

use dockhand_common::error::Result;

use crate::model::SpecGraph;

/// Supplies raw specification graphs to the assembler.
pub trait SpecSource {
    /// Loads a fresh copy of the raw graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying documents cannot be produced
    /// or do not match the spec schema.
    fn load(&self) -> Result<SpecGraph>;
}

/// A source backed by an already-built graph. Used by tests and by
/// callers that assemble graphs programmatically.
#[derive(Debug, Clone)]
pub struct InMemorySource(pub SpecGraph);

impl SpecSource for InMemorySource {
    fn load(&self) -> Result<SpecGraph> {
        Ok(self.0.clone())
    }
}

/// A source that deserializes a single YAML specification document.
#[derive(Debug, Clone)]
pub struct YamlSource {
    document: String,
}

impl YamlSource {
    /// Creates a source from YAML document text.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl SpecSource for YamlSource {
    fn load(&self) -> Result<SpecGraph> {
        Ok(serde_yaml::from_str(&self.document)?)
    }
}
