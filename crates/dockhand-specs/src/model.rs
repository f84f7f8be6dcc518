//! The specification graph and its per-kind records.
//!
//! A raw graph arrives from a [`crate::source::SpecSource`] already
//! schema-validated. The assembler mutates it in place (library
//! expansion, active-set filtering, asset aggregation); downstream
//! consumers treat the result as read-only.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use dockhand_common::error::{DockhandError, Result};
use serde::{Deserialize, Serialize};

/// The four spec mappings a graph holds.
///
/// Replaces dispatch-by-name: each kind carries its own active-set
/// strategy in the assembler, checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecKind {
    /// User-selectable named groups of apps and services.
    Bundles,
    /// Deployable units with dependencies on apps, libs, and services.
    Apps,
    /// Shared library units that may depend on other libs.
    Libs,
    /// Opaque backing dependencies referenced by name only.
    Services,
}

impl SpecKind {
    /// Returns the mapping name as it appears in spec documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bundles => "bundles",
            Self::Apps => "apps",
            Self::Libs => "libs",
            Self::Services => "services",
        }
    }
}

impl fmt::Display for SpecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named dependency relation that closures traverse.
///
/// Services never carry dependencies of their own, so they are not a
/// traversable relation; their names are unioned directly by the
/// active-set computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepKind {
    /// The app-to-app dependency relation.
    Apps,
    /// The lib dependency relation (apps and libs both declare it).
    Libs,
}

impl DepKind {
    /// Returns the relation name as it appears under `depends`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apps => "apps",
            Self::Libs => "libs",
        }
    }
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direct dependency declarations of an app or lib.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depends {
    /// Names of apps this spec depends on (apps only).
    #[serde(default)]
    pub apps: BTreeSet<String>,
    /// Names of libs this spec depends on.
    #[serde(default)]
    pub libs: BTreeSet<String>,
    /// Names of backing services this spec depends on (apps only).
    #[serde(default)]
    pub services: BTreeSet<String>,
}

impl Depends {
    /// Returns the name set of the given relation.
    #[must_use]
    pub const fn get(&self, kind: DepKind) -> &BTreeSet<String> {
        match kind {
            DepKind::Apps => &self.apps,
            DepKind::Libs => &self.libs,
        }
    }

}

/// An external asset declared by an app or lib.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDecl {
    /// Asset name, unique per graph.
    pub name: String,
    /// Whether the declaring spec refuses to run without the asset.
    #[serde(default)]
    pub required: bool,
}

/// An app or shared library spec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Direct dependency declarations. The library expander replaces
    /// `depends.libs` with its transitive closure in place.
    #[serde(default)]
    pub depends: Depends,
    /// Assets this spec uses.
    #[serde(default)]
    pub assets: Vec<AssetDecl>,
    /// Location of the source repository packaged into this spec's
    /// container, if any.
    #[serde(default)]
    pub repo: Option<String>,
}

/// A user-selectable group of apps and services.
///
/// Bundle lists are direct references only and are never expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Apps this bundle activates.
    #[serde(default)]
    pub apps: Vec<String>,
    /// Services this bundle activates.
    #[serde(default)]
    pub services: Vec<String>,
}

/// A backing service. Opaque to the resolver beyond its name; the
/// payload is carried through for compose compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSpec {
    /// Arbitrary service configuration, passed through untouched.
    #[serde(flatten)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// Reverse index entry from an asset name to its declaring specs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Names of every app/lib declaring the asset.
    pub used_by: BTreeSet<String>,
    /// Subset of `used_by` that declares the asset required.
    pub required_by: BTreeSet<String>,
}

/// The root specification graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecGraph {
    /// Bundle specs by name.
    #[serde(default)]
    pub bundles: BTreeMap<String, Bundle>,
    /// App specs by name.
    #[serde(default)]
    pub apps: BTreeMap<String, ComponentSpec>,
    /// Lib specs by name.
    #[serde(default)]
    pub libs: BTreeMap<String, ComponentSpec>,
    /// Service specs by name.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceSpec>,
    /// Derived asset index, rebuilt by each aggregation pass.
    #[serde(default)]
    pub assets: BTreeMap<String, Asset>,
}

impl SpecGraph {
    /// Returns the component mapping a dependency relation resolves
    /// against: `apps` for the app relation, `libs` for the lib relation.
    #[must_use]
    pub const fn components(&self, kind: DepKind) -> &BTreeMap<String, ComponentSpec> {
        match kind {
            DepKind::Apps => &self.apps,
            DepKind::Libs => &self.libs,
        }
    }

    /// Looks up an app or lib by name, apps first.
    ///
    /// # Errors
    ///
    /// Returns [`DockhandError::MissingReference`] if neither mapping
    /// contains the name.
    pub fn app_or_lib(&self, name: &str) -> Result<&ComponentSpec> {
        self.apps
            .get(name)
            .or_else(|| self.libs.get(name))
            .ok_or_else(|| DockhandError::MissingReference {
                kind: "apps or libs",
                name: name.to_owned(),
            })
    }

    /// Iterates every app and lib spec with its name.
    pub fn apps_and_libs(&self) -> impl Iterator<Item = (&String, &ComponentSpec)> {
        self.apps.iter().chain(self.libs.iter())
    }
}
