//! # dockhand-assembler
//!
//! Reduces a raw specification graph to the minimal active subset
//! required by the configured bundles.
//!
//! Handles:
//! - **Closure**: transitive closure of a named dependency relation,
//!   with explicit cycle detection.
//! - **Active**: per-kind active-set computation from the surviving
//!   bundles.
//! - **Expand**: in-place replacement of direct lib lists with their
//!   transitive closures.
//! - **Filter**: removal of specs outside the active set.
//! - **Assets**: reverse index from asset name to declaring specs.
//! - **Pipeline**: the fixed-order assembly sequence.
//! - **Cache**: process-wide memoized graph accessors.
//! - **Repos**: repository inventory and container co-location queries.
//! - **Order**: deployment ordering of the surviving apps.

pub mod active;
pub mod assets;
pub mod cache;
pub mod closure;
pub mod expand;
pub mod filter;
pub mod order;
pub mod pipeline;
pub mod repos;
