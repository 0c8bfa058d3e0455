//! Dashboard model layer
//!
//! Types for the namespace → pods hierarchy shown by the dashboard.
//!
//! Structure:
//! - `tree.rs` - Namespace and Pod entities
//! - `snapshot.rs` - One atomic refresh result
//! - `mod.rs` - Public API re-exports

mod snapshot;
mod tree;

pub use snapshot::Snapshot;
pub use tree::{Namespace, Pod, PodHealth};
