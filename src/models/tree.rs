//! Namespace and Pod entities
//!
//! Entities are immutable once built by a refresh. A whole new namespace list
//! replaces the previous one on every tick; nothing is patched in place.

use std::fmt;

/// Pod status label that counts as running for emphasis purposes
pub const RUNNING_STATUS: &str = "Running";

/// A namespace and the pods listed in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    /// Set when the pods of this namespace could not be listed
    pub error: Option<String>,
    pub pods: Vec<Pod>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self {
            name: name.into(),
            error: None,
            pods,
        }
    }

    /// A namespace whose pod listing failed
    pub fn with_error(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: Some(error.into()),
            pods: Vec::new(),
        }
    }
}

/// Display fields of a single pod
///
/// `namespace` is the owning namespace's name, never a pointer to it, so a
/// pod stays valid when the tree it came from is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    pub namespace: String,
    pub name: String,
    pub ready: u32,
    pub total: u32,
    pub status: String,
    pub restarts: String,
    pub age: String,
}

impl Pod {
    /// Readiness as shown in the READY column, e.g. `1/2`
    pub fn ready_label(&self) -> String {
        format!("{}/{}", self.ready, self.total)
    }

    /// Emphasis level derived from status and readiness only
    pub fn health(&self) -> PodHealth {
        PodHealth::classify(&self.status, self.ready, self.total)
    }
}

/// Three-level emphasis of a pod row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PodHealth {
    /// Running with every container ready
    Healthy,
    /// Running but some containers are not ready yet
    Degraded,
    /// Not running
    Failing,
}

impl PodHealth {
    pub fn classify(status: &str, ready: u32, total: u32) -> Self {
        match (status == RUNNING_STATUS, ready >= total) {
            (true, true) => PodHealth::Healthy,
            (true, false) => PodHealth::Degraded,
            (false, _) => PodHealth::Failing,
        }
    }
}

impl fmt::Display for PodHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PodHealth::Healthy => "healthy",
            PodHealth::Degraded => "degraded",
            PodHealth::Failing => "failing",
        };
        f.write_str(label)
    }
}
