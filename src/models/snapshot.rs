//! Refresh snapshots

use super::Namespace;
use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// The complete result of one refresh
///
/// Applied atomically: the dashboard swaps its whole tree for `namespaces`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub namespaces: Vec<Namespace>,
    /// Set to `None` until the first refresh completes
    pub fetched_at: Option<DateTime<FixedOffset>>,
    /// How long the refresh took
    pub elapsed: Duration,
}

impl Snapshot {
    pub fn new(
        namespaces: Vec<Namespace>,
        fetched_at: DateTime<FixedOffset>,
        elapsed: Duration,
    ) -> Self {
        Self {
            namespaces,
            fetched_at: Some(fetched_at),
            elapsed,
        }
    }

    /// State before anything has been fetched
    pub fn empty() -> Self {
        Self {
            namespaces: Vec::new(),
            fetched_at: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn pod_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.pods.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.namespaces.iter().filter(|ns| ns.error.is_some()).count()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
