//! Pod data providers
//!
//! A [`PodSource`] produces a complete [`Snapshot`] on every call. The
//! dashboard applies each snapshot atomically; a failed fetch leaves the
//! previous tree on screen.

mod convert;
mod kube_source;

pub use convert::*;
pub use kube_source::*;

use crate::models::Snapshot;
use async_trait::async_trait;
use std::time::Duration;

/// Errors that abort a whole refresh
///
/// Per-namespace failures do not show up here; they become error rows.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to list namespaces: {0}")]
    ListNamespaces(#[source] kube::Error),

    #[error("Listing namespaces timed out after {0:?}")]
    Timeout(Duration),
}

/// Which namespaces a refresh covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceScope {
    /// Every namespace in the cluster, listed again on each refresh
    All,
    /// A fixed list, shown in the given order
    Named(Vec<String>),
}

impl NamespaceScope {
    /// Build a fixed scope, dropping blanks and duplicates but keeping order
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            let name = name.trim();
            if !name.is_empty() && !unique.iter().any(|seen| seen == name) {
                unique.push(name.to_string());
            }
        }
        NamespaceScope::Named(unique)
    }
}

/// Supplier of complete replacement trees
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PodSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot, SourceError>;
}
