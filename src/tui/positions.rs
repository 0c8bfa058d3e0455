//! Position index
//!
//! Flattens the namespace → pods tree into display rows under the current
//! collapse state. The index is rebuilt from scratch on every structural
//! change (refresh, fold, unfold, resize) and never patched incrementally.
//!
//! Row order: namespaces in source order; for each unfolded namespace, its
//! error row (if any) and then its pods in source order. Folded namespaces
//! contribute only their own row.

use super::app::state::CollapseState;
use super::constants::{
    NAME_COL_MIN_WIDTH, NAMESPACE_NAME_MARGIN, POD_NAME_MARGIN, STATUS_COL_MIN_WIDTH,
    STATUS_MARGIN,
};
use crate::models::{Namespace, Pod};
use std::sync::Arc;

/// What occupies a display row
///
/// Each variant holds indices into the tree the index was built from, so a
/// row can never map to more than one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Namespace(usize),
    Error(usize),
    Pod { namespace: usize, pod: usize },
}

/// The entity behind a display row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    Namespace(&'a Namespace),
    Pod(&'a Pod),
    Error(&'a str),
}

impl Entity<'_> {
    pub fn to_selection(self) -> Selection {
        match self {
            Entity::Namespace(ns) => Selection::Namespace(ns.name.clone()),
            Entity::Pod(pod) => Selection::Pod(pod.clone()),
            Entity::Error(message) => Selection::Error(message.to_string()),
        }
    }
}

/// Owned copy of an [`Entity`], for use outside the dashboard lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Namespace(String),
    Pod(Pod),
    Error(String),
}

/// Row → entity mapping plus the column widths derived from visible content
#[derive(Debug, Clone)]
pub struct PositionIndex {
    tree: Arc<[Namespace]>,
    rows: Vec<Row>,
    name_width: usize,
    status_width: usize,
}

impl PositionIndex {
    /// Build the index for `tree` under `collapse`
    pub fn build(tree: Arc<[Namespace]>, collapse: &CollapseState) -> Self {
        let mut rows = Vec::new();
        let mut name_width = NAME_COL_MIN_WIDTH;
        let mut status_width = STATUS_COL_MIN_WIDTH;

        for (ns_idx, ns) in tree.iter().enumerate() {
            rows.push(Row::Namespace(ns_idx));
            name_width = name_width.max(display_len(&ns.name) + NAMESPACE_NAME_MARGIN);

            if collapse.is_folded(&ns.name) {
                continue;
            }

            if ns.error.is_some() {
                rows.push(Row::Error(ns_idx));
            }

            for (pod_idx, pod) in ns.pods.iter().enumerate() {
                rows.push(Row::Pod {
                    namespace: ns_idx,
                    pod: pod_idx,
                });
                name_width = name_width.max(display_len(&pod.name) + POD_NAME_MARGIN);
                status_width = status_width.max(display_len(&pod.status) + STATUS_MARGIN);
            }
        }

        tracing::trace!(
            rows = rows.len(),
            name_width,
            status_width,
            "Rebuilt position index"
        );

        Self {
            tree,
            rows,
            name_width,
            status_width,
        }
    }

    /// An index over an empty tree
    pub fn empty() -> Self {
        Self::build(
            Arc::from(Vec::<Namespace>::new()),
            &CollapseState::default(),
        )
    }

    /// Highest valid row, `None` when there are no rows at all
    pub fn last_index(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the NAME column (also the offset of READY)
    pub fn name_width(&self) -> usize {
        self.name_width
    }

    /// Width of the STATUS column
    pub fn status_width(&self) -> usize {
        self.status_width
    }

    /// Resolve a row to its entity; rows past the end resolve to `None`
    pub fn resolve(&self, row: usize) -> Option<Entity<'_>> {
        let entity = match *self.rows.get(row)? {
            Row::Namespace(ns) => Entity::Namespace(&self.tree[ns]),
            Row::Error(ns) => Entity::Error(self.tree[ns].error.as_deref()?),
            Row::Pod { namespace, pod } => Entity::Pod(&self.tree[namespace].pods[pod]),
        };
        Some(entity)
    }

    pub fn namespace_at(&self, row: usize) -> Option<&Namespace> {
        match self.resolve(row)? {
            Entity::Namespace(ns) => Some(ns),
            _ => None,
        }
    }

    pub fn pod_at(&self, row: usize) -> Option<&Pod> {
        match self.resolve(row)? {
            Entity::Pod(pod) => Some(pod),
            _ => None,
        }
    }

    pub fn error_at(&self, row: usize) -> Option<&str> {
        match self.resolve(row)? {
            Entity::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for PositionIndex {
    fn default() -> Self {
        Self::empty()
    }
}

/// Display length in characters
pub(crate) fn display_len(text: &str) -> usize {
    text.chars().count()
}
