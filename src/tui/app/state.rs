//! Application state structures
//!
//! This module contains state sub-structures that organize the dashboard's
//! fields into logical groupings. All of them live behind the single
//! dashboard lock; see `core.rs`.

use crate::models::{Namespace, Snapshot};
use crate::tui::constants::{INFO_AREA_START, STATUS_AREA_HEIGHT};
use crate::tui::positions::{Entity, PositionIndex};
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Folded flag per namespace name
///
/// Keyed by name rather than by entity so it survives refreshes. Names never
/// seen before are unfolded.
#[derive(Debug, Default, Clone)]
pub struct CollapseState {
    folded: HashMap<String, bool>,
}

impl CollapseState {
    pub fn is_folded(&self, namespace: &str) -> bool {
        self.folded.get(namespace).copied().unwrap_or(false)
    }

    /// Set the flag for one namespace, returning whether it changed
    pub fn set(&mut self, namespace: &str, folded: bool) -> bool {
        let previous = self.is_folded(namespace);
        self.folded.insert(namespace.to_string(), folded);
        previous != folded
    }

    /// Set the flag for every given namespace unconditionally
    pub fn set_all<'a>(&mut self, namespaces: impl IntoIterator<Item = &'a str>, folded: bool) {
        for namespace in namespaces {
            self.folded.insert(namespace.to_string(), folded);
        }
    }
}

/// Scroll position and drawable window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// First row of the position index shown at the top border
    pub scroll_offset: usize,
    /// Terminal width
    pub width: u16,
    /// Terminal height
    pub height: u16,
    /// Last screen row populated by the previous redraw
    pub bottom_border: u16,
}

impl ViewportState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            scroll_offset: 0,
            width,
            height,
            bottom_border: INFO_AREA_START,
        }
    }

    /// Screen row of the first body line
    pub fn top_border(&self) -> u16 {
        INFO_AREA_START
    }

    /// First screen row that belongs to the status area
    pub fn status_area_start(&self) -> u16 {
        self.height.saturating_sub(STATUS_AREA_HEIGHT)
    }

    /// Number of body lines that fit between the header and the status area
    pub fn drawable_height(&self) -> u16 {
        self.status_area_start().saturating_sub(self.top_border())
    }

    /// Absolute row shown at screen row `y`
    pub fn row_at(&self, y: u16) -> usize {
        usize::from(y.saturating_sub(self.top_border())) + self.scroll_offset
    }
}

/// On-screen cursor coordinate
///
/// `y` is a screen row, not a row index; see [`ViewportState::row_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    pub x: u16,
    pub y: u16,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0,
            y: INFO_AREA_START,
        }
    }
}

/// Values shown in the header rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Name of the namespace group being shown
    pub group: String,
    /// Kubernetes context name
    pub context: String,
}

impl HeaderInfo {
    pub fn new(group: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            context: context.into(),
        }
    }
}

/// Timing of the snapshot currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshInfo {
    pub fetched_at: Option<DateTime<FixedOffset>>,
    pub elapsed: Duration,
}

/// Everything guarded by the dashboard lock
#[derive(Debug)]
pub struct DashboardState {
    pub header: HeaderInfo,
    pub refresh: RefreshInfo,
    pub tree: Arc<[Namespace]>,
    pub collapse: CollapseState,
    pub positions: PositionIndex,
    pub viewport: ViewportState,
    pub cursor: CursorState,
}

impl DashboardState {
    pub fn new(header: HeaderInfo, width: u16, height: u16) -> Self {
        Self {
            header,
            refresh: RefreshInfo::default(),
            tree: Arc::from(Vec::<Namespace>::new()),
            collapse: CollapseState::default(),
            positions: PositionIndex::empty(),
            viewport: ViewportState::new(width, height),
            cursor: CursorState::default(),
        }
    }

    /// Rebuild the position index from the current tree and collapse state
    pub fn rebuild_positions(&mut self) {
        self.positions = PositionIndex::build(Arc::clone(&self.tree), &self.collapse);
    }

    /// Swap in a new tree and rebuild
    pub fn replace_tree(&mut self, snapshot: Snapshot) {
        self.refresh = RefreshInfo {
            fetched_at: snapshot.fetched_at,
            elapsed: snapshot.elapsed,
        };
        self.tree = Arc::from(snapshot.namespaces);
        self.rebuild_positions();
    }

    /// Absolute row under the cursor
    pub fn cursor_row(&self) -> usize {
        self.viewport.row_at(self.cursor.y)
    }

    /// Entity under the cursor, `None` past the end of the list
    pub fn entity_at_cursor(&self) -> Option<Entity<'_>> {
        self.positions.resolve(self.cursor_row())
    }

    /// Keep the cursor between the top border and the last populated row
    pub fn clamp_cursor(&mut self) {
        let top = self.viewport.top_border();
        let bottom = self.viewport.bottom_border.max(top);
        self.cursor.y = self.cursor.y.clamp(top, bottom);
    }

    /// Scroll to the top and put the cursor on the first body line
    pub fn cursor_to_start(&mut self) {
        self.viewport.scroll_offset = 0;
        self.cursor = CursorState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pod;

    fn snapshot(names: &[&str], pods_each: usize) -> Snapshot {
        let namespaces = names
            .iter()
            .map(|name| {
                let pods = (0..pods_each)
                    .map(|i| Pod {
                        namespace: name.to_string(),
                        name: format!("{}-{}", name, i),
                        ready: 1,
                        total: 1,
                        status: "Running".to_string(),
                        restarts: "0".to_string(),
                        age: "1m".to_string(),
                    })
                    .collect();
                Namespace::new(*name, pods)
            })
            .collect();
        Snapshot {
            namespaces,
            fetched_at: None,
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_collapse_state_defaults_to_unfolded() {
        let collapse = CollapseState::default();
        assert!(!collapse.is_folded("never-seen"));
    }

    #[test]
    fn test_collapse_state_set_reports_change() {
        let mut collapse = CollapseState::default();
        assert!(collapse.set("a", true));
        assert!(!collapse.set("a", true));
        assert!(collapse.set("a", false));
        assert!(!collapse.is_folded("a"));
    }

    #[test]
    fn test_collapse_state_set_all() {
        let mut collapse = CollapseState::default();
        collapse.set_all(["a", "b"], true);
        assert!(collapse.is_folded("a"));
        assert!(collapse.is_folded("b"));
        collapse.set_all(["a", "b"], false);
        assert!(!collapse.is_folded("a"));
        assert!(!collapse.is_folded("b"));
    }

    #[test]
    fn test_viewport_geometry() {
        let viewport = ViewportState::new(80, 24);
        assert_eq!(viewport.top_border(), 5);
        assert_eq!(viewport.status_area_start(), 19);
        assert_eq!(viewport.drawable_height(), 14);
    }

    #[test]
    fn test_viewport_tiny_terminal_has_no_drawable_rows() {
        let viewport = ViewportState::new(80, 8);
        assert_eq!(viewport.drawable_height(), 0);
    }

    #[test]
    fn test_row_at_accounts_for_scroll() {
        let mut viewport = ViewportState::new(80, 24);
        assert_eq!(viewport.row_at(5), 0);
        assert_eq!(viewport.row_at(7), 2);
        viewport.scroll_offset = 10;
        assert_eq!(viewport.row_at(7), 12);
    }

    #[test]
    fn test_clamp_cursor_to_bottom_border() {
        let mut state = DashboardState::new(HeaderInfo::default(), 80, 24);
        state.viewport.bottom_border = 7;
        state.cursor.y = 12;
        state.clamp_cursor();
        assert_eq!(state.cursor.y, 7);
    }

    #[test]
    fn test_clamp_cursor_never_above_top_border() {
        let mut state = DashboardState::new(HeaderInfo::default(), 80, 24);
        state.viewport.bottom_border = 2;
        state.cursor.y = 9;
        state.clamp_cursor();
        assert_eq!(state.cursor.y, INFO_AREA_START);
    }

    #[test]
    fn test_collapse_state_survives_tree_replacement() {
        let mut state = DashboardState::new(HeaderInfo::default(), 80, 24);
        state.replace_tree(snapshot(&["a", "b"], 2));
        assert_eq!(state.positions.len(), 6);

        state.collapse.set("a", true);
        state.rebuild_positions();
        assert_eq!(state.positions.len(), 4);

        state.replace_tree(snapshot(&["a", "b", "c"], 2));
        assert!(state.collapse.is_folded("a"));
        assert_eq!(state.positions.len(), 7);
    }

    #[test]
    fn test_cursor_to_start() {
        let mut state = DashboardState::new(HeaderInfo::default(), 80, 24);
        state.viewport.scroll_offset = 4;
        state.cursor.y = 9;
        state.cursor_to_start();
        assert_eq!(state.viewport.scroll_offset, 0);
        assert_eq!(state.cursor, CursorState::default());
    }
}
