//! Dashboard state ownership and the serialization point
//!
//! All mutable state sits behind one mutex. Writers (refresh ticks, user
//! commands, resizes) take it, mutate, rebuild the position index, and
//! release it before any terminal I/O happens. Redraws take the renderer lock
//! first and the state lock only long enough to compute a scene; the state
//! lock is never held while waiting for the renderer lock.

use super::state::{CursorState, DashboardState, HeaderInfo};
use crate::models::Snapshot;
use crate::tui::positions::Selection;
use crate::tui::renderer::{RenderError, Renderer};
use crate::tui::theme::Theme;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The live dashboard: state, theme, and the renderer it draws to
pub struct Dashboard<R: Renderer> {
    pub(crate) state: Mutex<DashboardState>,
    pub(crate) renderer: Mutex<R>,
    pub(crate) theme: Theme,
    pub(crate) show_help: bool,
}

impl<R: Renderer> Dashboard<R> {
    /// Create a dashboard sized to the renderer's surface
    pub fn new(renderer: R, header: HeaderInfo, theme: Theme) -> Result<Self, RenderError> {
        let (width, height) = renderer.size()?;
        tracing::debug!(width, height, "Creating dashboard");
        Ok(Self {
            state: Mutex::new(DashboardState::new(header, width, height)),
            renderer: Mutex::new(renderer),
            theme,
            show_help: true,
        })
    }

    /// Toggle the key help line on the last row
    pub fn with_help_line(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    pub(crate) fn lock_state(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn lock_renderer(&self) -> MutexGuard<'_, R> {
        self.renderer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the whole entity tree with a new snapshot and redraw
    pub fn apply_snapshot(&self, snapshot: Snapshot) -> Result<(), RenderError> {
        {
            let mut state = self.lock_state();
            tracing::debug!(
                namespaces = snapshot.namespaces.len(),
                pods = snapshot.pod_count(),
                errors = snapshot.error_count(),
                elapsed_ms = snapshot.elapsed.as_millis() as u64,
                "Applying snapshot"
            );
            state.replace_tree(snapshot);
        }
        self.redraw_all()
    }

    /// React to a terminal size change
    pub fn resize(&self, width: u16, height: u16) -> Result<(), RenderError> {
        {
            let mut state = self.lock_state();
            tracing::debug!(width, height, "Terminal resized");
            state.viewport.width = width;
            state.viewport.height = height;
            state.rebuild_positions();
        }
        self.redraw_all()
    }

    /// Owned copy of the entity under the cursor
    pub fn selected(&self) -> Option<Selection> {
        let state = self.lock_state();
        state.entity_at_cursor().map(|entity| entity.to_selection())
    }

    pub fn cursor(&self) -> CursorState {
        self.lock_state().cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.lock_state().viewport.scroll_offset
    }

    /// Absolute row under the cursor
    pub fn cursor_row(&self) -> usize {
        self.lock_state().cursor_row()
    }

    /// Highest valid row of the current index, `None` when empty
    pub fn last_index(&self) -> Option<usize> {
        self.lock_state().positions.last_index()
    }

    /// Current (name, status) column widths
    pub fn column_widths(&self) -> (usize, usize) {
        let state = self.lock_state();
        (state.positions.name_width(), state.positions.status_width())
    }

    pub fn is_folded(&self, namespace: &str) -> bool {
        self.lock_state().collapse.is_folded(namespace)
    }

    /// Last screen row populated by the latest redraw
    pub fn bottom_border(&self) -> u16 {
        self.lock_state().viewport.bottom_border
    }

    /// Run `f` with shared access to the renderer
    pub fn with_renderer<T>(&self, f: impl FnOnce(&R) -> T) -> T {
        let renderer = self.lock_renderer();
        f(&renderer)
    }
}
