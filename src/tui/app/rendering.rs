//! Render dispatching
//!
//! Scenes are computed under the state lock and presented after it is
//! released. The renderer lock is taken first so two redraws never
//! interleave their draw calls.

use super::core::Dashboard;
use super::state::DashboardState;
use crate::tui::renderer::{RenderError, Renderer};
use crate::tui::views::{DrawOp, Scene, render_header, render_pod_list, render_status_area};

impl<R: Renderer> Dashboard<R> {
    /// Full redraw: header, body, status area, cursor
    pub fn redraw_all(&self) -> Result<(), RenderError> {
        let mut renderer = self.lock_renderer();
        let scene = {
            let mut state = self.lock_state();
            self.full_scene(&mut state)
        };
        scene.present(&mut *renderer)
    }

    /// Cursor-only redraw: refresh the status area and move the cursor
    pub(crate) fn redraw_cursor(&self) -> Result<(), RenderError> {
        let mut renderer = self.lock_renderer();
        let scene = {
            let state = self.lock_state();
            Scene {
                clear: false,
                ops: self.status_ops(&state),
                cursor: (state.cursor.x, state.cursor.y),
            }
        };
        scene.present(&mut *renderer)
    }

    /// Compute a full scene, updating the bottom border and re-clamping the cursor
    pub(crate) fn full_scene(&self, state: &mut DashboardState) -> Scene {
        let mut ops = render_header(
            &state.header,
            &state.refresh,
            &state.positions,
            &self.theme,
        );

        let frame = render_pod_list(&state.positions, &state.viewport, &self.theme);
        ops.extend(frame.ops);
        state.viewport.bottom_border = frame.bottom_border;
        state.clamp_cursor();

        ops.extend(self.status_ops(state));

        tracing::trace!(
            scroll_offset = state.viewport.scroll_offset,
            bottom_border = state.viewport.bottom_border,
            cursor_y = state.cursor.y,
            ops = ops.len(),
            "Computed full scene"
        );

        Scene {
            clear: true,
            ops,
            cursor: (state.cursor.x, state.cursor.y),
        }
    }

    fn status_ops(&self, state: &DashboardState) -> Vec<DrawOp> {
        render_status_area(
            state.entity_at_cursor(),
            &state.collapse,
            &state.viewport,
            &self.theme,
            self.show_help,
        )
    }
}
