//! Pod list body rendering

use super::{ColumnLayout, DrawOp};
use crate::models::Pod;
use crate::tui::app::state::ViewportState;
use crate::tui::constants::CHILD_INDENT;
use crate::tui::positions::{Entity, PositionIndex};
use crate::tui::theme::Theme;

/// Body draw operations plus the last screen row they populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodListFrame {
    pub ops: Vec<DrawOp>,
    /// Last populated screen row; one above the top border when nothing was drawn
    pub bottom_border: u16,
}

/// Render the visible slice of the position index
///
/// Starts at the scroll offset and stops at the first row with no entity or
/// at the status area, whichever comes first. Rows are never wrapped.
pub fn render_pod_list(
    positions: &PositionIndex,
    viewport: &ViewportState,
    theme: &Theme,
) -> PodListFrame {
    let columns = ColumnLayout::from_positions(positions);
    let limit = viewport.top_border() + viewport.drawable_height();
    let mut ops = Vec::new();
    let mut row = viewport.scroll_offset;
    let mut y = viewport.top_border();

    while y < limit {
        let Some(entity) = positions.resolve(row) else {
            break;
        };
        match entity {
            Entity::Namespace(ns) => {
                ops.push(DrawOp::new(
                    ns.name.clone(),
                    0,
                    y,
                    theme.text_primary,
                    theme.background,
                ));
            }
            Entity::Pod(pod) => render_pod_row(&mut ops, pod, y, &columns, theme),
            Entity::Error(message) => {
                ops.push(DrawOp::new(
                    message,
                    CHILD_INDENT,
                    y,
                    theme.namespace_error,
                    theme.background,
                ));
            }
        }
        row += 1;
        y += 1;
    }

    PodListFrame {
        ops,
        bottom_border: y.saturating_sub(1),
    }
}

fn render_pod_row(ops: &mut Vec<DrawOp>, pod: &Pod, y: u16, columns: &ColumnLayout, theme: &Theme) {
    let fg = theme.pod_color(pod.health());
    let bg = theme.background;
    ops.push(DrawOp::new(pod.name.clone(), columns.name, y, fg, bg));
    ops.push(DrawOp::new(pod.ready_label(), columns.ready, y, fg, bg));
    ops.push(DrawOp::new(pod.status.clone(), columns.status, y, fg, bg));
    ops.push(DrawOp::new(
        pod.restarts.clone(),
        columns.restarts,
        y,
        fg,
        bg,
    ));
    ops.push(DrawOp::new(pod.age.clone(), columns.age, y, fg, bg));
}
