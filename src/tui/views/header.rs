//! Header view rendering

use super::{DrawOp, format_elapsed, to_column};
use crate::tui::app::state::{HeaderInfo, RefreshInfo};
use crate::tui::constants::{
    CHILD_INDENT, COLUMN_TITLE_ROW, NAMESPACE_TITLE_ROW, READY_COL_WIDTH, RESTARTS_COL_WIDTH,
};
use crate::tui::positions::PositionIndex;
use crate::tui::theme::Theme;

/// RFC 1123 with numeric zone, e.g. `Mon, 02 Jan 2006 15:04:05 -0700`
const RFC1123Z: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Column offsets shared by the header titles and the pod rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: u16,
    pub ready: u16,
    pub status: u16,
    pub restarts: u16,
    pub age: u16,
}

impl ColumnLayout {
    pub fn from_positions(positions: &PositionIndex) -> Self {
        let ready = to_column(positions.name_width());
        let status = ready.saturating_add(READY_COL_WIDTH);
        let restarts = status.saturating_add(to_column(positions.status_width()));
        let age = restarts.saturating_add(RESTARTS_COL_WIDTH);
        Self {
            name: CHILD_INDENT,
            ready,
            status,
            restarts,
            age,
        }
    }
}

/// Render the header rows: refresh time, group, context, and column titles
pub fn render_header(
    header: &HeaderInfo,
    refresh: &RefreshInfo,
    positions: &PositionIndex,
    theme: &Theme,
) -> Vec<DrawOp> {
    let fg = theme.text_primary;
    let bg = theme.background;

    let first_line = match refresh.fetched_at {
        Some(fetched_at) => format!(
            "{}    Time to execute: {}",
            fetched_at.format(RFC1123Z),
            format_elapsed(refresh.elapsed)
        ),
        None => "Waiting for first refresh...".to_string(),
    };

    let columns = ColumnLayout::from_positions(positions);
    vec![
        DrawOp::new(first_line, 0, 0, fg, bg),
        DrawOp::new(format!("Group: {}", header.group), 0, 1, fg, bg),
        DrawOp::new(format!("Context: {}", header.context), 0, 2, fg, bg),
        DrawOp::new("NAMESPACE", 0, NAMESPACE_TITLE_ROW, fg, bg),
        DrawOp::new("NAME", columns.name, COLUMN_TITLE_ROW, fg, bg),
        DrawOp::new("READY", columns.ready, COLUMN_TITLE_ROW, fg, bg),
        DrawOp::new("STATUS", columns.status, COLUMN_TITLE_ROW, fg, bg),
        DrawOp::new("RESTARTS", columns.restarts, COLUMN_TITLE_ROW, fg, bg),
        DrawOp::new("AGE", columns.age, COLUMN_TITLE_ROW, fg, bg),
    ]
}
