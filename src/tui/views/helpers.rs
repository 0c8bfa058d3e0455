//! Common helper functions for view rendering
//!
//! This module provides reusable functions to reduce duplication across views.

/// Convert a computed column offset to a screen coordinate
///
/// Offsets past the edge of any real terminal saturate; the renderer clips them.
pub fn to_column(offset: usize) -> u16 {
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Blank text covering a whole screen row
pub fn blank_line(width: u16) -> String {
    " ".repeat(usize::from(width))
}

/// Format a refresh duration the way the header shows it, e.g. `1.25s`
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    format!("{:.2?}", elapsed)
}
