//! Constants used throughout the TUI module
//!
//! This module centralizes magic numbers to reduce duplication
//! and make values easier to maintain.

/// Minimum width of the NAME column
pub const NAME_COL_MIN_WIDTH: usize = 20;

/// Minimum width of the STATUS column
pub const STATUS_COL_MIN_WIDTH: usize = 8;

/// Padding added after a namespace name when sizing the NAME column
pub const NAMESPACE_NAME_MARGIN: usize = 2;

/// Padding added after a pod name (includes its indent) when sizing the NAME column
pub const POD_NAME_MARGIN: usize = 5;

/// Padding added after a pod status when sizing the STATUS column
pub const STATUS_MARGIN: usize = 3;

/// Fixed width of the READY column
pub const READY_COL_WIDTH: u16 = 7;

/// Fixed width of the RESTARTS column
pub const RESTARTS_COL_WIDTH: u16 = 10;

/// Indent of pod names and namespace errors under their namespace
pub const CHILD_INDENT: u16 = 3;

/// Screen row of the first body line (the cursor's top border)
pub const INFO_AREA_START: u16 = 5;

/// Number of rows reserved at the bottom for the status area
pub const STATUS_AREA_HEIGHT: u16 = 5;

/// Screen row of the NAMESPACE column title
pub const NAMESPACE_TITLE_ROW: u16 = 3;

/// Screen row of the pod column titles
pub const COLUMN_TITLE_ROW: u16 = 4;
