//! Application module
//!
//! This module contains the dashboard state and logic, organized into
//! sub-modules for better maintainability.

pub mod state;

mod async_ops;
mod core;
mod events;
mod rendering;

pub use core::*;
pub use state::{CursorState, HeaderInfo};
