//! TUI view components
//!
//! Each component turns a slice of dashboard state into draw operations for
//! one region of the screen: the header rows, the pod list body, and the
//! status area. Views never touch the renderer; the dispatcher in
//! `app/rendering.rs` collects their output into a [`Scene`] and presents it.

mod header;
mod helpers;
mod pod_list;
mod status;

pub use header::*;
pub use helpers::*;
pub use pod_list::*;
pub use status::*;

use crate::tui::renderer::{RenderError, Renderer};
use ratatui::style::Color;

/// One `draw` call for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub text: String,
    pub x: u16,
    pub y: u16,
    pub fg: Color,
    pub bg: Color,
}

impl DrawOp {
    pub fn new(text: impl Into<String>, x: u16, y: u16, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            fg,
            bg,
        }
    }
}

/// Everything one redraw sends to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    /// Blank the surface before drawing
    pub clear: bool,
    pub ops: Vec<DrawOp>,
    pub cursor: (u16, u16),
}

impl Scene {
    /// Issue the scene as clear / draws / cursor / flush
    pub fn present<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<(), RenderError> {
        if self.clear {
            renderer.clear()?;
        }
        for op in &self.ops {
            renderer.draw(&op.text, op.x, op.y, op.fg, op.bg);
        }
        renderer.set_cursor(self.cursor.0, self.cursor.1);
        renderer.flush()
    }

    /// Text drawn on screen row `y`, in draw order
    pub fn texts_on_row(&self, y: u16) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| op.y == y)
            .map(|op| op.text.as_str())
            .collect()
    }
}
