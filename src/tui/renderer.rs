//! Renderer capability
//!
//! The dashboard never talks to the terminal directly. It issues one `clear`,
//! a bounded sequence of `draw` calls and one `flush` per redraw through this
//! trait, which lets the core run against a test backend.

use ratatui::{
    Terminal,
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
};

/// Renderer failures
///
/// These are fatal: the dashboard cannot continue without a drawable surface.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal surface unavailable: {0}")]
    Unavailable(String),
}

/// Character-cell drawing surface
#[cfg_attr(test, mockall::automock)]
pub trait Renderer: Send {
    /// Current surface size as (width, height)
    fn size(&self) -> Result<(u16, u16), RenderError>;

    /// Blank the whole surface
    fn clear(&mut self) -> Result<(), RenderError>;

    /// Write `text` starting at (`x`, `y`); anything off the surface is clipped
    fn draw(&mut self, text: &str, x: u16, y: u16, fg: Color, bg: Color);

    /// Where the terminal cursor is shown after the next flush
    fn set_cursor(&mut self, x: u16, y: u16);

    /// Push everything drawn so far to the screen
    fn flush(&mut self) -> Result<(), RenderError>;
}

/// [`Renderer`] on top of a ratatui [`Terminal`]
///
/// Draw calls go to an off-screen canvas that is copied into a frame on
/// `flush`, so ratatui only writes the cells that changed.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Buffer,
    cursor: Option<Position>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Result<Self, RenderError> {
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            canvas: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            cursor: None,
        })
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend + Send> Renderer for TerminalRenderer<B> {
    fn size(&self) -> Result<(u16, u16), RenderError> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn clear(&mut self) -> Result<(), RenderError> {
        let (width, height) = self.size()?;
        self.canvas = Buffer::empty(Rect::new(0, 0, width, height));
        Ok(())
    }

    fn draw(&mut self, text: &str, x: u16, y: u16, fg: Color, bg: Color) {
        let area = self.canvas.area;
        if x >= area.width || y >= area.height {
            return;
        }
        let max_width = usize::from(area.width - x);
        self.canvas
            .set_stringn(x, y, text, max_width, Style::default().fg(fg).bg(bg));
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some(Position::new(x, y));
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        let canvas = &self.canvas;
        let cursor = self.cursor;
        self.terminal.draw(|frame| {
            let buffer = frame.buffer_mut();
            let area = buffer.area.intersection(canvas.area);
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    if let (Some(dst), Some(src)) = (buffer.cell_mut((x, y)), canvas.cell((x, y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
            if let Some(position) = cursor {
                if area.contains(position) {
                    frame.set_cursor_position(position);
                }
            }
        })?;
        Ok(())
    }
}
