//! Command handling
//!
//! Every command commits its state change and releases the dashboard lock
//! before redrawing.

use super::core::Dashboard;
use crate::tui::keybindings::Command;
use crate::tui::positions::Entity;
use crate::tui::renderer::{RenderError, Renderer};

impl<R: Renderer> Dashboard<R> {
    /// Run one command to completion, including its redraw
    ///
    /// Returns `true` when the dashboard should stop.
    pub fn handle_command(&self, command: Command) -> Result<bool, RenderError> {
        tracing::trace!(?command, "Handling command");
        match command {
            Command::Up => self.move_cursor_up()?,
            Command::Down => self.move_cursor_down()?,
            Command::Fold => self.fold()?,
            Command::Unfold => self.unfold()?,
            Command::FoldAll => self.fold_all()?,
            Command::UnfoldAll => self.unfold_all()?,
            Command::Resize(width, height) => self.resize(width, height)?,
            Command::Quit => return Ok(true),
        }
        Ok(false)
    }

    /// Fold the namespace under the cursor
    pub fn fold(&self) -> Result<(), RenderError> {
        self.set_folded_at_cursor(true)
    }

    /// Unfold the namespace under the cursor
    pub fn unfold(&self) -> Result<(), RenderError> {
        self.set_folded_at_cursor(false)
    }

    /// Fold every namespace and go back to the top
    pub fn fold_all(&self) -> Result<(), RenderError> {
        self.set_all_folded(true)
    }

    /// Unfold every namespace and go back to the top
    pub fn unfold_all(&self) -> Result<(), RenderError> {
        self.set_all_folded(false)
    }

    /// Move the cursor one line down, scrolling when it sits on the bottom border
    pub fn move_cursor_down(&self) -> Result<(), RenderError> {
        let scrolled = {
            let mut state = self.lock_state();
            if state.cursor.y < state.viewport.bottom_border {
                state.cursor.y += 1;
                false
            } else {
                state.viewport.scroll_offset += 1;
                true
            }
        };
        if scrolled {
            self.redraw_all()
        } else {
            self.redraw_cursor()
        }
    }

    /// Move the cursor one line up, scrolling when it sits on the top border
    pub fn move_cursor_up(&self) -> Result<(), RenderError> {
        let scrolled = {
            let mut state = self.lock_state();
            if state.cursor.y > state.viewport.top_border() {
                state.cursor.y -= 1;
                Some(false)
            } else if state.viewport.scroll_offset > 0 {
                state.viewport.scroll_offset -= 1;
                Some(true)
            } else {
                None
            }
        };
        match scrolled {
            Some(true) => self.redraw_all(),
            Some(false) => self.redraw_cursor(),
            None => Ok(()),
        }
    }

    fn set_folded_at_cursor(&self, folded: bool) -> Result<(), RenderError> {
        {
            let mut state = self.lock_state();
            let name = match state.entity_at_cursor() {
                Some(Entity::Namespace(ns)) => ns.name.clone(),
                _ => return Ok(()),
            };
            if !state.collapse.set(&name, folded) {
                return Ok(());
            }
            tracing::debug!(namespace = %name, folded, "Toggled namespace");
            state.rebuild_positions();
        }
        self.redraw_all()
    }

    fn set_all_folded(&self, folded: bool) -> Result<(), RenderError> {
        {
            let mut state = self.lock_state();
            let tree = std::sync::Arc::clone(&state.tree);
            state
                .collapse
                .set_all(tree.iter().map(|ns| ns.name.as_str()), folded);
            state.rebuild_positions();
            state.cursor_to_start();
            tracing::debug!(namespaces = tree.len(), folded, "Set all namespaces");
        }
        self.redraw_all()
    }
}
