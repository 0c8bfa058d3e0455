//! Centralized keybindings and navigation commands
//!
//! This module provides a single source of truth for the keys the dashboard
//! reacts to and the help line shown in the status area.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete input the dashboard processes to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    /// Fold the namespace under the cursor
    Fold,
    /// Unfold the namespace under the cursor
    Unfold,
    FoldAll,
    UnfoldAll,
    /// The terminal changed size to (width, height)
    Resize(u16, u16),
    Quit,
}

/// Keybinding with a human-readable label
#[derive(Debug, Clone)]
pub struct NavigationCommand {
    /// The keybinding string (e.g., "↑/k", "c")
    pub key: &'static str,
    /// The human-readable label (e.g., "Up", "Fold all")
    pub label: &'static str,
}

impl NavigationCommand {
    /// Create a new navigation command
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Get all navigation commands in the order they appear in the help line
pub fn get_navigation_commands() -> Vec<NavigationCommand> {
    vec![
        NavigationCommand::new("↑/k", "Up"),
        NavigationCommand::new("↓/j", "Down"),
        NavigationCommand::new("←/h", "Fold"),
        NavigationCommand::new("→/l", "Unfold"),
        NavigationCommand::new("c", "Fold all"),
        NavigationCommand::new("e", "Unfold all"),
        NavigationCommand::new("q", "Quit"),
    ]
}

/// The help line drawn on the last screen row
pub fn help_line() -> String {
    get_navigation_commands()
        .iter()
        .map(|cmd| format!("{} {}", cmd.key, cmd.label))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Command {
    /// Map a key press to a command
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Command::Fold),
            KeyCode::Right | KeyCode::Char('l') => Some(Command::Unfold),
            KeyCode::Char('c') => Some(Command::FoldAll),
            KeyCode::Char('e') => Some(Command::UnfoldAll),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    /// Map any terminal event to a command
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(*key),
            Event::Resize(width, height) => Some(Command::Resize(*width, *height)),
            _ => None,
        }
    }
}
