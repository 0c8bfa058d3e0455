//! Theme and styling definitions
//!
//! This module provides a centralized place for all color definitions used
//! by the dashboard. The renderer only understands (fg, bg) pairs, so the
//! theme is a set of plain colors rather than full styles.

use crate::models::PodHealth;
use ratatui::style::Color;

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub background: Color,

    // Pod emphasis colors
    pub pod_healthy: Color,
    pub pod_degraded: Color,
    pub pod_failing: Color,

    // Namespace error text
    pub namespace_error: Color,

    // Status area
    pub status_label: Color,
    pub help_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Text colors
            text_primary: Color::Reset,
            background: Color::Reset,

            // Pod emphasis colors
            pod_healthy: Color::Green,
            pod_degraded: Color::Yellow,
            pod_failing: Color::Red,

            // Namespace error text
            namespace_error: Color::Yellow,

            // Status area
            status_label: Color::Cyan,
            help_text: Color::Reset,
        }
    }
}

impl Theme {
    /// Theme that leaves every cell in the terminal's default colors
    pub fn monochrome() -> Self {
        Self {
            text_primary: Color::Reset,
            background: Color::Reset,
            pod_healthy: Color::Reset,
            pod_degraded: Color::Reset,
            pod_failing: Color::Reset,
            namespace_error: Color::Reset,
            status_label: Color::Reset,
            help_text: Color::Reset,
        }
    }

    /// Pick the theme from the `ui.noColor` setting
    pub fn from_config(config: &crate::config::Config) -> Self {
        if config.ui.no_color {
            Self::monochrome()
        } else {
            Self::default()
        }
    }

    /// Foreground color for a pod row
    pub fn pod_color(&self, health: PodHealth) -> Color {
        match health {
            PodHealth::Healthy => self.pod_healthy,
            PodHealth::Degraded => self.pod_degraded,
            PodHealth::Failing => self.pod_failing,
        }
    }
}
