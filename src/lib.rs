//! kubefold library
//!
//! This library provides the core functionality for the kubefold dashboard.
//! It can be used both as a binary and as a library for testing.

pub mod config;
pub mod kube;
pub mod models;
pub mod source;
pub mod tui;

// Re-export commonly used types for convenience
pub use models::{Namespace, Pod, PodHealth, Snapshot};
pub use source::{KubePodSource, NamespaceScope, PodSource, SourceError};
pub use tui::{Command, Dashboard, HeaderInfo, RenderError, Renderer, TerminalRenderer, Theme};
