//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Seconds between two refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// Seconds before a single API list call is abandoned
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Group shown when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_group: Option<String>,

    /// Named namespace lists, e.g. `payments: [payments-api, payments-db]`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub groups: BTreeMap<String, Vec<String>>,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Draw everything in the terminal's default colors
    #[serde(default = "default_false")]
    pub no_color: bool,

    /// Show the key help line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_help: bool,
}

// Default value functions
fn default_refresh_interval() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    5
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: default_refresh_interval(),
            request_timeout: default_request_timeout(),
            default_group: None,
            groups: BTreeMap::new(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            no_color: default_false(),
            show_help: default_true(),
        }
    }
}
