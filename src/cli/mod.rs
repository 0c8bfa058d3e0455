//! CLI argument parsing and command handling

mod config;
mod logging;

pub use config::{ConfigSubcommand, handle_config_command};
pub use logging::*;

use clap::{Parser, Subcommand};

/// kubefold - pods grouped by namespace, with collapsible sections
#[derive(Parser, Debug)]
#[command(name = "kubefold", version)]
#[command(
    about = "A terminal dashboard of Kubernetes pods grouped by namespace",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// Configured namespace group to show
    #[arg(long, short = 'g')]
    pub group: Option<String>,

    /// Namespace to show; repeat for several (overrides --group)
    #[arg(long = "namespace", short = 'n', value_name = "NS")]
    pub namespaces: Vec<String>,

    /// Seconds between refreshes (overrides the config file)
    #[arg(long, value_name = "SECS")]
    pub refresh: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}
