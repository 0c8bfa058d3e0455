//! kubefold - a terminal dashboard of Kubernetes pods grouped by namespace
//!
//! Namespaces can be folded and unfolded; the list refreshes periodically
//! from the Kubernetes API.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Command, handle_config_command, init_logging};
use kubefold::config::{self, ConfigLoader};
use kubefold::source::{KubePodSource, NamespaceScope};
use kubefold::tui::{self, HeaderInfo, Theme};
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle config subcommand
    if let Some(Command::Config { subcommand }) = args.command {
        return handle_config_command(subcommand);
    }

    // Initialize logging if debug flag is set
    let log_file = init_logging(args.debug)?;

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    // Load configuration
    let mut config = ConfigLoader::load().context("Failed to load configuration")?;
    if let Some(seconds) = args.refresh {
        config.refresh_interval = seconds;
    }
    ConfigLoader::check(&config).context("Invalid configuration")?;

    let selection = config::resolve_group(&config, &args.namespaces, args.group.as_deref())?;
    let scope = match selection.namespaces {
        Some(names) => NamespaceScope::named(names),
        None => NamespaceScope::All,
    };
    tracing::debug!(
        group = %selection.label,
        ?scope,
        refresh_interval = config.refresh_interval,
        request_timeout = config.request_timeout,
        "Configuration loaded"
    );

    // Initialize Kubernetes client
    tracing::debug!("Initializing Kubernetes client");
    let client = kubefold::kube::create_client(args.context.as_deref()).await?;
    let context = kubefold::kube::get_context(args.context.as_deref());
    tracing::info!("Connected to Kubernetes cluster: {}", context);

    let source = Arc::new(KubePodSource::new(
        client,
        scope,
        Duration::from_secs(config.request_timeout),
    ));
    let theme = Theme::from_config(&config);
    let header = HeaderInfo::new(selection.label, context);

    tui::run_tui(source, header, &config, theme).await?;

    tracing::info!("kubefold exited");
    Ok(())
}
