//! Configuration subcommand handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use kubefold::config::{CONFIG_KEYS, ConfigLoader, get_config_value, paths, set_config_value};

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "refreshInterval", "ui.noColor", "groups.web")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "refreshInterval", "ui.noColor", "groups.web")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                for key in CONFIG_KEYS {
                    let value = get_config_value(&config, key)?;
                    println!("{}: {}", key, value.trim_end());
                }
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Only the file layer is saved; environment overrides stay out of it
            let mut config = ConfigLoader::load_from(&paths::root_config_path())
                .context("Failed to load configuration")?;

            set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;
            ConfigLoader::check(&config)
                .with_context(|| format!("Refusing to save {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => {
            ConfigLoader::validate().context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}
