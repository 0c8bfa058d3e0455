//! Configuration loading and validation
//!
//! Handles loading configuration from the config file and the environment
//! according to precedence rules.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Config file
    /// 3. Built-in defaults
    ///
    /// A missing file means defaults; a file that cannot be parsed is an error.
    pub fn load() -> Result<Config> {
        let config = Self::load_from(&paths::root_config_path())?;
        Ok(Self::apply_env_overrides(config))
    }

    /// Load a config file, or the defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::load_defaults());
        }
        Self::load_file(path)
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file deserializes as null rather than an empty map
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file and the merged configuration
    ///
    /// Fails on invalid YAML, invalid value types, a zero refresh interval
    /// or request timeout, an unknown `defaultGroup`, and empty groups.
    pub fn validate() -> Result<()> {
        let config = Self::load().context("Failed to load configuration")?;
        Self::check(&config)
    }

    /// Semantic checks on an already parsed configuration
    pub fn check(config: &Config) -> Result<()> {
        if config.refresh_interval == 0 {
            anyhow::bail!("refreshInterval must be at least 1 second");
        }
        if config.request_timeout == 0 {
            anyhow::bail!("requestTimeout must be at least 1 second");
        }
        if let Some((name, _)) = config
            .groups
            .iter()
            .find(|(_, namespaces)| namespaces.iter().all(|ns| ns.trim().is_empty()))
        {
            anyhow::bail!("Group '{}' has no namespaces", name);
        }
        if let Some(ref group) = config.default_group {
            if !config.groups.contains_key(group) {
                anyhow::bail!("defaultGroup '{}' is not defined in groups", group);
            }
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        // KUBEFOLD_REFRESH_INTERVAL override
        if let Some(value) = lookup("KUBEFOLD_REFRESH_INTERVAL") {
            match value.parse::<u64>() {
                Ok(seconds) => config.refresh_interval = seconds,
                Err(_) => {
                    tracing::warn!(value = %value, "Ignoring invalid KUBEFOLD_REFRESH_INTERVAL")
                }
            }
        }

        // KUBEFOLD_GROUP override
        if let Some(group) = lookup("KUBEFOLD_GROUP") {
            if !group.is_empty() {
                config.default_group = Some(group);
            }
        }

        // KUBEFOLD_NO_COLOR override
        if let Some(value) = lookup("KUBEFOLD_NO_COLOR") {
            if let Ok(no_color) = value.parse::<bool>() {
                config.ui.no_color = no_color;
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
