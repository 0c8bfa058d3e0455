//! Configuration system for kubefold
//!
//! A single YAML file with environment overrides, plus the namespace group
//! resolution used at startup.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, UiConfig};

/// Group label used for an explicit `-n` namespace list
pub const CUSTOM_GROUP: &str = "custom";

/// Group label used when every namespace is shown
pub const ALL_GROUP: &str = "all";

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "refreshInterval",
    "requestTimeout",
    "defaultGroup",
    "groups",
    "ui.noColor",
    "ui.showHelp",
];

/// Outcome of group resolution: a header label and an optional namespace list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSelection {
    pub label: String,
    /// `None` means every namespace in the cluster
    pub namespaces: Option<Vec<String>>,
}

/// Decide which namespaces to show
///
/// Precedence: explicit namespaces, then the requested or default group,
/// then all namespaces. A requested group that is not configured is an error.
pub fn resolve_group(
    config: &Config,
    namespaces: &[String],
    group: Option<&str>,
) -> anyhow::Result<GroupSelection> {
    if !namespaces.is_empty() {
        return Ok(GroupSelection {
            label: CUSTOM_GROUP.to_string(),
            namespaces: Some(namespaces.to_vec()),
        });
    }

    match group.or(config.default_group.as_deref()) {
        Some(name) => {
            let members = config
                .groups
                .get(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown group: {}", name))?;
            Ok(GroupSelection {
                label: name.to_string(),
                namespaces: Some(members.clone()),
            })
        }
        None => Ok(GroupSelection {
            label: ALL_GROUP.to_string(),
            namespaces: None,
        }),
    }
}

/// Get a configuration value by key (dot notation)
///
/// `groups.<name>` returns one group as a comma-separated list.
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    if let Some(group) = key.strip_prefix("groups.") {
        return config
            .groups
            .get(group)
            .map(|namespaces| namespaces.join(","))
            .ok_or_else(|| anyhow::anyhow!("Unknown group: {}", group));
    }

    match key {
        "refreshInterval" => Ok(config.refresh_interval.to_string()),
        "requestTimeout" => Ok(config.request_timeout.to_string()),
        "defaultGroup" => Ok(config.default_group.clone().unwrap_or_default()),
        "groups" => serde_yaml::to_string(&config.groups)
            .map_err(|e| anyhow::anyhow!("Failed to serialize groups: {}", e)),
        "ui.noColor" => Ok(config.ui.no_color.to_string()),
        "ui.showHelp" => Ok(config.ui.show_help.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
///
/// `groups.<name>` takes a comma-separated namespace list; an empty value
/// removes the group.
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(group) = key.strip_prefix("groups.") {
        if group.is_empty() {
            anyhow::bail!("Group name must not be empty");
        }
        let namespaces = parse_namespace_list(value);
        if namespaces.is_empty() {
            config.groups.remove(group);
        } else {
            config.groups.insert(group.to_string(), namespaces);
        }
        return Ok(());
    }

    match key {
        "refreshInterval" => {
            config.refresh_interval = value
                .parse()
                .context("refreshInterval must be a number of seconds")?;
        }
        "requestTimeout" => {
            config.request_timeout = value
                .parse()
                .context("requestTimeout must be a number of seconds")?;
        }
        "defaultGroup" => {
            if value.is_empty() {
                config.default_group = None;
            } else {
                config.default_group = Some(value.to_string());
            }
        }
        "groups" => {
            config.groups = serde_yaml::from_str(value).context(
                "groups must be a YAML map (e.g., '{web: [frontend, backend]}')",
            )?;
        }
        "ui.noColor" => {
            config.ui.no_color = value
                .parse()
                .context("ui.noColor must be 'true' or 'false'")?;
        }
        "ui.showHelp" => {
            config.ui.show_help = value
                .parse()
                .context("ui.showHelp must be 'true' or 'false'")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

fn parse_namespace_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
