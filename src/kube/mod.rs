//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides
//! a configured client for the pod source.
//!
//! HTTP/HTTPS proxies are picked up by kube from the standard
//! `HTTP_PROXY` / `HTTPS_PROXY` / `NO_PROXY` environment variables.

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

/// Label shown when no kubeconfig context can be determined
const FALLBACK_CONTEXT: &str = "in-cluster";

/// Initialize and return a Kubernetes client
///
/// With an explicit context the kubeconfig is loaded for that context.
/// Otherwise the default loading strategy applies:
/// 1. KUBECONFIG environment variable
/// 2. ~/.kube/config
/// 3. In-cluster config (if running in a pod)
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = match context {
        Some(name) => {
            let options = KubeConfigOptions {
                context: Some(name.to_string()),
                ..Default::default()
            };
            Config::from_kubeconfig(&options)
                .await
                .with_context(|| format!("Failed to load kubeconfig context '{}'", name))?
        }
        None => Config::infer()
            .await
            .context("Failed to infer Kubernetes configuration")?,
    };

    tracing::debug!(cluster_url = %config.cluster_url, "Creating Kubernetes client");
    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(client)
}

/// Get the Kubernetes context name shown in the header
pub fn get_context(explicit: Option<&str>) -> String {
    let current = match Kubeconfig::read() {
        Ok(kubeconfig) => kubeconfig.current_context,
        Err(e) => {
            tracing::debug!(error = %e, "No readable kubeconfig");
            None
        }
    };
    resolve_context_name(explicit, current)
}

fn resolve_context_name(explicit: Option<&str>, current: Option<String>) -> String {
    explicit
        .map(str::to_string)
        .or(current.filter(|name| !name.is_empty()))
        .unwrap_or_else(|| FALLBACK_CONTEXT.to_string())
}
