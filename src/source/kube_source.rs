//! Pod source backed by the Kubernetes API

use super::{NamespaceScope, PodSource, SourceError, pod_row};
use crate::models::{Namespace, Snapshot};
use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use futures::future::join_all;
use k8s_openapi::api::core::v1::{Namespace as KubeNamespace, Pod as KubePod};
use kube::api::ListParams;
use kube::{Api, Client};
use std::time::{Duration, Instant};

/// Lists pods namespace by namespace, concurrently
pub struct KubePodSource {
    client: Client,
    scope: NamespaceScope,
    timeout: Duration,
}

impl KubePodSource {
    pub fn new(client: Client, scope: NamespaceScope, timeout: Duration) -> Self {
        Self {
            client,
            scope,
            timeout,
        }
    }

    /// Namespace names to list on this refresh
    async fn namespace_names(&self) -> Result<Vec<String>, SourceError> {
        match &self.scope {
            NamespaceScope::Named(names) => Ok(names.clone()),
            NamespaceScope::All => {
                let api: Api<KubeNamespace> = Api::all(self.client.clone());
                let list = tokio::time::timeout(self.timeout, api.list(&ListParams::default()))
                    .await
                    .map_err(|_| SourceError::Timeout(self.timeout))?
                    .map_err(SourceError::ListNamespaces)?;
                let mut names: Vec<String> = list
                    .items
                    .into_iter()
                    .filter_map(|ns| ns.metadata.name)
                    .collect();
                names.sort();
                Ok(names)
            }
        }
    }

    /// List one namespace; failures become the namespace's error row
    async fn fetch_namespace(&self, name: String, now: DateTime<Utc>) -> Namespace {
        let api: Api<KubePod> = Api::namespaced(self.client.clone(), &name);
        let result = tokio::time::timeout(self.timeout, api.list(&ListParams::default())).await;

        match result {
            Ok(Ok(list)) => {
                let mut pods: Vec<_> = list
                    .items
                    .iter()
                    .map(|pod| pod_row(pod, &name, now))
                    .collect();
                pods.sort_by(|a, b| a.name.cmp(&b.name));
                Namespace::new(name, pods)
            }
            Ok(Err(e)) => {
                tracing::warn!(namespace = %name, error = %e, "Failed to list pods");
                Namespace::with_error(name, e.to_string())
            }
            Err(_) => {
                tracing::warn!(
                    namespace = %name,
                    timeout = ?self.timeout,
                    "Listing pods timed out"
                );
                Namespace::with_error(name, format!("timed out after {:?}", self.timeout))
            }
        }
    }
}

#[async_trait]
impl PodSource for KubePodSource {
    async fn fetch(&self) -> Result<Snapshot, SourceError> {
        let started = Instant::now();
        let names = self.namespace_names().await?;
        let now = Utc::now();

        let namespaces = join_all(
            names
                .into_iter()
                .map(|name| self.fetch_namespace(name, now)),
        )
        .await;

        let snapshot = Snapshot::new(namespaces, Local::now().fixed_offset(), started.elapsed());
        tracing::debug!(
            namespaces = snapshot.namespaces.len(),
            pods = snapshot.pod_count(),
            errors = snapshot.error_count(),
            elapsed = ?snapshot.elapsed,
            "Fetched pods"
        );
        Ok(snapshot)
    }
}
