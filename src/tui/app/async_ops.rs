//! Periodic refresh
//!
//! The refresher runs as its own tokio task next to the input loop. Both
//! funnel their writes through the dashboard lock.

use super::core::Dashboard;
use crate::source::PodSource;
use crate::tui::renderer::{RenderError, Renderer};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

impl<R: Renderer + 'static> Dashboard<R> {
    /// Fetch once and apply the result
    ///
    /// A fetch failure keeps the current tree and returns `Ok(false)`.
    pub async fn refresh_once(&self, source: &dyn PodSource) -> Result<bool, RenderError> {
        match source.fetch().await {
            Ok(snapshot) => {
                self.apply_snapshot(snapshot)?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Refresh failed, keeping previous data");
                Ok(false)
            }
        }
    }

    /// Spawn the refresh task
    ///
    /// The first fetch happens immediately. The task only ends on a render
    /// error, which the caller must treat as fatal.
    pub fn spawn_refresher(
        self: &Arc<Self>,
        source: Arc<dyn PodSource>,
        period: Duration,
    ) -> JoinHandle<Result<(), RenderError>> {
        let dashboard = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                dashboard.refresh_once(source.as_ref()).await?;
            }
        })
    }
}
