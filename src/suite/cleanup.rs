use tracing::{debug, info, warn};

use crate::http::{ApiRequest, ApiTransport};

use super::clock::Clock;
use super::runner::Suite;

impl<T, C> Suite<T, C>
where
    T: ApiTransport,
    C: Clock,
{
    /// Deletes the timeline, then the region. Failures only warn.
    pub(super) async fn cleanup(&self) {
        info!("Cleaning up test data...");

        if let Some(timeline_id) = self.context.timeline_id.as_deref() {
            self.delete_resource("timeline", &format!("/timelines/{}", timeline_id))
                .await;
        }
        if let Some(region_id) = self.context.region_id.as_deref() {
            self.delete_resource("region", &format!("/regions/{}", region_id))
                .await;
        }
    }

    async fn delete_resource(&self, kind: &str, path: &str) {
        match self.transport.send(ApiRequest::delete(path)).await {
            Ok(response) if response.is_ok() => debug!("Deleted test {}: {}", kind, path),
            Ok(response) => warn!(
                "Failed to delete test {} {} (status {})",
                kind,
                path,
                response.status()
            ),
            Err(err) => warn!("Failed to delete test {} {}: {}", kind, path, err),
        }
    }
}
