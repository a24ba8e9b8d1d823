//! Bounces service.

use std::sync::Arc;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::bounce::DumpResponse;
use crate::models::{ActivatedBounce, Bounce, BouncesList, DeliveryStats};
use crate::Result;

/// Service for inspecting and reactivating bounces.
pub struct BouncesService {
    inner: Arc<ClientInner>,
}

impl BouncesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get delivery statistics for the server: inactive address count plus
    /// bounce counts by type.
    pub async fn delivery_stats(&self) -> Result<DeliveryStats> {
        self.inner.get("deliverystats", TokenScope::Server).await
    }

    /// Search bounces on the server.
    ///
    /// Available filter options:
    /// <https://postmarkapp.com/developer/api/bounce-api#bounces>.
    pub async fn list(&self, count: i64, offset: i64, options: Query) -> Result<BouncesList> {
        let options = options.with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("bounces", &options), TokenScope::Server)
            .await
    }

    /// Fetch a single bounce.
    pub async fn get(&self, bounce_id: i64) -> Result<Bounce> {
        self.inner
            .get(&format!("bounces/{bounce_id}"), TokenScope::Server)
            .await
    }

    /// Fetch the raw SMTP dump for a bounce. Returns an empty string when
    /// no dump is available.
    pub async fn dump(&self, bounce_id: i64) -> Result<String> {
        let res: DumpResponse = self
            .inner
            .get(&format!("bounces/{bounce_id}/dump"), TokenScope::Server)
            .await?;
        Ok(res.body)
    }

    /// Reactivate a bounced address for resending.
    pub async fn activate(&self, bounce_id: i64) -> Result<ActivatedBounce> {
        self.inner
            .put_empty(&format!("bounces/{bounce_id}/activate"), TokenScope::Server)
            .await
    }

    /// List tags that have generated bounced emails.
    pub async fn tags(&self) -> Result<Vec<String>> {
        self.inner.get("bounces/tags", TokenScope::Server).await
    }
}
