//! Outbound statistics service.
//!
//! Every operation takes an options bag for the common stats filters
//! (`tag`, `fromdate`, `todate`, `messagestream`):
//! <https://postmarkapp.com/developer/api/stats-api>.

use std::sync::Arc;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{
    BounceCounts, BrowserFamilyCounts, ClickCounts, ClickLocationCounts, ClickPlatformCounts,
    EmailClientCounts, OpenCounts, OutboundStats, PlatformCounts, SendCounts, SpamCounts,
    TrackedCounts,
};
use crate::Result;

/// Service for outbound email statistics.
pub struct StatsService {
    inner: Arc<ClientInner>,
}

impl StatsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    async fn get_stats<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        options: Query,
    ) -> Result<T> {
        self.inner
            .get(&build_url(path, &options), TokenScope::Server)
            .await
    }

    /// Get a brief overview of statistics for all outbound email.
    pub async fn outbound(&self, options: Query) -> Result<OutboundStats> {
        self.get_stats("stats/outbound", options).await
    }

    /// Get a total count of emails sent.
    pub async fn send_counts(&self, options: Query) -> Result<SendCounts> {
        self.get_stats("stats/outbound/sends", options).await
    }

    /// Get total counts of emails that were returned as bounced.
    pub async fn bounce_counts(&self, options: Query) -> Result<BounceCounts> {
        self.get_stats("stats/outbound/bounces", options).await
    }

    /// Get a total count of recipients who marked email as spam.
    pub async fn spam_counts(&self, options: Query) -> Result<SpamCounts> {
        self.get_stats("stats/outbound/spam", options).await
    }

    /// Get a total count of emails sent with open tracking enabled.
    pub async fn tracked_counts(&self, options: Query) -> Result<TrackedCounts> {
        self.get_stats("stats/outbound/tracked", options).await
    }

    /// Get total counts of recipients who opened email. Only recorded when
    /// open tracking is enabled.
    pub async fn open_counts(&self, options: Query) -> Result<OpenCounts> {
        self.get_stats("stats/outbound/opens", options).await
    }

    /// Get email platform usage for opens.
    pub async fn platform_counts(&self, options: Query) -> Result<PlatformCounts> {
        self.get_stats("stats/outbound/platform", options).await
    }

    /// Get total counts of recipients who clicked links. Only recorded
    /// when link tracking is enabled.
    pub async fn click_counts(&self, options: Query) -> Result<ClickCounts> {
        self.get_stats("stats/outbound/clicks", options).await
    }

    /// Get click counts by browser family.
    pub async fn browser_family_counts(&self, options: Query) -> Result<BrowserFamilyCounts> {
        self.get_stats("stats/outbound/clicks/browserfamilies", options)
            .await
    }

    /// Get click counts by email format (HTML vs text).
    pub async fn click_location_counts(&self, options: Query) -> Result<ClickLocationCounts> {
        self.get_stats("stats/outbound/clicks/location", options)
            .await
    }

    /// Get click counts by platform.
    pub async fn click_platform_counts(&self, options: Query) -> Result<ClickPlatformCounts> {
        self.get_stats("stats/outbound/clicks/platforms", options)
            .await
    }

    /// Get open counts by email client.
    pub async fn email_client_counts(&self, options: Query) -> Result<EmailClientCounts> {
        self.get_stats("stats/outbound/opens/emailclients", options)
            .await
    }
}
