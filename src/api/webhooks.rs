//! Webhooks service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::webhook::WebhooksList;
use crate::models::Webhook;
use crate::Result;

/// Service for managing webhooks on the server.
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List webhooks on the server, optionally restricted to one message
    /// stream. An empty string lists webhooks on all streams.
    pub async fn list(&self, message_stream: &str) -> Result<Vec<Webhook>> {
        let mut options = Query::new();
        if !message_stream.is_empty() {
            options.insert("MessageStream", message_stream);
        }
        let res: WebhooksList = self
            .inner
            .get(&build_url("webhooks", &options), TokenScope::Server)
            .await?;
        Ok(res.webhooks)
    }

    /// Fetch a single webhook.
    pub async fn get(&self, webhook_id: i64) -> Result<Webhook> {
        self.inner
            .get(&format!("webhooks/{webhook_id}"), TokenScope::Server)
            .await
    }

    /// Create a webhook.
    pub async fn create(&self, webhook: &Webhook) -> Result<Webhook> {
        self.inner
            .post("webhooks", webhook, TokenScope::Server)
            .await
    }

    /// Update a webhook.
    pub async fn edit(&self, webhook_id: i64, webhook: &Webhook) -> Result<Webhook> {
        self.inner
            .put(&format!("webhooks/{webhook_id}"), webhook, TokenScope::Server)
            .await
    }

    /// Remove a webhook.
    pub async fn delete(&self, webhook_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("webhooks/{webhook_id}"),
                TokenScope::Server,
            )
            .await
    }
}
