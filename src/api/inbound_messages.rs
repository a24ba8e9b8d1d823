//! Inbound messages service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{InboundMessage, InboundMessagesList};
use crate::Result;

/// Service for browsing and managing received messages.
pub struct InboundMessagesService {
    inner: Arc<ClientInner>,
}

impl InboundMessagesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch details for a single received message.
    pub async fn get(&self, message_id: &str) -> Result<InboundMessage> {
        self.inner
            .get(
                &format!("messages/inbound/{message_id}/details"),
                TokenScope::Server,
            )
            .await
    }

    /// Search received messages.
    ///
    /// Available filter options:
    /// <https://postmarkapp.com/developer/api/messages-api#inbound-message-search>.
    pub async fn list(
        &self,
        count: i64,
        offset: i64,
        options: Query,
    ) -> Result<InboundMessagesList> {
        let options = options.with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("messages/inbound", &options), TokenScope::Server)
            .await
    }

    /// Bypass rules for a blocked message and deliver it to the inbound
    /// hook.
    pub async fn bypass(&self, message_id: &str) -> Result<()> {
        self.inner
            .execute_command(
                Method::PUT,
                &format!("messages/inbound/{message_id}/bypass"),
                TokenScope::Server,
            )
            .await
    }

    /// Reschedule a failed message for inbound processing.
    pub async fn retry(&self, message_id: &str) -> Result<()> {
        self.inner
            .execute_command(
                Method::PUT,
                &format!("messages/inbound/{message_id}/retry"),
                TokenScope::Server,
            )
            .await
    }
}
