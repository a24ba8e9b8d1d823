//! Outbound messages service.

use std::sync::Arc;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::bounce::DumpResponse;
use crate::models::{ClicksList, OpensList, OutboundMessage, OutboundMessagesList};
use crate::Result;

/// Service for browsing sent messages and their opens and clicks.
pub struct OutboundMessagesService {
    inner: Arc<ClientInner>,
}

impl OutboundMessagesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch details for a single sent message.
    pub async fn get(&self, message_id: &str) -> Result<OutboundMessage> {
        self.inner
            .get(
                &format!("messages/outbound/{message_id}/details"),
                TokenScope::Server,
            )
            .await
    }

    /// Fetch the raw source of a sent message. Returns an empty string
    /// when no dump is available.
    pub async fn dump(&self, message_id: &str) -> Result<String> {
        let res: DumpResponse = self
            .inner
            .get(
                &format!("messages/outbound/{message_id}/dump"),
                TokenScope::Server,
            )
            .await?;
        Ok(res.body)
    }

    /// Search sent messages.
    ///
    /// Available filter options:
    /// <https://postmarkapp.com/developer/api/messages-api#outbound-message-search>.
    pub async fn list(
        &self,
        count: i64,
        offset: i64,
        options: Query,
    ) -> Result<OutboundMessagesList> {
        let options = options.with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("messages/outbound", &options), TokenScope::Server)
            .await
    }

    /// Search opens across all sent messages. An open is bound to a single
    /// recipient, so one message opened by two recipients yields two
    /// entries.
    pub async fn opens(&self, count: i64, offset: i64, options: Query) -> Result<OpensList> {
        let options = options.with("count", count).with("offset", offset);
        self.inner
            .get(
                &build_url("messages/outbound/opens", &options),
                TokenScope::Server,
            )
            .await
    }

    /// List opens for a specific message.
    pub async fn message_opens(
        &self,
        message_id: &str,
        count: i64,
        offset: i64,
    ) -> Result<OpensList> {
        let options = Query::new().with("count", count).with("offset", offset);
        self.inner
            .get(
                &build_url(&format!("messages/outbound/opens/{message_id}"), &options),
                TokenScope::Server,
            )
            .await
    }

    /// Search clicks across all sent messages.
    pub async fn clicks(&self, count: i64, offset: i64, options: Query) -> Result<ClicksList> {
        let options = options.with("count", count).with("offset", offset);
        self.inner
            .get(
                &build_url("messages/outbound/clicks", &options),
                TokenScope::Server,
            )
            .await
    }

    /// List clicks for a specific message.
    pub async fn message_clicks(
        &self,
        message_id: &str,
        count: i64,
        offset: i64,
    ) -> Result<ClicksList> {
        let options = Query::new().with("count", count).with("offset", offset);
        self.inner
            .get(
                &build_url(&format!("messages/outbound/clicks/{message_id}"), &options),
                TokenScope::Server,
            )
            .await
    }
}
