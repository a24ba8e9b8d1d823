//! Inbound rule triggers service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::trigger::InboundRuleTriggerCreateRequest;
use crate::models::{InboundRuleTrigger, InboundRuleTriggersList};
use crate::Result;

/// Service for blocking addresses and domains from inbound processing.
pub struct InboundRulesService {
    inner: Arc<ClientInner>,
}

impl InboundRulesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List inbound rule triggers on the server, limited by `count` and
    /// paged by `offset`.
    pub async fn list(&self, count: i64, offset: i64) -> Result<InboundRuleTriggersList> {
        let options = Query::new().with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("triggers/inboundrules", &options), TokenScope::Server)
            .await
    }

    /// Block an email address or domain from inbound processing.
    pub async fn create(&self, rule: &str) -> Result<InboundRuleTrigger> {
        let request = InboundRuleTriggerCreateRequest {
            rule: rule.to_string(),
        };
        self.inner
            .post("triggers/inboundrules", &request, TokenScope::Server)
            .await
    }

    /// Delete an inbound rule trigger.
    pub async fn delete(&self, trigger_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("triggers/inboundrules/{trigger_id}"),
                TokenScope::Server,
            )
            .await
    }
}
