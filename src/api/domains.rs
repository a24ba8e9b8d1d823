//! Domains service. All operations require the account token.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{Domain, DomainCreateRequest, DomainEditRequest, DomainsList};
use crate::Result;

/// Service for managing sending domains.
pub struct DomainsService {
    inner: Arc<ClientInner>,
}

impl DomainsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List domains on the account, limited by `count` and paged by
    /// `offset`.
    pub async fn list(&self, count: i64, offset: i64) -> Result<DomainsList> {
        let options = Query::new().with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("domains", &options), TokenScope::Account)
            .await
    }

    /// Fetch a specific domain.
    pub async fn get(&self, domain_id: i64) -> Result<Domain> {
        self.inner
            .get(&format!("domains/{domain_id}"), TokenScope::Account)
            .await
    }

    /// Create a domain.
    pub async fn create(&self, request: &DomainCreateRequest) -> Result<Domain> {
        self.inner
            .post("domains", request, TokenScope::Account)
            .await
    }

    /// Update a domain.
    pub async fn edit(&self, domain_id: i64, request: &DomainEditRequest) -> Result<Domain> {
        self.inner
            .put(&format!("domains/{domain_id}"), request, TokenScope::Account)
            .await
    }

    /// Delete a domain.
    pub async fn delete(&self, domain_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("domains/{domain_id}"),
                TokenScope::Account,
            )
            .await
    }

    /// Verify the domain's DKIM DNS records.
    pub async fn verify_dkim(&self, domain_id: i64) -> Result<Domain> {
        self.inner
            .put_empty(&format!("domains/{domain_id}/verifyDkim"), TokenScope::Account)
            .await
    }

    /// Verify the domain's Return-Path DNS record.
    pub async fn verify_return_path(&self, domain_id: i64) -> Result<Domain> {
        self.inner
            .put_empty(
                &format!("domains/{domain_id}/verifyReturnPath"),
                TokenScope::Account,
            )
            .await
    }

    /// Create a new DKIM key to replace the current one. The pending
    /// host/value pair stays in the domain's `DKIMPending*` fields until
    /// the new DNS entries are confirmed.
    pub async fn rotate_dkim(&self, domain_id: i64) -> Result<Domain> {
        self.inner
            .post_empty(&format!("domains/{domain_id}/rotatedkim"), TokenScope::Account)
            .await
    }
}
