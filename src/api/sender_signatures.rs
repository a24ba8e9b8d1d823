//! Sender signatures service. All operations require the account token.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{
    SenderSignatureCreateRequest, SenderSignatureDetails, SenderSignatureEditRequest,
    SenderSignaturesList,
};
use crate::Result;

/// Service for managing sender signatures.
pub struct SenderSignaturesService {
    inner: Arc<ClientInner>,
}

impl SenderSignaturesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List sender signatures on the account, limited by `count` and paged
    /// by `offset`. The entries carry brief details only.
    pub async fn list(&self, count: i64, offset: i64) -> Result<SenderSignaturesList> {
        let options = Query::new().with("count", count).with("offset", offset);
        self.inner
            .get(&build_url("senders", &options), TokenScope::Account)
            .await
    }

    /// Fetch all details for a specific sender signature.
    pub async fn get(&self, signature_id: i64) -> Result<SenderSignatureDetails> {
        self.inner
            .get(&format!("senders/{signature_id}"), TokenScope::Account)
            .await
    }

    /// Create a sender signature. A confirmation email is sent to the
    /// address.
    pub async fn create(
        &self,
        request: &SenderSignatureCreateRequest,
    ) -> Result<SenderSignatureDetails> {
        self.inner
            .post("senders", request, TokenScope::Account)
            .await
    }

    /// Update a sender signature.
    pub async fn edit(
        &self,
        signature_id: i64,
        request: &SenderSignatureEditRequest,
    ) -> Result<SenderSignatureDetails> {
        self.inner
            .put(&format!("senders/{signature_id}"), request, TokenScope::Account)
            .await
    }

    /// Remove a sender signature.
    pub async fn delete(&self, signature_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::DELETE,
                &format!("senders/{signature_id}"),
                TokenScope::Account,
            )
            .await
    }

    /// Resend the confirmation email for an unconfirmed signature.
    pub async fn resend_confirmation(&self, signature_id: i64) -> Result<()> {
        self.inner
            .execute_command(
                Method::POST,
                &format!("senders/{signature_id}/resend"),
                TokenScope::Account,
            )
            .await
    }
}
