//! Suppressions service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::suppression::SuppressionsEnvelope;
use crate::models::{Suppression, SuppressionRequest, SuppressionStatus};
use crate::Result;

/// Service for managing suppressed recipients per message stream.
pub struct SuppressionsService {
    inner: Arc<ClientInner>,
}

impl SuppressionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List suppressions on a message stream.
    ///
    /// Supported filter options: `emailaddress`, `fromdate`, `todate`,
    /// `suppressionreason`, `origin`.
    pub async fn list(&self, stream_id: &str, options: Query) -> Result<Vec<Suppression>> {
        let res: SuppressionsEnvelope<Suppression> = self
            .inner
            .get(
                &build_url(
                    &format!("message-streams/{stream_id}/suppressions/dump"),
                    &options,
                ),
                TokenScope::Server,
            )
            .await?;
        Ok(res.suppressions)
    }

    /// Suppress the given addresses on a message stream.
    ///
    /// The call succeeds as a whole even when individual addresses fail;
    /// inspect each returned [`SuppressionStatus`].
    pub async fn create(
        &self,
        stream_id: &str,
        requests: &[SuppressionRequest],
    ) -> Result<Vec<SuppressionStatus>> {
        let res: SuppressionsEnvelope<SuppressionStatus> = self
            .inner
            .post(
                &format!("message-streams/{stream_id}/suppressions"),
                &envelope(requests),
                TokenScope::Server,
            )
            .await?;
        Ok(res.suppressions)
    }

    /// Reactivate the given addresses on a message stream.
    ///
    /// `SpamComplaint` suppressions cannot be deleted by the sender.
    pub async fn delete(
        &self,
        stream_id: &str,
        requests: &[SuppressionRequest],
    ) -> Result<Vec<SuppressionStatus>> {
        let res: SuppressionsEnvelope<SuppressionStatus> = self
            .inner
            .post(
                &format!("message-streams/{stream_id}/suppressions/delete"),
                &envelope(requests),
                TokenScope::Server,
            )
            .await?;
        Ok(res.suppressions)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct RequestEnvelope<'a> {
    suppressions: &'a [SuppressionRequest],
}

fn envelope(requests: &[SuppressionRequest]) -> RequestEnvelope<'_> {
    RequestEnvelope {
        suppressions: requests,
    }
}
