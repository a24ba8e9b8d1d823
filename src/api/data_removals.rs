//! Data removals service. All operations require the account token.

use std::sync::Arc;

use crate::client::{ClientInner, TokenScope};
use crate::models::{DataRemoval, DataRemovalRequest};
use crate::Result;

/// Service for requesting removal of recipient data.
pub struct DataRemovalsService {
    inner: Arc<ClientInner>,
}

impl DataRemovalsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Request removal of a recipient's data.
    pub async fn create(&self, request: &DataRemovalRequest) -> Result<DataRemoval> {
        self.inner
            .post("data-removals", request, TokenScope::Account)
            .await
    }

    /// Check the status of a data removal request.
    pub async fn status(&self, id: i64) -> Result<DataRemoval> {
        self.inner
            .get(&format!("data-removals/{id}"), TokenScope::Account)
            .await
    }
}
