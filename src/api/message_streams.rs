//! Message streams service.

use std::sync::Arc;

use crate::client::{build_url, ClientInner, Query, TokenScope};
use crate::models::{
    ArchiveMessageStreamResponse, CreateMessageStreamRequest, EditMessageStreamRequest,
    MessageStream, MessageStreamTypeFilter, MessageStreamsList,
};
use crate::Result;

/// Service for managing message streams on the server.
pub struct MessageStreamsService {
    inner: Arc<ClientInner>,
}

impl MessageStreamsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List message streams on the server, optionally including archived
    /// ones.
    pub async fn list(
        &self,
        stream_type: MessageStreamTypeFilter,
        include_archived: bool,
    ) -> Result<MessageStreamsList> {
        let options = Query::new()
            .with("MessageStreamType", stream_type.as_str())
            .with("IncludeArchivedStreams", include_archived);
        self.inner
            .get(&build_url("message-streams", &options), TokenScope::Server)
            .await
    }

    /// Fetch a single message stream.
    pub async fn get(&self, stream_id: &str) -> Result<MessageStream> {
        self.inner
            .get(&format!("message-streams/{stream_id}"), TokenScope::Server)
            .await
    }

    /// Create a message stream.
    pub async fn create(&self, request: &CreateMessageStreamRequest) -> Result<MessageStream> {
        self.inner
            .post("message-streams", request, TokenScope::Server)
            .await
    }

    /// Update a message stream.
    pub async fn edit(
        &self,
        stream_id: &str,
        request: &EditMessageStreamRequest,
    ) -> Result<MessageStream> {
        self.inner
            .patch(
                &format!("message-streams/{stream_id}"),
                request,
                TokenScope::Server,
            )
            .await
    }

    /// Archive a message stream. Sending stops and the stream's data is
    /// purged after the returned date.
    pub async fn archive(&self, stream_id: &str) -> Result<ArchiveMessageStreamResponse> {
        self.inner
            .post_empty(
                &format!("message-streams/{stream_id}/archive"),
                TokenScope::Server,
            )
            .await
    }

    /// Unarchive a message stream before its purge date.
    pub async fn unarchive(&self, stream_id: &str) -> Result<MessageStream> {
        self.inner
            .post_empty(
                &format!("message-streams/{stream_id}/unarchive"),
                TokenScope::Server,
            )
            .await
    }
}
