//! Message streams: separate sending pipelines within one server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of traffic a message stream carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MessageStreamType {
    /// One-to-one transactional messages.
    #[default]
    Transactional,
    /// Messages received through inbound processing.
    Inbound,
    /// Bulk one-to-many messages.
    Broadcasts,
    /// Unrecognized stream type.
    #[serde(other)]
    Unknown,
}

/// Stream type filter accepted by
/// [`MessageStreamsService::list`](crate::api::MessageStreamsService::list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStreamTypeFilter {
    /// All stream types.
    #[default]
    All,
    /// Transactional streams only.
    Transactional,
    /// Inbound streams only.
    Inbound,
    /// Broadcast streams only.
    Broadcasts,
}

impl MessageStreamTypeFilter {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            MessageStreamTypeFilter::All => "All",
            MessageStreamTypeFilter::Transactional => "Transactional",
            MessageStreamTypeFilter::Inbound => "Inbound",
            MessageStreamTypeFilter::Broadcasts => "Broadcasts",
        }
    }
}

/// How Postmark handles unsubscribe requests for a stream.
///
/// The API is inconsistent about casing here (`none` and `None` both occur
/// in the wild), so deserialization accepts both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnsubscribeHandling {
    /// Postmark does not handle unsubscribe requests.
    #[default]
    #[serde(rename = "None", alias = "none")]
    None,
    /// Postmark appends its unsubscribe footer and handles requests.
    #[serde(rename = "Postmark", alias = "postmark")]
    Postmark,
    /// The sender handles unsubscribe requests themselves.
    #[serde(rename = "Custom", alias = "custom")]
    Custom,
}

/// Subscription management settings of a stream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubscriptionManagementConfiguration {
    /// How unsubscribe requests are handled.
    pub unsubscribe_handling_type: UnsubscribeHandling,
}

/// A message stream on a server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageStream {
    /// Stream ID, unique within the server.
    #[serde(rename = "ID")]
    pub id: String,
    /// ID of the server the stream belongs to.
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    /// Display name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The kind of traffic the stream carries.
    pub message_stream_type: MessageStreamType,
    /// When the stream was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the stream was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// When the stream was archived, if it was.
    pub archived_at: Option<DateTime<Utc>>,
    /// When an archived stream's data will be purged.
    pub expected_purge_date: Option<DateTime<Utc>>,
    /// Subscription management settings.
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

/// A page of message streams with the total count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageStreamsList {
    /// The streams.
    pub message_streams: Vec<MessageStream>,
    /// Total number of matching streams.
    pub total_count: i64,
}

/// Request body to create a message stream.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessageStreamRequest {
    /// Stream ID. Immutable after creation.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The kind of traffic the stream carries. Immutable after creation.
    pub message_stream_type: MessageStreamType,
    /// Subscription management settings.
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

/// Request body to edit a message stream.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditMessageStreamRequest {
    /// Display name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Subscription management settings.
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

/// Result of archiving a message stream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ArchiveMessageStreamResponse {
    /// Stream ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// ID of the server the stream belongs to.
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    /// When the stream's data will be purged.
    pub expected_purge_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_parses_wire_format() {
        let stream: MessageStream = serde_json::from_str(
            r#"{
                "ID": "broadcasts",
                "ServerID": 123456,
                "Name": "Broadcast Stream",
                "Description": "This is my stream to send broadcast messages",
                "MessageStreamType": "Broadcasts",
                "CreatedAt": "2020-07-01T00:00:00-04:00",
                "UpdatedAt": null,
                "ArchivedAt": null,
                "ExpectedPurgeDate": null,
                "SubscriptionManagementConfiguration": {
                    "UnsubscribeHandlingType": "Postmark"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(stream.id, "broadcasts");
        assert_eq!(stream.server_id, 123456);
        assert_eq!(stream.message_stream_type, MessageStreamType::Broadcasts);
        assert!(stream.updated_at.is_none());
        assert_eq!(
            stream
                .subscription_management_configuration
                .unsubscribe_handling_type,
            UnsubscribeHandling::Postmark
        );
    }

    #[test]
    fn lowercase_unsubscribe_handling_is_accepted() {
        let config: SubscriptionManagementConfiguration =
            serde_json::from_str(r#"{"UnsubscribeHandlingType": "none"}"#).unwrap();
        assert_eq!(
            config.unsubscribe_handling_type,
            UnsubscribeHandling::None
        );
    }

    #[test]
    fn unknown_stream_type_does_not_fail_decoding() {
        let stream: MessageStream = serde_json::from_str(
            r#"{"ID": "x", "ServerID": 1, "MessageStreamType": "Experimental"}"#,
        )
        .unwrap();
        assert_eq!(stream.message_stream_type, MessageStreamType::Unknown);
    }
}
