//! Bounce records and delivery statistics.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A bounce type and how many bounces of that type have occurred.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceTypeCount {
    /// Bounce type identifier.
    #[serde(rename = "Type")]
    pub bounce_type: String,
    /// Full name of the bounce type.
    pub name: String,
    /// How many bounces have occurred.
    pub count: i64,
}

/// Delivery statistics for the server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeliveryStats {
    /// Number of inactive email addresses.
    pub inactive_mails: i64,
    /// Bounce types with total counts.
    pub bounces: Vec<BounceTypeCount>,
}

/// A specific delivery failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bounce {
    /// Type of record (always "Bounce").
    pub record_type: String,
    /// ID of the bounce.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Bounce type.
    #[serde(rename = "Type")]
    pub bounce_type: String,
    /// Bounce type code.
    pub type_code: i64,
    /// Bounce type name.
    pub name: String,
    /// Tag of the bounced message.
    pub tag: String,
    /// ID of the bounced message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// Message stream the bounce originated from.
    pub message_stream: String,
    /// Description of the bounce.
    pub description: String,
    /// Details on the bounce.
    pub details: String,
    /// Email address that bounced.
    pub email: String,
    /// When the bounce occurred.
    pub bounced_at: Option<DateTime<Utc>>,
    /// Whether a raw SMTP dump is available for this bounce. Postmark does
    /// not store dumps older than 30 days.
    pub dump_available: bool,
    /// Whether the bounce deactivated the email address.
    pub inactive: bool,
    /// Whether the address can be reactivated.
    pub can_activate: bool,
    /// Email subject.
    pub subject: String,
    /// Raw email content.
    pub content: String,
}

/// A page of bounces with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BouncesList {
    /// Total number of matching bounces.
    pub total_count: i64,
    /// The page of bounces.
    pub bounces: Vec<Bounce>,
}

/// Result of reactivating a bounced address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ActivatedBounce {
    /// Status message.
    pub message: String,
    /// The reactivated bounce.
    pub bounce: Bounce,
}

/// Wrapper for endpoints that return a raw message dump.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct DumpResponse {
    pub(crate) body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounce_parses_wire_format() {
        let bounce: Bounce = serde_json::from_str(
            r#"{
                "RecordType": "Bounce",
                "ID": 692560173,
                "Type": "HardBounce",
                "TypeCode": 1,
                "Name": "Hard bounce",
                "Tag": "Invitation",
                "MessageID": "2c1b63fe-43f2-4db5-91b0-8bdfa44a9316",
                "MessageStream": "outbound",
                "Description": "The server was unable to deliver your message.",
                "Details": "action: failed",
                "Email": "anything@blackhole.postmarkapp.com",
                "BouncedAt": "2014-01-15T16:09:19.6421112-05:00",
                "DumpAvailable": true,
                "Inactive": true,
                "CanActivate": true,
                "Subject": "SC API5 Test"
            }"#,
        )
        .unwrap();
        assert_eq!(bounce.id, 692560173);
        assert_eq!(bounce.bounce_type, "HardBounce");
        assert!(bounce.bounced_at.is_some());
        // Content is absent from list responses and defaults to empty.
        assert!(bounce.content.is_empty());
    }
}
