//! Outbound message activity: details, opens, and clicks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A message sent from the Postmark server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundMessage {
    /// Text body of the message.
    pub text_body: String,
    /// HTML body of the message.
    #[serde(rename = "HtmlBody")]
    pub html_body: String,
    /// Raw source of the message.
    pub body: String,
    /// Tag associated with this message.
    pub tag: String,
    /// Unique ID of the message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// To recipients.
    pub to: Vec<Recipient>,
    /// Cc recipients.
    pub cc: Vec<Recipient>,
    /// Bcc recipients.
    pub bcc: Vec<Recipient>,
    /// Recipient email addresses.
    pub recipients: Vec<String>,
    /// When the message was received by Postmark.
    pub received_at: Option<DateTime<Utc>>,
    /// The sender email address.
    pub from: String,
    /// Email subject.
    pub subject: String,
    /// Attachment names.
    pub attachments: Vec<String>,
    /// Status of the message in Postmark activity.
    pub status: String,
    /// Things that have happened to this message (`Delivered`, `Opened`,
    /// `Bounced`).
    pub message_events: Vec<MessageEvent>,
}

/// An individual who received a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Recipient {
    /// The recipient's name.
    pub name: String,
    /// The recipient's email address.
    pub email: String,
}

/// Something that happened to a message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MessageEvent {
    /// Email address of the recipient the event applies to.
    pub recipient: String,
    /// When the event occurred.
    pub received_at: Option<DateTime<Utc>>,
    /// Event type (`Delivered`, `Opened`, `Bounced`).
    #[serde(rename = "Type")]
    pub event_type: String,
    /// Additional information about the event.
    pub details: HashMap<String, String>,
}

/// A page of outbound messages with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutboundMessagesList {
    /// Total number of matching messages.
    pub total_count: i64,
    /// The page of messages.
    pub messages: Vec<OutboundMessage>,
}

/// A single email open.
///
/// An open is bound to a single recipient; the same message opened by two
/// recipients produces two entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Open {
    /// Whether this was the first open of the message by this recipient.
    /// Postmark only stores first opens; later opens arrive via webhooks.
    pub first_open: bool,
    /// Full user-agent header passed by the client software.
    pub user_agent: String,
    /// Unique ID of the message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// The email client (or browser) used to open the email.
    pub client: HashMap<String, String>,
    /// The operating system used to open the email.
    #[serde(rename = "OS")]
    pub os: HashMap<String, String>,
    /// Platform used to open the email: `WebMail`, `Desktop`, `Mobile` or
    /// `Unknown`.
    pub platform: String,
    /// Reading time in seconds.
    pub read_seconds: i64,
    /// Recipient IP and the geographic information derived from it.
    pub geo: HashMap<String, String>,
}

/// A single email click.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Click {
    /// Type of record (always "Click").
    pub record_type: String,
    /// Where the link was clicked, `HTML` or `Text`.
    pub click_location: String,
    /// The email client (or browser) used to click the link.
    pub client: HashMap<String, String>,
    /// The operating system used to click the link.
    #[serde(rename = "OS")]
    pub os: HashMap<String, String>,
    /// Platform used to click the link.
    pub platform: String,
    /// Full user-agent header passed by the client software.
    pub user_agent: String,
    /// The original link that was clicked.
    pub original_link: String,
    /// Recipient IP and the geographic information derived from it.
    pub geo: HashMap<String, String>,
    /// Unique ID of the message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// Message stream the click originated from.
    pub message_stream: String,
    /// When the click occurred.
    pub received_at: Option<DateTime<Utc>>,
    /// Tag associated with the message.
    pub tag: String,
    /// Email address of the recipient who clicked.
    pub recipient: String,
}

/// A page of opens with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpensList {
    /// Total number of matching opens.
    pub total_count: i64,
    /// The page of opens.
    pub opens: Vec<Open>,
}

/// A page of clicks with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClicksList {
    /// Total number of matching clicks.
    pub total_count: i64,
    /// The page of clicks.
    pub clicks: Vec<Click>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_parses_wire_format() {
        let open: Open = serde_json::from_str(
            r#"{
                "FirstOpen": true,
                "Client": {
                    "Name": "Chrome 35.0.1916.153",
                    "Company": "Google",
                    "Family": "Chrome"
                },
                "OS": {
                    "Name": "OS X 10.7 Lion",
                    "Company": "Apple Computer, Inc.",
                    "Family": "OS X 10"
                },
                "Platform": "WebMail",
                "UserAgent": "Mozilla/5.0 ...",
                "ReadSeconds": 16,
                "Geo": {
                    "CountryISOCode": "RS",
                    "Country": "Serbia",
                    "IP": "8.8.8.8"
                },
                "MessageID": "927e56d4-dc66-4070-bbf0-1db76c2ae14b"
            }"#,
        )
        .unwrap();
        assert!(open.first_open);
        assert_eq!(open.read_seconds, 16);
        assert_eq!(open.os["Family"], "OS X 10");
        assert_eq!(open.message_id, "927e56d4-dc66-4070-bbf0-1db76c2ae14b");
    }
}
