//! Messages received through Postmark's inbound processing.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use super::email::Header;

/// A message received by the Postmark server.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundMessage {
    /// The sender email address.
    pub from: String,
    /// The sender display name.
    pub from_name: String,
    /// Full sender details.
    pub from_full: InboundRecipient,
    /// The To addresses as a single string.
    pub to: String,
    /// Full details of each To recipient.
    pub to_full: Vec<InboundRecipient>,
    /// The Cc addresses as a single string.
    pub cc: String,
    /// Full details of each Cc recipient.
    pub cc_full: Vec<InboundRecipient>,
    /// The Bcc addresses as a single string.
    pub bcc: String,
    /// Full details of each Bcc recipient.
    pub bcc_full: Vec<InboundRecipient>,
    /// Reply-To address.
    pub reply_to: String,
    /// The address the message was actually delivered to.
    pub original_recipient: String,
    /// Email subject.
    pub subject: String,
    /// The raw Date header, e.g. `Thu, 13 Feb 2014 17:48:22 +0300`.
    /// Use [`time`](Self::time) for a parsed value.
    pub date: String,
    /// The mailbox hash extracted from the recipient address.
    pub mailbox_hash: String,
    /// Text body of the message.
    pub text_body: String,
    /// HTML body of the message.
    #[serde(rename = "HtmlBody")]
    pub html_body: String,
    /// Tag applied by an inbound rule.
    pub tag: String,
    /// All message headers.
    pub headers: Vec<Header>,
    /// Attachments.
    pub attachments: Vec<InboundAttachment>,
    /// Unique ID of the message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// Why the message was blocked, when it was.
    pub blocked_reason: String,
    /// Status of the message (`Processed`, `Blocked`, `Failed`).
    pub status: String,
}

impl InboundMessage {
    /// Parse the message's RFC 2822 `Date` header.
    pub fn time(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc2822(&self.date)
    }
}

/// One party on an inbound message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundRecipient {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Mailbox hash extracted from this address.
    pub mailbox_hash: String,
}

/// An attachment on an inbound message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundAttachment {
    /// Attachment file name.
    pub name: String,
    /// Base64 encoded file content.
    pub content: String,
    /// MIME content type.
    pub content_type: String,
    /// Size of the decoded content in bytes.
    pub content_length: i64,
}

/// A page of inbound messages with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundMessagesList {
    /// Total number of matching messages.
    pub total_count: i64,
    /// The page of messages.
    pub inbound_messages: Vec<InboundMessage>,
}
