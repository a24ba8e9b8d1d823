//! Types for sending email and reading send results.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_false;

/// Link tracking modes for outgoing email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LinkTracking {
    /// No link tracking.
    #[default]
    None,
    /// Track links in both the HTML and text bodies.
    HtmlAndText,
    /// Track links in the HTML body only.
    HtmlOnly,
    /// Track links in the text body only.
    TextOnly,
}

/// A single email message.
///
/// `html_body` or `text_body` must be set; everything else is optional.
///
/// # Example
///
/// ```
/// use postmark_rs::Email;
///
/// let email = Email {
///     from: "sender@example.com".into(),
///     to: "receiver@example.com".into(),
///     subject: "Hello".into(),
///     html_body: "<b>Hello</b>".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Email {
    /// The sender email address. Must have a registered and confirmed
    /// sender signature.
    pub from: String,
    /// Recipient email address. Multiple addresses are comma separated.
    /// Max 50.
    pub to: String,
    /// Cc recipient email address. Multiple addresses are comma separated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cc: String,
    /// Bcc recipient email address. Multiple addresses are comma separated.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bcc: String,
    /// Email subject.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subject: String,
    /// Tag for categorizing outgoing emails and getting detailed
    /// statistics.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// HTML body of the message.
    #[serde(rename = "HtmlBody", skip_serializing_if = "String::is_empty")]
    pub html_body: String,
    /// Plain text body of the message.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text_body: String,
    /// Reply To override email address. Defaults to the Reply To set in
    /// the sender signature.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    /// Custom headers to include.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Activate open tracking for this email.
    #[serde(skip_serializing_if = "is_false")]
    pub track_opens: bool,
    /// Activate link tracking for this email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_links: Option<LinkTracking>,
    /// Custom metadata key/value pairs.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    /// Attachments.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    /// Message stream to send through. Defaults to the transactional
    /// stream when omitted.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message_stream: String,
    /// Apply style blocks as inline attributes to the rendered HTML.
    #[serde(rename = "InlineCSS", skip_serializing_if = "is_false")]
    pub inline_css: bool,
}

/// A custom email header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// A file attachment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    /// Attachment file name.
    pub name: String,
    /// Base64 encoded file content.
    pub content: String,
    /// MIME content type.
    pub content_type: String,
    /// Content ID for referencing the attachment from the HTML body
    /// (inline images).
    #[serde(
        rename = "ContentID",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub content_id: Option<String>,
}

/// Result of a single send, as returned by the send endpoints.
///
/// Postmark reports per-message failures inside a 200 response through
/// [`error_code`](Self::error_code).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailResponse {
    /// Recipient the result applies to.
    pub to: String,
    /// When the message was accepted.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Unique ID assigned to the message.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// Postmark error code; zero means accepted.
    pub error_code: i64,
    /// Status message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_are_omitted_from_payload() {
        let email = Email {
            from: "sender@example.com".into(),
            to: "receiver@example.com".into(),
            text_body: "Hello".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&email).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["From"], "sender@example.com");
        assert_eq!(object["TextBody"], "Hello");
        assert!(!object.contains_key("Cc"));
        assert!(!object.contains_key("Headers"));
        assert!(!object.contains_key("TrackOpens"));
        assert!(!object.contains_key("TrackLinks"));
        assert!(!object.contains_key("InlineCSS"));
    }

    #[test]
    fn full_email_round_trips() {
        let email = Email {
            from: "sender@example.com".into(),
            to: "receiver@example.com".into(),
            cc: "copied@example.com".into(),
            subject: "Test".into(),
            tag: "Invitation".into(),
            html_body: "<b>Hello</b>".into(),
            text_body: "Hello".into(),
            headers: vec![Header {
                name: "CUSTOM-HEADER".into(),
                value: "value".into(),
            }],
            track_opens: true,
            track_links: Some(LinkTracking::HtmlOnly),
            attachments: vec![Attachment {
                name: "readme.txt".into(),
                content: "dGVzdCBjb250ZW50".into(),
                content_type: "text/plain".into(),
                content_id: None,
            }],
            inline_css: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["HtmlBody"], "<b>Hello</b>");
        assert_eq!(json["TrackLinks"], "HtmlOnly");
        assert_eq!(json["InlineCSS"], true);
        assert_eq!(json["Headers"][0]["Name"], "CUSTOM-HEADER");

        let back: Email = serde_json::from_value(json).unwrap();
        assert_eq!(back.to, email.to);
        assert_eq!(back.attachments.len(), 1);
    }

    #[test]
    fn email_response_parses_wire_format() {
        let response: EmailResponse = serde_json::from_str(
            r#"{
                "To": "receiver@example.com",
                "SubmittedAt": "2014-02-17T07:25:01.4178645-05:00",
                "MessageID": "0a129aee-e1cd-480d-b08d-4f48548ff48d",
                "ErrorCode": 0,
                "Message": "OK"
            }"#,
        )
        .unwrap();
        assert_eq!(response.message_id, "0a129aee-e1cd-480d-b08d-4f48548ff48d");
        assert_eq!(response.error_code, 0);
        assert!(response.submitted_at.is_some());
    }
}
