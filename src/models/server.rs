//! Servers registered in the Postmark account.

use serde::{Deserialize, Serialize, Serializer};

/// A server registered in the account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Server {
    /// ID of the server.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Name of the server.
    pub name: String,
    /// API tokens associated with the server.
    pub api_tokens: Vec<String>,
    /// Link to the server overview page in Postmark.
    pub server_link: String,
    /// Color of the server in the rack screen. `Purple`, `Blue`,
    /// `Turquoise`, `Green`, `Red`, `Yellow` or `Grey`.
    pub color: String,
    /// Whether SMTP is enabled on this server.
    #[serde(rename = "SmtpApiActivated")]
    pub smtp_api_activated: bool,
    /// Whether raw email content is included with inbound webhook
    /// payloads.
    pub raw_email_enabled: bool,
    /// Server environment, `Live` or `Sandbox`. Serialized as `Live` when
    /// unset; cannot be changed after creation.
    #[serde(serialize_with = "delivery_type_or_default")]
    pub delivery_type: String,
    /// The inbound email address.
    pub inbound_address: String,
    /// URL to POST to every time an inbound event occurs.
    #[serde(rename = "InboundHookUrl")]
    pub inbound_hook_url: String,
    /// Deprecated, use the bounce webhook API instead.
    #[serde(rename = "BounceHookUrl")]
    pub bounce_hook_url: String,
    /// Deprecated, use the open-tracking webhook API instead.
    #[serde(rename = "OpenHookUrl")]
    pub open_hook_url: String,
    /// Deprecated, use the delivery webhook API instead.
    #[serde(rename = "DeliveryHookUrl")]
    pub delivery_hook_url: String,
    /// Only the first open by a particular recipient initiates the open
    /// webhook.
    pub post_first_open_only: bool,
    /// Whether open tracking is enabled for all emails sent through this
    /// server.
    pub track_opens: bool,
    /// Link tracking mode, `None`, `HtmlAndText`, `HtmlOnly` or
    /// `TextOnly`. Serialized as `None` when unset.
    #[serde(serialize_with = "track_links_or_default")]
    pub track_links: String,
    /// Whether bounce content is included in webhook payloads.
    pub include_bounce_content_in_hook: bool,
    /// The inbound domain for MX setup.
    pub inbound_domain: String,
    /// The hash of the inbound email address.
    pub inbound_hash: String,
    /// Maximum spam score for an inbound message before it is blocked.
    pub inbound_spam_threshold: i64,
    /// Whether SMTP API errors are included with bounce webhooks.
    #[serde(rename = "EnableSmtpApiErrorHooks")]
    pub enable_smtp_api_error_hooks: bool,
}

/// Fields accepted when creating a server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerCreateRequest {
    /// Name of the server.
    pub name: String,
    /// Color of the server in the server list.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Whether SMTP is enabled on this server.
    #[serde(rename = "SmtpApiActivated")]
    pub smtp_api_activated: bool,
    /// Include raw email content with inbound webhook payloads.
    pub raw_email_enabled: bool,
    /// Server environment, `Live` or `Sandbox`. Defaults to `Live`;
    /// cannot be changed after creation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delivery_type: String,
    /// URL to POST to every time an inbound event occurs.
    #[serde(rename = "InboundHookUrl", skip_serializing_if = "String::is_empty")]
    pub inbound_hook_url: String,
    /// Deprecated, use the bounce webhook API instead.
    #[serde(rename = "BounceHookUrl", skip_serializing_if = "String::is_empty")]
    pub bounce_hook_url: String,
    /// Deprecated, use the open-tracking webhook API instead.
    #[serde(rename = "OpenHookUrl", skip_serializing_if = "String::is_empty")]
    pub open_hook_url: String,
    /// Deprecated, use the delivery webhook API instead.
    #[serde(rename = "DeliveryHookUrl", skip_serializing_if = "String::is_empty")]
    pub delivery_hook_url: String,
    /// Deprecated, use the click webhook API instead.
    #[serde(rename = "ClickHookUrl", skip_serializing_if = "String::is_empty")]
    pub click_hook_url: String,
    /// Only the first open by a particular recipient initiates the open
    /// webhook.
    pub post_first_open_only: bool,
    /// The inbound domain for MX setup.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inbound_domain: String,
    /// Maximum spam score for an inbound message before it is blocked.
    pub inbound_spam_threshold: i64,
    /// Enable open tracking for all emails sent through this server.
    pub track_opens: bool,
    /// Link tracking mode, `None`, `HtmlAndText`, `HtmlOnly` or
    /// `TextOnly`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub track_links: String,
    /// Include bounce content in webhook payloads.
    pub include_bounce_content_in_hook: bool,
    /// Include SMTP API errors with bounce webhooks.
    #[serde(rename = "EnableSmtpApiErrorHooks")]
    pub enable_smtp_api_error_hooks: bool,
}

/// Fields accepted when editing a server. Identical to
/// [`ServerCreateRequest`] except the immutable `DeliveryType`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerEditRequest {
    /// Name of the server.
    pub name: String,
    /// Color of the server in the server list.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Whether SMTP is enabled on this server.
    #[serde(rename = "SmtpApiActivated")]
    pub smtp_api_activated: bool,
    /// Include raw email content with inbound webhook payloads.
    pub raw_email_enabled: bool,
    /// URL to POST to every time an inbound event occurs.
    #[serde(rename = "InboundHookUrl", skip_serializing_if = "String::is_empty")]
    pub inbound_hook_url: String,
    /// Deprecated, use the bounce webhook API instead.
    #[serde(rename = "BounceHookUrl", skip_serializing_if = "String::is_empty")]
    pub bounce_hook_url: String,
    /// Deprecated, use the open-tracking webhook API instead.
    #[serde(rename = "OpenHookUrl", skip_serializing_if = "String::is_empty")]
    pub open_hook_url: String,
    /// Deprecated, use the delivery webhook API instead.
    #[serde(rename = "DeliveryHookUrl", skip_serializing_if = "String::is_empty")]
    pub delivery_hook_url: String,
    /// Deprecated, use the click webhook API instead.
    #[serde(rename = "ClickHookUrl", skip_serializing_if = "String::is_empty")]
    pub click_hook_url: String,
    /// Only the first open by a particular recipient initiates the open
    /// webhook.
    pub post_first_open_only: bool,
    /// The inbound domain for MX setup.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub inbound_domain: String,
    /// Maximum spam score for an inbound message before it is blocked.
    pub inbound_spam_threshold: i64,
    /// Enable open tracking for all emails sent through this server.
    pub track_opens: bool,
    /// Link tracking mode, `None`, `HtmlAndText`, `HtmlOnly` or
    /// `TextOnly`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub track_links: String,
    /// Include bounce content in webhook payloads.
    pub include_bounce_content_in_hook: bool,
    /// Include SMTP API errors with bounce webhooks.
    #[serde(rename = "EnableSmtpApiErrorHooks")]
    pub enable_smtp_api_error_hooks: bool,
}

/// A page of servers with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ServersList {
    /// Total number of matching servers.
    pub total_count: i64,
    /// The page of servers.
    pub servers: Vec<Server>,
}

// Postmark rejects empty strings for these two fields, so serialization
// substitutes the documented defaults.

fn track_links_or_default<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let value = if value.is_empty() { "None" } else { value };
    serializer.serialize_str(value)
}

fn delivery_type_or_default<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    let value = if value.is_empty() { "Live" } else { value };
    serializer.serialize_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_serialize_with_defaults() {
        let server = Server {
            id: 1,
            name: "Production".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&server).unwrap();
        assert_eq!(json["TrackLinks"], "None");
        assert_eq!(json["DeliveryType"], "Live");
    }

    #[test]
    fn set_fields_serialize_verbatim() {
        let server = Server {
            track_links: "HtmlOnly".into(),
            delivery_type: "Sandbox".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&server).unwrap();
        assert_eq!(json["TrackLinks"], "HtmlOnly");
        assert_eq!(json["DeliveryType"], "Sandbox");
    }

    #[test]
    fn server_wire_names() {
        let server: Server = serde_json::from_str(
            r#"{
                "ID": 1,
                "Name": "Staging Testing",
                "ApiTokens": ["ab1234-cd5678"],
                "ServerLink": "https://postmarkapp.com/servers/1/streams",
                "Color": "red",
                "SmtpApiActivated": true,
                "RawEmailEnabled": false,
                "DeliveryType": "Live",
                "InboundAddress": "yourhash@inbound.postmarkapp.com",
                "InboundHookUrl": "http://inboundhook.example.com/inbound",
                "PostFirstOpenOnly": false,
                "TrackOpens": false,
                "TrackLinks": "None",
                "InboundSpamThreshold": 5,
                "EnableSmtpApiErrorHooks": false
            }"#,
        )
        .unwrap();
        assert_eq!(server.id, 1);
        assert_eq!(server.api_tokens, vec!["ab1234-cd5678".to_string()]);
        assert!(server.smtp_api_activated);
        assert_eq!(server.inbound_spam_threshold, 5);
    }
}
