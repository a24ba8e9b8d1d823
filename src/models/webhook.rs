//! Webhook configuration on a server.

use serde::{Deserialize, Serialize};

use super::email::Header;

/// A webhook configured on the server.
///
/// The same type is used for create and edit requests; leave
/// [`id`](Self::id) at zero when creating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Webhook {
    /// Unique ID of the webhook.
    #[serde(rename = "ID", skip_serializing_if = "is_zero")]
    pub id: i64,
    /// URL the webhook posts to.
    #[serde(rename = "Url")]
    pub url: String,
    /// Message stream the webhook is attached to.
    pub message_stream: String,
    /// Basic auth credentials sent with each post, if any.
    #[serde(rename = "HttpAuth", skip_serializing_if = "Option::is_none")]
    pub http_auth: Option<WebhookHttpAuth>,
    /// Custom headers sent with each post.
    #[serde(rename = "HttpHeaders", skip_serializing_if = "Vec::is_empty")]
    pub http_headers: Vec<Header>,
    /// Which events fire the webhook.
    pub triggers: WebhookTrigger,
}

/// Basic auth credentials for webhook posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebhookHttpAuth {
    /// Basic auth username.
    pub username: String,
    /// Basic auth password.
    pub password: String,
}

/// Which events fire a webhook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebhookTrigger {
    /// Open events.
    pub open: WebhookTriggerOpen,
    /// Click events.
    pub click: WebhookTriggerEnabled,
    /// Delivery events.
    pub delivery: WebhookTriggerEnabled,
    /// Bounce events.
    pub bounce: WebhookTriggerContent,
    /// Spam complaint events.
    pub spam_complaint: WebhookTriggerContent,
    /// Subscription change events.
    pub subscription_change: WebhookTriggerEnabled,
}

/// On/off switch for a trigger.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebhookTriggerEnabled {
    /// Whether the trigger fires.
    pub enabled: bool,
}

/// Open trigger settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebhookTriggerOpen {
    /// Whether the trigger fires.
    pub enabled: bool,
    /// Only fire for the first open by a recipient.
    pub post_first_open_only: bool,
}

/// Trigger settings for events that can carry message content.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct WebhookTriggerContent {
    /// Whether the trigger fires.
    pub enabled: bool,
    /// Include the message content in the payload.
    pub include_content: bool,
}

/// Wire shape of the webhook list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub(crate) struct WebhooksList {
    pub(crate) webhooks: Vec<Webhook>,
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webhook_parses_wire_format() {
        let webhook: Webhook = serde_json::from_str(
            r#"{
                "ID": 1234567,
                "Url": "http://www.example.com/webhook-test-tracking",
                "MessageStream": "outbound",
                "HttpAuth": {"Username": "user", "Password": "pass"},
                "HttpHeaders": [{"Name": "name", "Value": "value"}],
                "Triggers": {
                    "Open": {"Enabled": true, "PostFirstOpenOnly": false},
                    "Click": {"Enabled": true},
                    "Delivery": {"Enabled": true},
                    "Bounce": {"Enabled": false, "IncludeContent": false},
                    "SpamComplaint": {"Enabled": false, "IncludeContent": false},
                    "SubscriptionChange": {"Enabled": true}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(webhook.id, 1234567);
        assert_eq!(webhook.message_stream, "outbound");
        assert_eq!(webhook.http_headers[0].name, "name");
        assert!(webhook.triggers.open.enabled);
        assert!(webhook.triggers.subscription_change.enabled);
        assert!(!webhook.triggers.bounce.include_content);
    }

    #[test]
    fn new_webhook_omits_zero_id() {
        let webhook = Webhook {
            url: "http://www.example.com/hook".into(),
            message_stream: "outbound".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&webhook).unwrap();
        assert!(!json.as_object().unwrap().contains_key("ID"));
        assert_eq!(json["Url"], "http://www.example.com/hook");
    }
}
