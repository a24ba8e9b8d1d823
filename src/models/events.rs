//! Webhook event payloads posted by Postmark.
//!
//! These types are for consumers of Postmark webhooks; the client never
//! sends them. Each payload repeats the fields of [`EventCommon`] at its
//! top level.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Fields common to all webhook event types.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EventCommon {
    /// Kind of event (`Delivery`, `Open`, `Click`, `Bounce`,
    /// `SpamComplaint`, `SubscriptionChange`).
    pub record_type: String,
    /// Unique ID of the message the event relates to.
    #[serde(rename = "MessageID")]
    pub message_id: String,
    /// Message stream the message was sent through.
    pub message_stream: String,
    /// Metadata attached to the message at send time.
    pub metadata: HashMap<String, Value>,
    /// Tag of the message.
    pub tag: String,
}

/// A successful delivery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeliveryEvent {
    /// Common event fields.
    #[serde(flatten)]
    pub common: EventCommon,
    /// ID of the sending server.
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    /// Recipient the message was delivered to.
    pub recipient: String,
    /// When the delivery occurred.
    pub delivered_at: Option<DateTime<Utc>>,
    /// Delivery details from the receiving server.
    pub details: String,
}

/// An email open.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OpenEvent {
    /// Common event fields.
    #[serde(flatten)]
    pub common: EventCommon,
    /// Whether this was the recipient's first open of the message.
    pub first_open: bool,
    /// Recipient who opened the message.
    pub recipient: String,
    /// When the open occurred.
    pub received_at: Option<DateTime<Utc>>,
    /// Platform used to open the email.
    pub platform: String,
    /// Reading time in seconds.
    pub read_seconds: i64,
    /// Full user-agent header of the client.
    pub user_agent: String,
    /// Operating system details.
    #[serde(rename = "OS")]
    pub os: AgentInfo,
    /// Email client details.
    pub client: AgentInfo,
    /// Geographic details derived from the recipient IP.
    pub geo: GeoInfo,
}

/// A link click.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ClickEvent {
    /// Common event fields.
    #[serde(flatten)]
    pub common: EventCommon,
    /// Recipient who clicked.
    pub recipient: String,
    /// When the click occurred.
    pub received_at: Option<DateTime<Utc>>,
    /// Platform used to click the link.
    pub platform: String,
    /// Where the link was clicked, `HTML` or `Text`.
    pub click_location: String,
    /// The original link that was clicked.
    pub original_link: String,
    /// Full user-agent header of the client.
    pub user_agent: String,
    /// Operating system details.
    #[serde(rename = "OS")]
    pub os: AgentInfo,
    /// Email client details.
    pub client: AgentInfo,
    /// Geographic details derived from the recipient IP.
    pub geo: GeoInfo,
}

/// A bounce.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BounceEvent {
    /// Common event fields.
    #[serde(flatten)]
    pub common: EventCommon,
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
    /// ID of the sending server.
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    /// Description of the bounce.
    pub description: String,
    /// Details on the bounce.
    pub details: String,
    /// Email address that bounced.
    pub email: String,
    /// The sender address.
    pub from: String,
    /// When the bounce occurred.
    pub bounced_at: Option<DateTime<Utc>>,
    /// Whether a raw SMTP dump is available.
    pub dump_available: bool,
    /// Whether the bounce deactivated the address.
    pub inactive: bool,
    /// Whether the address can be reactivated.
    pub can_activate: bool,
    /// Email subject.
    pub subject: String,
    /// Raw email content, when the trigger includes content.
    pub content: String,
}

/// A spam complaint. Shares the bounce payload shape.
pub type SpamComplaintEvent = BounceEvent;

/// A subscription change (suppression added or removed).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SubscriptionChangeEvent {
    /// Common event fields.
    #[serde(flatten)]
    pub common: EventCommon,
    /// ID of the sending server.
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    /// When the change occurred.
    pub changed_at: Option<DateTime<Utc>>,
    /// The recipient the change applies to.
    pub recipient: String,
    /// What initiated the change.
    pub origin: String,
    /// Whether sending to the recipient is now suppressed.
    pub suppress_sending: bool,
    /// Why the recipient is suppressed.
    pub suppression_reason: String,
}

/// Operating system or email client details on open and click events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AgentInfo {
    /// Product name.
    pub name: String,
    /// Product family.
    pub family: String,
    /// Vendor.
    pub company: String,
}

/// Geographic details on open and click events.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GeoInfo {
    /// IP the event originated from.
    #[serde(rename = "IP")]
    pub ip: String,
    /// City.
    pub city: String,
    /// Country name.
    pub country: String,
    /// ISO country code.
    #[serde(rename = "CountryISOCode")]
    pub country_iso_code: String,
    /// Region name.
    pub region: String,
    /// ISO region code.
    #[serde(rename = "RegionISOCode")]
    pub region_iso_code: String,
    /// Postal code.
    pub zip: String,
    /// Latitude/longitude pair.
    pub coords: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_event_parses_flattened_common_fields() {
        let event: OpenEvent = serde_json::from_str(
            r#"{
                "RecordType": "Open",
                "MessageStream": "outbound",
                "FirstOpen": true,
                "Recipient": "john@example.com",
                "MessageID": "883953f4-6105-42a2-a16a-77a8eac79483",
                "ReceivedAt": "2019-11-05T16:33:54.9070259Z",
                "Platform": "WebMail",
                "ReadSeconds": 5,
                "Tag": "welcome-email",
                "UserAgent": "Mozilla/5.0",
                "OS": {"Name": "OS X 10.7 Lion", "Family": "OS X 10", "Company": "Apple"},
                "Client": {"Name": "Chrome 35", "Family": "Chrome", "Company": "Google"},
                "Geo": {"IP": "188.2.95.4", "City": "Novi Sad", "Country": "Serbia",
                        "CountryISOCode": "RS", "Region": "Autonomna Pokrajina Vojvodina",
                        "RegionISOCode": "VO", "Zip": "21000", "Coords": "45.2517,19.8369"}
            }"#,
        )
        .unwrap();
        assert_eq!(event.common.record_type, "Open");
        assert_eq!(event.common.tag, "welcome-email");
        assert!(event.first_open);
        assert_eq!(event.geo.country_iso_code, "RS");
        assert_eq!(event.os.family, "OS X 10");
    }
}
