//! Suppressed recipients on a message stream.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why an address is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuppressionReason {
    /// A hard bounce deactivated the address.
    HardBounce,
    /// The recipient marked a message as spam.
    SpamComplaint,
    /// The address was suppressed manually.
    ManualSuppression,
}

impl fmt::Display for SuppressionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuppressionReason::HardBounce => f.write_str("HardBounce"),
            SuppressionReason::SpamComplaint => f.write_str("SpamComplaint"),
            SuppressionReason::ManualSuppression => f.write_str("ManualSuppression"),
        }
    }
}

/// Who initiated a suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuppressionOrigin {
    /// The recipient themselves.
    Recipient,
    /// The Postmark customer.
    Customer,
    /// A Postmark administrator.
    Admin,
}

impl fmt::Display for SuppressionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuppressionOrigin::Recipient => f.write_str("Recipient"),
            SuppressionOrigin::Customer => f.write_str("Customer"),
            SuppressionOrigin::Admin => f.write_str("Admin"),
        }
    }
}

/// A suppressed recipient on a message stream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Suppression {
    /// The suppressed address.
    pub email_address: String,
    /// Why the address is suppressed.
    pub suppression_reason: Option<SuppressionReason>,
    /// Who initiated the suppression.
    pub origin: Option<SuppressionOrigin>,
    /// When the suppression was created.
    pub created_at: Option<DateTime<Utc>>,
}

/// Wire shape shared by the suppression endpoints: a list keyed
/// `Suppressions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SuppressionsEnvelope<T> {
    #[serde(default)]
    pub(crate) suppressions: Vec<T>,
}

/// An email address submitted for suppression or reactivation.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuppressionRequest {
    /// The address to suppress or reactivate.
    pub email_address: String,
}

impl SuppressionRequest {
    /// Convenience constructor.
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }
}

/// Per-address outcome of a suppression change request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SuppressionStatus {
    /// The address the outcome applies to.
    pub email_address: String,
    /// `Suppressed`, `Deleted` or `Failed`.
    pub status: String,
    /// Why the change failed, when it did.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppression_parses_wire_format() {
        let suppression: Suppression = serde_json::from_str(
            r#"{
                "EmailAddress": "address@wildbit.com",
                "SuppressionReason": "ManualSuppression",
                "Origin": "Recipient",
                "CreatedAt": "2019-12-10T08:58:33-05:00"
            }"#,
        )
        .unwrap();
        assert_eq!(suppression.email_address, "address@wildbit.com");
        assert_eq!(
            suppression.suppression_reason,
            Some(SuppressionReason::ManualSuppression)
        );
        assert_eq!(suppression.origin, Some(SuppressionOrigin::Recipient));
        assert!(suppression.created_at.is_some());
    }

    #[test]
    fn status_message_may_be_null() {
        let status: SuppressionStatus = serde_json::from_str(
            r#"{
                "EmailAddress": "good.address@wildbit.com",
                "Status": "Suppressed",
                "Message": null
            }"#,
        )
        .unwrap();
        assert_eq!(status.status, "Suppressed");
        assert!(status.message.is_none());
    }

    #[test]
    fn reason_and_origin_render_as_wire_values() {
        assert_eq!(SuppressionReason::HardBounce.to_string(), "HardBounce");
        assert_eq!(SuppressionOrigin::Recipient.to_string(), "Recipient");
    }
}
