//! Inbound rule triggers: addresses and domains blocked from inbound
//! processing.

use serde::{Deserialize, Serialize};

/// An inbound rule trigger.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundRuleTrigger {
    /// Unique ID of the trigger.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Email address or domain being blocked.
    pub rule: String,
}

/// A page of inbound rule triggers with the total match count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InboundRuleTriggersList {
    /// Total number of matching triggers.
    pub total_count: i64,
    /// The page of triggers.
    pub inbound_rules: Vec<InboundRuleTrigger>,
}

/// Request body to create an inbound rule trigger.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InboundRuleTriggerCreateRequest {
    pub(crate) rule: String,
}
