//! Recipient data removal requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to remove a recipient's data from Postmark.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataRemovalRequest {
    /// Email address of the recipient whose data should be removed.
    pub recipient: String,
}

/// Processing state of a data removal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DataRemovalStatus {
    /// Queued, not yet started.
    #[default]
    Pending,
    /// Removal in progress.
    Processing,
    /// Removal finished.
    Completed,
    /// Removal failed.
    Failed,
    /// Unrecognized status.
    #[serde(other)]
    Unknown,
}

/// State of a data removal request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DataRemoval {
    /// Unique ID of the request.
    #[serde(rename = "ID")]
    pub id: i64,
    /// Email address of the recipient whose data is being removed.
    pub recipient: String,
    /// When the removal was requested.
    pub requested_at: Option<DateTime<Utc>>,
    /// Current status of the removal.
    pub status: DataRemovalStatus,
    /// When the removal completed, if it has.
    pub completed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_removal_parses_wire_format() {
        let removal: DataRemoval = serde_json::from_str(
            r#"{
                "ID": 42,
                "Recipient": "gone@example.com",
                "RequestedAt": "2023-02-21T09:00:00-05:00",
                "Status": "Processing",
                "CompletedAt": null
            }"#,
        )
        .unwrap();
        assert_eq!(removal.id, 42);
        assert_eq!(removal.status, DataRemovalStatus::Processing);
        assert!(removal.completed_at.is_none());
    }
}
