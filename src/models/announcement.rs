//! Admin announcements shown at the top of the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin-posted message. Immutable once posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Announcement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Orders announcements newest first. Ties keep their incoming order.
pub fn newest_first(mut announcements: Vec<Announcement>) -> Vec<Announcement> {
    announcements.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    announcements
}
