use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementStatus {
    Active,
    Sold,
    Reserved,
    Inactive,
}

impl AnnouncementStatus {
    /// Whether a seller or admin may move an announcement from `self` to `next`
    pub fn can_transition_to(self, next: AnnouncementStatus) -> bool {
        use AnnouncementStatus::*;
        matches!(
            (self, next),
            (Active, Inactive)
                | (Active, Reserved)
                | (Active, Sold)
                | (Inactive, Active)
                | (Reserved, Active)
                | (Reserved, Sold)
        )
    }
}

/// A seller's offer of one vehicle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: u32,
    pub seller_id: u32,
    pub vehicle_id: u32,
    pub title: String,
    pub status: AnnouncementStatus,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u32,
}
