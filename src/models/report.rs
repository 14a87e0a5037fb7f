use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    FraudulentListing,
    InappropriateContent,
    SuspiciousPrice,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    InReview,
    Resolved,
    Rejected,
}

impl ReportStatus {
    /// Reports only move forward: pending -> in_review -> resolved | rejected
    pub fn can_transition_to(self, next: ReportStatus) -> bool {
        use ReportStatus::*;
        matches!(
            (self, next),
            (Pending, InReview)
                | (Pending, Resolved)
                | (Pending, Rejected)
                | (InReview, Resolved)
                | (InReview, Rejected)
        )
    }

    pub fn is_open(self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::InReview)
    }
}

/// Abuse report filed by a user, optionally against an announcement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: u32,
    pub reporter_id: u32,
    #[serde(default)]
    pub announcement_id: Option<u32>,
    pub category: ReportCategory,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::ReportStatus::*;

    #[test]
    fn transitions_only_move_forward() {
        assert!(Pending.can_transition_to(InReview));
        assert!(Pending.can_transition_to(Resolved));
        assert!(InReview.can_transition_to(Rejected));

        assert!(!InReview.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn open_means_not_yet_decided() {
        assert!(Pending.is_open());
        assert!(InReview.is_open());
        assert!(!Resolved.is_open());
        assert!(!Rejected.is_open());
    }
}
