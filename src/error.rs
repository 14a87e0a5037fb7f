use crate::models::{AnnouncementStatus, ReportStatus, Role};
use thiserror::Error;

pub type MarketResult<T> = std::result::Result<T, MarketError>;

/// Failures surfaced to marketplace callers. Validation runs before any write.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("email {0} is already registered")]
    EmailTaken(String),

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("sellers must provide tax id, address and phone")]
    MissingSellerFields,

    #[error("administrators cannot self-register")]
    AdminRegistration,

    #[error("no account for email {0}")]
    UnknownEmail(String),

    #[error("wrong password")]
    WrongPassword,

    #[error("user {0} not found")]
    UserNotFound(u32),

    #[error("announcement {0} not found")]
    AnnouncementNotFound(u32),

    #[error("report {0} not found")]
    ReportNotFound(u32),

    #[error("action requires the {0:?} role")]
    RoleRequired(Role),

    #[error("user {user_id} does not own announcement {announcement_id}")]
    NotOwner { user_id: u32, announcement_id: u32 },

    #[error("announcement cannot go from {from:?} to {to:?}")]
    InvalidAnnouncementTransition {
        from: AnnouncementStatus,
        to: AnnouncementStatus,
    },

    #[error("report cannot go from {from:?} to {to:?}")]
    InvalidReportTransition { from: ReportStatus, to: ReportStatus },

    #[error("description must not be empty")]
    EmptyDescription,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
