use crate::error::MarketResult;
use crate::models::{ReportStatus, User};
use crate::services::reports::require_admin;
use crate::store::Store;
use serde::Serialize;
use tracing::info;

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Overview {
    pub total_users: usize,
    pub total_announcements: usize,
    pub pending_reports: usize,
}

pub struct Admin<'a> {
    store: &'a Store,
}

impl<'a> Admin<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> MarketResult<Overview> {
        let pending_reports = self
            .store
            .reports()
            .list()?
            .iter()
            .filter(|r| r.status == ReportStatus::Pending)
            .count();

        Ok(Overview {
            total_users: self.store.users().len()?,
            total_announcements: self.store.announcements().len()?,
            pending_reports,
        })
    }

    pub fn users(&self) -> MarketResult<Vec<User>> {
        Ok(self.store.users().list()?)
    }

    /// Delete an account. Returns false if it did not exist.
    pub fn delete_user(&self, actor: &User, user_id: u32) -> MarketResult<bool> {
        require_admin(actor)?;
        let removed = self.store.users().delete_by_id(user_id)?;
        if removed {
            info!("Admin {} deleted user {}", actor.id, user_id);
        }
        Ok(removed)
    }
}
