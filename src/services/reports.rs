use crate::error::{MarketError, MarketResult};
use crate::models::{Report, ReportCategory, ReportStatus, Role, User};
use crate::store::Store;
use chrono::Utc;
use tracing::info;

pub struct Reports<'a> {
    store: &'a Store,
}

impl<'a> Reports<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// File a new pending report
    pub fn submit(
        &self,
        reporter: &User,
        announcement_id: Option<u32>,
        category: ReportCategory,
        description: &str,
    ) -> MarketResult<Report> {
        if description.trim().is_empty() {
            return Err(MarketError::EmptyDescription);
        }

        let reports = self.store.reports();
        let report = Report {
            id: reports.next_id()?,
            reporter_id: reporter.id,
            announcement_id,
            category,
            description: description.to_string(),
            status: ReportStatus::Pending,
            created_at: Utc::now(),
        };
        reports.upsert(report.clone())?;

        info!("User {} filed report {} ({:?})", reporter.id, report.id, category);
        Ok(report)
    }

    pub fn all(&self) -> MarketResult<Vec<Report>> {
        Ok(self.store.reports().list()?)
    }

    pub fn for_user(&self, user_id: u32) -> MarketResult<Vec<Report>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|r| r.reporter_id == user_id)
            .collect())
    }

    /// Move a report forward. `None` when no report has that id.
    pub fn set_status(&self, id: u32, next: ReportStatus) -> MarketResult<Option<Report>> {
        let Some(current) = self.store.reports().find(id)? else {
            return Ok(None);
        };
        if !current.status.can_transition_to(next) {
            return Err(MarketError::InvalidReportTransition {
                from: current.status,
                to: next,
            });
        }
        let updated = self.store.reports().update(id, |r| r.status = next)?;
        info!("Report {} {:?} -> {:?}", id, current.status, next);
        Ok(updated)
    }

    pub fn resolve(&self, admin: &User, id: u32) -> MarketResult<Option<Report>> {
        require_admin(admin)?;
        self.set_status(id, ReportStatus::Resolved)
    }

    pub fn reject(&self, admin: &User, id: u32) -> MarketResult<Option<Report>> {
        require_admin(admin)?;
        self.set_status(id, ReportStatus::Rejected)
    }
}

/// Split reports into (open, closed), keeping order
pub fn split_open_closed(reports: Vec<Report>) -> (Vec<Report>, Vec<Report>) {
    reports.into_iter().partition(|r| r.status.is_open())
}

pub(crate) fn require_admin(user: &User) -> MarketResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(MarketError::RoleRequired(Role::Administrator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, SEED_ADMIN_ID};

    fn setup() -> (Store, User) {
        let store = Store::new(MemoryStorage::new());
        store.initialize().unwrap();
        let admin = store.users().find(SEED_ADMIN_ID).unwrap().unwrap();
        (store, admin)
    }

    #[test]
    fn submitted_reports_start_pending() {
        let (store, admin) = setup();
        let reports = Reports::new(&store);

        let r = reports
            .submit(&admin, Some(4), ReportCategory::FraudulentListing, "Fotos roubadas")
            .unwrap();
        assert_eq!(r.id, 1);
        assert_eq!(r.status, ReportStatus::Pending);
        assert_eq!(reports.for_user(admin.id).unwrap(), vec![r]);
        assert!(reports.for_user(42).unwrap().is_empty());
    }

    #[test]
    fn blank_description_is_rejected() {
        let (store, admin) = setup();
        let err = Reports::new(&store)
            .submit(&admin, None, ReportCategory::Other, "  \n")
            .unwrap_err();
        assert!(matches!(err, MarketError::EmptyDescription));
        assert!(store.reports().is_empty().unwrap());
    }

    #[test]
    fn status_only_moves_forward() {
        let (store, admin) = setup();
        let reports = Reports::new(&store);
        let r = reports
            .submit(&admin, None, ReportCategory::SuspiciousPrice, "Barato demais")
            .unwrap();

        let in_review = reports.set_status(r.id, ReportStatus::InReview).unwrap().unwrap();
        assert_eq!(in_review.status, ReportStatus::InReview);

        let resolved = reports.resolve(&admin, r.id).unwrap().unwrap();
        assert_eq!(resolved.status, ReportStatus::Resolved);

        assert!(matches!(
            reports.reject(&admin, r.id),
            Err(MarketError::InvalidReportTransition { .. })
        ));
        assert_eq!(reports.set_status(77, ReportStatus::Resolved).unwrap(), None);
    }

    #[test]
    fn split_keeps_open_and_closed_apart() {
        let (store, admin) = setup();
        let reports = Reports::new(&store);
        for text in ["a", "b", "c"] {
            reports.submit(&admin, None, ReportCategory::Other, text).unwrap();
        }
        reports.reject(&admin, 2).unwrap();

        let (open, closed) = split_open_closed(reports.all().unwrap());
        assert_eq!(open.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(closed.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }
}
