use crate::error::{MarketError, MarketResult};
use crate::models::{Announcement, AnnouncementStatus, Role, User};
use crate::store::Store;
use chrono::Utc;
use tracing::info;

/// Seller announcements and their reservation/sale lifecycle
pub struct Announcements<'a> {
    store: &'a Store,
}

impl<'a> Announcements<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn create(&self, seller: &User, vehicle_id: u32, title: &str) -> MarketResult<Announcement> {
        if !seller.is_seller() {
            return Err(MarketError::RoleRequired(Role::Seller));
        }

        let announcements = self.store.announcements();
        let announcement = Announcement {
            id: announcements.next_id()?,
            seller_id: seller.id,
            vehicle_id,
            title: title.to_string(),
            status: AnnouncementStatus::Active,
            published_at: Utc::now(),
            updated_at: None,
            views: 0,
        };
        announcements.upsert(announcement.clone())?;

        info!("Seller {} published announcement {}", seller.id, announcement.id);
        Ok(announcement)
    }

    pub fn find(&self, id: u32) -> MarketResult<Option<Announcement>> {
        Ok(self.store.announcements().find(id)?)
    }

    pub fn all(&self) -> MarketResult<Vec<Announcement>> {
        Ok(self.store.announcements().list()?)
    }

    pub fn by_seller(&self, seller_id: u32) -> MarketResult<Vec<Announcement>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|a| a.seller_id == seller_id)
            .collect())
    }

    /// Move an announcement along the status table, stamping `updated_at`
    pub fn set_status(&self, id: u32, next: AnnouncementStatus) -> MarketResult<Announcement> {
        let current = self.find(id)?.ok_or(MarketError::AnnouncementNotFound(id))?;
        if !current.status.can_transition_to(next) {
            return Err(MarketError::InvalidAnnouncementTransition {
                from: current.status,
                to: next,
            });
        }

        let updated = self
            .store
            .announcements()
            .update(id, |a| {
                a.status = next;
                a.updated_at = Some(Utc::now());
            })?
            .ok_or(MarketError::AnnouncementNotFound(id))?;

        info!("Announcement {} {:?} -> {:?}", id, current.status, next);
        Ok(updated)
    }

    /// A buyer holds an active announcement
    pub fn reserve(&self, buyer: &User, id: u32) -> MarketResult<Announcement> {
        if !buyer.is_buyer() {
            return Err(MarketError::RoleRequired(Role::Buyer));
        }
        self.set_status(id, AnnouncementStatus::Reserved)
    }

    pub fn mark_sold(&self, actor: &User, id: u32) -> MarketResult<Announcement> {
        self.check_owner_or_admin(actor, id)?;
        self.set_status(id, AnnouncementStatus::Sold)
    }

    pub fn record_view(&self, id: u32) -> MarketResult<Option<Announcement>> {
        Ok(self
            .store
            .announcements()
            .update(id, |a| a.views = a.views.saturating_add(1))?)
    }

    /// Remove an announcement; absent ids are a no-op
    pub fn delete(&self, actor: &User, id: u32) -> MarketResult<bool> {
        if self.find(id)?.is_none() {
            return Ok(false);
        }
        self.check_owner_or_admin(actor, id)?;
        let removed = self.store.announcements().delete_by_id(id)?;
        info!("User {} deleted announcement {}", actor.id, id);
        Ok(removed)
    }

    fn check_owner_or_admin(&self, actor: &User, id: u32) -> MarketResult<()> {
        let announcement = self.find(id)?.ok_or(MarketError::AnnouncementNotFound(id))?;
        if actor.is_admin() || (actor.is_seller() && announcement.seller_id == actor.id) {
            Ok(())
        } else {
            Err(MarketError::NotOwner {
                user_id: actor.id,
                announcement_id: id,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::accounts::{Accounts, Registration};
    use crate::store::{MemoryStorage, SEED_ADMIN_ID};

    struct Fixture {
        store: Store,
    }

    impl Fixture {
        fn new() -> Self {
            let store = Store::new(MemoryStorage::new());
            store.initialize().unwrap();
            Self { store }
        }

        fn register(&self, email: &str, role: Role) -> User {
            Accounts::new(&self.store)
                .register(Registration {
                    name: email.to_string(),
                    email: email.to_string(),
                    password: "passwd".to_string(),
                    confirm_password: "passwd".to_string(),
                    role: Some(role),
                    tax_id: Some("500000000".to_string()),
                    address: Some("Rua 1".to_string()),
                    phone: Some("910000000".to_string()),
                })
                .unwrap()
        }

        fn admin(&self) -> User {
            self.store.users().find(SEED_ADMIN_ID).unwrap().unwrap()
        }
    }

    #[test]
    fn only_sellers_publish() {
        let fx = Fixture::new();
        let buyer = fx.register("b@x.pt", Role::Buyer);
        let seller = fx.register("s@x.pt", Role::Seller);
        let announcements = Announcements::new(&fx.store);

        assert!(matches!(
            announcements.create(&buyer, 1, "Clio"),
            Err(MarketError::RoleRequired(Role::Seller))
        ));

        let a = announcements.create(&seller, 1, "Renault Clio 2018").unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(a.status, AnnouncementStatus::Active);
        assert_eq!(a.views, 0);
        assert_eq!(announcements.by_seller(seller.id).unwrap(), vec![a]);
    }

    #[test]
    fn reserve_then_sell() {
        let fx = Fixture::new();
        let buyer = fx.register("b@x.pt", Role::Buyer);
        let seller = fx.register("s@x.pt", Role::Seller);
        let announcements = Announcements::new(&fx.store);
        let a = announcements.create(&seller, 9, "Ford Ranger").unwrap();

        let reserved = announcements.reserve(&buyer, a.id).unwrap();
        assert_eq!(reserved.status, AnnouncementStatus::Reserved);
        assert!(reserved.updated_at.is_some());

        assert!(matches!(
            announcements.reserve(&buyer, a.id),
            Err(MarketError::InvalidAnnouncementTransition { .. })
        ));

        let sold = announcements.mark_sold(&seller, a.id).unwrap();
        assert_eq!(sold.status, AnnouncementStatus::Sold);
        assert!(announcements.set_status(a.id, AnnouncementStatus::Active).is_err());
    }

    #[test]
    fn strangers_cannot_sell_or_delete() {
        let fx = Fixture::new();
        let seller = fx.register("s@x.pt", Role::Seller);
        let other = fx.register("o@x.pt", Role::Seller);
        let announcements = Announcements::new(&fx.store);
        let a = announcements.create(&seller, 9, "Ford Ranger").unwrap();

        assert!(matches!(
            announcements.mark_sold(&other, a.id),
            Err(MarketError::NotOwner { .. })
        ));
        assert!(matches!(
            announcements.delete(&other, a.id),
            Err(MarketError::NotOwner { .. })
        ));

        assert!(announcements.delete(&fx.admin(), a.id).unwrap());
        assert!(!announcements.delete(&fx.admin(), a.id).unwrap());
    }

    #[test]
    fn views_accumulate() {
        let fx = Fixture::new();
        let seller = fx.register("s@x.pt", Role::Seller);
        let announcements = Announcements::new(&fx.store);
        let a = announcements.create(&seller, 3, "Kia Ceed").unwrap();

        announcements.record_view(a.id).unwrap();
        let viewed = announcements.record_view(a.id).unwrap().unwrap();
        assert_eq!(viewed.views, 2);
        assert!(announcements.record_view(404).unwrap().is_none());
    }
}
