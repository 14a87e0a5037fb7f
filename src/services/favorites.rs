use crate::catalog::brands::brand_by_id;
use crate::error::{MarketError, MarketResult};
use crate::models::{Brand, Profile, Role};
use crate::store::Store;
use tracing::debug;

/// Favourite brands of buyers
pub struct Favorites<'a> {
    store: &'a Store,
}

impl<'a> Favorites<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add the brand if absent, remove it if present. Returns whether it is
    /// now a favourite.
    pub fn toggle_favorite_brand(&self, user_id: u32, brand_id: u32) -> MarketResult<bool> {
        let user = self
            .store
            .users()
            .find(user_id)?
            .ok_or(MarketError::UserNotFound(user_id))?;
        if !user.is_buyer() {
            return Err(MarketError::RoleRequired(Role::Buyer));
        }

        let mut now_favorite = false;
        self.store.users().update(user_id, |u| {
            if let Profile::Buyer { favorite_brands, .. } = &mut u.profile {
                if let Some(pos) = favorite_brands.iter().position(|&b| b == brand_id) {
                    favorite_brands.remove(pos);
                } else {
                    favorite_brands.push(brand_id);
                    now_favorite = true;
                }
            }
        })?;

        debug!("User {} favourite brand {} -> {}", user_id, brand_id, now_favorite);
        Ok(now_favorite)
    }

    /// The buyer's favourite brands that exist in the brand table
    pub fn favorite_brands(&self, user_id: u32) -> MarketResult<Vec<Brand>> {
        let user = self
            .store
            .users()
            .find(user_id)?
            .ok_or(MarketError::UserNotFound(user_id))?;
        match user.profile {
            Profile::Buyer { favorite_brands, .. } => {
                Ok(favorite_brands.into_iter().filter_map(brand_by_id).collect())
            }
            _ => Err(MarketError::RoleRequired(Role::Buyer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::accounts::{Accounts, Registration};
    use crate::store::{MemoryStorage, SEED_ADMIN_ID};

    fn buyer(store: &Store) -> u32 {
        Accounts::new(store)
            .register(Registration {
                name: "Tiago".to_string(),
                email: "tiago@example.pt".to_string(),
                password: "123456".to_string(),
                confirm_password: "123456".to_string(),
                role: Some(Role::Buyer),
                ..Default::default()
            })
            .unwrap()
            .id
    }

    #[test]
    fn toggle_adds_then_removes() {
        let store = Store::new(MemoryStorage::new());
        let id = buyer(&store);
        let favorites = Favorites::new(&store);

        assert!(favorites.toggle_favorite_brand(id, 7).unwrap());
        assert!(favorites.toggle_favorite_brand(id, 1).unwrap());
        let names: Vec<String> = favorites
            .favorite_brands(id)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Toyota", "BMW"]);

        assert!(!favorites.toggle_favorite_brand(id, 7).unwrap());
        assert_eq!(favorites.favorite_brands(id).unwrap().len(), 1);
    }

    #[test]
    fn only_buyers_have_favorites() {
        let store = Store::new(MemoryStorage::new());
        store.initialize().unwrap();
        let favorites = Favorites::new(&store);

        assert!(matches!(
            favorites.toggle_favorite_brand(SEED_ADMIN_ID, 1),
            Err(MarketError::RoleRequired(Role::Buyer))
        ));
        assert!(matches!(
            favorites.toggle_favorite_brand(99, 1),
            Err(MarketError::UserNotFound(99))
        ));
    }
}
