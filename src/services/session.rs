use crate::models::User;
use crate::store::{Store, SESSION_SLOT};
use anyhow::{Context, Result};
use tracing::info;

/// The signed-in user, kept in its own storage slot
pub struct Session<'a> {
    store: &'a Store,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn current_user(&self) -> Result<Option<User>> {
        match self.store.storage().get(SESSION_SLOT)? {
            Some(raw) => {
                let user = serde_json::from_str(&raw).context("Failed to parse current user")?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    pub fn sign_in(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user).context("Failed to serialize current user")?;
        self.store.storage().set(SESSION_SLOT, &raw)?;
        info!("User {} signed in", user.id);
        Ok(())
    }

    pub fn sign_out(&self) -> Result<()> {
        self.store.storage().remove(SESSION_SLOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStorage, SEED_ADMIN_ID};

    #[test]
    fn sign_in_then_out() -> Result<()> {
        let store = Store::new(MemoryStorage::new());
        store.initialize()?;
        let session = Session::new(&store);
        assert!(session.current_user()?.is_none());

        let admin = store.users().find(SEED_ADMIN_ID)?.unwrap();
        session.sign_in(&admin)?;
        assert_eq!(session.current_user()?, Some(admin));

        session.sign_out()?;
        session.sign_out()?;
        assert!(session.current_user()?.is_none());
        Ok(())
    }
}
