pub mod codec;
pub mod collection;
pub mod file;
pub mod memory;
pub mod traits;

pub use collection::Collection;
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use traits::{Record, Storage};

use crate::models::{Announcement, PasswordDigest, Profile, Report, User};
use anyhow::Result;
use chrono::Utc;
use tracing::info;

pub const USERS_SLOT: &str = "autopremium_users";
pub const REPORTS_SLOT: &str = "autopremium_reports";
pub const ANNOUNCEMENTS_SLOT: &str = "autopremium_announcements";
pub const SESSION_SLOT: &str = "current_user";

pub const SEED_ADMIN_ID: u32 = 1;
pub const SEED_ADMIN_NAME: &str = "Administrador";
pub const SEED_ADMIN_EMAIL: &str = "admin@autopremium.pt";
pub const SEED_ADMIN_PASSWORD: &str = "admin123";

impl Record for User {
    const SLOT: &'static str = USERS_SLOT;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Report {
    const SLOT: &'static str = REPORTS_SLOT;

    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Announcement {
    const SLOT: &'static str = ANNOUNCEMENTS_SLOT;

    fn id(&self) -> u32 {
        self.id
    }
}

/// The marketplace's persistence, one instance per process
pub struct Store {
    storage: Box<dyn Storage>,
}

impl Store {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn users(&self) -> Collection<'_, User> {
        Collection::new(self.storage())
    }

    pub fn reports(&self) -> Collection<'_, Report> {
        Collection::new(self.storage())
    }

    pub fn announcements(&self) -> Collection<'_, Announcement> {
        Collection::new(self.storage())
    }

    /// Seed the administrator account when there are no users at all.
    /// Returns whether a seed was written.
    pub fn initialize(&self) -> Result<bool> {
        let users = self.users();
        if !users.is_empty()? {
            return Ok(false);
        }

        users.upsert(User {
            id: SEED_ADMIN_ID,
            name: SEED_ADMIN_NAME.to_string(),
            email: SEED_ADMIN_EMAIL.to_string(),
            password: PasswordDigest::new(SEED_ADMIN_PASSWORD),
            photo: None,
            registered_at: Some(Utc::now()),
            profile: Profile::Administrator,
        })?;

        info!(
            "Seeded administrator {} in {} storage",
            SEED_ADMIN_EMAIL,
            self.storage.backend_name()
        );
        Ok(true)
    }
}
