use crate::error::{MarketError, MarketResult};
use crate::models::{PasswordDigest, Profile, Role, User};
use crate::store::Store;
use chrono::Utc;
use tracing::{info, warn};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration form as filled in by a visitor
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub tax_id: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

fn check_new_password(password: &str, confirm: &str) -> MarketResult<()> {
    if password != confirm {
        return Err(MarketError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MarketError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub struct Accounts<'a> {
    store: &'a Store,
}

impl<'a> Accounts<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub fn find_by_email(&self, email: &str) -> MarketResult<Option<User>> {
        Ok(self
            .store
            .users()
            .list()?
            .into_iter()
            .find(|u| u.email == email))
    }

    pub fn find(&self, id: u32) -> MarketResult<Option<User>> {
        Ok(self.store.users().find(id)?)
    }

    /// Create a buyer or seller account
    pub fn register(&self, form: Registration) -> MarketResult<User> {
        check_new_password(&form.password, &form.confirm_password)?;

        if self.find_by_email(&form.email)?.is_some() {
            return Err(MarketError::EmailTaken(form.email));
        }

        let profile = match form.role.unwrap_or(Role::Buyer) {
            Role::Buyer => Profile::Buyer {
                favorite_brands: Vec::new(),
                preferences: None,
            },
            Role::Seller => {
                let (Some(tax_id), Some(address), Some(phone)) = (
                    required(&form.tax_id),
                    required(&form.address),
                    required(&form.phone),
                ) else {
                    return Err(MarketError::MissingSellerFields);
                };
                Profile::Seller {
                    tax_id,
                    address,
                    phone: Some(phone),
                    bank_details: None,
                }
            }
            Role::Administrator => return Err(MarketError::AdminRegistration),
        };

        let users = self.store.users();
        let user = User {
            id: users.next_id()?,
            name: form.name,
            email: form.email,
            password: PasswordDigest::new(&form.password),
            photo: None,
            registered_at: Some(Utc::now()),
            profile,
        };
        users.upsert(user.clone())?;

        info!("Registered {:?} account {} ({})", user.role(), user.id, user.email);
        Ok(user)
    }

    pub fn login(&self, email: &str, password: &str) -> MarketResult<User> {
        let Some(user) = self.find_by_email(email)? else {
            return Err(MarketError::UnknownEmail(email.to_string()));
        };
        if !user.password.verify(password) {
            warn!("Failed login for {}", email);
            return Err(MarketError::WrongPassword);
        }
        Ok(user)
    }

    /// Save profile edits: name, email, photo and the role's own fields.
    /// The role, password and registration date stay as stored, and the
    /// email must stay unique.
    pub fn update_profile(&self, edited: User) -> MarketResult<User> {
        let stored = self
            .find(edited.id)?
            .ok_or(MarketError::UserNotFound(edited.id))?;
        if edited.role() != stored.role() {
            return Err(MarketError::RoleRequired(edited.role()));
        }
        if let Some(other) = self.find_by_email(&edited.email)? {
            if other.id != edited.id {
                return Err(MarketError::EmailTaken(edited.email));
            }
        }

        let user = User {
            password: stored.password,
            registered_at: stored.registered_at,
            ..edited
        };
        self.store.users().upsert(user.clone())?;
        Ok(user)
    }

    pub fn change_password(
        &self,
        user_id: u32,
        current: &str,
        new_password: &str,
        confirm: &str,
    ) -> MarketResult<()> {
        let user = self.find(user_id)?.ok_or(MarketError::UserNotFound(user_id))?;
        if !user.password.verify(current) {
            return Err(MarketError::WrongPassword);
        }
        check_new_password(new_password, confirm)?;

        self.store.users().update(user_id, |u| {
            u.password = PasswordDigest::new(new_password);
        })?;
        info!("Password changed for user {}", user_id);
        Ok(())
    }
}
