use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Salted SHA-256 of a password. Keeps plain text out of storage, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordDigest {
    pub salt: String,
    pub hash: String,
}

impl PasswordDigest {
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let hash = Self::hash_with(&salt, password);
        Self { salt, hash }
    }

    pub fn verify(&self, password: &str) -> bool {
        Self::hash_with(&self.salt, password) == self.hash
    }

    fn hash_with(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Seller,
    Buyer,
    Administrator,
}

/// Role-specific account data, tagged inline as `role` in storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Profile {
    Seller {
        tax_id: String,
        address: String,
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        bank_details: Option<String>,
    },
    Buyer {
        #[serde(default)]
        favorite_brands: Vec<u32>,
        #[serde(default)]
        preferences: Option<String>,
    },
    Administrator,
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Seller { .. } => Role::Seller,
            Profile::Buyer { .. } => Role::Buyer,
            Profile::Administrator => Role::Administrator,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub password: PasswordDigest,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub registered_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub profile: Profile,
}

impl User {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn is_seller(&self) -> bool {
        self.role() == Role::Seller
    }

    pub fn is_buyer(&self) -> bool {
        self.role() == Role::Buyer
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Administrator
    }
}
