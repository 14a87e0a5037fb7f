//! Encode/decode pair for collection slots.
//!
//! Dates leave the domain as RFC 3339 strings and come back as
//! `DateTime<Utc>`; callers never see the string form.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string(records).context("Failed to serialize collection")
}

/// Decode a slot. An unset or blank slot is an empty collection.
pub fn decode<T: DeserializeOwned>(slot: &str, raw: Option<&str>) -> Result<Vec<T>> {
    match raw {
        None => Ok(Vec::new()),
        Some(data) if data.trim().is_empty() => Ok(Vec::new()),
        Some(data) => {
            serde_json::from_str(data).with_context(|| format!("Failed to parse slot '{slot}'"))
        }
    }
}
