use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Key-value storage the store persists its collections into.
/// Any backend with string slots will do (browser storage, files, memory).
pub trait Storage {
    /// Read a slot, `None` if it was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Clear a slot; clearing an unset slot is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}

/// An entity that lives in a collection, identified by a positive integer id
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage slot holding the whole collection
    const SLOT: &'static str;

    fn id(&self) -> u32;
}
