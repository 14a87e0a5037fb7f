use crate::store::traits::Storage;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-process storage. Single-threaded, lives as long as the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() -> Result<()> {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k")?, None);

        storage.set("k", "v1")?;
        storage.set("k", "v2")?;
        assert_eq!(storage.get("k")?.as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);

        storage.remove("k")?;
        storage.remove("k")?;
        assert!(storage.is_empty());
        Ok(())
    }
}
