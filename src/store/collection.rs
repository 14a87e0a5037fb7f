use crate::store::codec;
use crate::store::traits::{Record, Storage};
use anyhow::{anyhow, Result};
use std::marker::PhantomData;
use tracing::debug;

/// One named collection, read and rewritten whole on every call
pub struct Collection<'a, T: Record> {
    storage: &'a dyn Storage,
    _record: PhantomData<T>,
}

impl<'a, T: Record> Collection<'a, T> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self {
            storage,
            _record: PhantomData,
        }
    }

    /// All records in stored order
    pub fn list(&self) -> Result<Vec<T>> {
        let raw = self.storage.get(T::SLOT)?;
        codec::decode(T::SLOT, raw.as_deref())
    }

    pub fn find(&self, id: u32) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|r| r.id() == id))
    }

    /// Replace the record with the same id in place, or append it
    pub fn upsert(&self, record: T) -> Result<()> {
        let mut records = self.list()?;
        match records.iter().position(|r| r.id() == record.id()) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }
        self.save_all(&records)
    }

    /// Remove a record; returns false if there was nothing to remove
    pub fn delete_by_id(&self, id: u32) -> Result<bool> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_all(&records)?;
        Ok(true)
    }

    /// Apply `change` to the record with `id` and persist it
    pub fn update<F>(&self, id: u32, change: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.list()?;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Ok(None);
        };
        change(record);
        let updated = record.clone();
        self.save_all(&records)?;
        Ok(Some(updated))
    }

    /// Highest id + 1, or 1 for an empty collection
    pub fn next_id(&self) -> Result<u32> {
        match self.list()?.iter().map(T::id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| anyhow!("id space exhausted in slot '{}'", T::SLOT)),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.list()?.is_empty())
    }

    fn save_all(&self, records: &[T]) -> Result<()> {
        let raw = codec::encode(records)?;
        self.storage.set(T::SLOT, &raw)?;
        debug!("Saved {} records to '{}'", records.len(), T::SLOT);
        Ok(())
    }
}
