use crate::store::traits::Storage;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage keeping one `<key>.json` file per slot under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) the data directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_survive_reopening() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let data_dir = tmp.path().join("data");

        let storage = FileStorage::open(&data_dir)?;
        assert_eq!(storage.dir(), data_dir.as_path());
        assert_eq!(storage.get("autopremium_users")?, None);
        storage.set("autopremium_users", "[]")?;

        let reopened = FileStorage::open(&data_dir)?;
        assert_eq!(reopened.get("autopremium_users")?.as_deref(), Some("[]"));
        assert!(data_dir.join("autopremium_users.json").exists());

        reopened.remove("autopremium_users")?;
        reopened.remove("autopremium_users")?;
        assert_eq!(reopened.get("autopremium_users")?, None);
        Ok(())
    }
}
