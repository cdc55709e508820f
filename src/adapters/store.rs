use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value store: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: String,
}

impl FileStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.key_path(key))?;
        Ok(data)
    }

    async fn write(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = self.key_path(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let full_path = self.key_path(key);
        if full_path.exists() {
            fs::remove_file(full_path)?;
        }
        Ok(())
    }
}
