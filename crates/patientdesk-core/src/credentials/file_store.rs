use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::CredentialStore;
use super::errors::CredentialError;

/// JSON-object file of string keys and values.
///
/// Every lookup re-reads the file, so a token written by another process
/// is picked up on the next submission.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty store.
    pub fn load_entries(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(CredentialError::ReadFailed {
                    path: self.path.display().to_string(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| CredentialError::Corrupted {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove_item(&self, key: &str) -> Result<(), CredentialError> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries)?;
        }
        Ok(())
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CredentialError::SaveFailed {
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| {
            CredentialError::SaveFailed {
                message: format!("Failed to serialize credentials: {}", e),
            }
        })?;

        std::fs::write(&self.path, json).map_err(|e| CredentialError::SaveFailed {
            message: format!(
                "Failed to write credential store ({}): {}",
                self.path.display(),
                e
            ),
        })?;

        tracing::info!(
            event = "core.credentials.saved",
            path = %self.path.display(),
            count = entries.len()
        );
        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.load_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::error!(
                    event = "core.credentials.load_failed",
                    path = %self.path.display(),
                    error = %e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{ACCESS_TOKEN_KEY, access_token};

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("storage.json"));

        assert!(store.load_entries().unwrap().is_empty());
        assert_eq!(store.get_item(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("nested/storage.json"));

        store.set_item(ACCESS_TOKEN_KEY, "abc.def.ghi").unwrap();
        assert_eq!(access_token(&store).as_deref(), Some("abc.def.ghi"));

        store.remove_item(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(access_token(&store), None);

        // Absent key
        store.remove_item(ACCESS_TOKEN_KEY).unwrap();
    }

    #[test]
    fn test_reads_are_not_cached() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        let store = FileCredentialStore::new(&path);

        std::fs::write(&path, r#"{"access_Token": "first"}"#).unwrap();
        assert_eq!(access_token(&store).as_deref(), Some("first"));

        std::fs::write(&path, r#"{"access_Token": "second"}"#).unwrap();
        assert_eq!(access_token(&store).as_deref(), Some("second"));
    }

    #[test]
    fn test_corrupted_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileCredentialStore::new(&path);

        assert_eq!(store.get_item(ACCESS_TOKEN_KEY), None);
        assert!(matches!(
            store.load_entries(),
            Err(CredentialError::Corrupted { .. })
        ));
        // Corrupted file is left in place rather than overwritten
        assert!(store.set_item(ACCESS_TOKEN_KEY, "tok").is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }
}
