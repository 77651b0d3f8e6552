//! JSON file-based session storage.
//!
//! The session is kept in memory and written with atomic file writes
//! (write-to-temp + rename) so a crash never leaves a half-written file.

use crate::domain::error::{EatgoError, Result};
use crate::storage::backend::SessionStorage;
use crate::storage::models::SessionRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current version of the session file format.
const STORAGE_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<i64>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: STORAGE_VERSION,
            access_token: None,
            saved_at: None,
        }
    }
}

impl StorageData {
    fn session(&self) -> Option<SessionRecord> {
        let access_token = self.access_token.clone().filter(|token| !token.is_empty())?;
        Some(SessionRecord {
            access_token,
            saved_at: self.saved_at.unwrap_or_default(),
        })
    }

    fn set_session(&mut self, session: Option<&SessionRecord>) {
        self.access_token = session.map(|s| s.access_token.clone());
        self.saved_at = session.map(|s| s.saved_at);
    }
}

/// JSON file session backend.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "accessToken": "eyJhbGciOiJIUzI1NiJ9...",
///   "savedAt": 1700000000
/// }
/// ```
///
/// A file without `accessToken` means logged out.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: StorageData,
}

impl JsonStorage {
    /// Creates or opens a JSON session file.
    ///
    /// Parent directories are created automatically. A missing file starts
    /// logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON session storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no session file, starting logged out");
            StorageData::default()
        };

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| EatgoError::Storage(format!("failed to parse session file: {e}")))?;

        if data.version != STORAGE_VERSION {
            return Err(EatgoError::Storage(format!(
                "unsupported session file version {}",
                data.version
            )));
        }

        tracing::debug!(
            version = data.version,
            has_session = data.access_token.is_some(),
            "loaded session file"
        );

        Ok(data)
    }

    /// Saves the in-memory data to disk using an atomic write.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| EatgoError::Storage(format!("failed to serialize session: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "session file saved");
        Ok(())
    }
}

impl SessionStorage for JsonStorage {
    fn load_session(&self) -> Result<Option<SessionRecord>> {
        Ok(self.data.session())
    }

    fn save_session(&mut self, session: &SessionRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_save_session", saved_at = session.saved_at).entered();

        self.data.set_session(Some(session));
        self.save_to_file()
    }

    fn clear_session(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_clear_session").entered();

        if self.data.access_token.is_none() && !self.file_path.exists() {
            return Ok(());
        }

        self.data.set_session(None);
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> JsonStorage {
        JsonStorage::new(dir.path().join("nested").join("session.json")).unwrap()
    }

    #[test]
    fn test_missing_file_starts_logged_out() {
        let dir = tempfile::tempdir().unwrap();

        let storage = storage_in(&dir);

        assert_eq!(storage.load_session().unwrap(), None);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_saved_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let record = SessionRecord {
            access_token: "TOKEN".to_string(),
            saved_at: 1_700_000_000,
        };

        let mut storage = storage_in(&dir);
        storage.save_session(&record).unwrap();
        drop(storage);

        let reopened = storage_in(&dir);
        assert_eq!(reopened.load_session().unwrap(), Some(record));
    }

    #[test]
    fn test_file_uses_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);

        storage
            .save_session(&SessionRecord {
                access_token: "TOKEN".to_string(),
                saved_at: 42,
            })
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(storage.path()).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"version": 1, "accessToken": "TOKEN", "savedAt": 42})
        );
        assert!(!storage.path().with_extension("tmp").exists());
    }

    #[test]
    fn test_clear_session_logs_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);
        storage.save_session(&SessionRecord::new("TOKEN")).unwrap();

        storage.clear_session().unwrap();

        assert_eq!(storage_in(&dir).load_session().unwrap(), None);
    }

    #[test]
    fn test_clear_without_file_does_not_create_one() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);

        storage.clear_session().unwrap();

        assert!(!storage.path().exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();

        assert!(matches!(err, EatgoError::Storage(_)));
    }

    #[test]
    fn test_unknown_version_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"version": 9}"#).unwrap();

        let err = JsonStorage::new(path).unwrap_err();

        assert!(matches!(err, EatgoError::Storage(_)));
    }
}
