//! Local Key-Value Store
//!
//! The desktop analog of the browser's local storage: two small TOML
//! documents under the platform data directory, one for the session and
//! one for the integration settings. Readable and writable only by this
//! user; wiped on logout (session) or overwritten on save (settings).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::session::Session;
use crate::shared::error::AppError;

const SESSION_FILE: &str = "session.toml";
const SETTINGS_FILE: &str = "settings.toml";

/// Free-form integration settings edited on the settings screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// OpenAI API key used by the campaign composer
    #[serde(default)]
    pub openai_key: String,
    /// Webhook URL campaigns are dispatched to
    #[serde(default)]
    pub webhook_url: String,
}

/// File-backed store for session and settings
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Store rooted at the platform data directory
    pub fn new() -> Self {
        let root = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("campanhaspro");
        Self { root }
    }

    /// Store rooted at an explicit directory (tests)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_file<T: Serialize>(&self, name: &str, value: &T) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| AppError::storage(format!("create {}: {}", self.root.display(), e)))?;
        let body = toml::to_string_pretty(value)
            .map_err(|e| AppError::serialization(format!("TOML encode: {}", e)))?;
        let path = self.root.join(name);
        fs::write(&path, body)
            .map_err(|e| AppError::storage(format!("write {}: {}", path.display(), e)))
    }

    fn read_file<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<Option<T>, AppError> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(None);
        }
        let body = fs::read_to_string(&path)
            .map_err(|e| AppError::storage(format!("read {}: {}", path.display(), e)))?;
        let value = toml::from_str(&body)
            .map_err(|e| AppError::serialization(format!("TOML decode: {}", e)))?;
        Ok(Some(value))
    }

    /// Restore a persisted session, if any. A corrupt file is treated as
    /// no session rather than an error.
    pub fn load_session(&self) -> Option<Session> {
        match self.read_file::<Session>(SESSION_FILE) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("discarding unreadable session file: {}", e);
                None
            }
        }
    }

    pub fn save_session(&self, session: &Session) -> Result<(), AppError> {
        self.write_file(SESSION_FILE, session)
    }

    /// Remove the persisted session (logout)
    pub fn clear_session(&self) -> Result<(), AppError> {
        let path = self.root.join(SESSION_FILE);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| AppError::storage(format!("remove {}: {}", path.display(), e)))?;
        }
        Ok(())
    }

    /// Load settings, falling back to defaults when absent or unreadable
    pub fn load_settings(&self) -> Settings {
        match self.read_file::<Settings>(SETTINGS_FILE) {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!("discarding unreadable settings file: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<(), AppError> {
        self.write_file(SETTINGS_FILE, settings)
    }
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::model::User;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::with_root(dir.path());
        (dir, store)
    }

    fn sample_session() -> Session {
        Session {
            token: "token123".to_string(),
            user: User {
                id: 1,
                name: "Ana".to_string(),
                email: "ana@email.com".to_string(),
            },
        }
    }

    #[test]
    fn test_session_round_trip() {
        let (_dir, store) = temp_store();
        assert!(store.load_session().is_none());

        store.save_session(&sample_session()).unwrap();
        let restored = store.load_session().unwrap();
        assert_eq!(restored.token, "token123");
        assert_eq!(restored.user.email, "ana@email.com");
    }

    #[test]
    fn test_clear_session_removes_file() {
        let (_dir, store) = temp_store();
        store.save_session(&sample_session()).unwrap();
        store.clear_session().unwrap();
        assert!(store.load_session().is_none());
        // Clearing twice is fine
        store.clear_session().unwrap();
    }

    #[test]
    fn test_corrupt_session_is_discarded() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.root()).unwrap();
        fs::write(store.root().join(SESSION_FILE), "not valid toml [[").unwrap();
        assert!(store.load_session().is_none());
    }

    #[test]
    fn test_settings_default_when_absent() {
        let (_dir, store) = temp_store();
        let settings = store.load_settings();
        assert!(settings.openai_key.is_empty());
        assert!(settings.webhook_url.is_empty());
    }

    #[test]
    fn test_settings_round_trip() {
        let (_dir, store) = temp_store();
        let settings = Settings {
            openai_key: "sk-test".to_string(),
            webhook_url: "https://hooks.example/abc".to_string(),
        };
        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings(), settings);
    }
}
