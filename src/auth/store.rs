use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::warn;

/// Storage key for the access token
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Token file name inside the store directory
const TOKEN_FILE: &str = "tokens.json";

/// Application name used for the default store directory
const APP_NAME: &str = "bazaar-client";

/// Injected key-value capability the session store writes through.
///
/// Operations are infallible at this surface: a backend that cannot read
/// or persist reports absence (`None`) and logs, it never panics or
/// returns errors. This is what lets `SessionStore::is_authenticated`
/// answer `false` in environments without a usable storage medium.
pub trait TokenStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and storage-less environments.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed storage: a JSON object of string entries on disk,
/// surviving process restarts the way browser local storage survives
/// page reloads.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store entries in the given file. The parent directory is created
    /// on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the per-user cache directory, or `None`
    /// when the platform exposes no cache directory.
    pub fn default_location() -> Option<Self> {
        let cache_dir = dirs::cache_dir()?;
        Some(Self::new(cache_dir.join(APP_NAME).join(TOKEN_FILE)))
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token file is corrupt, treating as empty");
                HashMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "Failed to create token store directory");
                return;
            }
        }
        let contents = match serde_json::to_string_pretty(entries) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(error = %e, "Failed to serialize token entries");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, contents) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist token entries");
        }
    }
}

impl TokenStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries);
        }
    }
}

/// Cheap-clone handle over the access/refresh token pair.
///
/// Holds no expiry state: token death is discovered reactively when the
/// gateway sees a 401.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by process memory only; tokens vanish on exit.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store persisted under the user cache directory, falling back to
    /// memory when the platform has no cache directory.
    pub fn persistent() -> Self {
        match FileStorage::default_location() {
            Some(storage) => Self::new(Arc::new(storage)),
            None => {
                warn!("No cache directory available, falling back to in-memory token store");
                Self::in_memory()
            }
        }
    }

    /// True iff an access token is present. Answers `false` rather than
    /// failing when the storage medium is unusable.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Persist a freshly issued token pair (the write half of login).
    pub fn store_tokens(&self, access_token: &str, refresh_token: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access_token);
        self.storage.set(REFRESH_TOKEN_KEY, refresh_token);
    }

    /// Remove both tokens. Idempotent; a no-op when nothing is stored.
    pub fn clear_tokens(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);

        store.store_tokens("abc123", "def456");
        assert!(store.is_authenticated());
        assert_eq!(store.access_token().as_deref(), Some("abc123"));
        assert_eq!(store.refresh_token().as_deref(), Some("def456"));
    }

    #[test]
    fn clear_tokens_is_idempotent() {
        let store = SessionStore::in_memory();
        store.store_tokens("abc123", "def456");

        store.clear_tokens();
        assert!(!store.is_authenticated());
        assert_eq!(store.refresh_token(), None);

        // A second clear leaves the store in the same state
        store.clear_tokens();
        assert!(!store.is_authenticated());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn clones_share_the_same_backend() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.store_tokens("abc123", "def456");
        assert!(other.is_authenticated());
        other.clear_tokens();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn file_store_survives_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        let store = SessionStore::new(Arc::new(FileStorage::new(path.clone())));
        store.store_tokens("abc123", "def456");

        let reopened = SessionStore::new(Arc::new(FileStorage::new(path)));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.access_token().as_deref(), Some("abc123"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("def456"));
    }

    #[test]
    fn corrupt_token_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = SessionStore::new(Arc::new(FileStorage::new(path)));
        assert!(!store.is_authenticated());
        // Clearing a corrupt store must not fail either
        store.clear_tokens();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(Arc::new(FileStorage::new(
            dir.path().join("nested").join("tokens.json"),
        )));
        assert!(!store.is_authenticated());
        assert_eq!(store.access_token(), None);
    }
}
