//! Session store.
//!
//! Holds the authenticated user and bearer token for this client instance and
//! mirrors them into durable storage so a restart picks the session back up.
//! Durable storage is two string entries, `token` and `user` (JSON), stored by
//! default in `<base>/session.json` with restricted permissions (0600).
//! Tokens are never logged.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use anyhow::{Context, Result};

use crate::models::{Session, User};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// String-keyed durable storage backing the session store.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

// ============================================================================
// File storage
// ============================================================================

/// JSON object file holding the storage entries.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(entries).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.load().unwrap_or_default();
        entries.remove(key);
        self.save(&entries)
    }
}

// ============================================================================
// Memory storage
// ============================================================================

/// In-process storage. Clones share the same entries, so dropping a store
/// and opening a new one over a clone behaves like a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

// ============================================================================
// Session store
// ============================================================================

/// Single source of truth for "who is logged in".
///
/// Shared behind an `Arc` between the HTTP client (reads the token, clears on
/// 401) and the UI (login/logout).
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Opens the store and rehydrates any session found in `storage`.
    pub fn open(storage: impl SessionStorage + 'static) -> Self {
        let current = rehydrate(&storage);
        Self {
            storage: Box::new(storage),
            current: RwLock::new(current),
        }
    }

    /// A store backed by fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::open(MemoryStorage::new())
    }

    /// Stores `user` and `token` in memory and in durable storage.
    ///
    /// The in-memory session is updated even if the durable write fails.
    pub fn login(&self, user: User, token: String) -> Result<()> {
        let user_json = serde_json::to_string(&user).context("Failed to serialize user")?;
        tracing::info!(username = %user.username, "session started");

        let persisted = self
            .storage
            .set(TOKEN_KEY, &token)
            .and_then(|()| self.storage.set(USER_KEY, &user_json));
        if let Err(err) = &persisted {
            tracing::warn!(error = %err, "failed to persist session");
        }

        *self.write() = Some(Session { user, token });
        persisted
    }

    /// Clears the session from memory and durable storage.
    pub fn logout(&self) -> Result<()> {
        if let Some(session) = self.write().take() {
            tracing::info!(username = %session.user.username, "session ended");
        }
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    pub fn session(&self) -> Option<Session> {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("user", &self.current_user())
            .finish_non_exhaustive()
    }
}

fn rehydrate(storage: &dyn SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY);
    let user = storage.get(USER_KEY);

    match (token, user) {
        (Ok(Some(token)), Ok(Some(user_json))) if !token.is_empty() => {
            match serde_json::from_str::<User>(&user_json) {
                Ok(user) => {
                    tracing::debug!(username = %user.username, "session rehydrated");
                    Some(Session { user, token })
                }
                Err(err) => {
                    tracing::warn!(error = %err, "stored user record is corrupt, clearing session");
                    clear_storage(storage);
                    None
                }
            }
        }
        (Ok(None), Ok(None)) => None,
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(error = %err, "failed to read stored session");
            None
        }
        _ => {
            tracing::warn!("stored session is incomplete, clearing it");
            clear_storage(storage);
            None
        }
    }
}

fn clear_storage(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(err) = storage.remove(key) {
            tracing::warn!(key, error = %err, "failed to clear stored session entry");
        }
    }
}
