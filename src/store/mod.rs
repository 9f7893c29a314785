//! Local key-value persistence boundary.
//!
//! The active theme is cached in a small string key-value store. Some host
//! environments disable persistent storage entirely, so the file-backed
//! store is opened through a writability probe: `None` means unavailable,
//! and every caller degrades to a no-op rather than erroring.

pub mod cache;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

/// String key-value storage, mirroring the host's local-storage contract.
///
/// Writes are best-effort: implementations swallow I/O failures after the
/// availability probe has passed.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// File-backed store: one file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, probing that it is actually writable.
    ///
    /// Returns `None` when the directory cannot be created or written;
    /// that is the "storage unavailable" condition.
    pub fn open(root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        if std::fs::create_dir_all(&root).is_err() {
            debug!("store root {} is not creatable", root.display());
            return None;
        }
        let probe = root.join(".probe");
        if std::fs::write(&probe, b"").is_err() {
            debug!("store root {} is not writable", root.display());
            return None;
        }
        let _ = std::fs::remove_file(&probe);
        Some(Self { root })
    }

    /// Open the store at the default per-user location.
    pub fn open_default() -> Option<Self> {
        Self::open(store_root_dir()?)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            debug!("failed to write store key `{key}`: {e}");
        }
    }

    fn remove(&self, key: &str) {
        // Missing keys are a no-op.
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

/// In-memory store for tests and embedding hosts with their own persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
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

/// Default per-user store root (`$XDG_CONFIG_HOME/tinge` or platform
/// equivalent).
pub fn store_root_dir() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("tinge"))
}

fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
