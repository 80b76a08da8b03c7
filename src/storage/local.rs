use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known keys. Values are opaque strings; the owning module decides
/// the encoding.
pub mod keys {
    /// Selected theme name: `"dark"` or `"light"`.
    pub const THEME: &str = "library-theme";
    /// Present (any value) when the assistant welcome prompt is suppressed.
    pub const AI_WELCOME_DONT_SHOW: &str = "aiWelcomeDontShow";
    /// Digit string of a phone number awaiting verification.
    pub const PENDING_MOBILE: &str = "pendingMobile";
    /// Present (any value) when a session is authenticated.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";
    /// JSON array of Estekhara history records, newest first.
    pub const ESTEKHARA_HISTORY: &str = "estekharaHistory";
}

/// Persistent key→string map. Every mutation is written through to disk;
/// an in-memory store (no path) skips the write and is used as a fallback
/// when the data directory is unavailable.
#[derive(Debug)]
pub struct LocalStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl LocalStore {
    /// Open the store at the platform data directory, creating parent
    /// directories as needed. Existing state is loaded; a corrupt file is
    /// treated as empty.
    pub fn open() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "mahbub")
            .context("Could not determine application data directory")?;
        let path = dirs.data_dir().join("state.json");
        Self::open_at(path)
    }

    /// Open the store at a specific path (used by tests and `--state-file`).
    pub fn open_at(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create state directory: {}", parent.display())
            })?;
        }

        let values = if path.exists() {
            load_values(&path).unwrap_or_else(|err| {
                tracing::warn!("discarding unreadable state file: {err:#}");
                HashMap::new()
            })
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: Some(path),
            values,
        })
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.save()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }

    /// Path of the backing file, if the store is disk-backed.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let json =
            serde_json::to_string_pretty(&self.values).context("Failed to serialize state")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;
        tracing::debug!("state saved ({} keys)", self.values.len());

        Ok(())
    }
}

fn load_values(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;

    let values: HashMap<String, String> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))?;

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let mut store = LocalStore::in_memory();

        assert!(store.get(keys::THEME).is_none());
        store.set(keys::THEME, "dark").unwrap();
        assert_eq!(store.get(keys::THEME), Some("dark"));
        assert!(store.contains(keys::THEME));

        store.remove(keys::THEME).unwrap();
        assert!(!store.contains(keys::THEME));
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");

        {
            let mut store = LocalStore::open_at(path.clone()).unwrap();
            store.set(keys::IS_LOGGED_IN, "true").unwrap();
            store.set(keys::PENDING_MOBILE, "09123456789").unwrap();
        }

        let store = LocalStore::open_at(path).unwrap();
        assert_eq!(store.get(keys::IS_LOGGED_IN), Some("true"));
        assert_eq!(store.get(keys::PENDING_MOBILE), Some("09123456789"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("state.json");

        let mut store = LocalStore::open_at(path.clone()).unwrap();
        store.set(keys::THEME, "light").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "not valid json").unwrap();

        let store = LocalStore::open_at(path).unwrap();
        assert!(!store.contains(keys::THEME));
    }

    #[test]
    fn test_in_memory_never_writes() {
        let mut store = LocalStore::in_memory();
        store.set(keys::THEME, "dark").unwrap();
        assert!(store.path().is_none());
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut store = LocalStore::in_memory();
        store.remove("no-such-key").unwrap();
    }
}
