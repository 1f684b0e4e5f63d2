//! Local key-value storage.
//!
//! [`LocalStorage`] is a flat map of string keys to string values, the same
//! shape a browser's local storage has. Every write goes straight through to
//! the configured [`StorageBackend`], so the persisted copy never lags the
//! in-memory one.
//!
//! # Example
//!
//! ```rust
//! use store_theme::storage::{LocalStorage, GLOBAL_THEME_KEY};
//!
//! let storage = LocalStorage::in_memory();
//! storage.set(GLOBAL_THEME_KEY, "tech").unwrap();
//! assert_eq!(storage.get(GLOBAL_THEME_KEY).as_deref(), Some("tech"));
//! ```

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace, warn};

// ============================================================================
// Keys
// ============================================================================

/// Global "last used" theme identifier.
pub const GLOBAL_THEME_KEY: &str = "storeThemeId";

/// Colour mode, `"light"` or `"dark"`.
pub const COLOR_MODE_KEY: &str = "colorMode";

/// JSON object of free-form theme customizations.
pub const CUSTOMIZATIONS_KEY: &str = "themeCustomizations";

/// Storefront language, `"en"` or `"ar"`.
pub const LANGUAGE_KEY: &str = "language";

/// Per-store theme override key: `store-{id}-theme`.
#[must_use]
pub fn store_theme_key(store_id: &str) -> String {
    format!("store-{store_id}-theme")
}

/// Per-store colour override key: `store-{id}-custom-colors`.
#[must_use]
pub fn store_custom_colors_key(store_id: &str) -> String {
    format!("store-{store_id}-custom-colors")
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while loading or flushing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file exists but could not be read.
    #[error("failed to read storage file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file could not be written.
    #[error("failed to write storage file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing file is not a JSON object of string values.
    #[error("storage file {path} is not a JSON object of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A structured value could not be encoded as JSON.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// ============================================================================
// Backends
// ============================================================================

/// Snapshot of every stored entry, ordered by key.
pub type Entries = BTreeMap<String, String>;

/// Where storage entries live between runs.
pub trait StorageBackend {
    /// Load all entries. A backend with nothing stored yet returns an empty map.
    fn load(&self) -> Result<Entries, StorageError>;

    /// Persist the full set of entries.
    fn flush(&self, entries: &Entries) -> Result<(), StorageError>;

    /// Short human-readable description for diagnostics.
    fn describe(&self) -> String;
}

/// Backend that keeps nothing: entries live only as long as the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryBackend;

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Entries, StorageError> {
        Ok(Entries::new())
    }

    fn flush(&self, _entries: &Entries) -> Result<(), StorageError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Backend that mirrors entries into a pretty-printed JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given file. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self) -> Result<Entries, StorageError> {
        if !self.path.exists() {
            debug!(storage.path = %self.path.display(), "Storage file absent, starting empty");
            return Ok(Entries::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn flush(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Encode {
                key: "*".to_string(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        trace!(storage.path = %self.path.display(), storage.entries = entries.len(), "Storage flushed");
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

// ============================================================================
// LocalStorage handle
// ============================================================================

struct Inner {
    entries: Entries,
    backend: Box<dyn StorageBackend>,
}

/// Shared handle to the application's local storage.
///
/// Cloning the handle shares the same entries; the theme and store state
/// holders each keep a clone. Execution is single-threaded, so the handle is
/// built on `Rc<RefCell<..>>`.
#[derive(Clone)]
pub struct LocalStorage {
    inner: Rc<RefCell<Inner>>,
}

impl fmt::Debug for LocalStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LocalStorage")
            .field("backend", &inner.backend.describe())
            .field("entries", &inner.entries.len())
            .finish()
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl LocalStorage {
    /// Storage that is never persisted.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_entries(MemoryBackend, Entries::new())
    }

    /// Open storage over a backend, loading whatever it already holds.
    ///
    /// # Errors
    ///
    /// Returns the backend's load error.
    pub fn open(backend: impl StorageBackend + 'static) -> Result<Self, StorageError> {
        let entries = backend.load()?;
        debug!(
            storage.backend = %backend.describe(),
            storage.entries = entries.len(),
            "Storage opened"
        );
        Ok(Self::with_entries(backend, entries))
    }

    /// Open storage mirrored to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Self::open(JsonFileBackend::new(path))
    }

    fn with_entries(backend: impl StorageBackend + 'static, entries: Entries) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                entries,
                backend: Box::new(backend),
            })),
        }
    }

    /// Read a value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().entries.get(key).cloned()
    }

    /// Whether a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().entries.contains_key(key)
    }

    /// Write a value and flush the backend.
    ///
    /// Writing the value a key already holds is a no-op and does not touch
    /// the backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's flush error. The in-memory entry is updated
    /// even when the flush fails.
    pub fn set(&self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        let value = value.into();
        let mut inner = self.inner.borrow_mut();
        if inner.entries.get(key) == Some(&value) {
            return Ok(());
        }
        trace!(storage.key = key, storage.value = %value, "Storage write");
        inner.entries.insert(key.to_string(), value);
        inner.backend.flush(&inner.entries)
    }

    /// Remove a key, returning whether it was present.
    ///
    /// # Errors
    ///
    /// Returns the backend's flush error.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut inner = self.inner.borrow_mut();
        if inner.entries.remove(key).is_none() {
            return Ok(false);
        }
        trace!(storage.key = key, "Storage remove");
        inner.backend.flush(&inner.entries)?;
        Ok(true)
    }

    /// Read and decode a JSON value.
    ///
    /// A value that fails to decode is logged and treated as absent.
    #[must_use]
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(storage.key = key, error = %err, "Ignoring malformed JSON in storage");
                None
            }
        }
    }

    /// Encode a value as JSON and write it.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the flush fails.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, json)
    }

    /// Snapshot of all entries.
    #[must_use]
    pub fn entries(&self) -> Entries {
        self.inner.borrow().entries.clone()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Backend description for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.inner.borrow().backend.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Backend that counts flushes.
    struct CountingBackend(Rc<Cell<usize>>);

    impl StorageBackend for CountingBackend {
        fn load(&self) -> Result<Entries, StorageError> {
            Ok(Entries::new())
        }

        fn flush(&self, _entries: &Entries) -> Result<(), StorageError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    #[test]
    fn key_formats_match_browser_layout() {
        assert_eq!(store_theme_key("s1"), "store-s1-theme");
        assert_eq!(store_custom_colors_key("s1"), "store-s1-custom-colors");
        assert_eq!(GLOBAL_THEME_KEY, "storeThemeId");
        assert_eq!(COLOR_MODE_KEY, "colorMode");
        assert_eq!(CUSTOMIZATIONS_KEY, "themeCustomizations");
    }

    #[test]
    fn set_get_remove() {
        let storage = LocalStorage::in_memory();
        assert!(storage.is_empty());

        storage.set("a", "1").unwrap();
        assert_eq!(storage.get("a").as_deref(), Some("1"));
        assert!(storage.contains("a"));
        assert_eq!(storage.len(), 1);

        assert!(storage.remove("a").unwrap());
        assert!(!storage.remove("a").unwrap());
        assert!(storage.get("a").is_none());
    }

    #[test]
    fn clones_share_entries() {
        let storage = LocalStorage::in_memory();
        let other = storage.clone();
        storage.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn unchanged_write_skips_flush() {
        let flushes = Rc::new(Cell::new(0));
        let storage = LocalStorage::open(CountingBackend(Rc::clone(&flushes))).unwrap();

        storage.set("k", "v").unwrap();
        storage.set("k", "v").unwrap();
        assert_eq!(flushes.get(), 1);

        storage.set("k", "w").unwrap();
        assert_eq!(flushes.get(), 2);
    }

    #[test]
    fn json_helpers_roundtrip() {
        let storage = LocalStorage::in_memory();
        let mut map = BTreeMap::new();
        map.insert("radius".to_string(), 8);
        storage.set_json("custom", &map).unwrap();

        let back: BTreeMap<String, i32> = storage.get_json("custom").unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn malformed_json_reads_as_absent() {
        let storage = LocalStorage::in_memory();
        storage.set("custom", "{not json").unwrap();
        let value: Option<BTreeMap<String, String>> = storage.get_json("custom");
        assert!(value.is_none());
    }

    #[test]
    fn file_backend_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = LocalStorage::open_file(&path).unwrap();
        storage.set(GLOBAL_THEME_KEY, "luxe").unwrap();
        storage.set(&store_theme_key("s2"), "toys").unwrap();
        drop(storage);

        let reopened = LocalStorage::open_file(&path).unwrap();
        assert_eq!(reopened.get(GLOBAL_THEME_KEY).as_deref(), Some("luxe"));
        assert_eq!(reopened.get("store-s2-theme").as_deref(), Some("toys"));
    }

    #[test]
    fn file_backend_missing_and_empty_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = JsonFileBackend::new(dir.path().join("missing.json"));
        assert!(missing.load().unwrap().is_empty());

        let empty_path = dir.path().join("empty.json");
        fs::write(&empty_path, "  \n").unwrap();
        assert!(JsonFileBackend::new(&empty_path).load().unwrap().is_empty());
    }

    #[test]
    fn file_backend_rejects_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"storeThemeId": 3}"#).unwrap();

        let err = LocalStorage::open_file(&path).unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn describe_names_backend() {
        assert_eq!(LocalStorage::in_memory().describe(), "memory");
        let backend = JsonFileBackend::new("/tmp/x.json");
        assert!(backend.describe().contains("/tmp/x.json"));
    }
}
