//! Persisted user preferences.
//!
//! Only the card theme is stored today. The store is a small key-value
//! seam so the CLI can use a JSON file while tests use memory.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

use crate::svg::Theme;

pub const THEME_KEY: &str = "theme";
const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed preferences at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no user config directory available")]
    NoConfigDir,
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Flat JSON object of string values on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/agecounter/prefs.json`.
    pub fn user_default() -> Result<Self, PrefsError> {
        let dir = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
        Ok(Self::new(dir.join("agecounter").join(PREFS_FILE)))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PrefsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let io_err = |source| PrefsError::Io {
            path: self.path.clone(),
            source,
        };

        let mut all = match self.read_all() {
            Ok(all) => all,
            Err(PrefsError::Json { source, .. }) => {
                warn!(path = %self.path.display(), error = %source, "replacing malformed preferences");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        all.insert(key.to_string(), value.to_string());

        let body = serde_json::to_string_pretty(&all).map_err(|source| PrefsError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename over it so readers never see
        // a half-written file.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(io_err)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(body.as_bytes()).map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        debug!(path = %self.path.display(), key, "saved preference");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saved theme, or `fallback` when nothing usable is stored.
pub fn load_theme(store: &dyn PreferenceStore, fallback: Theme) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
            warn!(value = %raw, "ignoring unknown saved theme");
            fallback
        }),
        Ok(None) => fallback,
        Err(e) => {
            warn!(error = %e, "failed to read theme preference");
            fallback
        }
    }
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> Result<(), PrefsError> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_round_trips_theme() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, Theme::Vintage), Theme::Vintage);
        save_theme(&store, Theme::Futuristic).expect("save");
        assert_eq!(load_theme(&store, Theme::Vintage), Theme::Futuristic);
    }

    #[test]
    fn unknown_saved_theme_falls_back() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "neon").expect("set");
        assert_eq!(load_theme(&store, Theme::Local), Theme::Local);
    }

    #[test]
    fn file_store_creates_parent_and_keeps_other_keys() {
        let dir = TempDir::new().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("nested").join(PREFS_FILE));

        assert_eq!(store.get(THEME_KEY).expect("get"), None);
        store.set("other", "1").expect("set other");
        save_theme(&store, Theme::Handdrawn).expect("save");

        assert_eq!(load_theme(&store, Theme::Vintage), Theme::Handdrawn);
        assert_eq!(store.get("other").expect("get"), Some("1".to_string()));
    }

    #[test]
    fn saving_over_a_corrupt_file_recovers() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "{\"theme\": \"vint").expect("write");
        let store = JsonFileStore::new(&path);

        save_theme(&store, Theme::Local).expect("save over corrupt file");
        assert_eq!(store.get(THEME_KEY).expect("get"), Some("local".to_string()));

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from(PREFS_FILE)]);
    }

    #[test]
    fn corrupt_file_is_an_error_but_theme_falls_back() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, "{not json").expect("write");
        let store = JsonFileStore::new(&path);

        assert!(matches!(store.get(THEME_KEY), Err(PrefsError::Json { .. })));
        assert_eq!(load_theme(&store, Theme::Vintage), Theme::Vintage);
    }
}
