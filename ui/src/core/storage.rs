//! Durable key/value settings (the theme preference lives here).
//!
//! Browser builds use `localStorage`; native builds keep a small JSON map in the
//! platform data directory.

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("settings storage unavailable: {0}")]
    Unavailable(String),
    #[error("settings storage access failed: {0}")]
    Access(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("settings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStore = BrowserStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = FileStore;

/// Open the settings store for the current platform.
pub fn platform_store() -> Result<PlatformStore, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserStorage::local()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FileStore::default_location()
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl SettingsStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Access(format!("{err:?}")))
    }
}

/// JSON object of string settings on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("org", "WorkSwap", "ListingStats").ok_or_else(
            || StorageError::Unavailable("unable to determine data directory".into()),
        )?;
        Ok(Self::new(dirs.data_dir().join("settings.json")))
    }

    fn read_all(&self) -> Result<std::collections::BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(Default::default()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut settings = self.read_all()?;
        settings.insert(key.to_string(), value.to_string());
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&settings)?)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{SettingsStore, StorageError};

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("listing-stats-ui-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileStore::new(scratch_path("absent/settings.json"));
        assert!(store.get("theme").unwrap().is_none());
    }

    #[test]
    fn values_survive_a_new_handle() {
        let path = scratch_path("roundtrip/settings.json");
        FileStore::new(&path).set("theme", "dark").unwrap();
        FileStore::new(&path).set("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let path = scratch_path("corrupt/settings.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        let err = FileStore::new(&path).get("theme").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
