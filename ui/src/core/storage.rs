//! Local persistence for the language preference.
//!
//! Web builds use `localStorage`; native builds keep a one-line file in the
//! platform config directory. Both are read once at startup and written on
//! every language change.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::PageError;

pub trait LanguageStore {
    /// Raw stored code, if any. Validation happens in the caller.
    fn load(&self) -> Option<String>;
    fn save(&mut self, code: &str) -> Result<(), PageError>;
}

/// Store for the current platform.
pub fn platform_store(key: &str) -> Box<dyn LanguageStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalStorageStore::new(key))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_config_dir(key) {
            Some(store) => Box::new(store),
            None => {
                tracing::warn!("[storage] no config directory; language preference kept in memory");
                Box::new(MemoryStore::default())
            }
        }
    }
}

/// In-memory store. Clones share the value, which lets tests inspect what a
/// session persisted after handing the store over.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(code.to_string()))),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl LanguageStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value()
    }

    fn save(&mut self, code: &str) -> Result<(), PageError> {
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl LanguageStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};

        // Stored raw (not JSON-encoded) so the value stays readable in devtools.
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save(&mut self, code: &str) -> Result<(), PageError> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(&self.key, code)
            .map_err(|err| PageError::Storage(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/dpa-landing/<key>`
    pub fn in_config_dir(key: &str) -> Option<Self> {
        let dirs = directories::ProjectDirs::from("network", "DPA", "dpa-landing")?;
        Some(Self::at(dirs.config_dir().join(key)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LanguageStore for FileStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let code = raw.trim();
        (!code.is_empty()).then(|| code.to_string())
    }

    fn save(&mut self, code: &str) -> Result<(), PageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| PageError::Storage(err.to_string()))?;
        }
        std::fs::write(&self.path, code).map_err(|err| PageError::Storage(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_value() {
        let store = MemoryStore::default();
        let mut handle = store.clone();
        assert_eq!(store.load(), None);
        handle.save("ja").unwrap();
        assert_eq!(store.load().as_deref(), Some("ja"));
    }

    #[test]
    fn file_store_round_trips_and_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dpa-language");
        let mut store = FileStore::at(&path);
        assert_eq!(store.load(), None);

        store.save("zh-HK").unwrap();
        assert_eq!(FileStore::at(&path).load().as_deref(), Some("zh-HK"));
    }

    #[test]
    fn file_store_ignores_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dpa-language");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(FileStore::at(&path).load(), None);
    }
}
