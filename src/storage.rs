use std::collections::HashMap;

use wasm_bindgen::JsValue;

use crate::error::{MoodBoardError, Result};

/// Synchronous key-value persistence scoped to the browsing context.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn clear(&mut self, key: &str) -> Result<()>;
}

fn js_err(err: JsValue) -> MoodBoardError {
    MoodBoardError::Storage(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Returns `None` when the browser denies access to `localStorage`
    /// (private mode, sandboxed iframe, ...).
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }
}

/// In-memory storage; used in tests and when `localStorage` is unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    pub writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Whichever backend the page could get hold of.
pub enum BoardStorage {
    Browser(BrowserStorage),
    Memory(MemoryStorage),
}

impl BoardStorage {
    pub fn detect() -> Self {
        match BrowserStorage::open() {
            Some(storage) => BoardStorage::Browser(storage),
            None => {
                log::warn!("localStorage unavailable; board will not survive a reload");
                BoardStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BoardStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            BoardStorage::Browser(storage) => storage.get(key),
            BoardStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            BoardStorage::Browser(storage) => storage.set(key, value),
            BoardStorage::Memory(storage) => storage.set(key, value),
        }
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        match self {
            BoardStorage::Browser(storage) => storage.clear(key),
            BoardStorage::Memory(storage) => storage.clear(key),
        }
    }
}
