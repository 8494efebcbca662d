use crate::config::BoardConfig;
use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::types::{LayoutDocument, PlacedItem};

/// Owns the canonical layout and mirrors every change to storage.
pub struct LayoutStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    document: LayoutDocument,
}

impl<S: KeyValueStorage> LayoutStore<S> {
    /// Opens the store and loads whatever was persisted under the configured key.
    pub fn open(storage: S, config: &BoardConfig) -> Self {
        let mut store = Self {
            storage,
            key: config.storage_key.clone(),
            document: LayoutDocument::new(),
        };
        store.document = store.load();
        log::info!(
            "loaded mood board: {} item(s) ({} image(s), {} text item(s))",
            store.document.len(),
            store.document.images.len(),
            store.document.text_items.len()
        );
        store
    }

    /// Reads the persisted document.
    ///
    /// Missing data is a first run and yields an empty document. Unreadable
    /// or malformed data is logged and also yields an empty document.
    pub fn load(&self) -> LayoutDocument {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LayoutDocument::new(),
            Err(err) => {
                log::warn!("could not read {}: {}", self.key, err);
                return LayoutDocument::new();
            }
        };

        // `JSON.stringify(null)` leaves "null" behind.
        if raw.trim() == "null" {
            return LayoutDocument::new();
        }

        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("discarding malformed layout under {}: {}", self.key, err);
            LayoutDocument::new()
        })
    }

    pub fn document(&self) -> &LayoutDocument {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends in sequence order and persists immediately. The item is only
    /// kept once the write succeeds.
    pub fn append(&mut self, item: PlacedItem) -> Result<()> {
        let mut candidate = self.document.clone();
        let (left, top) = item.position();
        log::debug!("appending {} at {}, {}", item.kind().discriminator(), left, top);
        candidate.push(item);
        let json = serde_json::to_string(&candidate)?;
        self.storage.set(&self.key, &json)?;
        self.document = candidate;
        Ok(())
    }

    /// Writes the whole document as a single value.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.document)?;
        self.storage.set(&self.key, &json)
    }

    /// Erases the persisted value, then the in-memory document. Callers are
    /// expected to rebuild the visual surface afterwards.
    pub fn clear_all(&mut self) -> Result<()> {
        self.storage.clear(&self.key)?;
        self.document = LayoutDocument::new();
        log::info!("cleared mood board");
        Ok(())
    }
}
