//! Quote persistence.
//!
//! The store is the single owner of the in-memory quote list and mirrors it
//! to a JSON file after every mutation. Loading is lenient: a missing or
//! unparsable file is treated as an empty collection (logged, never fatal),
//! so a corrupted data file degrades to a fresh start instead of a crash.

use std::path::{Path, PathBuf};

use crate::error::{QuoteError, Result};
use crate::model::QuoteItem;
use crate::util::atomic_write;

/// Quote storage filename.
const STORE_FILENAME: &str = "quotes.json";

/// The quote collection and its backing file.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
    items: Vec<QuoteItem>,
}

impl QuoteStore {
    /// Open the store at the default location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(default_store_path()?))
    }

    /// Open the store backed by a specific file.
    ///
    /// A missing or malformed file yields an empty collection.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = read_items(&path);
        Self { path, items }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current quote list, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    /// Number of quotes in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one quote and persist immediately.
    pub fn append(&mut self, item: QuoteItem) -> Result<()> {
        self.items.push(item);
        self.persist()
    }

    /// Append a batch of quotes (import path) and persist once.
    pub fn extend(&mut self, items: impl IntoIterator<Item = QuoteItem>) -> Result<()> {
        self.items.extend(items);
        self.persist()
    }

    /// Replace the whole collection and persist.
    pub fn replace_all(&mut self, items: Vec<QuoteItem>) -> Result<()> {
        self.items = items;
        self.persist()
    }

    /// Serialize the current list to the backing file, overwriting it.
    pub fn persist(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.items).map_err(|e| {
            QuoteError::Serialization {
                context: format!("Failed to serialize quotes for {}", self.path.display()),
                source: e,
            }
        })?;

        atomic_write(&self.path, content.as_bytes())
    }
}

/// Read the persisted list, treating absent or malformed content as empty.
fn read_items(path: &Path) -> Vec<QuoteItem> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), err = %e, "could not read quotes file, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(path = %path.display(), err = %e, "malformed quotes file, starting empty");
            Vec::new()
        }
    }
}

/// Get the default quotes storage path.
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| QuoteError::Unsupported {
        feature: "data directory discovery".to_string(),
    })?;

    Ok(data_dir.join("quotekeep").join(STORE_FILENAME))
}
