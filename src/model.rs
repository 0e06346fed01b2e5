//! Core data structures.
//!
//! A quote is just text plus a category. There is no identifier field:
//! the sync engine matches items by `text` alone, and the first local item
//! with a matching text is treated as canonical.

use serde::{Deserialize, Serialize};

/// A single quote in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    /// The quote text. Matching key for sync; never changed by a sync cycle.
    pub text: String,
    /// The category label shown in filters and the category selector.
    pub category: String,
}

impl QuoteItem {
    /// Create a new quote item.
    #[must_use]
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// A record as returned by the remote read endpoint.
///
/// The mock endpoint returns post-shaped records; only the title-like text
/// field matters here, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRecord {
    /// Title-like text field; becomes the quote text.
    pub title: String,
}
