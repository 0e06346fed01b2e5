//! JSON import and export of the whole collection.
//!
//! Export is a pure read: the current list serialized as a pretty JSON
//! document. Import expects an array of quote-shaped records and surfaces a
//! parse error (no mutation) when handed anything else.

use std::io::Write;

use crate::error::{QuoteError, Result};
use crate::model::QuoteItem;

/// Serialize the list as a pretty JSON document to the writer.
pub fn export_json<W: Write>(items: &[QuoteItem], writer: &mut W) -> Result<()> {
    let content = serde_json::to_string_pretty(items).map_err(|e| QuoteError::Serialization {
        context: "Failed to serialize quotes for export".to_string(),
        source: e,
    })?;

    writer
        .write_all(content.as_bytes())
        .map_err(|e| QuoteError::io("Failed to write export", e))?;
    writer
        .write_all(b"\n")
        .map_err(|e| QuoteError::io("Failed to write export", e))?;
    Ok(())
}

/// Parse an imported JSON document into a list of quotes.
pub fn import_json(raw: &str) -> Result<Vec<QuoteItem>> {
    serde_json::from_str(raw)
        .map_err(|e| QuoteError::parse_with_source("expected a JSON array of {text, category} records", e))
}
