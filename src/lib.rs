//! quotekeep: CLI quote collection manager with remote sync.
//!
//! This crate stores a user-editable collection of short text items tagged
//! with categories, persists them as a JSON document in the platform data
//! directory, and reconciles the local collection against a remote HTTP
//! source with user-arbitrated conflict resolution.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quotekeep::model::QuoteItem;
//! use quotekeep::store::QuoteStore;
//!
//! fn main() -> quotekeep::Result<()> {
//!     let mut store = QuoteStore::open_default()?;
//!     store.append(QuoteItem::new("Stay hungry.", "Motivation"))?;
//!
//!     for quote in store.items() {
//!         println!("{} [{}]", quote.text, quote.category);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`model`]: The quote item and the remote record shape
//! - [`store`]: Owner of the collection, mirrored to disk atomically
//! - [`view`]: Random pick, category filtering, category enumeration
//! - [`interchange`]: JSON import/export of the whole collection
//! - [`remote`]: Blocking client for the remote quote endpoint
//! - [`sync`]: Reconciliation engine and conflict resolvers
//! - [`cli`]: Command-line interface
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod interchange;
pub mod model;
pub mod remote;
pub mod store;
pub mod sync;
pub mod util;
pub mod view;

// Re-export commonly used types at the crate root
pub use error::{QuoteError, Result};
pub use model::QuoteItem;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
