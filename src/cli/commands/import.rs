//! Import command implementation.
//!
//! Parses a user-supplied JSON document into quotes and appends the whole
//! batch. A malformed document surfaces a parse error without touching the
//! store.

use crate::cli::{Cli, ImportArgs};
use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::interchange;
use crate::view::{self, CategoryFilter};

use super::{list, open_store};

/// Run the import command.
pub fn run(cli: &Cli, config: &Config, args: &ImportArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.file).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            QuoteError::FileNotFound {
                path: args.file.clone(),
            }
        } else {
            QuoteError::io(format!("Failed to read {}", args.file.display()), e)
        }
    })?;

    let imported = interchange::import_json(&raw)?;
    let count = imported.len();

    let mut store = open_store(cli, config)?;
    store.extend(imported)?;

    println!("Quotes imported successfully! ({count} added)");
    if !cli.quiet {
        println!(
            "Categories: {}, {}",
            view::ALL_CATEGORIES,
            view::categories(store.items()).join(", ")
        );
        list::render_filtered(cli, store.items(), &CategoryFilter::All)?;
    }

    Ok(())
}
