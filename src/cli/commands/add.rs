//! Add command implementation.
//!
//! Validates the new quote, appends it to the store, refreshes the category
//! listing, and submits the quote to the remote endpoint. The submit is
//! fire-and-forget: the local append is already durable by the time the
//! request goes out, and a failed submit never rolls it back.

use crate::cli::{AddArgs, Cli};
use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::model::QuoteItem;
use crate::view;

use super::{open_store, remote_client};

/// Run the add command.
pub fn run(cli: &Cli, config: &Config, args: &AddArgs) -> Result<()> {
    // Exact empty-string check, deliberately without trimming: whitespace-only
    // input is accepted.
    if args.text.is_empty() {
        return Err(QuoteError::validation("text"));
    }
    if args.category.is_empty() {
        return Err(QuoteError::validation("category"));
    }

    let mut store = open_store(cli, config)?;
    let item = QuoteItem::new(&args.text, &args.category);
    store.append(item.clone())?;

    println!("Quote added successfully!");
    if !cli.quiet {
        println!(
            "Categories: {}, {}",
            view::ALL_CATEGORIES,
            view::categories(store.items()).join(", ")
        );
    }

    if args.local_only {
        return Ok(());
    }

    match remote_client(cli, config) {
        Ok(client) => client.submit(&item),
        Err(e) => tracing::warn!(err = %e, "skipping remote submit"),
    }

    Ok(())
}
