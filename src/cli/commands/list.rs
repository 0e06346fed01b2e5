//! List command implementation.
//!
//! Renders the quotes matching a category filter, in stored order. The
//! rendering half is shared with the sync command's post-cycle listing.

use console::style;

use crate::cli::{Cli, ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::model::QuoteItem;
use crate::view::{self, CategoryFilter};

use super::open_store;

/// Run the list command.
pub fn run(cli: &Cli, config: &Config, args: &ListArgs) -> Result<()> {
    let store = open_store(cli, config)?;
    let filter = CategoryFilter::parse(&args.category);

    render_filtered(cli, store.items(), &filter)
}

/// Render the subsequence matching the filter in the selected output format.
pub fn render_filtered(cli: &Cli, items: &[QuoteItem], filter: &CategoryFilter) -> Result<()> {
    let filtered = view::filter(items, filter);

    if filtered.is_empty() {
        println!("No quotes found.");
        return Ok(());
    }

    match cli.effective_output() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&filtered)?);
        }
        OutputFormat::Tsv => {
            println!("text\tcategory");
            for quote in &filtered {
                println!("{}\t{}", quote.text, quote.category);
            }
        }
        OutputFormat::Compact => {
            for quote in &filtered {
                println!("{}", quote.text);
            }
        }
        OutputFormat::Text => {
            for quote in &filtered {
                println!(
                    "{} {}",
                    quote.text,
                    style(format!("[{}]", quote.category)).dim()
                );
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} quote{} ({})",
                    filtered.len(),
                    if filtered.len() == 1 { "" } else { "s" },
                    filter
                );
            }
        }
    }

    Ok(())
}
