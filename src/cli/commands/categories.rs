//! Categories command implementation.
//!
//! Lists the selector options: the `all` sentinel followed by each distinct
//! category in first-occurrence order.

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::view::{self, ALL_CATEGORIES};

use super::open_store;

/// Run the categories command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let store = open_store(cli, config)?;
    let categories = view::categories(store.items());

    let mut options = Vec::with_capacity(categories.len() + 1);
    options.push(ALL_CATEGORIES);
    options.extend(categories);

    match cli.effective_output() {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        OutputFormat::Tsv => {
            println!("category\tcount");
            for option in &options {
                let count = if *option == ALL_CATEGORIES {
                    store.len()
                } else {
                    store
                        .items()
                        .iter()
                        .filter(|quote| quote.category == *option)
                        .count()
                };
                println!("{option}\t{count}");
            }
        }
        OutputFormat::Compact => {
            for option in &options {
                println!("{option}");
            }
        }
        OutputFormat::Text => {
            println!("Categories ({} + sentinel):", options.len() - 1);
            for option in &options {
                println!("  {option}");
            }
        }
    }

    Ok(())
}
