//! Random command implementation.

use console::style;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::view;

use super::open_store;

/// Run the random command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let store = open_store(cli, config)?;

    match view::pick_random(store.items()) {
        Some(quote) => {
            println!("{}", quote.text);
            if !cli.quiet {
                println!("{}", style(format!("— {}", quote.category)).dim());
            }
        }
        None => {
            println!("No quotes available. Please add some!");
        }
    }

    Ok(())
}
