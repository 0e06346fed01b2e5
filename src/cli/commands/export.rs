//! Export command implementation.
//!
//! Serializes the full collection as a pretty JSON document; pure read.

use std::fs::File;
use std::io::{self, Write};

use crate::cli::{Cli, ExportArgs};
use crate::config::Config;
use crate::error::{QuoteError, Result};
use crate::interchange;

use super::open_store;

/// Run the export command.
pub fn run(cli: &Cli, config: &Config, args: &ExportArgs) -> Result<()> {
    let store = open_store(cli, config)?;

    match &args.output_file {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| {
                QuoteError::io(format!("Failed to create {}", path.display()), e)
            })?;
            interchange::export_json(store.items(), &mut file)?;

            if !cli.quiet {
                println!(
                    "Exported {} quote{} to {}",
                    store.len(),
                    if store.len() == 1 { "" } else { "s" },
                    path.display()
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            interchange::export_json(store.items(), &mut handle)?;
            handle.flush().map_err(|e| QuoteError::io("Failed to flush stdout", e))?;
        }
    }

    Ok(())
}
