//! Sync command implementation.
//!
//! Runs one reconciliation cycle and prints the per-item notifications, the
//! filtered re-listing, and the final completion banner. The cycle driver is
//! shared with the watch command.

use console::style;

use crate::cli::{Cli, SyncArgs};
use crate::config::Config;
use crate::error::Result;
use crate::store::QuoteStore;
use crate::sync::{ConflictResolver, SyncEngine, SyncOutcome};
use crate::view::CategoryFilter;

use super::{list, make_resolver, open_store, remote_client};

/// Run the sync command.
pub fn run(cli: &Cli, config: &Config, args: &SyncArgs) -> Result<()> {
    let engine = SyncEngine::new(remote_client(cli, config)?);
    let mut resolver = make_resolver(args.resolve);
    let filter = CategoryFilter::parse(&args.category);

    let mut store = open_store(cli, config)?;
    run_cycle(cli, &engine, &mut store, resolver.as_mut(), &filter)
}

/// Drive one cycle and report it to the user.
pub(super) fn run_cycle(
    cli: &Cli,
    engine: &SyncEngine,
    store: &mut QuoteStore,
    resolver: &mut dyn ConflictResolver,
    filter: &CategoryFilter,
) -> Result<()> {
    match engine.run(store, resolver)? {
        SyncOutcome::SkippedBusy => {
            println!("Sync already in progress; skipping.");
        }
        SyncOutcome::Completed(report) => {
            for text in &report.added {
                println!("Added new quote from server: \"{text}\"");
            }
            for text in &report.updated {
                println!("Updated \"{text}\" with server's version.");
            }

            if !cli.quiet {
                list::render_filtered(cli, store.items(), filter)?;
            }

            println!("{}", style("Quotes synced with server!").green());
        }
    }

    Ok(())
}
