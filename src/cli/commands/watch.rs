//! Watch command implementation.
//!
//! Runs a sync cycle immediately, then keeps syncing on a fixed interval
//! until the process is terminated. The quotes file is re-read at the start
//! of every cycle, so appends made by other invocations in between are
//! reconciled rather than overwritten.

use std::thread;
use std::time::Duration;

use crate::cli::{Cli, WatchArgs};
use crate::config::Config;
use crate::error::Result;
use crate::sync::SyncEngine;
use crate::view::CategoryFilter;

use super::{make_resolver, open_store, remote_client, sync};

/// Run the watch command.
pub fn run(cli: &Cli, config: &Config, args: &WatchArgs) -> Result<()> {
    let interval = Duration::from_secs(args.interval.unwrap_or(config.sync.interval_secs));
    let engine = SyncEngine::new(remote_client(cli, config)?);
    let mut resolver = make_resolver(args.resolve);
    let filter = CategoryFilter::parse(&args.category);

    println!(
        "Syncing every {}s... (Ctrl+C to stop)",
        interval.as_secs()
    );

    loop {
        if !cli.quiet {
            let stamp = chrono::Local::now().format("%H:%M:%S");
            println!("[{stamp}] sync cycle starting");
        }

        let mut store = open_store(cli, config)?;
        sync::run_cycle(cli, &engine, &mut store, resolver.as_mut(), &filter)?;

        thread::sleep(interval);
    }
}
