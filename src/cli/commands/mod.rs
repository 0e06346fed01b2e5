//! CLI command implementations.
//!
//! Each command is implemented in its own module with a `run` function
//! that handles the command logic.

pub mod add;
pub mod categories;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod random;
pub mod sync;
pub mod watch;

use std::time::Duration;

use crate::cli::{Cli, ResolveMode};
use crate::config::Config;
use crate::error::Result;
use crate::remote::RemoteClient;
use crate::store::QuoteStore;
use crate::sync::{ConflictResolver, PolicyResolver, PromptResolver, Resolution};

/// Open the quote store, honoring CLI and config overrides.
pub fn open_store(cli: &Cli, config: &Config) -> Result<QuoteStore> {
    if let Some(path) = &cli.data_file {
        return Ok(QuoteStore::open(path));
    }
    if let Some(path) = &config.storage.data_file {
        return Ok(QuoteStore::open(path));
    }
    QuoteStore::open_default()
}

/// Build the remote client, honoring the CLI endpoint override.
pub fn remote_client(cli: &Cli, config: &Config) -> Result<RemoteClient> {
    let endpoint = cli
        .endpoint
        .clone()
        .unwrap_or_else(|| config.remote.endpoint.clone());

    RemoteClient::new(endpoint, Duration::from_secs(config.remote.timeout_secs))
}

/// Build the conflict resolver for the selected mode.
#[must_use]
pub fn make_resolver(mode: ResolveMode) -> Box<dyn ConflictResolver> {
    match mode {
        ResolveMode::Prompt => Box::new(PromptResolver),
        ResolveMode::KeepLocal => Box::new(PolicyResolver::new(Resolution::KeepLocal)),
        ResolveMode::TakeRemote => Box::new(PolicyResolver::new(Resolution::TakeRemote)),
    }
}
