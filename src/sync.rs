//! Reconciliation of the local collection against the remote source.
//!
//! One sync cycle fetches the remote list, walks it in fetch order against a
//! working copy of the local list, appends unknown items, and routes
//! same-text collisions through a [`ConflictResolver`]. Conflicts resolve
//! strictly in remote order; with the interactive resolver, a later conflict
//! blocks until the earlier prompt is answered. The working list is persisted
//! wholesale at the end of the cycle, so an aborted cycle leaves the store
//! untouched.
//!
//! A transport failure is indistinguishable from a zero-item server: both
//! produce an empty remote list and a cycle that adds nothing.

use std::sync::atomic::{AtomicBool, Ordering};

use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{QuoteError, Result};
use crate::model::QuoteItem;
use crate::remote::RemoteClient;
use crate::store::QuoteStore;

/// How a same-text conflict is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Leave the local item unchanged.
    KeepLocal,
    /// Overwrite the local category with the remote one.
    TakeRemote,
}

/// Arbitration hook for same-text conflicts.
///
/// This is the suspension point of the sync cycle: the engine calls it once
/// per conflict, in remote order, and applies the answer before examining the
/// next remote item.
pub trait ConflictResolver {
    /// Decide between the local and remote version of a conflicting quote.
    fn resolve(&mut self, local: &QuoteItem, remote: &QuoteItem) -> Result<Resolution>;
}

/// Interactive resolver backed by a terminal confirm prompt.
#[derive(Debug, Default)]
pub struct PromptResolver;

impl ConflictResolver for PromptResolver {
    fn resolve(&mut self, local: &QuoteItem, remote: &QuoteItem) -> Result<Resolution> {
        let prompt = format!(
            "Conflict detected for quote: {}. Update category \"{}\" to the server's \"{}\"?",
            style(format!("\"{}\"", local.text)).bold(),
            local.category,
            remote.category,
        );

        let take_remote = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| QuoteError::Prompt {
                message: e.to_string(),
            })?;

        Ok(if take_remote {
            Resolution::TakeRemote
        } else {
            Resolution::KeepLocal
        })
    }
}

/// Non-interactive resolver giving the same answer to every conflict.
#[derive(Debug, Clone, Copy)]
pub struct PolicyResolver {
    resolution: Resolution,
}

impl PolicyResolver {
    /// Create a resolver with a fixed answer.
    #[must_use]
    pub const fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }
}

impl ConflictResolver for PolicyResolver {
    fn resolve(&mut self, _local: &QuoteItem, _remote: &QuoteItem) -> Result<Resolution> {
        Ok(self.resolution)
    }
}

/// What a completed sync cycle did, by quote text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Texts appended from the remote list.
    pub added: Vec<String>,
    /// Texts whose category was overwritten with the remote one.
    pub updated: Vec<String>,
    /// Conflicting texts the user chose to keep unchanged.
    pub kept: Vec<String>,
}

impl SyncReport {
    /// Whether the cycle changed anything.
    #[must_use]
    pub fn changed(&self) -> bool {
        !self.added.is_empty() || !self.updated.is_empty()
    }
}

/// Result of asking the engine for a cycle.
#[derive(Debug)]
pub enum SyncOutcome {
    /// The cycle ran to completion.
    Completed(SyncReport),
    /// Another cycle was still in progress; nothing was done.
    SkippedBusy,
}

/// The reconciliation engine.
///
/// Holds the remote client and a busy flag that keeps overlapping cycles
/// from interleaving when the engine is shared across threads.
#[derive(Debug)]
pub struct SyncEngine {
    client: RemoteClient,
    busy: AtomicBool,
}

impl SyncEngine {
    /// Create an engine over the given remote client.
    #[must_use]
    pub fn new(client: RemoteClient) -> Self {
        Self {
            client,
            busy: AtomicBool::new(false),
        }
    }

    /// Run one sync cycle against the store.
    ///
    /// Fetches, reconciles through the resolver, persists the working list,
    /// and reports what changed. Returns [`SyncOutcome::SkippedBusy`] without
    /// touching anything if a cycle is already running.
    pub fn run(
        &self,
        store: &mut QuoteStore,
        resolver: &mut dyn ConflictResolver,
    ) -> Result<SyncOutcome> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("sync cycle already in progress, skipping this one");
            return Ok(SyncOutcome::SkippedBusy);
        }

        let result = self.cycle(store, resolver);
        self.busy.store(false, Ordering::Release);
        result.map(SyncOutcome::Completed)
    }

    fn cycle(
        &self,
        store: &mut QuoteStore,
        resolver: &mut dyn ConflictResolver,
    ) -> Result<SyncReport> {
        let remote_items = self.client.fetch();
        tracing::debug!(count = remote_items.len(), "fetched remote quotes");

        let mut working = store.items().to_vec();
        let report = reconcile(&mut working, remote_items, resolver)?;

        store.replace_all(working)?;
        tracing::info!(
            added = report.added.len(),
            updated = report.updated.len(),
            kept = report.kept.len(),
            "sync cycle finished"
        );

        Ok(report)
    }
}

/// Apply the remote list to the working list, one item at a time.
///
/// Each remote item's resolution lands in the working list before the next
/// item is examined, so no rollback is ever needed. The first local item with
/// a matching text is canonical; later duplicates are never touched.
fn reconcile(
    working: &mut Vec<QuoteItem>,
    remote_items: Vec<QuoteItem>,
    resolver: &mut dyn ConflictResolver,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for remote_item in remote_items {
        let position = working
            .iter()
            .position(|local| local.text == remote_item.text);

        match position {
            None => {
                report.added.push(remote_item.text.clone());
                working.push(remote_item);
            }
            Some(index) => {
                let local = &mut working[index];
                match resolver.resolve(local, &remote_item)? {
                    Resolution::TakeRemote => {
                        local.category = remote_item.category;
                        report.updated.push(local.text.clone());
                    }
                    Resolution::KeepLocal => {
                        report.kept.push(local.text.clone());
                    }
                }
            }
        }
    }

    Ok(report)
}
