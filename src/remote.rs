//! Remote endpoint client.
//!
//! Talks to the mock quote source: a GET for candidate quotes and a POST for
//! newly added ones. Both calls degrade rather than fail: a transport or
//! parse problem is logged and the caller sees an empty fetch result or an
//! unacknowledged submit, never an error. Local state is authoritative; a
//! failed submit does not roll back an already-applied append.

use std::time::Duration;

use crate::error::{QuoteError, Result};
use crate::model::{QuoteItem, RemoteRecord};

/// Category assigned to every record coming from the remote source, which
/// carries no category information of its own.
pub const REMOTE_CATEGORY: &str = "General";

/// Blocking client for the remote quote endpoint.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl RemoteClient {
    /// Build a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::Transport {
                context: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Fetch the remote quote list.
    ///
    /// Every remote record becomes a quote with the [`REMOTE_CATEGORY`]
    /// placeholder. Any transport or parse failure yields an empty list;
    /// the caller cannot distinguish that from a genuinely empty server.
    #[must_use]
    pub fn fetch(&self) -> Vec<QuoteItem> {
        match self.try_fetch() {
            Ok(records) => map_records(records),
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, err = %e, "error fetching quotes from server");
                Vec::new()
            }
        }
    }

    fn try_fetch(&self) -> reqwest::Result<Vec<RemoteRecord>> {
        self.http
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()
    }

    /// Submit a newly added quote to the remote endpoint.
    ///
    /// Fire-and-forget: a non-success status or transport failure is logged
    /// and swallowed. No retry.
    pub fn submit(&self, item: &QuoteItem) {
        let result = self
            .http
            .post(&self.endpoint)
            .json(item)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status);

        match result {
            Ok(response) => {
                tracing::debug!(endpoint = %self.endpoint, status = %response.status(), text = %item.text, "quote posted to server");
            }
            Err(e) => {
                tracing::warn!(endpoint = %self.endpoint, err = %e, text = %item.text, "error posting quote to server");
            }
        }
    }
}

/// Map remote records onto quote items with the placeholder category.
fn map_records(records: Vec<RemoteRecord>) -> Vec<QuoteItem> {
    records
        .into_iter()
        .map(|record| QuoteItem::new(record.title, REMOTE_CATEGORY))
        .collect()
}
