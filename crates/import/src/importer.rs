//! The import pipeline: list, deduplicate, fetch, decode, yield.

use crate::client::Client;
use crate::ecosystem::Ecosystem;
use crate::error::{ErrorKind, Result};
use async_stream::stream;
use futures::Stream;
use suse_oval_decode::{Element, decode};
use suse_oval_listing::{Listing, prefer_affected};
use tracing::{debug, info};

/// What to do when a single document in the batch fails to fetch or decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Surface the failure and end the stream; remaining entries are never
    /// fetched.
    #[default]
    Abort,
    /// Surface the failure as an `Err` item and continue with the next
    /// entry.
    Continue,
}

/// Fetches SUSE's published OVAL datasets and yields them as parsed trees.
///
/// [`documents`](Self::documents) performs one listing request plus one
/// request per surviving entry, strictly in order and only as the stream is
/// polled — a caller that stops early never triggers the remaining fetches.
/// Every call re-lists and re-fetches; nothing is cached or persisted here.
#[derive(Debug, Clone)]
pub struct Importer {
    client: Client,
    base_url: String,
    policy: ErrorPolicy,
}

impl Importer {
    /// Directory listing the vendor publishes its OVAL datasets under.
    pub const BASE_URL: &str = "https://ftp.suse.com/pub/projects/security/oval/";
    /// License the published data is distributed under.
    pub const SPDX_LICENSE_EXPRESSION: &str = "CC-BY-4.0";
    /// Where the vendor states that license.
    pub const LICENSE_URL: &str = "https://ftp.suse.com/pub/projects/security/oval/LICENSE";

    pub fn new() -> Result<Self> {
        Ok(Self::with_base_url(Client::new()?, Self::BASE_URL))
    }

    /// An importer reading a different listing location, e.g. a mirror.
    ///
    /// Entry targets are resolved by appending each listed filename to
    /// `base_url`, so it should end with a trailing slash.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into(), policy: ErrorPolicy::default() }
    }

    /// Set the per-entry failure policy.
    ///
    /// The default, [`ErrorPolicy::Abort`], halts the whole batch on the
    /// first failed entry. Listing failures end the stream under either
    /// policy.
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Lazily stream every current OVAL dataset as a
    /// `(tag, parsed document)` pair.
    ///
    /// Pairs are yielded in listing order with superseded variants removed.
    /// Items already yielded stay valid whatever happens to later entries.
    pub fn documents(&self) -> impl Stream<Item = Result<(Ecosystem, Element)>> + '_ {
        stream!({
            let page = match self.client.text(&self.base_url).await {
                Ok(page) => page,
                Err(e) => {
                    yield Err(e);
                    return;
                },
            };
            let entries = self.discover(&page);
            info!(count = entries.len(), "discovered OVAL datasets");

            for url in entries {
                match self.fetch_document(&url).await {
                    Ok(element) => yield Ok((Ecosystem::OPENSUSE_RPM, element)),
                    Err(e) => {
                        yield Err(e);
                        if self.policy == ErrorPolicy::Abort {
                            return;
                        }
                    },
                }
            }
        })
    }

    /// Extract and deduplicate the compressed entries of a listing page.
    fn discover(&self, page: &str) -> Vec<String> {
        prefer_affected(Listing::from_html(page).compressed_entries(&self.base_url))
    }

    async fn fetch_document(&self, url: &str) -> Result<Element> {
        let body = self.client.bytes(url).await?;
        debug!(url, size = body.len(), "decoding document");
        decode(&body).map_err(ErrorKind::decode)
    }
}
