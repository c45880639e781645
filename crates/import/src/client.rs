//! HTTP retrieval for the importer.

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout. The importer defines no scheduling of its own; this
/// is the only time bound it imposes.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("suse-oval-import/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around [`reqwest::Client`] that turns transport failures and
/// non-success responses into import errors.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { http })
    }

    /// Wrap an externally configured client (proxy, TLS, custom timeout).
    pub fn from_http(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// GET a page as text.
    pub async fn text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        response.text().await.or_raise(|| ErrorKind::Request(url.to_string()))
    }

    /// GET a document as raw bytes.
    pub async fn bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let body = response.bytes().await.or_raise(|| ErrorKind::Request(url.to_string()))?;
        Ok(body.to_vec())
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "fetching");
        let response =
            self.http.get(url).send().await.or_raise(|| ErrorKind::Request(url.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status { url: url.to_string(), status: status.as_u16() });
        }
        Ok(response)
    }
}
