//! HTTP fetching for catalog pages and documentation link checks.
//!
//! Two kinds of request with two very different failure contracts:
//!
//! - [`Fetcher::fetch_page`] retrieves a reference catalog. The page is
//!   load-bearing, so any non-success status or transport failure is an
//!   error and aborts the run.
//! - [`Fetcher::resolve_doc_link`] verifies a scraped hyperlink with a HEAD
//!   request. A broken reference link must never abort generation, so
//!   anything other than a plain 200 — including DNS failures and timeouts —
//!   downgrades the link to a fixed placeholder and the run continues.

use crate::config::Config;
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// Placeholder substituted for a documentation link that is missing or
/// failed its existence check.
pub const MISSING_DOC_LINK: &str = "*Missing MDN documentation.*";

/// HTTP client for scraping reference catalogs.
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    /// Creates a new fetcher for the configured documentation origin.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, config.timeout)
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mdngen/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetches a catalog page, returning its HTML body.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(Error::NotFound(format!(
                    "catalog page not found at '{url}'"
                )));
            }

            match response.error_for_status() {
                Ok(_) => unreachable!("status should be an error"),
                Err(err) => return Err(Error::Network(err)),
            }
        }

        let body = response.text().await?;
        info!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }

    /// Resolves a scraped hyperlink route into a markdown documentation link.
    ///
    /// `None` (the cell carried no anchor) and every failed existence check
    /// produce [`MISSING_DOC_LINK`]. Only a HEAD response of exactly 200 OK
    /// yields a real link.
    pub async fn resolve_doc_link(&self, route: Option<&str>) -> String {
        let Some(route) = route else {
            return MISSING_DOC_LINK.to_string();
        };

        let Some(url) = join_route(&self.base_url, route) else {
            warn!("Unresolvable documentation route '{route}'");
            return MISSING_DOC_LINK.to_string();
        };

        match self.client.head(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => format_doc_link(&url),
            Ok(response) => {
                debug!("Link check for {} returned {}", url, response.status());
                MISSING_DOC_LINK.to_string()
            },
            Err(err) => {
                debug!("Link check for {} failed: {}", url, err);
                MISSING_DOC_LINK.to_string()
            },
        }
    }
}

/// Formats a verified URL as the markdown link embedded in doc comments.
fn format_doc_link(url: &str) -> String {
    format!("[MDN documentation.]({url})")
}

/// Joins a scraped href against the documentation origin.
///
/// Catalog hrefs are origin-relative routes, but the occasional absolute
/// URL passes through unchanged.
fn join_route(base_url: &str, route: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    let joined = base.join(route).ok()?;
    Some(joined.to_string())
}
