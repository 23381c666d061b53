//! Catalog endpoint configuration.
//!
//! The generator scrapes two reference pages under a single documentation
//! origin. The origin is overridable (tests point it at a local mock
//! server); everything else about the catalogs — sentinel tokens, rename
//! overrides, placeholder strings — is compile-time constant and lives with
//! the code that consumes it.

use std::time::Duration;

/// Documentation origin used for real runs.
pub const MDN: &str = "https://developer.mozilla.org";

/// Route of the element reference catalog, relative to the origin.
pub const ELEMENTS_ROUTE: &str = "/en-US/docs/Web/HTML/Element";

/// Route of the attribute reference catalog, relative to the origin.
pub const ATTRIBUTES_ROUTE: &str = "/en-US/docs/Web/HTML/Attributes";

/// Endpoints and network settings for one generator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the catalog routes and scraped hyperlinks are joined against.
    pub base_url: String,
    /// Per-request timeout for both page fetches and link checks.
    pub timeout: Duration,
}

impl Config {
    /// Configuration pointing at a custom origin, typically a mock server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the element reference catalog.
    #[must_use]
    pub fn elements_url(&self) -> String {
        format!("{}{ELEMENTS_ROUTE}", self.base_url)
    }

    /// Full URL of the attribute reference catalog.
    #[must_use]
    pub fn attributes_url(&self) -> String {
        format!("{}{ATTRIBUTES_ROUTE}", self.base_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: MDN.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
