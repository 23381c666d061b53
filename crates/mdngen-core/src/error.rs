//! Error types and handling for mdngen-core operations.
//!
//! Failures fall into three buckets, mirroring how the pipeline treats them:
//!
//! - **Degraded**: an unreachable documentation link. Never an [`Error`] at
//!   all — the fetcher substitutes a placeholder and the run continues.
//! - **Recoverable**: transient network trouble while fetching a catalog
//!   page. Reported as [`Error::Network`]; retrying the run may succeed.
//! - **Fatal**: a cross-reference naming an element that does not exist in
//!   the scraped catalog ([`Error::CrossLink`]). This means the upstream
//!   tables changed shape and the static parsing rules no longer match, so
//!   the run aborts rather than emit silently corrupted documentation.

use thiserror::Error;

/// The main error type for mdngen-core operations.
///
/// All public functions in mdngen-core return `Result<T, Error>`. Errors
/// preserve their source chain (`reqwest::Error`, `std::io::Error`) for
/// detailed inspection, and expose [`Error::is_recoverable`] and
/// [`Error::category`] for retry logic and logging.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers the GET requests for the two catalog pages. Link existence
    /// checks never produce this error; a failed check downgrades the link
    /// to a placeholder instead.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Requested catalog page was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catalog page could not be parsed into reference tables.
    ///
    /// Raised when a page contains no `<table>` at all or a row is missing
    /// the cells the extraction rules expect.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A cross-reference names an element absent from the catalog.
    ///
    /// This is the fatal-inconsistency path: an attribute's applicability
    /// list points at an element source name that was never scraped. A
    /// partial relation would silently corrupt the generated documentation,
    /// so the pipeline has no recovery here.
    #[error("cross-link inconsistency: attribute '{referenced_by}' applies to unknown element '{name}'")]
    CrossLink {
        /// The element source name that could not be resolved.
        name: String,
        /// The attribute whose applicability list referenced it.
        referenced_by: String,
    },

    /// URL is malformed or invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization of the generated dataset failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable by re-running the generator.
    ///
    /// Returns `true` for transient failures (timeouts, connection errors).
    /// Parse and cross-link errors are permanent: they indicate the upstream
    /// tables drifted and need a human to update the parsing rules.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::NotFound(_) => "not_found",
            Self::Parse(_) => "parse",
            Self::CrossLink { .. } => "crosslink",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Serialization(_) => "serialization",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
