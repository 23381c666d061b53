//! # mdngen-core
//!
//! Core pipeline for mdngen - generates the HTML element and attribute
//! declarations consumed by the Wasmadeus component framework, by scraping
//! the two MDN reference catalogs and reconciling their cross-references.
//!
//! ## Architecture
//!
//! Four components, applied in strict dependency order:
//!
//! - **Fetcher** ([`fetcher`], [`catalog`]): retrieves the two reference
//!   pages, scrapes their tables into rows of linked cells, and verifies
//!   every documentation hyperlink with a HEAD check (broken links degrade
//!   to a placeholder, never abort the run)
//! - **Extractor** ([`extract`]): turns each raw row into typed records
//!   with derived identifiers, deprecation flags, and applicability scopes
//! - **CrossLinker** ([`crosslink`]): builds the bidirectional
//!   element/attribute relation, resolves references, and imposes the
//!   total identifier order
//! - **Renderer** ([`render`]): emits the grouped, documented declaration
//!   blocks from the frozen dataset
//!
//! [`generator::Generator`] sequences them; re-running it against identical
//! catalog rows produces byte-identical output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdngen_core::{Config, Generator, render};
//!
//! # async fn run() -> mdngen_core::Result<()> {
//! let generator = Generator::new(Config::default())?;
//! let catalogs = generator.scrape().await?;
//! print!("{}", render::render(&catalogs));
//! # Ok(())
//! # }
//! ```

/// Scraping of catalog pages into tabular rows
pub mod catalog;
/// Catalog endpoints and network settings
pub mod config;
/// Cross-linking of the element and attribute collections
pub mod crosslink;
/// Error types and result aliases
pub mod error;
/// Row-to-record extraction rules
pub mod extract;
/// HTTP fetching and documentation link checks
pub mod fetcher;
/// Pipeline orchestration
pub mod generator;
/// Rendering of generated source
pub mod render;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use generator::Generator;
pub use types::{Attribute, AttributeMap, Catalogs, Element, ElementMap};
