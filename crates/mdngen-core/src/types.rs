//! Core data types for the scraped element and attribute catalogs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scraped HTML element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Source name in angle brackets, e.g. `<div>`.
    pub name: String,
    /// Description, cross-link substituted before rendering.
    pub desc: String,
    /// Whether the element is deprecated in the latest standard.
    pub deprecated: bool,
    /// Markdown documentation link, or the missing-docs placeholder.
    pub mdn_link: String,
    /// Rust identifier used in the generated declaration, e.g. `Div`.
    pub ident: String,
    /// Markdown reference to the identifier, e.g. `` [`Div`] ``.
    pub ident_link: String,
    /// Identifier links of the attributes applicable to this element.
    ///
    /// Empty until cross-linking; sorted alphabetically afterwards.
    pub attributes: Vec<String>,
}

/// A scraped HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Source name, e.g. `autoplay`.
    pub name: String,
    /// Description, cross-link substituted before rendering.
    pub desc: String,
    /// Whether the attribute is deprecated in the latest standard.
    pub deprecated: bool,
    /// Markdown documentation link, or the missing-docs placeholder.
    pub mdn_link: String,
    /// Rust identifier used in the generated declaration, e.g. `AutoPlay`.
    pub ident: String,
    /// Markdown reference to the identifier, e.g. `` [`AutoPlay`] ``.
    pub ident_link: String,
    /// Elements this attribute applies to.
    ///
    /// `None` means the attribute is global and applies to every element.
    /// Holds element source names after extraction, identifier links after
    /// cross-linking; sorted alphabetically by the time rendering starts.
    pub elements: Option<Vec<String>>,
    /// Whether the scope list carried the `contenteditable` marker.
    pub content_editable: bool,
}

/// Elements keyed by source name, in catalog order.
pub type ElementMap = IndexMap<String, Element>;

/// Attributes keyed by source name, in catalog order.
pub type AttributeMap = IndexMap<String, Attribute>;

/// The two cross-linked collections, frozen once rendering starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogs {
    /// Scraped elements by source name.
    pub elements: ElementMap,
    /// Scraped attributes by source name.
    pub attributes: AttributeMap,
}
