//! Cross-linking of the element and attribute collections.
//!
//! Runs after extraction and before rendering, in three steps:
//!
//! 1. Build the applicability relation: global attributes attach to every
//!    element, scoped attributes only to the elements their scope lists
//!    name. A scope name missing from the element collection is fatal.
//! 2. Rewrite both sides of the relation from source names to identifier
//!    links and impose the total order: alphabetical, deduplicated.
//! 3. Substitute inline `<name>` references in descriptions with identifier
//!    links, leaving the one special-cased literal snippet verbatim.
//!
//! Once this module returns, the collections are frozen; rendering only
//! reads them.

use crate::types::{AttributeMap, Catalogs, ElementMap};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches an element reference in running description text, e.g. `<div>`.
#[allow(clippy::expect_used)]
static IN_ANGLE_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(.+?)>").expect("regex is statically valid"));

/// The `manifest` attribute's description quotes this markup as an example;
/// it must render as literal text, not resolve as a reference.
const MANIFEST_ATTRIBUTE: &str = "manifest";
const MANIFEST_LITERAL: &str = r#"<link rel="manifest">"#;

/// Cross-links the two collections in place and freezes their order.
pub fn apply(catalogs: &mut Catalogs) -> Result<()> {
    link_applicability(&mut catalogs.elements, &catalogs.attributes)?;
    resolve_references(&mut catalogs.elements, &mut catalogs.attributes)?;
    substitute_descriptions(&mut catalogs.elements, &mut catalogs.attributes);

    // Total deterministic order for rendering: identifier-sorted groups.
    catalogs
        .elements
        .sort_by(|_, a, _, b| a.ident.cmp(&b.ident));
    catalogs
        .attributes
        .sort_by(|_, a, _, b| a.ident.cmp(&b.ident));

    Ok(())
}

/// Phase 1: attach attribute source names to the elements they apply to.
fn link_applicability(elements: &mut ElementMap, attributes: &AttributeMap) -> Result<()> {
    for attr in attributes.values() {
        match &attr.elements {
            // Global: applies to every element.
            None => {
                for element in elements.values_mut() {
                    element.attributes.push(attr.name.clone());
                }
            },
            Some(scope) => {
                for name in scope {
                    let element =
                        elements
                            .get_mut(name)
                            .ok_or_else(|| Error::CrossLink {
                                name: name.clone(),
                                referenced_by: attr.name.clone(),
                            })?;
                    element.attributes.push(attr.name.clone());
                }
            },
        }
    }

    Ok(())
}

/// Phase 2: rewrite both sides from source names to identifier links and
/// sort each list alphabetically.
fn resolve_references(elements: &mut ElementMap, attributes: &mut AttributeMap) -> Result<()> {
    for attr in attributes.values_mut() {
        if let Some(scope) = attr.elements.as_mut() {
            for name in scope.iter_mut() {
                let element = elements.get(name.as_str()).ok_or_else(|| Error::CrossLink {
                    name: name.clone(),
                    referenced_by: attr.name.clone(),
                })?;
                *name = element.ident_link.clone();
            }
            scope.sort();
            scope.dedup();
        }
    }

    for element in elements.values_mut() {
        for name in &mut element.attributes {
            // Phase 1 only ever pushes names taken from the attribute map.
            if let Some(attr) = attributes.get(name.as_str()) {
                *name = attr.ident_link.clone();
            }
        }
        element.attributes.sort();
        element.attributes.dedup();
    }

    Ok(())
}

/// Replaces inline `<name>` tokens that resolve to a known element with that
/// element's identifier link. Unknown tokens stay verbatim.
fn substitute_descriptions(elements: &mut ElementMap, attributes: &mut AttributeMap) {
    let resolved: Vec<(String, String)> = elements
        .values()
        .map(|e| (e.name.clone(), e.ident_link.clone()))
        .collect();
    let lookup: std::collections::HashMap<&str, &str> = resolved
        .iter()
        .map(|(name, link)| (name.as_str(), link.as_str()))
        .collect();

    let substitute = |desc: &str| -> String {
        IN_ANGLE_BRACKETS
            .replace_all(desc, |caps: &Captures<'_>| {
                let token = &caps[0];
                lookup.get(token).map_or_else(|| token.to_string(), |link| (*link).to_string())
            })
            .into_owned()
    };

    for attr in attributes.values_mut() {
        if attr.name == MANIFEST_ATTRIBUTE {
            attr.desc = attr
                .desc
                .replace(MANIFEST_LITERAL, &format!("`{MANIFEST_LITERAL}`"));
        } else {
            attr.desc = substitute(&attr.desc);
        }
    }

    for element in elements.values_mut() {
        element.desc = substitute(&element.desc);
    }
}
