//! Rendering of the cross-linked catalogs into generated Rust source.
//!
//! The whole document is assembled as one `String` and handed back to the
//! caller; nothing is written incrementally, so a block's closing brace can
//! never be orphaned by a failure halfway through a group.

use crate::config::{ATTRIBUTES_ROUTE, ELEMENTS_ROUTE, MDN};
use crate::types::{Attribute, Catalogs, Element};
use crate::Result;

/// Renders the complete generated source file.
///
/// Two grouped blocks — attributes first, then elements — each emitted in
/// the identifier-sorted order the cross-linker established.
#[must_use]
pub fn render(catalogs: &Catalogs) -> String {
    let mut attributes_body = String::new();
    for attr in catalogs.attributes.values() {
        render_attribute(attr, &mut attributes_body);
    }

    let mut elements_body = String::new();
    for element in catalogs.elements.values() {
        render_element(element, &mut elements_body);
    }

    format!(
        "{}\n{}\n{}",
        header(),
        block("attributes", &attributes_body),
        block("elements", &elements_body),
    )
}

/// Renders the cross-linked dataset as pretty-printed JSON.
pub fn render_json(catalogs: &Catalogs) -> Result<String> {
    let mut json = serde_json::to_string_pretty(catalogs)?;
    json.push('\n');
    Ok(json)
}

/// Fixed file header: generated-file notice, module docs, imports.
fn header() -> String {
    format!(
        r#"// Programmatically generated by mdngen, do not edit manually.

//! HTML elements and attributes definitions.
//!
//! In the Wasmadeus framework, [HTML elements]({MDN}{ELEMENTS_ROUTE}) are replaced
//! with simple rust functions taking one or more [`Attributes`]
//! for input and returning a [`Component`].
//!
//! [HTML attributes]({MDN}{ATTRIBUTES_ROUTE}) are simply rust structs that implement
//! the [`Attribute`] trait.
//!
//! This module contains the definitions and documentation of all standard HTML
//! elements and attributes, including the deprecated and experimental ones.

use web_sys::Element;

use crate::attribute::{{attributes, Attribute, Attributes}};
use crate::component::{{elements, Component}};
use crate::signal::Value;
use crate::util::TryAsRef;
"#
    )
}

/// Wraps a group body in its macro invocation. The opening and closing
/// markers are emitted together, as a pair.
fn block(macro_name: &str, body: &str) -> String {
    format!("{macro_name}! {{\n{body}}}\n")
}

fn render_attribute(attr: &Attribute, out: &mut String) {
    let applicability = attr.elements.as_ref().map_or_else(
        || "Global attribute: can be applied to any HTML element.".to_string(),
        |elements| {
            format!(
                "Can be applied to the following elements: {}.",
                elements.join(", ")
            )
        },
    );

    let corresponds = format!("Corresponds to the HTML attribute: `{}`.", attr.name);
    push_doc_lines(
        &[
            attr.desc.as_str(),
            "",
            corresponds.as_str(),
            "",
            applicability.as_str(),
            "",
            attr.mdn_link.as_str(),
        ],
        out,
    );

    if attr.deprecated {
        out.push_str(
            "    #[deprecated = \"This HTML attribute is deprecated in the latest standard.\"]\n",
        );
    }
    out.push_str(&format!("    {} => \"{}\",\n", attr.ident, attr.name));
}

fn render_element(element: &Element, out: &mut String) {
    let corresponds = format!("Corresponds to the HTML element: `{}`.", element.name);
    let supports = format!(
        "Supports the following attributes: {}.",
        element.attributes.join(", ")
    );
    push_doc_lines(
        &[
            element.desc.as_str(),
            "",
            corresponds.as_str(),
            "",
            supports.as_str(),
            "",
            element.mdn_link.as_str(),
        ],
        out,
    );

    if element.deprecated {
        out.push_str(
            "    #[deprecated = \"This HTML element is deprecated in the latest standard.\"]\n",
        );
    }
    out.push_str(&format!(
        "    {} => \"{}\",\n",
        element.ident,
        crate::extract::element_tag(&element.name)
    ));
}

fn push_doc_lines(lines: &[&str], out: &mut String) {
    for line in lines {
        if line.is_empty() {
            out.push_str("    ///\n");
        } else {
            out.push_str(&format!("    /// {line}\n"));
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::extract::{attribute_ident, element_ident, ident_link};
    use crate::types::{Attribute, Element};

    fn element(name: &str, desc: &str, deprecated: bool, attributes: &[&str]) -> Element {
        let ident = element_ident(name);
        let link = ident_link(&ident);
        Element {
            name: name.to_string(),
            desc: desc.to_string(),
            deprecated,
            mdn_link: "*Missing MDN documentation.*".to_string(),
            ident,
            ident_link: link,
            attributes: attributes.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn attribute(name: &str, desc: &str, deprecated: bool, elements: Option<&[&str]>) -> Attribute {
        let ident = attribute_ident(name);
        let link = ident_link(&ident);
        Attribute {
            name: name.to_string(),
            desc: desc.to_string(),
            deprecated,
            mdn_link: "[MDN documentation.](https://developer.mozilla.org/x)".to_string(),
            ident,
            ident_link: link,
            elements: elements.map(|list| list.iter().map(|s| (*s).to_string()).collect()),
            content_editable: false,
        }
    }

    fn catalogs(elements: Vec<Element>, attributes: Vec<Attribute>) -> Catalogs {
        Catalogs {
            elements: elements.into_iter().map(|e| (e.name.clone(), e)).collect(),
            attributes: attributes
                .into_iter()
                .map(|a| (a.name.clone(), a))
                .collect(),
        }
    }

    #[test]
    fn test_output_has_header_then_both_blocks() {
        let output = render(&catalogs(
            vec![element("<div>", "Container.", false, &["[`Class`]"])],
            vec![attribute("class", "CSS classes.", false, None)],
        ));

        assert!(output.starts_with("// Programmatically generated by mdngen"));
        let attributes_at = output.find("attributes! {").unwrap();
        let elements_at = output.find("elements! {").unwrap();
        assert!(attributes_at < elements_at, "attributes block comes first");

        // Both blocks close.
        assert_eq!(output.matches("\n}\n").count(), 2);
    }

    #[test]
    fn test_global_attribute_doc_wording() {
        let output = render(&catalogs(
            vec![],
            vec![attribute("class", "CSS classes.", false, None)],
        ));

        assert!(output.contains("/// Global attribute: can be applied to any HTML element."));
        assert!(!output.contains("Can be applied to the following elements"));
    }

    #[test]
    fn test_scoped_attribute_lists_resolved_links() {
        let output = render(&catalogs(
            vec![],
            vec![attribute(
                "src",
                "Resource address.",
                false,
                Some(&["[`Img`]", "[`Video`]"]),
            )],
        ));

        assert!(
            output.contains("/// Can be applied to the following elements: [`Img`], [`Video`].")
        );
    }

    #[test]
    fn test_deprecated_marker_precedes_declaration() {
        let output = render(&catalogs(
            vec![element("<blink>", "Blinks.", true, &[])],
            vec![attribute("bgcolor", "Background color.", true, None)],
        ));

        assert!(output.contains(
            "    #[deprecated = \"This HTML attribute is deprecated in the latest standard.\"]\n    BgColor => \"bgcolor\","
        ));
        assert!(output.contains(
            "    #[deprecated = \"This HTML element is deprecated in the latest standard.\"]\n    Blink => \"blink\","
        ));
    }

    #[test]
    fn test_declaration_lines() {
        let output = render(&catalogs(
            vec![element("<div>", "Container.", false, &[])],
            vec![attribute("http-equiv", "Pragma directive.", false, None)],
        ));

        assert!(output.contains("    HttpEquiv => \"http-equiv\",\n"));
        assert!(output.contains("    Div => \"div\",\n"));
    }

    #[test]
    fn test_records_emit_in_map_order() {
        let output = render(&catalogs(
            vec![],
            vec![
                attribute("alt", "Alternative text.", false, None),
                attribute("class", "CSS classes.", false, None),
                attribute("href", "Link target.", false, None),
            ],
        ));

        let alt = output.find("Alt => ").unwrap();
        let class = output.find("Class => ").unwrap();
        let href = output.find("Href => ").unwrap();
        assert!(alt < class && class < href);
    }

    #[test]
    fn test_doc_link_is_last_doc_line() {
        let output = render(&catalogs(
            vec![],
            vec![attribute("class", "CSS classes.", false, None)],
        ));

        assert!(output.contains(
            "    /// [MDN documentation.](https://developer.mozilla.org/x)\n    Class => \"class\",\n"
        ));
    }

    #[test]
    fn test_empty_doc_lines_have_no_trailing_space() {
        let output = render(&catalogs(
            vec![],
            vec![attribute("class", "CSS classes.", false, None)],
        ));

        for line in output.lines() {
            assert_eq!(line.trim_end(), line, "trailing whitespace in: {line:?}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = catalogs(
            vec![element("<div>", "Container.", false, &["[`Class`]"])],
            vec![attribute("class", "CSS classes.", false, None)],
        );

        assert_eq!(render(&data), render(&data));
    }

    #[test]
    fn test_json_output_round_trips() {
        let data = catalogs(
            vec![element("<div>", "Container.", false, &["[`Class`]"])],
            vec![attribute("class", "CSS classes.", false, None)],
        );

        let json = render_json(&data).unwrap();
        let back: Catalogs = serde_json::from_str(&json).unwrap();
        assert_eq!(back.elements["<div>"].ident, "Div");
    }
}
