//! Conversion of raw catalog rows into typed element and attribute records.
//!
//! Everything here is a pure per-row transform; network work (documentation
//! link checks) happens before these functions run, and the cross-link
//! relation is built afterwards. A single row may expand to several records
//! (the compound heading row), which is why element extraction returns a
//! list.

use crate::catalog::Row;
use crate::types::{Attribute, Element};
use crate::{Error, Result};

/// Placeholder substituted for an empty description cell.
pub const MISSING_DESC: &str = "*Missing MDN description.*";

/// Scope cell sentinel marking an attribute as applicable to every element.
const GLOBAL_SCOPE: &str = "Global attribute";

/// Attribute dropped entirely: `data-*` has no fixed identifier space.
const SKIPPED_ATTRIBUTE: &str = "data-*";

/// Warning token on the name cell that marks a deprecated entry.
const DEPRECATED_TOKEN: &str = "deprecated";

/// Scope list member recorded as a side-flag instead of an element reference.
const CONTENT_EDITABLE: &str = "contenteditable";

/// Delimiter between element names in a scope cell.
const SCOPE_DELIMITER: &str = ", ";

/// Attributes are renamed from their HTML names by making the first letter
/// uppercase, except for the following attributes that are manually renamed.
const RENAME_OVERRIDES: &[(&str, &str)] = &[
    ("accept-charset", "AcceptCharset"),
    ("accesskey", "AccessKey"),
    ("autocapitalize", "AutoCapitalize"),
    ("autocomplete", "AutoComplete"),
    ("autofocus", "AutoFocus"),
    ("autoplay", "AutoPlay"),
    ("bgcolor", "BgColor"),
    ("contenteditable", "ContentEditable"),
    ("contextmenu", "ContextMenu"),
    ("crossorigin", "CrossOrigin"),
    ("datetime", "DateTime"),
    ("dirname", "DirName"),
    ("enctype", "EncType"),
    ("enterkeyhint", "EnterKeyHint"),
    ("formaction", "FormAction"),
    ("formenctype", "FormEnctype"),
    ("formmethod", "FormMethod"),
    ("formnovalidate", "FormNoValidate"),
    ("formtarget", "FormTarget"),
    ("hreflang", "HrefLang"),
    ("http-equiv", "HttpEquiv"),
    ("intrinsicsize", "IntrinsicSize"),
    ("inputmode", "InputMode"),
    ("ismap", "IsMap"),
    ("itemprop", "ItemProp"),
    ("maxlength", "MaxLength"),
    ("minlength", "MinLength"),
    ("novalidate", "NoValidate"),
    ("placeholder", "PlaceHolder"),
    ("playsinline", "PlaysInline"),
    ("readonly", "ReadOnly"),
    ("referrerpolicy", "ReferrerPolicy"),
    ("rowspan", "RowSpan"),
    ("sandbox", "SandBox"),
    ("spellcheck", "SpellCheck"),
    ("srcdoc", "SrcDoc"),
    ("srclang", "SrcLang"),
    ("srcset", "SrcSet"),
    ("tabindex", "TabIndex"),
    ("usemap", "UseMap"),
    ("value", "DefaultValue"),
];

/// Derives the Rust identifier for an attribute source name.
///
/// The override table takes precedence; any other name gets its first
/// character uppercased with the remainder unchanged.
#[must_use]
pub fn attribute_ident(name: &str) -> String {
    if let Some((_, ident)) = RENAME_OVERRIDES.iter().find(|(from, _)| *from == name) {
        return (*ident).to_string();
    }
    capitalize_first(name)
}

/// Strips the angle brackets off an element source name: `<div>` becomes
/// `div`. This is the tag string emitted in the declaration line.
#[must_use]
pub fn element_tag(name: &str) -> String {
    name.trim_matches(|c| c == '<' || c == '>').to_string()
}

/// Derives the Rust identifier for an element source name: the bracketless
/// tag run through the same rename rule as attributes, so `<div>` becomes
/// `Div` and `<h1>` becomes `H1`.
#[must_use]
pub fn element_ident(name: &str) -> String {
    attribute_ident(&element_tag(name))
}

/// Markdown reference to a generated identifier, e.g. `` [`AutoPlay`] ``.
#[must_use]
pub fn ident_link(ident: &str) -> String {
    format!("[`{ident}`]")
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Collapses every run of doubled spaces down to single spaces.
#[must_use]
pub fn collapse_spaces(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("  ") {
        out = out.replace("  ", " ");
    }
    out
}

/// Normalizes a description cell: collapsed whitespace, placeholder when empty.
#[must_use]
pub fn normalize_desc(desc: &str) -> String {
    let collapsed = collapse_spaces(desc.trim());
    if collapsed.is_empty() {
        MISSING_DESC.to_string()
    } else {
        collapsed
    }
}

/// Extracts the element records of one catalog row.
///
/// The compound heading row `<h1>, <h2>, …` expands to one record per
/// level, sharing a description template parameterized by the level number;
/// every other row yields exactly one record.
pub fn element_records(row: &Row, deprecated: bool, mdn_link: &str) -> Result<Vec<Element>> {
    let [name_cell, desc_cell, ..] = row.as_slice() else {
        return Err(Error::Parse(format!(
            "element row has {} cells, expected name and description",
            row.len()
        )));
    };

    if name_cell.text.starts_with("<h1>") {
        return Ok(name_cell
            .text
            .split(SCOPE_DELIMITER)
            .enumerate()
            .map(|(i, name)| {
                let desc = format!(
                    "Represents a section heading of level {}. <h1> being the highest and <h6> the lowest.",
                    i + 1
                );
                make_element(name, &desc, deprecated, mdn_link)
            })
            .collect());
    }

    Ok(vec![make_element(
        &name_cell.text,
        &desc_cell.text,
        deprecated,
        mdn_link,
    )])
}

fn make_element(name: &str, desc: &str, deprecated: bool, mdn_link: &str) -> Element {
    let ident = element_ident(name);
    let ident_link = ident_link(&ident);

    Element {
        name: name.to_string(),
        desc: normalize_desc(desc),
        deprecated,
        mdn_link: mdn_link.to_string(),
        ident,
        ident_link,
        attributes: Vec::new(),
    }
}

/// Extracts the attribute record of one catalog row.
///
/// Returns `Ok(None)` for the intentionally unsupported `data-*` row.
pub fn attribute_record(row: &Row, mdn_link: &str) -> Result<Option<Attribute>> {
    let [name_cell, scope_cell, desc_cell, ..] = row.as_slice() else {
        return Err(Error::Parse(format!(
            "attribute row has {} cells, expected name, scope and description",
            row.len()
        )));
    };

    // Trailing warning tokens ride along on the name cell.
    let collapsed = collapse_spaces(&name_cell.text);
    let mut parts = collapsed.split(' ');
    let name = parts.next().unwrap_or_default().to_string();
    let deprecated = parts.any(|warning| warning.eq_ignore_ascii_case(DEPRECATED_TOKEN));

    if name == SKIPPED_ATTRIBUTE {
        return Ok(None);
    }

    let mut elements = parse_scope(&scope_cell.text);

    let content_editable = elements
        .as_ref()
        .is_some_and(|list| list.iter().any(|name| name == CONTENT_EDITABLE));
    if let Some(list) = elements.as_mut() {
        list.retain(|name| name != CONTENT_EDITABLE);
    }

    let ident = attribute_ident(&name);
    let ident_link = ident_link(&ident);

    Ok(Some(Attribute {
        name,
        desc: normalize_desc(&desc_cell.text),
        deprecated,
        mdn_link: mdn_link.to_string(),
        ident,
        ident_link,
        elements,
        content_editable,
    }))
}

/// Parses a scope cell into an explicit element list, or `None` for the
/// global sentinel.
fn parse_scope(scope: &str) -> Option<Vec<String>> {
    if scope == GLOBAL_SCOPE {
        return None;
    }

    Some(
        collapse_spaces(scope)
            .split(SCOPE_DELIMITER)
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Cell;
    use proptest::prelude::*;

    fn cell(text: &str) -> Cell {
        Cell {
            text: text.to_string(),
            link: None,
        }
    }

    fn attribute_row(name: &str, scope: &str, desc: &str) -> Row {
        vec![cell(name), cell(scope), cell(desc)]
    }

    const LINK: &str = "*Missing MDN documentation.*";

    #[test]
    fn test_overridden_names_use_mapped_identifier() {
        assert_eq!(attribute_ident("accept-charset"), "AcceptCharset");
        assert_eq!(attribute_ident("http-equiv"), "HttpEquiv");
        assert_eq!(attribute_ident("value"), "DefaultValue");
        assert_eq!(attribute_ident("contenteditable"), "ContentEditable");
    }

    #[test]
    fn test_plain_names_capitalize_first_character() {
        assert_eq!(attribute_ident("href"), "Href");
        assert_eq!(attribute_ident("class"), "Class");
        assert_eq!(attribute_ident("id"), "Id");
    }

    #[test]
    fn test_element_ident_strips_brackets_and_capitalizes() {
        assert_eq!(element_ident("<div>"), "Div");
        assert_eq!(element_ident("<h1>"), "H1");
        assert_eq!(element_tag("<div>"), "div");
    }

    proptest! {
        // Names outside the override table follow the default rule exactly.
        #[test]
        fn test_default_rule_for_non_overridden_names(name in "[a-z][a-z0-9-]{0,20}") {
            prop_assume!(!RENAME_OVERRIDES.iter().any(|(from, _)| *from == name));

            let ident = attribute_ident(&name);
            let mut chars = name.chars();
            let first = chars.next().unwrap();

            prop_assert_eq!(
                ident,
                first.to_uppercase().chain(chars).collect::<String>()
            );
        }

        #[test]
        fn test_collapse_spaces_leaves_no_doubles(text in r"[a-z ]{0,40}") {
            prop_assert!(!collapse_spaces(&text).contains("  "));
        }
    }

    #[test]
    fn test_heading_row_expands_per_level() {
        let row = vec![
            cell("<h1>, <h2>, <h3>, <h4>, <h5>, <h6>"),
            cell("Represent six levels of section headings."),
        ];

        let elements = element_records(&row, false, LINK).unwrap();

        assert_eq!(elements.len(), 6);
        assert_eq!(elements[0].ident, "H1");
        assert_eq!(elements[5].ident, "H6");
        assert!(elements[0].desc.contains("level 1"));
        assert!(elements[1].desc.contains("level 2"));
        // Descriptions differ only in the substituted level number.
        assert_eq!(
            elements[0].desc.replace("level 1", "level 2"),
            elements[1].desc
        );
    }

    #[test]
    fn test_plain_element_row_yields_one_record() {
        let row = vec![cell("<div>"), cell("The generic container.")];

        let elements = element_records(&row, false, LINK).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "<div>");
        assert_eq!(elements[0].ident, "Div");
        assert_eq!(elements[0].ident_link, "[`Div`]");
        assert!(elements[0].attributes.is_empty());
    }

    #[test]
    fn test_deprecated_flag_carries_through() {
        let row = vec![cell("<blink>"), cell("Blinks.")];

        let elements = element_records(&row, true, LINK).unwrap();
        assert!(elements[0].deprecated);
    }

    #[test]
    fn test_short_element_row_is_parse_error() {
        let row = vec![cell("<div>")];
        assert!(matches!(
            element_records(&row, false, LINK),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_deprecation_token_sets_flag_and_is_stripped() {
        let row = attribute_row("bgcolor Deprecated", "<body>, <table>", "Background color.");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();

        assert_eq!(attr.name, "bgcolor");
        assert!(attr.deprecated);
        assert_eq!(attr.ident, "BgColor");
    }

    #[test]
    fn test_deprecation_token_is_case_insensitive() {
        let row = attribute_row("align DEPRECATED", "<caption>", "Alignment.");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();
        assert!(attr.deprecated);
    }

    #[test]
    fn test_other_warning_tokens_do_not_deprecate() {
        let row = attribute_row("loading Experimental", "<img>", "Lazy loading.");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();
        assert_eq!(attr.name, "loading");
        assert!(!attr.deprecated);
    }

    #[test]
    fn test_global_scope_has_no_element_list() {
        let row = attribute_row("class", "Global attribute", "Often used with CSS.");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();
        assert_eq!(attr.elements, None);
    }

    #[test]
    fn test_explicit_scope_splits_into_source_names() {
        let row = attribute_row("src", "<img>, <script>, <video>", "Resource address.");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();
        assert_eq!(
            attr.elements,
            Some(vec![
                "<img>".to_string(),
                "<script>".to_string(),
                "<video>".to_string()
            ])
        );
    }

    #[test]
    fn test_contenteditable_is_a_side_flag_not_a_scope_entry() {
        let row = attribute_row(
            "enterkeyhint",
            "contenteditable, <textarea>",
            "Hints the enter key action.",
        );

        let attr = attribute_record(&row, LINK).unwrap().unwrap();

        assert!(attr.content_editable);
        assert_eq!(attr.elements, Some(vec!["<textarea>".to_string()]));
        assert_eq!(attr.ident, "EnterKeyHint");
    }

    #[test]
    fn test_data_attribute_row_is_skipped() {
        let row = attribute_row("data-*", "Global attribute", "Custom data attributes.");

        assert_eq!(attribute_record(&row, LINK).unwrap(), None);
    }

    #[test]
    fn test_empty_description_gets_placeholder() {
        let row = attribute_row("hidden", "Global attribute", "");

        let attr = attribute_record(&row, LINK).unwrap().unwrap();
        assert_eq!(attr.desc, MISSING_DESC);
    }

    #[test]
    fn test_description_whitespace_is_collapsed() {
        assert_eq!(normalize_desc("a  double  space"), "a double space");
        assert_eq!(normalize_desc("a    quad    run"), "a quad run");
    }

    #[test]
    fn test_short_attribute_row_is_parse_error() {
        let row = vec![cell("href"), cell("Global attribute")];
        assert!(matches!(
            attribute_record(&row, LINK),
            Err(Error::Parse(_))
        ));
    }
}
