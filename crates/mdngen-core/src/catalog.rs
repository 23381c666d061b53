//! Scraping of reference catalog pages into tabular rows.
//!
//! A catalog page carries one or more `<table>` elements. Each data row
//! becomes a sequence of [`Cell`]s pairing the cell's collapsed text with
//! the target of its first inline anchor, which is how the reference
//! catalogs attach documentation links to names.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// One table cell: visible text plus the href of its first anchor, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell text with all whitespace runs collapsed to single spaces.
    pub text: String,
    /// Href of the first `<a>` inside the cell.
    pub link: Option<String>,
}

/// A data row of a reference table.
pub type Row = Vec<Cell>;

/// One scraped reference table, header rows excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Data rows in document order.
    pub rows: Vec<Row>,
}

#[allow(clippy::expect_used)]
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector is statically valid")
}

/// Parses every table on a catalog page, in document order.
///
/// Returns an error when the page contains no tables at all, which means
/// the catalog changed shape and the scraping rules no longer apply.
pub fn parse_tables(html: &str) -> Result<Vec<Table>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let row_sel = selector("tr");
    let cell_sel = selector("td");

    let tables: Vec<Table> = document
        .select(&table_sel)
        .map(|table| Table {
            rows: table
                .select(&row_sel)
                .map(|row| row.select(&cell_sel).map(parse_cell).collect::<Row>())
                // Header rows carry no <td> cells.
                .filter(|cells| !cells.is_empty())
                .collect(),
        })
        .collect();

    if tables.is_empty() {
        return Err(Error::Parse("catalog page contains no tables".to_string()));
    }

    Ok(tables)
}

fn parse_cell(cell: ElementRef<'_>) -> Cell {
    let anchor_sel = selector("a[href]");
    let link = cell
        .select(&anchor_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    Cell {
        text: collapse_text(cell),
        link,
    }
}

/// Joins a cell's text nodes and collapses every whitespace run to one space.
fn collapse_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
