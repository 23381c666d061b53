//! Sequential orchestration of the scrape, extract, cross-link pipeline.
//!
//! Fetch completes before extraction, extraction before cross-linking,
//! cross-linking before rendering. Every documentation link check is one
//! blocking round trip awaited in row order; run frequency is low enough
//! that batching would buy nothing.

use crate::catalog::{self, Table};
use crate::config::Config;
use crate::extract;
use crate::fetcher::Fetcher;
use crate::types::{AttributeMap, Catalogs, ElementMap};
use crate::{crosslink, Result};
use tracing::{debug, info};

/// Drives one full generation run against a documentation origin.
pub struct Generator {
    config: Config,
    fetcher: Fetcher,
}

impl Generator {
    /// Creates a generator for the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Scrapes both catalogs and returns the cross-linked, frozen dataset.
    pub async fn scrape(&self) -> Result<Catalogs> {
        let elements = self.scrape_elements().await?;
        let attributes = self.scrape_attributes().await?;

        let mut catalogs = Catalogs {
            elements,
            attributes,
        };
        crosslink::apply(&mut catalogs)?;

        info!(
            "Cross-linked {} elements and {} attributes",
            catalogs.elements.len(),
            catalogs.attributes.len()
        );

        Ok(catalogs)
    }

    async fn scrape_elements(&self) -> Result<ElementMap> {
        let url = self.config.elements_url();
        info!("Scraping element catalog from {}", url);

        let page = self.fetcher.fetch_page(&url).await?;
        let tables = catalog::parse_tables(&page)?;

        // The catalog keeps deprecated elements in its final table.
        let Some((deprecated_table, current_tables)) = tables.split_last() else {
            unreachable!("parse_tables rejects pages without tables");
        };

        let mut elements = ElementMap::default();
        for table in current_tables {
            self.extract_element_table(table, false, &mut elements)
                .await?;
        }
        self.extract_element_table(deprecated_table, true, &mut elements)
            .await?;

        debug!("Extracted {} elements", elements.len());
        Ok(elements)
    }

    async fn extract_element_table(
        &self,
        table: &Table,
        deprecated: bool,
        elements: &mut ElementMap,
    ) -> Result<()> {
        for row in &table.rows {
            let route = row.first().and_then(|cell| cell.link.as_deref());
            let mdn_link = self.fetcher.resolve_doc_link(route).await;

            for element in extract::element_records(row, deprecated, &mdn_link)? {
                elements.insert(element.name.clone(), element);
            }
        }

        Ok(())
    }

    async fn scrape_attributes(&self) -> Result<AttributeMap> {
        let url = self.config.attributes_url();
        info!("Scraping attribute catalog from {}", url);

        let page = self.fetcher.fetch_page(&url).await?;
        let tables = catalog::parse_tables(&page)?;

        // Only the first table on the attribute page is the reference list.
        let Some(reference_table) = tables.first() else {
            unreachable!("parse_tables rejects pages without tables");
        };

        let mut attributes = AttributeMap::default();
        for row in &reference_table.rows {
            let route = row.first().and_then(|cell| cell.link.as_deref());
            let mdn_link = self.fetcher.resolve_doc_link(route).await;

            if let Some(attribute) = extract::attribute_record(row, &mdn_link)? {
                attributes.insert(attribute.name.clone(), attribute);
            }
        }

        debug!("Extracted {} attributes", attributes.len());
        Ok(attributes)
    }
}
