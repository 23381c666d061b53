//! Generate command implementation.

use anyhow::{Context, Result};
use mdngen_core::{render, Config, Generator};
use std::io::Write;
use tracing::info;

use crate::cli::{Cli, OutputFormat};

/// Runs one full generation and writes the result in a single atomic step.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut config = cli
        .base_url
        .as_deref()
        .map_or_else(Config::default, Config::with_base_url);
    config.timeout = std::time::Duration::from_secs(cli.timeout);

    let generator = Generator::new(config).context("Failed to create generator")?;
    let catalogs = generator
        .scrape()
        .await
        .context("Failed to scrape the reference catalogs")?;

    let output = match cli.format {
        OutputFormat::Rust => render::render(&catalogs),
        OutputFormat::Json => render::render_json(&catalogs)?,
    };

    // The full document is assembled before the first byte is written.
    match &cli.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", output.len(), path.display());
        },
        None => {
            std::io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
        },
    }

    Ok(())
}
