//! Prints the reference galaxy catalog, one description per line.
//!
//! Usage: cargo run -p galaxy
//!
//! Diagnostics go to stderr and are filtered with `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use galaxy::reference_catalog;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = reference_catalog().context("failed to build reference catalog")?;
    info!(galaxies = catalog.len(), "describing reference catalog");

    for entry in &catalog {
        println!("{}", entry);
    }

    Ok(())
}
