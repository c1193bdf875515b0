//! Demo collaborator: browses a catalog from the command line.
//!
//! ```text
//! stroyprice-browse [search text]
//! ```
//!
//! The catalog comes from the JSON file named by `STROYPRICE_CATALOG`, or the
//! built-in sample listing when unset. The resulting view is printed as JSON.

use anyhow::Context;

use stroyprice_catalog::Catalog;
use stroyprice_catalog::fixtures::sample_catalog;
use stroyprice_filtering::{BrowseSession, FilterConfig};

const CATALOG_ENV: &str = "STROYPRICE_CATALOG";

fn load_catalog() -> anyhow::Result<Catalog> {
    match std::env::var(CATALOG_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read catalog file {path}"))?;
            Catalog::from_json(&json).with_context(|| format!("invalid catalog in {path}"))
        }
        Err(_) => {
            tracing::info!("{CATALOG_ENV} not set; using sample catalog");
            Ok(sample_catalog())
        }
    }
}

fn main() -> anyhow::Result<()> {
    stroyprice_observability::init();

    let catalog = load_catalog()?;
    let mut session = BrowseSession::with_config(catalog, FilterConfig::from_env());

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !query.is_empty() {
        session.set_search_text(query);
    }

    if session.view().is_empty() {
        tracing::info!(search = session.criteria().search_text(), "no matches");
    }

    for product in session.visible_products() {
        tracing::info!(
            id = %product.id,
            name = %product.name,
            price_min = product.price_min,
            price_max = product.price_max,
            price_spread = product.price_spread(),
            suppliers = product.supplier_count,
            "match"
        );
    }

    let json = serde_json::to_string_pretty(session.view()).context("failed to render view")?;
    println!("{json}");

    Ok(())
}
