//! Derived read model handed to the presentation layer after each recompute.

use serde::{Deserialize, Serialize};

use stroyprice_catalog::{Brand, Catalog, Category};
use stroyprice_core::ProductId;

use crate::config::FilterConfig;
use crate::criteria::FilterCriteria;
use crate::engine::evaluate;
use crate::facets::{FacetOption, RatingOption, brand_options, category_options, rating_options};

/// Everything the listing needs to render one state of the filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// Matching products, in catalog order.
    pub product_ids: Vec<ProductId>,
    pub matched: usize,
    pub total: usize,
    pub categories: Vec<FacetOption<Category>>,
    pub brands: Vec<FacetOption<Brand>>,
    pub ratings: Vec<RatingOption>,
    /// Facets currently narrowing the result ("Фильтры (n)").
    pub active_filters: usize,
    /// Catalog-wide price span for the range control.
    pub price_bounds: Option<(u64, u64)>,
}

impl CatalogView {
    pub fn compute(catalog: &Catalog, criteria: &FilterCriteria, config: &FilterConfig) -> Self {
        let product_ids: Vec<ProductId> = evaluate(catalog, criteria)
            .into_iter()
            .map(|product| product.id)
            .collect();

        Self {
            matched: product_ids.len(),
            product_ids,
            total: catalog.len(),
            categories: category_options(catalog, criteria),
            brands: brand_options(catalog, criteria),
            ratings: rating_options(catalog, criteria, &config.rating_ladder),
            active_filters: criteria.active_facet_count(),
            price_bounds: catalog.price_bounds(),
        }
    }

    /// `true` when nothing matches; render an explicit "no matches" state.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }
}
