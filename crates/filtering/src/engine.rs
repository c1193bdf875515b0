//! The filter engine: `(Catalog, FilterCriteria) -> ordered subsequence`.
//!
//! Pure and side-effect free. A product is kept iff every facet predicate
//! holds; catalog order is preserved and nothing is re-ranked.

use stroyprice_catalog::{Catalog, Product};

use crate::criteria::FilterCriteria;

/// Evaluate `criteria` against every product of `catalog`, in catalog order.
///
/// O(n) in catalog size; selection membership is a hash lookup. An empty
/// result is a normal outcome, not an error.
pub fn evaluate<'c>(catalog: &'c Catalog, criteria: &FilterCriteria) -> Vec<&'c Product> {
    let predicate = Predicate::new(criteria);
    catalog.iter().filter(|product| predicate.matches(product)).collect()
}

/// Check a single product against `criteria`.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    Predicate::new(criteria).matches(product)
}

/// Criteria prepared for repeated matching (search needle folded once).
struct Predicate<'a> {
    criteria: &'a FilterCriteria,
    needle: Option<String>,
}

impl<'a> Predicate<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        let text = criteria.search_text();
        Self {
            criteria,
            needle: (!text.is_empty()).then(|| text.to_lowercase()),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.criteria.price_range().contains(product.price_min)
            && self.criteria.selected_categories().admits(&product.category)
            && self.criteria.selected_brands().admits(&product.brand)
            && (!self.criteria.in_stock_only() || product.in_stock)
            && product.rating >= self.criteria.min_rating()
    }

    fn matches_search(&self, product: &Product) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }
}
