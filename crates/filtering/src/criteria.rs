//! Filter criteria: the active facet selections of one browse session.
//!
//! Every mutator normalizes its input instead of rejecting it; criteria are
//! always in a state the engine can evaluate.

use serde::{Deserialize, Deserializer, Serialize};

use stroyprice_catalog::{Brand, Category, RATING_MAX, RATING_MIN};

use crate::selection::Selection;

/// Inclusive price interval in whole rubles. Always `low <= high`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u64, u64)", into = "(u64, u64)")]
pub struct PriceRange {
    low: u64,
    high: u64,
}

impl PriceRange {
    /// The unbounded range `(0, u64::MAX)`.
    pub const FULL: PriceRange = PriceRange {
        low: 0,
        high: u64::MAX,
    };

    /// Build a range; inverted bounds are swapped rather than rejected, since a
    /// two-thumb slider can transiently cross while being dragged.
    pub fn new(low: u64, high: u64) -> Self {
        Self {
            low: low.min(high),
            high: low.max(high),
        }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    pub fn contains(&self, price: u64) -> bool {
        self.low <= price && price <= self.high
    }

    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<(u64, u64)> for PriceRange {
    fn from((low, high): (u64, u64)) -> Self {
        Self::new(low, high)
    }
}

impl From<PriceRange> for (u64, u64) {
    fn from(range: PriceRange) -> Self {
        (range.low, range.high)
    }
}

/// Current combination of facet selections.
///
/// Defaults form the wildcard-all state: every product in a catalog matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    search_text: String,
    price_range: PriceRange,
    selected_categories: Selection<Category>,
    selected_brands: Selection<Brand>,
    in_stock_only: bool,
    #[serde(deserialize_with = "deserialize_min_rating")]
    min_rating: f64,
}

/// NaN becomes `0.0` (no filter); other values are clamped onto the rating scale.
fn normalize_rating(value: f64) -> f64 {
    if value.is_nan() {
        RATING_MIN
    } else {
        value.clamp(RATING_MIN, RATING_MAX)
    }
}

fn deserialize_min_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(normalize_rating)
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn selected_categories(&self) -> &Selection<Category> {
        &self.selected_categories
    }

    pub fn selected_brands(&self) -> &Selection<Brand> {
        &self.selected_brands
    }

    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn toggle_category(&mut self, label: impl Into<Category>) {
        self.selected_categories.toggle(label.into());
    }

    pub fn toggle_brand(&mut self, label: impl Into<Brand>) {
        self.selected_brands.toggle(label.into());
    }

    pub fn set_price_range(&mut self, low: u64, high: u64) {
        self.price_range = PriceRange::new(low, high);
    }

    pub fn set_in_stock_only(&mut self, flag: bool) {
        self.in_stock_only = flag;
    }

    /// Replace the minimum rating. NaN becomes `0.0` (no filter); other values
    /// are clamped onto the rating scale.
    pub fn set_min_rating(&mut self, value: f64) {
        self.min_rating = normalize_rating(value);
    }

    /// Single-select toggle over a rating ladder: picking the active threshold
    /// again clears the rating filter.
    pub fn select_min_rating(&mut self, value: f64) {
        let value = normalize_rating(value);
        if self.min_rating > RATING_MIN && self.min_rating == value {
            self.min_rating = RATING_MIN;
        } else {
            self.min_rating = value;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of facets currently narrowing the result.
    pub fn active_facet_count(&self) -> usize {
        [
            !self.search_text.is_empty(),
            !self.price_range.is_full(),
            !self.selected_categories.is_empty(),
            !self.selected_brands.is_empty(),
            self.in_stock_only,
            self.min_rating > RATING_MIN,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}
