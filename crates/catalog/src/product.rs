use serde::{Deserialize, Serialize};

use stroyprice_core::{DomainError, DomainResult, ProductId};

/// Lowest rating a product can carry.
pub const RATING_MIN: f64 = 0.0;
/// Highest rating a product can carry.
pub const RATING_MAX: f64 = 5.0;

macro_rules! impl_label_newtype {
    ($t:ident, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Labels are open-ended: the filter layer may track labels that no
        /// catalog product carries.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl core::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_label_newtype!(Category, "Product category label (e.g. `Цемент`, `Кирпич`).");
impl_label_newtype!(Brand, "Brand / manufacturer label.");

/// A priced catalog product.
///
/// Products are immutable once placed in a [`crate::Catalog`]; the catalog only
/// ever hands out shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub brand: Brand,
    /// Lowest offer across suppliers, whole rubles.
    pub price_min: u64,
    /// Highest offer across suppliers, whole rubles.
    pub price_max: u64,
    /// Number of suppliers quoting the product (informational).
    #[serde(default)]
    pub supplier_count: u32,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Start a product with a single price point; refine with the `with_*` helpers.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<Category>,
        brand: impl Into<Brand>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price_min: 0,
            price_max: 0,
            supplier_count: 0,
            in_stock: false,
            rating: RATING_MIN,
        }
    }

    pub fn with_prices(mut self, price_min: u64, price_max: u64) -> Self {
        self.price_min = price_min;
        self.price_max = price_max;
        self
    }

    pub fn with_suppliers(mut self, supplier_count: u32) -> Self {
        self.supplier_count = supplier_count;
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Difference between the most and least expensive offer.
    pub fn price_spread(&self) -> u64 {
        self.price_max.saturating_sub(self.price_min)
    }

    /// Check the per-product invariants a catalog relies on.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }

        if self.price_min > self.price_max {
            return Err(DomainError::invariant(format!(
                "product {}: price_min ({}) exceeds price_max ({})",
                self.id, self.price_min, self.price_max
            )));
        }

        if !self.rating.is_finite() || !(RATING_MIN..=RATING_MAX).contains(&self.rating) {
            return Err(DomainError::validation(format!(
                "product {}: rating {} outside [{RATING_MIN}, {RATING_MAX}]",
                self.id, self.rating
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cement() -> Product {
        Product::new(1, "Цемент М500 50кг", "Цемент", "Евроцемент")
            .with_prices(320, 450)
            .with_suppliers(12)
            .with_stock(true)
            .with_rating(4.5)
    }

    #[test]
    fn valid_product_passes_validation() {
        assert_eq!(cement().validate(), Ok(()));
    }

    #[test]
    fn rejects_blank_name() {
        let mut product = cement();
        product.name = "   ".to_string();
        match product.validate().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_inverted_prices() {
        let product = cement().with_prices(500, 450);
        match product.validate().unwrap_err() {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("price_min")),
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
    }

    #[test]
    fn equal_prices_are_allowed() {
        let product = cement().with_prices(450, 450);
        assert!(product.validate().is_ok());
        assert_eq!(product.price_spread(), 0);
    }

    #[test]
    fn rejects_out_of_range_and_nan_ratings() {
        for rating in [-0.1, 5.01, f64::NAN, f64::INFINITY] {
            let err = cement().with_rating(rating).validate().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "rating {rating}");
        }
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert!(cement().with_rating(RATING_MIN).validate().is_ok());
        assert!(cement().with_rating(RATING_MAX).validate().is_ok());
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": 4,
            "name": "Перфоратор Makita HR2470",
            "category": "Инструменты",
            "brand": "Makita",
            "priceMin": 8500,
            "priceMax": 12000,
            "supplierCount": 6,
            "inStock": true,
            "rating": 4.8
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.category.as_str(), "Инструменты");
        assert_eq!(product.price_spread(), 3500);
        assert!(product.in_stock);
    }

    #[test]
    fn labels_borrow_as_str() {
        use std::collections::HashSet;

        let set: HashSet<Category> = [Category::from("Цемент")].into_iter().collect();
        assert!(set.contains("Цемент"));
        assert!(!set.contains("Кирпич"));
    }
}
