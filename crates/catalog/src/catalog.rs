//! Immutable, validated product catalog.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use stroyprice_core::{DomainError, DomainResult, ProductId};

use crate::product::{Brand, Category, Product};

/// Ordered, read-only collection of products.
///
/// Cloning is cheap (the product slice and id index are shared), so a single
/// catalog can back any number of browse sessions. Product order is the order
/// the catalog was built with and is what filtered results preserve.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    index: Arc<HashMap<ProductId, usize>>,
}

impl Catalog {
    /// Validate `products` and freeze them into a catalog.
    ///
    /// Fails on the first invalid product or on a repeated id.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id, position).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }

        tracing::info!(products = products.len(), "catalog loaded");

        Ok(Self {
            products: products.into(),
            index: Arc::new(index),
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            index: Arc::new(HashMap::new()),
        }
    }

    /// Parse a JSON array of products (camelCase fields) and validate it.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog json: {e}")))?;
        Self::new(products)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&Category> {
        distinct(self.products.iter().map(|p| &p.category))
    }

    /// Distinct brands in order of first appearance.
    pub fn brands(&self) -> Vec<&Brand> {
        distinct(self.products.iter().map(|p| &p.brand))
    }

    /// `(lowest price_min, highest price_max)` across the catalog, for seeding
    /// a price range control. `None` for an empty catalog.
    pub fn price_bounds(&self) -> Option<(u64, u64)> {
        let low = self.products.iter().map(|p| p.price_min).min()?;
        let high = self.products.iter().map(|p| p.price_max).max()?;
        Some((low, high))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.products == other.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn distinct<'a, T>(labels: impl Iterator<Item = &'a T>) -> Vec<&'a T>
where
    T: Eq + core::hash::Hash + 'a,
{
    let mut seen = HashSet::new();
    labels.filter(|label| seen.insert(*label)).collect()
}
