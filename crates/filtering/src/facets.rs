//! Facet aggregation: per-value counts used to annotate selectable options.
//!
//! Counts describe the composition of the **whole catalog**. They are never
//! derived from the filtered view, so choosing a filter narrows the product
//! list without shrinking the badges next to each option.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use stroyprice_catalog::{Brand, Catalog, Category};

use crate::config::RatingLadder;
use crate::criteria::FilterCriteria;
use crate::selection::Selection;

/// One facet value and how many catalog products carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount<L> {
    pub label: L,
    pub count: usize,
}

/// Counts for one facet, ordered by first appearance in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetCounts<L> {
    entries: Vec<FacetCount<L>>,
}

impl<L> FacetCounts<L>
where
    L: Eq + Hash + Clone,
{
    fn tally<'a>(labels: impl Iterator<Item = &'a L>) -> Self
    where
        L: 'a,
    {
        let mut positions: HashMap<&L, usize> = HashMap::new();
        let mut entries: Vec<FacetCount<L>> = Vec::new();

        for label in labels {
            match positions.get(label) {
                Some(&position) => entries[position].count += 1,
                None => {
                    positions.insert(label, entries.len());
                    entries.push(FacetCount {
                        label: label.clone(),
                        count: 1,
                    });
                }
            }
        }

        Self { entries }
    }

    /// Count for `label`; zero for labels no product carries.
    pub fn get<Q>(&self, label: &Q) -> usize
    where
        L: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .find(|entry| Borrow::<Q>::borrow(&entry.label) == label)
            .map_or(0, |entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, FacetCount<L>> {
        self.entries.iter()
    }

    /// Sum of all counts (equals the catalog size).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl<'a, L> IntoIterator for &'a FacetCounts<L> {
    type Item = &'a FacetCount<L>;
    type IntoIter = core::slice::Iter<'a, FacetCount<L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub fn count_by_category(catalog: &Catalog) -> FacetCounts<Category> {
    FacetCounts::tally(catalog.iter().map(|p| &p.category))
}

pub fn count_by_brand(catalog: &Catalog) -> FacetCounts<Brand> {
    FacetCounts::tally(catalog.iter().map(|p| &p.brand))
}

/// A selectable facet value as rendered: label, catalog-wide badge count and
/// checkbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption<L> {
    pub label: L,
    pub count: usize,
    pub selected: bool,
}

pub fn category_options(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<FacetOption<Category>> {
    options(count_by_category(catalog), criteria.selected_categories())
}

pub fn brand_options(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<FacetOption<Brand>> {
    options(count_by_brand(catalog), criteria.selected_brands())
}

// Selected labels absent from the catalog are appended (count 0, sorted) so
// they stay visible and can be toggled off again.
fn options<L>(counts: FacetCounts<L>, selection: &Selection<L>) -> Vec<FacetOption<L>>
where
    L: Eq + Hash + Clone + Ord,
{
    let mut orphans: Vec<&L> = selection
        .iter()
        .filter(|label| !counts.iter().any(|entry| &entry.label == *label))
        .collect();
    orphans.sort();

    let orphans: Vec<FacetOption<L>> = orphans
        .into_iter()
        .map(|label| FacetOption {
            label: label.clone(),
            count: 0,
            selected: true,
        })
        .collect();

    counts
        .entries
        .into_iter()
        .map(|entry| FacetOption {
            selected: selection.contains(&entry.label),
            label: entry.label,
            count: entry.count,
        })
        .chain(orphans)
        .collect()
}

/// One rung of the minimum-rating ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingOption {
    pub threshold: f64,
    /// Catalog products rated at or above `threshold`.
    pub count: usize,
    pub selected: bool,
}

pub fn rating_options(
    catalog: &Catalog,
    criteria: &FilterCriteria,
    ladder: &RatingLadder,
) -> Vec<RatingOption> {
    ladder
        .thresholds()
        .iter()
        .map(|&threshold| RatingOption {
            threshold,
            count: catalog.iter().filter(|p| p.rating >= threshold).count(),
            selected: criteria.min_rating() == threshold,
        })
        .collect()
}
