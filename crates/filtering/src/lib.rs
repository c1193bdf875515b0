//! Faceted filtering over a construction-materials catalog.
//!
//! Control flow for one browse session:
//!
//! ```text
//! presentation → BrowseSession mutator → FilterCriteria
//!                                   └──→ recompute(): evaluate() + facets → CatalogView → subscribers
//! ```
//!
//! - [`evaluate`] is a pure, order-preserving filter; it never fails.
//! - Facet counts ([`count_by_category`], [`count_by_brand`]) are taken over the
//!   whole catalog, not the filtered view, so badges stay stable while browsing.
//! - An empty selection set is a wildcard: it admits every value.

pub mod config;
pub mod criteria;
pub mod engine;
pub mod facets;
pub mod selection;
pub mod session;
pub mod view;

pub use config::{FilterConfig, RatingLadder};
pub use criteria::{FilterCriteria, PriceRange};
pub use engine::{evaluate, matches};
pub use facets::{
    FacetCount, FacetCounts, FacetOption, RatingOption, brand_options, category_options,
    count_by_brand, count_by_category, rating_options,
};
pub use selection::Selection;
pub use session::{BrowseSession, Subscription};
pub use view::CatalogView;
