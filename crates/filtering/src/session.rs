//! Browse session: one user's criteria over a shared catalog.
//!
//! Every mutator is followed by a synchronous [`BrowseSession::recompute`], so
//! the view always reflects the last applied criteria. Interested parties can
//! [`subscribe`](BrowseSession::subscribe) to receive each recomputed view.

use std::sync::mpsc::{self, Receiver, Sender};

use stroyprice_catalog::{Brand, Catalog, Category, Product};

use crate::config::FilterConfig;
use crate::criteria::FilterCriteria;
use crate::view::CatalogView;

/// Receiving end of a session's view notifications.
///
/// Views are delivered in recompute order. A subscription is meant to be
/// consumed by one reader.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain pending messages and keep only the newest.
    pub fn latest(&self) -> Option<M> {
        self.receiver.try_iter().last()
    }
}

/// Mutable filter state for one session plus its current derived view.
///
/// Access is exclusive (`&mut self`); the catalog itself is shared and never
/// mutated.
#[derive(Debug)]
pub struct BrowseSession {
    catalog: Catalog,
    config: FilterConfig,
    criteria: FilterCriteria,
    view: CatalogView,
    subscribers: Vec<Sender<CatalogView>>,
}

impl BrowseSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, FilterConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: FilterConfig) -> Self {
        let criteria = FilterCriteria::new();
        let view = CatalogView::compute(&catalog, &criteria, &config);
        Self {
            catalog,
            config,
            criteria,
            view,
            subscribers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Products of the current view, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.view
            .product_ids
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    /// Register for every future recomputed view.
    pub fn subscribe(&mut self) -> Subscription<CatalogView> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        Subscription::new(rx)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> &CatalogView {
        self.criteria.set_search_text(text);
        tracing::trace!(search = self.criteria.search_text(), "search text set");
        self.recompute()
    }

    pub fn toggle_category(&mut self, label: impl Into<Category>) -> &CatalogView {
        let label = label.into();
        tracing::trace!(category = %label, "category toggled");
        self.criteria.toggle_category(label);
        self.recompute()
    }

    pub fn toggle_brand(&mut self, label: impl Into<Brand>) -> &CatalogView {
        let label = label.into();
        tracing::trace!(brand = %label, "brand toggled");
        self.criteria.toggle_brand(label);
        self.recompute()
    }

    pub fn set_price_range(&mut self, low: u64, high: u64) -> &CatalogView {
        self.criteria.set_price_range(low, high);
        tracing::trace!(low, high, "price range set");
        self.recompute()
    }

    pub fn set_in_stock_only(&mut self, flag: bool) -> &CatalogView {
        self.criteria.set_in_stock_only(flag);
        tracing::trace!(in_stock_only = flag, "stock filter set");
        self.recompute()
    }

    pub fn set_min_rating(&mut self, value: f64) -> &CatalogView {
        self.criteria.set_min_rating(value);
        tracing::trace!(min_rating = self.criteria.min_rating(), "min rating set");
        self.recompute()
    }

    /// Rating-ladder click: selecting the active threshold clears it.
    pub fn select_min_rating(&mut self, value: f64) -> &CatalogView {
        self.criteria.select_min_rating(value);
        tracing::trace!(min_rating = self.criteria.min_rating(), "min rating selected");
        self.recompute()
    }

    /// Swap in a whole criteria value (e.g. a restored snapshot).
    pub fn replace_criteria(&mut self, criteria: FilterCriteria) -> &CatalogView {
        self.criteria = criteria;
        tracing::trace!("criteria replaced");
        self.recompute()
    }

    pub fn reset(&mut self) -> &CatalogView {
        self.criteria.reset();
        tracing::trace!("criteria reset");
        self.recompute()
    }

    /// Re-derive the view from the catalog and current criteria, then notify
    /// subscribers. Disconnected subscribers are dropped.
    pub fn recompute(&mut self) -> &CatalogView {
        self.view = CatalogView::compute(&self.catalog, &self.criteria, &self.config);

        tracing::debug!(
            matched = self.view.matched,
            total = self.view.total,
            active_filters = self.view.active_filters,
            "catalog view recomputed"
        );

        let view = &self.view;
        self.subscribers.retain(|tx| tx.send(view.clone()).is_ok());

        &self.view
    }
}
