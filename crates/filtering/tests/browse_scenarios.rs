use stroyprice_catalog::fixtures::sample_catalog;
use stroyprice_catalog::{Catalog, Product};
use stroyprice_core::ProductId;
use stroyprice_filtering::{BrowseSession, FilterConfig, RatingLadder, count_by_category, evaluate};

const CEMENT: ProductId = ProductId::new(1);

fn shows(session: &BrowseSession, id: ProductId) -> bool {
    session.view().product_ids.contains(&id)
}

#[test]
fn cement_walkthrough() {
    let mut session = BrowseSession::new(sample_catalog());
    assert!(shows(&session, CEMENT));

    session.set_in_stock_only(true);
    assert!(shows(&session, CEMENT));

    // A different category with nothing else selected hides cement.
    session.toggle_category("Кирпич");
    assert!(!shows(&session, CEMENT));
    assert_eq!(session.view().product_ids, vec![ProductId::new(2), ProductId::new(8)]);

    // Toggling it back off restores the wildcard.
    session.toggle_category("Кирпич");
    assert!(session.criteria().selected_categories().is_empty());
    assert!(shows(&session, CEMENT));
}

#[test]
fn rating_boundary_is_inclusive() {
    let catalog = Catalog::new(vec![
        Product::new(1, "Грунтовка 10л", "Краски", "Ceresit").with_prices(700, 900).with_rating(4.0),
        Product::new(2, "Шпаклёвка 20кг", "Краски", "Ceresit").with_prices(500, 650).with_rating(3.0),
    ])
    .unwrap();

    let mut session = BrowseSession::new(catalog);
    session.set_min_rating(4.0);
    assert_eq!(session.view().product_ids, vec![ProductId::new(1)]);
}

#[test]
fn facet_counts_survive_every_mutation() {
    let catalog = sample_catalog();
    let baseline = count_by_category(&catalog);
    let mut session = BrowseSession::new(catalog.clone());

    session.set_search_text("цемент");
    session.toggle_category("Цемент");
    session.toggle_brand("Holcim");
    session.set_price_range(1000, 0);
    session.set_in_stock_only(true);
    session.select_min_rating(4.5);

    assert!(session.view().is_empty());
    assert_eq!(count_by_category(&catalog), baseline);
    for option in &session.view().categories {
        assert_eq!(option.count, baseline.get(option.label.as_str()));
    }
}

#[test]
fn reset_restores_full_catalog_order() {
    let catalog = sample_catalog();
    let mut session = BrowseSession::new(catalog.clone());
    session.toggle_brand("Tikkurila");
    session.set_price_range(2000, 3000);

    session.reset();

    let all: Vec<&Product> = catalog.iter().collect();
    assert_eq!(session.visible_products(), all);
    assert_eq!(evaluate(&catalog, session.criteria()), all);
}

#[test]
fn criteria_snapshot_round_trips_through_json() {
    let mut session = BrowseSession::new(sample_catalog());
    session.toggle_category("Инструменты");
    session.set_price_range(100, 9000);
    let before = session.view().clone();

    let json = serde_json::to_string(session.criteria()).unwrap();
    session.reset();
    session.replace_criteria(serde_json::from_str(&json).unwrap());

    assert_eq!(session.view(), &before);
    assert_eq!(session.view().product_ids, vec![ProductId::new(4), ProductId::new(9)]);
}

#[test]
fn configured_ladder_drives_rating_options() {
    let config = FilterConfig {
        rating_ladder: RatingLadder::new([4.0, 4.8]),
    };
    let mut session = BrowseSession::with_config(sample_catalog(), config);
    session.select_min_rating(4.8);

    let ratings: Vec<(f64, usize, bool)> = session
        .view()
        .ratings
        .iter()
        .map(|o| (o.threshold, o.count, o.selected))
        .collect();
    assert_eq!(ratings, vec![(4.0, 7, false), (4.8, 1, true)]);
    assert_eq!(session.view().matched, 1);
}

#[test]
fn restored_snapshot_with_off_scale_rating_is_clamped() {
    let mut session = BrowseSession::new(sample_catalog());

    session.replace_criteria(serde_json::from_str(r#"{"minRating":-3.0}"#).unwrap());
    assert!(session.criteria().is_default());
    assert_eq!(session.view().matched, 10);
    assert_eq!(session.view().active_filters, 0);

    session.replace_criteria(serde_json::from_str(r#"{"minRating":9.0}"#).unwrap());
    assert_eq!(session.criteria().min_rating(), 5.0);
    assert_eq!(session.view().ratings.iter().filter(|o| o.selected).count(), 0);
}
