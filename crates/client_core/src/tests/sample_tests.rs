use super::*;

#[test]
fn blank_searches_return_the_whole_catalog() {
    assert_eq!(inventory_matching(None).len(), inventory().len());
    assert_eq!(inventory_matching(Some("")).len(), inventory().len());
    assert_eq!(inventory_matching(Some("   ")).len(), inventory().len());
}

#[test]
fn search_matches_sku_case_insensitively() {
    let hits = inventory_matching(Some("pal-44"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].sku, "PAL-4420");
}

#[test]
fn search_matches_names_and_bins() {
    let boxes = inventory_matching(Some("shipping box"));
    assert_eq!(boxes.len(), 3);

    let dock_aisle = inventory_matching(Some("d-01"));
    assert_eq!(dock_aisle.len(), 2);
}

#[test]
fn search_misses_return_empty() {
    assert!(inventory_matching(Some("no-such-sku")).is_empty());
}

#[test]
fn analytics_agrees_with_the_catalog() {
    let snapshot = analytics();
    let catalog = inventory();

    let low_stock = catalog.iter().filter(|item| item.is_low_stock()).count() as u32;
    let units: u64 = catalog.iter().map(|item| u64::from(item.on_hand)).sum();
    assert_eq!(snapshot.low_stock_count, low_stock);
    assert_eq!(snapshot.inventory_units, units);

    let open = orders()
        .iter()
        .filter(|order| order.status.is_open())
        .count() as u32;
    assert_eq!(snapshot.open_orders, open);
    assert!(snapshot.orders_today >= open);

    for mover in &snapshot.top_movers {
        assert!(
            catalog.iter().any(|item| item.sku == mover.sku),
            "top mover {} missing from catalog",
            mover.sku
        );
    }
}

#[test]
fn sample_orders_cover_open_and_closed_statuses() {
    let orders = orders();
    assert!(orders.iter().any(|order| order.status.is_open()));
    assert!(orders.iter().any(|order| !order.status.is_open()));
    assert!(orders.iter().all(|order| order.placed_at <= Utc::now()));
}
