//! Deterministic sample data for running the console without a live
//! warehouse gateway.

use chrono::{Duration, Utc};
use shared::domain::{ItemId, OrderId, OrderStatus};
use shared::protocol::{AnalyticsSnapshot, InventoryItemSummary, OrderSummary, TopMover};

pub fn inventory() -> Vec<InventoryItemSummary> {
    vec![
        item(101, "PAL-4420", "Pallet jack", 6, 1, 2, "A-01-3"),
        item(102, "WRP-0500", "Stretch wrap 500mm", 48, 12, 60, "A-02-1"),
        item(103, "BOX-S120", "Shipping box small", 320, 80, 150, "B-04-2"),
        item(104, "BOX-M240", "Shipping box medium", 210, 95, 150, "B-04-3"),
        item(105, "BOX-L360", "Shipping box large", 90, 40, 120, "B-04-4"),
        item(106, "LBL-ZEB4", "Zebra label roll 4in", 75, 10, 25, "C-01-1"),
        item(107, "TAP-PK48", "Packing tape 48mm", 132, 0, 50, "C-01-2"),
        item(108, "GLV-NTR9", "Nitrile gloves L", 58, 6, 40, "C-02-5"),
        item(109, "SCN-HW65", "Handheld scanner", 11, 3, 4, "D-01-1"),
        item(110, "CHG-DK04", "Scanner charging dock", 3, 0, 5, "D-01-2"),
    ]
}

/// Case-insensitive filter over SKU, name, and bin location, mirroring
/// the gateway's `search` query parameter.
pub fn inventory_matching(search: Option<&str>) -> Vec<InventoryItemSummary> {
    let Some(term) = search.map(str::trim).filter(|term| !term.is_empty()) else {
        return inventory();
    };
    let needle = term.to_lowercase();
    inventory()
        .into_iter()
        .filter(|item| {
            item.sku.to_lowercase().contains(&needle)
                || item.name.to_lowercase().contains(&needle)
                || item.bin_location.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn orders() -> Vec<OrderSummary> {
    vec![
        order(9001, "SO-2481", "Northside Hardware", OrderStatus::Picking, 4, 18_450, 120),
        order(9002, "SO-2482", "Harbor Foods", OrderStatus::Pending, 9, 96_200, 180),
        order(9003, "SO-2483", "Atlas Electrical", OrderStatus::Packed, 2, 12_960, 300),
        order(9004, "SO-2484", "Greenline Nursery", OrderStatus::Shipped, 6, 44_810, 480),
        order(9005, "SO-2485", "Carver & Sons", OrderStatus::Pending, 1, 7_500, 45),
        order(9006, "SO-2486", "Westgate Clinic", OrderStatus::Cancelled, 3, 21_300, 1_560),
        order(9007, "SO-2487", "Pioneer Auto Parts", OrderStatus::Picking, 5, 38_240, 30),
    ]
}

/// Snapshot derived from the sample catalog so the three views agree
/// with each other offline.
pub fn analytics() -> AnalyticsSnapshot {
    let inventory = inventory();
    let orders = orders();
    let day_ago = Utc::now() - Duration::hours(24);
    AnalyticsSnapshot {
        orders_today: orders.iter().filter(|order| order.placed_at >= day_ago).count() as u32,
        open_orders: orders.iter().filter(|order| order.status.is_open()).count() as u32,
        low_stock_count: inventory.iter().filter(|item| item.is_low_stock()).count() as u32,
        inventory_units: inventory.iter().map(|item| u64::from(item.on_hand)).sum(),
        top_movers: vec![
            mover("BOX-M240", "Shipping box medium", 212),
            mover("WRP-0500", "Stretch wrap 500mm", 140),
            mover("TAP-PK48", "Packing tape 48mm", 96),
        ],
    }
}

fn item(
    id: i64,
    sku: &str,
    name: &str,
    on_hand: u32,
    reserved: u32,
    reorder_point: u32,
    bin_location: &str,
) -> InventoryItemSummary {
    InventoryItemSummary {
        item_id: ItemId(id),
        sku: sku.to_string(),
        name: name.to_string(),
        on_hand,
        reserved,
        reorder_point,
        bin_location: bin_location.to_string(),
    }
}

fn order(
    id: i64,
    reference: &str,
    customer: &str,
    status: OrderStatus,
    line_count: u32,
    total_cents: i64,
    placed_minutes_ago: i64,
) -> OrderSummary {
    OrderSummary {
        order_id: OrderId(id),
        reference: reference.to_string(),
        customer: customer.to_string(),
        status,
        line_count,
        total_cents,
        placed_at: Utc::now() - Duration::minutes(placed_minutes_ago),
    }
}

fn mover(sku: &str, name: &str, units_moved: u32) -> TopMover {
    TopMover {
        sku: sku.to_string(),
        name: name.to_string(),
        units_moved,
    }
}

#[cfg(test)]
#[path = "tests/sample_tests.rs"]
mod tests;
