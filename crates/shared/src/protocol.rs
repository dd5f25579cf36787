use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ItemId, OrderId, OrderStatus};

/// One stocked item as reported by `GET /api/inventory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemSummary {
    pub item_id: ItemId,
    pub sku: String,
    pub name: String,
    pub on_hand: u32,
    pub reserved: u32,
    pub reorder_point: u32,
    pub bin_location: String,
}

impl InventoryItemSummary {
    /// Units that can still be promised to new orders.
    pub fn available(&self) -> u32 {
        self.on_hand.saturating_sub(self.reserved)
    }

    pub fn is_low_stock(&self) -> bool {
        self.on_hand <= self.reorder_point
    }
}

/// One order as reported by `GET /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub reference: String,
    pub customer: String,
    pub status: OrderStatus,
    pub line_count: u32,
    pub total_cents: i64,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMover {
    pub sku: String,
    pub name: String,
    pub units_moved: u32,
}

/// Aggregates from `GET /api/analytics/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub orders_today: u32,
    pub open_orders: u32,
    pub low_stock_count: u32,
    pub inventory_units: u64,
    #[serde(default)]
    pub top_movers: Vec<TopMover>,
}
