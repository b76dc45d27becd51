use serde::Deserialize;
use serde_json::Value;

/// A single order as returned by ShipStation. The schema is not ours, so the
/// record is carried through untouched.
pub type Order = Value;

/// Orders accumulated across pages, in arrival order.
pub type OrderBatch = Vec<Order>;

/// Body of `GET /orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersPage {
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
}

impl OrdersPage {
    /// Orders on this page; an absent or null `orders` field counts as empty.
    pub fn into_orders(self) -> Vec<Order> {
        self.orders.unwrap_or_default()
    }
}
