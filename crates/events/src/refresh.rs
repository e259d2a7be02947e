use serde::{Deserialize, Serialize};

/// Invalidation notice published after a mutation.
///
/// Each variant names a view whose backing cache is now stale. Subscribers
/// re-fetch; the event itself carries no data, the backend stays the source
/// of truth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshEvent {
    DashboardInvalidated,
    OrdersInvalidated,
    InventoryInvalidated,
    SellerAppsInvalidated,
}

impl RefreshEvent {
    /// Stable name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshEvent::DashboardInvalidated => "refresh.dashboard",
            RefreshEvent::OrdersInvalidated => "refresh.orders",
            RefreshEvent::InventoryInvalidated => "refresh.inventory",
            RefreshEvent::SellerAppsInvalidated => "refresh.seller_apps",
        }
    }
}
