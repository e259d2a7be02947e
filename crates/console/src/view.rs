//! Pure assembly of the dashboard view from fetched data.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use vendash_core::{DashboardSummary, InventoryRecord, Notice, Order, Vendor};
use vendash_dashboard::{
    AggregateSummary, RevenueBucket, bucket_revenue_by_day, build_aggregate_summary,
    count_by_status,
};

/// Revenue chart window.
pub const REVENUE_WINDOW_DAYS: u32 = 7;

/// Available stock below which a record produces a notification.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Everything the dashboard screen shows, derived in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub summary: AggregateSummary,
    pub status_counts: BTreeMap<String, u64>,
    pub revenue: Vec<RevenueBucket>,
    /// All vendors' inventory, merged.
    pub inventory: Vec<InventoryRecord>,
    pub orders: Vec<Order>,
}

/// Assemble the dashboard view from one load's fetched data.
///
/// `summaries` and `inventories` align positionally with `vendors`. Pure:
/// "today" is a parameter, not a clock read.
pub fn build_dashboard_view(
    vendors: &[Vendor],
    summaries: &[DashboardSummary],
    inventories: Vec<Vec<InventoryRecord>>,
    orders: Vec<Order>,
    today: NaiveDate,
) -> DashboardView {
    let summary = build_aggregate_summary(vendors, summaries);
    let status_counts = count_by_status(&orders);
    let revenue = bucket_revenue_by_day(&orders, REVENUE_WINDOW_DAYS, today);
    let inventory: Vec<InventoryRecord> = inventories.into_iter().flatten().collect();

    DashboardView {
        summary,
        status_counts,
        revenue,
        inventory,
        orders,
    }
}

/// Low-stock notifications for the current inventory cache.
pub fn low_stock_notices(items: &[InventoryRecord]) -> Vec<Notice> {
    items
        .iter()
        .filter(|item| item.available_stock < LOW_STOCK_THRESHOLD)
        .map(|item| {
            Notice::info(format!(
                "Low stock: {} is running low ({} remaining) at {}",
                item.product_name, item.available_stock, item.outlet_name
            ))
        })
        .collect()
}
