//! Merging per-vendor summaries into one dashboard-level aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use vendash_core::{DashboardSummary, LowStockAlert, Order, Vendor};

/// Element-wise sum of every vendor's [`DashboardSummary`], plus derived
/// fields. Recomputed on every dashboard load, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// De-duplicated vendor names, comma-joined, in input order.
    pub vendor_name: String,

    pub total_orders: u64,
    pub pending_orders: u64,
    pub accepted_orders: u64,
    pub fulfilled_orders: u64,
    pub cancelled_orders: u64,

    pub total_products: u64,
    pub low_stock_items: u64,
    pub low_stock_alerts: Vec<LowStockAlert>,

    pub total_outlets: u64,
    pub active_outlets: u64,

    pub total_seller_apps: u64,
    pub healthy_seller_apps: u64,

    /// Mean of per-vendor ratings; 0 when there are no vendors.
    pub vendor_rating: f64,

    /// `round((accepted + fulfilled) / total * 100, 2dp)`; 0 when there are
    /// no orders.
    pub fulfillment_rate: f64,
}

/// Merge per-vendor summaries into one aggregate.
///
/// `summaries` aligns positionally with `vendors`. Pure function: same
/// inputs, same output, no side effects.
pub fn build_aggregate_summary(
    vendors: &[Vendor],
    summaries: &[DashboardSummary],
) -> AggregateSummary {
    let mut agg = AggregateSummary::default();

    let mut names: Vec<&str> = Vec::new();
    for vendor in vendors {
        if !names.contains(&vendor.name.as_str()) {
            names.push(&vendor.name);
        }
    }
    agg.vendor_name = names.join(", ");

    let mut rating_sum = 0.0;
    for summary in summaries {
        agg.total_orders += summary.total_orders;
        agg.pending_orders += summary.pending_orders;
        agg.accepted_orders += summary.accepted_orders;
        agg.fulfilled_orders += summary.fulfilled_orders;
        agg.cancelled_orders += summary.cancelled_orders;
        agg.total_products += summary.total_products;
        agg.low_stock_items += summary.low_stock_items;
        agg.low_stock_alerts
            .extend(summary.low_stock_alerts.iter().cloned());
        agg.total_outlets += summary.total_outlets;
        agg.active_outlets += summary.active_outlets;
        agg.total_seller_apps += summary.total_seller_apps;
        agg.healthy_seller_apps += summary.healthy_seller_apps;
        rating_sum += summary.vendor_rating;
    }

    if !vendors.is_empty() {
        agg.vendor_rating = rating_sum / vendors.len() as f64;
    }
    agg.fulfillment_rate =
        fulfillment_rate(agg.accepted_orders, agg.fulfilled_orders, agg.total_orders);

    agg
}

/// Share of orders accepted or fulfilled, as a percentage rounded to two
/// decimal places. Zero when there are no orders.
pub fn fulfillment_rate(accepted: u64, fulfilled: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((accepted + fulfilled) as f64 / total as f64 * 10_000.0).round() / 100.0
}

/// Frequency count of orders by status label.
///
/// Unknown statuses are preserved as their own keys.
pub fn count_by_status(orders: &[Order]) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.status.label().to_string()).or_insert(0) += 1;
    }
    counts
}
