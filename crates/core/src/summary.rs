use serde::{Deserialize, Serialize};

use crate::id::VendorId;

/// Per-vendor dashboard counters from `GET /api/dashboard/summary/{vendorId}`.
///
/// Ephemeral: recomputed by the backend on every call, never cached beyond a
/// single dashboard load. Absent counters decode as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub vendor_id: Option<VendorId>,
    #[serde(default)]
    pub vendor_name: Option<String>,

    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
    #[serde(default)]
    pub accepted_orders: u64,
    #[serde(default)]
    pub fulfilled_orders: u64,
    #[serde(default)]
    pub cancelled_orders: u64,

    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub low_stock_items: u64,
    #[serde(default)]
    pub low_stock_alerts: Vec<LowStockAlert>,

    #[serde(default)]
    pub total_outlets: u64,
    #[serde(default)]
    pub active_outlets: u64,

    #[serde(default)]
    pub total_seller_apps: u64,
    #[serde(default)]
    pub healthy_seller_apps: u64,

    #[serde(default)]
    pub vendor_rating: f64,
}

/// One low-stock line in a dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockAlert {
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    #[serde(default)]
    pub outlet_name: String,
    #[serde(default)]
    pub available_stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_counters_decode_as_zero() {
        let summary: DashboardSummary =
            serde_json::from_str(r#"{"vendorId": 1, "totalOrders": 7}"#).unwrap();
        assert_eq!(summary.total_orders, 7);
        assert_eq!(summary.pending_orders, 0);
        assert_eq!(summary.vendor_rating, 0.0);
        assert!(summary.low_stock_alerts.is_empty());
    }

    #[test]
    fn alerts_decode_from_camel_case() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{
                "lowStockAlerts": [
                    {"productName": "Rice 5kg", "productSku": "RCE-5", "outletName": "Indiranagar", "availableStock": 3}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(summary.low_stock_alerts.len(), 1);
        assert_eq!(summary.low_stock_alerts[0].available_stock, 3);
    }
}
