use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::id::{OrderId, SellerAppId, VendorId};

/// Order lifecycle status.
///
/// Terminal states are `Fulfilled`, `Cancelled` and `Rejected`. Statuses the
/// client does not know about are preserved as `Other` so frequency counts
/// keep them as their own keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    PartiallyFulfilled,
    Fulfilled,
    Cancelled,
    Rejected,
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    /// Wire label, used as the key in status frequency counts.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::PartiallyFulfilled => "PARTIALLY_FULFILLED",
            OrderStatus::Fulfilled => "FULFILLED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Other(s) => s,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Fulfilled | OrderStatus::Cancelled | OrderStatus::Rejected
        )
    }

    /// Cancelled and rejected orders contribute nothing to revenue.
    pub fn counts_toward_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled | OrderStatus::Rejected)
    }
}

/// Dispatch priority assigned by the backend.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderPriority {
    Critical,
    High,
    Medium,
    Low,
}

/// One line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    #[serde(default)]
    pub requested_qty: i64,
    #[serde(default)]
    pub fulfilled_qty: Option<i64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

/// An order as returned by the orders endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub ondc_order_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub priority: Option<OrderPriority>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub vendor_id: Option<VendorId>,
    #[serde(default)]
    pub seller_app_id: Option<SellerAppId>,
    #[serde(default)]
    pub seller_app_name: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Creation time. Unparseable timestamps degrade to `None` rather than
    /// failing the whole payload; such orders are skipped by revenue bucketing.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/orders/{id}/reject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequest {
    pub reason: String,
}

/// Deserialize an optional timestamp, tolerating both RFC 3339 and the
/// zone-less `LocalDateTime` shape the backend emits. Anything else is `None`.
pub(crate) fn lenient_datetime<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(parse_datetime))
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Order {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_backend_order_shape() {
        let order = decode(
            r#"{
                "id": 11,
                "ondcOrderId": "ONDC-2026-0042",
                "status": "PENDING",
                "priority": "HIGH",
                "totalAmount": 1499.5,
                "customerName": "Asha",
                "items": [{"productName": "Rice 5kg", "requestedQty": 2}],
                "createdAt": "2026-08-20T09:30:00"
            }"#,
        );
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.priority, Some(OrderPriority::High));
        assert_eq!(order.items.len(), 1);
        assert!(order.created_at.is_some());
    }

    #[test]
    fn unknown_status_is_preserved() {
        let order = decode(
            r#"{"id": 1, "ondcOrderId": "X", "status": "ON_HOLD"}"#,
        );
        assert_eq!(order.status, OrderStatus::Other("ON_HOLD".into()));
        assert_eq!(order.status.label(), "ON_HOLD");
        assert!(!order.status.is_terminal());
    }

    #[test]
    fn unparseable_created_at_becomes_none() {
        let order = decode(
            r#"{"id": 1, "ondcOrderId": "X", "status": "PENDING", "createdAt": "not-a-date"}"#,
        );
        assert_eq!(order.created_at, None);
    }

    #[test]
    fn rfc3339_created_at_is_accepted_too() {
        let order = decode(
            r#"{"id": 1, "ondcOrderId": "X", "status": "PENDING", "createdAt": "2026-08-20T09:30:00Z"}"#,
        );
        assert!(order.created_at.is_some());
    }

    #[test]
    fn cancelled_and_rejected_are_excluded_from_revenue() {
        assert!(!OrderStatus::Cancelled.counts_toward_revenue());
        assert!(!OrderStatus::Rejected.counts_toward_revenue());
        assert!(OrderStatus::Pending.counts_toward_revenue());
        assert!(OrderStatus::Other("ON_HOLD".into()).counts_toward_revenue());
    }
}
