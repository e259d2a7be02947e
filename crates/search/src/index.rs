//! Substring matching over fixed per-type haystacks.

use serde::{Deserialize, Serialize};

use vendash_core::{InventoryRecord, Order, SellerApp};

/// Shortest query that triggers a search at all.
pub const MIN_QUERY_LEN: usize = 2;

/// Most hits returned across all entity types combined.
pub const MAX_HITS: usize = 10;

/// Which collection a hit came from. Also the fixed precedence order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitKind {
    Order,
    Inventory,
    SellerApp,
}

impl HitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitKind::Order => "order",
            HitKind::Inventory => "inventory",
            HitKind::SellerApp => "seller-app",
        }
    }
}

/// One search result, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: HitKind,
    pub title: String,
    pub subtitle: String,
}

/// Case-insensitive substring search over the cached collections.
///
/// Each entity type contributes a fixed set of fields, concatenated and
/// lowercased, and the trimmed lowercase query is tested for containment.
/// Queries shorter than [`MIN_QUERY_LEN`] return nothing without scanning.
/// Hits come back in type order orders → inventory → seller apps, capped at
/// [`MAX_HITS`] combined. No ranking beyond that precedence.
pub fn search(
    orders: &[Order],
    inventory: &[InventoryRecord],
    seller_apps: &[SellerApp],
    query: &str,
) -> Vec<SearchHit> {
    let query = query.trim().to_lowercase();
    // Characters, not bytes: one multi-byte letter is still too short.
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for order in orders {
        if hits.len() == MAX_HITS {
            return hits;
        }
        let mut fields: Vec<&str> = vec![order.ondc_order_id.as_str()];
        fields.extend(order.customer_name.as_deref());
        fields.extend(order.seller_app_name.as_deref());
        fields.push(order.status.label());
        fields.extend(order.items.iter().map(|i| i.product_name.as_str()));
        if matches(&fields, &query) {
            hits.push(SearchHit {
                kind: HitKind::Order,
                title: order.ondc_order_id.clone(),
                subtitle: format!(
                    "{} · ₹{:.2} · {}",
                    order.customer_name.as_deref().unwrap_or("—"),
                    order.total_amount,
                    order.status.label()
                ),
            });
        }
    }

    for record in inventory {
        if hits.len() == MAX_HITS {
            return hits;
        }
        let fields = [
            record.product_name.as_str(),
            record.product_sku.as_str(),
            record.outlet_name.as_str(),
        ];
        if matches(&fields, &query) {
            let sku = if record.product_sku.is_empty() {
                "—"
            } else {
                record.product_sku.as_str()
            };
            hits.push(SearchHit {
                kind: HitKind::Inventory,
                title: record.product_name.clone(),
                subtitle: format!(
                    "SKU: {sku} · Stock: {} · {}",
                    record.available_stock, record.outlet_name
                ),
            });
        }
    }

    for app in seller_apps {
        if hits.len() == MAX_HITS {
            return hits;
        }
        let fields = [
            app.name.as_str(),
            app.api_endpoint.as_str(),
            app.status.as_str(),
        ];
        if matches(&fields, &query) {
            hits.push(SearchHit {
                kind: HitKind::SellerApp,
                title: app.name.clone(),
                subtitle: format!("{} · {}", app.status.as_str(), app.api_endpoint),
            });
        }
    }

    hits
}

fn matches(fields: &[&str], query: &str) -> bool {
    fields.join(" ").to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn order(id: i64, ondc: &str, customer: &str, status: &str, product: &str) -> Order {
        serde_json::from_str(&format!(
            r#"{{
                "id": {id}, "ondcOrderId": "{ondc}", "status": "{status}",
                "customerName": "{customer}", "totalAmount": 450.0,
                "items": [{{"productName": "{product}", "requestedQty": 1}}]
            }}"#
        ))
        .unwrap()
    }

    fn record(id: i64, product: &str, sku: &str, outlet: &str) -> InventoryRecord {
        serde_json::from_str(&format!(
            r#"{{
                "id": {id}, "productId": {id}, "productName": "{product}",
                "productSku": "{sku}", "outletId": 1, "outletName": "{outlet}",
                "totalStock": 50, "availableStock": 42
            }}"#
        ))
        .unwrap()
    }

    fn app(id: i64, name: &str, endpoint: &str, status: &str) -> SellerApp {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "name": "{name}", "apiEndpoint": "{endpoint}", "status": "{status}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn short_query_returns_nothing() {
        let orders = vec![order(1, "ONDC-1", "Asha", "PENDING", "Rice 5kg")];
        assert!(search(&orders, &[], &[], "r").is_empty());
        assert!(search(&orders, &[], &[], "  r  ").is_empty());
        assert!(search(&orders, &[], &[], "").is_empty());
    }

    #[test]
    fn single_multibyte_character_is_still_too_short() {
        let inventory = vec![record(1, "रागी Flour 1kg", "SKU-RAGI-1", "Andheri West")];
        assert!(search(&[], &inventory, &[], "र").is_empty());
        assert_eq!(search(&[], &inventory, &[], "रागी").len(), 1);
    }

    #[test]
    fn match_is_case_insensitive_and_trimmed() {
        let inventory = vec![record(1, "Basmati Rice", "SKU-RICE-5", "Andheri West")];
        let hits = search(&[], &inventory, &[], "  BASMATI  ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HitKind::Inventory);
        assert_eq!(hits[0].title, "Basmati Rice");
        assert_eq!(hits[0].subtitle, "SKU: SKU-RICE-5 · Stock: 42 · Andheri West");
    }

    #[test]
    fn orders_match_on_item_product_names() {
        let orders = vec![order(1, "ONDC-1", "Asha", "PENDING", "Toor Dal 1kg")];
        let hits = search(&orders, &[], &[], "toor");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HitKind::Order);
        assert_eq!(hits[0].title, "ONDC-1");
        assert_eq!(hits[0].subtitle, "Asha · ₹450.00 · PENDING");
    }

    #[test]
    fn type_precedence_is_orders_then_inventory_then_seller_apps() {
        let orders = vec![order(1, "ONDC-KART-1", "Asha", "PENDING", "Rice")];
        let inventory = vec![record(1, "Kart Special Mix", "SKU-1", "Andheri")];
        let apps = vec![app(1, "QuickKart", "https://api.quickkart.in", "ACTIVE")];

        let kinds: Vec<HitKind> = search(&orders, &inventory, &apps, "kart")
            .into_iter()
            .map(|h| h.kind)
            .collect();
        assert_eq!(kinds, vec![HitKind::Order, HitKind::Inventory, HitKind::SellerApp]);
    }

    #[test]
    fn hits_are_capped_at_ten_combined() {
        let orders: Vec<Order> = (0..8)
            .map(|i| order(i, &format!("ONDC-{i}"), "Asha", "PENDING", "Rice"))
            .collect();
        let inventory: Vec<InventoryRecord> = (0..8)
            .map(|i| record(i, "Rice 5kg", &format!("SKU-{i}"), "Andheri"))
            .collect();

        let hits = search(&orders, &inventory, &[], "rice");
        assert_eq!(hits.len(), MAX_HITS);
        assert_eq!(hits.iter().filter(|h| h.kind == HitKind::Order).count(), 8);
        assert_eq!(hits.iter().filter(|h| h.kind == HitKind::Inventory).count(), 2);
    }

    #[test]
    fn seller_apps_match_on_endpoint_and_status() {
        let apps = vec![
            app(1, "QuickKart", "https://api.quickkart.in", "ACTIVE"),
            app(2, "LocalBasket", "https://lb.example.in", "DOWN"),
        ];
        let hits = search(&[], &[], &apps, "down");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "LocalBasket");
    }

    proptest! {
        #[test]
        fn never_returns_more_than_the_cap(n in 0usize..40) {
            let orders: Vec<Order> = (0..n as i64)
                .map(|i| order(i, &format!("ONDC-{i}"), "Asha", "PENDING", "Rice"))
                .collect();
            let hits = search(&orders, &[], &[], "ondc");
            prop_assert!(hits.len() <= MAX_HITS);
        }
    }
}
