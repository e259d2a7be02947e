//! Plain-text rendering of views. Pure string builders, no printing.

use std::collections::BTreeMap;
use std::fmt::Write;

use vendash_core::{InventoryRecord, Order, SellerApp, SyncedItem};
use vendash_dashboard::{AggregateSummary, RevenueBucket};
use vendash_search::SearchHit;

use crate::view::DashboardView;

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = render_summary(&view.summary);
    out.push('\n');
    out.push_str(&render_status_counts(&view.status_counts));
    out.push('\n');
    out.push_str(&render_revenue(&view.revenue));
    out.push('\n');
    out.push_str(&render_inventory(&view.inventory));
    out.push('\n');
    out.push_str(&render_orders(&view.orders));
    out
}

pub fn render_summary(summary: &AggregateSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vendor: {}", summary.vendor_name);
    let _ = writeln!(
        out,
        "Orders: {} total, {} pending, {} fulfilled",
        summary.total_orders, summary.pending_orders, summary.fulfilled_orders
    );
    let _ = writeln!(out, "Fulfillment rate: {}%", summary.fulfillment_rate);
    let _ = writeln!(out, "Products: {}", summary.total_products);
    let _ = writeln!(
        out,
        "Outlets: {}/{} active",
        summary.active_outlets, summary.total_outlets
    );
    let _ = writeln!(
        out,
        "Seller apps: {}/{} healthy",
        summary.healthy_seller_apps, summary.total_seller_apps
    );
    let _ = writeln!(out, "Rating: {:.1}", summary.vendor_rating);
    if summary.low_stock_items > 0 {
        let _ = writeln!(out, "Low stock items: {}", summary.low_stock_items);
    }
    out
}

pub fn render_status_counts(counts: &BTreeMap<String, u64>) -> String {
    let mut out = String::from("Orders by status:\n");
    if counts.is_empty() {
        out.push_str("  (no orders)\n");
    }
    for (status, count) in counts {
        let _ = writeln!(out, "  {status:<20} {count}");
    }
    out
}

pub fn render_revenue(buckets: &[RevenueBucket]) -> String {
    let mut out = String::from("Revenue (last 7 days):\n");
    for bucket in buckets {
        let _ = writeln!(
            out,
            "  {} {}  ₹{:.2}",
            bucket.weekday_label(),
            bucket.date,
            bucket.amount
        );
    }
    out
}

pub fn render_inventory(items: &[InventoryRecord]) -> String {
    if items.is_empty() {
        return String::from("No inventory records found\n");
    }
    let mut out = String::from("Inventory:\n");
    for item in items {
        let flag = if item.is_low_stock { "  LOW STOCK" } else { "" };
        let _ = writeln!(
            out,
            "  #{:<5} {:<28} {:<14} {:<18} avail {:>5} / {:>5}{flag}",
            item.id, item.product_name, item.product_sku, item.outlet_name,
            item.available_stock, item.total_stock
        );
    }
    out
}

pub fn render_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return String::from("No orders found\n");
    }
    let mut out = String::from("Orders:\n");
    for order in orders {
        let _ = writeln!(
            out,
            "  #{:<5} {:<18} {:<20} ₹{:>9.2}  {}",
            order.id,
            order.ondc_order_id,
            order.customer_name.as_deref().unwrap_or("—"),
            order.total_amount,
            order.status.label()
        );
    }
    out
}

pub fn render_seller_apps(apps: &[SellerApp]) -> String {
    if apps.is_empty() {
        return String::from("No seller apps registered\n");
    }
    let mut out = String::from("Seller apps:\n");
    for app in apps {
        let _ = writeln!(
            out,
            "  #{:<3} {:<20} {:<10} {:>5}ms  uptime {:.1}%  {}",
            app.id,
            app.name,
            app.status.as_str(),
            app.response_time_ms,
            app.uptime_percentage,
            app.api_endpoint
        );
    }
    out
}

pub fn render_synced_items(items: &[SyncedItem]) -> String {
    if items.is_empty() {
        return String::from("No inventory synced yet\n");
    }
    let mut out = String::from("Synced inventory:\n");
    for item in items {
        let _ = writeln!(
            out,
            "  {:<28} {:>5} units  {}",
            item.product_name,
            item.allocated_stock,
            item.sync_status.as_str()
        );
    }
    out
}

pub fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return String::from("No results found\n");
    }
    let mut out = String::new();
    for hit in hits {
        let _ = writeln!(
            out,
            "[{:<10}] {} — {}",
            hit.kind.as_str(),
            hit.title,
            hit.subtitle
        );
    }
    out
}
