//! Session state: the in-memory caches and the flows that fill them.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::try_join_all;

use vendash_client::Backend;
use vendash_core::{
    ApiResult, InventoryRecord, Notice, Order, SellerApp, SellerAppId, SyncedItem, VendorId,
};
use vendash_events::{EventBus, InMemoryEventBus, RefreshEvent, Subscription};
use vendash_inventory::SyncStatusCache;
use vendash_search::SearchHit;

use crate::view::{DashboardView, build_dashboard_view};

/// One user session: caches for every collection the views read, overwritten
/// wholesale on each load. The backend stays the source of truth; nothing in
/// here survives the process.
pub struct Session<B> {
    backend: Arc<B>,
    bus: Arc<InMemoryEventBus<RefreshEvent>>,
    vendor: VendorId,

    inventory: Vec<InventoryRecord>,
    orders: Vec<Order>,
    seller_apps: Vec<SellerApp>,
    pub sync: SyncStatusCache,
}

impl<B: Backend> Session<B> {
    pub fn new(
        backend: Arc<B>,
        bus: Arc<InMemoryEventBus<RefreshEvent>>,
        vendor: VendorId,
    ) -> Self {
        Self {
            backend,
            bus,
            vendor,
            inventory: Vec::new(),
            orders: Vec::new(),
            seller_apps: Vec::new(),
            sync: SyncStatusCache::new(),
        }
    }

    pub fn bus(&self) -> &Arc<InMemoryEventBus<RefreshEvent>> {
        &self.bus
    }

    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn seller_apps(&self) -> &[SellerApp] {
        &self.seller_apps
    }

    /// Load everything the dashboard shows.
    ///
    /// Vendors first, then per-vendor summaries, per-vendor inventory and the
    /// full order list joined behind an all-complete barrier: if any one call
    /// fails the whole load fails and nothing partial is rendered or cached.
    pub async fn load_dashboard(&mut self, today: NaiveDate) -> ApiResult<DashboardView> {
        let vendors = self.backend.list_vendors().await?;

        let summaries = try_join_all(vendors.iter().map(|v| self.backend.dashboard_summary(v.id)));
        let inventories = try_join_all(vendors.iter().map(|v| self.backend.vendor_inventory(v.id)));
        let (summaries, inventories, orders) =
            tokio::try_join!(summaries, inventories, self.backend.list_orders())?;

        let view = build_dashboard_view(&vendors, &summaries, inventories, orders, today);
        self.inventory = view.inventory.clone();
        self.orders = view.orders.clone();

        tracing::debug!(
            vendors = vendors.len(),
            orders = self.orders.len(),
            inventory = self.inventory.len(),
            "dashboard loaded"
        );
        Ok(view)
    }

    /// Refresh the merged all-vendor inventory cache.
    pub async fn load_inventory(&mut self) -> ApiResult<&[InventoryRecord]> {
        let vendors = self.backend.list_vendors().await?;
        let per_vendor =
            try_join_all(vendors.iter().map(|v| self.backend.vendor_inventory(v.id))).await?;
        self.inventory = per_vendor.into_iter().flatten().collect();
        Ok(&self.inventory)
    }

    pub async fn load_orders(&mut self) -> ApiResult<&[Order]> {
        self.orders = self.backend.list_orders().await?;
        Ok(&self.orders)
    }

    pub async fn load_seller_apps(&mut self) -> ApiResult<&[SellerApp]> {
        self.seller_apps = self.backend.list_seller_apps().await?;
        Ok(&self.seller_apps)
    }

    /// Run an explicit health check against one seller app.
    ///
    /// The notice grades the reported status; the seller-app list is
    /// re-fetched afterwards so cached statuses match what the probe saw. A
    /// failed re-fetch is swallowed like any background refresh.
    pub async fn check_health(&mut self, app: SellerAppId) -> Notice {
        let notice = match self.backend.seller_app_health(app).await {
            Ok(report) => {
                let message = format!(
                    "{}: {} ({}ms)",
                    report.name,
                    report.status.as_str(),
                    report.response_time_ms
                );
                match report.status {
                    s if s.is_healthy() => Notice::success(message),
                    vendash_core::SellerAppStatus::Degraded => Notice::info(message),
                    _ => Notice::error(message),
                }
            }
            Err(err) => {
                tracing::warn!(%app, error = %err, "health check failed");
                return Notice::error("Health check failed");
            }
        };

        if let Err(err) = self.load_seller_apps().await {
            tracing::debug!(error = %err, "seller app refresh after health check failed");
        }
        notice
    }

    /// Inventory as held by one seller app.
    pub async fn seller_app_items(&self, app: SellerAppId) -> ApiResult<Vec<SyncedItem>> {
        self.backend.seller_app_inventory(app).await
    }

    /// Global search over the cached collections.
    ///
    /// Queries below the minimum length return nothing before any backfill,
    /// so a stray keystroke never costs a network call. Empty caches are
    /// backfilled once with vendor-scoped fetches; a fetch failure leaves
    /// that collection out of the results rather than failing the search.
    pub async fn search(&mut self, query: &str) -> Vec<SearchHit> {
        if query.trim().chars().count() < vendash_search::MIN_QUERY_LEN {
            return Vec::new();
        }

        if self.orders.is_empty() {
            match self.backend.vendor_orders(self.vendor).await {
                Ok(orders) => self.orders = orders,
                Err(err) => tracing::debug!(error = %err, "order backfill failed"),
            }
        }
        if self.inventory.is_empty() {
            match self.backend.vendor_inventory(self.vendor).await {
                Ok(inventory) => self.inventory = inventory,
                Err(err) => tracing::debug!(error = %err, "inventory backfill failed"),
            }
        }
        if self.seller_apps.is_empty() {
            match self.backend.vendor_seller_apps(self.vendor).await {
                Ok(apps) => self.seller_apps = apps,
                Err(err) => tracing::debug!(error = %err, "seller app backfill failed"),
            }
        }

        vendash_search::search(&self.orders, &self.inventory, &self.seller_apps, query)
    }

    /// Subscribe to the refresh cascade. Pair with
    /// [`apply_refreshes`](Self::apply_refreshes) after mutations.
    pub fn subscribe(&self) -> Subscription<RefreshEvent> {
        self.bus.subscribe()
    }

    /// Re-fetch every cache a queued refresh event invalidated.
    ///
    /// Background refreshes swallow their own errors; a failed re-fetch
    /// leaves the stale cache in place until the next explicit load.
    pub async fn apply_refreshes(&mut self, sub: &Subscription<RefreshEvent>) {
        let mut events = sub.drain();
        events.dedup();
        for event in events {
            let result = match event {
                RefreshEvent::DashboardInvalidated | RefreshEvent::OrdersInvalidated => {
                    self.load_orders().await.map(|_| ())
                }
                RefreshEvent::InventoryInvalidated => self.load_inventory().await.map(|_| ()),
                RefreshEvent::SellerAppsInvalidated => self.load_seller_apps().await.map(|_| ()),
            };
            if let Err(err) = result {
                tracing::debug!(event = event.as_str(), error = %err, "background refresh failed");
            }
        }
    }
}
