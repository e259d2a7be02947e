//! Stock update + multi-target sync reconciliation.
//!
//! Per-record state machine:
//!
//! ```text
//! Idle -> Submitting -> AwaitingSyncStatus -> Settled
//! ```
//!
//! Validation failures settle immediately with no network call. A failed
//! stock write settles as an error and the displayed value is not advanced.
//! A failed sync-status read is swallowed: the cache keeps its prior value
//! and the outcome is classified against that.

use std::sync::Arc;

use vendash_client::Backend;
use vendash_core::{
    NewInventory, Notice, NoticeKind, OutletId, ProductId, SyncState, SyncStatus, VendorId,
};
use vendash_events::{EventBus, RefreshEvent};

use crate::cache::SyncStatusCache;
use crate::input::parse_stock_input;

/// Phase of one in-flight stock update. Used for structured logging; records
/// progress through the reconciliation sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    Submitting,
    AwaitingSyncStatus,
    Settled,
}

/// Classify a settled stock update from the sync outcomes on record.
///
/// `Success` when every contacted seller app reports `SUCCESS` (including the
/// never-synced 0/0 case), `Info` when only some did.
pub fn classify_sync(statuses: &[SyncStatus], new_stock: u32) -> Notice {
    let total = statuses.len();
    let synced = statuses
        .iter()
        .filter(|s| s.sync_status == SyncState::Success)
        .count();

    let kind = if synced == total {
        NoticeKind::Success
    } else {
        NoticeKind::Info
    };

    Notice {
        kind,
        message: format!("Stock updated to {new_stock}. Synced to {synced}/{total} seller apps."),
    }
}

/// Drives stock mutations and reconciles their sync outcomes.
///
/// Multiple records may be mid-flight simultaneously; each update touches
/// only its own cache key, so there is no cross-record locking.
pub struct StockReconciler<B, E> {
    backend: Arc<B>,
    bus: Arc<E>,
}

impl<B, E> StockReconciler<B, E>
where
    B: Backend,
    E: EventBus<RefreshEvent>,
{
    pub fn new(backend: Arc<B>, bus: Arc<E>) -> Self {
        Self { backend, bus }
    }

    /// Apply a user-entered stock value to one product/outlet pair, then
    /// reconcile the per-seller-app sync outcomes for the touched record.
    pub async fn update_stock(
        &self,
        cache: &mut SyncStatusCache,
        product: ProductId,
        outlet: OutletId,
        raw_input: &str,
    ) -> Notice {
        let new_stock = match parse_stock_input(raw_input) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(phase = ?UpdatePhase::Settled, %product, %outlet, "rejected stock input");
                return Notice::error(err.user_message("Please enter a valid stock quantity"));
            }
        };

        tracing::debug!(phase = ?UpdatePhase::Submitting, %product, %outlet, new_stock, "submitting stock update");
        let body = NewInventory {
            product_id: product,
            outlet_id: outlet,
            total_stock: new_stock,
            reorder_level: None,
        };
        let record = match self.backend.create_inventory(&body).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(%product, %outlet, error = %err, "stock update failed");
                return Notice::error(format!(
                    "Update failed: {}",
                    err.user_message("stock write rejected")
                ));
            }
        };

        tracing::debug!(phase = ?UpdatePhase::AwaitingSyncStatus, inventory = %record.id, "fetching sync status");
        match self.backend.sync_status(record.id).await {
            Ok(statuses) => cache.replace(record.id, statuses),
            // Swallowed: sync display degrades to its prior cached value.
            Err(err) => {
                tracing::warn!(inventory = %record.id, error = %err, "sync status fetch failed, keeping cached value");
            }
        }

        let outcome = classify_sync(cache.get(record.id), new_stock);
        tracing::debug!(phase = ?UpdatePhase::Settled, inventory = %record.id, kind = ?outcome.kind, "stock update settled");

        self.publish(RefreshEvent::DashboardInvalidated);
        outcome
    }

    /// Create (or overwrite) an inventory record with an optional reorder
    /// level.
    pub async fn add_inventory(&self, body: &NewInventory) -> Notice {
        match self.backend.create_inventory(body).await {
            Ok(record) => {
                self.publish(RefreshEvent::InventoryInvalidated);
                self.publish(RefreshEvent::DashboardInvalidated);
                Notice::success(format!(
                    "Inventory added for product {} at outlet {}",
                    record.product_id, record.outlet_id
                ))
            }
            Err(err) => Notice::error(format!(
                "Failed to add inventory: {}",
                err.user_message("inventory write rejected")
            )),
        }
    }

    /// Push every inventory record of a vendor to all seller apps.
    pub async fn sync_vendor(&self, vendor: VendorId) -> Notice {
        match self.backend.sync_vendor_inventory(vendor).await {
            Ok(items) => {
                self.publish(RefreshEvent::InventoryInvalidated);
                Notice::success(format!("Synced {} inventory items", items.len()))
            }
            Err(err) => Notice::error(format!(
                "Sync failed: {}",
                err.user_message("inventory sync rejected")
            )),
        }
    }

    /// Fire-and-forget: a refresh notice that cannot be delivered only costs
    /// one stale render.
    fn publish(&self, event: RefreshEvent) {
        if let Err(err) = self.bus.publish(event) {
            tracing::debug!(event = event.as_str(), ?err, "refresh event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use vendash_core::{
        ApiError, ApiResult, DashboardSummary, HealthReport, InventoryId, InventoryRecord, Order,
        OrderId, SellerApp, SellerAppId, SyncedItem, Vendor,
    };
    use vendash_events::InMemoryEventBus;

    use super::*;

    /// Scripted backend: counts calls, returns programmed responses.
    #[derive(Default)]
    struct FakeBackend {
        calls: Mutex<Vec<&'static str>>,
        create_response: Option<ApiResult<InventoryRecord>>,
        sync_status_response: Option<ApiResult<Vec<SyncStatus>>>,
        sync_vendor_response: Option<ApiResult<Vec<InventoryRecord>>>,
    }

    impl FakeBackend {
        fn record_call(&self, name: &'static str) {
            self.calls.lock().unwrap().push(name);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn record(id: i64) -> InventoryRecord {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "productId": 3, "productName": "Rice 5kg",
                "outletId": 7, "totalStock": 50, "availableStock": 50}}"#
        ))
        .unwrap()
    }

    fn status(app: &str, state: SyncState) -> SyncStatus {
        SyncStatus {
            seller_app_name: app.to_string(),
            sync_status: state,
            time: None,
        }
    }

    #[async_trait]
    impl Backend for FakeBackend {
        async fn list_vendors(&self) -> ApiResult<Vec<Vendor>> {
            unimplemented!()
        }
        async fn dashboard_summary(&self, _: VendorId) -> ApiResult<DashboardSummary> {
            unimplemented!()
        }
        async fn vendor_inventory(&self, _: VendorId) -> ApiResult<Vec<InventoryRecord>> {
            unimplemented!()
        }
        async fn create_inventory(&self, _: &NewInventory) -> ApiResult<InventoryRecord> {
            self.record_call("create_inventory");
            self.create_response.clone().expect("unscripted create")
        }
        async fn sync_status(&self, _: InventoryId) -> ApiResult<Vec<SyncStatus>> {
            self.record_call("sync_status");
            self.sync_status_response.clone().expect("unscripted sync_status")
        }
        async fn sync_vendor_inventory(&self, _: VendorId) -> ApiResult<Vec<InventoryRecord>> {
            self.record_call("sync_vendor_inventory");
            self.sync_vendor_response.clone().expect("unscripted sync")
        }
        async fn list_orders(&self) -> ApiResult<Vec<Order>> {
            unimplemented!()
        }
        async fn vendor_orders(&self, _: VendorId) -> ApiResult<Vec<Order>> {
            unimplemented!()
        }
        async fn accept_order(&self, _: OrderId) -> ApiResult<Order> {
            unimplemented!()
        }
        async fn reject_order(&self, _: OrderId, _: &str) -> ApiResult<Order> {
            unimplemented!()
        }
        async fn list_seller_apps(&self) -> ApiResult<Vec<SellerApp>> {
            unimplemented!()
        }
        async fn vendor_seller_apps(&self, _: VendorId) -> ApiResult<Vec<SellerApp>> {
            unimplemented!()
        }
        async fn seller_app_health(&self, _: SellerAppId) -> ApiResult<HealthReport> {
            unimplemented!()
        }
        async fn seller_app_inventory(&self, _: SellerAppId) -> ApiResult<Vec<SyncedItem>> {
            unimplemented!()
        }
    }

    fn reconciler(
        backend: FakeBackend,
    ) -> (
        StockReconciler<FakeBackend, InMemoryEventBus<RefreshEvent>>,
        Arc<InMemoryEventBus<RefreshEvent>>,
    ) {
        let bus = Arc::new(InMemoryEventBus::new());
        (
            StockReconciler::new(Arc::new(backend), Arc::clone(&bus)),
            bus,
        )
    }

    #[tokio::test]
    async fn invalid_input_fails_without_any_network_call() {
        let backend = FakeBackend::default();
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();
        let mut cache = SyncStatusCache::new();

        for raw in ["-1", "abc", ""] {
            let outcome = reconciler
                .update_stock(&mut cache, ProductId::new(3), OutletId::new(7), raw)
                .await;
            assert_eq!(outcome.kind, NoticeKind::Error);
            assert_eq!(outcome.message, "Please enter a valid stock quantity");
        }

        assert!(reconciler.backend.calls().is_empty());
        assert!(sub.drain().is_empty());
    }

    #[tokio::test]
    async fn partial_sync_settles_as_info_with_counts() {
        let backend = FakeBackend {
            create_response: Some(Ok(record(11))),
            sync_status_response: Some(Ok(vec![
                status("QuickKart", SyncState::Success),
                status("LocalBasket", SyncState::Failed),
            ])),
            ..Default::default()
        };
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();
        let mut cache = SyncStatusCache::new();

        let outcome = reconciler
            .update_stock(&mut cache, ProductId::new(3), OutletId::new(7), "40")
            .await;

        assert_eq!(outcome.kind, NoticeKind::Info);
        assert_eq!(
            outcome.message,
            "Stock updated to 40. Synced to 1/2 seller apps."
        );
        assert_eq!(cache.get(InventoryId::new(11)).len(), 2);
        assert_eq!(sub.drain(), vec![RefreshEvent::DashboardInvalidated]);
    }

    #[tokio::test]
    async fn full_sync_settles_as_success() {
        let backend = FakeBackend {
            create_response: Some(Ok(record(11))),
            sync_status_response: Some(Ok(vec![
                status("QuickKart", SyncState::Success),
                status("LocalBasket", SyncState::Success),
            ])),
            ..Default::default()
        };
        let (reconciler, _bus) = reconciler(backend);
        let mut cache = SyncStatusCache::new();

        let outcome = reconciler
            .update_stock(&mut cache, ProductId::new(3), OutletId::new(7), "40")
            .await;

        assert_eq!(outcome.kind, NoticeKind::Success);
        assert_eq!(
            outcome.message,
            "Stock updated to 40. Synced to 2/2 seller apps."
        );
    }

    #[tokio::test]
    async fn failed_sync_status_fetch_is_swallowed_and_cache_kept() {
        let backend = FakeBackend {
            create_response: Some(Ok(record(11))),
            sync_status_response: Some(Err(ApiError::network("connection reset"))),
            ..Default::default()
        };
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();

        let mut cache = SyncStatusCache::new();
        cache.replace(
            InventoryId::new(11),
            vec![status("QuickKart", SyncState::Failed)],
        );

        let outcome = reconciler
            .update_stock(&mut cache, ProductId::new(3), OutletId::new(7), "40")
            .await;

        // Classified against the prior cached value.
        assert_eq!(outcome.kind, NoticeKind::Info);
        assert_eq!(
            outcome.message,
            "Stock updated to 40. Synced to 0/1 seller apps."
        );
        assert_eq!(cache.get(InventoryId::new(11)).len(), 1);
        // The primary action succeeded, so the refresh still fires.
        assert_eq!(sub.drain(), vec![RefreshEvent::DashboardInvalidated]);
    }

    #[tokio::test]
    async fn failed_stock_write_settles_as_error_without_sync_fetch() {
        let backend = FakeBackend {
            create_response: Some(Err(ApiError::http(409, Some("Outlet is closed".into())))),
            ..Default::default()
        };
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();
        let mut cache = SyncStatusCache::new();

        let outcome = reconciler
            .update_stock(&mut cache, ProductId::new(3), OutletId::new(7), "40")
            .await;

        assert_eq!(outcome.kind, NoticeKind::Error);
        assert_eq!(outcome.message, "Update failed: Outlet is closed");
        assert_eq!(reconciler.backend.calls(), vec!["create_inventory"]);
        assert!(cache.is_empty());
        assert!(sub.drain().is_empty());
    }

    #[tokio::test]
    async fn sync_vendor_reports_item_count() {
        let backend = FakeBackend {
            sync_vendor_response: Some(Ok(vec![record(1), record(2), record(3)])),
            ..Default::default()
        };
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();

        let outcome = reconciler.sync_vendor(VendorId::new(1)).await;
        assert_eq!(outcome.kind, NoticeKind::Success);
        assert_eq!(outcome.message, "Synced 3 inventory items");
        assert_eq!(sub.drain(), vec![RefreshEvent::InventoryInvalidated]);
    }

    #[tokio::test]
    async fn add_inventory_publishes_both_refreshes() {
        let backend = FakeBackend {
            create_response: Some(Ok(record(11))),
            ..Default::default()
        };
        let (reconciler, bus) = reconciler(backend);
        let sub = bus.subscribe();

        let body = NewInventory {
            product_id: ProductId::new(3),
            outlet_id: OutletId::new(7),
            total_stock: 25,
            reorder_level: Some(5),
        };
        let outcome = reconciler.add_inventory(&body).await;

        assert_eq!(outcome.kind, NoticeKind::Success);
        assert_eq!(
            sub.drain(),
            vec![
                RefreshEvent::InventoryInvalidated,
                RefreshEvent::DashboardInvalidated
            ]
        );
    }

    #[test]
    fn classify_never_synced_record_as_success_zero_of_zero() {
        let outcome = classify_sync(&[], 10);
        assert_eq!(outcome.kind, NoticeKind::Success);
        assert_eq!(outcome.message, "Stock updated to 10. Synced to 0/0 seller apps.");
    }
}
