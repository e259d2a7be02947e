//! Backend contract: one method per REST operation the dashboard consumes.

use async_trait::async_trait;

use vendash_core::{
    ApiResult, DashboardSummary, HealthReport, InventoryId, InventoryRecord, NewInventory, Order,
    OrderId, SellerApp, SellerAppId, SyncStatus, SyncedItem, Vendor, VendorId,
};

/// The remote commerce backend, as seen by this client.
///
/// All methods are plain request/response; the backend owns all durable
/// state. Implementations must not retry.
#[async_trait]
pub trait Backend: Send + Sync {
    // Vendors & dashboard
    async fn list_vendors(&self) -> ApiResult<Vec<Vendor>>;
    async fn dashboard_summary(&self, vendor: VendorId) -> ApiResult<DashboardSummary>;

    // Inventory
    async fn vendor_inventory(&self, vendor: VendorId) -> ApiResult<Vec<InventoryRecord>>;
    async fn create_inventory(&self, body: &NewInventory) -> ApiResult<InventoryRecord>;
    async fn sync_status(&self, inventory: InventoryId) -> ApiResult<Vec<SyncStatus>>;
    async fn sync_vendor_inventory(&self, vendor: VendorId) -> ApiResult<Vec<InventoryRecord>>;

    // Orders
    async fn list_orders(&self) -> ApiResult<Vec<Order>>;
    async fn vendor_orders(&self, vendor: VendorId) -> ApiResult<Vec<Order>>;
    async fn accept_order(&self, order: OrderId) -> ApiResult<Order>;
    async fn reject_order(&self, order: OrderId, reason: &str) -> ApiResult<Order>;

    // Seller apps
    async fn list_seller_apps(&self) -> ApiResult<Vec<SellerApp>>;
    async fn vendor_seller_apps(&self, vendor: VendorId) -> ApiResult<Vec<SellerApp>>;
    async fn seller_app_health(&self, app: SellerAppId) -> ApiResult<HealthReport>;
    async fn seller_app_inventory(&self, app: SellerAppId) -> ApiResult<Vec<SyncedItem>>;
}
