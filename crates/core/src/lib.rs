//! `vendash-core` — shared wire models, identifiers and the error taxonomy.
//!
//! Everything here is a **transient mirror of backend state**: plain data
//! deserialized from the REST surface, owned for the length of a session and
//! rebuilt on every load. No infrastructure concerns.

pub mod error;
pub mod id;
pub mod inventory;
pub mod notice;
pub mod order;
pub mod seller_app;
pub mod summary;
pub mod vendor;

pub use error::{ApiError, ApiResult};
pub use id::{InventoryId, OrderId, OutletId, ProductId, SellerAppId, VendorId};
pub use inventory::{InventoryRecord, NewInventory, SyncState, SyncStatus, SyncedItem};
pub use notice::{Notice, NoticeKind};
pub use order::{Order, OrderItem, OrderPriority, OrderStatus, RejectRequest};
pub use seller_app::{HealthReport, SellerApp, SellerAppStatus};
pub use summary::{DashboardSummary, LowStockAlert};
pub use vendor::Vendor;
