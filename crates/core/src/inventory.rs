use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{InventoryId, OutletId, ProductId};
use crate::order::lenient_datetime;

/// Inventory record: stock for one product at one outlet.
///
/// `available_stock` is backend-derived (`total - reserved`); the client never
/// computes it locally. Mutations go through `POST /api/inventory` and the
/// authoritative value is always re-fetched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(default)]
    pub product_sku: String,
    pub outlet_id: OutletId,
    #[serde(default)]
    pub outlet_name: String,
    pub total_stock: i64,
    #[serde(default)]
    pub reserved_stock: i64,
    #[serde(default)]
    pub available_stock: i64,
    #[serde(default)]
    pub reorder_level: Option<i64>,
    #[serde(default)]
    pub is_low_stock: bool,
}

/// Body of `POST /api/inventory` (create or overwrite a stock level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventory {
    pub product_id: ProductId,
    pub outlet_id: OutletId,
    pub total_stock: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<u32>,
}

/// Outcome of pushing one inventory record to one seller app.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    Success,
    Failed,
    Pending,
}

impl SyncState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncState::Success => "SUCCESS",
            SyncState::Failed => "FAILED",
            SyncState::Pending => "PENDING",
        }
    }
}

/// Per-seller-app sync outcome for one inventory record.
///
/// The backend returns one entry per seller app contacted during the most
/// recent sync attempt; the client replaces its cached list wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncStatus {
    pub seller_app_name: String,
    pub sync_status: SyncState,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub time: Option<DateTime<Utc>>,
}

/// An inventory line as held by a seller app (`GET /api/seller-apps/{id}/inventory`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncedItem {
    pub product_name: String,
    #[serde(default)]
    pub allocated_stock: i64,
    pub sync_status: SyncState,
}
