use serde::{Deserialize, Serialize};

use crate::id::VendorId;

/// A vendor as returned by `GET /api/vendors`.
///
/// Immutable from the client's perspective within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
