use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::SellerAppId;
use crate::order::lenient_datetime;

/// Health classification of a downstream seller app.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerAppStatus {
    Active,
    Degraded,
    Down,
}

impl SellerAppStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerAppStatus::Active => "ACTIVE",
            SellerAppStatus::Degraded => "DEGRADED",
            SellerAppStatus::Down => "DOWN",
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, SellerAppStatus::Active)
    }
}

/// A downstream seller app the backend pushes inventory to.
///
/// `status` is only refreshed by an explicit health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerApp {
    pub id: SellerAppId,
    pub name: String,
    #[serde(default)]
    pub api_endpoint: String,
    pub status: SellerAppStatus,
    #[serde(default)]
    pub response_time_ms: i64,
    #[serde(default = "default_uptime")]
    pub uptime_percentage: f64,
    #[serde(default)]
    pub total_requests: i64,
    #[serde(default)]
    pub failed_requests: i64,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub last_health_check: Option<DateTime<Utc>>,
}

fn default_uptime() -> f64 {
    100.0
}

/// Result of `GET /api/seller-apps/{id}/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub name: String,
    pub status: SellerAppStatus,
    #[serde(default)]
    pub response_time_ms: i64,
}
