//! Environment-based configuration.

use vendash_core::{ApiError, ApiResult, VendorId};

pub const ENV_API_URL: &str = "VENDASH_API_URL";
pub const ENV_VENDOR_ID: &str = "VENDASH_VENDOR_ID";

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_VENDOR_ID: i64 = 1;

/// Runtime configuration for the console binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the commerce backend.
    pub api_url: String,
    /// Vendor that scopes search backfills and the sync-all action.
    pub vendor_id: VendorId,
}

impl Config {
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let api_url = lookup(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let vendor_id = match lookup(ENV_VENDOR_ID) {
            Some(raw) => raw.parse::<VendorId>().map_err(|_| {
                ApiError::validation(format!("{ENV_VENDOR_ID} must be an integer, got {raw:?}"))
            })?,
            None => VendorId::new(DEFAULT_VENDOR_ID),
        };

        Ok(Self { api_url, vendor_id })
    }
}
