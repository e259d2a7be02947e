//! Stock input validation: the gate before any network call.

use vendash_core::{ApiError, ApiResult};

/// Parse a user-entered stock quantity.
///
/// Accepts a trimmed, base-10, non-negative integer; anything else fails with
/// [`ApiError::Validation`] and the caller must not issue a network call.
pub fn parse_stock_input(raw: &str) -> ApiResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ApiError::validation("Please enter a valid stock quantity"))
}
