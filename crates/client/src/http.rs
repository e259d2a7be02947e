//! `reqwest`-backed implementation of [`Backend`].

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use vendash_core::{
    ApiError, ApiResult, DashboardSummary, HealthReport, InventoryId, InventoryRecord,
    NewInventory, Order, OrderId, RejectRequest, SellerApp, SellerAppId, SyncStatus, SyncedItem,
    Vendor, VendorId,
};

use crate::backend::Backend;

/// HTTP client for the backend REST surface.
///
/// Thin: URL assembly, JSON codec, error normalization. Callers own all
/// policy (what to show the user, what to refresh).
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(path, "GET");
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode("GET", path, resp).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "POST");
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode("POST", path, resp).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(path, "PUT");
        let resp = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        decode("PUT", path, resp).await
    }
}

/// Decode a response: 2xx bodies as `T`, everything else as [`ApiError::Http`]
/// carrying the backend's `message` when one can be parsed.
async fn decode<T>(verb: &str, path: &str, resp: reqwest::Response) -> ApiResult<T>
where
    T: DeserializeOwned,
{
    let status = resp.status();
    if status.is_success() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::network(format!("decoding {verb} {path}: {e}")));
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::http(
        status.as_u16(),
        Some(error_message(verb, path, status.as_u16(), &body)),
    ))
}

/// Extract the human-readable message from an error body, falling back to
/// `"<VERB> <path> failed: <status>"` when the body is absent or unparseable.
fn error_message(verb: &str, path: &str, status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("{verb} {path} failed: {status}"))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_vendors(&self) -> ApiResult<Vec<Vendor>> {
        self.get("/api/vendors").await
    }

    async fn dashboard_summary(&self, vendor: VendorId) -> ApiResult<DashboardSummary> {
        self.get(&format!("/api/dashboard/summary/{vendor}")).await
    }

    async fn vendor_inventory(&self, vendor: VendorId) -> ApiResult<Vec<InventoryRecord>> {
        self.get(&format!("/api/inventory/vendor/{vendor}")).await
    }

    async fn create_inventory(&self, body: &NewInventory) -> ApiResult<InventoryRecord> {
        self.post("/api/inventory", body).await
    }

    async fn sync_status(&self, inventory: InventoryId) -> ApiResult<Vec<SyncStatus>> {
        self.get(&format!("/api/inventory/{inventory}/sync-status"))
            .await
    }

    async fn sync_vendor_inventory(&self, vendor: VendorId) -> ApiResult<Vec<InventoryRecord>> {
        self.post(&format!("/api/inventory/sync/{vendor}"), &serde_json::json!({}))
            .await
    }

    async fn list_orders(&self) -> ApiResult<Vec<Order>> {
        self.get("/api/orders").await
    }

    async fn vendor_orders(&self, vendor: VendorId) -> ApiResult<Vec<Order>> {
        self.get(&format!("/api/orders/vendor/{vendor}")).await
    }

    async fn accept_order(&self, order: OrderId) -> ApiResult<Order> {
        self.put(&format!("/api/orders/{order}/accept"), &serde_json::json!({}))
            .await
    }

    async fn reject_order(&self, order: OrderId, reason: &str) -> ApiResult<Order> {
        let body = RejectRequest {
            reason: reason.to_string(),
        };
        self.put(&format!("/api/orders/{order}/reject"), &body).await
    }

    async fn list_seller_apps(&self) -> ApiResult<Vec<SellerApp>> {
        self.get("/api/seller-apps").await
    }

    async fn vendor_seller_apps(&self, vendor: VendorId) -> ApiResult<Vec<SellerApp>> {
        self.get(&format!("/api/seller-apps/vendor/{vendor}")).await
    }

    async fn seller_app_health(&self, app: SellerAppId) -> ApiResult<HealthReport> {
        self.get(&format!("/api/seller-apps/{app}/health")).await
    }

    async fn seller_app_inventory(&self, app: SellerAppId) -> ApiResult<Vec<SyncedItem>> {
        self.get(&format!("/api/seller-apps/{app}/inventory")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_message_field() {
        let msg = error_message("POST", "/api/inventory", 409, r#"{"message": "Outlet is closed"}"#);
        assert_eq!(msg, "Outlet is closed");
    }

    #[test]
    fn error_message_falls_back_on_empty_body() {
        let msg = error_message("GET", "/api/vendors", 503, "");
        assert_eq!(msg, "GET /api/vendors failed: 503");
    }

    #[test]
    fn error_message_falls_back_on_non_json_body() {
        let msg = error_message("PUT", "/api/orders/9/accept", 500, "<html>oops</html>");
        assert_eq!(msg, "PUT /api/orders/9/accept failed: 500");
    }

    #[test]
    fn error_message_falls_back_when_message_field_missing() {
        let msg = error_message("POST", "/api/inventory", 400, r#"{"error": "Bad Request"}"#);
        assert_eq!(msg, "POST /api/inventory failed: 400");
    }

    #[test]
    fn base_url_is_normalized() {
        let backend = HttpBackend::new("http://localhost:8080/");
        assert_eq!(backend.base_url(), "http://localhost:8080");
        assert_eq!(backend.url("/api/vendors"), "http://localhost:8080/api/vendors");
    }
}
