//! Accept/reject flows over the backend's order endpoints.

use std::sync::Arc;

use vendash_client::Backend;
use vendash_core::{Notice, OrderId};
use vendash_events::{EventBus, RefreshEvent};

use crate::gate::ConfirmationGate;

const ACCEPT_PROMPT: &str = "Accept this order? This will reserve inventory for all items.";
const REJECT_PROMPT: &str = "Reject this order?";
const DEFAULT_REJECT_REASON: &str = "No reason provided";

/// Client-initiated order transitions.
///
/// Every action is gate → PUT → notice → refresh events. There is no local
/// status bookkeeping here; a successful transition invalidates the orders
/// and dashboard views and the next fetch shows the backend's truth.
pub struct OrderActions<B, E, G> {
    backend: Arc<B>,
    bus: Arc<E>,
    gate: G,
}

impl<B, E, G> OrderActions<B, E, G>
where
    B: Backend,
    E: EventBus<RefreshEvent>,
    G: ConfirmationGate,
{
    pub fn new(backend: Arc<B>, bus: Arc<E>, gate: G) -> Self {
        Self { backend, bus, gate }
    }

    /// Accept a pending order. The backend reserves inventory for every line
    /// item as part of the transition.
    ///
    /// Returns `None` when the gate declines; no network call is made.
    pub async fn accept(&self, order: OrderId) -> Option<Notice> {
        if !self.gate.confirm(ACCEPT_PROMPT) {
            tracing::debug!(%order, "accept declined at gate");
            return None;
        }

        let notice = match self.backend.accept_order(order).await {
            Ok(accepted) => {
                tracing::info!(%order, status = accepted.status.label(), "order accepted");
                self.publish_refreshes();
                Notice::success("Order accepted — inventory reserved successfully")
            }
            Err(err) => {
                tracing::warn!(%order, error = %err, "accept failed");
                Notice::error(err.user_message("Failed to accept order"))
            }
        };
        Some(notice)
    }

    /// Reject a pending order with a reason. Blank reasons are replaced by
    /// a stock phrase so the backend always records something.
    ///
    /// Returns `None` when the gate declines; no network call is made.
    pub async fn reject(&self, order: OrderId, reason: &str) -> Option<Notice> {
        if !self.gate.confirm(REJECT_PROMPT) {
            tracing::debug!(%order, "reject declined at gate");
            return None;
        }

        let reason = match reason.trim() {
            "" => DEFAULT_REJECT_REASON,
            trimmed => trimmed,
        };

        let notice = match self.backend.reject_order(order, reason).await {
            Ok(rejected) => {
                tracing::info!(%order, status = rejected.status.label(), reason, "order rejected");
                self.publish_refreshes();
                Notice::info("Order rejected")
            }
            Err(err) => {
                tracing::warn!(%order, error = %err, "reject failed");
                Notice::error(err.user_message("Failed to reject order"))
            }
        };
        Some(notice)
    }

    fn publish_refreshes(&self) {
        for event in [
            RefreshEvent::OrdersInvalidated,
            RefreshEvent::DashboardInvalidated,
        ] {
            if let Err(err) = self.bus.publish(event) {
                tracing::debug!(event = event.as_str(), ?err, "refresh event dropped");
            }
        }
    }
}
