//! `vendash-inventory` — the inventory sync reconciler.
//!
//! The richest flow in the client: a stock edit is validated, written to the
//! backend, and then reconciled against the per-seller-app sync outcomes the
//! backend reports for that record. Each inventory record moves through its
//! own little state machine independently; there is no cross-record
//! coordination because each operates on a distinct key.

pub mod cache;
pub mod input;
pub mod reconciler;

pub use cache::SyncStatusCache;
pub use input::parse_stock_input;
pub use reconciler::{StockReconciler, UpdatePhase, classify_sync};
