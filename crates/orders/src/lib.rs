//! `vendash-orders` — the order lifecycle handler.
//!
//! Accept and reject are the only client-initiated transitions. Both sit
//! behind a confirmation gate, apply no optimistic local state, and leave the
//! authoritative status to the refresh cascade: the backend owns the
//! transition (including the inventory reservation an accept triggers), the
//! client only reflects what it re-fetches.

pub mod actions;
pub mod gate;

pub use actions::OrderActions;
pub use gate::{AutoConfirm, ConfirmationGate};
