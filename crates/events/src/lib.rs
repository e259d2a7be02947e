//! `vendash-events` — the refresh cascade as an explicit event mechanism.
//!
//! Mutations (stock update, order accept/reject) do not reach into views to
//! refresh them. They publish a [`RefreshEvent`]; interested views subscribe
//! and re-fetch. This decouples cause from effect and keeps the cascade
//! testable.

pub mod bus;
pub mod in_memory_bus;
pub mod refresh;

pub use bus::{EventBus, Subscription};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use refresh::RefreshEvent;
