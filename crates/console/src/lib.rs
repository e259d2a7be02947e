//! `vendash-console` — session state, view assembly and text rendering.
//!
//! The session owns the in-memory caches and talks to the backend through
//! the [`vendash_client::Backend`] seam; everything it derives for display
//! goes through pure functions so tests never need a terminal or a network.

pub mod config;
pub mod notify;
pub mod prompt;
pub mod render;
pub mod session;
pub mod view;

pub use config::Config;
pub use notify::{Notifier, PrintNotifier};
pub use prompt::PromptGate;
pub use session::Session;
pub use view::{DashboardView, LOW_STOCK_THRESHOLD, low_stock_notices};
