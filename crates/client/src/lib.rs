//! `vendash-client` — the remote client for the commerce backend.
//!
//! [`Backend`] is the seam: one async method per REST operation. The real
//! implementation is [`HttpBackend`] over `reqwest`; tests substitute an
//! in-memory fake. No retries, no timeouts anywhere — a failed call surfaces
//! immediately to the caller.

pub mod backend;
pub mod http;

pub use backend::Backend;
pub use http::HttpBackend;
