//! `vendash-search` — global search over the session's cached collections.
//!
//! Pure and synchronous: matching never fetches. The session backfills empty
//! caches before calling in, and the [`Debouncer`] throttles how often typing
//! triggers a search at all.

pub mod debounce;
pub mod index;

pub use debounce::Debouncer;
pub use index::{HitKind, MIN_QUERY_LEN, SearchHit, search};
