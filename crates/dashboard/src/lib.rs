//! `vendash-dashboard` — the aggregation engine.
//!
//! Pure, deterministic transforms from fetched backend data to one
//! dashboard-level view: per-vendor summaries merged into an aggregate,
//! orders bucketed into chart-ready series. No IO, no clocks — functions
//! that depend on "today" take it as a parameter.

pub mod aggregate;
pub mod revenue;

pub use aggregate::{AggregateSummary, build_aggregate_summary, count_by_status};
pub use revenue::{RevenueBucket, bucket_revenue_by_day};
