//! Client list query pipeline.
//!
//! # Responsibility
//! - Narrow, order and summarize client record sets for list views.
//! - Stay pure: every stage takes a slice and returns a fresh vector.
//!
//! # Invariants
//! - No stage mutates its input.
//! - Filtering and sorting never fail; malformed per-record data degrades
//!   to defined fallbacks instead of aborting the pipeline.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{filter_clients, StatusFilter};
pub use sort::{sort_clients, SortDirection, SortKey};
pub use stats::{client_statistics, ClientStatistics};
