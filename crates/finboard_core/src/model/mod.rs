//! Domain model for client relationships and financial records.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one record shape shared by the list, detail and insight views.
//!
//! # Invariants
//! - Every client is identified by a stable `ClientId`.
//! - Monetary amounts are never negative after validation.

pub mod client;
pub mod finance;
