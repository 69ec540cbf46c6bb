//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record sources and the query pipeline into use-case APIs.
//! - Keep callers decoupled from source/synthesis details.

pub mod clients;
pub mod dashboard;
pub mod session;
