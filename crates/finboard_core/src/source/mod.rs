//! Record source contracts and mock implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for client and finance
//!   records.
//! - Isolate synthesis details from service orchestration so a real backend
//!   can slot in behind the same traits.
//!
//! # Invariants
//! - Sources validate every record on the way out instead of handing
//!   malformed data to callers.
//! - Sources return semantic errors (`InvalidRecord`) in addition to
//!   transport errors.

use crate::model::client::{Client, ClientId, ClientValidationError};
use crate::model::finance::{CategoryBreakdown, MonthlyFinancials, Transaction};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod mock_clients;
pub mod mock_finance;

pub use mock_clients::MockClientSource;
pub use mock_finance::MockFinanceSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Error surfaced by record sources.
#[derive(Debug)]
pub enum SourceError {
    /// A synthesized or fetched record failed validation.
    InvalidRecord(ClientValidationError),
    /// Transport-level failure. Unused by the mock sources but part of the
    /// contract a real backend implements.
    Unavailable(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecord(err) => write!(f, "invalid record from source: {err}"),
            Self::Unavailable(message) => write!(f, "record source unavailable: {message}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRecord(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<ClientValidationError> for SourceError {
    fn from(value: ClientValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Supplier of client records.
///
/// Currently backed by a per-call generator; a database or API client would
/// implement the same contract in a real deployment.
pub trait ClientSource {
    /// Returns the full client record set.
    fn fetch_clients(&self) -> SourceResult<Vec<Client>>;

    /// Returns one client by stable ID, or `None` when absent.
    fn fetch_client(&self, id: ClientId) -> SourceResult<Option<Client>>;
}

/// Supplier of transaction history and derived insight series.
pub trait FinanceSource {
    /// Returns `count` ledger entries over the trailing 30 days.
    fn transactions(&self, count: usize) -> SourceResult<Vec<Transaction>>;

    /// Returns the 12 trailing months ending at the current month.
    fn monthly_financials(&self) -> SourceResult<Vec<MonthlyFinancials>>;

    /// Returns the expense share per category; percentages sum to 100.
    fn expense_breakdown(&self) -> SourceResult<Vec<CategoryBreakdown>>;

    /// Returns projections for the next 6 months.
    fn cash_flow_projections(&self) -> SourceResult<Vec<MonthlyFinancials>>;
}
