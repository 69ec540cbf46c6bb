//! Core domain logic for the finboard dashboard.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::{
    Address, Client, ClientId, ClientStatus, ClientValidationError, Contact, Project,
    ProjectStatus,
};
pub use model::finance::{
    CategoryBreakdown, FinancialSummary, MonthlyFinancials, Transaction, TransactionKind,
    TransactionStatus,
};
pub use query::{
    client_statistics, filter_clients, sort_clients, ClientStatistics, SortDirection, SortKey,
    StatusFilter,
};
pub use service::clients::{ClientListQuery, ClientListing, ClientService, ClientServiceError};
pub use service::dashboard::{DashboardService, DashboardServiceError};
pub use service::session::{login, logout, Session, SessionError, UserProfile};
pub use source::{
    ClientSource, FinanceSource, MockClientSource, MockFinanceSource, SourceError, SourceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
