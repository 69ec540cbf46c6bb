//! Client list use-case service.
//!
//! # Responsibility
//! - Run the fetch → aggregate → filter → sort pipeline for list views.
//! - Provide single-record lookup and search/status conveniences.
//!
//! # Invariants
//! - Statistics are always computed over the full unfiltered record set.
//! - The pipeline never mutates the fetched set in place; each stage hands
//!   back a fresh vector.

use crate::model::client::{Client, ClientId, ClientStatus};
use crate::query::{
    client_statistics, filter_clients, sort_clients, ClientStatistics, SortDirection, SortKey,
    StatusFilter,
};
use crate::source::{ClientSource, SourceError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for client use-cases.
#[derive(Debug)]
pub enum ClientServiceError {
    /// Record source failure.
    Source(SourceError),
}

impl Display for ClientServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ClientServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
        }
    }
}

impl From<SourceError> for ClientServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

/// Parameters of one list-view recomputation.
///
/// `Default` matches the list view's initial state: no search text, all
/// statuses, name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientListQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

/// Result envelope for the list pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientListing {
    /// Filtered and sorted records for the table body.
    pub items: Vec<Client>,
    /// Statistics over the full unfiltered set for the header cards.
    pub stats: ClientStatistics,
}

/// Client service facade over record source implementations.
pub struct ClientService<S: ClientSource> {
    source: S,
}

impl<S: ClientSource> ClientService<S> {
    /// Creates a service using the provided record source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs the full list pipeline for one view recomputation.
    ///
    /// # Contract
    /// - Aggregates before filtering, so `stats` reflect every record.
    /// - Filter then sort, both pure over the fetched set.
    pub fn list_clients(&self, query: &ClientListQuery) -> Result<ClientListing, ClientServiceError> {
        let clients = self.source.fetch_clients()?;
        let stats = client_statistics(&clients);

        let filtered = filter_clients(&clients, query.search.as_deref(), query.status);
        let items = sort_clients(&filtered, query.sort_key, query.direction);

        debug!(
            "event=client_list module=service status=ok fetched={} shown={}",
            clients.len(),
            items.len()
        );

        Ok(ClientListing { items, stats })
    }

    /// Gets one client by stable ID.
    pub fn get_client(&self, id: ClientId) -> Result<Option<Client>, ClientServiceError> {
        Ok(self.source.fetch_client(id)?)
    }

    /// Free-text search without status narrowing or reordering.
    pub fn search_clients(&self, text: &str) -> Result<Vec<Client>, ClientServiceError> {
        let clients = self.source.fetch_clients()?;
        Ok(filter_clients(&clients, Some(text), StatusFilter::All))
    }

    /// Status narrowing without search text or reordering.
    pub fn clients_with_status(
        &self,
        status: ClientStatus,
    ) -> Result<Vec<Client>, ClientServiceError> {
        let clients = self.source.fetch_clients()?;
        Ok(filter_clients(&clients, None, StatusFilter::Only(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientListQuery, ClientService};
    use crate::model::client::{Client, ClientStatus};
    use crate::query::{SortDirection, SortKey};
    use crate::source::{ClientSource, SourceResult};
    use uuid::Uuid;

    struct FixedSource(Vec<Client>);

    impl ClientSource for FixedSource {
        fn fetch_clients(&self) -> SourceResult<Vec<Client>> {
            Ok(self.0.clone())
        }

        fn fetch_client(&self, id: Uuid) -> SourceResult<Option<Client>> {
            Ok(self.0.iter().find(|c| c.id == id).cloned())
        }
    }

    fn client(name: &str, status: ClientStatus, revenue: f64) -> Client {
        let mut client = Client::new(name, "x@example.test");
        client.status = status;
        client.total_revenue = revenue;
        client
    }

    #[test]
    fn stats_cover_the_unfiltered_set() {
        let service = ClientService::new(FixedSource(vec![
            client("Acme", ClientStatus::Active, 100.0),
            client("Beta", ClientStatus::Inactive, 300.0),
            client("Acme Labs", ClientStatus::Active, 200.0),
        ]));

        let listing = service
            .list_clients(&ClientListQuery {
                search: Some("acme".to_string()),
                ..ClientListQuery::default()
            })
            .unwrap();

        assert_eq!(listing.items.len(), 2);
        assert_eq!(listing.stats.total_clients, 3);
        assert_eq!(listing.stats.active_clients, 2);
        assert_eq!(listing.stats.total_revenue, 600.0);
    }

    #[test]
    fn filter_then_sort_orders_the_narrowed_set() {
        let service = ClientService::new(FixedSource(vec![
            client("Acme", ClientStatus::Active, 100.0),
            client("Beta", ClientStatus::Active, 300.0),
            client("Acme Labs", ClientStatus::Active, 200.0),
        ]));

        let listing = service
            .list_clients(&ClientListQuery {
                search: Some("acme".to_string()),
                sort_key: SortKey::Revenue,
                direction: SortDirection::Desc,
                ..ClientListQuery::default()
            })
            .unwrap();

        let names: Vec<&str> = listing.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Labs", "Acme"]);
    }
}
