//! Aggregate stage of the client list pipeline.
//!
//! # Responsibility
//! - Derive the four summary figures shown above the client list.
//!
//! # Invariants
//! - Computed over the full unfiltered record set, never the filtered view.
//! - Pure function, recomputed on every invocation.

use crate::model::client::Client;
use serde::{Deserialize, Serialize};

/// Summary statistics over a full client record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatistics {
    pub total_clients: usize,
    pub active_clients: usize,
    pub total_revenue: f64,
    pub outstanding_balance: f64,
}

/// Folds a record set into its summary statistics.
pub fn client_statistics(clients: &[Client]) -> ClientStatistics {
    clients.iter().fold(ClientStatistics::default(), |mut acc, client| {
        acc.total_clients += 1;
        if client.is_active() {
            acc.active_clients += 1;
        }
        acc.total_revenue += client.total_revenue;
        acc.outstanding_balance += client.outstanding_balance;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::client_statistics;
    use crate::model::client::{Client, ClientStatus};

    fn client(status: ClientStatus, revenue: f64, outstanding: f64) -> Client {
        let mut client = Client::new("X", "x@example.test");
        client.status = status;
        client.total_revenue = revenue;
        client.outstanding_balance = outstanding;
        client
    }

    #[test]
    fn empty_set_yields_zeroes() {
        let stats = client_statistics(&[]);
        assert_eq!(stats.total_clients, 0);
        assert_eq!(stats.active_clients, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.outstanding_balance, 0.0);
    }

    #[test]
    fn counts_and_sums_cover_all_statuses() {
        let clients = vec![
            client(ClientStatus::Active, 1000.0, 100.0),
            client(ClientStatus::Active, 2000.0, 0.0),
            client(ClientStatus::Inactive, 500.0, 50.0),
            client(ClientStatus::Prospect, 0.0, 0.0),
        ];

        let stats = client_statistics(&clients);
        assert_eq!(stats.total_clients, 4);
        assert_eq!(stats.active_clients, 2);
        assert_eq!(stats.total_revenue, 3500.0);
        assert_eq!(stats.outstanding_balance, 150.0);
    }
}
