//! Sort stage of the client list pipeline.
//!
//! # Responsibility
//! - Order a record set by one of the list view's sortable columns.
//!
//! # Invariants
//! - The input slice is never mutated; a fresh vector is returned.
//! - The underlying sort is stable, so equal-key records retain source
//!   order.
//! - A malformed `date_added` sorts at the epoch date instead of faulting.

use crate::model::client::Client;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable columns of the client list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Name,
    Company,
    Revenue,
    Outstanding,
    DateAdded,
}

/// Sort direction toggled by the column headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Returns `clients` ordered by `key` in the given direction.
///
/// Text keys use a case-grouping collation (lowercase comparison with a raw
/// tie-break); a missing company name compares as the empty string and so
/// sorts first ascending. Amount keys use total ordering over `f64`; the
/// date key compares parsed calendar dates.
pub fn sort_clients(clients: &[Client], key: SortKey, direction: SortDirection) -> Vec<Client> {
    let mut sorted = clients.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &Client, b: &Client, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => collate(&a.name, &b.name),
        SortKey::Company => collate(
            a.company_name.as_deref().unwrap_or(""),
            b.company_name.as_deref().unwrap_or(""),
        ),
        SortKey::Revenue => a.total_revenue.total_cmp(&b.total_revenue),
        SortKey::Outstanding => a.outstanding_balance.total_cmp(&b.outstanding_balance),
        SortKey::DateAdded => {
            parse_date_or_epoch(&a.date_added).cmp(&parse_date_or_epoch(&b.date_added))
        }
    }
}

// Rust has no stdlib locale collation; lowercase-first comparison with a raw
// tie-break reproduces the case grouping the list view expects.
fn collate(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

fn parse_date_or_epoch(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .unwrap_or(NaiveDate::default())
}

#[cfg(test)]
mod tests {
    use super::{sort_clients, SortDirection, SortKey};
    use crate::model::client::Client;

    fn client(name: &str, company: Option<&str>, revenue: f64, date_added: &str) -> Client {
        let mut client = Client::new(name, "x@example.test");
        client.company_name = company.map(str::to_string);
        client.total_revenue = revenue;
        client.outstanding_balance = revenue / 10.0;
        client.date_added = date_added.to_string();
        client
    }

    #[test]
    fn sorts_by_name_ascending_without_mutating_input() {
        let clients = vec![
            client("beta", None, 1.0, "2024-01-01"),
            client("Acme", None, 2.0, "2024-01-02"),
            client("acme labs", None, 3.0, "2024-01-03"),
        ];

        let sorted = sort_clients(&clients, SortKey::Name, SortDirection::Asc);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "acme labs", "beta"]);
        // original order untouched
        assert_eq!(clients[0].name, "beta");
    }

    #[test]
    fn missing_company_sorts_first_ascending() {
        let clients = vec![
            client("A", Some("Zeta"), 0.0, "2024-01-01"),
            client("B", None, 0.0, "2024-01-01"),
            client("C", Some("Alpha"), 0.0, "2024-01-01"),
        ];

        let sorted = sort_clients(&clients, SortKey::Company, SortDirection::Asc);
        let names: Vec<&str> = sorted.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn descending_reverses_ascending_order() {
        let clients = vec![
            client("A", None, 100.0, "2024-01-01"),
            client("B", None, 300.0, "2024-02-01"),
            client("C", None, 200.0, "2024-03-01"),
        ];

        for key in [SortKey::Revenue, SortKey::Outstanding, SortKey::DateAdded] {
            let asc = sort_clients(&clients, key, SortDirection::Asc);
            let mut desc = sort_clients(&clients, key, SortDirection::Desc);
            desc.reverse();
            assert_eq!(asc, desc, "asc/desc mismatch for {key:?}");
        }
    }

    #[test]
    fn sort_is_idempotent() {
        let clients = vec![
            client("B", None, 300.0, "2024-02-01"),
            client("A", None, 100.0, "2024-01-01"),
            client("C", None, 200.0, "2024-03-01"),
        ];

        let once = sort_clients(&clients, SortKey::Revenue, SortDirection::Desc);
        let twice = sort_clients(&once, SortKey::Revenue, SortDirection::Desc);
        assert_eq!(once, twice);
    }

    #[test]
    fn equal_keys_retain_source_order() {
        let first = client("First", None, 500.0, "2024-01-01");
        let second = client("Second", None, 500.0, "2024-01-01");
        let clients = vec![first.clone(), second.clone()];

        let sorted = sort_clients(&clients, SortKey::Revenue, SortDirection::Asc);
        assert_eq!(sorted[0].id, first.id);
        assert_eq!(sorted[1].id, second.id);
    }

    #[test]
    fn malformed_date_falls_back_to_epoch() {
        let clients = vec![
            client("Good", None, 0.0, "2024-06-15"),
            client("Bad", None, 0.0, "not-a-date"),
        ];

        let sorted = sort_clients(&clients, SortKey::DateAdded, SortDirection::Asc);
        assert_eq!(sorted[0].name, "Bad");
        assert_eq!(sorted[1].name, "Good");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(sort_clients(&[], SortKey::Name, SortDirection::Asc).is_empty());
    }
}
