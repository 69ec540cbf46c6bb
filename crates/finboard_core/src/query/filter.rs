//! Filter stage of the client list pipeline.
//!
//! # Responsibility
//! - Narrow a record set by free-text search and by exact status match.
//!
//! # Invariants
//! - A blank query matches every record.
//! - Absent optional fields never match and never fault.

use crate::model::client::{Client, ClientStatus};
use serde::{Deserialize, Serialize};

/// Status predicate for the list view's status dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Pass every record regardless of status.
    #[default]
    All,
    /// Pass only records whose status equals the given value.
    Only(ClientStatus),
}

impl StatusFilter {
    fn matches(self, client: &Client) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => client.status == status,
        }
    }
}

/// Returns the subset of `clients` matching the search text and status.
///
/// The search is a case-insensitive substring match over name, company name
/// and email; `None` or whitespace-only text matches everything. The input
/// slice is left untouched.
pub fn filter_clients(
    clients: &[Client],
    search: Option<&str>,
    status: StatusFilter,
) -> Vec<Client> {
    let needle = search
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    clients
        .iter()
        .filter(|client| status.matches(client))
        .filter(|client| match &needle {
            None => true,
            Some(needle) => matches_search(client, needle),
        })
        .cloned()
        .collect()
}

fn matches_search(client: &Client, lowercase_needle: &str) -> bool {
    client.name.to_lowercase().contains(lowercase_needle)
        || client
            .company_name
            .as_deref()
            .is_some_and(|company| company.to_lowercase().contains(lowercase_needle))
        || client.email.to_lowercase().contains(lowercase_needle)
}
