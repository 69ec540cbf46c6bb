//! Client domain model.
//!
//! # Responsibility
//! - Define the canonical client record shared by list/detail/insight views.
//! - Provide presence/format validation for write and read-back paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another client.
//! - `status` is always one of the three enumerated values.
//! - `total_revenue` and `outstanding_balance` are non-negative after
//!   `validate()`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every client record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ClientId = Uuid;

// Loose check only: the record source is mock data, so anything with a
// local part, `@` and a dotted domain passes.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Relationship state of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Currently billed and engaged.
    Active,
    /// Dormant relationship, kept for history.
    Inactive,
    /// Not yet converted to paying work.
    Prospect,
}

/// Lifecycle state of an embedded project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

/// Postal address with all sub-fields optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// Named person at a client. Embedded sub-record with no lifecycle of its
/// own; it lives and dies with the owning client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Engagement tracked under a client. Embedded sub-record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub status: ProjectStatus,
    /// ISO `YYYY-MM-DD`.
    pub start_date: String,
    /// Set once the project has wrapped up.
    pub end_date: Option<String>,
    pub value: f64,
}

/// Canonical client record.
///
/// Field names serialize in camelCase to match the external JSON schema the
/// record source speaks. `date_added` stays a string on the wire so a
/// malformed value degrades to a per-record sort fallback instead of
/// rejecting the whole record set at decode time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Stable global ID used for detail lookup and future sync mapping.
    pub id: ClientId,
    pub name: String,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub notes: Option<String>,
    pub payment_terms: Option<String>,
    pub status: ClientStatus,
    /// ISO `YYYY-MM-DD` calendar date the relationship was recorded.
    pub date_added: String,
    pub contacts: Vec<Contact>,
    pub projects: Vec<Project>,
    /// Short free-form labels, deduplicated by the source.
    pub tags: Vec<String>,
    /// Lifetime billed revenue. Never negative.
    pub total_revenue: f64,
    /// Unpaid portion of billed revenue. Never negative.
    pub outstanding_balance: f64,
}

/// Validation error for client presence/format checks.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientValidationError {
    /// Display name is required.
    EmptyName,
    /// Email must contain `@` and a domain part.
    InvalidEmail(String),
    /// Monetary fields must be non-negative.
    NegativeAmount { field: &'static str, value: f64 },
}

impl Display for ClientValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "client name cannot be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid client email: `{value}`"),
            Self::NegativeAmount { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
        }
    }
}

impl Error for ClientValidationError {}

impl Client {
    /// Creates a new prospect with a generated stable ID.
    ///
    /// # Invariants
    /// - Optional fields start as `None`, collections start empty.
    /// - Amounts start at zero; `date_added` is today's calendar date.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, email)
    }

    /// Creates a client with a caller-provided stable ID.
    ///
    /// Used by record sources where identity already exists externally.
    pub fn with_id(
        id: ClientId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company_name: None,
            email: email.into(),
            phone: None,
            address: None,
            website: None,
            industry: None,
            notes: None,
            payment_terms: None,
            status: ClientStatus::Prospect,
            date_added: chrono::Utc::now().date_naive().to_string(),
            contacts: Vec::new(),
            projects: Vec::new(),
            tags: Vec::new(),
            total_revenue: 0.0,
            outstanding_balance: 0.0,
        }
    }

    /// Checks presence/format invariants on this record.
    ///
    /// # Errors
    /// - `EmptyName` when the display name is blank.
    /// - `InvalidEmail` when the email lacks `@` or a domain.
    /// - `NegativeAmount` when revenue or balance is below zero.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ClientValidationError::InvalidEmail(self.email.clone()));
        }
        if self.total_revenue < 0.0 {
            return Err(ClientValidationError::NegativeAmount {
                field: "totalRevenue",
                value: self.total_revenue,
            });
        }
        if self.outstanding_balance < 0.0 {
            return Err(ClientValidationError::NegativeAmount {
                field: "outstandingBalance",
                value: self.outstanding_balance,
            });
        }
        Ok(())
    }

    /// Returns whether this client counts toward active statistics.
    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, ClientStatus, ClientValidationError};

    #[test]
    fn new_client_starts_as_prospect_with_defaults() {
        let client = Client::new("Acme", "hello@acme.test");

        assert!(!client.id.is_nil());
        assert_eq!(client.status, ClientStatus::Prospect);
        assert_eq!(client.company_name, None);
        assert!(client.contacts.is_empty());
        assert!(client.projects.is_empty());
        assert!(client.tags.is_empty());
        assert_eq!(client.total_revenue, 0.0);
        assert_eq!(client.outstanding_balance, 0.0);
        assert!(!client.is_active());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let client = Client::new("   ", "hello@acme.test");
        assert_eq!(client.validate(), Err(ClientValidationError::EmptyName));
    }

    #[test]
    fn validate_rejects_email_without_domain() {
        for bad in ["plainaddress", "name@", "name@host", "two words@x.y"] {
            let client = Client::new("Acme", bad);
            assert!(
                matches!(client.validate(), Err(ClientValidationError::InvalidEmail(_))),
                "expected `{bad}` to be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_negative_amounts() {
        let mut client = Client::new("Acme", "hello@acme.test");
        client.total_revenue = -1.0;
        assert!(matches!(
            client.validate(),
            Err(ClientValidationError::NegativeAmount {
                field: "totalRevenue",
                ..
            })
        ));

        client.total_revenue = 0.0;
        client.outstanding_balance = -0.5;
        assert!(matches!(
            client.validate(),
            Err(ClientValidationError::NegativeAmount {
                field: "outstandingBalance",
                ..
            })
        ));
    }
}
