//! Explicit session objects for sign-in state.
//!
//! # Responsibility
//! - Hand callers a self-contained credential object on login.
//! - Keep sign-in state out of ambient globals; a session lives exactly as
//!   long as the value the caller holds.
//!
//! # Invariants
//! - No enforcement happens here; checks are presence/format only.
//! - Tokens are opaque and unique per login.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Signed-in user identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Credential object returned by login and passed through call sites.
///
/// Replaces the upstream pattern of stashing a token in global mutable
/// storage; dropping the value ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: Uuid,
    pub user: UserProfile,
}

/// Error for session lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Email lacks `@` or a domain part.
    InvalidEmail(String),
    /// Password is blank.
    EmptyPassword,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "invalid login email: `{value}`"),
            Self::EmptyPassword => write!(f, "password cannot be empty"),
        }
    }
}

impl Error for SessionError {}

/// Signs in with presence/format checks only and mints a fresh session.
///
/// # Errors
/// - `InvalidEmail` when the email lacks `@` or a domain.
/// - `EmptyPassword` when the password is blank.
pub fn login(email: &str, password: &str) -> Result<Session, SessionError> {
    let email = email.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(SessionError::InvalidEmail(email.to_string()));
    }
    if password.trim().is_empty() {
        return Err(SessionError::EmptyPassword);
    }

    // Mock identity derived from the address; a real backend would return
    // the stored profile here.
    let local_part = email.split('@').next().unwrap_or(email);
    Ok(Session {
        token: Uuid::new_v4(),
        user: UserProfile {
            id: Uuid::new_v4(),
            first_name: capitalize(local_part),
            last_name: "User".to_string(),
            email: email.to_string(),
            role: "owner".to_string(),
        },
    })
}

/// Ends a session by consuming it.
pub fn logout(session: Session) {
    drop(session);
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{login, SessionError};

    #[test]
    fn login_mints_unique_tokens() {
        let a = login("pat@studio.test", "secret").unwrap();
        let b = login("pat@studio.test", "secret").unwrap();
        assert_ne!(a.token, b.token);
        assert_eq!(a.user.email, "pat@studio.test");
        assert_eq!(a.user.first_name, "Pat");
    }

    #[test]
    fn login_rejects_malformed_email() {
        assert_eq!(
            login("not-an-email", "secret"),
            Err(SessionError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn login_rejects_blank_password() {
        assert_eq!(
            login("pat@studio.test", "   "),
            Err(SessionError::EmptyPassword)
        );
    }
}
