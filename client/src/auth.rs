//! Authentication service boundary.
//!
//! The transport (HTTP, mock, whatever the shell wires up) lives outside
//! this crate; here is the contract it fulfills and the data that crosses it.

use async_trait::async_trait;
use parley_engine::UserId;
use serde::{Deserialize, Serialize};

/// Rejection message the service sends when the address is taken. The
/// signup flow pattern-matches it to flag the email field.
pub const EMAIL_EXISTS_MESSAGE: &str = "email address already exists";

/// What a successful signup grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_id: UserId,
    pub user_name: String,
    pub token: String,
}

/// The failure descriptor a signup request can come back with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRejection {
    pub message: String,
}

impl SignupRejection {
    /// Create a rejection with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Whether this rejection means the email address is already registered.
    pub fn email_exists(&self) -> bool {
        self.message == EMAIL_EXISTS_MESSAGE
    }
}

/// The service answered: either credentials or a business rejection.
/// Transport failures are [`AuthError`], not an outcome.
pub type SignupOutcome = std::result::Result<Credentials, SignupRejection>;

/// Transport-level authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth service unreachable: {0}")]
    Unreachable(String),

    #[error("malformed auth response: {0}")]
    MalformedResponse(String),
}

/// The authentication service the host shell provides.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account.
    async fn signup(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<SignupOutcome, AuthError>;
}
