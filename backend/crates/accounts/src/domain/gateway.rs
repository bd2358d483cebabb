//! Identity Gateway Seam
//!
//! The host platform is the only authority over user records, password
//! verification and session issuance. This module defines the narrow
//! interface the flows consume; implementations live in `infra`.

use derive_more::Display;
use kernel::id::UserId;

/// Role assigned to every self-registered account
pub const DEFAULT_ROLE: &str = "subscriber";

/// Which identity attribute an existence query targets
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    #[display("username")]
    Username,
    #[display("email")]
    Email,
}

/// An authenticated session issued by the host.
///
/// Opaque to this crate beyond what the pages need: the cookie value,
/// the owning user, a display name for greetings, and whether the
/// session should outlive the browser.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub token: String,
    pub user_id: UserId,
    pub display_name: String,
    pub remember: bool,
}

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures reported by the identity host
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The host processed the request and said no; the reason text is
    /// already user-facing (wrong password, creation conflict, ...)
    #[error("{0}")]
    Rejected(String),

    /// The host could not be reached or answered with something
    /// unusable; the detail is for logs, not for users
    #[error("The account service is temporarily unavailable. Please try again later.")]
    Unavailable(String),
}

impl GatewayError {
    /// Message for the page-level error area
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Diagnostic detail for logging
    pub fn detail(&self) -> &str {
        match self {
            GatewayError::Rejected(detail) | GatewayError::Unavailable(detail) => detail,
        }
    }
}

/// Identity gateway trait
#[trait_variant::make(IdentityGateway: Send)]
pub trait LocalIdentityGateway {
    /// Check whether an identity attribute is already taken
    async fn exists(&self, kind: IdentityKind, value: &str) -> GatewayResult<bool>;

    /// Create an account; the host hashes the password and owns the record
    async fn create_account(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> GatewayResult<UserId>;

    /// Assign the default role, once, immediately after creation
    async fn assign_default_role(&self, user_id: &UserId) -> GatewayResult<()>;

    /// Verify credentials and issue a session
    async fn sign_in(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> GatewayResult<SessionHandle>;

    /// Resolve a session cookie value to a live session, if any
    async fn current_session(&self, token: &str) -> GatewayResult<Option<SessionHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_verbatim() {
        let err = GatewayError::Rejected("Invalid username or password.".to_string());
        assert_eq!(err.user_message(), "Invalid username or password.");
    }

    #[test]
    fn test_unavailable_hides_detail() {
        let err = GatewayError::Unavailable("connection refused".to_string());
        assert!(!err.user_message().contains("connection refused"));
        assert_eq!(err.detail(), "connection refused");
    }
}
