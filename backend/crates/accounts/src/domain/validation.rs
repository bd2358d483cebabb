//! Validation Rules
//!
//! Pure, per-field rules and the [`ValidationOutcome`] they produce.
//! The REGISTER rule set also needs the host's existence queries; that
//! composition lives in the application layer (`application::validate`).

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::submission::LoginSubmission;

/// Minimum password length for new accounts
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum total email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of the local part of an email
const EMAIL_LOCAL_MAX_LENGTH: usize = 64;

// User-facing messages. The wording is part of the page contract.
pub const MSG_SECURITY_FAILED: &str = "Security verification failed. Please try again.";
pub const MSG_IDENTIFIER_REQUIRED: &str = "Please enter your username or email.";
pub const MSG_LOGIN_PASSWORD_REQUIRED: &str = "Please enter your password.";
pub const MSG_USERNAME_REQUIRED: &str = "Please enter a username.";
pub const MSG_USERNAME_TAKEN: &str = "This username is already taken.";
pub const MSG_EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const MSG_EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MSG_EMAIL_REGISTERED: &str = "This email is already registered.";
pub const MSG_PASSWORD_REQUIRED: &str = "Please enter a password.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";
pub const MSG_PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Named form fields across both actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
        }
    }
}

/// Result of running a rule set over one submission.
///
/// Invariant: `errors` empty ⇔ the submission may proceed to the identity
/// host. A field appears in `normalized` only when it passed, and
/// passwords never do.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    normalized: BTreeMap<Field, String>,
    errors: BTreeMap<Field, String>,
}

impl ValidationOutcome {
    /// Record a passing field with its normalized value
    pub fn accept(&mut self, field: Field, value: impl Into<String>) {
        self.normalized.insert(field, value.into());
    }

    /// Record a failing field with its user-facing message
    pub fn reject(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// True when no field carries an error
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn normalized(&self, field: Field) -> Option<&str> {
        self.normalized.get(&field).map(String::as_str)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<Field, String> {
        self.errors
    }
}

/// LOGIN rules: both fields required, nothing else.
///
/// First-stop: evaluation ends at the first failing rule. The password
/// is opaque and never trimmed.
pub fn validate_login(submission: &LoginSubmission) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();

    let username = submission.username.trim();
    if username.is_empty() {
        outcome.reject(Field::Username, MSG_IDENTIFIER_REQUIRED);
        return outcome;
    }
    outcome.accept(Field::Username, username);

    if submission.password.is_empty() {
        outcome.reject(Field::Password, MSG_LOGIN_PASSWORD_REQUIRED);
    }

    outcome
}

/// Basic email syntax check.
///
/// Deliberately simple: real verification belongs to the host's email
/// confirmation. Accepts exactly one `@`, a bounded local part, and a
/// dotted domain of ASCII alphanumerics, dots and hyphens.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX_LENGTH {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || local.len() > EMAIL_LOCAL_MAX_LENGTH {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(username: &str, password: &str) -> LoginSubmission {
        LoginSubmission {
            username: username.to_string(),
            password: password.to_string(),
            remember: false,
            csrf_token: String::new(),
        }
    }

    #[test]
    fn test_login_valid() {
        let outcome = validate_login(&login("alice", "Secret123"));
        assert!(outcome.is_clean());
        assert_eq!(outcome.normalized(Field::Username), Some("alice"));
    }

    #[test]
    fn test_login_username_trimmed() {
        let outcome = validate_login(&login("  alice  ", "pw"));
        assert_eq!(outcome.normalized(Field::Username), Some("alice"));
    }

    #[test]
    fn test_login_missing_username_stops_evaluation() {
        let outcome = validate_login(&login("   ", ""));
        assert_eq!(outcome.error(Field::Username), Some(MSG_IDENTIFIER_REQUIRED));
        // First-stop: the password rule never ran
        assert_eq!(outcome.error(Field::Password), None);
    }

    #[test]
    fn test_login_missing_password() {
        let outcome = validate_login(&login("alice", ""));
        assert_eq!(
            outcome.error(Field::Password),
            Some(MSG_LOGIN_PASSWORD_REQUIRED)
        );
    }

    #[test]
    fn test_login_password_not_trimmed() {
        // Whitespace-only passwords are opaque, not empty
        let outcome = validate_login(&login("alice", "  "));
        assert!(outcome.is_clean());
    }

    #[test]
    fn test_email_valid() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.co.jp"));
        assert!(is_valid_email("user+tag@example.com"));
    }

    #[test]
    fn test_email_invalid() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.com."));
    }

    #[test]
    fn test_email_length_caps() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&long_local));

        let long_total = format!("a@{}.com", "b".repeat(260));
        assert!(!is_valid_email(&long_total));
    }
}
