//! Credential Submissions
//!
//! One immutable, typed record per action, built by the presentation
//! layer after presence-checking the raw form keys. Validation never
//! mutates a submission; it only derives outputs.

use std::fmt;

/// A login form submission
#[derive(Clone)]
pub struct LoginSubmission {
    /// User name or email; resolution is the identity host's job
    pub username: String,
    /// Opaque; leading and trailing spaces are significant
    pub password: String,
    /// "Remember me" checkbox
    pub remember: bool,
    /// Raw token accompanying the submission (untrusted)
    pub csrf_token: String,
}

/// A registration form submission
#[derive(Clone)]
pub struct RegisterSubmission {
    pub username: String,
    pub email: String,
    /// Opaque; never trimmed
    pub password: String,
    pub confirm_password: String,
    /// Raw token accompanying the submission (untrusted)
    pub csrf_token: String,
}

impl fmt::Debug for LoginSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginSubmission")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}

impl fmt::Debug for RegisterSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterSubmission")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redaction() {
        let submission = RegisterSubmission {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            csrf_token: "tok".to_string(),
        };
        let debug = format!("{:?}", submission);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Secret123"));
    }
}
