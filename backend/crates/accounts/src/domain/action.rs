//! Form Action
//!
//! The two state-changing pages this module owns. Every form token is
//! scoped to exactly one action, so a token minted for the login page is
//! worthless on the registration page.

use derive_more::Display;

/// Which credential form a submission targets
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    #[display("login")]
    Login,
    #[display("register")]
    Register,
}

impl FormAction {
    /// Stable identifier used in page bodies
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormAction::Login => "login",
            FormAction::Register => "register",
        }
    }

    /// Token scope string for this action
    pub const fn scope(&self) -> &'static str {
        match self {
            FormAction::Login => "login_action",
            FormAction::Register => "register_action",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scopes_are_distinct() {
        assert_ne!(FormAction::Login.scope(), FormAction::Register.scope());
    }

    #[test]
    fn test_display() {
        assert_eq!(FormAction::Login.to_string(), "login");
        assert_eq!(FormAction::Register.to_string(), "register");
    }
}
