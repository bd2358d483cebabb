//! Flow Outcomes
//!
//! What a flow decided, expressed as data. The HTTP layer must
//! short-circuit on `Redirect`: once a flow redirects, no page body is
//! emitted.

use std::collections::BTreeMap;

use crate::domain::action::FormAction;
use crate::domain::gateway::SessionHandle;
use crate::domain::validation::{Field, MSG_SECURITY_FAILED, ValidationOutcome};

/// Per-request authentication state.
///
/// Resolved once by the HTTP layer from the session cookie and injected
/// into every flow; there is no ambient "current user".
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub session: Option<SessionHandle>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { session: None }
    }

    pub fn authenticated(session: SessionHandle) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// What the HTTP layer does next
#[derive(Debug)]
pub enum Outcome {
    /// 302 to a fixed site-relative path; `session` is present exactly
    /// when the flow just signed the user in
    Redirect {
        location: String,
        session: Option<SessionHandle>,
    },
    /// 200 with the form view for the host shell to compose
    Render(FormView),
}

impl Outcome {
    pub fn redirect(location: impl Into<String>) -> Self {
        Outcome::Redirect {
            location: location.into(),
            session: None,
        }
    }

    pub fn signed_in(location: impl Into<String>, session: SessionHandle) -> Self {
        Outcome::Redirect {
            location: location.into(),
            session: Some(session),
        }
    }
}

/// Everything the host shell needs to render a credential form
#[derive(Debug)]
pub struct FormView {
    pub action: FormAction,
    /// Fresh token for the next submission
    pub csrf_token: String,
    /// Echo values for pre-filling (REGISTER only; LOGIN never echoes)
    pub values: BTreeMap<Field, String>,
    /// Inline, per-field messages
    pub field_errors: BTreeMap<Field, String>,
    /// Page-level message (security or gateway failure); never set
    /// together with field errors
    pub top_error: Option<String>,
}

impl FormView {
    /// The empty form
    pub fn empty(action: FormAction, csrf_token: String) -> Self {
        Self {
            action,
            csrf_token,
            values: BTreeMap::new(),
            field_errors: BTreeMap::new(),
            top_error: None,
        }
    }

    /// Token verification failed: one page-level message, nothing else
    pub fn security_failure(action: FormAction, csrf_token: String) -> Self {
        Self {
            top_error: Some(MSG_SECURITY_FAILED.to_string()),
            ..Self::empty(action, csrf_token)
        }
    }

    /// The host rejected the operation: its reason, page-level
    pub fn gateway_failure(action: FormAction, csrf_token: String, reason: String) -> Self {
        Self {
            top_error: Some(reason),
            ..Self::empty(action, csrf_token)
        }
    }

    /// Field errors with optional echo values
    pub fn invalid(
        action: FormAction,
        csrf_token: String,
        outcome: ValidationOutcome,
        values: BTreeMap<Field, String>,
    ) -> Self {
        Self {
            values,
            field_errors: outcome.into_errors(),
            ..Self::empty(action, csrf_token)
        }
    }
}
