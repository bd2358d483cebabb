//! Form Page Use Case
//!
//! Handles the non-submission paths of both credential pages: an
//! authenticated visitor is redirected before any page output, everyone
//! else gets the empty form with a fresh token.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::outcome::{FormView, Outcome, SessionContext};
use crate::domain::action::FormAction;
use crate::domain::token::TokenAuthority;

/// Form page use case
pub struct FormPageUseCase<T>
where
    T: TokenAuthority,
{
    tokens: Arc<T>,
    config: Arc<AccountsConfig>,
}

impl<T> FormPageUseCase<T>
where
    T: TokenAuthority,
{
    pub fn new(tokens: Arc<T>, config: Arc<AccountsConfig>) -> Self {
        Self { tokens, config }
    }

    pub fn execute(&self, action: FormAction, ctx: &SessionContext) -> Outcome {
        if ctx.is_authenticated() {
            return Outcome::redirect(self.config.dashboard_route.as_str());
        }

        Outcome::Render(FormView::empty(action, self.tokens.mint(action)))
    }
}
