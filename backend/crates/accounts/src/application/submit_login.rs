//! Submit Login Use Case
//!
//! The login flow: guard, validate, then ask the host to verify the
//! credentials and issue a session.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::outcome::{FormView, Outcome, SessionContext};
use crate::application::validate::validate_login;
use crate::domain::action::FormAction;
use crate::domain::gateway::IdentityGateway;
use crate::domain::submission::LoginSubmission;
use crate::domain::token::TokenAuthority;
use std::collections::BTreeMap;

/// Submit login use case
pub struct SubmitLoginUseCase<G, T>
where
    G: IdentityGateway + Sync,
    T: TokenAuthority,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
    config: Arc<AccountsConfig>,
}

impl<G, T> SubmitLoginUseCase<G, T>
where
    G: IdentityGateway + Sync,
    T: TokenAuthority,
{
    pub fn new(gateway: Arc<G>, tokens: Arc<T>, config: Arc<AccountsConfig>) -> Self {
        Self {
            gateway,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, ctx: &SessionContext, submission: LoginSubmission) -> Outcome {
        // Signed-in visitors are redirected before anything is verified
        // or rendered
        if ctx.is_authenticated() {
            return Outcome::redirect(self.config.dashboard_route.as_str());
        }

        if !self.tokens.verify(FormAction::Login, &submission.csrf_token) {
            tracing::warn!("Login submission failed security verification");
            return Outcome::Render(FormView::security_failure(
                FormAction::Login,
                self.tokens.mint(FormAction::Login),
            ));
        }

        let outcome = validate_login(&submission);
        if !outcome.is_clean() {
            // The login form never echoes submitted values
            return Outcome::Render(FormView::invalid(
                FormAction::Login,
                self.tokens.mint(FormAction::Login),
                outcome,
                BTreeMap::new(),
            ));
        }

        let identifier = submission.username.trim();
        match self
            .gateway
            .sign_in(identifier, &submission.password, submission.remember)
            .await
        {
            Ok(session) => {
                tracing::info!(
                    user_id = %session.user_id,
                    remember = submission.remember,
                    "User signed in"
                );
                Outcome::signed_in(self.config.dashboard_route.as_str(), session)
            }
            Err(err) => {
                tracing::warn!(error = %err.detail(), "Sign-in rejected by identity host");
                Outcome::Render(FormView::gateway_failure(
                    FormAction::Login,
                    self.tokens.mint(FormAction::Login),
                    err.user_message(),
                ))
            }
        }
    }
}
