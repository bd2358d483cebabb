//! Submit Register Use Case
//!
//! The registration flow: guard, cumulative validation, then account
//! creation, default role assignment and auto sign-in through the host.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::outcome::{FormView, Outcome, SessionContext};
use crate::application::validate::validate_register;
use crate::domain::action::FormAction;
use crate::domain::gateway::{GatewayError, IdentityGateway};
use crate::domain::submission::RegisterSubmission;
use crate::domain::token::TokenAuthority;
use crate::domain::validation::{Field, ValidationOutcome};

/// Submit register use case
pub struct SubmitRegisterUseCase<G, T>
where
    G: IdentityGateway + Sync,
    T: TokenAuthority,
{
    gateway: Arc<G>,
    tokens: Arc<T>,
    config: Arc<AccountsConfig>,
}

impl<G, T> SubmitRegisterUseCase<G, T>
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

    pub async fn execute(&self, ctx: &SessionContext, submission: RegisterSubmission) -> Outcome {
        if ctx.is_authenticated() {
            return Outcome::redirect(self.config.dashboard_route.as_str());
        }

        if !self.tokens.verify(FormAction::Register, &submission.csrf_token) {
            tracing::warn!("Registration submission failed security verification");
            return Outcome::Render(FormView::security_failure(
                FormAction::Register,
                self.tokens.mint(FormAction::Register),
            ));
        }

        let outcome = match validate_register(self.gateway.as_ref(), &submission).await {
            Ok(outcome) => outcome,
            Err(err) => return self.gateway_failure(&submission, err),
        };

        if !outcome.is_clean() {
            let values = echo_values(&outcome, &submission);
            return Outcome::Render(FormView::invalid(
                FormAction::Register,
                self.tokens.mint(FormAction::Register),
                outcome,
                values,
            ));
        }

        let username = submission.username.trim();
        let email = submission.email.trim().to_lowercase();

        let user_id = match self
            .gateway
            .create_account(username, &submission.password, &email)
            .await
        {
            Ok(user_id) => user_id,
            Err(err) => return self.gateway_failure(&submission, err),
        };

        if let Err(err) = self.gateway.assign_default_role(&user_id).await {
            return self.gateway_failure(&submission, err);
        }

        // Auto sign-in; "remember me" exists only on the login form
        match self
            .gateway
            .sign_in(username, &submission.password, false)
            .await
        {
            Ok(session) => {
                tracing::info!(user_id = %session.user_id, "User registered and signed in");
                Outcome::signed_in(self.config.dashboard_route.as_str(), session)
            }
            Err(err) => self.gateway_failure(&submission, err),
        }
    }

    /// Page-level failure still keeps the visitor's username and email
    /// in the form
    fn gateway_failure(&self, submission: &RegisterSubmission, err: GatewayError) -> Outcome {
        tracing::warn!(error = %err.detail(), "Registration rejected by identity host");
        let mut view = FormView::gateway_failure(
            FormAction::Register,
            self.tokens.mint(FormAction::Register),
            err.user_message(),
        );
        view.values = raw_echo(submission);
        Outcome::Render(view)
    }
}

/// Echo values when validation never got a say: the submitted username
/// and email, normalized for display
fn raw_echo(submission: &RegisterSubmission) -> BTreeMap<Field, String> {
    let mut values = BTreeMap::new();
    let username = submission.username.trim();
    if !username.is_empty() {
        values.insert(Field::Username, username.to_string());
    }
    let email = submission.email.trim().to_lowercase();
    if !email.is_empty() {
        values.insert(Field::Email, email);
    }
    values
}

/// Pre-fill values for the re-rendered form: the normalized value where
/// the field passed, the raw submitted text otherwise. Only username and
/// email are ever echoed.
fn echo_values(
    outcome: &ValidationOutcome,
    submission: &RegisterSubmission,
) -> BTreeMap<Field, String> {
    let mut values = BTreeMap::new();
    for (field, raw) in [
        (Field::Username, &submission.username),
        (Field::Email, &submission.email),
    ] {
        let value = outcome
            .normalized(field)
            .map(str::to_string)
            .unwrap_or_else(|| raw.clone());
        if !value.is_empty() {
            values.insert(field, value);
        }
    }
    values
}
