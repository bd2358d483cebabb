//! HTTP Handlers

use axum::Json;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, Response as HttpResponse, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::outcome::{Outcome, SessionContext};
use crate::application::{FormPageUseCase, SubmitLoginUseCase, SubmitRegisterUseCase};
use crate::domain::action::FormAction;
use crate::domain::gateway::IdentityGateway;
use crate::domain::token::TokenAuthority;
use crate::error::{AccountsError, AccountsResult};
use crate::presentation::dto::{FormPageBody, LoginForm, RegisterForm};

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<G, T>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    pub gateway: Arc<G>,
    pub tokens: Arc<T>,
    pub config: Arc<AccountsConfig>,
}

/// Resolve the request's session cookie to a [`SessionContext`].
///
/// A gateway failure during the lookup degrades to the anonymous flow
/// instead of a 500; the host being down should land visitors on the
/// login page, not an error page.
pub async fn session_context<G>(
    gateway: &G,
    config: &AccountsConfig,
    headers: &HeaderMap,
) -> SessionContext
where
    G: IdentityGateway + Sync,
{
    let Some(token) = platform::cookie::extract_cookie(headers, &config.session_cookie_name)
    else {
        return SessionContext::anonymous();
    };

    match gateway.current_session(&token).await {
        Ok(Some(session)) => SessionContext::authenticated(session),
        Ok(None) => SessionContext::anonymous(),
        Err(err) => {
            tracing::warn!(
                error = %err.detail(),
                "Session lookup failed; treating request as anonymous"
            );
            SessionContext::anonymous()
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<G, T>(
    State(state): State<AccountsAppState<G, T>>,
    headers: HeaderMap,
) -> AccountsResult<Response>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    let ctx = session_context(state.gateway.as_ref(), &state.config, &headers).await;
    let use_case = FormPageUseCase::new(state.tokens.clone(), state.config.clone());
    respond(use_case.execute(FormAction::Login, &ctx), &state.config)
}

/// POST /login
///
/// Processed as a submission only when the `login_submit` marker key is
/// present; any other POST renders like a GET.
pub async fn login_submit<G, T>(
    State(state): State<AccountsAppState<G, T>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AccountsResult<Response>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    let ctx = session_context(state.gateway.as_ref(), &state.config, &headers).await;

    if !form.is_submission() {
        let use_case = FormPageUseCase::new(state.tokens.clone(), state.config.clone());
        return respond(use_case.execute(FormAction::Login, &ctx), &state.config);
    }

    let use_case = SubmitLoginUseCase::new(
        state.gateway.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let outcome = use_case.execute(&ctx, form.into_submission()).await;
    respond(outcome, &state.config)
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page<G, T>(
    State(state): State<AccountsAppState<G, T>>,
    headers: HeaderMap,
) -> AccountsResult<Response>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    let ctx = session_context(state.gateway.as_ref(), &state.config, &headers).await;
    let use_case = FormPageUseCase::new(state.tokens.clone(), state.config.clone());
    respond(use_case.execute(FormAction::Register, &ctx), &state.config)
}

/// POST /register
pub async fn register_submit<G, T>(
    State(state): State<AccountsAppState<G, T>>,
    headers: HeaderMap,
    Form(form): Form<RegisterForm>,
) -> AccountsResult<Response>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    let ctx = session_context(state.gateway.as_ref(), &state.config, &headers).await;

    if !form.is_submission() {
        let use_case = FormPageUseCase::new(state.tokens.clone(), state.config.clone());
        return respond(use_case.execute(FormAction::Register, &ctx), &state.config);
    }

    let use_case = SubmitRegisterUseCase::new(
        state.gateway.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let outcome = use_case.execute(&ctx, form.into_submission()).await;
    respond(outcome, &state.config)
}

// ============================================================================
// Outcome conversion
// ============================================================================

/// Convert a flow outcome into a response. Redirects short-circuit with
/// an empty body; renders carry the form view for the host shell.
fn respond(outcome: Outcome, config: &AccountsConfig) -> AccountsResult<Response> {
    match outcome {
        Outcome::Redirect { location, session } => {
            let mut builder = HttpResponse::builder()
                .status(StatusCode::FOUND)
                .header(header::LOCATION, location.as_str());

            if let Some(session) = session {
                let max_age = config.session_max_age_secs(session.remember);
                let cookie = config
                    .cookie()
                    .build_set_cookie(&session.token, Some(max_age));
                builder = builder.header(header::SET_COOKIE, cookie);
            }

            builder
                .body(axum::body::Body::empty())
                .map_err(|e| AccountsError::ResponseBuild(e.to_string()))
        }
        Outcome::Render(view) => {
            Ok((StatusCode::OK, Json(FormPageBody::from(view))).into_response())
        }
    }
}
