//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use accounts::application::config::AccountsConfig;
use accounts::domain::gateway::IdentityGateway;
use accounts::presentation::handlers::session_context;

use crate::application::FetchCoursesUseCase;
use crate::domain::client::CatalogClient;
use crate::presentation::dto::DashboardBody;

/// Shared state for dashboard handlers
#[derive(Clone)]
pub struct DashboardAppState<G, C>
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    C: CatalogClient + Clone + Send + Sync + 'static,
{
    pub gateway: Arc<G>,
    pub client: Arc<C>,
    pub accounts: Arc<AccountsConfig>,
}

/// GET /dashboard
///
/// Anonymous visitors are sent to the login page before anything is
/// fetched; everyone else gets the page body with the catalog result
/// folded into cards or a notice.
pub async fn dashboard<G, C>(
    State(state): State<DashboardAppState<G, C>>,
    headers: HeaderMap,
) -> Response
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    C: CatalogClient + Clone + Send + Sync + 'static,
{
    let ctx = session_context(state.gateway.as_ref(), &state.accounts, &headers).await;

    let Some(session) = ctx.session else {
        return (
            StatusCode::FOUND,
            [(header::LOCATION, state.accounts.login_route.clone())],
        )
            .into_response();
    };

    let use_case = FetchCoursesUseCase::new(state.client.clone());
    let result = use_case.execute().await;

    let body = DashboardBody::from_catalog(&session.display_name, result);
    (StatusCode::OK, Json(body)).into_response()
}
