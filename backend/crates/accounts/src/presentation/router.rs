//! Accounts Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::gateway::IdentityGateway;
use crate::domain::token::TokenAuthority;
use crate::infra::hmac_token::HmacTokenAuthority;
use crate::infra::host::HostIdentityGateway;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the accounts router against the host identity platform
pub fn accounts_router(
    gateway: HostIdentityGateway,
    tokens: HmacTokenAuthority,
    config: AccountsConfig,
) -> Router {
    accounts_router_generic(gateway, tokens, config)
}

/// Create a generic accounts router for any gateway/token implementation
pub fn accounts_router_generic<G, T>(gateway: G, tokens: T, config: AccountsConfig) -> Router
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    T: TokenAuthority + Clone + 'static,
{
    let state = AccountsAppState {
        gateway: Arc::new(gateway),
        tokens: Arc::new(tokens),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/login",
            get(handlers::login_page::<G, T>).post(handlers::login_submit::<G, T>),
        )
        .route(
            "/register",
            get(handlers::register_page::<G, T>).post(handlers::register_submit::<G, T>),
        )
        .with_state(state)
}
