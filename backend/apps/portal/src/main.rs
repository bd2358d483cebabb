//! Portal Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use accounts::{
    AccountsConfig, HmacTokenAuthority, HostIdentityGateway, InMemoryGateway,
    accounts_router_generic, domain::gateway::IdentityGateway,
};
use axum::{
    Router, http,
    http::{Method, header},
};
use base64::Engine;
use base64::engine::general_purpose;
use catalog::{CatalogConfig, HttpCatalogClient, dashboard_router_generic};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portal=info,accounts=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Accounts configuration
    let accounts_config = if cfg!(debug_assertions) {
        AccountsConfig::development()
    } else {
        // In production, load the token secret from environment
        let secret_b64 =
            env::var("PORTAL_TOKEN_SECRET").expect("PORTAL_TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "PORTAL_TOKEN_SECRET must decode to 32 bytes"
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AccountsConfig {
            token_secret: secret,
            ..AccountsConfig::default()
        }
    };

    let tokens = HmacTokenAuthority::new(accounts_config.token_secret, accounts_config.token_ttl);

    // Catalog configuration
    let mut catalog_config = CatalogConfig::default();
    if let Ok(endpoint) = env::var("CATALOG_ENDPOINT") {
        catalog_config.endpoint = endpoint;
    }
    if let Ok(vendor_id) = env::var("CATALOG_VENDOR_ID") {
        catalog_config.vendor_id = vendor_id;
    }
    let catalog_client = HttpCatalogClient::new(&catalog_config)?;

    // Identity gateway: the host platform in production, an in-memory
    // stand-in for local development
    let app = match env::var("HOST_IDENTITY_URL") {
        Ok(url) => {
            tracing::info!(url = %url, "Using host identity gateway");
            build_router(
                HostIdentityGateway::new(url),
                tokens,
                accounts_config,
                catalog_client,
            )
        }
        Err(_) => {
            tracing::warn!(
                "HOST_IDENTITY_URL not set; using in-memory identity gateway with a demo account"
            );
            let gateway =
                InMemoryGateway::new().with_account("demo", "demo@example.com", "demo-password");
            build_router(gateway, tokens, accounts_config, catalog_client)
        }
    };

    // CORS configuration
    let shell_origins = env::var("SHELL_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8080,http://127.0.0.1:8080".to_string());

    let allowed_origins: Vec<http::HeaderValue> = shell_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    let app = app.layer(TraceLayer::new_for_http()).layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router<G>(
    gateway: G,
    tokens: HmacTokenAuthority,
    accounts_config: AccountsConfig,
    catalog_client: HttpCatalogClient,
) -> Router
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(accounts_router_generic(
            gateway.clone(),
            tokens,
            accounts_config.clone(),
        ))
        .merge(dashboard_router_generic(
            gateway,
            catalog_client,
            accounts_config,
        ))
}
