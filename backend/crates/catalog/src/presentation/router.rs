//! Dashboard Router

use axum::{Router, routing::get};
use std::sync::Arc;

use accounts::application::config::AccountsConfig;
use accounts::domain::gateway::IdentityGateway;
use accounts::infra::host::HostIdentityGateway;

use crate::domain::client::CatalogClient;
use crate::infra::http::HttpCatalogClient;
use crate::presentation::handlers::{self, DashboardAppState};

/// Create the dashboard router against the host identity platform
pub fn dashboard_router(
    gateway: HostIdentityGateway,
    client: HttpCatalogClient,
    accounts: AccountsConfig,
) -> Router {
    dashboard_router_generic(gateway, client, accounts)
}

/// Create a generic dashboard router for any gateway/client implementation
pub fn dashboard_router_generic<G, C>(gateway: G, client: C, accounts: AccountsConfig) -> Router
where
    G: IdentityGateway + Clone + Send + Sync + 'static,
    C: CatalogClient + Clone + Send + Sync + 'static,
{
    let state = DashboardAppState {
        gateway: Arc::new(gateway),
        client: Arc::new(client),
        accounts: Arc::new(accounts),
    };

    Router::new()
        .route("/dashboard", get(handlers::dashboard::<G, C>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use accounts::InMemoryGateway;
    use accounts::domain::gateway::IdentityGateway as _;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::domain::course::Course;
    use crate::error::CatalogError;

    #[derive(Clone)]
    struct FixedCatalog(Result<Vec<Course>, CatalogError>);

    impl CatalogClient for FixedCatalog {
        async fn fetch_courses(&self) -> Result<Vec<Course>, CatalogError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_anonymous_visitor_redirected_to_login() {
        let app = dashboard_router_generic(
            InMemoryGateway::new(),
            FixedCatalog(Ok(Vec::new())),
            AccountsConfig::development(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn test_signed_in_visitor_sees_cards() {
        let config = AccountsConfig::development();
        let gateway = InMemoryGateway::new().with_account("alice", "alice@example.com", "pw");
        let session = gateway.sign_in("alice", "pw", false).await.unwrap();

        let app = dashboard_router_generic(
            gateway,
            FixedCatalog(Ok(vec![Course {
                name: Some("Fire Safety".to_string()),
                description: None,
                duration: Some(45.0),
                rrp: Some(25.0),
            }])),
            config.clone(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .header(
                        header::COOKIE,
                        format!("{}={}", config.session_cookie_name, session.token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["welcome"], "Welcome, alice!");
        assert!(json.get("notice").is_none());
        assert_eq!(json["courses"][0]["title"], "Fire Safety");
        assert_eq!(json["courses"][0]["duration"], 45.0);
    }

    #[tokio::test]
    async fn test_signed_in_visitor_sees_fetch_error_notice() {
        let config = AccountsConfig::development();
        let gateway = InMemoryGateway::new().with_account("alice", "alice@example.com", "pw");
        let session = gateway.sign_in("alice", "pw", false).await.unwrap();

        let app = dashboard_router_generic(
            gateway,
            FixedCatalog(Err(CatalogError::Transport("name resolution failed".into()))),
            config.clone(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dashboard")
                    .header(
                        header::COOKIE,
                        format!("{}={}", config.session_cookie_name, session.token),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["notice"]["heading"], "Error fetching courses");
        assert_eq!(json["notice"]["message"], "name resolution failed");
        assert!(json["courses"].as_array().unwrap().is_empty());
    }
}
