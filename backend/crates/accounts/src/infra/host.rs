//! Host Identity Gateway
//!
//! JSON adapter to the host platform's identity endpoints. The host owns
//! user records, password hashing and session issuance; this adapter
//! only carries the narrow calls the flows make:
//!
//! - `POST {base}/identity/exists` - `{kind, value}` -> `{exists}`
//! - `POST {base}/identity/accounts` - `{username, password, email}` ->
//!   `{userId}`
//! - `POST {base}/identity/accounts/{id}/role` - `{role}`
//! - `POST {base}/identity/sessions` - `{identifier, password, remember}`
//!   -> session handle
//! - `GET {base}/identity/sessions/current` - bearer token -> session
//!   handle or 404
//!
//! Rejections arrive as 4xx bodies with a user-facing `message`; no
//! explicit timeout is set here, the host's defaults apply.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kernel::id::UserId;

use crate::domain::gateway::{
    GatewayError, GatewayResult, IdentityGateway, IdentityKind, SessionHandle,
};

/// Identity gateway backed by the host platform's HTTP API
#[derive(Clone)]
pub struct HostIdentityGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HostIdentityGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to a gateway error: 4xx bodies carry a
    /// user-facing message, everything else is the host misbehaving.
    async fn rejection(response: reqwest::Response) -> GatewayError {
        let status = response.status();
        if status.is_client_error() {
            if let Ok(body) = response.json::<RejectionBody>().await {
                return GatewayError::Rejected(body.message);
            }
        }
        GatewayError::Unavailable(format!("host identity API returned status {status}"))
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Unavailable(err.to_string())
}

fn parse_user_id(raw: &str) -> GatewayResult<UserId> {
    Uuid::parse_str(raw)
        .map(UserId::from)
        .map_err(|_| GatewayError::Unavailable("malformed user id in host response".to_string()))
}

impl IdentityGateway for HostIdentityGateway {
    async fn exists(&self, kind: IdentityKind, value: &str) -> GatewayResult<bool> {
        let response = self
            .http
            .post(self.url("/identity/exists"))
            .json(&ExistsRequest {
                kind: kind.to_string(),
                value,
            })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: ExistsResponse = response.json().await.map_err(transport)?;
        Ok(body.exists)
    }

    async fn create_account(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> GatewayResult<UserId> {
        let response = self
            .http
            .post(self.url("/identity/accounts"))
            .json(&CreateAccountRequest {
                username,
                password,
                email,
            })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: CreateAccountResponse = response.json().await.map_err(transport)?;
        parse_user_id(&body.user_id)
    }

    async fn assign_default_role(&self, user_id: &UserId) -> GatewayResult<()> {
        let response = self
            .http
            .post(self.url(&format!("/identity/accounts/{user_id}/role")))
            .json(&AssignRoleRequest {
                role: crate::domain::gateway::DEFAULT_ROLE,
            })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn sign_in(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> GatewayResult<SessionHandle> {
        let response = self
            .http
            .post(self.url("/identity/sessions"))
            .json(&SignInRequest {
                identifier,
                password,
                remember,
            })
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: SessionBody = response.json().await.map_err(transport)?;
        body.into_handle(remember)
    }

    async fn current_session(&self, token: &str) -> GatewayResult<Option<SessionHandle>> {
        let response = self
            .http
            .get(self.url("/identity/sessions/current"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::UNAUTHORIZED {
            // No live session behind this cookie
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Self::rejection(response).await);
        }

        let body: SessionBody = response.json().await.map_err(transport)?;
        let remember = body.remember;
        body.into_handle(remember).map(Some)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExistsRequest<'a> {
    kind: String,
    value: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExistsResponse {
    exists: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountResponse {
    user_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignRoleRequest<'a> {
    role: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    identifier: &'a str,
    password: &'a str,
    remember: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionBody {
    token: String,
    user_id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    remember: bool,
}

#[derive(Deserialize)]
struct RejectionBody {
    message: String,
}

impl SessionBody {
    fn into_handle(self, remember: bool) -> GatewayResult<SessionHandle> {
        let user_id = parse_user_id(&self.user_id)?;
        Ok(SessionHandle {
            token: self.token,
            user_id,
            display_name: self.display_name,
            remember,
        })
    }
}
