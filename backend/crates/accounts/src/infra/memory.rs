//! In-Memory Identity Gateway
//!
//! Development stand-in for the host platform, used by the portal binary
//! when no host URL is configured and by the flow tests. Accounts live
//! in process memory; passwords are stored as a digest only.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use kernel::id::UserId;
use platform::crypto::{random_bytes, sha256, to_base64url};

use crate::domain::gateway::{
    DEFAULT_ROLE, GatewayError, GatewayResult, IdentityGateway, IdentityKind, SessionHandle,
};

const MSG_BAD_CREDENTIALS: &str = "Invalid username or password.";
const MSG_DUPLICATE_ACCOUNT: &str = "An account with that username or email already exists.";

struct AccountRecord {
    user_id: UserId,
    username: String,
    email: String,
    password_digest: [u8; 32],
    display_name: String,
    role: Option<String>,
}

#[derive(Default)]
struct State {
    accounts: Vec<AccountRecord>,
    sessions: HashMap<String, SessionHandle>,
}

/// In-memory identity gateway
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    inner: Arc<RwLock<State>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account (development wiring and tests)
    pub fn with_account(self, username: &str, email: &str, password: &str) -> Self {
        {
            let mut state = self
                .inner
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            state.accounts.push(AccountRecord {
                user_id: UserId::new(),
                username: username.to_string(),
                email: email.to_lowercase(),
                password_digest: sha256(password.as_bytes()),
                display_name: username.to_string(),
                role: Some(DEFAULT_ROLE.to_string()),
            });
        }
        self
    }

    fn read(&self) -> GatewayResult<RwLockReadGuard<'_, State>> {
        self.inner
            .read()
            .map_err(|_| GatewayError::Unavailable("gateway state lock poisoned".to_string()))
    }

    fn write(&self) -> GatewayResult<RwLockWriteGuard<'_, State>> {
        self.inner
            .write()
            .map_err(|_| GatewayError::Unavailable("gateway state lock poisoned".to_string()))
    }
}

impl IdentityGateway for InMemoryGateway {
    async fn exists(&self, kind: IdentityKind, value: &str) -> GatewayResult<bool> {
        let state = self.read()?;
        let found = state.accounts.iter().any(|account| match kind {
            IdentityKind::Username => account.username == value,
            IdentityKind::Email => account.email == value.to_lowercase(),
        });
        Ok(found)
    }

    async fn create_account(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> GatewayResult<UserId> {
        let mut state = self.write()?;

        let email = email.to_lowercase();
        let taken = state
            .accounts
            .iter()
            .any(|account| account.username == username || account.email == email);
        if taken {
            return Err(GatewayError::Rejected(MSG_DUPLICATE_ACCOUNT.to_string()));
        }

        let user_id = UserId::new();
        state.accounts.push(AccountRecord {
            user_id,
            username: username.to_string(),
            email,
            password_digest: sha256(password.as_bytes()),
            display_name: username.to_string(),
            role: None,
        });
        Ok(user_id)
    }

    async fn assign_default_role(&self, user_id: &UserId) -> GatewayResult<()> {
        let mut state = self.write()?;
        let account = state
            .accounts
            .iter_mut()
            .find(|account| account.user_id == *user_id)
            .ok_or_else(|| GatewayError::Rejected("Unknown account.".to_string()))?;
        account.role = Some(DEFAULT_ROLE.to_string());
        Ok(())
    }

    async fn sign_in(
        &self,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> GatewayResult<SessionHandle> {
        let mut state = self.write()?;

        let digest = sha256(password.as_bytes());
        let session = {
            let account = state
                .accounts
                .iter()
                .find(|account| {
                    account.username == identifier || account.email == identifier.to_lowercase()
                })
                .filter(|account| account.password_digest == digest)
                .ok_or_else(|| GatewayError::Rejected(MSG_BAD_CREDENTIALS.to_string()))?;

            SessionHandle {
                token: to_base64url(&random_bytes(24)),
                user_id: account.user_id,
                display_name: account.display_name.clone(),
                remember,
            }
        };
        state.sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn current_session(&self, token: &str) -> GatewayResult<Option<SessionHandle>> {
        let state = self.read()?;
        Ok(state.sessions.get(token).cloned())
    }
}
