//! Accounts Module
//!
//! Clean Architecture structure:
//! - `domain/` - Submissions, validation rules, consumed gateway seams
//! - `application/` - Per-request flows (form pages, login, registration)
//! - `infra/` - Host identity adapter, HMAC token authority, dev gateway
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Login and registration form processing with per-field errors
//! - Action-scoped form token (CSRF) verification
//! - Session issuance delegated to the host identity platform
//!
//! ## Security Model
//! - Identity storage and password hashing belong to the host platform;
//!   this crate never sees a password hash
//! - Form tokens are HMAC-signed, scoped per action, and checked in
//!   constant time
//! - A session is only ever created by the host in exchange for verified
//!   credentials

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use error::{AccountsError, AccountsResult};
pub use infra::hmac_token::HmacTokenAuthority;
pub use infra::host::HostIdentityGateway;
pub use infra::memory::InMemoryGateway;
pub use presentation::router::{accounts_router, accounts_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
