//! Presentation Layer
//!
//! HTTP handlers, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{AccountsAppState, session_context};
pub use router::{accounts_router, accounts_router_generic};
