//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::DashboardAppState;
pub use router::{dashboard_router, dashboard_router_generic};
