//! Catalog Module
//!
//! The course dashboard page: fetches the vendor's course list from the
//! third-party catalog API and renders it for signed-in visitors.
//!
//! Clean Architecture structure:
//! - `domain/` - Course records, display rules, the catalog client seam
//! - `application/` - Dashboard configuration and the fetch use case
//! - `infra/` - reqwest-backed catalog client
//! - `presentation/` - Dashboard handler, DTOs, router
//!
//! Catalog failures are never fatal to the page: transport errors,
//! malformed payloads and empty result sets each render as a distinct
//! inline notice.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::CatalogError;
pub use infra::http::HttpCatalogClient;
pub use presentation::router::{dashboard_router, dashboard_router_generic};
