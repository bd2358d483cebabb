//! Catalog Client Seam
//!
//! The third-party catalog is consumed through this single-call
//! interface; the reqwest implementation lives in `infra`.

use crate::domain::course::Course;
use crate::error::CatalogError;

/// Catalog client trait
#[trait_variant::make(CatalogClient: Send)]
pub trait LocalCatalogClient {
    /// Fetch the vendor's course list. One attempt, no retries; a
    /// failure is surfaced to the page immediately.
    async fn fetch_courses(&self) -> Result<Vec<Course>, CatalogError>;
}
