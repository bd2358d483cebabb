//! Course Record
//!
//! One entry of the vendor's catalog as the API returns it. Every field
//! is optional; the dashboard decides what is worth showing.

use serde::Deserialize;

/// A course record from the catalog API
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Duration in minutes
    pub duration: Option<f64>,
    /// Recommended retail price
    pub rrp: Option<f64>,
}
