//! Catalog Configuration

use std::time::Duration;

/// Default catalog endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.videotilehost.com/courses";

/// Default vendor whose catalog the dashboard shows
pub const DEFAULT_VENDOR_ID: &str = "romantrainingandjobs";

/// Catalog client configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog API endpoint (HTTPS POST)
    pub endpoint: String,
    /// Vendor identifier sent in the request body
    pub vendor_id: String,
    /// Request timeout; slow vendor connections are common
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            vendor_id: DEFAULT_VENDOR_ID.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
