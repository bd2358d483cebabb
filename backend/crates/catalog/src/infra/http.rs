//! HTTP Catalog Client
//!
//! reqwest adapter for the vendor course catalog: one JSON POST with the
//! vendor id, bounded by the configured timeout. The catalog reports
//! errors in-band, so the body is read regardless of status and parsing
//! decides whether the payload is usable.

use serde::Serialize;

use crate::application::config::CatalogConfig;
use crate::domain::client::CatalogClient;
use crate::domain::course::Course;
use crate::error::CatalogError;

#[derive(Serialize)]
struct CourseQuery<'a> {
    vendor_id: &'a str,
}

/// Catalog client backed by the vendor's HTTPS API
#[derive(Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    endpoint: String,
    vendor_id: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            vendor_id: config.vendor_id.clone(),
        })
    }
}

impl CatalogClient for HttpCatalogClient {
    async fn fetch_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&CourseQuery {
                vendor_id: &self.vendor_id,
            })
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        serde_json::from_str::<Vec<Course>>(&body).map_err(|_| CatalogError::Malformed)
    }
}
