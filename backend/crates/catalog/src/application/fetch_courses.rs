//! Fetch Courses Use Case
//!
//! One read call per dashboard request. Failures are logged here and
//! returned to the presentation layer, which turns them into notices.

use std::sync::Arc;

use crate::domain::client::CatalogClient;
use crate::domain::course::Course;
use crate::error::CatalogError;

/// Fetch courses use case
pub struct FetchCoursesUseCase<C>
where
    C: CatalogClient + Sync,
{
    client: Arc<C>,
}

impl<C> FetchCoursesUseCase<C>
where
    C: CatalogClient + Sync,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn execute(&self) -> Result<Vec<Course>, CatalogError> {
        match self.client.fetch_courses().await {
            Ok(courses) => {
                tracing::debug!(count = courses.len(), "Fetched course catalog");
                Ok(courses)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Course catalog fetch failed");
                Err(err)
            }
        }
    }
}
