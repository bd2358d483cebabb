//! Catalog Error Types

use thiserror::Error;

/// Failures of the single catalog call.
///
/// Both variants are recovered at the dashboard boundary and rendered as
/// inline notices; neither aborts the page.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog could not be reached (connect failure, timeout, ...);
    /// the reason text is shown to the user
    #[error("{0}")]
    Transport(String),

    /// The catalog answered with something that is not a JSON array of
    /// course records
    #[error("The API returned invalid data. Please try again later.")]
    Malformed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_reason_is_user_visible() {
        let err = CatalogError::Transport("connection timed out".to_string());
        assert_eq!(err.to_string(), "connection timed out");
    }
}
