//! Sync Errors
//!
//! One taxonomy for everything that can go wrong between a view and the goals API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors surfaced by fetchers and mutations.
///
/// `Clone` so a failed load can sit inside collection state next to the items it did not replace.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SyncError {
    /// Transport failure, timeout or an unexpected status.
    #[error("Network error: {0}")]
    Network(String),

    /// Missing or expired session.
    #[error("Not signed in: {0}")]
    Auth(String),

    /// Rejected input, either locally (empty comment) or by the server.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The subject id has no such resource.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A body that did not decode into the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl SyncError {
    /// Map an HTTP status and body to the matching error kind.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = if body.trim().is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status}: {}", body.trim())
        };
        match status {
            401 | 403 => SyncError::Auth(detail),
            404 => SyncError::NotFound(detail),
            400 | 422 => SyncError::Validation(detail),
            _ => SyncError::Network(detail),
        }
    }

    /// Auth failures also send the viewer back to the login prompt.
    pub fn is_auth(&self) -> bool {
        matches!(self, SyncError::Auth(_))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SyncError::UnexpectedResponse(err.to_string());
        }
        match err.status() {
            Some(status) => SyncError::from_status(status.as_u16(), ""),
            None => SyncError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::UnexpectedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(SyncError::from_status(401, "").is_auth());
        assert!(SyncError::from_status(403, "expired").is_auth());
        assert_eq!(
            SyncError::from_status(404, "no goal"),
            SyncError::NotFound("HTTP 404: no goal".to_string())
        );
        assert!(matches!(SyncError::from_status(422, ""), SyncError::Validation(_)));
        assert!(matches!(SyncError::from_status(503, ""), SyncError::Network(_)));
    }

    #[test]
    fn display_includes_detail() {
        let err = SyncError::Validation("comment is empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: comment is empty");
    }
}
