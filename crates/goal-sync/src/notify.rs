//! User Notifications
//!
//! Failures end up as one transient toast each. The browser pushes them into the app
//! store; tests record them. An auth failure also signs the viewer out so the login
//! prompt shows.

use serde::{Deserialize, Serialize};

use crate::error::SyncError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    /// Short, user-facing text for a sync failure.
    pub fn from_error(err: &SyncError) -> Self {
        let message = match err {
            SyncError::Network(_) => "Connection problem. Please try again.".to_string(),
            SyncError::Auth(_) => "Your session has expired. Please sign in again.".to_string(),
            SyncError::Validation(detail) => format!("Please check your input ({detail})."),
            SyncError::NotFound(_) => "That item no longer exists.".to_string(),
            SyncError::UnexpectedResponse(_) => "Something went wrong on our side.".to_string(),
        };
        Self::error(message)
    }
}

/// Receives user-facing notifications
pub trait Notifier {
    fn notify(&self, notification: Notification);

    /// The API rejected the session. No-op unless the view tracks sign-in.
    fn session_expired(&self) {}

    /// One toast for a failure, plus a sign-out when the session was rejected.
    fn report_failure(&self, err: &SyncError) {
        self.notify(Notification::from_error(err));
        if err.is_auth() {
            self.session_expired();
        }
    }
}
