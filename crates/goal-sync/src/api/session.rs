//! Cookie Session
//!
//! The backend sets an HTTP-only `accessToken` cookie and a readable `userId` cookie.
//! Only the latter is visible to scripts; it decides whether the viewer is signed in.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const USER_ID_COOKIE: &str = "userId";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    /// Present only when the cookie string was read server-side.
    pub access_token: Option<String>,
}

impl Session {
    /// Parse a `Cookie` header or `document.cookie` string.
    pub fn from_cookie_header(header: &str) -> Self {
        let mut session = Session::default();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let value = percent_decode_str(value.trim()).decode_utf8_lossy().into_owned();
            if value.is_empty() {
                continue;
            }
            match name.trim() {
                USER_ID_COOKIE => session.user_id = Some(value),
                ACCESS_TOKEN_COOKIE => session.access_token = Some(value),
                _ => {}
            }
        }
        session
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// The viewer's id, or an auth error the view turns into a login prompt.
    pub fn viewer_id(&self) -> SyncResult<&str> {
        self.user_id
            .as_deref()
            .ok_or_else(|| SyncError::Auth("no userId cookie".to_string()))
    }
}
