//! API Configuration

use std::{env, fmt::Display, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Where the goals API lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token for native clients. Browsers rely on the `accessToken` cookie instead.
    pub access_token: Option<String>,
    pub timeout_ms: u64,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from `GOAL_API_URL`, `GOAL_API_TOKEN`, `GOAL_API_TIMEOUT_MS` and `GOAL_PAGE_SIZE`.
    pub fn from_env() -> Self {
        Self {
            base_url: try_load("GOAL_API_URL", DEFAULT_BASE_URL.to_string()),
            access_token: env::var("GOAL_API_TOKEN").ok().filter(|token| !token.is_empty()),
            timeout_ms: try_load("GOAL_API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            page_size: try_load("GOAL_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// `base_url` joined with `path`, without doubled slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
