//! API Client Handle
//!
//! One `HttpGoalApi` per page, built on first use from compile-time configuration.

use std::cell::OnceCell;
use std::rc::Rc;

use goal_sync::config::{ApiConfig, DEFAULT_BASE_URL};
use goal_sync::{HttpGoalApi, SyncResult};
use tracing::info;

thread_local! {
    static CLIENT: OnceCell<Rc<HttpGoalApi>> = const { OnceCell::new() };
}

/// `GOAL_API_URL` and `GOAL_PAGE_SIZE`, read at build time.
pub fn config() -> ApiConfig {
    let mut config = ApiConfig::new(option_env!("GOAL_API_URL").unwrap_or(DEFAULT_BASE_URL));
    if let Some(size) = option_env!("GOAL_PAGE_SIZE").and_then(|raw| raw.parse().ok()) {
        config.page_size = size;
    }
    config
}

pub fn client() -> SyncResult<Rc<HttpGoalApi>> {
    CLIENT.with(|cell| {
        if let Some(api) = cell.get() {
            return Ok(api.clone());
        }
        let config = config();
        info!(base_url = %config.base_url, "creating api client");
        let api = Rc::new(HttpGoalApi::new(config)?);
        let _ = cell.set(api.clone());
        Ok(api)
    })
}
