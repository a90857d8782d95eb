//! Browser Adapters
//!
//! `localStorage` preferences, the cookie session and timer-based scheduling.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use goal_sync::preferences::PreferenceStore;
use goal_sync::{Scheduler, Session};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Preferences kept in `localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            warn!(key, "localStorage unavailable");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            warn!(key, error = ?err, "failed to persist preference");
        }
    }
}

/// Session from the readable cookies. The access token cookie is HTTP-only and rides
/// along with requests instead.
pub fn read_session() -> Session {
    let cookies = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default();
    Session::from_cookie_header(&cookies)
}

/// Runs scheduled tasks on `setTimeout`
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            warn!(error = ?err, "reload failed");
        }
    }
}

pub fn go_home() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href("/") {
            warn!(error = ?err, "navigation failed");
        }
    }
}
