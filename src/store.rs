//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the toasts every view
//! reports into.

use gloo_timers::callback::Timeout;
use goal_sync::{Notification, Notifier};
use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::context::{use_app_context, AppContext};

/// How long a toast stays up
const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a toast and return its id
pub fn store_push_toast(store: &AppStore, notification: Notification) -> u32 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, notification });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Turns sync notifications into toasts that dismiss themselves, and signs the viewer
/// out when the API rejects their session
#[derive(Clone, Copy)]
pub struct StoreNotifier {
    store: AppStore,
    ctx: AppContext,
}

impl StoreNotifier {
    pub fn new(store: AppStore, ctx: AppContext) -> Self {
        Self { store, ctx }
    }
}

/// Notifier for the current component tree
pub fn use_notifier() -> StoreNotifier {
    StoreNotifier::new(use_app_store(), use_app_context())
}

impl Notifier for StoreNotifier {
    fn notify(&self, notification: Notification) {
        let store = self.store;
        let id = store_push_toast(&store, notification);
        Timeout::new(TOAST_LIFETIME_MS, move || store_dismiss_toast(&store, id)).forget();
    }

    fn session_expired(&self) {
        info!("session rejected by the API, signing out");
        self.ctx.expire_session();
    }
}
