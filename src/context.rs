//! Application Context
//!
//! Shared state provided via Leptos Context API: the list view mode and the session.

use goal_sync::{Session, ViewMode};
use leptos::prelude::*;

use crate::browser::{self, LocalPreferences};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Layout for goal lists - read
    pub view_mode: ReadSignal<ViewMode>,
    /// Layout for goal lists - write
    set_view_mode: WriteSignal<ViewMode>,
    /// Who is looking - read
    pub session: ReadSignal<Session>,
    /// Who is looking - write
    set_session: WriteSignal<Session>,
}

impl AppContext {
    /// Hydrate from `localStorage` and cookies.
    pub fn hydrate() -> Self {
        let (view_mode, set_view_mode) = signal(ViewMode::hydrate(&LocalPreferences));
        let (session, set_session) = signal(browser::read_session());
        Self {
            view_mode,
            set_view_mode,
            session,
            set_session,
        }
    }

    /// Persist and broadcast a new view mode
    pub fn set_view_mode(&self, mode: ViewMode) {
        mode.persist(&LocalPreferences);
        self.set_view_mode.set(mode);
    }

    /// Re-read cookies, e.g. after signing in elsewhere
    pub fn refresh_session(&self) {
        self.set_session.set(browser::read_session());
    }

    /// The API rejected the session; show the login prompt until cookies say otherwise
    pub fn expire_session(&self) {
        self.set_session.set(Session::default());
    }

    pub fn viewer_id(&self) -> Option<String> {
        self.session.with(|session| session.user_id.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
