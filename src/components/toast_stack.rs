//! Toast Stack Component
//!
//! Transient notifications from the app store. Click to dismiss.

use goal_sync::NotificationLevel;
use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notification.level {
                        NotificationLevel::Success => "toast success",
                        NotificationLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
