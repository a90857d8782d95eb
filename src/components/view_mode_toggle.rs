//! View Mode Toggle Component
//!
//! List / grid / board switch backed by the app context.

use goal_sync::ViewMode;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ViewModeToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="view-mode-toggle">
            {ViewMode::ALL.iter().map(|mode| {
                let mode = *mode;
                let is_selected = move || ctx.view_mode.get() == mode;
                view! {
                    <button
                        class=move || if is_selected() { "mode-btn active" } else { "mode-btn" }
                        on:click=move |_| ctx.set_view_mode(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
