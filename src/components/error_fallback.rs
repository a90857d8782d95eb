//! Error Fallback Component
//!
//! Shown by the app's error boundary: what broke, plus retry and a way home.

use leptos::prelude::*;

use crate::browser;

#[component]
pub fn ErrorFallback(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="error-fallback">
            <h2>"Something went wrong"</h2>
            <ul>
                {move || messages.get().into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
            </ul>
            <div class="error-actions">
                <button on:click=move |_| browser::reload_page()>"Try again"</button>
                <button on:click=move |_| browser::go_home()>"Return home"</button>
            </div>
        </div>
    }
}

#[component]
pub fn SignInPrompt() -> impl IntoView {
    let ctx = crate::context::use_app_context();

    view! {
        <div class="sign-in-prompt">
            <p>"Sign in to see your goals."</p>
            <button on:click=move |_| ctx.refresh_session()>"I have signed in"</button>
        </div>
    }
}
