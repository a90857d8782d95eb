//! New Entry Form Component
//!
//! Composer for posting a progress update on a goal.

use leptos::prelude::*;

use super::progress_feed::Entries;
use crate::actions;
use crate::store::use_notifier;

#[component]
pub fn NewEntryForm(goal_id: String, entries: Entries) -> impl IntoView {
    let notifier = use_notifier();
    let (content, set_content) = signal(String::new());

    // A failed post keeps the draft; the toast explains why.
    let on_created = Callback::new(move |_| set_content.set(String::new()));

    let create_entry = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::create_progress_entry(
            notifier,
            entries,
            goal_id.clone(),
            content.get_untracked(),
            on_created,
        );
    };

    view! {
        <form class="new-entry-form" on:submit=create_entry>
            <textarea
                placeholder="What did you get done?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" disabled=move || content.get().trim().is_empty()>
                "Post update"
            </button>
        </form>
    }
}
