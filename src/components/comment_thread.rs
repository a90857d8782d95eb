//! Comment Thread Component
//!
//! Comments under one progress entry plus a composer. Loads when opened.

use goal_sync::Comment;
use leptos::prelude::*;

use super::progress_feed::Entries;
use crate::actions;
use crate::store::use_notifier;

#[component]
pub fn CommentThread(entry_id: String, entries: Entries) -> impl IntoView {
    let notifier = use_notifier();
    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (draft, set_draft) = signal(String::new());

    actions::list_comments(notifier, entry_id.clone(), set_comments);

    let on_added = Callback::new(move |comment: Comment| {
        set_comments.update(|comments| comments.push(comment));
        set_draft.set(String::new());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::add_comment(notifier, entries, entry_id.clone(), draft.get_untracked(), on_added);
    };

    view! {
        <div class="comment-thread">
            <ul class="comment-list">
                <For
                    each=move || comments.get()
                    key=|comment| comment.id.clone()
                    children=move |comment| view! {
                        <li class="comment">
                            {comment.author_id.map(|author| view! { <span class="comment-author">{author}</span> })}
                            <span class="comment-content">{comment.content}</span>
                        </li>
                    }
                />
            </ul>
            <form class="comment-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}
