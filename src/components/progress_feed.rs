//! Progress Feed Component
//!
//! Progress updates posted against one goal, with likes and comment threads.

use goal_sync::{LoadState, PageAction, PagedCollection, ProgressEntry};
use leptos::prelude::*;

use super::{CommentThread, NewEntryForm, Pager};
use crate::actions;
use crate::collection::{new_collection, SignalCell};
use crate::context::use_app_context;
use crate::store::use_notifier;

pub type Entries = SignalCell<PagedCollection<ProgressEntry>>;

#[component]
pub fn ProgressFeed(goal_id: String) -> impl IntoView {
    let notifier = use_notifier();
    let entries = new_collection::<ProgressEntry>();
    let collection = entries.signal();

    {
        let goal_id = goal_id.clone();
        actions::load_progress(notifier, entries, goal_id, PageAction::Initial);
    }

    let on_page = {
        let goal_id = goal_id.clone();
        Callback::new(move |page: u32| {
            actions::load_progress(notifier, entries, goal_id.clone(), PageAction::Page(page));
        })
    };
    let on_retry = {
        let goal_id = goal_id.clone();
        move |_| actions::load_progress(notifier, entries, goal_id.clone(), PageAction::Retry)
    };

    let ids = move || {
        collection.with(|feed| feed.items().iter().map(|entry| entry.id.clone()).collect::<Vec<_>>())
    };
    let controls = Signal::derive(move || collection.with(goal_sync::projection::controls_for));
    let busy = Signal::derive(move || collection.with(|feed| feed.is_loading()));

    view! {
        <section class="progress-feed">
            <h3>"Progress updates"</h3>
            <NewEntryForm goal_id=goal_id entries=entries />

            <Show when=move || collection.with(|feed| feed.state() == LoadState::LoadingInitial && feed.is_empty())>
                <p class="loading">"Loading updates..."</p>
            </Show>

            {move || collection.with(|feed| feed.error().cloned()).map(|err| {
                let on_retry = on_retry.clone();
                view! {
                    <div class="load-error">
                        <span>{err.to_string()}</span>
                        <button on:click=on_retry>"Retry"</button>
                    </div>
                }
            })}

            <Show when=move || collection.with(|feed| feed.state() == LoadState::Loaded && feed.is_empty())>
                <p class="empty">"No updates yet. Post the first one."</p>
            </Show>

            <For
                each=ids
                key=|id| id.clone()
                children=move |id| view! { <EntryItem entry_id=id entries=entries /> }
            />

            <Pager controls=controls busy=busy on_page=on_page />
        </section>
    }
}

#[component]
fn EntryItem(entry_id: String, entries: Entries) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let collection = entries.signal();
    let (show_comments, set_show_comments) = signal(false);

    let entry = {
        let id = entry_id.clone();
        Memo::new(move |_| collection.with(|feed| feed.get(&id).cloned()))
    };
    let bursting = {
        let id = entry_id.clone();
        move || collection.with(|feed| feed.is_bursting(&id))
    };
    let liked = move || {
        let viewer = ctx.viewer_id();
        entry.with(|entry| match (entry, viewer) {
            (Some(entry), Some(viewer)) => entry.is_liked_by(&viewer),
            _ => false,
        })
    };
    let like_class = move || {
        let mut class = String::from("like-btn");
        if liked() {
            class.push_str(" liked");
        }
        if bursting() {
            class.push_str(" burst");
        }
        class
    };
    let on_like = {
        let id = entry_id.clone();
        move |_| {
            if let Some(viewer) = ctx.session.get_untracked().user_id {
                actions::toggle_like(notifier, entries, id.clone(), viewer);
            }
        }
    };

    view! {
        <article class="progress-entry">
            <p class="entry-content">
                {move || entry.with(|entry| entry.as_ref().map(|e| e.content.clone()).unwrap_or_default())}
            </p>
            <div class="entry-actions">
                <button class=like_class on:click=on_like>
                    "♥ " {move || entry.with(|entry| entry.as_ref().map_or(0, |e| e.likes.len()))}
                </button>
                <button class="comment-toggle" on:click=move |_| set_show_comments.update(|open| *open = !*open)>
                    "💬 " {move || entry.with(|entry| entry.as_ref().map_or(0, |e| e.comment_count))}
                </button>
            </div>
            <Show when=move || show_comments.get()>
                <CommentThread entry_id=entry_id.clone() entries=entries />
            </Show>
        </article>
    }
}
