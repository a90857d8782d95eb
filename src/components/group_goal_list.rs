//! Group Goal List Component
//!
//! The viewer's group goals with "load more", shared steps and daily check-ins.

use chrono::Local;
use goal_sync::projection::{completion_percentage, demo_engagement};
use goal_sync::{GroupGoal, LoadState, PageAction, Step};
use leptos::prelude::*;

use crate::actions;
use crate::collection::{new_collection, SignalCell};
use crate::context::use_app_context;
use crate::store::use_notifier;

type GroupGoals = SignalCell<goal_sync::PagedCollection<GroupGoal>>;

#[component]
pub fn GroupGoalList() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let groups = new_collection::<GroupGoal>();
    let collection = groups.signal();

    Effect::new(move |_| {
        if let Some(viewer) = ctx.viewer_id() {
            actions::load_group_goals(notifier, groups, viewer, PageAction::Reset);
        }
    });

    let run = move |action: PageAction| {
        if let Some(viewer) = ctx.session.get_untracked().user_id {
            actions::load_group_goals(notifier, groups, viewer, action);
        }
    };

    let ids = move || {
        collection.with(|groups| groups.items().iter().map(|group| group.id.clone()).collect::<Vec<_>>())
    };

    view! {
        <div class="group-goal-list">
            <Show when=move || collection.with(|groups| groups.state() == LoadState::Loaded && groups.is_empty())>
                <p class="empty">"You have not joined any group goals."</p>
            </Show>

            <For
                each=ids
                key=|id| id.clone()
                children=move |id| view! { <GroupGoalCard group_id=id groups=groups /> }
            />

            {move || collection.with(|groups| groups.error().cloned()).map(|err| view! {
                <div class="load-error">
                    <span>{err.to_string()}</span>
                    <button on:click=move |_| run(PageAction::Retry)>"Retry"</button>
                </div>
            })}

            <Show when=move || collection.with(|groups| groups.has_next_page())>
                <button
                    class="load-more-btn"
                    disabled=move || collection.with(|groups| groups.is_loading())
                    on:click=move |_| run(PageAction::More)
                >
                    {move || if collection.with(|groups| groups.state() == LoadState::LoadingMore) {
                        "Loading..."
                    } else {
                        "Load more"
                    }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn GroupGoalCard(group_id: String, groups: GroupGoals) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let collection = groups.signal();
    let engagement = demo_engagement(&group_id);

    let group = {
        let id = group_id.clone();
        Memo::new(move |_| collection.with(|groups| groups.get(&id).cloned()))
    };
    let percent = move || {
        group.with(|group| {
            group.as_ref().map_or(0, |group| {
                completion_percentage(Step::completed_count(&group.steps), group.steps.len())
            })
        })
    };
    let checked_in = move || {
        let today = Local::now().date_naive();
        let viewer = ctx.viewer_id();
        group.with(|group| match (group, viewer) {
            (Some(group), Some(viewer)) => group.has_checked_in(&viewer, today),
            _ => false,
        })
    };
    let on_check_in = {
        let id = group_id.clone();
        move |_| {
            if let Some(viewer) = ctx.session.get_untracked().user_id {
                actions::toggle_check_in(notifier, groups, id.clone(), viewer);
            }
        }
    };

    view! {
        <article class="group-goal-card">
            <h4 class="goal-title">{move || group.with(|group| group.as_ref().map(|g| g.title.clone()).unwrap_or_default())}</h4>
            <p class="group-members">
                {move || group.with(|group| group.as_ref().map_or(0, |g| g.members.len()))} " members"
            </p>
            <div class="progress-bar">
                <div class="progress-fill" style=move || format!("width: {}%", percent())></div>
            </div>
            <ul class="step-list">
                {move || {
                    let steps = group.with(|group| group.as_ref().map(|g| g.steps.clone()).unwrap_or_default());
                    steps.into_iter().map(|step| {
                        let group_id = group_id.clone();
                        let step_id = step.id.clone();
                        view! {
                            <li class=if step.is_completed { "step done" } else { "step" }>
                                <input
                                    type="checkbox"
                                    prop:checked=step.is_completed
                                    on:click=move |_| actions::toggle_group_step(notifier, groups, group_id.clone(), step_id.clone())
                                />
                                <span>{step.title}</span>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
            <footer class="group-card-footer">
                <button class=move || if checked_in() { "check-in-btn checked" } else { "check-in-btn" } on:click=on_check_in>
                    {move || if checked_in() { "Checked in today" } else { "Check in" }}
                </button>
                <span class="likes">"♥ " {engagement.likes}</span>
                <span class="comments">"💬 " {engagement.comments}</span>
            </footer>
        </article>
    }
}
