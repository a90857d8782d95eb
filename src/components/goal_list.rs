//! Goal List Component
//!
//! The viewer's goals in one scope, paginated, laid out per the current view mode.

use goal_sync::projection::{controls_for, sections, GoalCard};
use goal_sync::{Goal, GoalScope, LoadState, PageAction, Step};
use leptos::prelude::*;

use super::{GoalCardView, Pager, ProfileStats};
use crate::actions;
use crate::collection::new_collection;
use crate::context::use_app_context;
use crate::store::use_notifier;

#[component]
pub fn GoalList(
    scope: ReadSignal<GoalScope>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let notifier = use_notifier();
    let goals = new_collection::<Goal>();
    let collection = goals.signal();

    // Reload when the scope or the viewer changes
    Effect::new(move |_| {
        let scope = scope.get();
        if let Some(viewer) = ctx.viewer_id() {
            actions::load_goals(notifier, goals, scope, viewer, PageAction::Reset);
        }
    });

    let on_page = Callback::new(move |action: PageAction| {
        if let Some(viewer) = ctx.session.get_untracked().user_id {
            actions::load_goals(notifier, goals, scope.get_untracked(), viewer, action);
        }
    });
    let on_toggle_step = Callback::new(move |(goal_id, step_id): (String, String)| {
        actions::toggle_goal_step(notifier, goals, goal_id, step_id);
    });
    let on_archive = Callback::new(move |goal_id: String| {
        actions::archive_goal(notifier, goals, goal_id);
    });

    let controls = Signal::derive(move || collection.with(controls_for));
    let busy = Signal::derive(move || collection.with(|goals| goals.is_loading()));
    let editable = move || scope.get() == GoalScope::Active;

    let rendered_sections = move || {
        let viewer = ctx.viewer_id();
        let mode = ctx.view_mode.get();
        let laid_out: Vec<(Option<&'static str>, Vec<(GoalCard, Vec<Step>)>)> = collection.with(|goals| {
            sections(goals.items(), mode, viewer.as_deref())
                .into_iter()
                .map(|section| {
                    let cards = section
                        .cards
                        .into_iter()
                        .map(|card| {
                            let steps = goals.get(&card.id).map(|goal| goal.steps.clone()).unwrap_or_default();
                            (card, steps)
                        })
                        .collect();
                    (section.title, cards)
                })
                .collect()
        });
        let editable = editable();
        laid_out.into_iter().map(|(title, cards)| view! {
            <section class="goal-section">
                {title.map(|title| view! { <h3 class="section-title">{title}</h3> })}
                <div class="goal-cards">
                    {cards.into_iter().map(|(card, steps)| view! {
                        <GoalCardView
                            card=card
                            steps=steps
                            editable=editable
                            on_select=on_select
                            on_toggle_step=on_toggle_step
                            on_archive=on_archive
                        />
                    }).collect_view()}
                </div>
            </section>
        }).collect_view()
    };

    view! {
        <div class="goal-list">
            <ProfileStats collection=collection />

            <Show when=move || collection.with(|goals| goals.state() == LoadState::LoadingInitial && goals.is_empty())>
                <p class="loading">"Loading goals..."</p>
            </Show>

            {move || collection.with(|goals| goals.error().cloned()).map(|err| view! {
                <div class="load-error">
                    <span>{err.to_string()}</span>
                    <button on:click=move |_| on_page.run(PageAction::Retry)>"Retry"</button>
                </div>
            })}

            <Show when=move || collection.with(|goals| goals.state() == LoadState::Loaded && goals.is_empty())>
                <p class="empty">"No goals here yet."</p>
            </Show>

            <div class=move || format!("goal-sections {}", ctx.view_mode.get().as_str())>
                {rendered_sections}
            </div>

            <Pager
                controls=controls
                busy=busy
                on_page=Callback::new(move |page: u32| on_page.run(PageAction::Page(page)))
            />
        </div>
    }
}
