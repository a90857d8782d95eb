//! Goal Card Component
//!
//! One goal: status badge, progress bar, steps and engagement.

use goal_sync::projection::GoalCard;
use goal_sync::Step;
use leptos::prelude::*;

use super::ArchiveConfirmButton;

#[component]
pub fn GoalCardView(
    card: GoalCard,
    steps: Vec<Step>,
    /// Steps are clickable only on the viewer's own active goals
    editable: bool,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_toggle_step: Callback<(String, String)>,
    #[prop(into)] on_archive: Callback<String>,
) -> impl IntoView {
    let goal_id = card.id.clone();
    let select_id = card.id.clone();
    let archive_id = card.id.clone();
    let summary = card.steps_summary();

    view! {
        <article class="goal-card" on:click=move |_| on_select.run(select_id.clone())>
            <header class="goal-card-header">
                <h4 class="goal-title">{card.title.clone()}</h4>
                <span class=format!("status-badge {}", card.status.css_class())>
                    {card.status.label()}
                </span>
            </header>
            {card.category.clone().map(|category| view! { <span class="goal-category">{category}</span> })}
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%", card.percent)></div>
            </div>
            <p class="progress-text">
                {format!("{}%", card.percent)}
                {summary.map(|summary| view! { <span class="steps-summary">" · " {summary}</span> })}
            </p>
            <ul class="step-list">
                {steps.into_iter().map(|step| {
                    let goal_id = goal_id.clone();
                    let step_id = step.id.clone();
                    view! {
                        <li class=if step.is_completed { "step done" } else { "step" }>
                            <input
                                type="checkbox"
                                prop:checked=step.is_completed
                                disabled=!editable
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_toggle_step.run((goal_id.clone(), step_id.clone()));
                                }
                            />
                            <span>{step.title}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <footer class="goal-card-footer">
                <span class=if card.liked_by_viewer { "likes liked" } else { "likes" }>
                    "♥ " {card.like_count}
                </span>
                <span class="comments">"💬 " {card.comment_count}</span>
                <Show when=move || editable>
                    <ArchiveConfirmButton on_confirm={
                        let archive_id = archive_id.clone();
                        Callback::new(move |_| on_archive.run(archive_id.clone()))
                    } />
                </Show>
            </footer>
        </article>
    }
}
