//! Scope Tab Bar Component
//!
//! Tabs for switching between active, completed and archived goals.

use goal_sync::GoalScope;
use leptos::prelude::*;

const SCOPES: &[(GoalScope, &str)] = &[
    (GoalScope::Active, "Active"),
    (GoalScope::Completed, "Completed"),
    (GoalScope::Archived, "Archived"),
];

#[component]
pub fn ScopeTabBar(
    scope: ReadSignal<GoalScope>,
    set_scope: WriteSignal<GoalScope>,
) -> impl IntoView {
    view! {
        <div class="scope-tab-bar">
            {SCOPES.iter().map(|(value, label)| {
                let value = *value;
                let tab_class = move || {
                    if scope.get() == value { "scope-tab active" } else { "scope-tab" }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_scope.set(value)>
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
