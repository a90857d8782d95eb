//! Goal Tracker Frontend App
//!
//! Main application component: header tabs, the goal or group list, and the progress
//! column for the selected goal.

use goal_sync::GoalScope;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ErrorFallback, GoalList, GroupGoalList, ProgressFeed, ScopeTabBar, SignInPrompt, ToastStack,
    ViewModeToggle,
};
use crate::context::AppContext;
use crate::store::AppState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Goals,
    Groups,
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(Store::new(AppState::default()));
    let ctx = AppContext::hydrate();
    provide_context(ctx);

    let (tab, set_tab) = signal(Tab::Goals);
    let (scope, set_scope) = signal(GoalScope::Active);
    let (selected_goal, set_selected_goal) = signal::<Option<String>>(None);
    let on_select = Callback::new(move |goal_id: String| set_selected_goal.set(Some(goal_id)));

    let tab_class = move |value: Tab| {
        move || if tab.get() == value { "app-tab active" } else { "app-tab" }
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Goal Tracker"</h1>
                <nav class="app-tabs">
                    <button class=tab_class(Tab::Goals) on:click=move |_| set_tab.set(Tab::Goals)>"My goals"</button>
                    <button class=tab_class(Tab::Groups) on:click=move |_| set_tab.set(Tab::Groups)>"Groups"</button>
                </nav>
                <ViewModeToggle />
            </header>

            <main class="main-content">
                <ErrorBoundary fallback=|errors| {
                    let messages = Signal::derive(move || {
                        errors.with(|errors| errors.iter().map(|(_, err)| err.to_string()).collect::<Vec<_>>())
                    });
                    view! { <ErrorFallback messages=messages /> }
                }>
                    // A client that cannot be built is fatal for every view
                    {move || api::client().map(|_| ())}
                    <Show
                        when=move || ctx.session.with(|session| session.is_signed_in())
                        fallback=|| view! { <SignInPrompt /> }
                    >
                        {move || match tab.get() {
                            Tab::Goals => view! {
                                <ScopeTabBar scope=scope set_scope=set_scope />
                                <GoalList scope=scope on_select=on_select />
                            }.into_any(),
                            Tab::Groups => view! { <GroupGoalList /> }.into_any(),
                        }}
                    </Show>
                </ErrorBoundary>
            </main>

            {move || {
                let signed_in = ctx.session.with(|session| session.is_signed_in());
                let goal_id = selected_goal.get().filter(|_| signed_in)?;
                Some(view! {
                    <aside class="progress-column">
                        <button class="close-btn" on:click=move |_| set_selected_goal.set(None)>"×"</button>
                        <ProgressFeed goal_id=goal_id />
                    </aside>
                })
            }}

            <ToastStack />
        </div>
    }
}
