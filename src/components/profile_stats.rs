//! Profile Stats Component
//!
//! Counts per status and average progress over the loaded goals.

use goal_sync::projection::goal_stats;
use goal_sync::{Goal, PagedCollection};
use leptos::prelude::*;

#[component]
pub fn ProfileStats(collection: RwSignal<PagedCollection<Goal>>) -> impl IntoView {
    let stats = Memo::new(move |_| collection.with(|goals| goal_stats(goals.items())));
    let total = move || collection.with(|goals| goals.total());

    view! {
        <div class="profile-stats">
            <div class="stat"><span class="stat-value">{total}</span><span class="stat-label">"Goals"</span></div>
            <div class="stat"><span class="stat-value">{move || stats.get().completed}</span><span class="stat-label">"Completed"</span></div>
            <div class="stat"><span class="stat-value">{move || stats.get().near_complete}</span><span class="stat-label">"Almost there"</span></div>
            <div class="stat"><span class="stat-value">{move || stats.get().in_progress}</span><span class="stat-label">"In progress"</span></div>
            <div class="stat"><span class="stat-value">{move || format!("{}%", stats.get().average_percent)}</span><span class="stat-label">"Average"</span></div>
        </div>
    }
}
