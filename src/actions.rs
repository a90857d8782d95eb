//! Sync Actions
//!
//! Fire-and-forget wrappers around the goal-sync drivers. Each spawns on the UI thread,
//! borrows the shared API client and reports failures through the toast store.

use chrono::Local;
use goal_sync::{
    Comment, GoalFeed, GoalScope, GroupGoalFeed, Loader, Mutator, PageAction, PagedCollection,
    ProgressFeed,
};
use goal_sync::{Goal, GroupGoal, Notifier, ProgressEntry};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::error;

use crate::api;
use crate::browser::TimeoutScheduler;
use crate::collection::SignalCell;
use crate::store::StoreNotifier;

type Goals = SignalCell<PagedCollection<Goal>>;
type GroupGoals = SignalCell<PagedCollection<GroupGoal>>;
type Entries = SignalCell<PagedCollection<ProgressEntry>>;

/// The shared client, or a toast explaining why there is none
macro_rules! client_or_return {
    ($notifier:expr) => {
        match api::client() {
            Ok(api) => api,
            Err(err) => {
                error!(error = %err, "api client unavailable");
                $notifier.report_failure(&err);
                return;
            }
        }
    };
}

// ========================
// Page loads
// ========================

pub fn load_goals(
    notifier: StoreNotifier,
    cell: Goals,
    scope: GoalScope,
    subject: String,
    action: PageAction,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Loader::new(GoalFeed::new(api.as_ref(), scope), &notifier, subject)
            .perform(&cell, action)
            .await;
    });
}

pub fn load_group_goals(
    notifier: StoreNotifier,
    cell: GroupGoals,
    subject: String,
    action: PageAction,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Loader::new(GroupGoalFeed::new(api.as_ref()), &notifier, subject)
            .perform(&cell, action)
            .await;
    });
}

pub fn load_progress(notifier: StoreNotifier, cell: Entries, goal_id: String, action: PageAction) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Loader::new(ProgressFeed::new(api.as_ref()), &notifier, goal_id)
            .perform(&cell, action)
            .await;
    });
}

// ========================
// Mutations
// ========================

pub fn toggle_like(notifier: StoreNotifier, cell: Entries, entry_id: String, viewer_id: String) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .toggle_like(&cell, &entry_id, &viewer_id)
            .await;
    });
}

pub fn toggle_goal_step(notifier: StoreNotifier, cell: Goals, goal_id: String, step_id: String) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .toggle_goal_step(&cell, &goal_id, &step_id)
            .await;
    });
}

pub fn archive_goal(notifier: StoreNotifier, cell: Goals, goal_id: String) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .archive_goal(&cell, &goal_id)
            .await;
    });
}

pub fn toggle_group_step(
    notifier: StoreNotifier,
    cell: GroupGoals,
    group_goal_id: String,
    step_id: String,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .toggle_group_step(&cell, &group_goal_id, &step_id)
            .await;
    });
}

/// Check in (or undo) for today, local time
pub fn toggle_check_in(
    notifier: StoreNotifier,
    cell: GroupGoals,
    group_goal_id: String,
    viewer_id: String,
) {
    let today = Local::now().date_naive();
    spawn_local(async move {
        let api = client_or_return!(notifier);
        Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .toggle_check_in(&cell, &group_goal_id, &viewer_id, today)
            .await;
    });
}

// ========================
// Comments and entries
// ========================

pub fn create_progress_entry(
    notifier: StoreNotifier,
    cell: Entries,
    goal_id: String,
    content: String,
    on_created: Callback<()>,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        let created = Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .create_progress_entry(&cell, &goal_id, &content)
            .await;
        if created.is_ok() {
            on_created.run(());
        }
    });
}

pub fn add_comment(
    notifier: StoreNotifier,
    cell: Entries,
    entry_id: String,
    content: String,
    on_added: Callback<Comment>,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        let added = Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .add_comment(&cell, &entry_id, &content)
            .await;
        if let Ok(comment) = added {
            on_added.run(comment);
        }
    });
}

pub fn list_comments(
    notifier: StoreNotifier,
    entry_id: String,
    set_comments: WriteSignal<Vec<Comment>>,
) {
    spawn_local(async move {
        let api = client_or_return!(notifier);
        let listed = Mutator::new(api.as_ref(), &notifier, &TimeoutScheduler)
            .list_comments(&entry_id)
            .await;
        if let Ok(comments) = listed {
            let _ = set_comments.try_set(comments);
        }
    });
}
