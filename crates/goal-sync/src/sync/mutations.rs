use std::future::Future;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::api::GoalApi;
use crate::cell::StateCell;
use crate::domain::{Comment, FieldKey, FieldValue, Goal, GroupGoal, Mutable, ProgressEntry};
use crate::error::{SyncError, SyncResult};
use crate::notify::{Notification, Notifier};
use crate::optimistic::{MutationIntent, MutationRejected, LIKE_BURST_DURATION};
use crate::pagination::PagedCollection;

use super::Scheduler;

/// How a mutation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted it and its value is now shown.
    Confirmed,
    /// The server refused it; the previous value is back.
    RolledBack(SyncError),
    /// Never started; no network call was made.
    Skipped(MutationRejected),
    /// The view went away before the mutation could start or finish.
    Dropped,
}

/// What the server sent back for a confirmed mutation
enum Confirmation<T> {
    Field(FieldValue),
    Item(T),
}

/// Optimistic mutations and the small writes around them
pub struct Mutator<'a, A: ?Sized, N: ?Sized, S: ?Sized> {
    api: &'a A,
    notifier: &'a N,
    scheduler: &'a S,
}

impl<'a, A, N, S> Mutator<'a, A, N, S>
where
    A: GoalApi + ?Sized,
    N: Notifier + ?Sized,
    S: Scheduler + ?Sized,
{
    pub fn new(api: &'a A, notifier: &'a N, scheduler: &'a S) -> Self {
        Self {
            api,
            notifier,
            scheduler,
        }
    }

    // ========================
    // Progress entries
    // ========================

    /// Toggle the viewer's like and play the burst animation.
    pub async fn toggle_like<C>(&self, cell: &C, entry_id: &str, viewer_id: &str) -> MutationOutcome
    where
        C: StateCell<PagedCollection<ProgressEntry>>,
    {
        let id = entry_id.to_string();
        if let Some(ticket) = cell.update(|feed| feed.start_burst(&id)) {
            let timer_cell = cell.clone();
            self.scheduler.schedule(
                LIKE_BURST_DURATION,
                Box::new(move || {
                    timer_cell.update(|feed| feed.clear_burst(&ticket));
                }),
            );
        }

        self.mutate(
            cell,
            &id,
            FieldKey::Likes,
            |likes| likes.toggle_like(viewer_id),
            move |_| async move {
                let likes = self.api.toggle_progress_like(entry_id).await?;
                Ok(Confirmation::Field(FieldValue::Likes(likes)))
            },
        )
        .await
    }

    /// Post a comment. Empty content fails locally without a request.
    pub async fn add_comment<C>(
        &self,
        cell: &C,
        entry_id: &str,
        content: &str,
    ) -> SyncResult<Comment>
    where
        C: StateCell<PagedCollection<ProgressEntry>>,
    {
        let content = self.validated(content, "comment")?;
        match self.api.add_comment(entry_id, content).await {
            Ok(comment) => {
                let id = entry_id.to_string();
                cell.update(|feed| feed.update_item(&id, |entry| entry.comment_count += 1));
                Ok(comment)
            }
            Err(err) => Err(self.report("add comment", err)),
        }
    }

    /// Post a progress entry and put it at the top of the feed.
    pub async fn create_progress_entry<C>(
        &self,
        cell: &C,
        goal_id: &str,
        content: &str,
    ) -> SyncResult<ProgressEntry>
    where
        C: StateCell<PagedCollection<ProgressEntry>>,
    {
        let content = self.validated(content, "progress update")?;
        match self.api.create_progress_entry(goal_id, content).await {
            Ok(entry) => {
                info!(goal = goal_id, entry = %entry.id, "progress entry created");
                cell.update(|feed| feed.prepend(entry.clone()));
                Ok(entry)
            }
            Err(err) => Err(self.report("create progress entry", err)),
        }
    }

    pub async fn list_comments(&self, entry_id: &str) -> SyncResult<Vec<Comment>> {
        self.api
            .list_comments(entry_id)
            .await
            .map_err(|err| self.report("list comments", err))
    }

    // ========================
    // Goals
    // ========================

    pub async fn toggle_goal_step<C>(
        &self,
        cell: &C,
        goal_id: &str,
        step_id: &str,
    ) -> MutationOutcome
    where
        C: StateCell<PagedCollection<Goal>>,
    {
        self.mutate(
            cell,
            &goal_id.to_string(),
            FieldKey::Step(step_id.to_string()),
            FieldValue::negate,
            move |intent| async move {
                let completed = intent.optimistic == FieldValue::Flag(true);
                let goal = self.api.set_goal_step(goal_id, step_id, completed).await?;
                Ok(Confirmation::Item(goal))
            },
        )
        .await
    }

    /// Archive a goal. Nothing changes on screen until the server agrees.
    pub async fn archive_goal<C>(&self, cell: &C, goal_id: &str) -> MutationOutcome
    where
        C: StateCell<PagedCollection<Goal>>,
    {
        let id = goal_id.to_string();
        match cell.update(|goals| goals.begin_archive(&id)) {
            None => return MutationOutcome::Dropped,
            Some(Err(rejected)) => {
                debug!(goal = goal_id, ?rejected, "archive skipped");
                return MutationOutcome::Skipped(rejected);
            }
            Some(Ok(())) => {}
        }

        match self.api.archive_goal(goal_id).await {
            Ok(()) => {
                info!(goal = goal_id, "goal archived");
                if cell.update(|goals| goals.finish_archive(&id, true)).is_none() {
                    return MutationOutcome::Dropped;
                }
                self.notifier.notify(Notification::success("Goal archived"));
                MutationOutcome::Confirmed
            }
            Err(err) => {
                cell.update(|goals| goals.finish_archive(&id, false));
                MutationOutcome::RolledBack(self.report("archive goal", err))
            }
        }
    }

    // ========================
    // Group goals
    // ========================

    pub async fn toggle_group_step<C>(
        &self,
        cell: &C,
        group_goal_id: &str,
        step_id: &str,
    ) -> MutationOutcome
    where
        C: StateCell<PagedCollection<GroupGoal>>,
    {
        self.mutate(
            cell,
            &group_goal_id.to_string(),
            FieldKey::Step(step_id.to_string()),
            FieldValue::negate,
            move |intent| async move {
                let completed = intent.optimistic == FieldValue::Flag(true);
                let group = self
                    .api
                    .set_group_step(group_goal_id, step_id, completed)
                    .await?;
                Ok(Confirmation::Item(group))
            },
        )
        .await
    }

    /// Toggle the viewer's check-in for `date` (today, from the caller's clock).
    pub async fn toggle_check_in<C>(
        &self,
        cell: &C,
        group_goal_id: &str,
        viewer_id: &str,
        date: NaiveDate,
    ) -> MutationOutcome
    where
        C: StateCell<PagedCollection<GroupGoal>>,
    {
        let field = FieldKey::CheckIn {
            user_id: viewer_id.to_string(),
            date,
        };
        self.mutate(
            cell,
            &group_goal_id.to_string(),
            field,
            FieldValue::negate,
            move |intent| async move {
                let checked_in = intent.optimistic == FieldValue::Flag(true);
                let group = self.api.set_check_in(group_goal_id, checked_in).await?;
                Ok(Confirmation::Item(group))
            },
        )
        .await
    }

    // ========================
    // Helpers
    // ========================

    async fn mutate<T, C, Fut>(
        &self,
        cell: &C,
        item_id: &T::Id,
        field: FieldKey,
        optimistic: impl FnOnce(&FieldValue) -> FieldValue,
        call: impl FnOnce(MutationIntent<T::Id>) -> Fut,
    ) -> MutationOutcome
    where
        T: Mutable,
        C: StateCell<PagedCollection<T>>,
        Fut: Future<Output = SyncResult<Confirmation<T>>>,
    {
        let intent = match cell.update(|items| items.begin_mutation(item_id, field, optimistic)) {
            None => return MutationOutcome::Dropped,
            Some(Err(rejected)) => {
                debug!(item = ?item_id, ?rejected, "mutation skipped");
                return MutationOutcome::Skipped(rejected);
            }
            Some(Ok(intent)) => intent,
        };

        match call(intent.clone()).await {
            Ok(confirmation) => {
                let confirmed = cell.update(|items| match confirmation {
                    Confirmation::Field(value) => items.confirm_mutation(&intent, value),
                    Confirmation::Item(item) => items.confirm_mutation_with(&intent, item),
                });
                match confirmed {
                    Some(()) => MutationOutcome::Confirmed,
                    None => MutationOutcome::Dropped,
                }
            }
            Err(err) => {
                cell.update(|items| items.rollback_mutation(&intent));
                MutationOutcome::RolledBack(self.report("mutation", err))
            }
        }
    }

    fn validated<'c>(&self, content: &'c str, what: &str) -> SyncResult<&'c str> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(self.report(what, SyncError::Validation(format!("{what} cannot be empty"))));
        }
        Ok(trimmed)
    }

    /// Log once, notify once, hand the error back.
    fn report(&self, action: &str, err: SyncError) -> SyncError {
        warn!(action, error = %err, "sync call failed");
        self.notifier.report_failure(&err);
        err
    }
}
