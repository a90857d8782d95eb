//! API Layer - Core Traits
//!
//! Defines the abstract interface to the goals backend.
//! The HTTP client implements it; tests plug in an in-memory fake.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Goal, GroupGoal, ProgressEntry, RawPage};
use crate::error::SyncResult;

/// Which of a user's goal lists to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalScope {
    #[default]
    Active,
    Archived,
    Completed,
}

impl GoalScope {
    pub fn path(&self) -> &'static str {
        match self {
            GoalScope::Active => "goals",
            GoalScope::Archived => "goals/archived",
            GoalScope::Completed => "goals/completed",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalScope::Active => "active",
            GoalScope::Archived => "archived",
            GoalScope::Completed => "completed",
        }
    }
}

/// Subject plus page coordinates of one list request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageQuery {
    /// User id for goal lists, goal id for progress feeds
    pub subject: String,
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    pub fn new(subject: impl Into<String>, page: u32, limit: u32) -> Self {
        Self {
            subject: subject.into(),
            page,
            limit,
        }
    }
}

/// The goals backend.
///
/// List calls return the raw response shape; fetchers normalize it. Futures are not `Send`:
/// everything runs on the UI thread.
#[async_trait(?Send)]
pub trait GoalApi {
    /// `GET /goals`, `/goals/archived` or `/goals/completed`
    async fn list_goals(&self, scope: GoalScope, query: &PageQuery) -> SyncResult<RawPage<Goal>>;

    /// `GET /group-goals/mine`
    async fn list_group_goals(&self, query: &PageQuery) -> SyncResult<RawPage<GroupGoal>>;

    /// `GET /goals/:subject/progress-entries`
    async fn list_progress_entries(&self, query: &PageQuery)
        -> SyncResult<RawPage<ProgressEntry>>;

    /// `POST /progress-entries`
    async fn create_progress_entry(&self, goal_id: &str, content: &str)
        -> SyncResult<ProgressEntry>;

    /// `POST /progress-entries/:id/like`. The server toggles the viewer's like and answers
    /// with the full likes list.
    async fn toggle_progress_like(&self, entry_id: &str) -> SyncResult<Vec<String>>;

    /// `GET /progress-entries/:id/comments`
    async fn list_comments(&self, entry_id: &str) -> SyncResult<Vec<Comment>>;

    /// `POST /progress-entries/:id/comments`
    async fn add_comment(&self, entry_id: &str, content: &str) -> SyncResult<Comment>;

    /// `PATCH /goals/:id/steps/:stepId`
    async fn set_goal_step(&self, goal_id: &str, step_id: &str, completed: bool)
        -> SyncResult<Goal>;

    /// `PATCH /goals/:id/archive`
    async fn archive_goal(&self, goal_id: &str) -> SyncResult<()>;

    /// `POST /group-goals/:id/steps/:stepId`
    async fn set_group_step(&self, group_goal_id: &str, step_id: &str, completed: bool)
        -> SyncResult<GroupGoal>;

    /// `POST /group-goals/:id/checkin`
    async fn set_check_in(&self, group_goal_id: &str, checked_in: bool) -> SyncResult<GroupGoal>;
}
