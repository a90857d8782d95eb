//! Collection Fetchers
//!
//! One fetcher per list resource. Each asks the API for a page and normalizes the response
//! before anything else sees it. No retries happen here; the view retries on demand.

use async_trait::async_trait;
use tracing::debug;

use crate::api::{GoalApi, GoalScope, PageQuery};
use crate::domain::{CollectionPage, Entity, Goal, GroupGoal, ProgressEntry};
use crate::error::SyncResult;

/// Paginated reads of one resource
#[async_trait(?Send)]
pub trait CollectionFetcher {
    type Item: Entity;

    async fn fetch_page(
        &self,
        subject: &str,
        page: u32,
        page_size: u32,
    ) -> SyncResult<CollectionPage<Self::Item>>;
}

/// A user's goals in one scope
pub struct GoalFeed<'a, A: ?Sized> {
    api: &'a A,
    scope: GoalScope,
}

impl<'a, A: GoalApi + ?Sized> GoalFeed<'a, A> {
    pub fn new(api: &'a A, scope: GoalScope) -> Self {
        Self { api, scope }
    }
}

#[async_trait(?Send)]
impl<A: GoalApi + ?Sized> CollectionFetcher for GoalFeed<'_, A> {
    type Item = Goal;

    async fn fetch_page(
        &self,
        subject: &str,
        page: u32,
        page_size: u32,
    ) -> SyncResult<CollectionPage<Goal>> {
        debug!(scope = self.scope.as_str(), subject, page, "fetching goals");
        let query = PageQuery::new(subject, page, page_size);
        let raw = self.api.list_goals(self.scope, &query).await?;
        Ok(raw.normalize(page, page_size))
    }
}

/// The viewer's group goals
pub struct GroupGoalFeed<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: GoalApi + ?Sized> GroupGoalFeed<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: GoalApi + ?Sized> CollectionFetcher for GroupGoalFeed<'_, A> {
    type Item = GroupGoal;

    async fn fetch_page(
        &self,
        subject: &str,
        page: u32,
        page_size: u32,
    ) -> SyncResult<CollectionPage<GroupGoal>> {
        debug!(subject, page, "fetching group goals");
        let query = PageQuery::new(subject, page, page_size);
        let raw = self.api.list_group_goals(&query).await?;
        Ok(raw.normalize(page, page_size))
    }
}

/// Progress entries posted against one goal; the subject is the goal id
pub struct ProgressFeed<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: GoalApi + ?Sized> ProgressFeed<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl<A: GoalApi + ?Sized> CollectionFetcher for ProgressFeed<'_, A> {
    type Item = ProgressEntry;

    async fn fetch_page(
        &self,
        subject: &str,
        page: u32,
        page_size: u32,
    ) -> SyncResult<CollectionPage<ProgressEntry>> {
        debug!(goal = subject, page, "fetching progress entries");
        let query = PageQuery::new(subject, page, page_size);
        let raw = self.api.list_progress_entries(&query).await?;
        Ok(raw.normalize(page, page_size))
    }
}
