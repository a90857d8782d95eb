use tracing::{debug, info};

use crate::cell::StateCell;
use crate::fetcher::CollectionFetcher;
use crate::notify::Notifier;
use crate::pagination::{Applied, PageRequest, PagedCollection};

/// A page load a view can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Initial,
    Reset,
    Page(u32),
    Next,
    Prev,
    More,
    Retry,
}

/// Drives page loads for one collection
pub struct Loader<'a, F, N: ?Sized> {
    fetcher: F,
    notifier: &'a N,
    subject: String,
}

impl<'a, F, N> Loader<'a, F, N>
where
    F: CollectionFetcher,
    N: Notifier + ?Sized,
{
    pub fn new(fetcher: F, notifier: &'a N, subject: impl Into<String>) -> Self {
        Self {
            fetcher,
            notifier,
            subject: subject.into(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    // ========================
    // Loads
    // ========================

    pub async fn perform<C>(&self, cell: &C, action: PageAction) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        match action {
            PageAction::Initial => self.load_initial(cell).await,
            PageAction::Reset => self.reset(cell).await,
            PageAction::Page(page) => self.go_to_page(cell, page).await,
            PageAction::Next => self.next_page(cell).await,
            PageAction::Prev => self.prev_page(cell).await,
            PageAction::More => self.load_more(cell).await,
            PageAction::Retry => self.retry(cell).await,
        }
    }

    pub async fn load_initial<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let request = cell.update(|collection| collection.begin_initial())?;
        self.run(cell, request).await
    }

    pub async fn reset<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        info!(subject = %self.subject, "resetting collection");
        let request = cell.update(|collection| collection.reset())?;
        self.run(cell, request).await
    }

    pub async fn go_to_page<C>(&self, cell: &C, page: u32) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let request = cell.update(|collection| collection.begin_page(page))??;
        self.run(cell, request).await
    }

    pub async fn next_page<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let request = cell.update(|collection| collection.begin_next_page())??;
        self.run(cell, request).await
    }

    pub async fn prev_page<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let request = cell.update(|collection| collection.begin_prev_page())??;
        self.run(cell, request).await
    }

    /// `None` without any network call when there is nothing more or a load is running.
    pub async fn load_more<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let Some(request) = cell.update(|collection| collection.begin_load_more())? else {
            debug!(subject = %self.subject, "load more skipped");
            return None;
        };
        self.run(cell, request).await
    }

    pub async fn retry<C>(&self, cell: &C) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let request = cell.update(|collection| collection.retry())??;
        self.run(cell, request).await
    }

    async fn run<C>(&self, cell: &C, request: PageRequest) -> Option<Applied>
    where
        C: StateCell<PagedCollection<F::Item>>,
    {
        let result = self
            .fetcher
            .fetch_page(&self.subject, request.page, request.page_size)
            .await;
        let failure = result.as_ref().err().cloned();

        let Some(applied) = cell.update(|collection| collection.apply(&request, result)) else {
            debug!(subject = %self.subject, page = request.page, "view gone, dropping page");
            return None;
        };
        if let (Applied::Failed, Some(err)) = (applied, failure) {
            self.notifier.report_failure(&err);
        }
        Some(applied)
    }
}
