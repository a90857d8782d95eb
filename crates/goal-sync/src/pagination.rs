//! Paginated Collection State
//!
//! Owns the items a view shows plus the pagination metadata, and decides what a
//! completed fetch does to them. Network calls happen elsewhere: the caller asks for a
//! [`PageRequest`], performs it, and hands the result back to [`PagedCollection::apply`].
//!
//! Only one request is live at a time. A replace request (initial load, reset, explicit
//! page) supersedes whatever is live; load-more is refused while anything is live. A
//! completion for a request that is no longer live is discarded.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{CollectionPage, Entity};
use crate::error::SyncError;
use crate::optimistic::{BurstFlags, MutationLedger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
    Loaded,
    Error,
}

/// What a completed page does to the current items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    Replace,
    Append,
}

/// A fetch the collection is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
    pub mode: LoadMode,
    ticket: u64,
}

impl PageRequest {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// Outcome of [`PagedCollection::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Replaced,
    Appended { added: usize, skipped: usize },
    Failed,
    /// The request had been superseded; nothing changed.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PagedCollection<T: Entity> {
    items: Vec<T>,
    page: u32,
    total_pages: u32,
    total: u64,
    has_next_page: bool,
    has_prev_page: bool,
    page_size: u32,
    state: LoadState,
    error: Option<SyncError>,
    next_ticket: u64,
    live: Option<u64>,
    failed: Option<(LoadMode, u32)>,
    mutations: MutationLedger<T::Id>,
    bursts: BurstFlags<T::Id>,
}

impl<T: Entity> PagedCollection<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total: 0,
            has_next_page: false,
            has_prev_page: false,
            page_size: page_size.max(1),
            state: LoadState::Idle,
            error: None,
            next_ticket: 0,
            live: None,
            failed: None,
            mutations: MutationLedger::default(),
            bursts: BurstFlags::default(),
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    pub fn has_prev_page(&self) -> bool {
        self.has_prev_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The last load failure, shown as a banner above whatever items are still there.
    pub fn error(&self) -> Option<&SyncError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::LoadingInitial | LoadState::LoadingMore)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================
    // Requests
    // ========================

    /// First load on mount. Existing items stay visible until the response lands.
    pub fn begin_initial(&mut self) -> PageRequest {
        self.issue(LoadMode::Replace, 1)
    }

    /// Explicit reset (e.g. after the subject changed or a mutation elsewhere).
    pub fn reset(&mut self) -> PageRequest {
        self.failed = None;
        self.begin_initial()
    }

    /// Jump to `target`, replacing the current items.
    ///
    /// `None` when `target` is outside the known page range.
    pub fn begin_page(&mut self, target: u32) -> Option<PageRequest> {
        if target == 0 {
            return None;
        }
        if self.state != LoadState::Idle && target > self.total_pages {
            return None;
        }
        Some(self.issue(LoadMode::Replace, target))
    }

    pub fn begin_next_page(&mut self) -> Option<PageRequest> {
        if !self.has_next_page {
            return None;
        }
        self.begin_page(self.page + 1)
    }

    pub fn begin_prev_page(&mut self) -> Option<PageRequest> {
        if !self.has_prev_page {
            return None;
        }
        self.begin_page(self.page - 1)
    }

    /// Ask for `page + 1` to append. `None`, with nothing touched, when there is no next
    /// page or a request is already live.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if !self.has_next_page || self.live.is_some() {
            return None;
        }
        Some(self.issue(LoadMode::Append, self.page + 1))
    }

    /// Re-issue the request that failed last, in the same mode.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.state != LoadState::Error {
            return None;
        }
        match self.failed? {
            (LoadMode::Append, page) if self.live.is_none() => {
                Some(self.issue(LoadMode::Append, page))
            }
            (LoadMode::Append, _) => None,
            (LoadMode::Replace, page) => Some(self.issue(LoadMode::Replace, page)),
        }
    }

    fn issue(&mut self, mode: LoadMode, page: u32) -> PageRequest {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        if let Some(superseded) = self.live.replace(ticket) {
            debug!(superseded, ticket, "request superseded");
        }
        self.state = match mode {
            LoadMode::Replace => LoadState::LoadingInitial,
            LoadMode::Append => LoadState::LoadingMore,
        };
        PageRequest {
            page,
            page_size: self.page_size,
            mode,
            ticket,
        }
    }

    // ========================
    // Completions
    // ========================

    /// Fold a finished request into the collection.
    pub fn apply(
        &mut self,
        request: &PageRequest,
        result: Result<CollectionPage<T>, SyncError>,
    ) -> Applied {
        if self.live != Some(request.ticket) {
            debug!(ticket = request.ticket, "discarding stale page");
            return Applied::Stale;
        }
        self.live = None;

        match result {
            Ok(page) => {
                let applied = match request.mode {
                    LoadMode::Replace => {
                        self.items = page.items;
                        Applied::Replaced
                    }
                    LoadMode::Append => {
                        let offered = page.items.len();
                        let before = self.items.len();
                        for item in page.items {
                            if self.get(item.id()).is_none() {
                                self.items.push(item);
                            }
                        }
                        let added = self.items.len() - before;
                        if added < offered {
                            debug!(skipped = offered - added, "skipped items already loaded");
                        }
                        Applied::Appended {
                            added,
                            skipped: offered - added,
                        }
                    }
                };
                self.page = page.page;
                self.total_pages = page.total_pages;
                self.total = page.total;
                self.has_next_page = page.has_next_page;
                self.has_prev_page = page.has_prev_page;
                self.state = LoadState::Loaded;
                self.error = None;
                self.failed = None;
                applied
            }
            Err(err) => {
                warn!(page = request.page, error = %err, "page load failed");
                self.state = LoadState::Error;
                self.error = Some(err);
                self.failed = Some((request.mode, request.page));
                Applied::Failed
            }
        }
    }

    // ========================
    // Local edits
    // ========================

    /// Drop an item and count it out of `total`.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        self.total = self.total.saturating_sub(1);
        Some(self.items.remove(index))
    }

    /// Put a newly created item at the top.
    pub fn prepend(&mut self, item: T) {
        if self.replace_item(item.clone()) {
            return;
        }
        self.items.insert(0, item);
        self.total += 1;
    }

    /// Swap in the server's copy of an item. False when it is not loaded.
    pub fn replace_item(&mut self, item: T) -> bool {
        match self.item_mut(item.id()) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn update_item(&mut self, id: &T::Id, f: impl FnOnce(&mut T)) -> bool {
        match self.item_mut(id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    pub(crate) fn item_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub(crate) fn mutations(&self) -> &MutationLedger<T::Id> {
        &self.mutations
    }

    pub(crate) fn mutations_mut(&mut self) -> &mut MutationLedger<T::Id> {
        &mut self.mutations
    }

    pub(crate) fn bursts(&self) -> &BurstFlags<T::Id> {
        &self.bursts
    }

    pub(crate) fn bursts_mut(&mut self) -> &mut BurstFlags<T::Id> {
        &mut self.bursts
    }
}
