//! Reactive Collections
//!
//! A `PagedCollection` in an `RwSignal`. Writes after the owning component is disposed
//! are ignored, so late responses never touch an unmounted view.

use goal_sync::{Entity, PagedCollection, StateCell};
use leptos::prelude::*;

use crate::api;

pub struct SignalCell<S: 'static>(RwSignal<S>);

impl<S: 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalCell<S> {}

impl<S: Send + Sync + 'static> SignalCell<S> {
    pub fn signal(&self) -> RwSignal<S> {
        self.0
    }
}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with(f)
    }
}

/// Empty collection with the configured page size, owned by the current component
pub fn new_collection<T>() -> SignalCell<PagedCollection<T>>
where
    T: Entity + Send + Sync + 'static,
    T::Id: Send + Sync,
{
    SignalCell(RwSignal::new(PagedCollection::new(api::config().page_size)))
}
