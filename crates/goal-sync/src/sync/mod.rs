//! Sync Drivers
//!
//! The async half of the crate. A driver takes a request from collection state, awaits
//! the API, and writes the outcome back through a [`StateCell`](crate::cell::StateCell).
//! Errors are logged here and handed to a [`Notifier`](crate::notify::Notifier) once.

mod loader;
mod mutations;


use std::time::Duration;

pub use loader::{Loader, PageAction};
pub use mutations::{MutationOutcome, Mutator};

/// Runs a task once after a delay (the like burst timer)
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
