//! State Cells
//!
//! Async drivers write their results through a [`StateCell`]. A cell whose owner has gone
//! away (the view unmounted) answers `None`, and the late result is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Shared, single-threaded access to a piece of view state
pub trait StateCell<S>: Clone + 'static {
    /// Mutate the state. `None` when the owner is gone.
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    /// Read the state. `None` when the owner is gone.
    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: 'static> StateCell<S> for Rc<RefCell<S>> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S: 'static> StateCell<S> for Weak<RefCell<S>> {
    fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&mut cell.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&cell.borrow()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_cell_drops_updates_after_owner_is_gone() {
        let owner = Rc::new(RefCell::new(1));
        let weak = Rc::downgrade(&owner);
        assert_eq!(weak.update(|n| { *n += 1; *n }), Some(2));

        drop(owner);
        assert_eq!(weak.update(|n| *n += 1), None);
        assert_eq!(weak.read(|n| *n), None);
    }
}
