//! Domain Layer - Core Entity Trait
//!
//! Every item a collection holds has an immutable identifier.

use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for all collection items
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
