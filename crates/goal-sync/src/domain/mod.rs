//! Domain Layer
//!
//! Wire entities shared with the goals API plus the normalized page model.
//! This layer has no transport dependencies (only serde and chrono).

mod entity;
mod goal;
mod group_goal;
mod progress;
mod fields;
mod page;

pub use entity::Entity;
pub use fields::{FieldKey, FieldValue, Mutable};
pub use goal::{Goal, Step};
pub use group_goal::{CheckIn, GroupGoal, Member};
pub use page::{CollectionPage, Envelope, RawPage};
pub use progress::{Comment, ProgressEntry};
