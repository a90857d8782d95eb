//! Mutable Fields
//!
//! Addresses the fields an optimistic mutation may touch, and the values they hold.

use chrono::NaiveDate;

use super::entity::Entity;

/// A mutable field on a collection item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// The list of user ids that liked the item
    Likes,
    /// Completion flag of one step
    Step(String),
    /// Whether `user_id` checked in on `date`
    CheckIn { user_id: String, date: NaiveDate },
    /// Archive flag; only ever reserved, never written optimistically
    Archived,
}

/// The value held by a [`FieldKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Likes(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    /// Likes with `user_id` added when absent, removed when present.
    pub fn toggle_like(&self, user_id: &str) -> FieldValue {
        match self {
            FieldValue::Likes(likes) => {
                let mut next = likes.clone();
                if let Some(pos) = next.iter().position(|id| id == user_id) {
                    next.remove(pos);
                } else {
                    next.push(user_id.to_string());
                }
                FieldValue::Likes(next)
            }
            other => other.clone(),
        }
    }

    /// Flag flipped; likes are returned unchanged.
    pub fn negate(&self) -> FieldValue {
        match self {
            FieldValue::Flag(flag) => FieldValue::Flag(!flag),
            other => other.clone(),
        }
    }
}

/// Items whose fields can be read and written by key
pub trait Mutable: Entity {
    /// Current value, or `None` when the item has no such field (e.g. unknown step id).
    fn read_field(&self, key: &FieldKey) -> Option<FieldValue>;

    /// Write a value. Returns false when the key or value kind does not apply.
    fn write_field(&mut self, key: &FieldKey, value: FieldValue) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_like_adds_then_removes() {
        let likes = FieldValue::Likes(vec!["a".to_string()]);
        let liked = likes.toggle_like("me");
        assert_eq!(liked, FieldValue::Likes(vec!["a".to_string(), "me".to_string()]));
        assert_eq!(liked.toggle_like("me"), likes);
    }

    #[test]
    fn negate_only_touches_flags() {
        assert_eq!(FieldValue::Flag(false).negate(), FieldValue::Flag(true));
        let likes = FieldValue::Likes(Vec::new());
        assert_eq!(likes.negate(), likes);
    }
}
