//! Optimistic Mutations
//!
//! A mutation is captured as a [`MutationIntent`]: the field it touches, the value before,
//! and the value shown while the request is in flight. Confirming writes the server's
//! value; rolling back writes the value before. Only one mutation per item and field may
//! be pending.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

use crate::domain::{FieldKey, FieldValue, Mutable};
use crate::pagination::PagedCollection;

/// How long the like burst animation stays on
pub const LIKE_BURST_DURATION: Duration = Duration::from_millis(600);

/// One pending optimistic change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationIntent<Id> {
    pub item_id: Id,
    pub field: FieldKey,
    pub previous: FieldValue,
    pub optimistic: FieldValue,
}

/// Why a mutation did not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationRejected {
    /// The item is not in the loaded collection.
    NotLoaded,
    /// The item has no such field (unknown step id, likes on a group goal, ...).
    FieldUnavailable,
    /// A mutation on the same item and field is still pending.
    InFlight,
}

/// Pending `(item, field)` pairs
#[derive(Debug, Clone)]
pub struct MutationLedger<Id> {
    pending: HashSet<(Id, FieldKey)>,
}

impl<Id> Default for MutationLedger<Id> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<Id: Clone + Eq + Hash> MutationLedger<Id> {
    pub fn is_pending(&self, id: &Id, field: &FieldKey) -> bool {
        self.pending.contains(&(id.clone(), field.clone()))
    }

    /// False when the pair is already pending.
    fn claim(&mut self, id: &Id, field: &FieldKey) -> bool {
        self.pending.insert((id.clone(), field.clone()))
    }

    fn release(&mut self, id: &Id, field: &FieldKey) {
        self.pending.remove(&(id.clone(), field.clone()));
    }
}

/// Handle for clearing one burst; a newer burst on the same item invalidates it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurstTicket<Id> {
    pub item_id: Id,
    seq: u64,
}

/// Cosmetic per-item animation flags
#[derive(Debug, Clone)]
pub struct BurstFlags<Id> {
    active: HashMap<Id, u64>,
    next_seq: u64,
}

impl<Id> Default for BurstFlags<Id> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<Id: Clone + Eq + Hash> BurstFlags<Id> {
    pub fn start(&mut self, id: &Id) -> BurstTicket<Id> {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.active.insert(id.clone(), seq);
        BurstTicket {
            item_id: id.clone(),
            seq,
        }
    }

    /// Clear the flag if `ticket` is still the newest burst for its item.
    pub fn clear(&mut self, ticket: &BurstTicket<Id>) -> bool {
        if self.active.get(&ticket.item_id) == Some(&ticket.seq) {
            self.active.remove(&ticket.item_id);
            true
        } else {
            false
        }
    }

    pub fn is_active(&self, id: &Id) -> bool {
        self.active.contains_key(id)
    }
}

impl<T: Mutable> PagedCollection<T> {
    /// Apply `optimistic(previous)` to the field right away and record the intent.
    pub fn begin_mutation(
        &mut self,
        item_id: &T::Id,
        field: FieldKey,
        optimistic: impl FnOnce(&FieldValue) -> FieldValue,
    ) -> Result<MutationIntent<T::Id>, MutationRejected> {
        if self.mutations().is_pending(item_id, &field) {
            return Err(MutationRejected::InFlight);
        }
        let item = self.item_mut(item_id).ok_or(MutationRejected::NotLoaded)?;
        let previous = item
            .read_field(&field)
            .ok_or(MutationRejected::FieldUnavailable)?;
        let next = optimistic(&previous);
        if !item.write_field(&field, next.clone()) {
            return Err(MutationRejected::FieldUnavailable);
        }
        self.mutations_mut().claim(item_id, &field);
        Ok(MutationIntent {
            item_id: item_id.clone(),
            field,
            previous,
            optimistic: next,
        })
    }

    /// Replace the optimistic value with the server's.
    pub fn confirm_mutation(&mut self, intent: &MutationIntent<T::Id>, authoritative: FieldValue) {
        if let Some(item) = self.item_mut(&intent.item_id) {
            item.write_field(&intent.field, authoritative);
        }
        self.mutations_mut().release(&intent.item_id, &intent.field);
    }

    /// Replace the whole item with the server's copy.
    pub fn confirm_mutation_with(&mut self, intent: &MutationIntent<T::Id>, item: T) {
        self.replace_item(item);
        self.mutations_mut().release(&intent.item_id, &intent.field);
    }

    /// Put the field back to what it was before the intent.
    pub fn rollback_mutation(&mut self, intent: &MutationIntent<T::Id>) {
        if let Some(item) = self.item_mut(&intent.item_id) {
            item.write_field(&intent.field, intent.previous.clone());
        }
        self.mutations_mut().release(&intent.item_id, &intent.field);
    }

    pub fn is_mutating(&self, item_id: &T::Id, field: &FieldKey) -> bool {
        self.mutations().is_pending(item_id, field)
    }

    /// Reserve an archive. Nothing changes locally until it succeeds.
    pub fn begin_archive(&mut self, item_id: &T::Id) -> Result<(), MutationRejected> {
        if self.get(item_id).is_none() {
            return Err(MutationRejected::NotLoaded);
        }
        if !self.mutations_mut().claim(item_id, &FieldKey::Archived) {
            return Err(MutationRejected::InFlight);
        }
        Ok(())
    }

    /// Finish an archive: on success the item leaves the collection and `total` drops by one.
    pub fn finish_archive(&mut self, item_id: &T::Id, succeeded: bool) -> Option<T> {
        self.mutations_mut().release(item_id, &FieldKey::Archived);
        if succeeded {
            self.remove(item_id)
        } else {
            None
        }
    }

    pub fn start_burst(&mut self, item_id: &T::Id) -> BurstTicket<T::Id> {
        self.bursts_mut().start(item_id)
    }

    pub fn clear_burst(&mut self, ticket: &BurstTicket<T::Id>) -> bool {
        self.bursts_mut().clear(ticket)
    }

    pub fn is_bursting(&self, item_id: &T::Id) -> bool {
        self.bursts().is_active(item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollectionPage, ProgressEntry};

    fn feed() -> PagedCollection<ProgressEntry> {
        let mut collection = PagedCollection::new(10);
        let request = collection.begin_initial();
        let mut liked = ProgressEntry::new("e1", "Ran 5k");
        liked.likes = vec!["ana".to_string()];
        collection.apply(
            &request,
            Ok(CollectionPage::single(vec![liked, ProgressEntry::new("e2", "Rest day")])),
        );
        collection
    }

    fn id(raw: &str) -> String {
        raw.to_string()
    }

    #[test]
    fn optimistic_value_applies_immediately() {
        let mut collection = feed();
        let intent = collection
            .begin_mutation(&id("e1"), FieldKey::Likes, |likes| likes.toggle_like("me"))
            .unwrap();

        assert_eq!(intent.previous, FieldValue::Likes(vec![id("ana")]));
        assert!(collection.get(&id("e1")).unwrap().is_liked_by("me"));
        assert!(collection.is_mutating(&id("e1"), &FieldKey::Likes));
    }

    #[test]
    fn confirm_uses_the_server_value() {
        let mut collection = feed();
        let intent = collection
            .begin_mutation(&id("e1"), FieldKey::Likes, |likes| likes.toggle_like("me"))
            .unwrap();

        // Someone else liked it meanwhile; the server's list wins.
        let server_likes = FieldValue::Likes(vec![id("ana"), id("bo"), id("me")]);
        collection.confirm_mutation(&intent, server_likes);
        assert_eq!(collection.get(&id("e1")).unwrap().likes.len(), 3);
        assert!(!collection.is_mutating(&id("e1"), &FieldKey::Likes));
    }

    #[test]
    fn rollback_restores_exactly() {
        let mut collection = feed();
        let intent = collection
            .begin_mutation(&id("e1"), FieldKey::Likes, |likes| likes.toggle_like("ana"))
            .unwrap();
        assert!(collection.get(&id("e1")).unwrap().likes.is_empty());

        collection.rollback_mutation(&intent);
        assert_eq!(collection.get(&id("e1")).unwrap().likes, vec![id("ana")]);
    }

    #[test]
    fn second_mutation_on_same_field_is_rejected() {
        let mut collection = feed();
        collection
            .begin_mutation(&id("e1"), FieldKey::Likes, |likes| likes.toggle_like("me"))
            .unwrap();
        let second =
            collection.begin_mutation(&id("e1"), FieldKey::Likes, |likes| likes.toggle_like("me"));
        assert_eq!(second, Err(MutationRejected::InFlight));
        // Other items are unaffected.
        assert!(collection
            .begin_mutation(&id("e2"), FieldKey::Likes, |likes| likes.toggle_like("me"))
            .is_ok());
    }

    #[test]
    fn unknown_item_or_field_is_rejected_without_side_effects() {
        let mut collection = feed();
        assert_eq!(
            collection.begin_mutation(&id("nope"), FieldKey::Likes, |v| v.clone()),
            Err(MutationRejected::NotLoaded)
        );
        assert_eq!(
            collection.begin_mutation(&id("e1"), FieldKey::Step(id("s1")), |v| v.negate()),
            Err(MutationRejected::FieldUnavailable)
        );
        assert!(!collection.is_mutating(&id("e1"), &FieldKey::Step(id("s1"))));
    }

    #[test]
    fn archive_removes_only_on_success() {
        let mut collection = feed();
        collection.begin_archive(&id("e1")).unwrap();
        assert_eq!(collection.begin_archive(&id("e1")), Err(MutationRejected::InFlight));
        assert!(collection.finish_archive(&id("e1"), false).is_none());
        assert_eq!(collection.items().len(), 2);

        collection.begin_archive(&id("e1")).unwrap();
        assert!(collection.finish_archive(&id("e1"), true).is_some());
        assert_eq!(collection.items().len(), 1);
        assert_eq!(collection.total(), 1);
    }

    #[test]
    fn older_burst_timer_does_not_clear_newer_burst() {
        let mut collection = feed();
        let first = collection.start_burst(&id("e1"));
        let second = collection.start_burst(&id("e1"));

        assert!(!collection.clear_burst(&first));
        assert!(collection.is_bursting(&id("e1")));
        assert!(collection.clear_burst(&second));
        assert!(!collection.is_bursting(&id("e1")));
    }
}
