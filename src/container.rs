//! Keyed containers of slots.
//!
//! [`SlotContainer`] is the seam [`unwrap::set`](crate::unwrap::set) writes
//! through. It is implemented for the standard maps; a host framework can
//! implement it for its own component state.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, HashMap};

use crate::Slot;

/// A mapping from keys to [`Slot`]s.
pub trait SlotContainer {
    /// Key type.
    type Key;
    /// Type of the value each slot holds.
    type Value;

    /// Returns the slot stored at `key`.
    fn slot(&self, key: &Self::Key) -> Option<&Slot<Self::Value>>;

    /// Returns the slot stored at `key` for in-place replacement.
    fn slot_mut(&mut self, key: &Self::Key) -> Option<&mut Slot<Self::Value>>;

    /// Stores `slot` at `key`, creating the entry if it is absent.
    fn put(&mut self, key: Self::Key, slot: Slot<Self::Value>);
}

impl<K, V, S> SlotContainer for HashMap<K, Slot<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn slot(&self, key: &K) -> Option<&Slot<V>> {
        self.get(key)
    }

    #[inline]
    fn slot_mut(&mut self, key: &K) -> Option<&mut Slot<V>> {
        self.get_mut(key)
    }

    #[inline]
    fn put(&mut self, key: K, slot: Slot<V>) {
        self.insert(key, slot);
    }
}

impl<K: Ord, V> SlotContainer for BTreeMap<K, Slot<V>> {
    type Key = K;
    type Value = V;

    #[inline]
    fn slot(&self, key: &K) -> Option<&Slot<V>> {
        self.get(key)
    }

    #[inline]
    fn slot_mut(&mut self, key: &K) -> Option<&mut Slot<V>> {
        self.get_mut(key)
    }

    #[inline]
    fn put(&mut self, key: K, slot: Slot<V>) {
        self.insert(key, slot);
    }
}
