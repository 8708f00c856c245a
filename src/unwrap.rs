//! `get` / `set` over slots that may or may not be cells.
//!
//! ## Semantics
//!
//! - [`get`] returns a cell's current value, or a plain value as-is.
//! - [`set`] writes *into* a cell found at `key`, so every other holder of that
//!   cell sees the update and the cell keeps its identity. Any other entry is
//!   replaced by the new value. An absent key gets a new direct entry.
//!
//! Both are synchronous, total, and idempotent under repeated identical calls.
//! Notifying observers of a cell write is left to the host framework; see
//! [`Cell::version`](crate::Cell::version).

use crate::{Slot, SlotContainer};

/// Returns the value a slot denotes.
///
/// # Panics
/// Panics if the slot is a cell that is currently mutably borrowed, for
/// example when called from inside [`Cell::update`](crate::Cell::update) on
/// the same cell.
///
/// # Examples
///
/// ```
/// use slotref::{unwrap, Slot};
///
/// assert_eq!(unwrap::get(&Slot::Direct(3)), 3);
/// assert_eq!(unwrap::get(&Slot::boxed(4)), 4);
/// ```
#[inline]
pub fn get<T: Clone>(slot: &Slot<T>) -> T {
    slot.get()
}

/// Returns the value at `key`, or `None` if the container has no such entry.
///
/// # Panics
/// Panics if the slot at `key` is a cell that is currently mutably borrowed.
#[inline]
pub fn get_at<C>(container: &C, key: &C::Key) -> Option<C::Value>
where
    C: SlotContainer + ?Sized,
    C::Value: Clone,
{
    container.slot(key).map(Slot::get)
}

/// Assigns `value` to the slot at `key`.
///
/// A cell is written in place; a direct entry is replaced; an absent key is
/// inserted as a direct entry.
///
/// # Panics
/// Panics if the cell at `key` is borrowed while it is written.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use slotref::{unwrap, Cell, Slot};
///
/// let shared = Cell::new(1);
/// let mut state = HashMap::from([("a", Slot::Boxed(shared.clone())), ("b", Slot::Direct(1))]);
///
/// unwrap::set(&mut state, "a", 5);
/// unwrap::set(&mut state, "b", 5);
///
/// assert_eq!(shared.read(), 5);
/// assert_eq!(state["b"], Slot::Direct(5));
/// ```
pub fn set<C>(container: &mut C, key: C::Key, value: C::Value)
where
    C: SlotContainer + ?Sized,
{
    match container.slot_mut(&key) {
        Some(Slot::Boxed(cell)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(version = cell.version(), "set: writing through cell");
            cell.write(value);
        }
        Some(slot) => {
            #[cfg(feature = "tracing")]
            tracing::trace!("set: replacing direct value");
            *slot = Slot::Direct(value);
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("set: inserting direct value");
            container.put(key, Slot::Direct(value));
        }
    }
}
