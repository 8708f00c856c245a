//! `Slot` — an entry that is either a plain value or a shared [`Cell`].
//!
//! Callers holding a slot do not statically know which case they have; the
//! two cases are told apart by matching, never by probing the value.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Cell;

/// A value, or a cell holding one.
///
/// A slot denotes exactly one logical value at a time. Equality compares that
/// value, so `Slot::Direct(1) == Slot::boxed(1)`.
///
/// # Examples
///
/// ```
/// use slotref::{Cell, Slot};
///
/// let shared = Cell::new(1);
/// let slot = Slot::Boxed(shared.clone());
///
/// shared.write(2);
/// assert_eq!(slot.get(), 2);
/// assert_eq!(Slot::Direct(2).get(), 2);
/// ```
pub enum Slot<T> {
    /// A value with no indirection.
    Direct(T),
    /// A handle to a cell shared with other holders.
    Boxed(Cell<T>),
}

impl<T> Slot<T> {
    /// Creates a direct slot.
    #[inline(always)]
    pub fn direct(value: T) -> Self {
        Self::Direct(value)
    }

    /// Creates a slot holding a fresh cell.
    #[inline(always)]
    pub fn boxed(value: T) -> Self {
        Self::Boxed(Cell::new(value))
    }

    /// Returns `true` for the `Boxed` case.
    #[inline(always)]
    pub fn is_cell(&self) -> bool {
        matches!(self, Self::Boxed(_))
    }

    /// Returns the cell handle, if any.
    #[inline(always)]
    pub fn as_cell(&self) -> Option<&Cell<T>> {
        match self {
            Self::Boxed(cell) => Some(cell),
            Self::Direct(_) => None,
        }
    }

    /// Calls `f` with a reference to the held value.
    ///
    /// Works for values that are not `Clone`.
    ///
    /// # Panics
    /// Panics if the slot is a cell that is currently mutably borrowed.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self {
            Self::Direct(value) => f(value),
            Self::Boxed(cell) => cell.with(f),
        }
    }
}

impl<T: Clone> Slot<T> {
    /// Returns the held value: the cell's current value, or the value itself.
    ///
    /// # Panics
    /// Panics if the slot is a cell that is currently mutably borrowed.
    #[inline]
    pub fn get(&self) -> T {
        match self {
            Self::Direct(value) => value.clone(),
            Self::Boxed(cell) => cell.read(),
        }
    }

    /// Consumes the slot and returns the held value.
    ///
    /// A cell that is still aliased elsewhere has its value cloned out and is
    /// left untouched for the other holders.
    pub fn into_inner(self) -> T {
        match self {
            Self::Direct(value) => value,
            Self::Boxed(cell) => cell.try_into_inner().unwrap_or_else(|cell| cell.read()),
        }
    }
}

// Cloning a `Boxed` slot aliases the cell.
impl<T: Clone> Clone for Slot<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Direct(value) => Self::Direct(value.clone()),
            Self::Boxed(cell) => Self::Boxed(cell.clone()),
        }
    }
}

impl<T> From<Cell<T>> for Slot<T> {
    fn from(cell: Cell<T>) -> Self {
        Self::Boxed(cell)
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Self::Direct(value)
    }
}

impl<T: PartialEq> PartialEq for Slot<T> {
    /// Compares the held values; two handles to one cell are always equal.
    ///
    /// # Panics
    /// Panics if either side is a cell that is currently mutably borrowed and
    /// the two sides are not the same cell.
    fn eq(&self, other: &Self) -> bool {
        if let (Self::Boxed(a), Self::Boxed(b)) = (self, other) {
            if Cell::ptr_eq(a, b) {
                return true;
            }
        }
        self.with(|a| other.with(|b| a == b))
    }
}

impl<T: Eq> Eq for Slot<T> {}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct(value) => f.debug_tuple("Direct").field(value).finish(),
            Self::Boxed(cell) => f.debug_tuple("Boxed").field(cell).finish(),
        }
    }
}

/// Serializes as the held value, with no tag.
impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Direct(value) => value.serialize(serializer),
            Self::Boxed(cell) => cell.serialize(serializer),
        }
    }
}

/// Deserializes a bare value into a `Direct` slot.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::Direct)
    }
}

/// Proptest strategies producing either slot case.
#[cfg(feature = "proptest")]
pub mod strategy {
    use core::fmt;

    use proptest::prelude::*;

    use super::Slot;

    /// Yields `Direct` and `Boxed` slots with values drawn from `inner`.
    pub fn slot_of<S>(inner: S) -> BoxedStrategy<Slot<S::Value>>
    where
        S: Strategy + Clone + 'static,
        S::Value: fmt::Debug + 'static,
    {
        prop_oneof![
            inner.clone().prop_map(Slot::Direct),
            inner.prop_map(Slot::boxed),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Slot::Direct(1), Slot::boxed(1));
        assert_ne!(Slot::Direct(1), Slot::boxed(2));
    }

    #[test]
    fn aliased_cell_equals_itself_while_borrowed() {
        let cell = Cell::new(1);
        let a = Slot::Boxed(cell.clone());
        let b = Slot::Boxed(cell.clone());
        let _w = cell.borrow_mut();
        assert!(a == b);
    }

    #[test]
    fn from_value_is_direct() {
        let slot: Slot<i32> = Slot::from(5);
        assert!(matches!(slot, Slot::Direct(5)));
        let slot: Slot<i32> = 6.into();
        assert!(!slot.is_cell());
    }

    #[test]
    #[should_panic(expected = "already mutably borrowed")]
    fn comparing_with_a_written_cell_panics() {
        let cell = Cell::new(1);
        let boxed = Slot::Boxed(cell.clone());
        let _w = cell.borrow_mut();
        let _ = boxed == Slot::Direct(1);
    }

    #[test]
    fn clone_aliases_boxed_slot() {
        let slot = Slot::boxed(vec![1]);
        let copy = slot.clone();
        slot.as_cell().unwrap().update(|v| v.push(2));
        assert_eq!(copy.get(), vec![1, 2]);
    }

    #[test]
    fn with_reaches_non_clone_values() {
        struct Opaque(u8);
        let slot = Slot::boxed(Opaque(9));
        assert_eq!(slot.with(|o| o.0), 9);
        assert!(slot.is_cell());
        assert!(!Slot::Direct(Opaque(1)).is_cell());
    }

    #[test]
    fn into_inner_leaves_shared_cell_intact() {
        let cell = Cell::new(String::from("kept"));
        let slot: Slot<String> = Slot::from(cell.clone());
        assert_eq!(slot.into_inner(), "kept");
        assert_eq!(cell.read(), "kept");
        assert_eq!(Cell::handle_count(&cell), 1);
        assert_eq!(Slot::boxed(3).into_inner(), 3);
    }
}
