//! `Cell` — a shared, aliasable box with runtime borrow checking.
//!
//! A `Cell<T>` is a *handle*: cloning it yields another handle to the same
//! storage, so a write through any handle is immediately visible through all
//! of them. This is the "reactive reference" a [`Slot`](crate::Slot) may hold.
//!
//! ## Layout
//!
//! Every handle points at one reference-counted block holding:
//! - a borrow flag (negative = writing, positive = reading, zero = free),
//! - a write counter used as the cell's [`version`](Cell::version),
//! - the value itself in an `UnsafeCell`.
//!
//! The flag and counter are plain `core::cell::Cell`s; the handle is built on
//! `Rc`, so a `Cell<T>` is neither `Send` nor `Sync`.

mod error;
mod guards;

pub use error::{BorrowError, BorrowMutError};
pub use guards::{Ref, RefMut};

use core::{cell::UnsafeCell, fmt, mem};
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) struct Shared<T> {
    // Borrow count: negative = writing, positive = reading, zero = free.
    pub(crate) borrow: core::cell::Cell<isize>,
    pub(crate) version: core::cell::Cell<u64>,
    pub(crate) value: UnsafeCell<T>,
}

/// A shared mutable box whose identity is distinct from the value it holds.
///
/// # Examples
///
/// ```
/// use slotref::Cell;
///
/// let a = Cell::new(1);
/// let b = a.clone();
///
/// b.write(5);
/// assert_eq!(a.read(), 5);
/// assert!(Cell::ptr_eq(&a, &b));
/// ```
pub struct Cell<T> {
    inner: Rc<Shared<T>>,
}

impl<T> Cell<T> {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Shared {
                borrow: core::cell::Cell::new(0),
                version: core::cell::Cell::new(0),
                value: UnsafeCell::new(value),
            }),
        }
    }

    /// Returns `true` if both handles refer to the same storage.
    #[inline(always)]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.inner, &other.inner)
    }

    /// Number of live handles aliasing this cell.
    #[inline(always)]
    pub fn handle_count(this: &Self) -> usize {
        Rc::strong_count(&this.inner)
    }

    /// Number of mutable borrows taken so far.
    ///
    /// Every write bumps the version, including writes of an equal value, so a
    /// host can poll it to learn that something was assigned.
    #[inline(always)]
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Returns `true` if the cell is currently borrowed.
    #[inline(always)]
    pub fn is_borrowed(&self) -> bool {
        self.inner.borrow.get() != 0
    }

    /// Immutably borrows the held value.
    ///
    /// # Panics
    /// Panics if the value is currently mutably borrowed.
    #[inline(always)]
    #[track_caller]
    pub fn borrow(&self) -> Ref<'_, T> {
        match self.try_borrow() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mutably borrows the held value.
    ///
    /// # Panics
    /// Panics if the value is currently borrowed.
    #[inline(always)]
    #[track_caller]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        match self.try_borrow_mut() {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }

    /// Attempts to immutably borrow the held value.
    ///
    /// # Errors
    /// Returns [`BorrowError`] if the value is currently mutably borrowed.
    #[inline(always)]
    pub fn try_borrow(&self) -> Result<Ref<'_, T>, BorrowError> {
        let current = self.inner.borrow.get();
        if current < 0 {
            return Err(BorrowError);
        }
        self.inner.borrow.set(current + 1);
        Ok(Ref { shared: &self.inner })
    }

    /// Attempts to mutably borrow the held value.
    ///
    /// # Errors
    /// Returns [`BorrowMutError`] if the value is currently borrowed.
    #[inline(always)]
    pub fn try_borrow_mut(&self) -> Result<RefMut<'_, T>, BorrowMutError> {
        if self.inner.borrow.get() != 0 {
            return Err(BorrowMutError);
        }
        self.inner.borrow.set(-1);
        self.inner.version.set(self.inner.version.get().wrapping_add(1));
        Ok(RefMut { shared: &self.inner })
    }

    /// Calls `f` with a shared reference to the held value.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.borrow())
    }

    /// Calls `f` with an exclusive reference to the held value.
    #[inline]
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.borrow_mut())
    }

    /// Stores `value`, dropping the previous one.
    ///
    /// Every handle observes the new value immediately.
    #[inline]
    pub fn write(&self, value: T) {
        *self.borrow_mut() = value;
    }

    /// Stores `value` and returns the previous one.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        mem::replace(&mut *self.borrow_mut(), value)
    }

    /// Unwraps the value if this is the only handle, otherwise gives the handle back.
    ///
    /// # Errors
    /// Returns `Err(self)` when other handles are still alive.
    pub fn try_into_inner(self) -> Result<T, Self> {
        match Rc::try_unwrap(self.inner) {
            Ok(shared) => Ok(shared.value.into_inner()),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<T: Clone> Cell<T> {
    /// Returns a clone of the held value.
    #[inline]
    pub fn read(&self) -> T {
        self.borrow().clone()
    }
}

// Cloning copies the handle, never the value.
impl<T> Clone for Cell<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for Cell<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.try_borrow() {
            Ok(value) => f.debug_struct("Cell").field("value", &*value).finish(),
            Err(_) => f.debug_struct("Cell").field("value", &"<borrowed>").finish(),
        }
    }
}

/// Serializes the held value; a cell that is being written is a serializer error.
impl<T: Serialize> Serialize for Cell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.try_borrow()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Cell<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
