use core::{
    fmt,
    ops::{Deref, DerefMut},
};

use super::Shared;

/// Immutable borrow guard for [`Cell`](super::Cell).
pub struct Ref<'cell, T> {
    pub(super) shared: &'cell Shared<T>,
}

impl<T> Deref for Ref<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        // SAFETY: `Ref` exists only after incrementing the reader count, and
        // while it is positive no `RefMut` can be created.
        unsafe { &*self.shared.value.get() }
    }
}

impl<T> Drop for Ref<'_, T> {
    fn drop(&mut self) {
        let prev = self.shared.borrow.get();
        debug_assert!(prev > 0, "Borrow count underflow");
        self.shared.borrow.set(prev - 1);
    }
}

/// Mutable borrow guard for [`Cell`](super::Cell).
pub struct RefMut<'cell, T> {
    pub(super) shared: &'cell Shared<T>,
}

impl<T> Deref for RefMut<'_, T> {
    type Target = T;

    #[inline(always)]
    fn deref(&self) -> &T {
        // SAFETY: `RefMut` exists only after transitioning borrow state 0 -> -1 (exclusive).
        unsafe { &*self.shared.value.get() }
    }
}

impl<T> DerefMut for RefMut<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: `RefMut` exists only after transitioning borrow state 0 -> -1 (exclusive).
        unsafe { &mut *self.shared.value.get() }
    }
}

impl<T> Drop for RefMut<'_, T> {
    fn drop(&mut self) {
        // Clear writer flag.
        debug_assert_eq!(self.shared.borrow.get(), -1, "Expected writer borrow count");
        self.shared.borrow.set(0);
    }
}

impl<T: fmt::Debug> fmt::Debug for Ref<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T: fmt::Debug> fmt::Debug for RefMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
