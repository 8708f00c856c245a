//! # `slotref` - Value-or-Cell Slots
//!
//! Reactive UI state is often a mix of plain values and shared cells: a
//! component may receive either a number or a cell holding a number, and it
//! should read and assign both the same way. This crate gives that pattern an
//! explicit shape.
//!
//! ## Core Abstractions
//!
//! 1. **Cells** (`Cell<T>`):
//!    - Reference-counted handles to one shared box
//!    - Writes are visible through every handle immediately
//!    - Identity is separate from the held value (`Cell::ptr_eq`)
//!
//! 2. **Slots** (`Slot<T>`):
//!    - Exactly two cases: `Direct(T)` or `Boxed(Cell<T>)`
//!    - Matched, never probed at runtime
//!
//! 3. **Unwrap** (`unwrap::get`, `unwrap::set`):
//!    - `get` reads through a cell or returns the plain value
//!    - `set` writes into a cell in place, or replaces the plain entry
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. `Cell<T>` is neither
//! `Send` nor `Sync`. Scheduling work in response to a cell write is the host
//! framework's job; `Cell::version` is available to detect writes.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use slotref::{unwrap, Cell, Slot};
//!
//! let count = Cell::new(1);
//! let mut props = HashMap::from([
//!     ("count", Slot::Boxed(count.clone())),
//!     ("step", Slot::Direct(1)),
//! ]);
//!
//! unwrap::set(&mut props, "count", 5);
//! unwrap::set(&mut props, "step", 2);
//!
//! // The parent's handle saw the write.
//! assert_eq!(count.read(), 5);
//! assert_eq!(unwrap::get(&props["step"]), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
pub mod container;
pub mod slot;
pub mod unwrap;

pub use cell::{BorrowError, BorrowMutError, Cell};
pub use container::SlotContainer;
pub use slot::Slot;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // A cell is one pointer.
    assert!(mem::size_of::<Cell<u64>>() == mem::size_of::<usize>());
    // The non-null handle gives `Option<Cell<T>>` a niche.
    assert!(mem::size_of::<Option<Cell<u64>>>() == mem::size_of::<usize>());
};
