#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Ordered, index-addressable list over a growable array, with a cursor that
//! can remove elements mid-traversal.
//!
//! - [`store`]: the slot buffer and its growth policy.
//! - [`ArrayList`]: index-based operations and their validation.
//! - [`ListCursor`]: forward traversal with `remove`, the building block of
//!   [`ArrayList::remove_if`].

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod container;
pub mod cursor;
pub mod error;
pub mod list;
pub mod store;

pub use container::{Container, Cursor};
pub use cursor::ListCursor;
pub use error::{Bounds, ListError, check_index};
pub use list::{ArrayList, DEFAULT_CAPACITY, Iter};
pub use store::Store;

static_assertions::assert_impl_all!(ArrayList<alloc::string::String>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(ArrayList<alloc::rc::Rc<u8>>: Send, Sync);

#[cfg(test)]
mod store_test;
