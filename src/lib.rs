//! arraylist - An ordered list over a growable array
//!
//! # Overview
//!
//! `ArrayList<T>` keeps its elements contiguously, in positional order, and
//! addresses them by 0-based index. The backing array grows by half its
//! size plus one whenever it fills up and is only shrunk back by `clear`.
//!
//! # Quick Start
//!
//! ```
//! use arraylist::ArrayList;
//!
//! let mut names = ArrayList::new();
//! for name in ["Ola", "Kari", "Per"] {
//!     names.insert(0, name)?;
//! }
//! assert_eq!(names.to_string(), "[Per, Kari, Ola]");
//!
//! assert_eq!(names.update(1, "Karin")?, "Kari");
//! assert_eq!(names.remove(0)?, "Per");
//! assert_eq!(names.index_of(&"Ola"), Some(1));
//! # Ok::<(), arraylist::ListError>(())
//! ```
//!
//! # Removing While Traversing
//!
//! A [`ListCursor`] walks the list and can remove the element it yielded
//! last. [`ArrayList::remove_if`] is built on it:
//!
//! ```
//! use arraylist::{ArrayList, Cursor};
//!
//! let mut list: ArrayList<u32> = (1..=6).collect();
//! assert!(list.remove_if(|v| v % 3 == 0));
//! assert_eq!(list.to_string(), "[1, 2, 4, 5]");
//!
//! let mut cursor = list.cursor();
//! cursor.next()?;
//! cursor.remove()?;
//! // A second remove needs another `next` first.
//! assert!(cursor.remove().is_err());
//! # Ok::<(), arraylist::ListError>(())
//! ```
//!
//! While a cursor is alive it holds the list mutably, so the list cannot be
//! changed behind its back.

pub use arraylist_core::{
    ArrayList, Bounds, Container, Cursor, DEFAULT_CAPACITY, Iter, ListCursor, ListError,
    check_index,
};

/// The store is exposed for callers that want the raw growth policy.
pub mod store {
    pub use arraylist_core::store::{Store, grown_capacity};
}
