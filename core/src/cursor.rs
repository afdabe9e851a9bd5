//! Removing cursor over an [`ArrayList`](crate::ArrayList).

use crate::container::Cursor;
use crate::error::ListError;
use crate::store::Store;

/// A cursor that walks a list front to back and can remove what it just
/// yielded.
///
/// The cursor borrows the list's store mutably for its whole lifetime, so the
/// list cannot be changed through any other path while a traversal is in
/// progress.
///
/// ```
/// use arraylist_core::{ArrayList, Cursor};
///
/// let mut list: ArrayList<i32> = (1..=5).collect();
/// let mut cursor = list.cursor();
/// while cursor.has_next() {
///     if cursor.next()? % 2 == 0 {
///         cursor.remove()?;
///     }
/// }
/// assert_eq!(list.to_string(), "[1, 3, 5]");
/// # Ok::<(), arraylist_core::ListError>(())
/// ```
pub struct ListCursor<'a, T> {
    store: &'a mut Store<T>,
    next: usize,
    removable: bool,
}

impl<'a, T> ListCursor<'a, T> {
    pub(crate) fn new(store: &'a mut Store<T>) -> Self {
        Self {
            store,
            next: 0,
            removable: false,
        }
    }
}

impl<T> Cursor<T> for ListCursor<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.next < self.store.len()
    }

    fn next(&mut self) -> Result<&T, ListError> {
        if !self.has_next() {
            return Err(ListError::NoSuchElement);
        }
        let at = self.next;
        self.next += 1;
        self.removable = true;
        self.store.get(at).ok_or(ListError::NoSuchElement)
    }

    fn remove(&mut self) -> Result<T, ListError> {
        if !self.removable {
            return Err(ListError::IllegalState);
        }
        self.removable = false;
        // The last yielded element sits just behind the cursor. Stepping back
        // keeps the cursor on the element that shifts into its slot.
        self.next -= 1;
        self.store.remove(self.next).ok_or(ListError::IllegalState)
    }
}
