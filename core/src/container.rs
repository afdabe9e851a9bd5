//! Traits shared by containers that can be traversed with a removing cursor.

use crate::error::ListError;
use core::convert::Infallible;

/// A forward cursor that can remove the element it yielded last.
///
/// `remove` is only legal directly after a successful `next`; calling it
/// twice in a row, or before the first `next`, fails with
/// [`ListError::IllegalState`].
pub trait Cursor<T> {
    /// Whether `next` would yield an element.
    fn has_next(&self) -> bool;

    /// Yields the next element and advances.
    fn next(&mut self) -> Result<&T, ListError>;

    /// Removes the element yielded by the last `next` and returns it.
    fn remove(&mut self) -> Result<T, ListError>;
}

/// A collection whose elements can be visited, and dropped, one at a time.
pub trait Container<T> {
    /// The cursor handed out by [`Container::cursor`].
    type Traversal<'a>: Cursor<T>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a traversal from the first element.
    fn cursor(&mut self) -> Self::Traversal<'_>;

    /// Removes every element matching `predicate`, keeping the relative order
    /// of the rest. Returns whether anything was removed.
    fn remove_if<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        match self.try_remove_if(|value| Ok::<_, Infallible>(predicate(value))) {
            Ok(removed) => removed,
            Err(never) => match never {},
        }
    }

    /// Like [`Container::remove_if`], with a fallible predicate.
    ///
    /// The first error stops the traversal and is returned as is. Elements
    /// removed before it stay removed.
    fn try_remove_if<E, F>(&mut self, mut predicate: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        let mut removed = false;
        let mut cursor = self.cursor();
        while let Ok(value) = cursor.next() {
            // Removing through the cursor steps it back, so the element that
            // slid into this slot is visited next.
            if predicate(value)? && cursor.remove().is_ok() {
                removed = true;
            }
        }
        Ok(removed)
    }
}
