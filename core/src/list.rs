//! `ArrayList`: an ordered, index-addressable list over a growable array.

use crate::container::Container;
use crate::cursor::ListCursor;
use crate::error::{Bounds, ListError, check_index};
use crate::store::Store;
use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, slice};

/// Capacity of a list built with [`ArrayList::new`], and the capacity a grown
/// list falls back to on [`ArrayList::clear`].
pub const DEFAULT_CAPACITY: usize = 10;

/// An ordered list of `T` backed by a contiguous, growable array.
///
/// Elements are addressed by 0-based index. Inserting or removing in the
/// middle shifts the tail; appending grows the backing array by half its
/// size plus one when it is full. Removal never shrinks it, only
/// [`clear`](ArrayList::clear) does.
///
/// # Example
///
/// ```
/// use arraylist_core::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push("b");
/// list.insert(0, "a")?;
/// assert_eq!(list.get(1)?, &"b");
/// assert_eq!(list.index_of(&"a"), Some(0));
/// assert_eq!(list.to_string(), "[a, b]");
/// # Ok::<(), arraylist_core::ListError>(())
/// ```
#[derive(Clone)]
pub struct ArrayList<T> {
    store: Store<T>,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Store::with_capacity(capacity),
        }
    }

    /// Creates a list holding clones of `values`, with no spare capacity.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from(values.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: T) {
        tracing::trace!(len = self.len(), "push");
        self.store.push(value);
    }

    /// Inserts `value` at `index`, shifting everything from `index` on one
    /// position right. `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len();
        check_index(index, len, Bounds::Insert)?;
        tracing::trace!(index, len, "insert");
        self.store
            .insert(index, value)
            .map_err(|_| ListError::IndexOutOfRange { index, len })
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        check_index(index, self.len(), Bounds::Existing)?;
        self.store.get(index).ok_or(self.out_of_range(index))
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn update(&mut self, index: usize, value: T) -> Result<T, ListError> {
        check_index(index, self.len(), Bounds::Existing)?;
        let err = self.out_of_range(index);
        self.store.replace(index, value).ok_or(err)
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        check_index(index, self.len(), Bounds::Existing)?;
        tracing::trace!(index, len = self.len(), "remove");
        let err = self.out_of_range(index);
        self.store.remove(index).ok_or(err)
    }

    /// Removes every element matching `predicate` in a single pass.
    ///
    /// Survivors keep their relative order. Returns whether anything was
    /// removed.
    pub fn remove_if<F>(&mut self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        Container::remove_if(self, predicate)
    }

    /// Like [`ArrayList::remove_if`], stopping at the first predicate error.
    pub fn try_remove_if<E, F>(&mut self, predicate: F) -> Result<bool, E>
    where
        F: FnMut(&T) -> Result<bool, E>,
    {
        Container::try_remove_if(self, predicate)
    }

    /// Removes every element.
    ///
    /// A list that grew beyond [`DEFAULT_CAPACITY`] gets a fresh buffer of
    /// that size; a smaller one keeps its buffer.
    pub fn clear(&mut self) {
        self.store.reset(DEFAULT_CAPACITY);
    }

    /// Starts a removing traversal, see [`ListCursor`].
    pub fn cursor(&mut self) -> ListCursor<'_, T> {
        ListCursor::new(&mut self.store)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.store.slots().iter(),
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    fn out_of_range(&self, index: usize) -> ListError {
        ListError::IndexOutOfRange {
            index,
            len: self.len(),
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether one was
    /// found.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.store.remove(index).is_some(),
            None => false,
        }
    }
}

impl<T> Container<T> for ArrayList<T> {
    type Traversal<'a>
        = ListCursor<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.store.len()
    }

    fn cursor(&mut self) -> Self::Traversal<'_> {
        ListCursor::new(&mut self.store)
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        Self {
            store: Store::from_vec(values),
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Read-only iterator over the elements of an [`ArrayList`], in order.
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}
