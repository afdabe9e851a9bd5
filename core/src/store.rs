//! Growable array store backing [`ArrayList`](crate::ArrayList).
//!
//! The store owns a boxed slice of slots. Slots `[0, len)` are always live
//! and slots `[len, capacity)` are always cleared:
//!
//! ```text
//! slots:  [ Some(a) | Some(b) | Some(c) | None | None ]
//!           └──────── len = 3 ────────┘
//!           └──────────────── capacity = 5 ──────────┘
//! ```
//!
//! Capacity only grows, by `floor(3 * capacity / 2) + 1` whenever a write
//! finds the store full, and only shrinks through [`Store::reset`].
//!
//! The store performs no validation of its own. Callers check indices first;
//! primitives that take an index return `None` instead of panicking when the
//! index is out of range.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::iter;

#[derive(Clone)]
pub struct Store<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

/// Capacity after one growth step.
#[inline]
pub const fn grown_capacity(capacity: usize) -> usize {
    // floor(3c / 2) == c + floor(c / 2), without the intermediate overflow.
    capacity.saturating_add(capacity / 2).saturating_add(1)
}

impl<T> Store<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Takes ownership of `values`; the capacity equals their count.
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            slots: values.into_iter().map(Some).collect(),
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The live prefix of the buffer.
    #[inline]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    pub fn get(&self, at: usize) -> Option<&T> {
        self.slots().get(at).and_then(Option::as_ref)
    }

    /// Grows the buffer if every slot is in use.
    ///
    /// Returns whether a reallocation happened.
    pub fn ensure_capacity(&mut self) -> bool {
        if self.len < self.capacity() {
            return false;
        }
        let new_capacity = grown_capacity(self.capacity());
        tracing::debug!(
            from = self.capacity(),
            to = new_capacity,
            len = self.len,
            "Growing list store"
        );
        self.reallocate(new_capacity);
        true
    }

    /// Moves the live elements, in order, into a fresh buffer.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    /// Opens a gap at `at` by moving `[at, len)` one slot to the right.
    ///
    /// Requires `at <= len < capacity`. The gap is left cleared and `len` is
    /// not changed; the caller fills the gap.
    fn shift_right(&mut self, at: usize) {
        debug_assert!(at <= self.len && self.len < self.capacity());
        // The slot at `len` is cleared, so rotating it to the front opens the gap.
        self.slots[at..=self.len].rotate_right(1);
    }

    /// Closes the gap at `at` by moving `[at + 1, len)` one slot to the left.
    ///
    /// Requires the slot at `at` to be cleared already. The vacated trailing
    /// slot ends up cleared and `len` shrinks by one.
    fn shift_left(&mut self, at: usize) {
        debug_assert!(at < self.len && self.slots[at].is_none());
        self.slots[at..self.len].rotate_left(1);
        self.len -= 1;
    }

    pub fn push(&mut self, value: T) {
        self.ensure_capacity();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Places `value` at `at`, shifting the tail right. Hands `value` back if
    /// `at > len`.
    pub fn insert(&mut self, at: usize, value: T) -> Result<(), T> {
        if at > self.len {
            return Err(value);
        }
        self.ensure_capacity();
        self.shift_right(at);
        self.slots[at] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Swaps in `value` at `at` and returns the previous element.
    pub fn replace(&mut self, at: usize, value: T) -> Option<T> {
        if at >= self.len {
            return None;
        }
        self.slots[at].replace(value)
    }

    /// Takes the element at `at` out and closes the gap.
    pub fn remove(&mut self, at: usize) -> Option<T> {
        if at >= self.len {
            return None;
        }
        let value = self.slots[at].take();
        self.shift_left(at);
        value
    }

    /// Empties the store.
    ///
    /// A buffer that grew beyond `default_capacity` is replaced by a fresh one
    /// of exactly `default_capacity` slots; a smaller buffer is kept and only
    /// its live slots are cleared.
    pub fn reset(&mut self, default_capacity: usize) {
        if self.capacity() > default_capacity {
            tracing::debug!(
                from = self.capacity(),
                to = default_capacity,
                "Reallocating cleared list store"
            );
            self.slots = empty_slots(default_capacity);
        } else {
            for slot in &mut self.slots[..self.len] {
                *slot = None;
            }
        }
        self.len = 0;
    }
}
