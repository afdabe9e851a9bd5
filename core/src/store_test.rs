//! Tests for the growable store

use crate::store::{Store, grown_capacity};
use crate::test_utils;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

fn live<T: Clone>(store: &Store<T>) -> Vec<T> {
    store.slots().iter().flatten().cloned().collect()
}

#[test]
fn test_growth_sequence() {
    assert_eq!(grown_capacity(0), 1);
    assert_eq!(grown_capacity(1), 2);
    assert_eq!(grown_capacity(10), 16);
    assert_eq!(grown_capacity(16), 25);
    assert_eq!(grown_capacity(25), 38);
}

#[test]
fn test_ensure_capacity_only_when_full() {
    test_utils::init_test_logging();

    let mut store = Store::with_capacity(2);
    assert!(!store.ensure_capacity());
    store.push(1);
    store.push(2);
    assert_eq!(store.capacity(), 2);
    assert!(store.ensure_capacity());
    assert_eq!(store.capacity(), 4);
    assert_eq!(live(&store), [1, 2]);
}

#[test]
fn test_push_grows_transparently() {
    let mut store = Store::with_capacity(10);
    for i in 0..11 {
        store.push(i);
    }
    assert_eq!(store.len(), 11);
    assert_eq!(store.capacity(), 16);
    assert_eq!(live(&store), (0..11).collect::<Vec<_>>());
}

#[test]
fn test_zero_capacity_grows() {
    let mut store = Store::with_capacity(0);
    let mut capacities = Vec::new();
    for i in 0..5 {
        store.push(i);
        capacities.push(store.capacity());
    }
    assert_eq!(capacities, [1, 2, 4, 4, 7]);
}

#[test]
fn test_from_vec_has_no_spare_capacity() {
    let mut store = Store::from_vec(alloc::vec!['a', 'b', 'c']);
    assert_eq!(store.len(), 3);
    assert_eq!(store.capacity(), 3);
    store.push('d');
    assert_eq!(store.capacity(), 5);
    assert_eq!(live(&store), ['a', 'b', 'c', 'd']);
}

#[test]
fn test_insert_shifts_right() {
    let mut store = Store::with_capacity(4);
    store.push(1);
    store.push(3);
    assert_eq!(store.insert(1, 2), Ok(()));
    assert_eq!(store.insert(0, 0), Ok(()));
    assert_eq!(live(&store), [0, 1, 2, 3]);

    // Full store: the insert has to grow first.
    assert_eq!(store.insert(2, 9), Ok(()));
    assert_eq!(store.capacity(), 7);
    assert_eq!(live(&store), [0, 1, 9, 2, 3]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut store = Store::with_capacity(1);
    assert_eq!(store.insert(0, "a"), Ok(()));
    assert_eq!(store.insert(1, "b"), Ok(()));
    assert_eq!(live(&store), ["a", "b"]);
}

#[test]
fn test_insert_past_len_hands_value_back() {
    let mut store = Store::with_capacity(4);
    store.push(1);
    assert_eq!(store.insert(2, 7), Err(7));
    assert_eq!(live(&store), [1]);
}

#[test]
fn test_remove_shifts_left_and_clears_tail() {
    let mut store = Store::with_capacity(5);
    for c in ['a', 'b', 'c', 'd'] {
        store.push(c);
    }
    assert_eq!(store.remove(1), Some('b'));
    assert_eq!(store.len(), 3);
    assert_eq!(live(&store), ['a', 'c', 'd']);
    assert_eq!(store.capacity(), 5);

    assert_eq!(store.remove(2), Some('d'));
    assert_eq!(store.remove(0), Some('a'));
    assert_eq!(live(&store), ['c']);
    assert_eq!(store.remove(1), None);

    // Every slot past `len` was cleared on the way.
    store.push('x');
    assert_eq!(live(&store), ['c', 'x']);
}

#[test]
fn test_replace() {
    let mut store = Store::with_capacity(2);
    store.push(1);
    assert_eq!(store.replace(0, 5), Some(1));
    assert_eq!(store.replace(1, 6), None);
    assert_eq!(store.get(0), Some(&5));
}

#[test]
fn test_get_out_of_range() {
    let mut store = Store::with_capacity(4);
    store.push(1);
    assert_eq!(store.get(0), Some(&1));
    assert_eq!(store.get(1), None);
    assert_eq!(store.get(10), None);
}

#[test]
fn test_reset_shrinks_grown_buffer() {
    test_utils::init_test_logging();

    let mut store = Store::with_capacity(10);
    for i in 0..20 {
        store.push(i);
    }
    assert_eq!(store.capacity(), 25);
    store.reset(10);
    assert_eq!(store.len(), 0);
    assert_eq!(store.capacity(), 10);
}

#[test]
fn test_reset_keeps_small_buffer() {
    let mut store = Store::with_capacity(4);
    store.push(1);
    store.push(2);
    store.reset(10);
    assert!(store.is_empty());
    assert_eq!(store.capacity(), 4);
    assert_eq!(store.get(0), None);

    store.push(3);
    assert_eq!(live(&store), [3]);
}
