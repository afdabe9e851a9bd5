//! Error types for list and cursor operations.

use thiserror::Error;

/// Errors surfaced by [`ArrayList`](crate::ArrayList) and its cursor.
///
/// None of these are transient: the list never retries and never swallows
/// them, every precondition violation reaches the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index outside the range accepted by the operation.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The cursor was asked for an element after it was exhausted.
    #[error("no elements left to visit")]
    NoSuchElement,

    /// The cursor was asked to remove without a fresh `next`.
    #[error("remove called without a preceding call to next")]
    IllegalState,
}

/// Which positions an index-taking operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// `0 <= index < len`: reading, updating or removing an element.
    Existing,
    /// `0 <= index <= len`: inserting, where `index == len` appends.
    Insert,
}

/// The single index check shared by every index-taking list operation.
pub fn check_index(index: usize, len: usize, bounds: Bounds) -> Result<(), ListError> {
    let valid = match bounds {
        Bounds::Existing => index < len,
        Bounds::Insert => index <= len,
    };
    if valid {
        Ok(())
    } else {
        Err(ListError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn existing_rejects_len() {
        assert_eq!(check_index(0, 1, Bounds::Existing), Ok(()));
        assert_eq!(
            check_index(1, 1, Bounds::Existing),
            Err(ListError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(check_index(0, 0, Bounds::Existing).is_err());
    }

    #[test]
    fn insert_accepts_len() {
        assert_eq!(check_index(0, 0, Bounds::Insert), Ok(()));
        assert_eq!(check_index(3, 3, Bounds::Insert), Ok(()));
        assert!(check_index(4, 3, Bounds::Insert).is_err());
    }

    #[test]
    fn message_names_index_and_len() {
        let err = check_index(7, 2, Bounds::Existing).unwrap_err();
        assert_eq!(err.to_string(), "index 7 out of range for list of length 2");
    }
}
