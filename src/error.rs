//! # List Errors
//!
//! Error values returned by the value-relative list operations.
//!
//! Every fallible operation reports failure through [`ListError`] rather
//! than panicking, so callers can match on the outcome:
//!
//! ```
//! use llist::error::ListError;
//! use llist::list::{LinkedList, Node};
//!
//! let mut list: LinkedList<i32> = LinkedList::new();
//! assert_eq!(list.remove(&1), Err(ListError::EmptyList));
//!
//! list.add_first(Node::new(1));
//! assert_eq!(list.remove(&2), Err(ListError::NotFound));
//! ```

use std::fmt;

/// Failures reported by `add_after`, `add_before`, and `remove`.
///
/// Both variants leave the list exactly as it was: a failed operation
/// never splices, unlinks, or reorders anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The operation needs at least one node, but the list has none.
    EmptyList,
    /// No node in the list carries data equal to the requested value.
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::EmptyList => write!(f, "List is empty"),
            ListError::NotFound => write!(f, "No node with matching data"),
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ListError::EmptyList.to_string(), "List is empty");
        assert_eq!(ListError::NotFound.to_string(), "No node with matching data");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ListError::NotFound);
        assert_eq!(err.to_string(), "No node with matching data");
    }

    #[test]
    fn test_copy_and_compare() {
        let err = ListError::EmptyList;
        let copy = err;
        assert_eq!(err, copy);
        assert_ne!(ListError::EmptyList, ListError::NotFound);
    }
}
