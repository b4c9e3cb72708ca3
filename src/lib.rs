//! # llist
//!
//! A singly-linked list with head and tail tracking, built on index-based
//! arena storage instead of `Rc<RefCell<T>>` or `unsafe` pointer chains.
//!
//! ## Modules
//!
//! - [`arena`]: Slot arena with vacancy reuse and type-safe ids
//! - [`error`]: Error values for the fallible list operations
//! - [`list`]: The linked list, its nodes, and its iterator
//!
//! ## Design
//!
//! 1. **Tracked endpoints**: head, tail, and length are maintained
//!    through every mutation, so endpoint reads and inserts are O(1)
//! 2. **Index-based links**: nodes name their successors with copyable
//!    arena ids, so splicing never fights the borrow checker
//! 3. **Errors as values**: scans over empty lists or past the terminal
//!    node report `ListError` instead of panicking
//!
//! ## Example
//!
//! ```
//! use llist::{LinkedList, ListError, Node};
//!
//! let mut list = LinkedList::new();
//! list.add_first(Node::new("a"));
//! list.add_last(Node::new("z"));
//! list.add_after(&"a", Node::new("m"))?;
//!
//! assert_eq!(list.to_string(), "a -> m -> z -> None");
//! assert_eq!(list.remove(&"m"), Ok("m"));
//! assert_eq!(list.remove(&"q"), Err(ListError::NotFound));
//! # Ok::<(), ListError>(())
//! ```

pub mod arena;
pub mod error;
pub mod list;

// Re-export the main types for convenience
pub use arena::{Arena, ArenaId};
pub use error::ListError;
pub use list::{Iter, LinkedList, Node};
