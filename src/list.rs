//! # Singly-Linked List
//!
//! A chain of [`Node`]s threaded through a private [`Arena`], with
//! tracked access to both endpoints:
//!
//! - `add_first` / `add_last`: O(1) inserts at the head or tail
//! - `add_after` / `add_before`: O(n) inserts relative to a value
//! - `remove`: O(n) removal by value
//!
//! The value-relative operations compare data with `==`, scan from the
//! head, and act on the first match. A scan over an empty list reports
//! [`ListError::EmptyList`]; a scan that reaches the terminal node
//! without a match reports [`ListError::NotFound`] and leaves the list
//! untouched.
//!
//! ## Example
//!
//! ```
//! use llist::list::{LinkedList, Node};
//!
//! let mut list = LinkedList::new();
//! list.add_first(Node::new("b"));
//! list.add_last(Node::new("c"));
//! list.add_first(Node::new("a"));
//!
//! assert_eq!(list.to_string(), "a -> b -> c -> None");
//! assert_eq!(list.head().map(|node| node.data), Some("a"));
//! assert_eq!(list.tail().map(|node| node.data), Some("c"));
//! ```

use std::fmt;

use crate::arena::{Arena, ArenaId};
use crate::error::ListError;

// =============================================================================
// Nodes
// =============================================================================

/// A link to the next node in the chain, absent at the terminal node.
type Link<T> = Option<ArenaId<Node<T>>>;

/// A single element of a [`LinkedList`]: a data value plus a link to
/// its successor.
///
/// Callers read and write `data` freely; the link is private and is
/// rewired only by the owning list's operations. A freshly created
/// node is detached (its link is absent) until an insert splices it in.
#[derive(Debug)]
pub struct Node<T> {
    /// The value carried by this node.
    pub data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached node carrying `data`.
    #[must_use]
    pub fn new(data: T) -> Self {
        Node { data, next: None }
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

// =============================================================================
// The list
// =============================================================================

/// A singly-linked list that tracks its head, its tail, and its length
/// through every mutation.
///
/// Nodes live in a private [`Arena`] and name each other by copyable
/// arena ids, so splicing a node in or out rewrites at most two links
/// and never moves another node. Removed nodes vacate their arena slot
/// for reuse by later inserts.
#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Link<T>,
    tail: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        LinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the first node, or `None` if the list is empty.
    #[must_use]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|id| self.nodes.get(id))
    }

    /// Returns the last node, or `None` if the list is empty.
    #[must_use]
    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|id| self.nodes.get(id))
    }

    /// Returns the number of nodes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `node` at the front of the list. O(1).
    ///
    /// The new node becomes the head; on an empty list it becomes the
    /// tail as well.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::list::{LinkedList, Node};
    ///
    /// let mut list = LinkedList::new();
    /// list.add_first(Node::new(2));
    /// list.add_first(Node::new(1));
    /// assert_eq!(list.to_string(), "1 -> 2 -> None");
    /// ```
    pub fn add_first(&mut self, mut node: Node<T>) {
        node.next = self.head;
        let id = self.nodes.alloc(node);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.len += 1;
    }

    /// Inserts `node` at the back of the list. O(1).
    ///
    /// The new node becomes the tail and the terminal node; on an empty
    /// list it becomes the head as well.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::list::{LinkedList, Node};
    ///
    /// let mut list = LinkedList::new();
    /// list.add_last(Node::new(1));
    /// list.add_last(Node::new(2));
    /// assert_eq!(list.to_string(), "1 -> 2 -> None");
    /// ```
    pub fn add_last(&mut self, mut node: Node<T>) {
        node.next = None;
        let id = self.nodes.alloc(node);
        match self.tail {
            Some(tail_id) => self.nodes.get_mut(tail_id).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Returns an iterator over the nodes, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Inserts `node` immediately after the first node whose data
    /// equals `target`. O(n).
    ///
    /// If that node was the tail, the new node becomes the tail.
    /// Returns [`ListError::EmptyList`] on an empty list and
    /// [`ListError::NotFound`] when nothing matches; either way the
    /// list is unchanged and `node` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::list::{LinkedList, Node};
    ///
    /// let mut list: LinkedList<&str> = ["a", "c"].into_iter().collect();
    /// list.add_after(&"a", Node::new("b")).unwrap();
    /// assert_eq!(list.to_string(), "a -> b -> c -> None");
    /// ```
    pub fn add_after(&mut self, target: &T, mut node: Node<T>) -> Result<(), ListError> {
        if self.head.is_none() {
            return Err(ListError::EmptyList);
        }
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if self.nodes.get(id).data == *target {
                node.next = self.nodes.get(id).next;
                let new_id = self.nodes.alloc(node);
                self.nodes.get_mut(id).next = Some(new_id);
                if self.tail == Some(id) {
                    self.tail = Some(new_id);
                }
                self.len += 1;
                return Ok(());
            }
            cursor = self.nodes.get(id).next;
        }
        Err(ListError::NotFound)
    }

    /// Inserts `node` immediately before the first node whose data
    /// equals `target`. O(n).
    ///
    /// If that node was the head, this is `add_first` and the new node
    /// becomes the head. Returns [`ListError::EmptyList`] on an empty
    /// list and [`ListError::NotFound`] when nothing matches; either
    /// way the list is unchanged and `node` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::list::{LinkedList, Node};
    ///
    /// let mut list: LinkedList<&str> = ["a", "c"].into_iter().collect();
    /// list.add_before(&"c", Node::new("b")).unwrap();
    /// assert_eq!(list.to_string(), "a -> b -> c -> None");
    /// ```
    pub fn add_before(&mut self, target: &T, mut node: Node<T>) -> Result<(), ListError> {
        let head_id = self.head.ok_or(ListError::EmptyList)?;
        if self.nodes.get(head_id).data == *target {
            self.add_first(node);
            return Ok(());
        }
        let mut prev_id = head_id;
        let mut cursor = self.nodes.get(head_id).next;
        while let Some(id) = cursor {
            if self.nodes.get(id).data == *target {
                node.next = Some(id);
                let new_id = self.nodes.alloc(node);
                self.nodes.get_mut(prev_id).next = Some(new_id);
                self.len += 1;
                return Ok(());
            }
            prev_id = id;
            cursor = self.nodes.get(id).next;
        }
        Err(ListError::NotFound)
    }

    /// Removes the first node whose data equals `target` and returns
    /// its data. O(n).
    ///
    /// Removing the head advances the head; removing the tail moves
    /// the tail back to the previous node; removing the only node
    /// leaves both endpoints absent. Returns
    /// [`ListError::EmptyList`] on an empty list and
    /// [`ListError::NotFound`] when nothing matches, leaving the list
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::error::ListError;
    /// use llist::list::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.remove(&2), Ok(2));
    /// assert_eq!(list.remove(&2), Err(ListError::NotFound));
    /// assert_eq!(list.to_string(), "1 -> 3 -> None");
    /// ```
    pub fn remove(&mut self, target: &T) -> Result<T, ListError> {
        let head_id = self.head.ok_or(ListError::EmptyList)?;
        if self.nodes.get(head_id).data == *target {
            let node = self.nodes.remove(head_id);
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;
            return Ok(node.data);
        }
        let mut prev_id = head_id;
        let mut cursor = self.nodes.get(head_id).next;
        while let Some(id) = cursor {
            if self.nodes.get(id).data == *target {
                let node = self.nodes.remove(id);
                self.nodes.get_mut(prev_id).next = node.next;
                if self.tail == Some(id) {
                    self.tail = Some(prev_id);
                }
                self.len -= 1;
                return Ok(node.data);
            }
            prev_id = id;
            cursor = self.nodes.get(id).next;
        }
        Err(ListError::NotFound)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a list from an ordered sequence, appending each element in
/// turn so the sequence order is preserved.
impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = LinkedList {
            nodes: Arena::with_capacity(iter.size_hint().0),
            head: None,
            tail: None,
            len: 0,
        };
        list.extend(iter);
        list
    }
}

/// Appends every element of `iter` to the back of the list.
impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(Node::new(value));
        }
    }
}

/// Renders the chain head to tail as `a -> b -> None`; an empty list
/// renders as `None`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.iter() {
            write!(f, "{} -> ", node)?;
        }
        write!(f, "None")
    }
}

// =============================================================================
// Iteration
// =============================================================================

/// Iterator over the nodes of a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    cursor: Link<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.nodes.get(id);
        self.cursor = node.next;
        Some(node)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        AddFirst(u8),
        AddLast(u8),
        AddAfter(u8, u8),
        AddBefore(u8, u8),
        Remove(u8),
    }

    /// Values are drawn from a small domain so sequences mix hits,
    /// misses, and duplicates.
    fn op_strategy() -> impl Strategy<Value = Op> {
        let value = 0u8..8;
        prop_oneof![
            2 => value.clone().prop_map(Op::AddFirst),
            2 => value.clone().prop_map(Op::AddLast),
            1 => (value.clone(), value.clone()).prop_map(|(t, v)| Op::AddAfter(t, v)),
            1 => (value.clone(), value.clone()).prop_map(|(t, v)| Op::AddBefore(t, v)),
            1 => value.prop_map(Op::Remove),
        ]
    }

    /// Applies `op` to the list and to a `Vec` reference model, checking
    /// that both agree on the outcome.
    fn apply(list: &mut LinkedList<u8>, model: &mut Vec<u8>, op: &Op) {
        match *op {
            Op::AddFirst(value) => {
                list.add_first(Node::new(value));
                model.insert(0, value);
            }
            Op::AddLast(value) => {
                list.add_last(Node::new(value));
                model.push(value);
            }
            Op::AddAfter(target, value) => {
                let expected = if model.is_empty() {
                    Err(ListError::EmptyList)
                } else if let Some(pos) = model.iter().position(|&x| x == target) {
                    model.insert(pos + 1, value);
                    Ok(())
                } else {
                    Err(ListError::NotFound)
                };
                assert_eq!(list.add_after(&target, Node::new(value)), expected);
            }
            Op::AddBefore(target, value) => {
                let expected = if model.is_empty() {
                    Err(ListError::EmptyList)
                } else if let Some(pos) = model.iter().position(|&x| x == target) {
                    model.insert(pos, value);
                    Ok(())
                } else {
                    Err(ListError::NotFound)
                };
                assert_eq!(list.add_before(&target, Node::new(value)), expected);
            }
            Op::Remove(target) => {
                let expected = if model.is_empty() {
                    Err(ListError::EmptyList)
                } else if let Some(pos) = model.iter().position(|&x| x == target) {
                    Ok(model.remove(pos))
                } else {
                    Err(ListError::NotFound)
                };
                assert_eq!(list.remove(&target), expected);
            }
        }
    }

    fn check_matches_model(list: &LinkedList<u8>, model: &[u8]) {
        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), model.is_empty());

        // Head and tail are present together or absent together.
        assert_eq!(list.head().is_some(), list.tail().is_some());
        assert_eq!(list.head().map(|node| node.data), model.first().copied());
        assert_eq!(list.tail().map(|node| node.data), model.last().copied());

        // A walk bounded by len + 1 steps must visit exactly the model's
        // values, which also proves the chain is acyclic and terminates.
        let values: Vec<u8> = list
            .iter()
            .take(model.len() + 1)
            .map(|node| node.data)
            .collect();
        assert_eq!(values, model);

        // The last node reached by walking is the tracked tail.
        if let Some(tail) = list.tail() {
            let last = list.iter().take(model.len()).last().unwrap();
            assert!(std::ptr::eq(last, tail));
        }

        // Every removal vacated its slot: live nodes match the length.
        assert_eq!(list.nodes.len(), list.len());

        let mut expected = String::new();
        for value in model {
            expected.push_str(&format!("{value} -> "));
        }
        expected.push_str("None");
        assert_eq!(list.to_string(), expected);
    }

    proptest! {
        #[test]
        fn test_random_op_sequences_match_vec_model(
            ops in prop::collection::vec(op_strategy(), 0..64)
        ) {
            let mut list: LinkedList<u8> = LinkedList::new();
            let mut model: Vec<u8> = Vec::new();

            for op in &ops {
                apply(&mut list, &mut model, op);
                check_matches_model(&list, &model);
            }
        }
    }
}
