//! # Slot Arena
//!
//! Index-based storage for linked structures, replacing `Rc<RefCell<T>>`
//! and `Box` chains with plain `usize` handles.
//!
//! ## Benefits for linked structures
//!
//! - Links are `Copy` indices, so several of them can name the same
//!   element without reference counting
//! - Removing an element vacates its slot in place; no other element
//!   moves and no other index is disturbed
//! - Vacated slots are reused by later allocations, so a long-lived
//!   structure does not grow without bound
//! - Dropping the arena drops every element in one flat pass, with no
//!   recursive chain teardown
//!
//! ## Example
//!
//! ```
//! use llist::arena::Arena;
//!
//! let mut arena = Arena::new();
//! let a = arena.alloc("alpha");
//! let b = arena.alloc("beta");
//! assert_eq!(arena.get(a), &"alpha");
//! assert_eq!(arena.len(), 2);
//!
//! // Removing a value vacates its slot; the next alloc reuses it.
//! assert_eq!(arena.remove(a), "alpha");
//! let c = arena.alloc("gamma");
//! assert_eq!(arena.get(c), &"gamma");
//! assert_eq!(arena.get(b), &"beta");
//! assert_eq!(arena.len(), 2);
//! ```

use std::marker::PhantomData;
use std::mem;

/// A type-safe index into an [`Arena`].
///
/// `ArenaId<T>` is a lightweight handle (just a `usize`) that names one
/// slot of an arena holding `T`. The `PhantomData<T>` keeps ids for
/// different element types from being mixed up at compile time.
#[derive(Debug)]
pub struct ArenaId<T> {
    index: usize,
    _marker: PhantomData<T>,
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for ArenaId<T> {}

/// One storage cell: either a live element or a vacancy left by `remove`.
#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant,
}

/// A slot arena for elements of type `T`.
///
/// Elements are stored in a `Vec` and named by [`ArenaId<T>`]. Removing
/// an element leaves a vacant slot behind; vacant slots are reused by
/// later allocations, most recently vacated first.
///
/// ## Thread Safety
///
/// `Arena<T>` is `Send` and `Sync` whenever `T` is, since it is only a
/// `Vec` of slots plus a `Vec` of free indices.
#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    /// Indices of vacant slots, reused in LIFO order.
    free: Vec<usize>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Creates a new arena with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Allocates an element, filling a vacant slot if one exists.
    ///
    /// # Example
    ///
    /// ```
    /// use llist::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let id = arena.alloc(42);
    /// assert_eq!(arena.get(id), &42);
    /// ```
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Slot::Occupied(value);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            }
        };
        ArenaId {
            index,
            _marker: PhantomData,
        }
    }

    /// Removes the element at `id` and returns it, vacating its slot.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds or its slot is already vacant.
    pub fn remove(&mut self, id: ArenaId<T>) -> T {
        match mem::replace(&mut self.slots[id.index], Slot::Vacant) {
            Slot::Occupied(value) => {
                self.free.push(id.index);
                value
            }
            Slot::Vacant => panic!("no element at arena index {}", id.index),
        }
    }

    /// Returns a reference to the element at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds or its slot is vacant.
    #[must_use]
    pub fn get(&self, id: ArenaId<T>) -> &T {
        match &self.slots[id.index] {
            Slot::Occupied(value) => value,
            Slot::Vacant => panic!("no element at arena index {}", id.index),
        }
    }

    /// Returns a mutable reference to the element at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds or its slot is vacant.
    #[must_use]
    pub fn get_mut(&mut self, id: ArenaId<T>) -> &mut T {
        match &mut self.slots[id.index] {
            Slot::Occupied(value) => value,
            Slot::Vacant => panic!("no element at arena index {}", id.index),
        }
    }

    /// Returns the number of live elements (vacant slots do not count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns true if the arena holds no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
