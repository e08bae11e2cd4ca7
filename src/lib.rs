//! # singly_linked_list
//!
//! `singly_linked_list` implements a **singly linked list** with indexed
//! random access, insertion and removal at arbitrary positions, and bulk
//! conversion to and from contiguous sequences.
//!
//! ## Features
//! - Ordered sequence with 0-based index lookups.
//! - O(1) append through a cached, non-owning tail pointer.
//! - Insertions and deletions at any position without shifting the
//!   remaining elements in memory.
//! - Dual out-of-bounds policy: read-style operations miss silently with
//!   `Option`, while index based mutations fail with [`OutOfBoundaries`].
//!
//! ## Use Cases
//! `singly_linked_list` is ideal for scenarios where:
//! - You need an ordered collection that grows one element at a time.
//! - You require frequent insertions and deletions anywhere in the list and
//!   can afford the O(n) walk to reach the position.
//! - You want unlinked elements handed back to you rather than dropped.
//!
//! ## Note
//! The list is not a concurrent structure. It propagates `Send`/`Sync`
//! correctly for its element type, but concurrent mutation must be
//! serialized externally.
//!
//! ## Example
//! ```rust
//! use singly_linked_list::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
//! list.push_back(2);
//! list.push_front(0);
//! list.insert(1, 1).unwrap();
//!
//! assert_eq!(list.front(), Some(&0));
//! assert_eq!(list.get(1), Some(&1));
//! assert_eq!(list.back(), Some(&2));
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Some(2));
//! assert_eq!(list.pop_front(), Some(0));
//! ```

mod error;
mod into_iter;
mod iter;
mod iter_mut;
mod node;

pub use error::OutOfBoundaries;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use iter_mut::IterMut;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

use crate::node::Node;

/// A singly linked list with a cached tail pointer for O(1) append.
///
/// # Structure
/// - **Single-owner chain**: the list owns its first node, and every node
///   owns its successor through a `Box` link. Dropping the head link
///   releases the whole chain.
/// - **Cached tail**: a non-owning pointer to the terminal node, kept purely
///   so that [`push_back`](SinglyLinkedList::push_back) does not traverse
///   the chain. It never extends a node's lifetime.
///
/// # Indexing
/// All index based operations are 0-based. Reads out of range return
/// `None`; mutations out of range fail with [`OutOfBoundaries`].
///
/// # Example
/// ```rust
/// use singly_linked_list::SinglyLinkedList;
///
/// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
/// list.push_back(3);
/// list.push_front(1);
/// list.insert(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.pop_front(), Some(1));
/// assert_eq!(list.pop_front(), Some(2));
/// assert_eq!(list.pop_front(), Some(3));
/// ```
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T, const M: usize> From<[T; M]> for SinglyLinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> Extend<&'a T> for SinglyLinkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates a new, empty `SinglyLinkedList`.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Adds an element to the front of the list.
    ///
    /// The new node becomes the head. On an empty list this is equivalent
    /// to [`push_back`](SinglyLinkedList::push_back): the sole node becomes
    /// both head and tail.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// list.push_front(10);
    /// list.push_front(20);
    ///
    /// assert_eq!(list.len(), 2);
    ///
    /// assert_eq!(list.pop_front(), Some(20));
    /// assert_eq!(list.pop_front(), Some(10));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();

        if node.next.is_none() {
            self.tail = Some(NonNull::from(&mut *node));
        }

        self.head = Some(node);
        self.len += 1;
    }

    /// Adds an element to the back of the list.
    ///
    /// Runs in O(1): the new node is linked through the cached tail pointer
    /// instead of walking the chain.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.len(), 2);
    ///
    /// assert_eq!(list.pop_back(), Some(20));
    /// assert_eq!(list.pop_back(), Some(10));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        let ptr = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` points at the terminal node of the chain owned
            // by `head`, and `&mut self` guarantees exclusive access to it.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(ptr);
        self.len += 1;
    }

    /// Inserts an element before the node currently at `index`, shifting
    /// subsequent elements one position later.
    ///
    /// The valid range is `0..len()`: unlike `Vec::insert`, an index equal
    /// to `len()` is out of bounds, so `insert` can never append past the
    /// tail — use [`push_back`](SinglyLinkedList::push_back) for that. In
    /// particular `insert(len() - 1, value)` places `value` immediately
    /// before the former last element, and inserting into an empty list
    /// always fails.
    ///
    /// # Errors
    /// Returns [`OutOfBoundaries`] when the list is empty or `index` is not
    /// a currently valid index. The list is untouched on failure.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::{OutOfBoundaries, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from([10, 30]);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), Some(&30));
    ///
    /// assert_eq!(list.insert(3, 40), Err(OutOfBoundaries));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfBoundaries> {
        if index >= self.len {
            return Err(OutOfBoundaries);
        }

        if index == 0 {
            self.push_front(value);
            return Ok(());
        }

        let link = self.link_at(index).ok_or(OutOfBoundaries)?;
        let mut node = Box::new(Node::new(value));
        node.next = link.take();
        *link = Some(node);

        self.len += 1;
        Ok(())
    }

    /// Removes and returns the first element of the list, if any.
    /// If the list is empty, it returns `None`.
    ///
    /// Removing the sole element resets the list to the empty state: both
    /// head and tail are cleared.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// list.push_front(10);
    /// list.push_front(20);
    ///
    /// assert_eq!(list.pop_front(), Some(20));
    /// assert_eq!(list.pop_front(), Some(10));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = *self.head.take()?;
        self.head = node.next;

        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Some(node.value)
    }

    /// Removes and returns the last element of the list, if any.
    /// If the list is empty, it returns `None`.
    ///
    /// Walks the chain to the next-to-last node, which becomes the new
    /// tail. Removing the sole element goes through
    /// [`pop_front`](SinglyLinkedList::pop_front) and resets the list to
    /// the empty state.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.pop_back(), Some(20));
    /// assert_eq!(list.pop_back(), Some(10));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.pop_front();
        }

        let prev = self.link_at(self.len - 2)?.as_mut()?;
        let node = *prev.next.take()?;
        let new_tail = NonNull::from(&mut **prev);

        self.tail = Some(new_tail);
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the node at `index` and returns its value, shifting
    /// subsequent elements one position earlier.
    ///
    /// The valid range is `0..len()`. Removing the first or last element
    /// delegates to [`pop_front`](SinglyLinkedList::pop_front) and
    /// [`pop_back`](SinglyLinkedList::pop_back) respectively, so the
    /// single-element list resets fully.
    ///
    /// # Errors
    /// Returns [`OutOfBoundaries`] when the list is empty or `index` is out
    /// of range. The list is untouched on failure.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::{OutOfBoundaries, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(1), Ok(20));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.get(1), Some(&30));
    ///
    /// assert_eq!(list.remove(2), Err(OutOfBoundaries));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfBoundaries> {
        if index >= self.len {
            return Err(OutOfBoundaries);
        }

        if index == 0 {
            return self.pop_front().ok_or(OutOfBoundaries);
        }

        if index == self.len - 1 {
            return self.pop_back().ok_or(OutOfBoundaries);
        }

        let link = self.link_at(index).ok_or(OutOfBoundaries)?;
        let node = *link.take().ok_or(OutOfBoundaries)?;
        *link = node.next;

        self.len -= 1;
        Ok(node.value)
    }

    /// Overwrites the value at `index` in place.
    ///
    /// Unlike [`get`](SinglyLinkedList::get), which misses silently, an
    /// invalid index here is a hard failure.
    ///
    /// # Errors
    /// Returns [`OutOfBoundaries`] when the list is empty or `index` is out
    /// of range.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::{OutOfBoundaries, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.set(1, 25), Ok(()));
    /// assert_eq!(list.get(1), Some(&25));
    /// assert_eq!(list.len(), 3);
    ///
    /// assert_eq!(list.set(3, 40), Err(OutOfBoundaries));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), OutOfBoundaries> {
        match self.get_mut(index) {
            Some(current) => {
                *current = value;
                Ok(())
            }
            None => Err(OutOfBoundaries),
        }
    }

    /// Replaces the list's contents with `values`, appending them in order,
    /// and returns the new length.
    ///
    /// The previous elements are dropped first.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([9, 9]);
    ///
    /// assert_eq!(list.assign([3, 1, 4, 1, 5]), 5);
    /// assert_eq!(list.to_vec(), [3, 1, 4, 1, 5]);
    /// ```
    pub fn assign<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        self.clear();
        self.extend(values);
        self.len
    }

    /// Copies the values into a `Vec`, head to tail.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    ///
    /// let empty: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// assert_eq!(empty.to_vec(), Vec::<i64>::new());
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes all elements from the list, resetting it to the empty state.
    ///
    /// Nodes are unlinked one by one, so clearing a long chain cannot
    /// overflow the stack with nested drops. Clearing an empty list is a
    /// no-op.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    ///
    /// list.clear();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// assert_eq!(list.back(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a reference to the first element of the list, if any.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.front(), Some(&10));
    /// ```
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element of the list, if any.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 20]);
    ///
    /// if let Some(front) = list.front_mut() {
    ///     *front = 15;
    /// }
    ///
    /// assert_eq!(list.front(), Some(&15));
    /// ```
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a reference to the last element of the list, if any.
    ///
    /// Reads through the cached tail pointer, so it does not traverse the
    /// chain.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(10);
    /// list.push_back(20);
    /// assert_eq!(list.back(), Some(&20));
    /// ```
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` points at the terminal node owned by the chain
        // starting at `head`; `&self` keeps that chain alive.
        self.tail
            .map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Returns a mutable reference to the last element of the list, if any.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 20]);
    ///
    /// if let Some(back) = list.back_mut() {
    ///     *back = 25;
    /// }
    ///
    /// assert_eq!(list.back(), Some(&25));
    /// ```
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `back`, plus `&mut self` guarantees exclusivity.
        self.tail
            .map(|tail| unsafe { &mut (*tail.as_ptr()).value })
    }

    /// Returns a reference to the element at `index`, if any.
    ///
    /// Any out-of-range index, including every index on an empty list,
    /// misses silently with `None`; it is never an error.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([10, 20]);
    ///
    /// assert_eq!(list.get(0), Some(&10));
    /// assert_eq!(list.get(1), Some(&20));
    /// assert_eq!(list.get(2), None); // Out of bounds
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }

        Some(&node.value)
    }

    /// Returns a mutable reference to the element at `index`, if any.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([10, 20]);
    ///
    /// assert_eq!(list.get_mut(0), Some(&mut 10));
    /// assert_eq!(list.get_mut(1), Some(&mut 20));
    /// assert_eq!(list.get_mut(2), None); // Out of bounds
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }

        Some(&mut node.value)
    }

    /// Returns the number of elements currently stored in the list.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the list is empty.
    ///
    /// # Example
    /// ```rust
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_back(1);
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides an iterator over the list's elements, head to tail.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let list = SinglyLinkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over the list's elements, head to tail.
    ///
    /// # Examples
    /// ```
    /// use singly_linked_list::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::from([0, 1, 2]);
    ///
    /// for value in list.iter_mut() {
    ///     *value *= 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), [0, 10, 20]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    /// Walks the chain once and returns the link that owns the node at
    /// `index`: the predecessor's `next` slot, or the head slot for index
    /// 0. The slot gives access to the target node and splices through its
    /// predecessor at the same time.
    fn link_at(&mut self, index: usize) -> Option<&mut Option<Box<Node<T>>>> {
        if index >= self.len {
            return None;
        }

        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }

        Some(link)
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq for SinglyLinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for SinglyLinkedList<T> where T: Eq {}

impl<T> PartialOrd for SinglyLinkedList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for SinglyLinkedList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for SinglyLinkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for SinglyLinkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively: dropping the head link directly would recurse
        // through every `Box` in the chain.
        self.clear();
    }
}

// The raw tail pointer disables the auto traits; the list is no more and no
// less thread-compatible than the nodes it owns.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}
