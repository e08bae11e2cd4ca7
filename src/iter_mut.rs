use core::iter::FusedIterator;

use crate::SinglyLinkedList;
use crate::node::Node;

/// A mutable iterator over the elements of a `SinglyLinkedList`.
///
/// This struct is created by `SinglyLinkedList::iter_mut()`.
pub struct IterMut<'a, T> {
    node: Option<&'a mut Node<T>>,
    len: usize,
}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        Self { node: None, len: 0 }
    }
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut SinglyLinkedList<T>) -> Self {
        let len = list.len();
        Self {
            node: list.head.as_deref_mut(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Taking the node splits the exclusive borrow: the yielded value and
        // the remainder of the chain never alias.
        let node = self.node.take()?;
        self.node = node.next.as_deref_mut();
        self.len -= 1;
        Some(&mut node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> core::fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}
