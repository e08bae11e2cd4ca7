use core::iter::FusedIterator;

use crate::SinglyLinkedList;
use crate::node::Node;

/// An iterator over the elements of a `SinglyLinkedList`.
///
/// This struct is created by `SinglyLinkedList::iter()`.
pub struct Iter<'a, T> {
    node: Option<&'a Node<T>>,
    len: usize,
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Self { node: None, len: 0 }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a SinglyLinkedList<T>) -> Self {
        Self {
            node: list.head.as_deref(),
            len: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        self.len -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> core::fmt::Debug for Iter<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
