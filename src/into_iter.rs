use core::iter::FusedIterator;

use crate::SinglyLinkedList;

/// A consuming iterator over the elements of a `SinglyLinkedList`.
///
/// This struct is created by the `IntoIterator` implementation for
/// `SinglyLinkedList`.
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            list: SinglyLinkedList::new(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: SinglyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::SinglyLinkedList;

    use super::IntoIter;

    #[test]
    fn default_iterator_yields_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn into_iter_consumes_head_to_tail() {
        let list = SinglyLinkedList::from([0usize, 1, 2, 3, 4]);
        let sut = list.into_iter();
        assert_eq!(sut.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_is_exact_sized_and_fused() {
        let list = SinglyLinkedList::from([0usize, 1, 2]);

        let mut sut = list.into_iter();
        assert_eq!(sut.len(), 3);
        assert_eq!(sut.size_hint(), (3, Some(3)));

        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.len(), 2);

        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next(), Some(2));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn into_iter_moves_owned_values_out() {
        let list = SinglyLinkedList::from([String::from("a"), String::from("b")]);

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(String::from("a")));
        assert_eq!(sut.next(), Some(String::from("b")));
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn for_loop_over_references_works() {
        let mut list = SinglyLinkedList::from([1usize, 2, 3]);

        let mut total = 0;
        for value in &list {
            total += value;
        }
        assert_eq!(total, 6);

        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list, [2, 3, 4]);
    }

    #[test]
    fn debug_works_correctly() {
        let list = SinglyLinkedList::from([0usize, 1, 2]);
        let sut = list.into_iter();
        assert_eq!(format!("{sut:?}"), "IntoIter([0, 1, 2])");
    }
}
