use thiserror::Error;

/// The error returned by index based mutating operations when the index
/// falls outside the list's current bounds.
///
/// The display message is fixed, so callers should match on the type rather
/// than on the text.
///
/// # Example
/// ```rust
/// use singly_linked_list::{OutOfBoundaries, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
/// assert_eq!(list.set(0, 7), Err(OutOfBoundaries));
/// assert_eq!(OutOfBoundaries.to_string(), "Index out of boundaries");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index out of boundaries")]
pub struct OutOfBoundaries;

#[cfg(test)]
mod tests {
    use crate::OutOfBoundaries;

    #[test]
    fn display_message_is_stable() {
        assert_eq!(OutOfBoundaries.to_string(), "Index out of boundaries");
    }

    #[test]
    fn error_is_matchable_by_value() {
        let err: Box<dyn std::error::Error> = Box::new(OutOfBoundaries);
        assert!(err.downcast_ref::<OutOfBoundaries>().is_some());
    }
}
