pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self { value, next: None }
    }
}

#[cfg(test)]
mod tests {
    use crate::node::Node;

    #[test]
    fn node_new_holds_the_value_and_no_link() {
        let sut: Node<i64> = Node::new(42);
        assert_eq!(sut.value, 42);
        assert!(sut.next.is_none());
    }

    #[test]
    fn node_links_to_its_successor() {
        let mut sut: Node<i64> = Node::new(1);
        sut.next = Some(Box::new(Node::new(2)));

        let next = sut.next.as_deref().unwrap();
        assert_eq!(next.value, 2);
        assert!(next.next.is_none());
    }
}
