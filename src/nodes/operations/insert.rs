use crate::{
    nodes::{Child, Location, Node},
    Sequence,
};

/// The result of a successful insert operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertResult {
    /// The child index at every level from the root down to the position of
    /// the inserted key, in the form accepted by
    /// [`Cursor::attach`](crate::Cursor).
    pub path: Vec<usize>,
    /// True if the key is stored as a node's terminal flag, false if it is a
    /// leaf edge.
    pub at_terminal: bool,
    /// True if the key was not already present.
    pub inserted: bool,
}

/// Insert the given key into the trie rooted at `root`.
///
/// The walk locates each symbol in turn:
///  - A missing symbol gets a new edge: a [`Child::Leaf`] if it is the last
///    symbol of the key, or a fresh node to continue into otherwise.
///  - A present symbol that is not the last one is descended into, promoting a
///    leaf edge to a terminal node first so the shorter key stays stored.
///  - A present last symbol is already stored if it is a leaf edge, otherwise
///    the terminal flag of its node is set.
///
/// Inserting never removes or reorders unrelated keys, and inserting a key
/// that is already present changes nothing.
pub fn insert<S: Sequence>(root: &mut Node<S::Symbol>, key: &S) -> InsertResult {
    let mut path = Vec::new();
    let mut node = root;
    let mut symbols = key.symbols().peekable();

    while let Some(symbol) = symbols.next() {
        let is_last = symbols.peek().is_none();

        let (index, created) = match node.children.locate(&symbol) {
            Location::Found(index) => (index, false),
            Location::Vacant(index) => {
                let child = if is_last {
                    Child::Leaf
                } else {
                    Child::Inner(Box::new(Node::new()))
                };
                node.children.insert_at(index, symbol, child);
                (index, true)
            },
        };
        path.push(index);

        let edge = &mut node.children[index];
        if is_last {
            return match &mut edge.child {
                Child::Leaf => InsertResult {
                    path,
                    at_terminal: false,
                    inserted: created,
                },
                Child::Inner(child) => {
                    path.push(0);
                    let inserted = !child.is_terminal;
                    child.is_terminal = true;
                    InsertResult {
                        path,
                        at_terminal: true,
                        inserted,
                    }
                },
            };
        }

        node = edge.child.promote();
    }

    // Only the empty key reaches this point, and it is stored on the root.
    path.push(0);
    let inserted = !node.is_terminal;
    node.is_terminal = true;
    InsertResult {
        path,
        at_terminal: true,
        inserted,
    }
}

#[cfg(test)]
mod tests {
    use crate::nodes::count_keys;

    use super::*;

    fn root_with(keys: &[&str]) -> Node<char> {
        let mut root = Node::new();
        for key in keys {
            assert!(insert(&mut root, &String::from(*key)).inserted, "{key:?}");
        }
        root
    }

    #[test]
    fn insert_single_key_uses_leaf_edge() {
        let root = root_with(&["ab"]);
        let a = root.children()[0].child.as_node().unwrap();
        assert!(!a.is_terminal());
        assert_eq!(a.children().len(), 1);
        assert!(a.children()[0].child.is_leaf());
    }

    #[test]
    fn insert_longer_key_promotes_leaf() {
        let mut root = root_with(&["a"]);
        assert!(root.children()[0].child.is_leaf());

        let result = insert(&mut root, &String::from("ab"));
        assert_eq!(
            result,
            InsertResult {
                path: vec![0, 0],
                at_terminal: false,
                inserted: true,
            }
        );

        let a = root.children()[0].child.as_node().unwrap();
        assert!(a.is_terminal());
        assert!(a.children()[0].child.is_leaf());
        assert_eq!(count_keys(&root), 2);
    }

    #[test]
    fn insert_prefix_after_longer_key_sets_terminal() {
        let mut root = root_with(&["abc"]);
        let result = insert(&mut root, &String::from("ab"));
        assert_eq!(
            result,
            InsertResult {
                path: vec![0, 0, 0],
                at_terminal: true,
                inserted: true,
            }
        );
        assert_eq!(count_keys(&root), 2);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut root = root_with(&["", "a", "ab", "b"]);
        for key in ["", "a", "ab", "b"] {
            assert!(!insert(&mut root, &String::from(key)).inserted, "{key:?}");
        }
        assert_eq!(count_keys(&root), 4);
    }

    #[test]
    fn insert_empty_key_marks_root() {
        let mut root = Node::<char>::new();
        let result = insert(&mut root, &String::new());
        assert!(result.inserted);
        assert_eq!(result.path, [0]);
        assert!(root.is_terminal());
        assert!(root.children().is_empty());
    }

    #[test]
    fn insert_keeps_siblings_sorted() {
        let root = root_with(&["d", "b", "a", "c"]);
        let symbols: Vec<_> = root.children().iter().map(|edge| edge.symbol).collect();
        assert_eq!(symbols, ['a', 'b', 'c', 'd']);
    }
}
