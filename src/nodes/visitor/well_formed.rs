use std::{error::Error, fmt};

use crate::{
    nodes::{
        visitor::{walk, Visitor},
        Node,
    },
    Sequence, TrieSet,
};

/// The symbols along the path from the root to a node, which uniquely identify
/// that node in the trie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct KeyPrefix<T>(Box<[T]>);

impl<T: Clone> From<&[T]> for KeyPrefix<T> {
    fn from(src: &[T]) -> Self {
        KeyPrefix(Box::from(src))
    }
}

impl<T: PartialEq, const LEN: usize> PartialEq<[T; LEN]> for KeyPrefix<T> {
    fn eq(&self, other: &[T; LEN]) -> bool {
        self.0.as_ref() == other.as_slice()
    }
}

/// An issue with the well-formed-ness of the trie. See the documentation on
/// [`WellFormedChecker`] for more context.
pub enum MalformedTrieError<T> {
    /// The edges of a node were not in strictly ascending symbol order
    UnsortedChildren {
        /// The key prefix identifying the node
        key_prefix: KeyPrefix<T>,
        /// The index of the first edge that is not greater than the edge
        /// before it
        index: usize,
    },
    /// A node other than the root had no children
    EmptyInnerNode {
        /// The key prefix identifying the node
        key_prefix: KeyPrefix<T>,
        /// True if the node had the terminal flag set, meaning it should have
        /// been a leaf edge instead
        is_terminal: bool,
    },
}

impl<T: fmt::Debug> fmt::Debug for MalformedTrieError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsortedChildren { key_prefix, index } => f
                .debug_struct("UnsortedChildren")
                .field("key_prefix", key_prefix)
                .field("index", index)
                .finish(),
            Self::EmptyInnerNode {
                key_prefix,
                is_terminal,
            } => f
                .debug_struct("EmptyInnerNode")
                .field("key_prefix", key_prefix)
                .field("is_terminal", is_terminal)
                .finish(),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for MalformedTrieError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedTrieError::UnsortedChildren { key_prefix, index } => {
                write!(
                    f,
                    "Found a node at location [{key_prefix:?}] whose children are not in strictly \
                     ascending order! The edge at index [{index}] is not greater than the edge \
                     before it",
                )
            },
            MalformedTrieError::EmptyInnerNode {
                key_prefix,
                is_terminal,
            } => {
                write!(
                    f,
                    "Found a node at location [{key_prefix:?}] with no children (terminal: \
                     [{is_terminal}])! Only the root node may be childless",
                )
            },
        }
    }
}

impl<T: Clone> Clone for MalformedTrieError<T> {
    fn clone(&self) -> Self {
        match self {
            Self::UnsortedChildren { key_prefix, index } => Self::UnsortedChildren {
                key_prefix: key_prefix.clone(),
                index: *index,
            },
            Self::EmptyInnerNode {
                key_prefix,
                is_terminal,
            } => Self::EmptyInnerNode {
                key_prefix: key_prefix.clone(),
                is_terminal: *is_terminal,
            },
        }
    }
}

impl<T: PartialEq> PartialEq for MalformedTrieError<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::UnsortedChildren {
                    key_prefix: l_key_prefix,
                    index: l_index,
                },
                Self::UnsortedChildren {
                    key_prefix: r_key_prefix,
                    index: r_index,
                },
            ) => l_key_prefix == r_key_prefix && l_index == r_index,
            (
                Self::EmptyInnerNode {
                    key_prefix: l_key_prefix,
                    is_terminal: l_is_terminal,
                },
                Self::EmptyInnerNode {
                    key_prefix: r_key_prefix,
                    is_terminal: r_is_terminal,
                },
            ) => l_key_prefix == r_key_prefix && l_is_terminal == r_is_terminal,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for MalformedTrieError<T> {}

impl<T: fmt::Debug> Error for MalformedTrieError<T> {}

/// A visitor of the trie which checks that the trie is well-formed.
///
/// In this context, well-formed means that in the trie:
///  1. the edges of every node are in strictly ascending symbol order, with no
///     duplicates
///  2. every node other than the root has at least one child. A childless
///     terminal node must be encoded as a leaf edge, and a childless
///     non-terminal node stores nothing and must have been pruned.
///
/// Both are possibilities if specific trie operations are not implemented
/// correctly. This visitor can be used to sanity check the trie in unit tests
/// or other test cases.
///
/// This checker will only return a single issue at a time. A trie is only
/// "well-formed" (by the definition given above) if the checker returns
/// `Ok(_)`.
#[derive(Debug)]
pub struct WellFormedChecker {
    num_keys: usize,
}

impl WellFormedChecker {
    /// Traverse the given set and check that it is well-formed. Returns the
    /// number of sequences stored in the set.
    ///
    /// # Errors
    ///
    /// Returns an error if the given set is not well-formed.
    pub fn check<S: Sequence>(set: &TrieSet<S>) -> Result<usize, MalformedTrieError<S::Symbol>> {
        Self::check_tree(set.root())
    }

    /// Traverse the trie rooted at the given node and check that it is
    /// well-formed. Returns the number of sequences stored below it.
    ///
    /// # Errors
    ///
    /// Returns an error if the given trie is not well-formed.
    pub fn check_tree<T: Ord + Clone>(root: &Node<T>) -> Result<usize, MalformedTrieError<T>> {
        let mut checker = WellFormedChecker { num_keys: 0 };
        walk(root, &mut checker)?;
        Ok(checker.num_keys)
    }
}

impl<T: Ord + Clone> Visitor<T> for WellFormedChecker {
    type Error = MalformedTrieError<T>;

    fn visit_node(&mut self, path: &[T], node: &Node<T>) -> Result<(), Self::Error> {
        let children = node.children();
        if !path.is_empty() && children.is_empty() {
            return Err(MalformedTrieError::EmptyInnerNode {
                key_prefix: path.into(),
                is_terminal: node.is_terminal(),
            });
        }

        let unsorted = children
            .iter()
            .zip(children.iter().skip(1))
            .position(|(prev, next)| prev.symbol >= next.symbol);
        if let Some(prev_index) = unsorted {
            return Err(MalformedTrieError::UnsortedChildren {
                key_prefix: path.into(),
                index: prev_index + 1,
            });
        }

        self.num_keys += usize::from(node.is_terminal());
        Ok(())
    }

    fn visit_leaf(&mut self, _path: &[T]) -> Result<(), Self::Error> {
        self.num_keys += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        nodes::{Child, Location},
        tests_common::insert_all,
    };

    use super::*;

    #[test]
    fn check_well_formed_tries() {
        assert_eq!(WellFormedChecker::check(&TrieSet::<String>::new()), Ok(0));
        assert_eq!(WellFormedChecker::check(&insert_all([""])), Ok(1));
        assert_eq!(
            WellFormedChecker::check(&insert_all(["a", "ab", "abc", "b", "bcd", "bce"])),
            Ok(6)
        );
    }

    #[test]
    fn check_empty_inner_node() {
        let mut root = Node::<char>::new();
        root.children
            .insert_at(0, 'a', Child::Inner(Box::new(Node::terminal())));

        let err = WellFormedChecker::check_tree(&root).unwrap_err();
        assert_eq!(
            err,
            MalformedTrieError::EmptyInnerNode {
                key_prefix: ['a'].as_slice().into(),
                is_terminal: true,
            }
        );
        assert_eq!(
            err.to_string(),
            "Found a node at location [KeyPrefix(['a'])] with no children (terminal: [true])! \
             Only the root node may be childless"
        );
    }

    #[test]
    fn check_unsorted_children() {
        let mut set = insert_all(["xa", "xc"]);
        let x = set.root_mut().children[0].child.as_node_mut().unwrap();
        // bypass `locate` to break the ordering
        assert_eq!(x.children.locate(&'b'), Location::Vacant(1));
        x.children.insert_at(2, 'b', Child::Leaf);

        let err = WellFormedChecker::check(&set).unwrap_err();
        match err {
            MalformedTrieError::UnsortedChildren { key_prefix, index } => {
                assert_eq!(key_prefix, ['x']);
                assert_eq!(index, 2);
            },
            other => panic!("unexpected error [{other:?}]"),
        }
    }
}
