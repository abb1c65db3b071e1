//! This module contains the implementation of `clone()` for the trie.

use crate::nodes::{Child, ChildTable, Node};

/// A node whose copy is still being filled in.
struct Unfinished<'a, T> {
    source: &'a Node<T>,
    /// Index of the next edge of `source` to copy.
    next_edge: usize,
    copy: Node<T>,
}

impl<'a, T> Unfinished<'a, T> {
    fn new(source: &'a Node<T>) -> Self {
        Unfinished {
            source,
            next_edge: 0,
            copy: Node {
                children: ChildTable::with_capacity(source.children.len()),
                is_terminal: source.is_terminal,
            },
        }
    }
}

/// Clone the given trie and every sequence it stores.
///
/// This function does not use recursion to clone, so it should not cause stack
/// overflow when cloning a deep trie.
///
/// Each copied subtree is complete before it is linked into its parent copy.
/// If cloning a symbol panics, every node copied so far is still owned by the
/// unfinished stack and is dropped during unwinding, and the source is
/// untouched.
pub fn clone_tree<T: Clone>(root: &Node<T>) -> Node<T> {
    let mut unfinished = vec![Unfinished::new(root)];

    loop {
        let top = unfinished.last_mut().expect("unfinished stack is never empty");
        let source = top.source;

        if let Some(edge) = source.children.get(top.next_edge) {
            top.next_edge += 1;
            match &edge.child {
                Child::Leaf => top.copy.children.push_edge(edge.symbol.clone(), Child::Leaf),
                Child::Inner(child) => unfinished.push(Unfinished::new(child)),
            }
            continue;
        }

        let finished = unfinished.pop().expect("last was Some");
        let Some(parent) = unfinished.last_mut() else {
            return finished.copy;
        };

        // The parent has already moved past the edge that led here
        let symbol = parent.source.children[parent.next_edge - 1].symbol.clone();
        parent
            .copy
            .children
            .push_edge(symbol, Child::Inner(Box::new(finished.copy)));
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        clone_tree(self)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        panic::{self, AssertUnwindSafe},
    };

    use crate::{
        nodes::count_keys, tests_common::insert_all, visitor::WellFormedChecker, TrieSet,
    };

    use super::*;

    thread_local! {
        /// Number of [`Fragile`] clones allowed before one panics, unlimited if
        /// `None`.
        static CLONES_LEFT: Cell<Option<usize>> = const { Cell::new(None) };
    }

    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Fragile(u8);

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            CLONES_LEFT.with(|left| match left.get() {
                Some(0) => panic!("out of clones for symbol [{}]", self.0),
                Some(n) => left.set(Some(n - 1)),
                None => {},
            });
            Fragile(self.0)
        }
    }

    fn fragile_set() -> TrieSet<Vec<Fragile>> {
        let mut set = TrieSet::new();
        for a in 0..3 {
            set.insert(vec![Fragile(a)]);
            for b in 0..3 {
                set.insert(vec![Fragile(a), Fragile(b)]);
                for c in 0..3 {
                    set.insert(vec![Fragile(a), Fragile(b), Fragile(c)]);
                }
            }
        }
        set
    }

    fn keys(root: &Node<char>) -> Vec<String> {
        TrieSet::from_root(root.clone()).iter().collect()
    }

    #[test]
    fn clone_preserves_structure() {
        let set = insert_all(["", "a", "ab", "abc", "b", "bcd", "bce"]);
        let copy = clone_tree(set.root());

        assert_eq!(count_keys(&copy), 7);
        assert_eq!(keys(&copy), keys(set.root()));
        assert!(copy.is_terminal());
        // "b" is stored on a promoted node, "a" and "ab" on nodes with children
        assert!(copy.children()[1].child.as_node().unwrap().is_terminal());
    }

    #[test]
    fn clone_is_independent() {
        let set = insert_all(["abc", "abd"]);
        let mut copy = TrieSet::from_root(clone_tree(set.root()));
        copy.insert(String::from("x"));
        copy.erase(&String::from("abc"));

        assert_eq!(set.len(), 2);
        assert_eq!(copy.iter().collect::<Vec<_>>(), ["abd", "x"]);
    }

    #[test]
    fn clone_empty_trie() {
        let root = Node::<char>::new();
        let copy = clone_tree(&root);
        assert!(copy.is_vacant());
    }

    #[test]
    fn clone_very_deep_key() {
        let key = "z".repeat(200_000);
        let set = insert_all([key.as_str(), "zz"]);
        let copy = clone_tree(set.root());
        assert_eq!(count_keys(&copy), 2);
    }

    #[test]
    fn clone_panic_leaves_source_intact() {
        let set = fragile_set();
        let expected: Vec<_> = set.iter().collect();
        assert_eq!(expected.len(), 39);

        // one symbol clone per edge, so this fails about halfway through
        CLONES_LEFT.with(|left| left.set(Some(20)));
        let result = panic::catch_unwind(AssertUnwindSafe(|| set.clone()));
        CLONES_LEFT.with(|left| left.set(None));

        assert!(result.is_err());
        assert_eq!(set.iter().collect::<Vec<_>>(), expected);
        assert_eq!(WellFormedChecker::check(&set), Ok(expected.len()));

        let copy = set.clone();
        assert_eq!(copy, set);
    }
}
