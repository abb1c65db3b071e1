use crate::nodes::{Child, Node};

/// Count the sequences stored in the trie rooted at `root`.
///
/// A terminal node counts once, as does every [`Child::Leaf`] edge. The count
/// is recomputed by a full walk of the trie on every call.
pub fn count_keys<T>(root: &Node<T>) -> usize {
    let mut count = 0;
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        count += usize::from(node.is_terminal);
        for edge in node.children.iter() {
            match &edge.child {
                Child::Leaf => count += 1,
                Child::Inner(child) => pending.push(child),
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use crate::tests_common::insert_all;

    use super::*;

    #[test]
    fn count_mixed_encodings() {
        assert_eq!(count_keys(&Node::<char>::new()), 0);
        assert_eq!(count_keys(insert_all([""]).root()), 1);
        assert_eq!(count_keys(insert_all(["a", "ab", "b"]).root()), 3);
        assert_eq!(count_keys(insert_all(["ab", "ac", "abc", "abcd"]).root()), 4);
    }
}
