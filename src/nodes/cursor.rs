//! Bidirectional cursors over the ordered contents of a trie.

use std::{fmt, ptr};

use crate::{
    nodes::{Child, Node},
    Sequence,
};

/// One level of a cursor's path: a node and an index into its child table.
pub(crate) struct Frame<'a, T> {
    pub(crate) node: &'a Node<T>,
    pub(crate) index: usize,
}

impl<T> Copy for Frame<'_, T> {}

impl<T> Clone for Frame<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

/// A position in a [`TrieSet`](crate::TrieSet) that can move forwards and
/// backwards through the stored sequences in ascending order.
///
/// The cursor keeps the whole path from the root to the current position on an
/// explicit stack, along with the decoded key of that position. Moving the
/// cursor pushes and pops symbols on the key instead of re-reading it from the
/// tree.
///
/// A cursor is either positioned at a stored sequence or at the end sentinel,
/// which sits between the last and the first sequence. Moving forward from the
/// end sentinel wraps to the first sequence, and moving backward from the
/// first sequence lands on the end sentinel.
///
/// Cursors compare equal when they point at the same place in the same trie.
/// Comparing cursors of two different tries gives a meaningless result.
pub struct Cursor<'a, S: Sequence> {
    pub(crate) root: &'a Node<S::Symbol>,
    pub(crate) stack: Vec<Frame<'a, S::Symbol>>,
    pub(crate) built: S,
    /// Stopped at the top node's own terminal marker, rather than at a leaf
    /// edge of the top node.
    pub(crate) at_terminal: bool,
    pub(crate) at_end: bool,
}

impl<'a, S: Sequence> Cursor<'a, S> {
    /// A cursor with no frames, for operations that build the path
    /// themselves.
    pub(crate) fn detached(root: &'a Node<S::Symbol>) -> Self {
        Cursor {
            root,
            stack: Vec::new(),
            built: S::default(),
            at_terminal: false,
            at_end: false,
        }
    }

    /// Create a cursor at the smallest sequence stored in `root`, or at the end
    /// sentinel if nothing is stored.
    pub(crate) fn first(root: &'a Node<S::Symbol>) -> Self {
        let mut cursor = Self::detached(root);
        cursor.reset_to_first();
        cursor
    }

    /// Create a cursor at the end sentinel.
    pub(crate) fn end(root: &'a Node<S::Symbol>) -> Self {
        let mut cursor = Self::detached(root);
        cursor.reset_to_end();
        cursor
    }

    /// Rebuild a cursor from a path of child indices.
    ///
    /// Each index but the last selects the edge to descend through, and the
    /// last one is the index of the top frame. If the path does not describe a
    /// stopping position in this trie, the end sentinel is returned.
    pub(crate) fn attach(root: &'a Node<S::Symbol>, path: &[usize], at_terminal: bool) -> Self {
        let Some((&last, ancestors)) = path.split_last() else {
            return Self::end(root);
        };

        let mut cursor = Self::detached(root);
        cursor.stack.reserve(path.len());
        cursor.at_terminal = at_terminal;

        let mut node = root;
        for &index in ancestors {
            let Some(edge) = node.children.get(index) else {
                return Self::end(root);
            };
            let Some(child) = edge.child.as_node() else {
                return Self::end(root);
            };

            cursor.stack.push(Frame { node, index });
            cursor.built.push_symbol(edge.symbol.clone());
            node = child;
        }

        cursor.stack.push(Frame { node, index: last });
        if at_terminal {
            if !node.is_terminal || last != 0 {
                return Self::end(root);
            }
        } else {
            match node.children.get(last) {
                Some(edge) if edge.child.is_leaf() => cursor.built.push_symbol(edge.symbol.clone()),
                _ => return Self::end(root),
            }
        }

        cursor
    }

    /// The sequence at the current position, or `None` at the end sentinel.
    pub fn key(&self) -> Option<&S> {
        (!self.at_end).then_some(&self.built)
    }

    /// Returns true if the cursor is at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.at_end
    }

    /// Consume the cursor, returning the key at the current position.
    pub fn into_key(self) -> Option<S> {
        (!self.at_end).then_some(self.built)
    }

    /// Detach the cursor from the trie, producing a [`Position`] that can be
    /// passed to mutating operations.
    pub fn position(&self) -> Position<S> {
        Position {
            path: self.stack.iter().map(|frame| frame.index).collect(),
            key: self.built.clone(),
            at_terminal: self.at_terminal,
            at_end: self.at_end,
        }
    }

    /// Move to the next sequence in ascending order.
    pub fn move_next(&mut self) {
        if self.at_end {
            self.reset_to_first();
            return;
        }

        if self.at_terminal {
            // the node's own marker sorts before all of its children, which
            // start at the index that the frame already holds
            self.at_terminal = false;
        } else {
            self.built.pop_symbol();
            self.top_mut().index += 1;
        }

        self.settle_forward();
    }

    /// Move to the previous sequence in ascending order.
    pub fn move_prev(&mut self) {
        if self.at_end {
            let root = self.root;
            match root.children.len().checked_sub(1) {
                Some(last) => {
                    self.at_end = false;
                    self.top_mut().index = last;
                    self.descend_last();
                },
                None if root.is_terminal => {
                    self.at_end = false;
                    self.at_terminal = true;
                    self.top_mut().index = 0;
                },
                None => {},
            }
            return;
        }

        loop {
            if self.at_terminal {
                self.at_terminal = false;
            } else {
                self.built.pop_symbol();
                let top = self.top_mut();
                if top.index > 0 {
                    top.index -= 1;
                    self.descend_last();
                    return;
                }
                if top.node.is_terminal {
                    self.at_terminal = true;
                    return;
                }
            }

            if self.stack.len() == 1 {
                self.reset_to_end();
                return;
            }
            // The parent frame still points at the edge we came down, and its
            // symbol is still on `built`, so the next pass steps back from it.
            self.stack.pop();
        }
    }

    pub(crate) fn top(&self) -> Frame<'a, S::Symbol> {
        *self.stack.last().expect("cursor stack is never empty")
    }

    fn top_mut(&mut self) -> &mut Frame<'a, S::Symbol> {
        self.stack.last_mut().expect("cursor stack is never empty")
    }

    fn reset_to_first(&mut self) {
        let root = self.root;
        self.stack.clear();
        self.stack.push(Frame {
            node: root,
            index: 0,
        });
        self.built = S::default();
        self.at_end = false;
        self.at_terminal = root.is_terminal;

        if !self.at_terminal {
            self.settle_forward();
        }
    }

    fn reset_to_end(&mut self) {
        let root = self.root;
        self.stack.clear();
        self.stack.push(Frame {
            node: root,
            index: root.children.len(),
        });
        self.built = S::default();
        self.at_terminal = false;
        self.at_end = true;
    }

    /// Find the first stopping position at or after the top frame's index.
    ///
    /// Expects `built` to hold the path to the top node, without a symbol for
    /// the top frame's edge. Exhausted frames are popped until one with a
    /// remaining edge is found; if the root is exhausted the cursor moves to
    /// the end sentinel.
    pub(crate) fn settle_forward(&mut self) {
        loop {
            let top = self.top();
            if top.index < top.node.children.len() {
                break;
            }

            if self.stack.len() == 1 {
                self.reset_to_end();
                return;
            }

            self.stack.pop();
            self.built.pop_symbol();
            self.top_mut().index += 1;
        }

        self.descend_first();
    }

    /// Descend through the top frame's edge to the smallest sequence below it.
    fn descend_first(&mut self) {
        loop {
            let Frame { node, index } = self.top();
            let edge = &node.children[index];
            self.built.push_symbol(edge.symbol.clone());

            match &edge.child {
                Child::Leaf => return,
                Child::Inner(child) => {
                    debug_assert!(
                        child.is_terminal || !child.children.is_empty(),
                        "non-root node must store at least one sequence"
                    );
                    self.stack.push(Frame {
                        node: child,
                        index: 0,
                    });
                    if child.is_terminal {
                        self.at_terminal = true;
                        return;
                    }
                },
            }
        }
    }

    /// Descend through the top frame's edge to the largest sequence below it.
    ///
    /// A node's own terminal marker is its smallest sequence, so this always
    /// ends on a leaf edge.
    fn descend_last(&mut self) {
        loop {
            let Frame { node, index } = self.top();
            let edge = &node.children[index];
            self.built.push_symbol(edge.symbol.clone());

            match &edge.child {
                Child::Leaf => return,
                Child::Inner(child) => {
                    debug_assert!(
                        !child.children.is_empty(),
                        "non-root node must have at least one child"
                    );
                    self.stack.push(Frame {
                        node: child,
                        index: child.children.len() - 1,
                    });
                },
            }
        }
    }
}

impl<S: Sequence> Clone for Cursor<'_, S> {
    fn clone(&self) -> Self {
        Cursor {
            root: self.root,
            stack: self.stack.clone(),
            built: self.built.clone(),
            at_terminal: self.at_terminal,
            at_end: self.at_end,
        }
    }
}

impl<S: Sequence> PartialEq for Cursor<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        // The innermost frame determines the whole path within one trie.
        let (lhs, rhs) = (self.top(), other.top());
        ptr::eq(lhs.node, rhs.node)
            && lhs.index == rhs.index
            && self.at_terminal == other.at_terminal
            && self.at_end == other.at_end
    }
}

impl<S: Sequence> Eq for Cursor<'_, S> {}

impl<S: Sequence + fmt::Debug> fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("key", &self.key())
            .field(
                "path",
                &self
                    .stack
                    .iter()
                    .map(|frame| frame.index)
                    .collect::<Vec<_>>(),
            )
            .field("at_terminal", &self.at_terminal)
            .finish()
    }
}

/// A cursor position detached from the trie it was taken from.
///
/// A `Position` stores the child indices along the path and the key at that
/// point, without borrowing the trie. It is what the mutating operations of
/// [`TrieSet`](crate::TrieSet) accept and return. Any structural change to the
/// trie may invalidate a position other than the one an operation returns; a
/// position that no longer matches the trie re-attaches as the end sentinel.
#[derive(Clone)]
pub struct Position<S> {
    pub(crate) path: Vec<usize>,
    pub(crate) key: S,
    pub(crate) at_terminal: bool,
    pub(crate) at_end: bool,
}

impl<S: Sequence> Position<S> {
    /// The end sentinel position.
    pub fn end() -> Self {
        Position {
            path: Vec::new(),
            key: S::default(),
            at_terminal: false,
            at_end: true,
        }
    }
}

impl<S> Position<S> {
    /// The key stored at this position, or `None` for the end sentinel.
    pub fn key(&self) -> Option<&S> {
        (!self.at_end).then_some(&self.key)
    }

    /// Returns true if this is the end sentinel.
    pub fn is_end(&self) -> bool {
        self.at_end
    }
}

impl<S> PartialEq for Position<S> {
    fn eq(&self, other: &Self) -> bool {
        match (self.at_end, other.at_end) {
            (true, true) => true,
            (false, false) => self.at_terminal == other.at_terminal && self.path == other.path,
            _ => false,
        }
    }
}

impl<S> Eq for Position<S> {}

impl<S: fmt::Debug> fmt::Debug for Position<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("key", &self.key())
            .field("path", &self.path)
            .field("at_terminal", &self.at_terminal)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{tests_common::insert_all, TrieSet};

    use super::*;

    fn forward(set: &TrieSet<String>) -> Vec<String> {
        let mut cursor = set.begin();
        let mut out = Vec::new();
        while let Some(key) = cursor.key() {
            out.push(key.clone());
            cursor.move_next();
        }
        out
    }

    fn backward(set: &TrieSet<String>) -> Vec<String> {
        let mut cursor = set.end();
        let mut out = Vec::new();
        loop {
            cursor.move_prev();
            match cursor.key() {
                Some(key) => out.push(key.clone()),
                None => break,
            }
        }
        out
    }

    #[test]
    fn cursor_walks_both_directions() {
        let set = insert_all(["b", "a", "ab", "abc", "ba", "", "c"]);
        let expected = ["", "a", "ab", "abc", "b", "ba", "c"];

        assert_eq!(forward(&set), expected);

        let mut reversed = backward(&set);
        reversed.reverse();
        assert_eq!(reversed, expected);
    }

    #[test]
    fn cursor_on_empty_trie() {
        let set = TrieSet::<String>::new();
        let mut cursor = set.begin();
        assert!(cursor.is_end());
        assert_eq!(cursor, set.end());

        cursor.move_prev();
        assert!(cursor.is_end());
        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_only_empty_key() {
        let set = insert_all([""]);
        let mut cursor = set.begin();
        assert_eq!(cursor.key().map(String::as_str), Some(""));

        cursor.move_next();
        assert!(cursor.is_end());

        cursor.move_prev();
        assert_eq!(cursor.key().map(String::as_str), Some(""));
        assert_eq!(cursor, set.begin());
    }

    #[test]
    fn cursor_wraps_around_end() {
        let set = insert_all(["x", "y"]);
        let mut cursor = set.begin();

        cursor.move_prev();
        assert!(cursor.is_end());
        assert_eq!(cursor, set.end());

        cursor.move_next();
        assert_eq!(cursor.key().map(String::as_str), Some("x"));
    }

    #[test]
    fn terminal_marker_and_first_leaf_edge_are_distinct() {
        // "a" is the terminal marker of the node for `a`, and "ab" is the leaf
        // edge at index 0 of that same node.
        let set = insert_all(["a", "ab"]);
        let first = set.begin();
        let mut second = first.clone();
        second.move_next();

        assert_eq!(second.key().map(String::as_str), Some("ab"));
        assert_ne!(first, second);

        second.move_prev();
        assert_eq!(first, second);
    }

    #[test]
    fn position_round_trip() {
        let set = insert_all(["car", "cart", "cat", "dog"]);
        let mut cursor = set.begin();
        cursor.move_next();

        let position = cursor.position();
        assert_eq!(position.key().map(String::as_str), Some("cart"));

        let attached = set.cursor_at(&position);
        assert_eq!(attached, cursor);
        assert_eq!(attached.key(), cursor.key());
        assert_eq!(set.end().position(), Position::end());
    }

    #[test]
    fn stale_position_attaches_as_end() {
        let mut set = insert_all(["aa", "ab"]);
        let position = set.find(&String::from("ab")).position();

        set.erase(&String::from("ab"));
        assert!(set.cursor_at(&position).is_end());
    }

    #[test]
    fn cursor_over_vec_keys() {
        let set: TrieSet<Vec<u8>> = [vec![2, 0], vec![1], vec![1, 255], vec![]].into();
        let mut cursor = set.end();
        let mut keys = Vec::new();
        loop {
            cursor.move_prev();
            let Some(key) = cursor.key() else { break };
            keys.push(key.clone());
        }
        assert_eq!(keys, [vec![2, 0], vec![1, 255], vec![1], vec![]]);
    }
}
