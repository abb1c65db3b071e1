use crate::{
    nodes::{Child, Cursor, Frame, Location, Node},
    Sequence,
};

/// Whether a [`seek`] accepts a stored sequence equal to the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekBound {
    /// Stop at the first sequence not less than the probe.
    Inclusive,
    /// Stop at the first sequence strictly greater than the probe.
    Exclusive,
}

/// Search the trie for the given key, returning a cursor positioned at it, or
/// at the end sentinel if the key is not stored.
pub fn find<'a, S: Sequence>(root: &'a Node<S::Symbol>, key: &S) -> Cursor<'a, S> {
    let mut cursor = Cursor::detached(root);
    let mut node = root;
    let mut symbols = key.symbols().peekable();

    loop {
        let Some(symbol) = symbols.next() else {
            // The key ends at this node, so it is stored only if the node is
            // terminal.
            if !node.is_terminal {
                return Cursor::end(root);
            }
            cursor.stack.push(Frame { node, index: 0 });
            cursor.at_terminal = true;
            return cursor;
        };

        let Location::Found(index) = node.children.locate(&symbol) else {
            return Cursor::end(root);
        };

        cursor.stack.push(Frame { node, index });
        cursor.built.push_symbol(symbol);

        match &node.children[index].child {
            Child::Leaf if symbols.peek().is_none() => return cursor,
            Child::Leaf => return Cursor::end(root),
            Child::Inner(child) => node = child,
        }
    }
}

/// Return true if the given key is stored in the trie.
///
/// This is the same walk as [`find`], without building a cursor.
pub fn contains<S: Sequence>(root: &Node<S::Symbol>, key: &S) -> bool {
    let mut node = root;
    let mut symbols = key.symbols().peekable();

    while let Some(symbol) = symbols.next() {
        let Location::Found(index) = node.children.locate(&symbol) else {
            return false;
        };

        match &node.children[index].child {
            Child::Leaf => return symbols.peek().is_none(),
            Child::Inner(child) => node = child,
        }
    }

    node.is_terminal
}

/// Return a cursor at the first stored sequence that is greater than (or,
/// with [`SeekBound::Inclusive`], equal to) the probe.
///
/// The walk follows the probe down the trie. As soon as the probe leaves the
/// stored paths, the answer is the smallest sequence at or after the point of
/// divergence, using the same ordering rule as cursor traversal: a node's own
/// terminal marker before its children, children in ascending symbol order.
pub fn seek<'a, S: Sequence>(
    root: &'a Node<S::Symbol>,
    probe: &S,
    bound: SeekBound,
) -> Cursor<'a, S> {
    let mut cursor = Cursor::detached(root);
    let mut node = root;
    let mut symbols = probe.symbols().peekable();

    loop {
        let Some(symbol) = symbols.next() else {
            // Every sequence below this node extends the probe.
            cursor.stack.push(Frame { node, index: 0 });
            if node.is_terminal && bound == SeekBound::Inclusive {
                cursor.at_terminal = true;
            } else {
                cursor.settle_forward();
            }
            return cursor;
        };

        match node.children.locate(&symbol) {
            Location::Found(index) => {
                cursor.stack.push(Frame { node, index });

                match &node.children[index].child {
                    Child::Leaf => {
                        if symbols.peek().is_none() && bound == SeekBound::Inclusive {
                            cursor.built.push_symbol(symbol);
                            return cursor;
                        }

                        // The stored sequence is equal to, or a strict prefix of,
                        // the probe. Either way it is not an answer.
                        if let Some(top) = cursor.stack.last_mut() {
                            top.index += 1;
                        }
                        cursor.settle_forward();
                        return cursor;
                    },
                    Child::Inner(child) => {
                        cursor.built.push_symbol(symbol);
                        node = child;
                    },
                }
            },
            Location::Vacant(index) => {
                // Every edge from `index` onwards sorts after the probe.
                cursor.stack.push(Frame { node, index });
                cursor.settle_forward();
                return cursor;
            },
        }
    }
}
