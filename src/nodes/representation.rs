//! Trie node representation: the child edge table, the tagged edge targets
//! and the node itself.

use std::{
    fmt, mem,
    ops::{Index, IndexMut},
    slice,
};

/// The target of an edge in the trie.
///
/// A [`Child::Leaf`] edge is the sparse encoding of a stored sequence that
/// ends with the edge symbol and has no stored extension. No node is allocated
/// for it. Once a longer sequence sharing the prefix is inserted the edge is
/// promoted in place to a [`Child::Inner`] node with the terminal flag set.
pub enum Child<T> {
    /// The sequence ending at this edge is stored and nothing extends it.
    Leaf,
    /// An owned child node.
    Inner(Box<Node<T>>),
}

impl<T> Child<T> {
    /// Returns true if this edge uses the sparse leaf encoding.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Child::Leaf)
    }

    /// Return a reference to the child node, if one is allocated.
    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Child::Leaf => None,
            Child::Inner(node) => Some(node),
        }
    }

    /// Return a mutable reference to the child node, if one is allocated.
    pub fn as_node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Child::Leaf => None,
            Child::Inner(node) => Some(node),
        }
    }

    /// Return the child node, promoting a [`Child::Leaf`] edge to a terminal
    /// node first.
    ///
    /// The promoted node carries the terminal flag so the sequence that was
    /// encoded by the leaf edge stays stored.
    pub fn promote(&mut self) -> &mut Node<T> {
        if self.is_leaf() {
            #[cfg(feature = "tracing")]
            tracing::trace!("promoting leaf edge to terminal node");
            *self = Child::Inner(Box::new(Node::terminal()));
        }

        match self {
            Child::Inner(node) => node,
            Child::Leaf => unreachable!("leaf edge was promoted above"),
        }
    }
}

impl<T> fmt::Debug for Child<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Leaf => f.write_str("Leaf"),
            Child::Inner(node) => f
                .debug_struct("Inner")
                .field("is_terminal", &node.is_terminal)
                .field("num_children", &node.children.len())
                .finish(),
        }
    }
}

/// A single `(symbol, child)` entry of a [`ChildTable`].
pub struct Edge<T> {
    /// The symbol labelling this edge.
    pub symbol: T,
    /// The target of the edge.
    pub child: Child<T>,
}

impl<T: fmt::Debug> fmt::Debug for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("symbol", &self.symbol)
            .field("child", &self.child)
            .finish()
    }
}

/// The result of searching a [`ChildTable`] for a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// The symbol is present at this index.
    Found(usize),
    /// The symbol is absent, this is the index it would be inserted at.
    Vacant(usize),
}

/// An ordered, duplicate-free table of edges, searched by binary search.
///
/// The table is backed by a vector: lookups are `O(log k)` and structural
/// updates are `O(k)` for a node with `k` children.
pub struct ChildTable<T> {
    edges: Vec<Edge<T>>,
}

impl<T> ChildTable<T> {
    /// Create an empty table. This does not allocate.
    pub const fn new() -> Self {
        ChildTable { edges: Vec::new() }
    }

    /// Create an empty table with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        ChildTable {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// The number of edges in the table.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if there are no edges in the table.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The number of edges the table can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.edges.capacity()
    }

    /// Iterate over the edges in ascending symbol order.
    pub fn iter(&self) -> slice::Iter<'_, Edge<T>> {
        self.edges.iter()
    }

    /// Return the edge at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Edge<T>> {
        self.edges.get(index)
    }

    /// Return the edge at `index` mutably, if present.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Edge<T>> {
        self.edges.get_mut(index)
    }

    /// Insert a new edge at `index`.
    ///
    /// The caller must pass the index returned by [`ChildTable::locate`] so
    /// that the table stays sorted and free of duplicates.
    pub fn insert_at(&mut self, index: usize, symbol: T, child: Child<T>) {
        self.edges.insert(index, Edge { symbol, child });
    }

    /// Append an edge after all existing edges.
    ///
    /// Used when copying a table whose order is already known to be correct.
    pub(crate) fn push_edge(&mut self, symbol: T, child: Child<T>) {
        self.edges.push(Edge { symbol, child });
    }

    /// Remove and return the edge at `index`.
    ///
    /// # Panics
    ///  - Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Edge<T> {
        self.edges.remove(index)
    }

    /// Move every allocated child node out of the table into `out`, leaving
    /// the table empty.
    pub(crate) fn drain_nodes_into(&mut self, out: &mut Vec<Box<Node<T>>>) {
        out.extend(
            mem::take(&mut self.edges)
                .into_iter()
                .filter_map(|edge| match edge.child {
                    Child::Leaf => None,
                    Child::Inner(node) => Some(node),
                }),
        );
    }
}

impl<T: Ord> ChildTable<T> {
    /// Return the index of the first edge whose symbol is greater than
    /// `symbol`.
    ///
    /// This single search serves both lookups (the edge before the returned
    /// index holds `symbol` if present) and insertions (the returned index is
    /// the insertion point otherwise).
    pub fn upper_bound(&self, symbol: &T) -> usize {
        self.edges.partition_point(|edge| edge.symbol <= *symbol)
    }

    /// Search the table for `symbol`.
    pub fn locate(&self, symbol: &T) -> Location {
        let bound = self.upper_bound(symbol);
        match bound.checked_sub(1) {
            Some(prev) if self.edges[prev].symbol == *symbol => Location::Found(prev),
            _ => Location::Vacant(bound),
        }
    }
}

impl<T> Index<usize> for ChildTable<T> {
    type Output = Edge<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.edges[index]
    }
}

impl<T> IndexMut<usize> for ChildTable<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.edges[index]
    }
}

impl<T> Default for ChildTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChildTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.edges.iter()).finish()
    }
}

/// A trie node: a table of child edges plus a terminal flag.
///
/// The terminal flag marks that the path from the root to this node spells a
/// stored sequence. Every node other than the root has at least one child; a
/// childless terminal node is always represented by a [`Child::Leaf`] edge
/// instead.
pub struct Node<T> {
    pub(crate) children: ChildTable<T>,
    pub(crate) is_terminal: bool,
}

impl<T> Node<T> {
    /// Create an empty, non-terminal node.
    pub const fn new() -> Self {
        Node {
            children: ChildTable::new(),
            is_terminal: false,
        }
    }

    /// Create an empty node with the terminal flag set.
    pub const fn terminal() -> Self {
        Node {
            children: ChildTable::new(),
            is_terminal: true,
        }
    }

    /// Returns true if a stored sequence ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The child edges of this node.
    pub fn children(&self) -> &ChildTable<T> {
        &self.children
    }

    /// Returns true if this node stores nothing, neither itself nor below.
    pub fn is_vacant(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Reset this node to the vacant state.
    pub(crate) fn clear(&mut self) {
        *self = Node::new();
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Children are torn down from an explicit stack so that the depth of the
        // trie is never limited by the call stack.
        let mut pending = Vec::new();
        self.children.drain_nodes_into(&mut pending);

        while let Some(mut node) = pending.pop() {
            node.children.drain_nodes_into(&mut pending);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children)
            .finish()
    }
}
