//! Utilities for inspecting the trie structure.

mod pretty_printer;
mod tree_stats;
mod well_formed;

use crate::nodes::{Child, Node};
pub use pretty_printer::*;
pub use tree_stats::*;
pub use well_formed::*;

/// The `Visitor` trait allows creating new operations over the trie by
/// overriding specific handling methods for nodes and leaf edges.
///
/// Visitors are driven by [`walk`], which visits every node before its
/// children and children in ascending symbol order.
pub trait Visitor<T> {
    /// The error type that stops the walk early.
    type Error;

    /// Visit a node. `path` spells the symbols from the root to the node, so
    /// it is empty for the root.
    fn visit_node(&mut self, path: &[T], node: &Node<T>) -> Result<(), Self::Error>;

    /// Visit a [`Child::Leaf`] edge. `path` ends with the edge symbol.
    fn visit_leaf(&mut self, path: &[T]) -> Result<(), Self::Error>;
}

/// Walk the trie rooted at `root` depth first, calling the visitor for every
/// node and leaf edge.
///
/// The walk uses an explicit stack, so it does not overflow the call stack on
/// a deep trie.
pub fn walk<T: Clone, V: Visitor<T>>(root: &Node<T>, visitor: &mut V) -> Result<(), V::Error> {
    let mut path = Vec::new();
    let mut stack = vec![(root, 0usize)];
    visitor.visit_node(&path, root)?;

    while let Some(top) = stack.last_mut() {
        let (node, index) = *top;
        let Some(edge) = node.children.get(index) else {
            stack.pop();
            path.pop();
            continue;
        };
        top.1 += 1;

        path.push(edge.symbol.clone());
        match &edge.child {
            Child::Leaf => {
                visitor.visit_leaf(&path)?;
                path.pop();
            },
            Child::Inner(child) => {
                visitor.visit_node(&path, child)?;
                stack.push((child, 0));
            },
        }
    }

    Ok(())
}
