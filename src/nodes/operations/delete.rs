use std::fmt;

use crate::{
    nodes::{Child, Cursor, Node},
    Sequence,
};

/// This struct represents a location in the trie that can be erased, as found
/// by [`search_for_delete_point`].
///
/// Searching and applying are separate steps so that the search can run on a
/// shared borrow of the trie (through a [`Cursor`]) and the mutation on an
/// exclusive one afterwards.
#[derive(Clone, PartialEq, Eq)]
pub enum DeletePoint {
    /// The key is a node's own terminal flag. Clearing the flag is enough: the
    /// node still has children, or is the root.
    Terminal {
        /// Child indices from the root down to the node.
        path: Vec<usize>,
    },
    /// The key is a leaf edge.
    Edge {
        /// Child indices from the root down to the node that loses an edge.
        ///
        /// Non-terminal ancestors with a single child are skipped upwards
        /// during the search, so this is the lowest node that stays alive.
        path: Vec<usize>,
        /// Index of the edge to remove in that node.
        edge_index: usize,
        /// If true, removing the edge leaves the node (a terminal, non-root
        /// node) without children. Its incoming edge reverts to a
        /// [`Child::Leaf`].
        collapse: bool,
    },
}

impl fmt::Debug for DeletePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal { path } => f.debug_struct("Terminal").field("path", path).finish(),
            Self::Edge {
                path,
                edge_index,
                collapse,
            } => f
                .debug_struct("Edge")
                .field("path", path)
                .field("edge_index", edge_index)
                .field("collapse", collapse)
                .finish(),
        }
    }
}

/// Work out what has to change to erase the key the cursor is positioned at.
///
/// Returns `None` if the cursor is at the end sentinel.
///
/// For a leaf edge, the search climbs from the cursor's node while the node is
/// non-terminal and has exactly one child, stopping at the root. Every node
/// climbed over exists only to lead to the erased key, so removing the edge
/// above them drops the whole chain at once.
pub fn search_for_delete_point<S: Sequence>(cursor: &Cursor<'_, S>) -> Option<DeletePoint> {
    if cursor.is_end() {
        return None;
    }

    let frames = &cursor.stack;
    let last = frames.len() - 1;

    if cursor.at_terminal {
        return Some(DeletePoint::Terminal {
            path: frames[..last].iter().map(|frame| frame.index).collect(),
        });
    }

    let mut depth = last;
    while depth > 0 {
        let node = frames[depth].node;
        if node.is_terminal || node.children.len() != 1 {
            break;
        }
        depth -= 1;
    }

    let node = frames[depth].node;
    Some(DeletePoint::Edge {
        path: frames[..depth].iter().map(|frame| frame.index).collect(),
        edge_index: frames[depth].index,
        collapse: depth > 0 && node.children.len() == 1,
    })
}

impl DeletePoint {
    /// Apply the delete to the trie rooted at `root`.
    ///
    /// Returns false, changing nothing, if the delete point does not describe
    /// a location in this trie. This cannot happen for a point freshly
    /// returned by [`search_for_delete_point`] on the same trie.
    pub fn apply<T>(self, root: &mut Node<T>) -> bool {
        match self {
            DeletePoint::Terminal { path } => {
                let Some(node) = walk_mut(root, &path) else {
                    return false;
                };
                node.is_terminal = false;
                true
            },
            DeletePoint::Edge {
                path,
                edge_index,
                collapse: false,
            } => {
                let Some(node) = walk_mut(root, &path) else {
                    return false;
                };
                if edge_index >= node.children.len() {
                    return false;
                }
                let _removed = node.children.remove_at(edge_index);
                true
            },
            DeletePoint::Edge {
                path,
                edge_index,
                collapse: true,
            } => {
                let Some((&last, ancestors)) = path.split_last() else {
                    return false;
                };
                let Some(edge) = walk_mut(root, ancestors).and_then(|p| p.children.get_mut(last))
                else {
                    return false;
                };
                let Some(node) = edge.child.as_node_mut() else {
                    return false;
                };
                if edge_index >= node.children.len() {
                    return false;
                }

                let _removed = node.children.remove_at(edge_index);
                debug_assert!(
                    node.is_terminal && node.children.is_empty(),
                    "collapsed node must be terminal and childless"
                );

                #[cfg(feature = "tracing")]
                tracing::trace!(depth = path.len(), "collapsing terminal node to leaf edge");

                edge.child = Child::Leaf;
                true
            },
        }
    }
}

fn walk_mut<'a, T>(root: &'a mut Node<T>, path: &[usize]) -> Option<&'a mut Node<T>> {
    let mut node = root;
    for &index in path {
        node = node.children.get_mut(index)?.child.as_node_mut()?;
    }
    Some(node)
}
