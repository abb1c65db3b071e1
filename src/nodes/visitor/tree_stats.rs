use std::{convert::Infallible, fmt, mem, ops::RangeInclusive};

use crate::{
    nodes::{
        visitor::{walk, Visitor},
        Edge, Node,
    },
    Sequence, TrieSet,
};

/// A visitor of the trie which collects statistics about the trie, like how
/// many nodes there are, how many children they have and how many sequences
/// use the leaf edge encoding.
#[derive(Debug)]
pub struct TreeStatsCollector {
    stats: TreeStats,
}

impl TreeStatsCollector {
    /// Run the stats collection on the given set, then return the accumulated
    /// stats.
    pub fn collect<S: Sequence>(set: &TrieSet<S>) -> TreeStats {
        Self::collect_tree(set.root())
    }

    /// Run the stats collection on the trie rooted at the given node.
    pub fn collect_tree<T: Clone>(root: &Node<T>) -> TreeStats {
        let mut collector = TreeStatsCollector {
            stats: TreeStats::default(),
        };

        match walk(root, &mut collector) {
            Ok(()) => {},
            Err(never) => match never {},
        }

        collector.stats
    }
}

impl<T> Visitor<T> for TreeStatsCollector {
    type Error = Infallible;

    fn visit_node(&mut self, path: &[T], node: &Node<T>) -> Result<(), Self::Error> {
        let stats = &mut self.stats;
        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(path.len());
        stats.num_children_dist.record(node.children().len());
        stats.total_node_bytes +=
            mem::size_of::<Node<T>>() + node.children().capacity() * mem::size_of::<Edge<T>>();

        if node.is_terminal() {
            stats.terminal_count += 1;
            stats.total_key_symbols += path.len();
        }
        Ok(())
    }

    fn visit_leaf(&mut self, path: &[T]) -> Result<(), Self::Error> {
        let stats = &mut self.stats;
        stats.leaf_edge_count += 1;
        stats.max_depth = stats.max_depth.max(path.len());
        stats.total_key_symbols += path.len();
        Ok(())
    }
}

/// Collection of stats about the shape of a trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    num_children_dist: ExactHistogram,
    node_count: usize,
    terminal_count: usize,
    leaf_edge_count: usize,
    max_depth: usize,
    total_key_symbols: usize,
    total_node_bytes: usize,
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DisplayAsDebug<'a, T>(&'a T);

        impl<T: fmt::Display> fmt::Debug for DisplayAsDebug<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                <T as fmt::Display>::fmt(self.0, f)
            }
        }

        f.debug_struct("TreeStats")
            .field("key_count", &self.key_count())
            .field("node_count", &self.node_count)
            .field("terminal_count", &self.terminal_count)
            .field("leaf_edge_count", &self.leaf_edge_count)
            .field("max_depth", &self.max_depth)
            .field("total_key_symbols", &self.total_key_symbols)
            .field("total_node_bytes", &self.total_node_bytes)
            .field("num_children", &DisplayAsDebug(&self.num_children_dist))
            .finish()
    }
}

impl TreeStats {
    /// Number of sequences stored in the trie.
    pub fn key_count(&self) -> usize {
        self.terminal_count + self.leaf_edge_count
    }

    /// Number of allocated nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of nodes with the terminal flag set.
    pub fn terminal_count(&self) -> usize {
        self.terminal_count
    }

    /// Number of sequences stored as leaf edges, without a node of their own.
    pub fn leaf_edge_count(&self) -> usize {
        self.leaf_edge_count
    }

    /// The length of the longest path in the trie, counted in edges.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The total length of all stored sequences, in symbols.
    pub fn total_key_symbols(&self) -> usize {
        self.total_key_symbols
    }

    /// The total number of bytes used by nodes and their edge tables.
    pub fn total_node_bytes(&self) -> usize {
        self.total_node_bytes
    }

    /// Returns the number of bytes of overhead per symbol of key stored in the
    /// trie.
    pub fn overhead_per_key_symbol(&self) -> f64 {
        (self.total_node_bytes as f64) / (self.total_key_symbols as f64)
    }

    /// The number of nodes that have exactly `num_children` children.
    pub fn nodes_with_children(&self, num_children: usize) -> u64 {
        self.num_children_dist.count(num_children)
    }
}

/// This represents a discrete distribution over small non-negative values,
/// growing to fit the largest value recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ExactHistogram {
    counts: Vec<u64>,
    total_count: u64,
}

impl fmt::Display for ExactHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();

        let mut zeros: Vec<RangeInclusive<usize>> = vec![];
        for (value, count) in self.entries() {
            if count != 0 {
                map.entry(&value, &count);
                continue;
            }

            match zeros.last_mut() {
                Some(last) if *last.end() + 1 == value => *last = *last.start()..=value,
                _ => zeros.push(value..=value),
            }
        }

        if !zeros.is_empty() {
            map.entry(
                &"zeros",
                &zeros
                    .into_iter()
                    .map(|range| {
                        if range.start() == range.end() {
                            range.start().to_string()
                        } else {
                            format!("{}..={}", range.start(), range.end())
                        }
                    })
                    .collect::<Vec<_>>(),
            );
        }

        map.entry(&"total", &self.total_count);

        map.finish()
    }
}

impl ExactHistogram {
    /// Record a value in the histogram, incrementing its count by 1.
    fn record(&mut self, value: usize) {
        if value >= self.counts.len() {
            self.counts.resize(value + 1, 0);
        }
        self.counts[value] += 1;
        self.total_count += 1;
    }

    /// Return the count recorded for the given value.
    fn count(&self, value: usize) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Iterate over all values up to the largest recorded, with their counts.
    fn entries(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_common::insert_all;

    use super::*;

    #[test]
    fn collect_stats_small_trie() {
        let set = insert_all(["a", "ab", "abc", "b", "ba", "bb"]);
        let stats = TreeStatsCollector::collect(&set);

        // root, "a", "ab", "b"
        assert_eq!(stats.node_count(), 4);
        assert_eq!(stats.terminal_count(), 3);
        assert_eq!(stats.leaf_edge_count(), 3);
        assert_eq!(stats.key_count(), set.len());
        assert_eq!(stats.max_depth(), 3);
        assert_eq!(stats.total_key_symbols(), 1 + 2 + 3 + 1 + 2 + 2);
        assert_eq!(stats.nodes_with_children(1), 2);
        assert_eq!(stats.nodes_with_children(2), 2);
        assert!(stats.total_node_bytes() >= 4 * mem::size_of::<Node<char>>());
    }

    #[test]
    fn collect_stats_empty_trie() {
        let stats = TreeStatsCollector::collect(&TrieSet::<String>::new());
        assert_eq!(stats.key_count(), 0);
        assert_eq!(stats.node_count(), 1);
        assert_eq!(stats.nodes_with_children(0), 1);
        assert_eq!(stats.max_depth(), 0);
    }

    #[test]
    fn exact_histogram_display_collapses_zeros() {
        let mut histogram = ExactHistogram::default();
        for value in [0, 3, 3, 6] {
            histogram.record(value);
        }

        assert_eq!(
            histogram.to_string(),
            r#"{0: 1, 3: 2, 6: 1, "zeros": ["1..=2", "4..=5"], "total": 4}"#
        );
    }
}
