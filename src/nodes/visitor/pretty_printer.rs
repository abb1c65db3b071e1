use std::{
    fmt::{self, Display},
    io::{self, Write},
};

use crate::{
    nodes::{
        visitor::{walk, Visitor},
        Node,
    },
    Sequence, TrieSet,
};

/// A visitor of the trie that will print the trie in "dot" notation.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
///
/// Every node is drawn as a box labelled with its own terminal marker, and
/// every edge is labelled with its symbol. Leaf edges end in a point, since no
/// node is allocated for them.
pub struct DotPrinter<O: Write> {
    output: O,
    next_id: usize,
    /// Ids of the nodes on the path from the root to the last visited node.
    ancestors: Vec<usize>,
}

impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given set to the given output.
    pub fn print_tree<S>(output: O, set: &TrieSet<S>) -> io::Result<()>
    where
        S: Sequence,
        S::Symbol: Display,
    {
        Self::print_node(output, set.root())
    }

    /// Write the dot-format of the trie rooted at the given node to the given
    /// output.
    pub fn print_node<T: Display + Clone>(output: O, root: &Node<T>) -> io::Result<()> {
        let mut visitor = DotPrinter {
            output,
            next_id: 0,
            ancestors: Vec::new(),
        };

        visitor.output_prelude()?;
        walk(root, &mut visitor)?;
        visitor.output_epilogue()
    }

    fn output_prelude(&mut self) -> io::Result<()> {
        writeln!(self.output, "strict digraph G {{")?;
        writeln!(self.output, "node [shape=box]")
    }

    fn output_epilogue(&mut self) -> io::Result<()> {
        writeln!(self.output, "}}")
    }

    fn get_id(&mut self) -> usize {
        let new_id = self.next_id;
        self.next_id += 1;
        new_id
    }

    /// Write the edge from the parent of a node at `depth` to `child_id`.
    fn write_edge<T: Display>(
        &mut self,
        depth: usize,
        symbol: &T,
        child_id: usize,
    ) -> io::Result<()> {
        self.ancestors.truncate(depth);
        let parent_id = *self
            .ancestors
            .last()
            .expect("every node below the root has a parent");
        writeln!(
            self.output,
            "n{parent_id} -> n{child_id} [label=\"{}\"]",
            escape_label(symbol)
        )
    }
}

/// Escape the quote and backslash characters in the display form of `value`,
/// so it can be written inside a quoted dot label.
fn escape_label<T: Display>(value: &T) -> String {
    let raw = value.to_string();

    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl<T: Display, O: Write> Visitor<T> for DotPrinter<O> {
    type Error = io::Error;

    fn visit_node(&mut self, path: &[T], node: &Node<T>) -> Result<(), Self::Error> {
        let node_id = self.get_id();
        let label = if node.is_terminal() { "terminal" } else { "" };
        writeln!(self.output, "n{node_id} [label=\"{label}\"]")?;

        if let Some(symbol) = path.last() {
            self.write_edge(path.len(), symbol, node_id)?;
        }
        self.ancestors.push(node_id);
        Ok(())
    }

    fn visit_leaf(&mut self, path: &[T]) -> Result<(), Self::Error> {
        let leaf_id = self.get_id();
        writeln!(self.output, "n{leaf_id} [shape=point]")?;

        let symbol = path.last().expect("leaf edge path ends with its symbol");
        self.write_edge(path.len(), symbol, leaf_id)
    }
}

impl<O: Write> fmt::Debug for DotPrinter<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotPrinter")
            .field("next_id", &self.next_id)
            .field("ancestors", &self.ancestors)
            .finish_non_exhaustive()
    }
}
