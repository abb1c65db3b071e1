#![forbid(unsafe_code)]
#![deny(
    missing_docs,
    deprecated_in_future,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    rustdoc::invalid_codeblock_attributes
)]
#![doc(
    html_playground_url = "https://play.rust-lang.org/",
    test(attr(deny(warnings)))
)]

//! Ordered set of sequences stored in a sparse trie
//!
//! [`TrieSet`] stores sequences (strings, byte vectors, any type implementing
//! [`Sequence`]) one symbol per edge, and exposes the interface of an ordered
//! container: deduplicated iteration in lexicographic order, lookup and
//! insertion in time proportional to the key length, bidirectional cursors,
//! lower and upper bounds, and deletion that prunes dead branches.
//!
//! A sequence with no stored extension is kept as a leaf edge on its parent,
//! without a node of its own. The edge is promoted to a node only when a longer
//! sequence sharing the prefix is inserted, and reverts to a leaf edge when
//! that sequence is removed.
//!
//! No operation recurses over the trie, so arbitrarily long keys are limited
//! only by the heap.
//!
//! # Examples
//!
//! ```rust
//! use sparse_trie::TrieSet;
//!
//! let mut set = TrieSet::new();
//! set.insert(String::from("band"));
//! set.insert(String::from("ban"));
//! set.insert(String::from("apple"));
//!
//! assert_eq!(set.iter().collect::<Vec<_>>(), ["apple", "ban", "band"]);
//!
//! let mut cursor = set.find(&String::from("ban"));
//! cursor.move_prev();
//! assert_eq!(cursor.key().unwrap(), "apple");
//! ```

mod collections;
mod nodes;
mod sequence;

#[doc(hidden)]
pub mod tests_common;

pub use collections::*;
pub use nodes::{visitor, Child, ChildTable, Cursor, Edge, Location, Node, Position};
pub use sequence::*;
