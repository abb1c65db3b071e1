//! Module containing the trie-backed collection types.

mod set;
pub use set::*;
