//! Trie node lookup and manipulation
//!
//! Every operation in this module walks the trie with an explicit loop or
//! stack, never with recursion, so the depth of a stored sequence is bounded
//! only by the heap.

mod clone;
pub use clone::*;

mod count;
pub use count::*;

mod delete;
pub use delete::*;

mod insert;
pub use insert::*;

mod lookup;
pub use lookup::*;
