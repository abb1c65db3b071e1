//! Trie node representation and manipulation

mod cursor;
mod operations;
mod representation;

pub mod visitor;

pub use cursor::*;
pub(crate) use operations::*;
pub use representation::*;
