pub mod clone;
pub mod erase;
pub mod find;
pub mod insert;
pub mod iter;
