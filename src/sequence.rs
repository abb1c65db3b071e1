//! The [`Sequence`] trait and its implementations for the standard library
//! types that make sense as trie keys.

use std::{
    collections::{vec_deque, VecDeque},
    iter::Cloned,
    slice,
    str::Chars,
};

/// Any type implementing `Sequence` can be decomposed into an ordered run of
/// symbols and rebuilt one symbol at a time.
///
/// The primary purpose of this trait is to allow different types to be used as
/// keys in the [`crate::TrieSet`] type. The trie stores one edge per symbol,
/// and cursors rebuild the key of the current position by pushing and popping
/// symbols while they walk the tree.
///
/// The ordering of the trie is the lexicographic ordering of the symbol
/// sequence. For the provided implementations that ordering agrees with the
/// type's own [`Ord`] implementation.
pub trait Sequence: Default + Clone {
    /// The element type of the sequence.
    type Symbol: Ord + Clone;

    /// Iterator over the symbols of the sequence, front to back.
    type Symbols<'a>: Iterator<Item = Self::Symbol>
    where
        Self: 'a;

    /// Return an iterator over all symbols in order.
    fn symbols(&self) -> Self::Symbols<'_>;

    /// Append a symbol to the back of the sequence.
    fn push_symbol(&mut self, symbol: Self::Symbol);

    /// Remove the last symbol, if any.
    fn pop_symbol(&mut self) -> Option<Self::Symbol>;
}

impl Sequence for String {
    type Symbol = char;
    type Symbols<'a> = Chars<'a>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }

    fn push_symbol(&mut self, symbol: Self::Symbol) {
        self.push(symbol);
    }

    fn pop_symbol(&mut self) -> Option<Self::Symbol> {
        self.pop()
    }
}

impl<T: Ord + Clone> Sequence for Vec<T> {
    type Symbol = T;
    type Symbols<'a>
        = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().cloned()
    }

    fn push_symbol(&mut self, symbol: Self::Symbol) {
        self.push(symbol);
    }

    fn pop_symbol(&mut self) -> Option<Self::Symbol> {
        self.pop()
    }
}

impl<T: Ord + Clone> Sequence for VecDeque<T> {
    type Symbol = T;
    type Symbols<'a>
        = Cloned<vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().cloned()
    }

    fn push_symbol(&mut self, symbol: Self::Symbol) {
        self.push_back(symbol);
    }

    fn pop_symbol(&mut self) -> Option<Self::Symbol> {
        self.pop_back()
    }
}
