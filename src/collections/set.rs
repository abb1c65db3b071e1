//! Module containing implementations of the `TrieSet` and associated
//! iterators.

use std::{
    fmt::Debug,
    hash::{Hash, Hasher},
    mem,
};

use crate::{
    nodes::{
        self, count_keys, search_for_delete_point, seek, Cursor, DeletePoint, InsertResult, Node,
        Position, SeekBound,
    },
    Sequence,
};

mod iterators;
pub use iterators::*;

/// An ordered set of sequences based on a trie.
///
/// Each stored sequence is spelled by the symbols along a path from the root.
/// A sequence with no stored extension is encoded as a leaf edge, without a
/// node of its own.
///
/// Positions in the set are expressed with a [`Cursor`], which borrows the
/// set, or with a detached [`Position`], which is what the mutating operations
/// accept and return.
pub struct TrieSet<S: Sequence> {
    root: Node<S::Symbol>,
}

impl<S: Sequence> TrieSet<S> {
    /// Create a new, empty [`TrieSet`].
    ///
    /// This function will not pre-allocate anything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let set = TrieSet::<String>::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.len(), 0);
    /// ```
    pub const fn new() -> Self {
        TrieSet { root: Node::new() }
    }

    #[cfg(test)]
    pub(crate) fn from_root(root: Node<S::Symbol>) -> Self {
        TrieSet { root }
    }

    pub(crate) fn root(&self) -> &Node<S::Symbol> {
        &self.root
    }

    #[cfg(test)]
    pub(crate) fn root_mut(&mut self) -> &mut Node<S::Symbol> {
        &mut self.root
    }

    /// Insert a sequence into the set.
    ///
    /// Returns a cursor positioned at the sequence, and true if the sequence
    /// was not already present. Inserting a sequence that is already present
    /// changes nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set = TrieSet::new();
    ///
    /// let (cursor, inserted) = set.insert(String::from("abc"));
    /// assert!(inserted);
    /// assert_eq!(cursor.key().unwrap(), "abc");
    ///
    /// let (_, inserted) = set.insert(String::from("abc"));
    /// assert!(!inserted);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: S) -> (Cursor<'_, S>, bool) {
        let InsertResult {
            path,
            at_terminal,
            inserted,
        } = nodes::insert(&mut self.root, &key);

        (Cursor::attach(&self.root, &path, at_terminal), inserted)
    }

    /// Remove the sequence at the given position.
    ///
    /// Returns the position of the sequence that followed the removed one, or
    /// the end position if it was the last. Erasing at the end position does
    /// nothing and returns the end position.
    ///
    /// Every other position taken from this set before the call may no longer
    /// be valid afterwards. A position that no longer matches the trie is
    /// treated as the end position, but a position that happens to match a
    /// different stored sequence will erase that sequence instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set = TrieSet::from([String::from("a"), String::from("b")]);
    ///
    /// let first = set.begin().position();
    /// let next = set.erase_at(first);
    /// assert_eq!(next.key().unwrap(), "b");
    /// assert_eq!(set.len(), 1);
    ///
    /// let next = set.erase_at(next);
    /// assert!(next.is_end());
    /// assert!(set.is_empty());
    /// ```
    pub fn erase_at(&mut self, position: Position<S>) -> Position<S> {
        let cursor = self.cursor_at(&position);
        let Some(delete_point) = search_for_delete_point(&cursor) else {
            return Position::end();
        };

        // The delete restructures the path, so the successor is found again by
        // key afterwards.
        let mut successor = cursor;
        successor.move_next();
        let successor = successor.into_key();

        self.apply_delete_point(delete_point);

        match successor {
            Some(key) => self.find(&key).position(),
            None => Position::end(),
        }
    }

    /// Remove the given sequence from the set, returning the number of
    /// sequences removed (0 or 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set = TrieSet::from([vec![1u8, 2], vec![1]]);
    ///
    /// assert_eq!(set.erase(&vec![1, 2]), 1);
    /// assert_eq!(set.erase(&vec![1, 2]), 0);
    /// assert!(set.contains(&vec![1]));
    /// ```
    pub fn erase(&mut self, key: &S) -> usize {
        let cursor = nodes::find(&self.root, key);
        let Some(delete_point) = search_for_delete_point(&cursor) else {
            return 0;
        };

        usize::from(delete_point.apply(&mut self.root))
    }

    /// Remove the given sequence from the set, returning true if it was
    /// present.
    pub fn remove(&mut self, key: &S) -> bool {
        self.erase(key) == 1
    }

    /// Remove every sequence from `first` up to, but not including, `last`.
    ///
    /// Returns the position of `last` after the removal. `first` must not be
    /// after `last`. If it is, every sequence from `first` to the end of the
    /// set is removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set: TrieSet<String> = ["a", "b", "c", "d"].into_iter().map(String::from).collect();
    ///
    /// let first = set.find(&String::from("b")).position();
    /// let last = set.find(&String::from("d")).position();
    /// let next = set.erase_range(first, last);
    ///
    /// assert_eq!(next.key().unwrap(), "d");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "d"]);
    /// ```
    pub fn erase_range(&mut self, first: Position<S>, last: Position<S>) -> Position<S> {
        // Positions are invalidated by every erase, so the end of the range is
        // tracked by key.
        let stop = last.key().cloned();
        let mut current = first;

        loop {
            let reached_stop = match (current.key(), &stop) {
                (None, _) => true,
                (Some(key), Some(stop)) => key.symbols().eq(stop.symbols()),
                (Some(_), None) => false,
            };
            if reached_stop {
                return current;
            }

            current = self.erase_at(current);
        }
    }

    /// Remove every sequence from the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set = TrieSet::from([String::from("a"), String::new()]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Return a cursor positioned at the given sequence, or at the end if it
    /// is not stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let set = TrieSet::from([String::from("ab"), String::from("ac")]);
    ///
    /// assert_eq!(set.find(&String::from("ab")).key().unwrap(), "ab");
    /// assert_eq!(set.find(&String::from("a")), set.end());
    /// ```
    pub fn find(&self, key: &S) -> Cursor<'_, S> {
        nodes::find(&self.root, key)
    }

    /// Return the number of times the sequence is stored (0 or 1).
    pub fn count(&self, key: &S) -> usize {
        usize::from(self.contains(key))
    }

    /// Returns true if the set contains the given sequence.
    pub fn contains(&self, key: &S) -> bool {
        nodes::contains(&self.root, key)
    }

    /// Return a cursor at the first sequence that is not less than `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let set = TrieSet::from([String::from("apple"), String::from("banana")]);
    ///
    /// assert_eq!(set.lower_bound(&String::from("apple")).key().unwrap(), "apple");
    /// assert_eq!(set.lower_bound(&String::from("b")).key().unwrap(), "banana");
    /// assert!(set.lower_bound(&String::from("c")).is_end());
    /// ```
    pub fn lower_bound(&self, key: &S) -> Cursor<'_, S> {
        seek(&self.root, key, SeekBound::Inclusive)
    }

    /// Return a cursor at the first sequence that is greater than `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let set = TrieSet::from([String::from("apple"), String::from("banana")]);
    ///
    /// assert_eq!(set.upper_bound(&String::from("apple")).key().unwrap(), "banana");
    /// assert!(set.upper_bound(&String::from("banana")).is_end());
    /// ```
    pub fn upper_bound(&self, key: &S) -> Cursor<'_, S> {
        seek(&self.root, key, SeekBound::Exclusive)
    }

    /// Return the range of positions holding `key`, as a pair of
    /// [`TrieSet::lower_bound`] and [`TrieSet::upper_bound`]. The range is
    /// empty if the sequence is not stored.
    pub fn equal_range(&self, key: &S) -> (Cursor<'_, S>, Cursor<'_, S>) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Returns true if the set contains no sequences.
    pub fn is_empty(&self) -> bool {
        self.root.is_vacant()
    }

    /// Returns the number of sequences in the set.
    ///
    /// The length is not cached: every call walks the whole trie.
    pub fn len(&self) -> usize {
        count_keys(&self.root)
    }

    /// The maximum number of sequences the set could hold.
    pub const fn max_size(&self) -> usize {
        usize::MAX
    }

    /// Return a cursor at the smallest sequence, or at the end if the set is
    /// empty.
    pub fn begin(&self) -> Cursor<'_, S> {
        Cursor::first(&self.root)
    }

    /// Return a cursor at the end sentinel, one past the largest sequence.
    pub fn end(&self) -> Cursor<'_, S> {
        Cursor::end(&self.root)
    }

    /// Re-attach a detached [`Position`] to this set.
    ///
    /// If the position does not describe a stored sequence in this set, the
    /// end cursor is returned.
    pub fn cursor_at(&self, position: &Position<S>) -> Cursor<'_, S> {
        if position.is_end() {
            return self.end();
        }

        Cursor::attach(&self.root, &position.path, position.at_terminal)
    }

    /// Gets an iterator over the sequences of the set, in sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let set = TrieSet::from([String::from("b"), String::from("a"), String::from("ab")]);
    ///
    /// assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "ab", "b"]);
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), ["b", "ab", "a"]);
    /// ```
    pub fn iter(&self) -> Iter<'_, S> {
        Iter::new(self)
    }

    /// Exchange the contents of two sets.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
    }

    /// Returns the smallest sequence in the set.
    ///
    /// If the set is empty, returns None.
    pub fn first(&self) -> Option<S> {
        self.begin().into_key()
    }

    /// Returns the largest sequence in the set.
    ///
    /// If the set is empty, returns None.
    pub fn last(&self) -> Option<S> {
        let mut cursor = self.end();
        cursor.move_prev();
        cursor.into_key()
    }

    /// Removes and returns the smallest sequence in the set.
    ///
    /// If the set is empty, returns None.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set = TrieSet::from([String::from("b"), String::from("a")]);
    ///
    /// assert_eq!(set.pop_first().unwrap(), "a");
    /// assert_eq!(set.pop_first().unwrap(), "b");
    /// assert_eq!(set.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<S> {
        let cursor = self.begin();
        let delete_point = search_for_delete_point(&cursor)?;
        let key = cursor.into_key()?;

        self.apply_delete_point(delete_point);
        Some(key)
    }

    /// Removes and returns the largest sequence in the set.
    ///
    /// If the set is empty, returns None.
    pub fn pop_last(&mut self) -> Option<S> {
        let mut cursor = self.end();
        cursor.move_prev();
        let delete_point = search_for_delete_point(&cursor)?;
        let key = cursor.into_key()?;

        self.apply_delete_point(delete_point);
        Some(key)
    }

    fn apply_delete_point(&mut self, delete_point: DeletePoint) {
        let applied = delete_point.apply(&mut self.root);
        debug_assert!(applied, "delete point was taken from this trie");
    }

    /// Retains only the sequences specified by the predicate.
    ///
    /// In other words, remove all sequences `s` for which `f(&s)` returns
    /// `false`. The sequences are visited in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_trie::TrieSet;
    ///
    /// let mut set: TrieSet<Vec<u8>> = (0..8u8).map(|x| vec![x; x as usize]).collect();
    /// // Keep only the even-length sequences.
    /// set.retain(|s| s.len() % 2 == 0);
    /// assert_eq!(set.len(), 4);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&S) -> bool,
    {
        let mut position = self.begin().position();
        while let Some(key) = position.key() {
            position = if f(key) {
                let mut cursor = self.cursor_at(&position);
                cursor.move_next();
                cursor.position()
            } else {
                self.erase_at(position)
            };
        }
    }
}

impl<S: Sequence> Clone for TrieSet<S> {
    fn clone(&self) -> Self {
        TrieSet {
            root: nodes::clone_tree(&self.root),
        }
    }
}

impl<S: Sequence + Debug> Debug for TrieSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<S: Sequence> Default for TrieSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: Sequence + 'a> Extend<&'a S> for TrieSet<S> {
    fn extend<T: IntoIterator<Item = &'a S>>(&mut self, iter: T) {
        for key in iter {
            let _ = self.insert(key.clone());
        }
    }
}

impl<S: Sequence> Extend<S> for TrieSet<S> {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for key in iter {
            let _ = self.insert(key);
        }
    }
}

impl<S: Sequence, const N: usize> From<[S; N]> for TrieSet<S> {
    fn from(arr: [S; N]) -> Self {
        let mut set = TrieSet::new();
        set.extend(arr);
        set
    }
}

impl<S: Sequence> From<Vec<S>> for TrieSet<S> {
    fn from(arr: Vec<S>) -> Self {
        let mut set = TrieSet::new();
        set.extend(arr);
        set
    }
}

impl<S: Sequence> FromIterator<S> for TrieSet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = TrieSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Sequence + Hash> Hash for TrieSet<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for key in self {
            key.hash(state);
        }
    }
}

impl<'a, S: Sequence> IntoIterator for &'a TrieSet<S> {
    type IntoIter = Iter<'a, S>;
    type Item = S;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Sequence> IntoIterator for TrieSet<S> {
    type IntoIter = IntoIter<S>;
    type Item = S;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<S: Sequence + Ord> Ord for TrieSet<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<S: Sequence + PartialOrd> PartialOrd for TrieSet<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<S: Sequence + Eq> Eq for TrieSet<S> {}

impl<S: Sequence + PartialEq> PartialEq for TrieSet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}
