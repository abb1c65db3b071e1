use std::iter::FusedIterator;

use crate::{Cursor, Sequence, TrieSet};

/// An iterator over the sequences of a `TrieSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on `TrieSet`. See its
/// documentation for more.
///
/// The iterator is a pair of cursors walking towards each other, so it yields
/// owned copies of the sequences.
///
/// [`iter`]: TrieSet::iter
pub struct Iter<'a, S: Sequence> {
    front: Cursor<'a, S>,
    back: Cursor<'a, S>,
}

impl<'a, S: Sequence> Iter<'a, S> {
    pub(crate) fn new(set: &'a TrieSet<S>) -> Self {
        Iter {
            front: set.begin(),
            back: set.end(),
        }
    }
}

impl<S: Sequence> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<S: Sequence + std::fmt::Debug> std::fmt::Debug for Iter<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Iter")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish()
    }
}

impl<S: Sequence> Iterator for Iter<'_, S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let key = self.front.key().cloned();
        self.front.move_next();
        key
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<S: Sequence> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // The range is not empty, so there is a sequence before `back`
        self.back.move_prev();
        self.back.key().cloned()
    }
}

impl<S: Sequence> FusedIterator for Iter<'_, S> {}

/// An owning iterator over the sequences of a `TrieSet`.
///
/// This `struct` is created by the [`into_iter`] method on `TrieSet`
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Debug)]
pub struct IntoIter<S: Sequence> {
    set: TrieSet<S>,
    size: usize,
}

impl<S: Sequence> IntoIter<S> {
    pub(crate) fn new(set: TrieSet<S>) -> Self {
        let size = set.len();
        IntoIter { set, size }
    }
}

impl<S: Sequence> Iterator for IntoIter<S> {
    type Item = S;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.set.pop_first()?;
        self.size -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<S: Sequence> DoubleEndedIterator for IntoIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.set.pop_last()?;
        self.size -= 1;
        Some(key)
    }
}

impl<S: Sequence> ExactSizeIterator for IntoIter<S> {
    fn len(&self) -> usize {
        self.size
    }
}

impl<S: Sequence> FusedIterator for IntoIter<S> {}

#[cfg(test)]
mod tests {
    use crate::tests_common::insert_all;

    use super::*;

    #[test]
    fn iter_meets_in_the_middle() {
        let set = insert_all(["a", "ab", "b", "c"]);
        let mut iter = set.iter();

        assert_eq!(iter.next().unwrap(), "a");
        assert_eq!(iter.next_back().unwrap(), "c");
        assert_eq!(iter.next_back().unwrap(), "b");
        assert_eq!(iter.next().unwrap(), "ab");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_empty_set() {
        let set = TrieSet::<String>::new();
        assert_eq!(set.iter().next(), None);
        assert_eq!(set.iter().next_back(), None);
    }

    #[test]
    fn into_iter_both_ends() {
        let set = insert_all(["", "x", "xy", "y"]);
        let mut iter = set.into_iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back().unwrap(), "y");
        assert_eq!(iter.next().unwrap(), "");
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.collect::<Vec<_>>(), ["x", "xy"]);
    }
}
