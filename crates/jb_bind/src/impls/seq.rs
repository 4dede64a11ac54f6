use alloc::collections::{BTreeSet, LinkedList, VecDeque};
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use indexmap::IndexSet;

use crate::{Sequence, impl_json_sequence};

// -----------------------------------------------------------------------------
// Positional sequences

impl<T> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        self.insert(0, item);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        self.push_front(item);
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.push_back(item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        self.push_front(item);
    }
}

impl_json_sequence!(impl<T> Vec<T>);
impl_json_sequence!(impl<T> VecDeque<T>);
impl_json_sequence!(impl<T> LinkedList<T>);

// -----------------------------------------------------------------------------
// Sets
//
// Sets decide element position themselves, so prepending appends. `IndexSet`
// is the exception and keeps insertion order.

impl<T: Ord> Sequence for BTreeSet<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Sequence for HashSet<T, S> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Eq + Hash, S: BuildHasher> Sequence for IndexSet<T, S> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.insert(item);
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        self.shift_insert(0, item);
    }
}

impl_json_sequence!(impl<T> BTreeSet<T>);
impl_json_sequence!(impl<T, S> HashSet<T, S>);
impl_json_sequence!(impl<T, S> IndexSet<T, S>);

#[cfg(feature = "hashbrown")]
impl<T: Eq + Hash, S: BuildHasher> Sequence for hashbrown::HashSet<T, S> {
    type Item = T;

    #[inline]
    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn append(&mut self, item: T) {
        self.insert(item);
    }
}

#[cfg(feature = "hashbrown")]
impl_json_sequence!(impl<T, S> hashbrown::HashSet<T, S>);
