//! The capability set every item list provides.

use crate::item::Item;
use crate::list::{SingleList, Step};

/// Operations shared by item list implementations.
///
/// Destroying a list is dropping it: every remaining item is released
/// according to its [`Policy`](crate::Policy).
///
/// Positional operations use *insert-after* semantics: `add_index(i, item)`
/// places `item` right after the item at position `i`.
pub trait ItemList<'a> {
    /// Create an empty list.
    fn new() -> Self;

    /// Add an item first in the list.
    fn add(&mut self, item: Item<'a>);

    /// Add a copy of every item of `other` first in the list, which reverses
    /// their order.
    fn add_all(&mut self, other: &Self);

    /// Add an item right after position `index`, or hand it back if `index`
    /// is out of range.
    fn add_index(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>>;

    /// Add a copy of every item of `other` right after position `index`.
    /// Returns `false` if `index` is out of range.
    fn add_all_index(&mut self, index: usize, other: &Self) -> bool;

    fn clear(&mut self);

    fn contains(&self, data: Option<&[u8]>) -> bool;

    /// Returns `true` if any item of `other` is in the list.
    fn contains_all(&self, other: &Self) -> bool;

    fn get(&self, index: usize) -> Option<&[u8]>;

    fn remove(&mut self, data: Option<&[u8]>) -> bool;

    fn remove_index(&mut self, index: usize) -> bool;

    /// Remove one matching item per item of `other`, returning how many were
    /// removed.
    fn remove_all(&mut self, other: &Self) -> usize;

    fn index_of(&self, data: Option<&[u8]>) -> Option<usize>;

    /// Replace the item at `index`, or hand it back if `index` is out of
    /// range.
    fn set(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn sort(&mut self);

    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(usize, &mut Item<'a>) -> Step;
}

impl<'a> ItemList<'a> for SingleList<'a> {
    fn new() -> Self {
        SingleList::new()
    }

    fn add(&mut self, item: Item<'a>) {
        SingleList::add(self, item)
    }

    fn add_all(&mut self, other: &Self) {
        SingleList::add_all(self, other)
    }

    fn add_index(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>> {
        SingleList::add_index(self, index, item)
    }

    fn add_all_index(&mut self, index: usize, other: &Self) -> bool {
        SingleList::add_all_index(self, index, other)
    }

    fn clear(&mut self) {
        SingleList::clear(self)
    }

    fn contains(&self, data: Option<&[u8]>) -> bool {
        SingleList::contains(self, data)
    }

    fn contains_all(&self, other: &Self) -> bool {
        SingleList::contains_all(self, other)
    }

    fn get(&self, index: usize) -> Option<&[u8]> {
        SingleList::get(self, index)
    }

    fn remove(&mut self, data: Option<&[u8]>) -> bool {
        SingleList::remove(self, data)
    }

    fn remove_index(&mut self, index: usize) -> bool {
        SingleList::remove_index(self, index)
    }

    fn remove_all(&mut self, other: &Self) -> usize {
        SingleList::remove_all(self, other)
    }

    fn index_of(&self, data: Option<&[u8]>) -> Option<usize> {
        SingleList::index_of(self, data)
    }

    fn set(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>> {
        SingleList::set(self, index, item)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        SingleList::is_empty(self)
    }

    fn sort(&mut self) {
        SingleList::sort(self)
    }

    fn for_each<F>(&mut self, f: F)
    where
        F: FnMut(usize, &mut Item<'a>) -> Step,
    {
        SingleList::for_each(self, f)
    }
}
