use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::item::Item;
use crate::list::algorithms::sort::merge_sort;
use crate::list::{SingleList, Step};

mod sort;

impl PartialEq for SingleList<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Clone for SingleList<'_> {
    /// Copies every item per its policy, keeping the order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// Value-based queries and bulk operations.
impl<'a> SingleList<'a> {
    /// Returns the index of the first item comparing equal to `data`, or
    /// `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let list = SingleList::from_iter([Item::new(*b"a", None), Item::sentinel(None)]);
    /// assert_eq!(list.index_of(Some(&b"a"[..])), Some(0));
    /// assert_eq!(list.index_of(None), Some(1));
    /// assert_eq!(list.index_of(Some(&b"b"[..])), None);
    /// ```
    pub fn index_of(&self, data: Option<&[u8]>) -> Option<usize> {
        self.iter().position(|item| item.compare(data).is_eq())
    }

    /// Returns `true` if the list has an item comparing equal to `data`.
    pub fn contains(&self, data: Option<&[u8]>) -> bool {
        self.index_of(data).is_some()
    }

    /// Returns `true` as soon as *any* item of `other` is found in the list.
    ///
    /// This is an overlap test, not a subset test: items of `other` missing
    /// from the list do not make it `false`. An empty `other` gives `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let list = SingleList::from_iter([Item::new(*b"a", None)]);
    /// let other = SingleList::from_iter([Item::new(*b"z", None), Item::new(*b"a", None)]);
    /// assert!(list.contains_all(&other));
    /// assert!(!list.contains_all(&SingleList::new()));
    /// ```
    pub fn contains_all(&self, other: &SingleList<'_>) -> bool {
        other.iter().any(|item| self.contains(item.data()))
    }

    /// Removes and drops the first item comparing equal to `data`. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, data: Option<&[u8]>) -> bool {
        let mut cursor = self.cursor_start_mut();
        let mut removed = false;
        while let Some(item) = cursor.current() {
            if item.compare(data).is_eq() {
                removed = cursor.remove_current().is_some();
                break;
            }
            cursor.move_next();
        }
        if !removed {
            trace!("remove found no matching item");
        }
        self.check_len();
        removed
    }

    /// Removes, for each item of `other` in order, the first item of the list
    /// comparing equal to its data. Returns the number of items removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// let other = SingleList::from_iter([Item::new(*b"b", None), Item::new(*b"c", None)]);
    /// assert_eq!(list.remove_all(&other), 1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_all(&mut self, other: &SingleList<'_>) -> usize {
        let removed = other
            .iter()
            .filter(|item| self.remove(item.data()))
            .count();
        debug!(removed, requested = other.len(), "remove_all");
        removed
    }

    /// Adds a copy of every item of `other` first in the list, one by one in
    /// `other`'s order. The copies therefore end up in reverse order.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"x", None)]);
    /// let other = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// list.add_all(&other);
    /// assert_eq!(list.get(0), Some(&b"b"[..]));
    /// assert_eq!(list.get(1), Some(&b"a"[..]));
    /// assert_eq!(list.get(2), Some(&b"x"[..]));
    /// assert_eq!(other.len(), 2);
    /// ```
    pub fn add_all(&mut self, other: &SingleList<'a>) {
        other.iter().for_each(|item| self.add(item.copy()));
        self.check_len();
        debug!(added = other.len(), len = self.len, "add_all");
    }

    /// Adds a copy of every item of `other` right after the node at `index`,
    /// one by one in `other`'s order. The copies therefore end up in reverse
    /// order.
    ///
    /// Returns `false`, and leaves the list untouched, if `index` is out of
    /// range.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"x", None), Item::new(*b"y", None)]);
    /// let other = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// assert!(list.add_all_index(0, &other));
    /// let data: Vec<_> = list.iter().map(|item| item.data().unwrap()[0]).collect();
    /// assert_eq!(data, b"xbay");
    /// assert!(!list.add_all_index(4, &other));
    /// ```
    pub fn add_all_index(&mut self, index: usize, other: &SingleList<'a>) -> bool {
        let added = match self.cursor_mut(index) {
            Some(mut cursor) if cursor.current().is_some() => other
                .iter()
                .try_for_each(|item| cursor.insert_after(item.copy()))
                .is_ok(),
            _ => false,
        };
        if added {
            debug!(index, added = other.len(), len = self.len, "add_all_index");
        } else {
            trace!(index, len = self.len, "add_all_index out of range");
        }
        self.check_len();
        added
    }

    /// Visits every item once, first to last, and lets `f` decide what to do
    /// with it through the returned [`Step`].
    ///
    /// `f` receives the position the item had when the traversal started,
    /// so deleting an item does not shift the indices passed afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList, Step};
    ///
    /// let mut list = SingleList::from_iter((0u8..6).map(|b| Item::new([b], None)));
    /// list.for_each(|index, _item| match index {
    ///     1 | 2 => Step::Delete,
    ///     4 => Step::Break,
    ///     _ => Step::Next,
    /// });
    /// let data: Vec<_> = list.iter().map(|item| item.data().unwrap()[0]).collect();
    /// assert_eq!(data, vec![0, 3, 4, 5]);
    /// ```
    pub fn for_each<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, &mut Item<'a>) -> Step,
    {
        let mut cursor = self.cursor_start_mut();
        let mut visited = 0;
        let mut deleted = 0;
        while let Some(item) = cursor.current_mut() {
            let step = f(visited, item);
            visited += 1;
            match step {
                Step::Next => {
                    cursor.move_next();
                }
                Step::Break => break,
                Step::Delete => {
                    drop(cursor.remove_current());
                    deleted += 1;
                }
            }
        }
        if deleted > 0 {
            trace!(visited, deleted, "for_each deleted items");
        }
        self.check_len();
    }

    /// Sort the list by the comparer of its items (raw bytes for items
    /// without one).
    ///
    /// The list is split by alternating positions, both halves are sorted
    /// recursively, and the halves are merged taking the left item on ties.
    /// Nodes are relinked; no item is moved or copied.
    ///
    /// Items holding different comparers give an unspecified order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([*b"c", *b"a", *b"b"].map(|b| Item::new(b, None)));
    /// list.sort();
    /// let data: Vec<_> = list.iter().map(|item| item.data().unwrap()[0]).collect();
    /// assert_eq!(data, b"abc");
    /// ```
    pub fn sort(&mut self) {
        self.sort_by(|a, b| a.compare(b.data()));
    }

    /// Sort the list with a comparator function over items.
    ///
    /// Same algorithm as [`SingleList::sort`]; the comparator decides instead
    /// of the item comparers.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([*b"a", *b"c", *b"b"].map(|b| Item::new(b, None)));
    /// list.sort_by(|a, b| b.data().cmp(&a.data()));
    /// let data: Vec<_> = list.iter().map(|item| item.data().unwrap()[0]).collect();
    /// assert_eq!(data, b"cba");
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Item<'a>, &Item<'a>) -> Ordering,
    {
        debug!(len = self.len, "sorting list");
        merge_sort(self, |a, b| compare(a, b) != Ordering::Greater);
        self.check_len();
    }
}

#[cfg(test)]
mod tests {
    use crate::item::Item;
    use crate::list::tests::{int_item, int_list, ints, random_item};
    use crate::{SingleList, Step};

    #[test_log::test]
    fn list_contains_and_index_of() {
        let list = int_list(&[4, 8, 15]);
        assert!(list.contains(Some(&8i32.to_ne_bytes()[..])));
        assert!(!list.contains(Some(&16i32.to_ne_bytes()[..])));
        assert_eq!(list.index_of(Some(&15i32.to_ne_bytes()[..])), Some(2));
        assert_eq!(list.index_of(None), None);
        assert_eq!(SingleList::new().index_of(Some(&[0u8][..])), None);
    }

    #[test_log::test]
    fn list_remove() {
        let mut list = int_list(&[1, 2, 3, 2]);
        let two = 2i32.to_ne_bytes();
        assert!(list.remove(Some(&two[..])));
        assert_eq!(list.len(), 3);
        assert_eq!(ints(&list), vec![1, 3, 2]);
        assert!(list.remove(Some(&two[..])));
        assert!(!list.contains(Some(&two[..])));
        assert!(!list.remove(Some(&two[..])));
        assert_eq!(list.len(), 2);

        assert!(list.remove(Some(&1i32.to_ne_bytes()[..])));
        assert_eq!(ints(&list), vec![3]);
    }

    #[test_log::test]
    fn list_remove_sentinel() {
        let mut list = int_list(&[1, 2]);
        assert!(list.add_index(0, Item::sentinel(None)).is_ok());
        assert!(list.contains(None));
        assert!(list.remove(None));
        assert!(!list.contains(None));
        assert_eq!(ints(&list), vec![1, 2]);

        list.add(Item::static_sentinel(None));
        assert_eq!(list.index_of(None), Some(0));
        assert!(list.remove(None));
        assert_eq!(ints(&list), vec![1, 2]);
    }

    #[test_log::test]
    fn list_remove_all() {
        let mut list = SingleList::new();
        list.add(random_item());
        list.add(random_item());
        list.add(random_item());

        let mut other = SingleList::new();
        let first = random_item();
        let second = random_item();
        other.add(first.copy());
        other.add(second.copy());
        list.add(first);
        list.add(second);
        assert_eq!(list.len(), 5);

        assert_eq!(list.remove_all(&other), 2);
        assert_eq!(list.len(), 3);
        assert_eq!(other.len(), 2);
        assert_eq!(list.remove_all(&SingleList::new()), 0);
    }

    #[test_log::test]
    fn list_contains_all_is_overlap() {
        let list = int_list(&[1, 2, 3]);
        assert!(list.contains_all(&int_list(&[9, 2])));
        assert!(list.contains_all(&int_list(&[3, 2, 1])));
        assert!(!list.contains_all(&int_list(&[7, 8])));
        assert!(!list.contains_all(&SingleList::new()));
    }

    #[test_log::test]
    fn list_add_all_prepends_copies() {
        let mut list = int_list(&[7]);
        let other = int_list(&[1, 2, 3]);
        list.add_all(&other);
        assert_eq!(ints(&list), vec![3, 2, 1, 7]);
        assert_eq!(ints(&other), vec![1, 2, 3]);
        assert_ne!(
            list.get(0).unwrap().as_ptr(),
            other.get(2).unwrap().as_ptr()
        );
    }

    #[test_log::test]
    fn list_add_all_index() {
        let mut list = int_list(&[10, 20, 30]);
        let other = int_list(&[1, 2]);
        assert!(list.add_all_index(1, &other));
        assert_eq!(ints(&list), vec![10, 20, 2, 1, 30]);
        assert!(list.contains(other.get(0)));

        assert!(!list.add_all_index(100, &other));
        assert!(!list.add_all_index(5, &other));
        assert_eq!(list.len(), 5);
    }

    #[test_log::test]
    fn list_for_each_steps() {
        let mut list = int_list(&[0, 1, 2, 3, 4, 5]);
        let mut seen = Vec::new();
        list.for_each(|index, _| {
            seen.push(index);
            if index % 2 == 0 {
                Step::Delete
            } else {
                Step::Next
            }
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(ints(&list), vec![1, 3, 5]);
        assert_eq!(list.len(), 3);

        let mut visits = 0;
        list.for_each(|_, item| {
            visits += 1;
            *item = int_item(42);
            Step::Break
        });
        assert_eq!(visits, 1);
        assert_eq!(ints(&list), vec![42, 3, 5]);

        list.for_each(|_, _| Step::Delete);
        assert!(list.is_empty());
    }

    #[test_log::test]
    fn list_sort() {
        let mut list = int_list(&[5, 7, 10, 3, 20, 4, 18, -1]);
        list.sort();
        assert_eq!(ints(&list), vec![-1, 3, 4, 5, 7, 10, 18, 20]);
        assert_eq!(list.len(), 8);

        list.sort();
        assert_eq!(ints(&list), vec![-1, 3, 4, 5, 7, 10, 18, 20]);

        let mut empty = SingleList::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = int_list(&[1]);
        single.sort();
        assert_eq!(ints(&single), vec![1]);
    }

    #[test]
    fn list_sort_random() {
        let values: Vec<i32> = (0..1000).map(|_| rand::random::<i32>() % 1000).collect();
        let mut list = int_list(&values);
        list.sort();
        let mut expected = values.clone();
        expected.sort();
        assert_eq!(ints(&list), expected);
    }

    #[test]
    fn list_sort_relinks_nodes() {
        let mut list = int_list(&[2, 1]);
        let data_ptr = list.get(0).unwrap().as_ptr();
        list.sort();
        assert_eq!(list.get(1).unwrap().as_ptr(), data_ptr);
    }

    #[test]
    fn list_sort_by() {
        let mut list = int_list(&[3, 1, 2]);
        list.sort_by(|a, b| b.compare(a.data()));
        assert_eq!(ints(&list), vec![3, 2, 1]);
    }

    #[test]
    fn list_clone_and_eq() {
        let list = int_list(&[1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(cloned, list);
        assert_ne!(cloned.get(0).unwrap().as_ptr(), list.get(0).unwrap().as_ptr());
        assert_ne!(int_list(&[1, 2]), list);
    }

    #[test]
    fn list_eq_is_symmetric() {
        let short = SingleList::from_iter([Item::new(*b"abc", None)]);
        let long = SingleList::from_iter([Item::new(*b"abcdef", None)]);
        assert_ne!(short, long);
        assert_ne!(long, short);
        assert_eq!(short, short.clone());
    }
}
