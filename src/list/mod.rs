use std::fmt::{Debug, Formatter};

use tracing::{debug, trace};

use crate::item::Item;
use crate::list::cursor::CursorMut;
use crate::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `SingleList` is a singly-linked list of [`Item`]s with owned nodes.
/// It inserts at the head in constant time. In compromise, accessing or
/// mutating an item at any other position takes *O*(*n*) time.
///
/// The `SingleList` contains:
/// - a link `first` that owns the head node (or nothing if the list is empty);
/// - a length field `len` that always equals the number of reachable nodes.
///
/// Every node owns its item, and dropping a node drops the item according
/// to the item's [`Policy`](crate::Policy).
///
/// # Naming Conventions
///
/// - *link*: an `Option<Box<Node>>`, either `first` or the `next` of a node;
/// - *position* `len`: the terminal (empty) link after the last node.
pub struct SingleList<'a> {
    pub(crate) first: Link<'a>,
    /// the length of the list
    pub(crate) len: usize,
}

pub(crate) type Link<'a> = Option<Box<Node<'a>>>;

pub(crate) struct Node<'a> {
    pub(crate) next: Link<'a>,
    pub(crate) item: Item<'a>,
}

/// What [`SingleList::for_each`] does after visiting an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep the item and move on.
    Next,
    /// Keep the item and stop the traversal.
    Break,
    /// Drop the item and move on.
    Delete,
}

// private methods
impl<'a> SingleList<'a> {
    /// Verify that `len` matches the chain. Enabled by `feature = "strict_assertions"`.
    #[inline]
    pub(crate) fn check_len(&self) {
        #[cfg(feature = "strict_assertions")]
        assert_eq!(
            self.len,
            self.iter().count(),
            "list length does not match its reachable nodes"
        );
    }

    fn node_at(&self, index: usize) -> Option<&Node<'a>> {
        let mut node = self.first.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }
}

impl<'a> SingleList<'a> {
    /// Create an empty `SingleList`.
    ///
    /// # Examples
    /// ```
    /// use blob_list::SingleList;
    /// let list = SingleList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            first: None,
            len: 0,
        }
    }

    /// Returns `true` if the list holds no item.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0 || self.first.is_none()
    }

    /// Returns the number of items in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::new();
    /// list.add(Item::new(*b"a", None));
    /// list.add(Item::new(*b"b", None));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes and drops all items, first to last.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let cleared = self.len;
        let mut link = self.first.take();
        // Unlink one node at a time so that long chains do not drop recursively.
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
        if cleared > 0 {
            debug!(cleared, "list cleared");
        }
    }

    /// Provides a reference to the first item, or `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&Item<'a>> {
        self.first.as_deref().map(|node| &node.item)
    }

    /// Adds an item first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::new();
    /// list.add(Item::new(*b"x", None));
    /// list.add(Item::new(*b"y", None));
    /// assert_eq!(list.get(0), Some(&b"y"[..]));
    /// ```
    pub fn add(&mut self, item: Item<'a>) {
        // O(1) even with `strict_assertions`: no `check_len` here.
        self.cursor_start_mut().insert(item);
    }

    /// Removes the first item and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<Item<'a>> {
        self.cursor_start_mut().remove_current()
    }

    /// Adds an item right *after* the node at `index`.
    ///
    /// If `index` is out of range nothing is inserted and the item is handed
    /// back in `Err`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*index*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// assert!(list.add_index(0, Item::new(*b"c", None)).is_ok());
    /// assert_eq!(list.get(1), Some(&b"c"[..]));
    ///
    /// let rejected = list.add_index(3, Item::new(*b"d", None)).unwrap_err();
    /// assert_eq!(rejected.data(), Some(&b"d"[..]));
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn add_index(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>> {
        let result = match self.cursor_mut(index) {
            Some(mut cursor) => cursor.insert_after(item),
            None => Err(item),
        };
        if result.is_err() {
            trace!(index, len = self.len, "add_index out of range, item not inserted");
        }
        self.check_len();
        result
    }

    /// Returns the data of the item at `index`, or `None` if `index` is out
    /// of range or the item has no data.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*index*) time.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.node_at(index)?.item.data()
    }

    /// Replaces the item at `index` and drops the replaced one.
    ///
    /// If `index` is out of range the list is left untouched and the item is
    /// handed back in `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None)]);
    /// assert!(list.set(0, Item::new(*b"z", None)).is_ok());
    /// assert_eq!(list.get(0), Some(&b"z"[..]));
    /// assert!(list.set(1, Item::new(*b"q", None)).is_err());
    /// ```
    pub fn set(&mut self, index: usize, item: Item<'a>) -> Result<(), Item<'a>> {
        let replaced = match self.cursor_mut(index) {
            Some(mut cursor) => cursor.replace(item),
            None => Err(item),
        };
        match replaced {
            Ok(_old) => Ok(()),
            Err(item) => {
                trace!(index, len = self.len, "set out of range, item not stored");
                Err(item)
            }
        }
    }

    /// Removes and drops the item at `index`. Returns whether anything was
    /// removed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*index*) time.
    pub fn remove_index(&mut self, index: usize) -> bool {
        let removed = self
            .cursor_mut(index)
            .and_then(|mut cursor| cursor.remove_current())
            .is_some();
        if !removed {
            trace!(index, len = self.len, "remove_index out of range");
        }
        self.check_len();
        removed
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is at the terminal position if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, 'a> {
        CursorMut::new(&mut self.first, &mut self.len)
    }

    /// Provides a cursor with editing operations at the node with given index,
    /// or `None` if `at > len`.
    ///
    /// By convention, the cursor is at the terminal position if `at == len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// assert_eq!(list.cursor_mut(1).unwrap().current().unwrap().data(), Some(&b"b"[..]));
    /// assert!(list.cursor_mut(2).unwrap().current().is_none());
    /// assert!(list.cursor_mut(3).is_none());
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Option<CursorMut<'_, 'a>> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_forward(at).ok()?;
        Some(cursor)
    }

    /// Provides a cursor with editing operations at the terminal position,
    /// where [`CursorMut::insert`] appends.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, 'a> {
        let len = self.len;
        let mut cursor = self.cursor_start_mut();
        let reached = cursor.seek_forward(len);
        debug_assert!(reached.is_ok(), "list length exceeds its reachable nodes");
        cursor
    }

    /// Provides a forward iterator over the items.
    #[inline]
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references to the items.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, 'a> {
        IterMut::new(self)
    }
}

impl Debug for SingleList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Default for SingleList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SingleList<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::item::Item;
    use crate::list::SingleList;
    use std::cell::RefCell;
    use std::cmp::Ordering;

    pub(crate) fn compare_i32(a: &[u8], b: &[u8], _size: usize) -> Ordering {
        let a = i32::from_ne_bytes(a.try_into().unwrap());
        let b = i32::from_ne_bytes(b.try_into().unwrap());
        a.cmp(&b)
    }

    pub(crate) fn int_item(value: i32) -> Item<'static> {
        Item::new(value.to_ne_bytes(), Some(compare_i32))
    }

    pub(crate) fn random_item() -> Item<'static> {
        int_item(rand::random::<i32>() % 1000)
    }

    pub(crate) fn int_list(values: &[i32]) -> SingleList<'static> {
        values.iter().copied().map(int_item).collect()
    }

    pub(crate) fn ints(list: &SingleList<'_>) -> Vec<i32> {
        list.iter()
            .map(|item| i32::from_ne_bytes(item.data().unwrap().try_into().unwrap()))
            .collect()
    }

    #[test]
    fn list_create() {
        let mut list = SingleList::new();
        assert!(list.is_empty());
        list.add(int_item(1));
        assert!(!list.is_empty());
        assert_eq!(list.pop_front().unwrap().data(), Some(&1i32.to_ne_bytes()[..]));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        thread_local! {
            static DROPPED: RefCell<Vec<u8>> = RefCell::new(Vec::new());
        }
        let callbacks = crate::Callbacks {
            allocate: |size| vec![0; size].into_boxed_slice(),
            destroy: |data| DROPPED.with(|dropped| dropped.borrow_mut().push(data[0])),
            copy: |dst, src| dst.copy_from_slice(src),
        };
        let mut list = SingleList::new();
        list.add(Item::new_custom(vec![3u8], None, callbacks));
        list.add(Item::new_custom(vec![2u8], None, callbacks));
        list.add(Item::new_custom(vec![1u8], None, callbacks));
        drop(list);
        DROPPED.with(|dropped| assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]));
    }

    #[test]
    fn list_drop_long_chain() {
        let mut list = SingleList::new();
        for _ in 0..200_000 {
            list.add(Item::new(*b"x", None));
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[test_log::test]
    fn list_add_prepends() {
        let mut list = int_list(&[1, 2]);
        let len = list.len();
        list.add(int_item(9));
        assert_eq!(list.len(), len + 1);
        assert_eq!(list.get(0), Some(&9i32.to_ne_bytes()[..]));
        assert_eq!(ints(&list), vec![9, 1, 2]);
    }

    #[test_log::test]
    fn list_add_index_inserts_after() {
        let mut list = SingleList::new();
        list.add(random_item());
        list.add(random_item());
        list.add(random_item());
        assert_eq!(list.len(), 3);

        let item = random_item();
        let expected = item.copy();
        assert!(list.add_index(1, item).is_ok());
        assert_eq!(list.len(), 4);
        assert!(expected.compare(list.get(2)).is_eq());

        let mut list = int_list(&[0, 1, 2]);
        assert!(list.add_index(2, int_item(3)).is_ok());
        assert_eq!(ints(&list), vec![0, 1, 2, 3]);
    }

    #[test_log::test]
    fn list_add_index_out_of_range() {
        let mut list = int_list(&[0, 1, 2]);
        let item = list.add_index(100, int_item(7)).unwrap_err();
        assert_eq!(item.data(), Some(&7i32.to_ne_bytes()[..]));
        assert!(list.add_index(3, int_item(8)).is_err());
        assert_eq!(list.len(), 3);

        let mut empty = SingleList::new();
        assert!(empty.add_index(0, int_item(1)).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn list_get() {
        let list = int_list(&[4, 5]);
        assert_eq!(list.get(1), Some(&5i32.to_ne_bytes()[..]));
        assert_eq!(list.get(2), None);

        let mut list = SingleList::new();
        list.add(Item::sentinel(None));
        assert_eq!(list.get(0), None);
        assert_eq!(list.len(), 1);
    }

    #[test_log::test]
    fn list_set() {
        let mut list = int_list(&[1, 2, 3]);
        assert!(list.set(1, int_item(20)).is_ok());
        assert_eq!(ints(&list), vec![1, 20, 3]);
        assert!(list.set(3, int_item(30)).is_err());
        assert_eq!(ints(&list), vec![1, 20, 3]);
    }

    #[test_log::test]
    fn list_remove_index() {
        let mut list = int_list(&[0, 1, 2, 3]);
        assert!(list.remove_index(0));
        assert_eq!(ints(&list), vec![1, 2, 3]);
        assert!(list.remove_index(2));
        assert_eq!(ints(&list), vec![1, 2]);
        assert!(!list.remove_index(2));
        assert_eq!(list.len(), 2);
    }

    #[test_log::test]
    fn list_clear() {
        let mut list = int_list(&[1, 2, 3]);
        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn list_static_items_borrow() {
        let bytes = [[1u8], [2u8]];
        let mut list = SingleList::new();
        for b in &bytes {
            list.add(Item::new_static(b, None));
        }
        assert_eq!(list.get(0).unwrap().as_ptr(), bytes[1].as_ptr());
        list.clear();
        assert_eq!(bytes, [[1u8], [2u8]]);
    }
}
