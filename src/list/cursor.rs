use std::fmt::{self, Debug, Formatter};

use crate::item::Item;
use crate::list::{Link, Node};

/// A cursor over a [`SingleList`](crate::SingleList) with editing operations.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the terminal position
/// after the last node. The cursor only moves forward.
///
/// The cursor holds the link that owns the current node, so removing or
/// inserting at the cursor never needs to look back for a predecessor.
pub struct CursorMut<'l, 'a> {
    // Always `Some` between calls; taken out while the cursor moves.
    link: Option<&'l mut Link<'a>>,
    len: &'l mut usize,
    index: usize,
}

impl<'l, 'a> CursorMut<'l, 'a> {
    pub(crate) fn new(link: &'l mut Link<'a>, len: &'l mut usize) -> Self {
        Self {
            link: Some(link),
            len,
            index: 0,
        }
    }

    fn node(&self) -> Option<&Node<'a>> {
        self.link.as_deref()?.as_deref()
    }

    fn node_mut(&mut self) -> Option<&mut Node<'a>> {
        self.link.as_deref_mut()?.as_deref_mut()
    }
}

// Methods that does not change the linking structure of the list.
impl<'l, 'a> CursorMut<'l, 'a> {
    /// The position of the cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The length of the list the cursor walks over.
    pub fn len(&self) -> usize {
        *self.len
    }

    pub fn is_empty(&self) -> bool {
        *self.len == 0
    }

    /// Return a reference of the item at the cursor, or `None` if the cursor
    /// is at the terminal position.
    pub fn current(&self) -> Option<&Item<'a>> {
        self.node().map(|node| &node.item)
    }

    /// Return a mutable reference of the item at the cursor, or `None` if the
    /// cursor is at the terminal position.
    pub fn current_mut(&mut self) -> Option<&mut Item<'a>> {
        self.node_mut().map(|node| &mut node.item)
    }

    /// Move the cursor to the next position. Returns `false` if the cursor is
    /// already at the terminal position.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None)]);
    /// let mut cursor = list.cursor_start_mut();
    /// assert!(cursor.move_next());
    /// assert_eq!(cursor.index(), 1);
    /// assert!(cursor.current().is_none());
    /// assert!(!cursor.move_next());
    /// ```
    pub fn move_next(&mut self) -> bool {
        match self.link.take() {
            Some(Some(node)) => {
                self.link = Some(&mut node.next);
                self.index += 1;
                true
            }
            link => {
                self.link = link;
                false
            }
        }
    }

    /// Move forward the cursor by given steps, or return the number of steps
    /// actually taken when the terminal position is reached first.
    ///
    /// If an error occurs, the cursor stays at the terminal position.
    ///
    /// This operation should compute in *O*(*steps*) time.
    pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
        (0..steps).try_for_each(|i| if self.move_next() { Ok(()) } else { Err(i) })
    }
}

// Methods that might change the linking structure of the list.
impl<'l, 'a> CursorMut<'l, 'a> {
    /// Add an item at the cursor position.
    ///
    /// After insertion, the cursor stays at the same item but its `index`
    /// becomes `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"c", None)]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    /// cursor.insert(Item::new(*b"b", None));
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current().unwrap().data(), Some(&b"c"[..]));
    /// assert_eq!(list.get(1), Some(&b"b"[..]));
    /// ```
    pub fn insert(&mut self, item: Item<'a>) {
        if let Some(link) = self.link.as_deref_mut() {
            let next = link.take();
            *link = Some(Box::new(Node { next, item }));
            *self.len += 1;
            self.move_next();
        }
    }

    /// Add an item right after the item at the cursor. The cursor does not
    /// move.
    ///
    /// At the terminal position there is nothing to insert after, and the
    /// item is handed back in `Err`.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn insert_after(&mut self, item: Item<'a>) -> Result<(), Item<'a>> {
        match self.link.as_deref_mut().and_then(|link| link.as_deref_mut()) {
            Some(node) => {
                let next = node.next.take();
                node.next = Some(Box::new(Node { next, item }));
                *self.len += 1;
                Ok(())
            }
            None => Err(item),
        }
    }

    /// Remove the item at the cursor and return it, or return `None` if the
    /// cursor is at the terminal position. After removal, the cursor is at the
    /// next item with the same `index`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, SingleList};
    ///
    /// let mut list = SingleList::from_iter([Item::new(*b"a", None), Item::new(*b"b", None)]);
    /// let mut cursor = list.cursor_start_mut();
    /// assert_eq!(cursor.remove_current().unwrap().data(), Some(&b"a"[..]));
    /// assert_eq!(cursor.index(), 0);
    /// assert_eq!(cursor.current().unwrap().data(), Some(&b"b"[..]));
    /// ```
    pub fn remove_current(&mut self) -> Option<Item<'a>> {
        let link = self.link.as_deref_mut()?;
        let mut node = link.take()?;
        *link = node.next.take();
        *self.len -= 1;
        let Node { item, .. } = *node;
        Some(item)
    }

    /// Replace the item at the cursor, returning the old one, or hand the new
    /// item back in `Err` at the terminal position.
    pub fn replace(&mut self, item: Item<'a>) -> Result<Item<'a>, Item<'a>> {
        match self.current_mut() {
            Some(current) => Ok(std::mem::replace(current, item)),
            None => Err(item),
        }
    }
}

impl Debug for CursorMut<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::list::tests::{int_item, int_list, ints};

    #[test]
    fn cursor_seek() {
        let mut list = int_list(&[0, 1, 2]);
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.seek_forward(2).is_ok());
        assert_eq!(cursor.index(), 2);
        assert!(cursor.current().is_some());
        assert_eq!(cursor.seek_forward(5), Err(1));
        assert_eq!(cursor.index(), 3);
        assert!(cursor.current().is_none());
    }

    #[test]
    fn cursor_insert_and_remove() {
        let mut list = int_list(&[0, 2]);
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.insert_after(int_item(1)).is_ok());
        assert_eq!(cursor.len(), 3);
        assert!(cursor.move_next());
        assert!(cursor.remove_current().is_some());
        cursor.insert(int_item(5));
        assert!(cursor.move_next());
        assert!(cursor.insert_after(int_item(6)).is_err());
        assert_eq!(ints(&list), vec![0, 5, 2]);
    }

    #[test]
    fn cursor_replace() {
        let mut list = int_list(&[0, 1]);
        let mut cursor = list.cursor_start_mut();
        let old = cursor.replace(int_item(9)).unwrap();
        assert_eq!(old.data(), Some(&0i32.to_ne_bytes()[..]));
        assert_eq!(cursor.seek_forward(2), Ok(()));
        assert!(cursor.replace(int_item(3)).is_err());
        assert_eq!(ints(&list), vec![9, 1]);
    }
}
