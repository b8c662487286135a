use crate::item::Item;
use crate::list::{Node, SingleList};
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the items of a `SingleList`.
///
/// # Examples
///
/// ```compile_fail
/// use blob_list::{Item, SingleList};
///
/// let mut list = SingleList::from_iter([Item::new(*b"a", None)]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.add(Item::new(*b"b", None));
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'l, 'a> {
    next: Option<&'l Node<'a>>,
    len: usize,
}

impl<'l, 'a> Iter<'l, 'a> {
    pub(crate) fn new(list: &'l SingleList<'a>) -> Self {
        Self {
            next: list.first.as_deref(),
            len: list.len(),
        }
    }
}

impl fmt::Debug for Iter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<'l, 'a> Iterator for Iter<'l, 'a> {
    type Item = &'l Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.len -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl FusedIterator for Iter<'_, '_> {}

/// A mutable iterator over the items of a `SingleList`.
///
/// It provides mutability of the items, but not of the linked structure of
/// the list.
pub struct IterMut<'l, 'a> {
    next: Option<&'l mut Node<'a>>,
    len: usize,
}

impl<'l, 'a> IterMut<'l, 'a> {
    pub(crate) fn new(list: &'l mut SingleList<'a>) -> Self {
        let len = list.len();
        Self {
            next: list.first.as_deref_mut(),
            len,
        }
    }
}

impl fmt::Debug for IterMut<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.len).finish()
    }
}

impl<'l, 'a> Iterator for IterMut<'l, 'a> {
    type Item = &'l mut Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.as_deref_mut();
        self.len -= 1;
        Some(&mut node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for IterMut<'_, '_> {}

impl FusedIterator for IterMut<'_, '_> {}

/// An owning iterator over the items of a `SingleList`.
///
/// This `struct` is created by the [`into_iter`] method on [`SingleList`]
/// (provided by the `IntoIterator` trait).
///
/// [`into_iter`]: SingleList::into_iter
pub struct IntoIter<'a> {
    list: SingleList<'a>,
}

impl fmt::Debug for IntoIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<'a> Iterator for IntoIter<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter<'_> {}

impl FusedIterator for IntoIter<'_> {}

impl<'a> IntoIterator for SingleList<'a> {
    type Item = Item<'a>;
    type IntoIter = IntoIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'l, 'a> IntoIterator for &'l SingleList<'a> {
    type Item = &'l Item<'a>;
    type IntoIter = Iter<'l, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'l, 'a> IntoIterator for &'l mut SingleList<'a> {
    type Item = &'l mut Item<'a>;
    type IntoIter = IterMut<'l, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Collects items in iteration order: the first item yielded is at index 0.
impl<'a> FromIterator<Item<'a>> for SingleList<'a> {
    fn from_iter<I: IntoIterator<Item = Item<'a>>>(iter: I) -> Self {
        let mut list = SingleList::new();
        list.extend(iter);
        list
    }
}

/// Appends items at the back of the list, in iteration order.
impl<'a> Extend<Item<'a>> for SingleList<'a> {
    fn extend<I: IntoIterator<Item = Item<'a>>>(&mut self, iter: I) {
        let mut cursor = self.cursor_end_mut();
        iter.into_iter().for_each(|item| cursor.insert(item));
        self.check_len();
    }
}
