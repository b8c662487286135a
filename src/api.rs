//! Free functions over optional list handles.
//!
//! Each function forwards to the [`ItemList`] operation of the same name.
//! An absent list (or absent `other` list) is tolerated: the function does
//! nothing and returns `0`, `None` or `false`. Functions taking an item hand
//! it back in `Err` when there is no list to receive it.
//!
//! ```
//! use blob_list::{api, Item, SingleList};
//!
//! let mut list: SingleList = api::create();
//! assert!(api::add(Some(&mut list), Item::new(*b"a", None)).is_ok());
//! assert_eq!(api::size(Some(&list)), 1);
//!
//! let missing: Option<&SingleList> = None;
//! assert_eq!(api::size(missing), 0);
//! assert_eq!(api::index_of(missing, None), None);
//! ```

use tracing::trace;

use crate::interface::ItemList;
use crate::item::Item;
use crate::list::Step;

pub fn create<'a, L: ItemList<'a>>() -> L {
    L::new()
}

/// Drop the list and every item it still holds.
pub fn destroy<'a, L: ItemList<'a>>(list: Option<L>) {
    drop(list);
}

pub fn add<'a, L: ItemList<'a>>(list: Option<&mut L>, item: Item<'a>) -> Result<(), Item<'a>> {
    match list {
        Some(list) => {
            list.add(item);
            Ok(())
        }
        None => {
            trace!("add without a list");
            Err(item)
        }
    }
}

pub fn add_all<'a, L: ItemList<'a>>(list: Option<&mut L>, other: Option<&L>) {
    if let (Some(list), Some(other)) = (list, other) {
        list.add_all(other);
    }
}

pub fn add_index<'a, L: ItemList<'a>>(
    list: Option<&mut L>,
    index: usize,
    item: Item<'a>,
) -> Result<(), Item<'a>> {
    match list {
        Some(list) => list.add_index(index, item),
        None => Err(item),
    }
}

pub fn add_all_index<'a, L: ItemList<'a>>(
    list: Option<&mut L>,
    index: usize,
    other: Option<&L>,
) -> bool {
    match (list, other) {
        (Some(list), Some(other)) => list.add_all_index(index, other),
        _ => false,
    }
}

pub fn clear<'a, L: ItemList<'a>>(list: Option<&mut L>) {
    if let Some(list) = list {
        list.clear();
    }
}

pub fn contains<'a, L: ItemList<'a>>(list: Option<&L>, data: Option<&[u8]>) -> bool {
    list.map_or(false, |list| list.contains(data))
}

pub fn contains_all<'a, L: ItemList<'a>>(list: Option<&L>, other: Option<&L>) -> bool {
    match (list, other) {
        (Some(list), Some(other)) => list.contains_all(other),
        _ => false,
    }
}

pub fn get<'l, 'a, L: ItemList<'a>>(list: Option<&'l L>, index: usize) -> Option<&'l [u8]> {
    list?.get(index)
}

pub fn remove<'a, L: ItemList<'a>>(list: Option<&mut L>, data: Option<&[u8]>) -> bool {
    list.map_or(false, |list| list.remove(data))
}

pub fn remove_index<'a, L: ItemList<'a>>(list: Option<&mut L>, index: usize) -> bool {
    list.map_or(false, |list| list.remove_index(index))
}

pub fn remove_all<'a, L: ItemList<'a>>(list: Option<&mut L>, other: Option<&L>) -> usize {
    match (list, other) {
        (Some(list), Some(other)) => list.remove_all(other),
        _ => 0,
    }
}

pub fn index_of<'a, L: ItemList<'a>>(list: Option<&L>, data: Option<&[u8]>) -> Option<usize> {
    list?.index_of(data)
}

pub fn set<'a, L: ItemList<'a>>(
    list: Option<&mut L>,
    index: usize,
    item: Item<'a>,
) -> Result<(), Item<'a>> {
    match list {
        Some(list) => list.set(index, item),
        None => Err(item),
    }
}

pub fn size<'a, L: ItemList<'a>>(list: Option<&L>) -> usize {
    list.map_or(0, |list| list.size())
}

/// An absent list holds nothing, so it is empty.
pub fn is_empty<'a, L: ItemList<'a>>(list: Option<&L>) -> bool {
    list.map_or(true, |list| list.is_empty())
}

pub fn sort<'a, L: ItemList<'a>>(list: Option<&mut L>) {
    if let Some(list) = list {
        list.sort();
    }
}

pub fn for_each<'a, L, F>(list: Option<&mut L>, f: F)
where
    L: ItemList<'a>,
    F: FnMut(usize, &mut Item<'a>) -> Step,
{
    if let Some(list) = list {
        list.for_each(f);
    }
}
