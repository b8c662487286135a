//! Byte-blob items and their ownership policies.
//!
//! An [`Item`] carries an optional byte buffer, the number of bytes it
//! compares over, an optional [`Comparer`] and one of three ownership
//! policies:
//!
//! - [`Item::new`]: the item owns a heap buffer. Copying it allocates a
//!   fresh buffer, dropping it frees the buffer.
//! - [`Item::new_static`]: the item borrows caller data. Copying it aliases
//!   the same bytes, dropping it never touches them.
//! - [`Item::new_custom`]: the item owns a buffer managed by caller-supplied
//!   [`Callbacks`].

use std::cmp::Ordering;
use std::fmt;

/// Compares the data of an item with some other data over `size` bytes.
pub type Comparer = fn(&[u8], &[u8], usize) -> Ordering;

/// Ownership callbacks of a [`Policy::Custom`] item.
///
/// The three callbacks are always supplied together.
#[derive(Clone, Copy)]
pub struct Callbacks {
    /// Allocates a buffer of the given size for a copy.
    pub allocate: fn(usize) -> Box<[u8]>,
    /// Releases a buffer when its item is dropped.
    pub destroy: fn(Box<[u8]>),
    /// Copies the bytes of the source into the freshly allocated destination.
    pub copy: fn(&mut [u8], &[u8]),
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

/// The ownership policy of an [`Item`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// The data lives on the heap and belongs to the item.
    Owned,
    /// The data is borrowed from the caller.
    Static,
    /// The data belongs to the item and is managed by [`Callbacks`].
    Custom,
}

enum Ownership<'a> {
    Owned(Option<Box<[u8]>>),
    Static(Option<&'a [u8]>),
    Custom {
        data: Option<Box<[u8]>>,
        callbacks: Callbacks,
    },
}

/// A byte blob stored in a list, together with its comparer and ownership
/// policy.
///
/// The lifetime `'a` bounds the data borrowed by [`Policy::Static`] items;
/// owned and custom items can be `Item<'static>`.
pub struct Item<'a> {
    ownership: Ownership<'a>,
    size: usize,
    comparer: Option<Comparer>,
}

impl<'a> Item<'a> {
    /// Create an item that owns `data`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, Policy};
    ///
    /// let item = Item::new(vec![1u8, 2, 3], None);
    /// assert_eq!(item.data(), Some(&[1, 2, 3][..]));
    /// assert_eq!(item.size(), 3);
    /// assert_eq!(item.policy(), Policy::Owned);
    /// ```
    pub fn new(data: impl Into<Box<[u8]>>, comparer: Option<Comparer>) -> Self {
        let data = data.into();
        Self {
            size: data.len(),
            ownership: Ownership::Owned(Some(data)),
            comparer,
        }
    }

    /// Create an item that borrows `data` without ever copying or freeing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, Policy};
    ///
    /// let bytes = [7u8; 4];
    /// let item = Item::new_static(&bytes, None);
    /// assert_eq!(item.data().map(<[u8]>::as_ptr), Some(bytes.as_ptr()));
    /// assert_eq!(item.policy(), Policy::Static);
    /// ```
    pub fn new_static(data: &'a [u8], comparer: Option<Comparer>) -> Self {
        Self {
            size: data.len(),
            ownership: Ownership::Static(Some(data)),
            comparer,
        }
    }

    /// Create an item whose buffer is copied and released through `callbacks`.
    pub fn new_custom(
        data: impl Into<Box<[u8]>>,
        comparer: Option<Comparer>,
        callbacks: Callbacks,
    ) -> Self {
        let data = data.into();
        Self {
            size: data.len(),
            ownership: Ownership::Custom {
                data: Some(data),
                callbacks,
            },
            comparer,
        }
    }

    /// Create an owned item without data.
    ///
    /// A sentinel compares equal only to absent data, which lets a list hold
    /// and find placeholder entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::Item;
    ///
    /// let sentinel = Item::sentinel(None);
    /// assert!(sentinel.data().is_none());
    /// assert!(sentinel.compare(None).is_eq());
    /// assert!(sentinel.compare(Some(&b"x"[..])).is_ne());
    /// ```
    pub fn sentinel(comparer: Option<Comparer>) -> Self {
        Self {
            size: 0,
            ownership: Ownership::Owned(None),
            comparer,
        }
    }

    /// Create a static item without data, the borrowed counterpart of
    /// [`Item::sentinel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::{Item, Policy};
    ///
    /// let sentinel = Item::static_sentinel(None);
    /// assert_eq!(sentinel.policy(), Policy::Static);
    /// assert!(sentinel.compare(None).is_eq());
    /// assert!(sentinel.copy().data().is_none());
    /// ```
    pub fn static_sentinel(comparer: Option<Comparer>) -> Self {
        Self {
            size: 0,
            ownership: Ownership::Static(None),
            comparer,
        }
    }

    /// The data of the item, or `None` for a sentinel.
    pub fn data(&self) -> Option<&[u8]> {
        match &self.ownership {
            Ownership::Owned(data) | Ownership::Custom { data, .. } => data.as_deref(),
            Ownership::Static(data) => *data,
        }
    }

    /// The number of bytes the item compares over.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn comparer(&self) -> Option<Comparer> {
        self.comparer
    }

    pub fn policy(&self) -> Policy {
        match self.ownership {
            Ownership::Owned(_) => Policy::Owned,
            Ownership::Static(_) => Policy::Static,
            Ownership::Custom { .. } => Policy::Custom,
        }
    }

    /// Copy the item.
    ///
    /// Owned and custom items get a freshly allocated buffer holding the same
    /// bytes; static items alias the original data. The size, comparer and
    /// policy are always carried over.
    ///
    /// # Examples
    ///
    /// ```
    /// use blob_list::Item;
    ///
    /// let owned = Item::new(vec![1u8, 2], None);
    /// let copied = owned.copy();
    /// assert_eq!(copied.data(), owned.data());
    /// assert_ne!(copied.data().unwrap().as_ptr(), owned.data().unwrap().as_ptr());
    ///
    /// let bytes = [3u8, 4];
    /// let borrowed = Item::new_static(&bytes, None);
    /// assert_eq!(borrowed.copy().data().unwrap().as_ptr(), bytes.as_ptr());
    /// ```
    pub fn copy(&self) -> Self {
        let ownership = match &self.ownership {
            Ownership::Owned(data) => Ownership::Owned(data.clone()),
            Ownership::Static(data) => Ownership::Static(*data),
            Ownership::Custom { data, callbacks } => Ownership::Custom {
                data: data.as_deref().map(|src| {
                    let mut dst = (callbacks.allocate)(src.len());
                    (callbacks.copy)(&mut dst, src);
                    dst
                }),
                callbacks: *callbacks,
            },
        };
        Self {
            ownership,
            size: self.size,
            comparer: self.comparer,
        }
    }

    /// Compare the data of the item with `other`.
    ///
    /// Two absent buffers are equal. If only one side is absent the result is
    /// [`Ordering::Less`] and neither side is read. Otherwise the comparer of
    /// the item decides, or a byte-wise comparison over [`Item::size`] bytes
    /// when there is none.
    pub fn compare(&self, other: Option<&[u8]>) -> Ordering {
        match (self.data(), other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) | (Some(_), None) => Ordering::Less,
            (Some(data), Some(other)) => match self.comparer {
                Some(comparer) => comparer(data, other, self.size),
                None => compare_bytes(data, other, self.size),
            },
        }
    }
}

/// Byte-wise comparison of the first `size` bytes. A shorter `other` orders
/// before `data` when their common prefix is equal.
fn compare_bytes(data: &[u8], other: &[u8], size: usize) -> Ordering {
    let data = &data[..size.min(data.len())];
    let other = &other[..size.min(other.len())];
    data.cmp(other)
}

impl Clone for Item<'_> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

/// Items are equal when they hold the same bytes and compare over the same
/// size. Unlike [`Item::compare`], the comparer is not involved.
impl PartialEq for Item<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.data() == other.data()
    }
}

impl Eq for Item<'_> {}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("policy", &self.policy())
            .field("size", &self.size)
            .field("data", &self.data())
            .finish()
    }
}

impl Drop for Item<'_> {
    fn drop(&mut self) {
        if let Ownership::Custom { data, callbacks } = &mut self.ownership {
            if let Some(data) = data.take() {
                (callbacks.destroy)(data);
            }
        }
    }
}
