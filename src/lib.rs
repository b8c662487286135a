//! This crate provides a singly-linked list of byte-blob items, where each
//! item decides how its data is owned.
//!
//! The [`SingleList`] adds items at the head in constant time. In compromise,
//! accessing or mutating items at any other position takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use blob_list::{Item, SingleList};
//!
//! let mut list = SingleList::new();
//! list.add(Item::new(*b"c", None)); // [c]
//! list.add(Item::new(*b"a", None)); // [a, c]
//!
//! // positional insertion places the item *after* the given index
//! assert!(list.add_index(0, Item::new(*b"b", None)).is_ok()); // [a, b, c]
//! assert_eq!(list.get(1), Some(&b"b"[..]));
//! assert_eq!(list.index_of(Some(&b"c"[..])), Some(2));
//!
//! assert!(list.remove(Some(&b"a"[..])));
//! assert_eq!(list.len(), 2);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//! ╔═══════════╗     ╔═══════════╗     ╔═══════════╗
//! ║   first   ║ ──→ ║   next    ║ ──→ ║   next    ║ ──→ ┄┄ ──→ None
//! ╟───────────╢     ╟───────────╢     ╟───────────╢
//! ║    len    ║     ║   item    ║     ║   item    ║
//! ╚═══════════╝     ╚═══════════╝     ╚═══════════╝
//!   SingleList          Node 0            Node 1
//! ```
//! Each `item` holds its data (owned, borrowed or callback-managed), its
//! size, its comparer and its policy.
//!
//! The `SingleList` contains:
//! - a link `first` that owns the head node, or nothing if the list is empty;
//! - a length field `len` kept equal to the number of reachable nodes. The
//!   `strict_assertions` feature checks it after every structural change.
//!
//! Each node is allocated on heap and owns the next node and its [`Item`].
//! Dropping the list drops the nodes one by one, first to last.
//!
//! # Items
//!
//! An [`Item`] holds optional data, the number of bytes it compares over and
//! an optional [`Comparer`]. Its [`Policy`] tells how the data is owned:
//! - [`Policy::Owned`]: copies duplicate the buffer, dropping frees it;
//! - [`Policy::Static`]: the data is borrowed, copies alias it;
//! - [`Policy::Custom`]: caller [`Callbacks`] allocate, copy and release it.
//!
//! An item without data (see [`Item::sentinel`]) only compares equal to
//! absent data, so `contains(None)` finds it.
//!
//! # Traversal
//!
//! Iterating over a list is by the [`Iter`], [`IterMut`] and [`IntoIter`]
//! iterators. [`SingleList::for_each`] visits items and lets the visitor keep,
//! delete or stop at each of them:
//!
//! ```
//! use blob_list::{Item, SingleList, Step};
//!
//! let mut list = SingleList::from_iter([*b"a", *b"b", *b"c"].map(|b| Item::new(b, None)));
//! list.for_each(|_, item| if item.data() == Some(&b"b"[..]) { Step::Delete } else { Step::Next });
//! assert_eq!(list.len(), 2);
//! ```
//!
//! [`CursorMut`] gives finer control: it walks forward over the links and can
//! insert, replace and remove items in place.
//!
//! # Interface
//!
//! [`ItemList`] is the capability set of an item list, implemented by
//! [`SingleList`]. The [`api`] module forwards to it from optional handles and
//! falls back to safe defaults when a list is missing.

#[doc(inline)]
pub use interface::ItemList;
#[doc(inline)]
pub use item::{Callbacks, Comparer, Item, Policy};
#[doc(inline)]
pub use list::cursor::CursorMut;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{SingleList, Step};

pub mod api;
pub mod interface;
pub mod item;
pub mod list;
