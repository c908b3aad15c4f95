//! Arena-backed doubly linked list with positional CRUD operations.
//!
//! This crate is the core of `linkbench`, a small workbench for
//! demonstrating and benchmarking linked-list CRUD. The design inverts the
//! textbook pointer-chasing list:
//!
//! ```text
//! Box<Node> + raw prev/next   - manual link rewiring, dangling-pointer risk
//! SlotArena + sentinel keys   - nodes in a growable slab, links are indices
//! ```
//!
//! Nodes live in a [`SlotArena`] owned by the list; `prev`/`next` are plain
//! integer keys with a `NONE` sentinel ([`Key`]), and freed slots are
//! recycled through an intrusive free list. There is no `unsafe` in this
//! crate: a mis-tracked link can at worst observe a vacant slot, which every
//! access reports as an explicit failure.
//!
//! # Quick Start
//!
//! ```
//! use linkbench_list::LinkedList;
//!
//! let mut list: LinkedList<i64> = LinkedList::new();
//! list.push_back(1);
//! list.push_back(3);
//! list.insert(1, 2).unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Out-of-range positions are typed failures, never undefined walks
//! assert!(list.insert(9, 4).is_err());
//! assert_eq!(list.get(9), None);
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`list`] | [`LinkedList`] and its iterator |
//! | [`storage`] | [`SlotArena`] slot storage with free-list reuse |
//! | [`key`] | [`Key`] sentinel-based index trait |
//! | [`error`] | [`OutOfRange`] typed position failure |

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod list;
pub mod storage;

pub use error::OutOfRange;
pub use key::Key;
pub use list::{Iter, LinkedList};
pub use storage::SlotArena;
