//! General-purpose collection types.
//!
//! # Purpose
//! [`BinarySearchTree`](binary_tree::BinarySearchTree) keeps its elements sorted under a
//! comparison chosen at construction, while [`RingQueue`](queue::RingQueue) is a FIFO over a
//! circular buffer that doubles when it runs out of room.
//!
//! Each module is enabled by its own cargo feature (`binary-tree` and `queue`), both of which are
//! on by default.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "queue")]
pub mod queue;

#[doc(inline)]
pub use crate::util::error::ConcurrentModification;
