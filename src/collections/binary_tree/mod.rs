//! A module containing [`BinarySearchTree`] and associated types.
//!
//! The other included types drive the three depth-first traversals of a tree. [`Traversal`] is a
//! borrowed iterator, while [`TraversalCursor`] holds no borrow between steps and instead detects
//! mutation of the tree through its stamp.
//!
//! [`BinarySearchTree`] is also re-exported under the parent module.

mod binary_search_tree;
mod node;
mod tests;
mod traversal;

pub use binary_search_tree::*;
pub(crate) use node::*;
pub use traversal::*;

#[doc(inline)]
pub use crate::util::error::ConcurrentModification;
