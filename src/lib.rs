//! This crate is a pair of hand-written collections: an unbalanced binary search tree with a
//! pluggable ordering and a growable ring buffer queue.
//!
//! # Purpose
//! Both types are meant to be used the way the collections of a standard library are used: as
//! plain, single-owner building blocks. Neither is thread-safe and neither tries to be.
//!
//! # Mutation Stamps
//! Each collection carries a stamp that is bumped by every structural mutation. The borrowed
//! iterators ([`in_order`](collections::binary_tree::BinarySearchTree::in_order),
//! [`RingQueue::iter`](collections::queue::RingQueue::iter), ...) can rely on the borrow checker
//! instead, but the detached cursors
//! ([`TraversalCursor`](collections::binary_tree::TraversalCursor) and
//! [`Cursor`](collections::queue::Cursor)) don't hold a borrow between steps. They capture the
//! stamp and fail with [`ConcurrentModification`](collections::ConcurrentModification) if the
//! collection was modified in the meantime.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s with small, strongly typed errors (mostly ZSTs) that
//! implement [`Error`](std::error::Error). Where an operation can fail in more than one way, the
//! error is an enum over those structs, so it can be matched statically. Failed operations never
//! leave a collection partially modified.
//!
//! # Logging
//! Reallocations and detected concurrent modifications are reported through the [`log`] facade.
//! Nothing is printed unless the application installs a logger.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
