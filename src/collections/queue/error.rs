use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::CursorState;
use crate::util::error::ConcurrentModification;

/// The error produced when a [`RingQueue`](super::RingQueue) is created with a capacity of zero.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue capacity must be positive!")]
pub struct InvalidCapacity;

/// The error produced when taking or reading the front of an empty queue.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Queue contains no elements!")]
pub struct EmptyQueue;

/// The error produced when the elements of a queue don't fit into a destination slice at the
/// requested offset.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Can't copy {len} elements to offset {offset} of a slice with {available} elements!")]
pub struct OutOfRange {
    pub offset: usize,
    pub len: usize,
    pub available: usize,
}

/// The error produced when reading the current value of a [`Cursor`](super::Cursor) that isn't
/// positioned on an element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursor has no current value while {state:?}!")]
pub struct NotPositioned {
    pub state: CursorState,
}

/// The error produced when trying to rewind a [`Cursor`](super::Cursor), which only supports a
/// single pass.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Cursors can't be reset!")]
pub struct ResetUnsupported;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    ConcurrentModification(ConcurrentModification),
    NotPositioned(NotPositioned),
}
