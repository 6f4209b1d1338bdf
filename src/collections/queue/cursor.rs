use super::{CursorError, NotPositioned, ResetUnsupported, RingQueue};
use crate::util::error::ConcurrentModification;
use crate::util::stamp::Stamp;

/// An enum to represent the state of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorState {
    /// The cursor hasn't been advanced yet and points before the first element.
    NotStarted,
    /// The cursor is pointing to the element at the contained index from the front of the queue.
    Positioned(usize),
    /// The cursor has moved past the last element.
    Finished,
}

/// A single pass over the elements of a [`RingQueue`], from front to back, that doesn't borrow the
/// queue between steps. See [`RingQueue::cursor`].
///
/// The cursor captures the queue's stamp when it is created. Any call that reads the queue fails
/// with [`ConcurrentModification`] once the queue has been modified after that.
///
/// A cursor may only be used with the queue that it was created from.
#[derive(Debug, Clone)]
pub struct Cursor {
    state: CursorState,
    stamp: Stamp,
}

impl Cursor {
    pub(crate) const fn new(stamp: Stamp) -> Cursor {
        Cursor {
            state: CursorState::NotStarted,
            stamp,
        }
    }

    /// Returns the state of this cursor.
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Moves the cursor to the next element, returning false once it has moved past the last one.
    ///
    /// # Errors
    /// Returns [`ConcurrentModification`] if `queue` has been modified since the cursor was
    /// created, even if the cursor has already finished.
    pub fn advance<T>(&mut self, queue: &RingQueue<T>) -> Result<bool, ConcurrentModification> {
        queue.stamp.check(self.stamp)?;

        let next = match self.state {
            CursorState::NotStarted => 0,
            CursorState::Positioned(index) => index + 1,
            CursorState::Finished => return Ok(false),
        };

        if next < queue.len() {
            self.state = CursorState::Positioned(next);
            Ok(true)
        } else {
            self.state = CursorState::Finished;
            Ok(false)
        }
    }

    /// Returns the element the cursor is positioned on.
    ///
    /// # Errors
    /// Returns [`NotPositioned`] if the cursor hasn't been advanced yet or has finished, or
    /// [`ConcurrentModification`] if `queue` has been modified since the cursor was created.
    pub fn current<'q, T>(&self, queue: &'q RingQueue<T>) -> Result<&'q T, CursorError> {
        let not_positioned = NotPositioned { state: self.state };

        match self.state {
            CursorState::Positioned(index) => {
                queue.stamp.check(self.stamp)?;
                queue.get(index).ok_or(not_positioned.into())
            },
            _ => Err(not_positioned.into()),
        }
    }

    /// Cursors only support a single pass, create a new one with [`RingQueue::cursor`] instead.
    ///
    /// # Errors
    /// Always returns [`ResetUnsupported`].
    pub const fn reset(&mut self) -> Result<(), ResetUnsupported> {
        Err(ResetUnsupported)
    }
}
