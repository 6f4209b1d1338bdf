use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;

use super::{Cursor, EmptyQueue, InvalidCapacity, Iter, OutOfRange};
use crate::util::error::CapacityOverflow;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;
use crate::util::stamp::Stamp;

const DEFAULT_CAP: usize = 16;
const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A first-in first-out queue backed by a circular buffer.
///
/// Elements occupy `len` consecutive slots starting at `head`, wrapping around the end of the
/// buffer. When the buffer is full, [`enqueue`](RingQueue::enqueue) doubles its capacity and moves
/// the elements to the front of the new buffer. Slots outside of the live range are always empty,
/// so the queue never holds on to elements that have been removed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `get` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `copy_to` | `O(n)` |
/// | `trim_excess` | `O(n)` |
/// | `clear` | `O(cap)` |
///
/// \* If the RingQueue doesn't have room for the new element, `enqueue` will take `O(n)`.
pub struct RingQueue<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) head: usize,
    pub(crate) tail: usize,
    pub(crate) len: usize,
    pub(crate) stamp: Stamp,
}

impl<T> RingQueue<T> {
    /// Creates an empty RingQueue with a capacity of 16.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let queue: RingQueue<u8> = RingQueue::new();
    /// assert_eq!(queue.len(), 0);
    /// assert_eq!(queue.cap(), 16);
    /// ```
    pub fn new() -> RingQueue<T> {
        RingQueue::with_buf(Self::empty_buf(DEFAULT_CAP), 0)
    }

    /// Creates an empty RingQueue with capacity exactly equal to the provided value.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `cap` is zero.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let queue: RingQueue<u8> = RingQueue::with_cap(5).unwrap();
    /// assert_eq!(queue.cap(), 5);
    /// assert!(RingQueue::<u8>::with_cap(0).is_err());
    /// ```
    pub fn with_cap(cap: usize) -> Result<RingQueue<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity);
        }

        Ok(RingQueue::with_buf(Self::empty_buf(cap), 0))
    }

    /// Creates a RingQueue holding the elements of `seq` in order, with capacity exactly equal to
    /// the number of elements.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let queue = RingQueue::from_sequence("abc".chars());
    /// assert_eq!(queue.cap(), 3);
    /// assert_eq!(queue.peek(), Ok(&'a'));
    /// ```
    pub fn from_sequence<I: IntoIterator<Item = T>>(seq: I) -> RingQueue<T> {
        let buf: Box<[Option<T>]> = seq.into_iter().map(Some).collect();
        let len = buf.len();
        RingQueue::with_buf(buf, len)
    }

    /// Returns the number of elements in the RingQueue.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the RingQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the RingQueue can hold before it has to grow.
    pub fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Adds `item` to the back of the RingQueue, growing it if required.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow a [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let mut queue = RingQueue::with_cap(1).unwrap();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.cap(), 2);
    /// assert_eq!(&*queue.to_array(), &[1, 2]);
    /// ```
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.buf[self.tail] = Some(item);
        self.tail = self.wrap(self.tail + 1);
        self.len += 1;
        self.stamp.bump();
    }

    /// Removes and returns the element at the front of the RingQueue.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if there are no elements.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let mut queue = RingQueue::from_sequence([1, 2]);
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert!(queue.dequeue().is_err());
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyQueue> {
        if self.len == 0 {
            return Err(EmptyQueue);
        }

        // SAFETY: len > 0, so the slot at head holds the front element.
        let item = unsafe { self.buf[self.head].take().unreachable() };
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        self.stamp.bump();

        Ok(item)
    }

    /// Returns a reference to the element at the front of the RingQueue without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyQueue`] if there are no elements.
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        self.get(0).ok_or(EmptyQueue)
    }

    /// Returns a reference to the element `index` places from the front of the RingQueue.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    /// Returns true if the RingQueue contains an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|i| i == item)
    }

    /// Clones every element into `dest`, in FIFO order, starting at `offset`. Does nothing if the
    /// RingQueue is empty.
    ///
    /// # Errors
    /// Returns [`OutOfRange`] if the elements don't fit into `dest` starting at `offset`. `dest` is
    /// left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let queue = RingQueue::from_sequence([1, 2]);
    /// let mut dest = [0; 4];
    /// queue.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 1, 2, 0]);
    /// assert!(queue.copy_to(&mut dest, 3).is_err());
    /// ```
    pub fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), OutOfRange>
    where
        T: Clone,
    {
        if self.is_empty() {
            return Ok(());
        }

        let end = offset
            .checked_add(self.len)
            .filter(|end| *end <= dest.len())
            .ok_or(OutOfRange {
                offset,
                len: self.len,
                available: dest.len(),
            })?;

        for (slot, item) in dest[offset..end].iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }

        Ok(())
    }

    /// Returns a boxed slice containing clones of every element, in FIFO order.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Shrinks the RingQueue so that its capacity is equal to its length.
    pub fn trim_excess(&mut self) {
        self.realloc_with_cap(self.len);
        self.stamp.bump();
    }

    /// Drops every element in the RingQueue, keeping its capacity.
    pub fn clear(&mut self) {
        self.buf.fill_with(|| None);
        self.head = 0;
        self.tail = 0;
        self.len = 0;
        self.stamp.bump();
    }

    /// Returns a borrowed iterator over the elements, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a [`Cursor`] over the elements as they are now. The cursor doesn't borrow the
    /// RingQueue, but fails as soon as it is used after the RingQueue has been modified.
    ///
    /// # Examples
    /// ```
    /// # use custom_collections::collections::queue::RingQueue;
    /// let mut queue = RingQueue::from_sequence([1, 2]);
    /// let mut cursor = queue.cursor();
    /// assert_eq!(cursor.advance(&queue), Ok(true));
    /// assert_eq!(cursor.current(&queue), Ok(&1));
    /// queue.enqueue(3);
    /// assert!(cursor.advance(&queue).is_err());
    /// ```
    pub const fn cursor(&self) -> Cursor {
        Cursor::new(self.stamp)
    }

    /// Creates a RingQueue around a buffer whose first `len` slots are filled.
    fn with_buf(buf: Box<[Option<T>]>, len: usize) -> RingQueue<T> {
        let mut queue = RingQueue {
            buf,
            head: 0,
            tail: 0,
            len,
            stamp: Stamp::new(),
        };
        queue.tail = queue.wrap(len);
        queue
    }

    fn empty_buf(cap: usize) -> Box<[Option<T>]> {
        iter::repeat_with(|| None).take(cap).collect()
    }

    /// Wraps a slot position that may have run past the end of the buffer.
    fn wrap(&self, position: usize) -> usize {
        if position >= self.cap() {
            position - self.cap()
        } else {
            position
        }
    }

    /// Converts an index from the front of the RingQueue into a position in the buffer.
    pub(crate) fn physical(&self, index: usize) -> usize {
        self.wrap(self.head + index)
    }

    /// Doubles the capacity, or allocates the first slot for a RingQueue with no capacity.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow a [`usize`].
    fn grow(&mut self) {
        let new_cap = self
            .cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw();

        self.realloc_with_cap(cmp::max(new_cap, MIN_CAP));
    }

    /// Moves every element, in order, to the front of a new buffer with exactly `new_cap` slots.
    /// `new_cap` must be at least `len`.
    fn realloc_with_cap(&mut self, new_cap: usize) {
        log::trace!("reallocating ring queue from {} to {} slots", self.cap(), new_cap);

        let mut buf = Self::empty_buf(new_cap);
        for (index, slot) in buf.iter_mut().take(self.len).enumerate() {
            let position = self.physical(index);
            *slot = self.buf[position].take();
        }

        self.buf = buf;
        self.head = 0;
        self.tail = self.wrap(self.len);
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RingQueue::from_sequence(iter)
    }
}

impl<T> From<Vec<T>> for RingQueue<T> {
    fn from(value: Vec<T>) -> Self {
        RingQueue::from_sequence(value)
    }
}

impl<T, const N: usize> From<[T; N]> for RingQueue<T> {
    fn from(value: [T; N]) -> Self {
        RingQueue::from_sequence(value)
    }
}

impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> Self {
        let mut buf = Self::empty_buf(self.cap());
        for (slot, item) in buf.iter_mut().zip(self.iter()) {
            *slot = Some(item.clone());
        }

        RingQueue::with_buf(buf, self.len)
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Hash> Hash for RingQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("contents", &self.iter())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
