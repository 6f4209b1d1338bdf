//! A module containing [`RingQueue`] and associated types.
//!
//! The other included types are for iteration: [`Iter`] and [`IntoIter`] provide borrowed and
//! owned iteration in FIFO order, while [`Cursor`] steps through a queue without borrowing it and
//! detects mutation through the queue's stamp.
//!
//! [`RingQueue`] is also re-exported under the parent module.

mod cursor;
mod error;
mod iter;
mod ring_queue;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use ring_queue::*;

#[doc(inline)]
pub use crate::util::error::ConcurrentModification;
