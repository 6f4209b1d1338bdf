use derive_more::{Display, Error};

/// The error produced when a collection is structurally modified while a cursor over it is still
/// in progress.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection was modified during iteration (expected stamp {expected}, found {found})!")]
pub struct ConcurrentModification {
    /// The stamp captured when the cursor started.
    pub expected: u64,
    /// The stamp the collection holds now.
    pub found: u64,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
