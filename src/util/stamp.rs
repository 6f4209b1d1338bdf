use super::error::ConcurrentModification;

/// A counter that is bumped by every structural mutation of a collection. Cursors capture it and
/// compare it against the collection's current value before each step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(u64);

impl Stamp {
    /// Creates a stamp for a freshly constructed collection.
    pub const fn new() -> Stamp {
        Stamp(0)
    }

    /// Records a mutation.
    pub const fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Checks that no mutation has happened since `captured` was taken from this stamp.
    pub fn check(self, captured: Stamp) -> Result<(), ConcurrentModification> {
        if self == captured {
            Ok(())
        } else {
            log::debug!(
                "collection modified during iteration: captured stamp {}, current stamp {}",
                captured.0,
                self.0,
            );
            Err(ConcurrentModification {
                expected: captured.0,
                found: self.0,
            })
        }
    }
}
