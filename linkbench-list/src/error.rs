//! Error types for positional list operations.

use core::fmt;

/// Position outside the valid range for the operation.
///
/// Carries the rejected position and the list length at the time of the
/// call, so callers can report both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The position that was rejected.
    pub index: usize,
    /// List length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} out of range for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}
