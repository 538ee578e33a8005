//! Validated sequence position
//!
//! Callers hand in signed integers (from the command line or a config file).
//! Negative positions are rejected here so the algorithms only ever see `u32`.

use crate::error::FibError;

/// Index used when nothing else is requested
pub const DEFAULT_INDEX: u32 = 10;

/// A non-negative position in the Fibonacci sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(u32);

impl Index {
    /// Validate a signed position
    pub fn new(n: i64) -> Result<Self, FibError> {
        if n < 0 {
            return Err(FibError::NegativeIndex(n));
        }
        u32::try_from(n)
            .map(Index)
            .map_err(|_| FibError::IndexTooLarge(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Index {
    fn default() -> Self {
        Index(DEFAULT_INDEX)
    }
}

impl From<u32> for Index {
    fn from(n: u32) -> Self {
        Index(n)
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
