//! Error type for index validation and arithmetic overflow

/// Errors produced while validating an index or computing its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    /// The requested index was below zero
    NegativeIndex(i64),
    /// The requested index does not fit in `u32`
    IndexTooLarge(i64),
    /// The value at `index` does not fit in `u64`
    Overflow { index: u32 },
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::NegativeIndex(n) => {
                write!(f, "Fibonacci index must be non-negative, got {}", n)
            }
            FibError::IndexTooLarge(n) => {
                write!(f, "Fibonacci index {} is out of range (max {})", n, u32::MAX)
            }
            FibError::Overflow { index } => {
                write!(f, "Fibonacci number {} does not fit in 64 bits", index)
            }
        }
    }
}

impl std::error::Error for FibError {}
