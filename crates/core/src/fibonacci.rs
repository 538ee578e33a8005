//! Naive recursive Fibonacci
//!
//! Two-way recursive decomposition with no caching, so the running time is
//! exponential in `n` and the call depth is `n`. Very large indices exhaust
//! the native stack long before they finish; use
//! [`crate::strategy::fibonacci_stack`] when the recursion shape matters but
//! the native stack does not.

use crate::error::FibError;

/// Largest index whose value fits in `u64`
pub const MAX_U64_INDEX: u32 = 93;

/// F(0) = 0, F(1) = 1, F(n) = F(n-1) + F(n-2)
///
/// Overflows past [`MAX_U64_INDEX`] follow normal integer arithmetic rules
/// (a panic in debug builds). See [`checked_fibonacci`] for a reported error.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        n as u64
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}

/// Same recursion as [`fibonacci`], reporting overflow instead of panicking
pub fn checked_fibonacci(n: u32) -> Result<u64, FibError> {
    if n <= 1 {
        return Ok(n as u64);
    }
    let a = checked_fibonacci(n - 1)?;
    let b = checked_fibonacci(n - 2)?;
    checked_sum(a, b, n)
}

/// F(index) = lhs + rhs, or `Overflow` when it leaves `u64`
///
/// Every checked strategy funnels its additions through here.
pub(crate) fn checked_sum(lhs: u64, rhs: u64, index: u32) -> Result<u64, FibError> {
    lhs.checked_add(rhs).ok_or(FibError::Overflow { index })
}
