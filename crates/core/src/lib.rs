//! Fib Core: the n-th Fibonacci number
//!
//! The reference algorithm is naive two-way recursion, F(n) = F(n-1) + F(n-2)
//! with F(0) = 0 and F(1) = 1. It is deliberately exponential.
//!
//! # Modules
//!
//! - `fibonacci`: the naive recursion, plain and overflow-checked
//! - `strategy`: iterative and explicit-stack alternatives plus `compute`
//! - `index`: validated, non-negative sequence positions
//! - `error`: `FibError`

pub mod error;
pub mod fibonacci;
pub mod index;
pub mod strategy;

pub use error::FibError;
pub use fibonacci::{MAX_U64_INDEX, checked_fibonacci, fibonacci};
pub use index::{DEFAULT_INDEX, Index};
pub use strategy::{StackTrace, Strategy, compute, fibonacci_iterative, fibonacci_stack};
