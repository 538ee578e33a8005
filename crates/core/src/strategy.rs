//! Evaluation strategies
//!
//! `Naive` is the reference and the default. The other two exist for larger
//! indices and must agree with it everywhere:
//!
//! - `Iterative` keeps two running values and is linear in `n`.
//! - `Stack` replays the naive two-way recursion on a heap-allocated work
//!   stack, so it performs the same additions without native recursion.

use crate::error::FibError;
use crate::fibonacci::{checked_fibonacci, checked_sum};
use crate::index::Index;
use serde::Deserialize;
use tracing::debug;

/// Algorithm used to evaluate F(n)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Naive,
    Iterative,
    Stack,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Iterative, Strategy::Stack];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Iterative => "iterative",
            Strategy::Stack => "stack",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown strategy '{}'. Expected one of: naive, iterative, stack",
                    s
                )
            })
    }
}

/// Evaluate F(index) with the chosen strategy
pub fn compute(index: Index, strategy: Strategy) -> Result<u64, FibError> {
    let n = index.get();
    match strategy {
        Strategy::Naive => checked_fibonacci(n),
        Strategy::Iterative => fibonacci_iterative(n),
        Strategy::Stack => fibonacci_stack(n).map(|(value, _)| value),
    }
}

/// Two running values updated in a loop
pub fn fibonacci_iterative(n: u32) -> Result<u64, FibError> {
    if n == 0 {
        return Ok(0);
    }
    let mut a: u64 = 0;
    let mut b: u64 = 1;
    for i in 2..=n {
        let next = checked_sum(a, b, i)?;
        a = b;
        b = next;
    }
    Ok(b)
}

/// Shape of a replayed recursion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackTrace {
    /// Number of F(k) evaluations, base cases included
    pub calls: u64,
    /// Peak length of the work stack
    pub max_depth: usize,
}

enum Frame {
    Eval(u32),
    Add(u32),
}

/// Naive recursion on an explicit work stack
///
/// `Eval(k)` either yields a base value or schedules `Add(k)` after the two
/// sub-evaluations. `Add(k)` combines the two most recent results.
pub fn fibonacci_stack(n: u32) -> Result<(u64, StackTrace), FibError> {
    let mut work = vec![Frame::Eval(n)];
    let mut values: Vec<u64> = Vec::new();
    let mut trace = StackTrace {
        calls: 0,
        max_depth: 1,
    };

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Eval(k) => {
                trace.calls += 1;
                if k <= 1 {
                    values.push(k as u64);
                } else {
                    // n-1 is popped first, matching the recursive call order
                    work.push(Frame::Add(k));
                    work.push(Frame::Eval(k - 2));
                    work.push(Frame::Eval(k - 1));
                    trace.max_depth = trace.max_depth.max(work.len());
                }
            }
            Frame::Add(k) => {
                let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
                    unreachable!("Add frame scheduled without two operands");
                };
                values.push(checked_sum(lhs, rhs, k)?);
            }
        }
    }

    debug!(
        "Replayed F({}) with {} calls, peak work stack {}",
        n, trace.calls, trace.max_depth
    );

    let value = values.pop().unwrap_or_default();
    Ok((value, trace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci::{MAX_U64_INDEX, fibonacci};

    #[test]
    fn test_strategies_agree() {
        for n in 0..25 {
            let expected = fibonacci(n);
            for strategy in Strategy::ALL {
                assert_eq!(
                    compute(Index::from(n), strategy),
                    Ok(expected),
                    "{} disagrees at {}",
                    strategy,
                    n
                );
            }
        }
    }

    #[test]
    fn test_iterative_limits() {
        assert_eq!(
            fibonacci_iterative(MAX_U64_INDEX),
            Ok(12_200_160_415_121_876_738)
        );
        assert_eq!(
            fibonacci_iterative(MAX_U64_INDEX + 1),
            Err(FibError::Overflow { index: 94 })
        );
    }

    #[test]
    fn test_stack_call_count() {
        // The naive recursion makes 2 * F(n + 1) - 1 calls
        let (value, trace) = fibonacci_stack(10).unwrap();
        assert_eq!(value, 55);
        assert_eq!(trace.calls, 2 * fibonacci(11) - 1);

        let (value, trace) = fibonacci_stack(0).unwrap();
        assert_eq!(value, 0);
        assert_eq!(trace, StackTrace { calls: 1, max_depth: 1 });
    }

    #[test]
    fn test_stack_depth_is_linear() {
        for n in 2..20 {
            let (_, trace) = fibonacci_stack(n).unwrap();
            assert_eq!(trace.max_depth, 2 * n as usize - 1);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("naive".parse::<Strategy>(), Ok(Strategy::Naive));
        assert_eq!("iterative".parse::<Strategy>(), Ok(Strategy::Iterative));
        assert_eq!("stack".parse::<Strategy>(), Ok(Strategy::Stack));
        assert!("memo".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::Naive);
    }
}
