//! Recursive Fibonacci sequence.

use crate::error::TourError;

/// Largest index whose Fibonacci value fits in `u64`.
pub const MAX_N: u32 = 93;

/// Computes the nth Fibonacci number (`fib(0) = 0`, `fib(1) = 1`).
///
/// The recursion carries the two trailing terms, so the call depth is `n`
/// rather than the exponential fan-out of the textbook double recursion.
/// The index cap keeps every intermediate sum inside `u64`.
///
/// # Errors
///
/// Returns [`TourError::SequenceTooLong`] when `n` exceeds [`MAX_N`].
pub fn fibonacci(n: u32) -> Result<u64, TourError> {
    if n > MAX_N {
        return Err(TourError::SequenceTooLong { n, max: MAX_N });
    }
    Ok(walk(n, 0, 1))
}

fn walk(remaining: u32, prev: u64, curr: u64) -> u64 {
    match remaining {
        0 => prev,
        1 => curr,
        _ => walk(remaining - 1, curr, prev + curr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fibonacci(0), Ok(0));
        assert_eq!(fibonacci(1), Ok(1));
    }

    #[test]
    fn test_eighth_term() {
        assert_eq!(fibonacci(8), Ok(21));
    }

    #[test]
    fn test_first_terms() {
        let expected = [0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u32), Ok(*want), "fib({n})");
        }
    }

    #[test]
    fn test_largest_representable_term() {
        assert_eq!(fibonacci(MAX_N), Ok(12_200_160_415_121_876_738));
    }

    #[test]
    fn test_index_past_cap_is_rejected() {
        assert_eq!(
            fibonacci(MAX_N + 1),
            Err(TourError::SequenceTooLong {
                n: MAX_N + 1,
                max: MAX_N,
            })
        );
    }
}
