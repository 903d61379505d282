//! Error types shared by the demo modules.

use thiserror::Error;

/// Errors produced by the fallible demo operations.
///
/// Each variant carries the offending inputs so callers can report a
/// failure without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// A checked arithmetic operation left the `i64` range.
    #[error("arithmetic overflow: {lhs} {op} {rhs} does not fit in i64")]
    Overflow {
        /// Operator symbol, e.g. `"+"` or `"*"`.
        op: &'static str,
        lhs: i64,
        rhs: i64,
    },

    /// A sequence index beyond the largest representable term.
    #[error("sequence index {n} is out of range (maximum {max})")]
    SequenceTooLong { n: u32, max: u32 },
}

impl TourError {
    pub fn overflow(op: &'static str, lhs: i64, rhs: i64) -> Self {
        Self::Overflow { op, lhs, rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message_names_inputs() {
        let err = TourError::overflow("+", i64::MAX, 1);
        let msg = err.to_string();
        assert!(msg.contains("overflow"));
        assert!(msg.contains(&i64::MAX.to_string()));
    }

    #[test]
    fn test_sequence_too_long_message() {
        let err = TourError::SequenceTooLong { n: 100, max: 93 };
        assert_eq!(
            err.to_string(),
            "sequence index 100 is out of range (maximum 93)"
        );
    }
}
