//! Error types for instance validation.

use std::fmt;

/// Errors raised when a distance matrix is rejected at the search boundary.
///
/// All variants describe invalid input; once an instance is constructed the
/// solver itself does not produce recoverable errors (degenerate transition
/// weights are handled internally by a uniform sampling fallback, and broken
/// tour invariants abort via panic because they indicate a bug).
#[derive(Debug, Clone, PartialEq)]
pub enum AcoError {
    /// A row of the input does not match the expected dimension.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Expected number of columns (the node count).
        expected: usize,
        /// Actual number of columns found.
        actual: usize,
    },

    /// The instance has fewer than two nodes; no tour exists.
    TooFewNodes {
        /// Node count supplied.
        n: usize,
    },

    /// A distance entry is negative.
    NegativeDistance {
        /// Source node.
        from: usize,
        /// Target node.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// A distance entry is NaN or infinite.
    NonFiniteDistance {
        /// Source node.
        from: usize,
        /// Target node.
        to: usize,
        /// Offending value.
        value: f64,
    },
}

impl fmt::Display for AcoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcoError::NotSquare {
                row,
                expected,
                actual,
            } => write!(
                f,
                "distance matrix is not square: row {row} has {actual} entries, expected {expected}"
            ),
            AcoError::TooFewNodes { n } => {
                write!(f, "instance needs at least 2 nodes, got {n}")
            }
            AcoError::NegativeDistance { from, to, value } => {
                write!(f, "negative distance {value} at ({from}, {to})")
            }
            AcoError::NonFiniteDistance { from, to, value } => {
                write!(f, "non-finite distance {value} at ({from}, {to})")
            }
        }
    }
}

impl std::error::Error for AcoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_not_square() {
        let err = AcoError::NotSquare {
            row: 2,
            expected: 4,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("not square"));
        assert!(msg.contains("row 2"));
    }

    #[test]
    fn test_display_negative() {
        let err = AcoError::NegativeDistance {
            from: 1,
            to: 0,
            value: -3.0,
        };
        assert!(err.to_string().contains("negative distance"));
    }
}
