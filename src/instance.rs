//! TSP instance: a validated distance matrix.

use crate::error::AcoError;
use crate::matrix::SquareMatrix;

/// A validated TSP instance.
///
/// Wraps an n×n distance matrix that is guaranteed square, finite,
/// non-negative, and of dimension at least 2. The matrix may be asymmetric;
/// the diagonal is conventionally zero but is not enforced (self-edges are
/// never traversed by construction).
#[derive(Debug, Clone)]
pub struct TspInstance {
    distances: SquareMatrix,
}

impl TspInstance {
    /// Validates and wraps a distance matrix.
    pub fn new(distances: SquareMatrix) -> Result<Self, AcoError> {
        let n = distances.n();
        if n < 2 {
            return Err(AcoError::TooFewNodes { n });
        }
        for i in 0..n {
            for j in 0..n {
                let d = distances.get(i, j);
                if !d.is_finite() {
                    return Err(AcoError::NonFiniteDistance {
                        from: i,
                        to: j,
                        value: d,
                    });
                }
                if d < 0.0 {
                    return Err(AcoError::NegativeDistance {
                        from: i,
                        to: j,
                        value: d,
                    });
                }
            }
        }
        Ok(Self { distances })
    }

    /// Convenience constructor from row vectors.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AcoError> {
        Self::new(SquareMatrix::from_rows(rows)?)
    }

    /// Number of nodes.
    #[inline]
    pub fn n(&self) -> usize {
        self.distances.n()
    }

    /// Edge cost from node `from` to node `to`.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &SquareMatrix {
        &self.distances
    }

    /// Total length of a tour, including the closing edge back to the
    /// first node.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let mut length = 0.0;
        for pair in tour.windows(2) {
            length += self.distance(pair[0], pair[1]);
        }
        if let (Some(&last), Some(&first)) = (tour.last(), tour.first()) {
            length += self.distance(last, first);
        }
        length
    }
}
