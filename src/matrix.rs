//! Square matrix container and the distance-derived desirability matrix.

use crate::error::AcoError;

/// Dense n×n matrix of `f64`, stored row-major in a flat buffer.
///
/// Used for distances, pheromone levels, desirability scores, and
/// transition weights alike.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Creates an n×n matrix filled with `value`.
    pub fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Creates an n×n zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, 0.0)
    }

    /// Creates an n×n all-ones matrix.
    pub fn ones(n: usize) -> Self {
        Self::filled(n, 1.0)
    }

    /// Builds a matrix from row vectors.
    ///
    /// Fails with [`AcoError::NotSquare`] if any row's length differs from
    /// the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, AcoError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::NotSquare {
                    row: i,
                    expected: n,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Side length of the matrix.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    /// Largest entry, or 0.0 for an empty matrix.
    pub fn max_entry(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Multiplies every entry by `factor` in place.
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.data {
            *v *= factor;
        }
    }

    /// Adds `other` elementwise in place.
    ///
    /// # Panics
    /// Panics if the dimensions differ.
    pub fn add_assign(&mut self, other: &SquareMatrix) {
        assert_eq!(self.n, other.n, "matrix dimension mismatch");
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Derives the static desirability matrix from a distance matrix.
///
/// Each entry is `1 / d[i][j]` when the distance is nonzero, and exactly
/// `0.0` otherwise. Zero covers both the diagonal and any explicitly
/// zero-cost edge: such an edge is treated as *undesirable* rather than
/// free, so it is never chosen while any positively-weighted candidate
/// remains. This is a known limitation of the inverse-distance heuristic,
/// kept deliberately; callers with genuinely free edges should encode them
/// as a small positive cost instead.
pub fn desirability_matrix(distances: &SquareMatrix) -> SquareMatrix {
    let n = distances.n();
    let mut des = SquareMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let d = distances.get(i, j);
            if d != 0.0 {
                des.set(i, j, 1.0 / d);
            }
        }
    }
    des
}
