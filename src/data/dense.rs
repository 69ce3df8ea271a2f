//! Dense, row-major square matrix used for adjacency and distance data.
//!
//! Squareness is a type invariant: every constructor checks it, including
//! deserialization, so the relaxation kernels can index `n × n` without
//! re-validating shape.

use std::ops::{Index, IndexMut};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshGeodesicError;

/// Square `n × n` matrix stored row-major in a single `Vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DenseRepr<T>")]
#[serde(bound(deserialize = "T: Deserialize<'de> + Copy"))]
pub struct DenseMatrix<T> {
    n: usize,
    data: Vec<T>,
}

#[derive(Deserialize)]
struct DenseRepr<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Copy> TryFrom<DenseRepr<T>> for DenseMatrix<T> {
    type Error = MeshGeodesicError;

    fn try_from(repr: DenseRepr<T>) -> Result<Self, Self::Error> {
        DenseMatrix::from_vec(repr.n, repr.data)
    }
}

impl<T: Copy> DenseMatrix<T> {
    /// `n × n` matrix with every entry set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    /// Wrap row-major `data`; fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<T>) -> Result<Self, MeshGeodesicError> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(MeshGeodesicError::LengthMismatch {
                n,
                len: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Build from nested rows; every row must have exactly `rows.len()` entries.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, MeshGeodesicError>
    where
        R: AsRef<[T]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in &rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(MeshGeodesicError::NonSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry `(i, j)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Overwrite entry `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let n = self.n;
        &mut self.data[i * n..(i + 1) * n]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks(self.n.max(1))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Float> DenseMatrix<T> {
    /// `n × n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self::filled(n, T::zero())
    }

    /// `|a[i][j] - a[j][i]| <= tol` for every pair.
    pub fn is_symmetric(&self, tol: T) -> bool {
        (0..self.n).all(|i| {
            ((i + 1)..self.n).all(|j| {
                let (a, b) = (self[(i, j)], self[(j, i)]);
                a == b || (a - b).abs() <= tol
            })
        })
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(j < self.n, "column {j} out of range for {0}x{0} matrix", self.n);
        &self.data[i * self.n + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(j < self.n, "column {j} out of range for {0}x{0} matrix", self.n);
        &mut self.data[i * self.n + j]
    }
}

impl<T> DebugInvariants for DenseMatrix<T> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "DenseMatrix");
    }

    fn validate_invariants(&self) -> Result<(), MeshGeodesicError> {
        if self.n.checked_mul(self.n) != Some(self.data.len()) {
            return Err(MeshGeodesicError::InvariantViolation(format!(
                "storage holds {} entries for a {}x{} matrix",
                self.data.len(),
                self.n,
                self.n
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = DenseMatrix::<f64>::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert_eq!(err, MeshGeodesicError::NonSquare { rows: 2, cols: 1 });
    }

    #[test]
    fn from_rows_rejects_rectangular_input() {
        let rows = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]];
        let err = DenseMatrix::<f64>::from_rows(rows).unwrap_err();
        assert_eq!(err, MeshGeodesicError::NonSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(DenseMatrix::from_vec(2, vec![0.0f64; 4]).is_ok());
        assert_eq!(
            DenseMatrix::from_vec(2, vec![0.0f64; 5]).unwrap_err(),
            MeshGeodesicError::LengthMismatch { n: 2, len: 5 }
        );
    }

    #[test]
    fn rows_and_indexing_agree() {
        let m = DenseMatrix::<f64>::from_rows([[0.0, 1.0], [2.0, 0.0]]).unwrap();
        assert_eq!(m.dim(), 2);
        assert_eq!(m[(1, 0)], 2.0);
        assert_eq!(m.row(0), &[0.0, 1.0]);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.clone().into_rows(), vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert!(!m.is_symmetric(0.0));
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m: DenseMatrix<f64> = DenseMatrix::zeros(0);
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
        assert!(m.is_symmetric(0.0));
    }

    #[test]
    fn deserialize_rejects_bad_shape() {
        let ok: DenseMatrix<f64> = serde_json::from_str(r#"{"n":1,"data":[0.0]}"#).unwrap();
        assert_eq!(ok.dim(), 1);
        let bad: Result<DenseMatrix<f64>, _> = serde_json::from_str(r#"{"n":2,"data":[0.0]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn dimension_whose_square_overflows_is_rejected() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            DenseMatrix::<f64>::from_vec(huge, Vec::new()).unwrap_err(),
            MeshGeodesicError::LengthMismatch { n: huge, len: 0 }
        );
        let json = format!(r#"{{"n":{huge},"data":[]}}"#);
        let bad: Result<DenseMatrix<f64>, _> = serde_json::from_str(&json);
        assert!(bad.is_err());
        let wraps: Result<DenseMatrix<f64>, _> =
            serde_json::from_str(r#"{"n":4294967296,"data":[]}"#);
        assert!(wraps.is_err());
    }
}
