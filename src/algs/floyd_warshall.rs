//! All-pairs shortest paths by Floyd-Warshall relaxation, in place.
//!
//! The input is a dense adjacency matrix: zero diagonal, direct edge weights
//! where edges exist, and a large sentinel everywhere else. After
//! relaxation entry `(i, j)` is the length of the shortest edge path from
//! `i` to `j`; pairs with no path keep the sentinel.
//!
//! Update rule, for `k` then `i` then `j` ascending:
//!
//! ```text
//! cand = d[i][k] + d[k][j]
//! if cand != 0 && i != j && (cand < d[i][j] || d[i][j] == 0) { d[i][j] = cand }
//! ```
//!
//! An off-diagonal zero therefore means "not resolved yet" and is replaced
//! by the first non-zero candidate.
//!
//! Row `k` and column `k` are fixed points of step `k` (the diagonal stays
//! zero), so the rows of one step may be relaxed in any order or in
//! parallel. Steps themselves must run in sequence.

use num_traits::Float;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::config::DistanceConfig;
use crate::data::dense::DenseMatrix;
use crate::mesh_error::MeshGeodesicError;

/// Reject adjacency input that would silently produce wrong distances.
///
/// Refuses NaN, `-inf`, negative weights and a non-zero diagonal. `+inf`
/// is accepted as a "no edge" placeholder.
pub fn validate_adjacency<T: Float>(dist: &DenseMatrix<T>) -> Result<(), MeshGeodesicError> {
    for (row, values) in dist.rows().enumerate() {
        for (col, &x) in values.iter().enumerate() {
            if x.is_nan() {
                return Err(MeshGeodesicError::NotANumber { row, col });
            }
            if x == T::neg_infinity() {
                return Err(MeshGeodesicError::NegativeInfinity { row, col });
            }
            if x < T::zero() {
                return Err(MeshGeodesicError::NegativeWeight { row, col });
            }
            if row == col && x != T::zero() {
                return Err(MeshGeodesicError::NonZeroDiagonal { index: row });
            }
        }
    }
    Ok(())
}

/// Relax `dist` in place on the calling thread.
pub fn floyd_warshall<T: Float>(dist: &mut DenseMatrix<T>) -> Result<(), MeshGeodesicError> {
    validate_adjacency(dist)?;
    let n = dist.dim();
    log::info!("running Floyd-Warshall over {n} vertices");

    let mut row_k = vec![T::zero(); n];
    for k in 0..n {
        row_k.copy_from_slice(dist.row(k));
        for i in 0..n {
            relax_row(i, k, dist.row_mut(i), &row_k);
        }
    }

    log::info!("Floyd-Warshall finished ({n} vertices)");
    Ok(())
}

/// Relax `dist` in place, spreading the rows of each step over the rayon pool.
///
/// Produces exactly the same matrix as [`floyd_warshall`].
#[cfg(feature = "rayon")]
pub fn floyd_warshall_par<T>(dist: &mut DenseMatrix<T>) -> Result<(), MeshGeodesicError>
where
    T: Float + Send + Sync,
{
    validate_adjacency(dist)?;
    let n = dist.dim();
    if n == 0 {
        return Ok(());
    }
    log::info!(
        "running Floyd-Warshall over {n} vertices on {} threads",
        rayon::current_num_threads()
    );

    let mut row_k = vec![T::zero(); n];
    for k in 0..n {
        row_k.copy_from_slice(dist.row(k));
        let pivot = row_k.as_slice();
        // for_each returns only once every row of step k is relaxed
        dist.as_mut_slice()
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row_i)| relax_row(i, k, row_i, pivot));
    }

    log::info!("Floyd-Warshall finished ({n} vertices)");
    Ok(())
}

/// Relax `dist` per `cfg`: serial or parallel, optionally validating the result.
pub fn relax_with<T>(
    dist: &mut DenseMatrix<T>,
    cfg: &DistanceConfig,
) -> Result<(), MeshGeodesicError>
where
    T: Float + Send + Sync,
{
    run_kernel(dist, cfg.parallel)?;
    if cfg.check_invariants {
        check_shortest_paths(dist)?;
    }
    Ok(())
}

#[cfg(feature = "rayon")]
fn run_kernel<T>(dist: &mut DenseMatrix<T>, parallel: bool) -> Result<(), MeshGeodesicError>
where
    T: Float + Send + Sync,
{
    if parallel {
        floyd_warshall_par(dist)
    } else {
        floyd_warshall(dist)
    }
}

#[cfg(not(feature = "rayon"))]
fn run_kernel<T>(dist: &mut DenseMatrix<T>, parallel: bool) -> Result<(), MeshGeodesicError>
where
    T: Float + Send + Sync,
{
    if parallel {
        log::warn!(
            "parallel relaxation requested but the `rayon` feature is disabled; running serially"
        );
    }
    floyd_warshall(dist)
}

/// Check the post-conditions of a converged distance matrix.
///
/// Zero diagonal, no NaN or negative entries, and the triangle inequality
/// `d[i][j] <= d[i][k] + d[k][j]` up to rounding. O(n³).
pub fn check_shortest_paths<T: Float>(dist: &DenseMatrix<T>) -> Result<(), MeshGeodesicError> {
    let n = dist.dim();
    for i in 0..n {
        if dist[(i, i)] != T::zero() {
            return Err(MeshGeodesicError::InvariantViolation(format!(
                "diagonal entry {i} is not zero"
            )));
        }
    }
    for (i, row) in dist.rows().enumerate() {
        if let Some(j) = row.iter().position(|&x| x.is_nan() || x < T::zero()) {
            return Err(MeshGeodesicError::InvariantViolation(format!(
                "entry ({i}, {j}) is negative or NaN"
            )));
        }
    }

    let slack = T::epsilon() * T::from(16.0).unwrap_or_else(T::one);
    for k in 0..n {
        let row_k = dist.row(k);
        for i in 0..n {
            let d_ik = dist[(i, k)];
            for (j, (&d_ij, &d_kj)) in dist.row(i).iter().zip(row_k).enumerate() {
                let via = d_ik + d_kj;
                if d_ij > via + via * slack {
                    return Err(MeshGeodesicError::InvariantViolation(format!(
                        "triangle inequality fails for ({i}, {j}) via {k}"
                    )));
                }
            }
        }
    }
    Ok(())
}

#[inline]
fn relax_row<T: Float>(i: usize, k: usize, row_i: &mut [T], row_k: &[T]) {
    // unchanged during this call: d[k][k] == 0
    let d_ik = row_i[k];
    for (j, (d_ij, &d_kj)) in row_i.iter_mut().zip(row_k).enumerate() {
        let cand = d_ik + d_kj;
        if cand != T::zero() && i != j && (cand < *d_ij || *d_ij == T::zero()) {
            *d_ij = cand;
        }
    }
}
