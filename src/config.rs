//! Configuration for distance computations.
//!
//! [`DistanceConfig`] is plain data: build it in code, or deserialize it
//! from whatever format the caller already uses (JSON, TOML, ...). Missing
//! fields fall back to [`DistanceConfig::default`].

use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshGeodesicError;

/// Placeholder distance for vertex pairs with no direct edge.
pub const DEFAULT_SENTINEL: f64 = 1e6;

/// Knobs for [`mesh_all_distances`](crate::algs::mesh_distance::mesh_all_distances)
/// and [`relax_with`](crate::algs::floyd_warshall::relax_with).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    /// Value stored for "no edge"; unreachable pairs keep it after relaxation.
    pub sentinel: f64,
    /// Relax the `(i, j)` pairs of each `k` step on the rayon pool.
    /// Ignored (with a warning) unless the `rayon` feature is enabled.
    pub parallel: bool,
    /// Validate the converged matrix and report violations as errors.
    pub check_invariants: bool,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            parallel: false,
            check_invariants: false,
        }
    }
}

impl DistanceConfig {
    /// Builder-style sentinel override.
    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Builder-style parallel toggle.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder-style toggle for post-convergence validation.
    pub fn with_invariant_checks(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }

    /// Reject sentinels that would corrupt the relaxation.
    ///
    /// The sentinel must compare greater than every real distance, so NaN,
    /// zero, negative values and `-inf` are refused. `+inf` is accepted.
    pub fn validate(&self) -> Result<(), MeshGeodesicError> {
        check_sentinel(self.sentinel)
    }
}

/// Shared sentinel rule for configuration and loaded distance matrices.
pub(crate) fn check_sentinel(s: f64) -> Result<(), MeshGeodesicError> {
    if s.is_nan() {
        return Err(MeshGeodesicError::InvalidSentinel("sentinel is NaN".into()));
    }
    if s <= 0.0 {
        return Err(MeshGeodesicError::InvalidSentinel(format!(
            "sentinel must be positive, got {s}"
        )));
    }
    Ok(())
}
