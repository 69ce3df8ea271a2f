//! Post-condition checks for matrices produced by the crate.

use crate::mesh_error::MeshGeodesicError;

/// Structures whose invariants can be checked after construction or relaxation.
pub trait DebugInvariants {
    /// Panic on a violated invariant in debug builds, or in any build with
    /// `strict-invariants` / `check-invariants` enabled.
    fn debug_assert_invariants(&self);

    /// Report the first violated invariant.
    fn validate_invariants(&self) -> Result<(), MeshGeodesicError>;

    /// Validate and hand `self` back, for use at the end of a pipeline.
    fn into_checked(self) -> Result<Self, MeshGeodesicError>
    where
        Self: Sized,
    {
        self.validate_invariants()?;
        Ok(self)
    }
}

/// Run a fallible invariant check and panic with context when checking is
/// compiled in. Expands to nothing otherwise.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[mesh-geodesic invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
