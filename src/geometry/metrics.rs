//! Euclidean metrics on vertex coordinates.
//!
//! Points are `[x, y, z]`; planar meshes use `z = 0`.

use crate::mesh_error::MeshGeodesicError;

/// Length of the straight segment between `a` and `b`.
#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    norm(sub(b, a))
}

/// Unsigned area of the triangle `(a, b, c)`.
pub fn triangle_area(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    0.5 * norm(cross(sub(b, a), sub(c, a)))
}

/// Fail on the first point with a NaN or infinite coordinate.
pub fn check_finite(points: &[[f64; 3]]) -> Result<(), MeshGeodesicError> {
    for (idx, p) in points.iter().enumerate() {
        if p.iter().any(|x| !x.is_finite()) {
            return Err(MeshGeodesicError::InvalidGeometry(format!(
                "vertex {idx} has non-finite coordinates {p:?}"
            )));
        }
    }
    Ok(())
}

#[inline]
pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}
