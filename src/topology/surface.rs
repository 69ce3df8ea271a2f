//! Triangulated surface: vertex coordinates plus triangle connectivity.
//!
//! This is the hand-off format from whatever produces the surface (a
//! cortical source space, a mesh generator, a file reader). Indices in
//! `tris` refer to positions in `points`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geometry::metrics::{check_finite, triangle_area};
use crate::mesh_error::MeshGeodesicError;

/// Vertex positions and triangles of a surface mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurfaceRepr")]
pub struct SurfaceMesh {
    points: Vec<[f64; 3]>,
    tris: Vec<[usize; 3]>,
}

#[derive(Deserialize)]
struct SurfaceRepr {
    points: Vec<[f64; 3]>,
    tris: Vec<[usize; 3]>,
}

impl TryFrom<SurfaceRepr> for SurfaceMesh {
    type Error = MeshGeodesicError;

    fn try_from(repr: SurfaceRepr) -> Result<Self, Self::Error> {
        SurfaceMesh::new(repr.points, repr.tris)
    }
}

impl SurfaceMesh {
    /// Validate and wrap mesh data.
    ///
    /// Every triangle index must address a point, and every coordinate must
    /// be finite.
    pub fn new(points: Vec<[f64; 3]>, tris: Vec<[usize; 3]>) -> Result<Self, MeshGeodesicError> {
        check_finite(&points)?;
        let len = points.len();
        if let Some(&vertex) = tris.iter().flatten().find(|&&v| v >= len) {
            return Err(MeshGeodesicError::VertexOutOfRange { vertex, len });
        }
        Ok(Self { points, tris })
    }

    #[inline]
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }

    #[inline]
    pub fn tris(&self) -> &[[usize; 3]] {
        &self.tris
    }

    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn n_triangles(&self) -> usize {
        self.tris.len()
    }

    /// Unique undirected edges `(a, b)` with `a < b`, sorted.
    ///
    /// Collapsed triangle sides (`a == b`) are dropped.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.tris
            .iter()
            .flat_map(|t| t.iter().copied().tuple_combinations::<(usize, usize)>())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.tris
            .iter()
            .map(|&[a, b, c]| triangle_area(self.points[a], self.points[b], self.points[c]))
            .sum()
    }
}
