//! Pairwise geodesic distances over a surface mesh.
//!
//! Pipeline: triangle edges weighted by Euclidean length, optional vertex
//! subset, dense adjacency with a sentinel for missing edges, then
//! in-place Floyd-Warshall relaxation. Distances follow mesh edges only,
//! so they over-estimate the true surface geodesic.

use serde::{Deserialize, Serialize};

use crate::algs::floyd_warshall::{check_shortest_paths, relax_with};
use crate::config::{DistanceConfig, check_sentinel};
use crate::data::dense::DenseMatrix;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshGeodesicError;
use crate::mesh_graph::edge_length_graph;
use crate::topology::surface::SurfaceMesh;

/// Converged distances between the selected vertices of a mesh.
///
/// Deserialization re-runs the sentinel and [`DebugInvariants`] checks, so a
/// loaded matrix answers queries on the same terms as a computed one. The
/// triangle-inequality check makes loading O(n³).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistanceRepr")]
pub struct DistanceMatrix {
    matrix: DenseMatrix<f64>,
    sentinel: f64,
    /// Local index -> mesh vertex id.
    vertices: Vec<usize>,
}

#[derive(Deserialize)]
struct DistanceRepr {
    matrix: DenseMatrix<f64>,
    sentinel: f64,
    vertices: Vec<usize>,
}

impl TryFrom<DistanceRepr> for DistanceMatrix {
    type Error = MeshGeodesicError;

    fn try_from(repr: DistanceRepr) -> Result<Self, Self::Error> {
        check_sentinel(repr.sentinel)?;
        DistanceMatrix {
            matrix: repr.matrix,
            sentinel: repr.sentinel,
            vertices: repr.vertices,
        }
        .into_checked()
    }
}

impl DistanceMatrix {
    /// Number of vertices covered.
    #[inline]
    pub fn dim(&self) -> usize {
        self.matrix.dim()
    }

    /// Shortest edge-path length between local indices `i` and `j`.
    ///
    /// Unreachable pairs report the sentinel.
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> Option<f64> {
        self.matrix.get(i, j)
    }

    /// Whether a path exists between local indices `i` and `j`.
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.distance(i, j).is_some_and(|d| d < self.sentinel)
    }

    /// Ordered pairs `(i, j)`, `i != j`, with no connecting path.
    pub fn n_unreachable_pairs(&self) -> usize {
        self.matrix
            .rows()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, &d)| i != j && d >= self.sentinel)
                    .count()
            })
            .sum()
    }

    /// Local index of mesh vertex `vertex`, if it was selected.
    pub fn local_index(&self, vertex: usize) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// Mesh vertex id of every row, in row order.
    #[inline]
    pub fn vertex_order(&self) -> &[usize] {
        &self.vertices
    }

    #[inline]
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    #[inline]
    pub fn as_matrix(&self) -> &DenseMatrix<f64> {
        &self.matrix
    }

    pub fn into_inner(self) -> DenseMatrix<f64> {
        self.matrix
    }
}

impl DebugInvariants for DistanceMatrix {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "DistanceMatrix");
    }

    fn validate_invariants(&self) -> Result<(), MeshGeodesicError> {
        if self.vertices.len() != self.matrix.dim() {
            return Err(MeshGeodesicError::InvariantViolation(format!(
                "{} vertex ids for a {}x{} matrix",
                self.vertices.len(),
                self.matrix.dim(),
                self.matrix.dim()
            )));
        }
        if !self.matrix.is_symmetric(0.0) {
            return Err(MeshGeodesicError::InvariantViolation(
                "mesh distances must be symmetric".into(),
            ));
        }
        check_shortest_paths(&self.matrix)
    }
}

/// All pairwise edge-path distances over `mesh`.
///
/// With `verts`, only those vertices (and the edges between them) take
/// part; row `i` of the result is `verts[i]`. Keep the selection small:
/// the relaxation is O(n³) in time and the result O(n²) in memory.
pub fn mesh_all_distances(
    mesh: &SurfaceMesh,
    verts: Option<&[usize]>,
    cfg: &DistanceConfig,
) -> Result<DistanceMatrix, MeshGeodesicError> {
    cfg.validate()?;
    let graph = edge_length_graph(mesh);
    let graph = match verts {
        Some(verts) => graph.subgraph(verts)?,
        None => graph,
    };

    let total = graph.total_weight();
    if total >= cfg.sentinel {
        log::warn!(
            "total edge length {total} reaches sentinel {}; long paths may read as unreachable",
            cfg.sentinel
        );
    }

    let mut matrix = graph.to_dense_adjacency(cfg.sentinel);
    matrix.debug_assert_invariants();
    relax_with(
        &mut matrix,
        &DistanceConfig {
            check_invariants: false,
            ..*cfg
        },
    )?;

    let out = DistanceMatrix {
        matrix,
        sentinel: cfg.sentinel,
        vertices: graph.order,
    };
    if cfg.check_invariants {
        out.into_checked()
    } else {
        Ok(out)
    }
}

/// A surface together with the distances between all of its vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDistances {
    pub mesh: SurfaceMesh,
    pub distances: DistanceMatrix,
}

/// Compute distances over every vertex of `mesh` and keep both together.
pub fn surface_distances(
    mesh: SurfaceMesh,
    cfg: &DistanceConfig,
) -> Result<SurfaceDistances, MeshGeodesicError> {
    log::info!(
        "computing surface distances: {} vertices, {} triangles",
        mesh.n_vertices(),
        mesh.n_triangles()
    );
    let distances = mesh_all_distances(&mesh, None, cfg)?;
    Ok(SurfaceDistances { mesh, distances })
}
