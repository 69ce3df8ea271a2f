#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-geodesic
//!
//! mesh-geodesic computes all-pairs edge-path ("geodesic") distances over
//! triangulated surface meshes, such as cortical source spaces. Each triangle
//! side becomes a graph edge weighted by its Euclidean length, and the dense
//! distance matrix is obtained by in-place Floyd-Warshall relaxation.
//!
//! ## Features
//! - Validated [`SurfaceMesh`](topology::surface::SurfaceMesh) input and a CSR
//!   [`MeshGraph`](mesh_graph::MeshGraph) of edge lengths
//! - Vertex subsetting to bound the O(n³) relaxation
//! - Generic relaxation kernel over any `num_traits::Float`
//! - Optional Rayon-parallel kernel (`rayon` feature), bit-identical to the
//!   serial one
//! - Fail-fast validation: NaN, negative weights, `-inf`, non-square input and
//!   non-zero diagonals are reported as [`MeshGeodesicError`](mesh_error::MeshGeodesicError)
//!
//! ## Sentinel
//!
//! Pairs without a direct edge start at a large finite sentinel (`1e6` by
//! default, see [`DistanceConfig`](config::DistanceConfig)) and keep it when no
//! path exists. Pick a sentinel larger than the total edge length of the mesh.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! mesh-geodesic = "0.1"
//! # Optional features:
//! # features = ["rayon"]
//! ```
//!
//! ```
//! use mesh_geodesic::prelude::*;
//!
//! let mesh = SurfaceMesh::new(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! )?;
//! let dist = mesh_all_distances(&mesh, None, &DistanceConfig::default())?;
//! assert_eq!(dist.distance(1, 3), Some(2.0));
//! # Ok::<(), MeshGeodesicError>(())
//! ```

pub mod algs;
pub mod config;
pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod mesh_graph;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use crate::algs::floyd_warshall::floyd_warshall_par;
    pub use crate::algs::floyd_warshall::{floyd_warshall, relax_with, validate_adjacency};
    pub use crate::algs::mesh_distance::{
        DistanceMatrix, SurfaceDistances, mesh_all_distances, surface_distances,
    };
    pub use crate::config::DistanceConfig;
    pub use crate::data::dense::DenseMatrix;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshGeodesicError;
    pub use crate::mesh_graph::{MeshGraph, edge_length_graph};
    pub use crate::topology::surface::SurfaceMesh;
}
