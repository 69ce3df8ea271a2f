//! Re-export public algorithms.

pub mod floyd_warshall;
pub mod mesh_distance;

pub use floyd_warshall::{floyd_warshall, relax_with};
pub use mesh_distance::{mesh_all_distances, surface_distances};
