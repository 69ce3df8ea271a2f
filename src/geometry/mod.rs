//! Geometry utilities for mesh-geodesic.
//!
//! Euclidean edge lengths and areas over raw vertex coordinates.

pub mod metrics;
