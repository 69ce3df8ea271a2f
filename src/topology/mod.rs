//! Mesh connectivity types.

pub mod surface;
