//! Matrix storage shared by the adjacency and distance stages.

pub mod dense;
