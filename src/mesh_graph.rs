//! Edge-length graph of a surface mesh in CSR form.
//!
//! Every mesh vertex is a graph vertex; every triangle side is an
//! undirected edge weighted by its Euclidean length. The graph can be
//! restricted to a vertex subset and densified into the adjacency matrix
//! consumed by [`floyd_warshall`](crate::algs::floyd_warshall::floyd_warshall).

use crate::data::dense::DenseMatrix;
use crate::geometry::metrics::distance;
use crate::mesh_error::MeshGeodesicError;
use crate::topology::surface::SurfaceMesh;

/// CSR-style symmetric, self-free adjacency with `f64` edge lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGraph {
    /// CSR offsets into `adjncy` for each vertex.
    pub xadj: Vec<usize>,
    /// CSR adjacency list (local indices), sorted within each row.
    pub adjncy: Vec<usize>,
    /// Local index -> original mesh vertex id.
    pub order: Vec<usize>,
    /// Per-edge lengths aligned with `adjncy`.
    pub weights: Vec<f64>,
}

impl MeshGraph {
    /// Return the neighbor index slice for vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Return the edge lengths aligned with [`neighbors`](Self::neighbors).
    #[inline]
    pub fn neighbor_weights(&self, i: usize) -> &[f64] {
        &self.weights[self.xadj[i]..self.xadj[i + 1]]
    }

    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn n_edges(&self) -> usize {
        self.adjncy.len() / 2
    }

    /// Stored length of edge `(i, j)`, if the edge exists.
    pub fn weight(&self, i: usize, j: usize) -> Option<f64> {
        let nbrs = self.neighbors(i);
        nbrs.binary_search(&j)
            .ok()
            .map(|pos| self.neighbor_weights(i)[pos])
    }

    /// Sum of all undirected edge lengths.
    ///
    /// Upper bound on any shortest path in the graph.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum::<f64>() / 2.0
    }

    /// Restrict to `verts` (local indices of `self`), in the given order.
    ///
    /// Local index `i` of the result corresponds to `verts[i]`; only edges
    /// with both endpoints selected survive.
    pub fn subgraph(&self, verts: &[usize]) -> Result<MeshGraph, MeshGeodesicError> {
        let n = self.n_vertices();
        let mut local: Vec<Option<usize>> = vec![None; n];
        for (new_idx, &v) in verts.iter().enumerate() {
            let slot = local
                .get_mut(v)
                .ok_or(MeshGeodesicError::VertexOutOfRange { vertex: v, len: n })?;
            if slot.is_some() {
                return Err(MeshGeodesicError::DuplicateVertex(v));
            }
            *slot = Some(new_idx);
        }

        let mut edges = Vec::new();
        for (new_i, &v) in verts.iter().enumerate() {
            for (&u, &w) in self.neighbors(v).iter().zip(self.neighbor_weights(v)) {
                if let Some(new_j) = local[u] {
                    if new_i < new_j {
                        edges.push((new_i, new_j, w));
                    }
                }
            }
        }
        let order = verts.iter().map(|&v| self.order[v]).collect();
        Ok(build_symmetric_csr(order, edges))
    }

    /// Dense adjacency for the relaxation kernel.
    ///
    /// Every zero entry, structurally absent or a stored zero-length edge,
    /// becomes `sentinel`; the diagonal is then reset to zero.
    pub fn to_dense_adjacency(&self, sentinel: f64) -> DenseMatrix<f64> {
        let n = self.n_vertices();
        let mut dense = DenseMatrix::zeros(n);
        for i in 0..n {
            for (&j, &w) in self.neighbors(i).iter().zip(self.neighbor_weights(i)) {
                dense[(i, j)] = w;
            }
        }
        for x in dense.as_mut_slice() {
            if *x == 0.0 {
                *x = sentinel;
            }
        }
        for i in 0..n {
            dense[(i, i)] = 0.0;
        }
        dense
    }
}

/// Build the edge-length graph of `mesh`.
///
/// Local indices equal mesh vertex ids; isolated vertices (in no
/// triangle) become vertices without neighbors.
pub fn edge_length_graph(mesh: &SurfaceMesh) -> MeshGraph {
    let points = mesh.points();
    let edges = mesh
        .edges()
        .into_iter()
        .map(|(a, b)| (a, b, distance(points[a], points[b])));
    let graph = build_symmetric_csr((0..mesh.n_vertices()).collect(), edges);
    log::debug!(
        "edge-length graph: {} vertices, {} edges",
        graph.n_vertices(),
        graph.n_edges()
    );
    graph
}

/// Assemble CSR from undirected edges `(i, j, w)` with `i != j`, each listed once.
fn build_symmetric_csr(
    order: Vec<usize>,
    edges: impl IntoIterator<Item = (usize, usize, f64)>,
) -> MeshGraph {
    let n = order.len();
    if n == 0 {
        return MeshGraph {
            xadj: vec![0],
            adjncy: Vec::new(),
            order,
            weights: Vec::new(),
        };
    }

    let mut neigh: Vec<Vec<(usize, f64)>> = vec![Vec::new(); n];
    for (i, j, w) in edges {
        neigh[i].push((j, w));
        neigh[j].push((i, w));
    }

    let mut xadj = Vec::with_capacity(n + 1);
    let mut adjncy = Vec::new();
    let mut weights = Vec::new();
    xadj.push(0);
    for mut row in neigh {
        row.sort_by_key(|(idx, _)| *idx);
        adjncy.extend(row.iter().map(|(idx, _)| *idx));
        weights.extend(row.iter().map(|(_, w)| *w));
        xadj.push(adjncy.len());
    }

    MeshGraph {
        xadj,
        adjncy,
        order,
        weights,
    }
}
