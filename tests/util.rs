#![allow(dead_code)]
use mesh_geodesic::{data::dense::DenseMatrix, topology::surface::SurfaceMesh};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const SENTINEL: f64 = 1e6;

/// Planar `nx × ny` vertex grid, unit spacing, each square split along the
/// `(x, y) -> (x + 1, y + 1)` diagonal. Vertex `(x, y)` has id `y * nx + x`.
pub fn grid_mesh(nx: usize, ny: usize) -> SurfaceMesh {
    let mut points = Vec::with_capacity(nx * ny);
    for y in 0..ny {
        for x in 0..nx {
            points.push([x as f64, y as f64, 0.0]);
        }
    }
    let id = |x: usize, y: usize| y * nx + x;
    let mut tris = Vec::new();
    for y in 0..ny.saturating_sub(1) {
        for x in 0..nx.saturating_sub(1) {
            tris.push([id(x, y), id(x + 1, y), id(x + 1, y + 1)]);
            tris.push([id(x, y), id(x + 1, y + 1), id(x, y + 1)]);
        }
    }
    SurfaceMesh::new(points, tris).unwrap()
}

/// Edge-path distance between grid vertices on [`grid_mesh`].
pub fn grid_distance(a: (usize, usize), b: (usize, usize)) -> f64 {
    let dx = a.0 as i64 - b.0 as i64;
    let dy = a.1 as i64 - b.1 as i64;
    if dx.signum() == dy.signum() {
        // diagonals run with the split
        let (lo, hi) = (dx.abs().min(dy.abs()), dx.abs().max(dy.abs()));
        lo as f64 * 2f64.sqrt() + (hi - lo) as f64
    } else {
        (dx.abs() + dy.abs()) as f64
    }
}

/// Path graph `0 - 1 - ... - (n-1)` with unit edges and sentinel elsewhere.
pub fn path_adjacency(n: usize) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::filled(n, SENTINEL);
    for i in 0..n {
        m[(i, i)] = 0.0;
        if i + 1 < n {
            m[(i, i + 1)] = 1.0;
            m[(i + 1, i)] = 1.0;
        }
    }
    m
}

/// Random symmetric adjacency: each pair gets an edge with probability
/// `density`, weight a multiple of 1/8 in `[0.125, 10)` so path sums are exact.
pub fn random_adjacency(n: usize, density: f64, seed: u64) -> DenseMatrix<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut m = DenseMatrix::filled(n, SENTINEL);
    for i in 0..n {
        m[(i, i)] = 0.0;
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                let w = f64::from(rng.gen_range(1u32..80)) / 8.0;
                m[(i, j)] = w;
                m[(j, i)] = w;
            }
        }
    }
    m
}

/// Assert `d[i][j] <= d[i][k] + d[k][j]` for every triple, with rounding slack.
pub fn assert_triangle_inequality(d: &DenseMatrix<f64>) {
    let n = d.dim();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = d[(i, k)] + d[(k, j)];
                assert!(
                    d[(i, j)] <= via * (1.0 + 1e-12),
                    "d[{i}][{j}] = {} > d[{i}][{k}] + d[{k}][{j}] = {via}",
                    d[(i, j)]
                );
            }
        }
    }
}
