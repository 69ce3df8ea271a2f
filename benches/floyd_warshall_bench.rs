use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_geodesic::algs::floyd_warshall::floyd_warshall;
use mesh_geodesic::algs::mesh_distance::mesh_all_distances;
use mesh_geodesic::config::DistanceConfig;
use mesh_geodesic::topology::surface::SurfaceMesh;

fn grid_mesh(side: usize) -> SurfaceMesh {
    let mut points = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            points.push([x as f64, y as f64, 0.0]);
        }
    }
    let id = |x: usize, y: usize| y * side + x;
    let mut tris = Vec::new();
    for y in 0..side - 1 {
        for x in 0..side - 1 {
            tris.push([id(x, y), id(x + 1, y), id(x + 1, y + 1)]);
            tris.push([id(x, y), id(x + 1, y + 1), id(x, y + 1)]);
        }
    }
    SurfaceMesh::new(points, tris).expect("valid grid")
}

fn bench_floyd_warshall(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd_warshall");
    group.sample_size(10);

    for &side in &[8usize, 16, 24] {
        let mesh = grid_mesh(side);
        let n = side * side;
        let cfg = DistanceConfig::default();
        let adjacency = mesh_geodesic::mesh_graph::edge_length_graph(&mesh)
            .to_dense_adjacency(cfg.sentinel);

        group.bench_with_input(BenchmarkId::new("kernel_serial", n), &n, |b, _| {
            b.iter(|| {
                let mut d = adjacency.clone();
                floyd_warshall(&mut d).expect("valid adjacency");
                black_box(d);
            });
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("kernel_parallel", n), &n, |b, _| {
            b.iter(|| {
                let mut d = adjacency.clone();
                mesh_geodesic::algs::floyd_warshall::floyd_warshall_par(&mut d)
                    .expect("valid adjacency");
                black_box(d);
            });
        });

        group.bench_with_input(BenchmarkId::new("mesh_pipeline", n), &n, |b, _| {
            b.iter(|| {
                let d = mesh_all_distances(&mesh, None, &cfg).expect("valid mesh");
                black_box(d);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_floyd_warshall);
criterion_main!(benches);
