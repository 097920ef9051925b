//! Benchmarks for mesh-contour operations.
//!
//! Run with: cargo bench -p mesh-contour
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-contour -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-contour -- --baseline main

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_contour::{ContourParams, extract_isosurface};
use mesh_grid::{CellType, DataArray, Dataset, HEX_CORNER_OFFSETS, Point3, StructuredGrid, UnstructuredGrid};

// =============================================================================
// Test Grid Generation
// =============================================================================

/// Distance from the lattice center, sampled on an `n^3` uniform grid.
fn sphere_values(points: &[Point3<f64>], n: usize) -> Vec<f64> {
    let c = (n - 1) as f64 / 2.0;
    let center = Point3::new(c, c, c);
    points.iter().map(|p| (p - center).norm()).collect()
}

fn create_lattice(n: usize) -> Dataset {
    let grid = StructuredGrid::uniform([n, n, n], Point3::origin(), 1.0);
    let values = sphere_values(grid.points(), n);
    let grid = grid
        .with_point_data(DataArray::scalars_f64("distance", values))
        .unwrap_or_else(|e| panic!("lattice field: {e}"));
    Dataset::from(grid)
}

/// The same lattice as six tetrahedra per cube.
fn create_tetrahedra(n: usize) -> Dataset {
    const KUHN: [[usize; 4]; 6] = [
        [0, 1, 2, 6],
        [0, 1, 5, 6],
        [0, 3, 2, 6],
        [0, 3, 7, 6],
        [0, 4, 5, 6],
        [0, 4, 7, 6],
    ];

    let lattice = StructuredGrid::uniform([n, n, n], Point3::origin(), 1.0);
    let points = lattice.points().to_vec();
    let values = sphere_values(&points, n);
    let topology = *lattice.topology();

    let mut grid = UnstructuredGrid::new(points);
    for cell in 0..topology.cell_count() {
        let [i, j, k] = topology.cell_ijk(cell);
        let hex = HEX_CORNER_OFFSETS.map(|[di, dj, dk]| topology.point_id(i + di, j + dj, k + dk) as u32);
        for local in KUHN {
            let tet = local.map(|c| hex[c]);
            grid.push_cell(CellType::Tetrahedron, &tet)
                .unwrap_or_else(|e| panic!("tetrahedron: {e}"));
        }
    }
    let grid = grid
        .with_point_data(DataArray::scalars_f64("distance", values))
        .unwrap_or_else(|e| panic!("tetrahedra field: {e}"));
    Dataset::from(grid)
}

// =============================================================================
// Structured Benchmarks
// =============================================================================

fn bench_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("Structured");
    group.sample_size(20);

    for n in [32, 64, 128] {
        let dataset = create_lattice(n);
        let iso = n as f64 / 3.0;
        group.throughput(Throughput::Elements(dataset.cell_count() as u64));

        group.bench_with_input(BenchmarkId::new("serial", n), &dataset, |b, dataset| {
            let params = ContourParams::at(iso, "distance");
            b.iter(|| extract_isosurface(black_box(dataset), black_box(&params)));
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &dataset, |b, dataset| {
            let params = ContourParams::batch().with_scalars("distance").with_isovalue(iso);
            b.iter(|| extract_isosurface(black_box(dataset), black_box(&params)));
        });

        // Geometry only, no attribute interpolation.
        group.bench_with_input(BenchmarkId::new("interactive", n), &dataset, |b, dataset| {
            let params = ContourParams::interactive().with_scalars("distance").with_isovalue(iso);
            b.iter(|| extract_isosurface(black_box(dataset), black_box(&params)));
        });
    }

    group.finish();
}

// =============================================================================
// Unstructured Benchmarks
// =============================================================================

fn bench_unstructured(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unstructured");
    group.sample_size(20);

    for n in [16, 32] {
        let dataset = create_tetrahedra(n);
        let iso = n as f64 / 3.0;
        group.throughput(Throughput::Elements(dataset.cell_count() as u64));

        group.bench_with_input(BenchmarkId::new("tetrahedra_serial", n), &dataset, |b, dataset| {
            let params = ContourParams::at(iso, "distance");
            b.iter(|| extract_isosurface(black_box(dataset), black_box(&params)));
        });

        group.bench_with_input(
            BenchmarkId::new("tetrahedra_parallel", n),
            &dataset,
            |b, dataset| {
                let params = ContourParams::batch().with_scalars("distance").with_isovalue(iso);
                b.iter(|| extract_isosurface(black_box(dataset), black_box(&params)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_structured, bench_unstructured);
criterion_main!(benches);
