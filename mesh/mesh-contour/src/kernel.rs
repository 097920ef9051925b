//! Table-driven contouring of a single zoo cell.

use mesh_grid::{HEX_CORNER_OFFSETS, StructuredTopology};

use crate::accumulator::SurfaceAccumulator;
use crate::scalar::{ScalarAccessor, StructuredAccessor};
use crate::tables::{CaseTable, CellShape};

/// Corner mask of a cell: bit `i` set when corner `i` is inside.
#[inline]
pub(crate) fn case_index(distances: &[f64]) -> usize {
    distances
        .iter()
        .enumerate()
        .fold(0, |mask, (i, &d)| if d >= 0.0 { mask | 1 << i } else { mask })
}

/// Contour one cell given its global corner ids and corner distances.
///
/// Returns the number of triangles emitted.
pub(crate) fn contour_cell(
    table: &CaseTable,
    cell: usize,
    corners: &[usize],
    distances: &[f64],
    acc: &mut SurfaceAccumulator<'_>,
) -> usize {
    let triangles = table.triangles(case_index(distances));
    if triangles.is_empty() {
        return 0;
    }

    // Each crossed edge is resolved once per cell.
    let mut resolved = [u32::MAX; 12];
    for triangle in triangles {
        let ids = triangle.map(|edge| {
            let edge = usize::from(edge);
            if resolved[edge] == u32::MAX {
                let [c0, c1] = table.edges[edge].map(usize::from);
                resolved[edge] = acc.edge_point(corners[c0], corners[c1], distances[c0], distances[c1]);
            }
            resolved[edge]
        });
        acc.push_triangle(ids, cell);
    }
    triangles.len()
}

/// Contour an explicit zoo cell, reading corner distances through `scalars`.
pub(crate) fn contour_explicit<A: ScalarAccessor>(
    table: &CaseTable,
    cell: usize,
    points: &[u32],
    scalars: &A,
    acc: &mut SurfaceAccumulator<'_>,
) -> usize {
    let mut corners = [0usize; 8];
    let mut distances = [0.0f64; 8];
    let n = table.corners;
    for (slot, &p) in points.iter().take(n).enumerate() {
        corners[slot] = p as usize;
        distances[slot] = scalars.distance(p as usize);
    }
    contour_cell(table, cell, &corners[..n], &distances[..n], acc)
}

/// Contour lattice cell `cell` as a hexahedron synthesized from its
/// coordinates.
pub(crate) fn contour_lattice<A: ScalarAccessor>(
    topology: &StructuredTopology,
    cell: usize,
    scalars: &StructuredAccessor<A>,
    acc: &mut SurfaceAccumulator<'_>,
) -> usize {
    let Some(table) = CellShape::Hexahedron.table() else {
        return 0;
    };
    let ijk = topology.cell_ijk(cell);
    let mut corners = [0usize; 8];
    let mut distances = [0.0f64; 8];
    for (slot, &offset) in HEX_CORNER_OFFSETS.iter().enumerate() {
        corners[slot] = scalars.flat(ijk, offset);
        distances[slot] = scalars.distance_at(ijk, offset);
    }
    contour_cell(table, cell, &corners, &distances, acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::PointLayout;
    use crate::scalar::TypedAccessor;
    use approx::assert_relative_eq;
    use mesh_grid::{CellType, DataArray, Dataset, Point3, StructuredGrid, UnstructuredGrid};

    fn unit_tet(values: Vec<f64>) -> Dataset {
        let mut grid = UnstructuredGrid::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]);
        grid.push_cell(CellType::Tetrahedron, &[0, 1, 2, 3]).unwrap();
        Dataset::from(grid.with_point_data(DataArray::scalars_f64("s", values)).unwrap())
    }

    #[test]
    fn test_case_index() {
        assert_eq!(case_index(&[-1.0, 0.0, 1.0, -0.5]), 0b0110);
        assert_eq!(case_index(&[f64::NAN, 1.0]), 0b10);
    }

    #[test]
    fn test_single_tet_corner() {
        let values = vec![1.0, 0.0, 0.0, 0.0];
        let ds = unit_tet(values.clone());
        let layout = PointLayout::new(ds.point_data(), false);
        let mut acc = SurfaceAccumulator::new(&ds, &layout, 1);
        let scalars = TypedAccessor::new(&values, 0.5, None);
        let table = CellShape::Tetrahedron.table().unwrap();

        let count = contour_explicit(table, 0, &[0, 1, 2, 3], &scalars, &mut acc);
        assert_eq!(count, 1);

        let partial = acc.finish();
        assert_eq!(partial.points.len(), 3);
        assert_eq!(partial.triangle_cells, vec![0]);
        for p in &partial.points {
            assert_relative_eq!(p.x + p.y + p.z, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uniform_cell_is_empty() {
        let values = vec![2.0; 4];
        let ds = unit_tet(values.clone());
        let layout = PointLayout::new(ds.point_data(), false);
        let mut acc = SurfaceAccumulator::new(&ds, &layout, 1);
        let scalars = TypedAccessor::new(&values, 0.5, None);
        let table = CellShape::Tetrahedron.table().unwrap();

        assert_eq!(contour_explicit(table, 0, &[0, 1, 2, 3], &scalars, &mut acc), 0);
        assert!(acc.finish().points.is_empty());
    }

    #[test]
    fn test_lattice_hex_mid_plane() {
        let grid = StructuredGrid::uniform([2, 2, 2], Point3::origin(), 1.0);
        let values: Vec<f64> = grid.points().iter().map(|p| p.z).collect();
        let topology = *grid.topology();
        let ds = Dataset::from(grid);
        let layout = PointLayout::new(ds.point_data(), false);
        let mut acc = SurfaceAccumulator::new(&ds, &layout, 1);
        let scalars = StructuredAccessor::new(TypedAccessor::new(&values, 0.5, None), &topology);

        assert_eq!(contour_lattice(&topology, 0, &scalars, &mut acc), 2);
        let partial = acc.finish();
        assert_eq!(partial.points.len(), 4);
        for p in &partial.points {
            assert_relative_eq!(p.z, 0.5);
        }
    }

    #[test]
    fn test_lattice_cell_reads_its_own_corners() {
        let grid = StructuredGrid::uniform([3, 3, 3], Point3::origin(), 1.0);
        let values: Vec<f64> = grid.points().iter().map(|p| p.x).collect();
        let topology = *grid.topology();
        let ds = Dataset::from(grid);
        let layout = PointLayout::new(ds.point_data(), false);
        let mut acc = SurfaceAccumulator::new(&ds, &layout, 2);
        let scalars = StructuredAccessor::new(TypedAccessor::new(&values, 1.5, None), &topology);

        // Cell 0 spans x in [0, 1]; cell 5 is (1, 0, 1) and spans x in [1, 2].
        assert_eq!(contour_lattice(&topology, 0, &scalars, &mut acc), 0);
        assert_eq!(contour_lattice(&topology, 5, &scalars, &mut acc), 2);

        let partial = acc.finish();
        assert_eq!(partial.triangle_cells, vec![5, 5]);
        for p in &partial.points {
            assert_relative_eq!(p.x, 1.5);
            assert!((0.0..=1.0).contains(&p.y));
            assert!((1.0..=2.0).contains(&p.z));
        }
    }
}
