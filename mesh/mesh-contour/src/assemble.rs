//! Merging partial surfaces into the output mesh.

// Output indices are u32 like every mesh in the workspace.
#![allow(clippy::cast_possible_truncation)]

use hashbrown::HashMap;
use mesh_grid::{DataArray, Dataset, NumericArray, PolyMesh};
use tracing::debug;

use crate::accumulator::{EdgeKey, Partial, PointLayout};
use crate::error::ContourResult;

/// Concatenate partials into one mesh.
///
/// Points carrying the same [`EdgeKey`] in different partials become one
/// output point, which welds the seams between the zoo pass and the
/// fallback and between parallel chunks. Returns the mesh and the number of
/// points merged away.
pub(crate) fn assemble(
    dataset: &Dataset,
    layout: &PointLayout<'_>,
    partials: &[Partial],
    copy_cell_data: bool,
) -> ContourResult<(PolyMesh, usize)> {
    let total: usize = partials.iter().map(|p| p.points.len()).sum();
    let width = layout.width();
    let weld = partials.len() > 1;

    let mut mesh = PolyMesh::new();
    mesh.points.reserve(total);
    let mut values: Vec<f64> = Vec::with_capacity(total * width);
    let mut welded: HashMap<EdgeKey, u32> = HashMap::with_capacity(if weld { total } else { 0 });
    let mut triangle_cells = Vec::new();
    let mut line_cells = Vec::new();
    let mut remap: Vec<u32> = Vec::new();

    for partial in partials {
        remap.clear();
        for (local, key) in partial.keys.iter().enumerate() {
            let next = mesh.points.len() as u32;
            let id = if weld { *welded.entry(*key).or_insert(next) } else { next };
            if id == next {
                mesh.points.push(partial.points[local]);
                values.extend_from_slice(&partial.values[local * width..(local + 1) * width]);
            }
            remap.push(id);
        }

        mesh.triangles
            .extend(partial.triangles.iter().map(|t| t.map(|i| remap[i as usize])));
        mesh.lines
            .extend(partial.lines.iter().map(|l| l.map(|i| remap[i as usize])));
        triangle_cells.extend_from_slice(&partial.triangle_cells);
        line_cells.extend_from_slice(&partial.line_cells);
    }

    let merged = total - mesh.points.len();
    if merged > 0 {
        debug!(merged, partials = partials.len(), "Welded partial surfaces");
    }

    // Point data keeps the input schema: same names, widths and storage.
    let count = mesh.points.len();
    let mut offset = 0;
    for array in layout.arrays() {
        let components = array.components();
        let mut flat = Vec::with_capacity(count * components);
        for p in 0..count {
            let start = p * width + offset;
            flat.extend_from_slice(&values[start..start + components]);
        }
        offset += components;
        mesh.point_data
            .push(DataArray::from_f64(array.name(), components, array.kind(), flat)?)?;
    }

    if copy_cell_data {
        let mut sources = triangle_cells;
        sources.extend_from_slice(&line_cells);
        for array in dataset.cell_data().iter() {
            mesh.cell_data.push(array.gather(&sources))?;
        }
    }

    Ok((mesh, merged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::SurfaceAccumulator;
    use approx::assert_relative_eq;
    use mesh_grid::{ArrayValues, CellType, Point3, UnstructuredGrid, ValueKind};

    fn two_tets() -> Dataset {
        let mut grid = UnstructuredGrid::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
        ]);
        grid.push_cell(CellType::Tetrahedron, &[0, 1, 2, 3]).unwrap();
        grid.push_cell(CellType::Tetrahedron, &[0, 2, 1, 4]).unwrap();
        let grid = grid
            .with_point_data(DataArray::scalars_f64("s", vec![1.0, 0.0, 0.0, 0.0, 0.0]))
            .unwrap()
            .with_point_data(
                DataArray::new("id", 1, ArrayValues::I32(vec![10, 20, 30, 40, 50])).unwrap(),
            )
            .unwrap()
            .with_cell_data(DataArray::new("mat", 1, ArrayValues::U8(vec![7, 9])).unwrap())
            .unwrap();
        Dataset::from(grid)
    }

    fn partial_for(ds: &Dataset, layout: &PointLayout<'_>, cell: usize, edges: [(usize, usize); 3]) -> Partial {
        let mut acc = SurfaceAccumulator::new(ds, layout, 1);
        let ids = edges.map(|(a, b)| acc.edge_point(a, b, 0.5, -0.5));
        acc.push_triangle(ids, cell);
        acc.finish()
    }

    #[test]
    fn test_welds_shared_edges() {
        let ds = two_tets();
        let layout = PointLayout::new(ds.point_data(), true);
        let first = partial_for(&ds, &layout, 0, [(0, 1), (0, 2), (0, 3)]);
        let second = partial_for(&ds, &layout, 1, [(0, 2), (0, 1), (0, 4)]);

        let (mesh, merged) = assemble(&ds, &layout, &[first, second], true).unwrap();
        assert_eq!(merged, 2);
        assert_eq!(mesh.points.len(), 4);
        assert_eq!(mesh.triangles.len(), 2);
        assert_eq!(mesh.triangles[0][0], mesh.triangles[1][1]);
        assert_eq!(mesh.triangles[0][1], mesh.triangles[1][0]);
    }

    #[test]
    fn test_schema_is_preserved() {
        let ds = two_tets();
        let layout = PointLayout::new(ds.point_data(), true);
        let first = partial_for(&ds, &layout, 1, [(0, 1), (0, 2), (0, 4)]);

        let (mesh, _) = assemble(&ds, &layout, &[first], true).unwrap();
        let ids = mesh.point_data.get("id").unwrap();
        assert_eq!(ids.kind(), ValueKind::I32);
        assert_relative_eq!(ids.value(0, 0), 15.0);

        let mat = mesh.cell_data.get("mat").unwrap();
        assert_eq!(mat.values(), &ArrayValues::U8(vec![9]));
    }

    #[test]
    fn test_empty_output_keeps_arrays() {
        let ds = two_tets();
        let layout = PointLayout::new(ds.point_data(), true);
        let (mesh, merged) = assemble(&ds, &layout, &[], false).unwrap();
        assert_eq!(merged, 0);
        assert!(mesh.is_empty());
        assert_eq!(mesh.point_data.len(), 2);
        assert!(mesh.cell_data.is_empty());
    }
}
