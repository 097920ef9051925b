//! Topology dispatch and the public extraction entry points.
//!
//! The dispatcher validates the request, picks a route from the dataset
//! kind and its cell types, runs one or two cell passes (optionally split
//! across the rayon pool), and hands every partial surface to the
//! assembler.

use std::ops::Range;

use mesh_grid::{DataArray, Dataset, NumericArray, StructuredTopology, UnstructuredGrid};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::accumulator::{Partial, PointLayout, SurfaceAccumulator};
use crate::assemble::assemble;
use crate::error::{ContourError, ContourResult};
use crate::fallback::{GenericCell, Workspace, contour_generic};
use crate::kernel::{contour_explicit, contour_lattice};
use crate::params::ContourParams;
use crate::result::{CellCounters, ExtractionResult, ExtractionStats, Route};
use crate::scalar::{ScalarAccessor, Scalars, StructuredAccessor, with_accessor};
use crate::tables::CellShape;

/// Smallest number of cells handed to one parallel task.
const MIN_CHUNK: usize = 1024;

/// Extract the isosurface of a point scalar field.
///
/// Structured and rectilinear grids with three active axes take the
/// lattice fast path. Unstructured grids send tetrahedra, pyramids, wedges
/// and hexahedra through the triangulation tables and every other cell
/// through the face-walking fallback; both surfaces are welded together.
/// Lattices with a degenerate axis go through the fallback and produce line
/// segments.
///
/// # Arguments
///
/// * `dataset` - The grid with its point and cell data
/// * `params` - Isovalue, scalar array selection and options
///
/// # Errors
///
/// Returns an error if no usable single-component scalar array with one
/// value per point is selected, if a requested cell id is out of range, or
/// if the extraction is cancelled.
///
/// # Example
///
/// ```
/// use mesh_contour::{ContourParams, Route, extract_isosurface};
/// use mesh_grid::{DataArray, Dataset, Point3, StructuredGrid};
///
/// let grid = StructuredGrid::uniform([4, 4, 4], Point3::origin(), 1.0);
/// let x: Vec<f64> = grid.points().iter().map(|p| p.x).collect();
/// let grid = grid.with_point_data(DataArray::scalars_f64("x", x)).unwrap();
///
/// let result = extract_isosurface(&Dataset::from(grid), &ContourParams::at(1.5, "x")).unwrap();
///
/// assert_eq!(result.stats.route, Route::Structured);
/// assert_eq!(result.mesh.triangles.len(), 18);
/// assert!(result.mesh.points.iter().all(|p| (p.x - 1.5).abs() < 1e-12));
/// ```
pub fn extract_isosurface(
    dataset: &Dataset,
    params: &ContourParams,
) -> ContourResult<ExtractionResult> {
    let array = select_scalars(dataset, params)?;
    let cells = CellList::new(dataset, params.cells.as_deref())?;
    let layout = PointLayout::new(dataset.point_data(), params.interpolate_point_data);

    info!(
        isovalue = params.isovalue,
        scalars = array.name(),
        cells = cells.len(),
        "Starting isosurface extraction"
    );

    if !may_cross(array, params.isovalue) {
        debug!(isovalue = params.isovalue, "Scalar range does not reach the isovalue");
        let (mesh, _) = assemble(dataset, &layout, &[], params.copy_cell_data)?;
        return Ok(ExtractionResult {
            isovalue: params.isovalue,
            mesh,
            stats: ExtractionStats::new(Route::RangeRejected, CellCounters::default()),
        });
    }

    let scalars = Scalars::select(array, params.isovalue, params.missing_value);
    debug!(storage = scalars.kind(), "Selected scalar accessor");

    let (route, partials) = with_accessor!(scalars, acc => {
        route_cells(dataset, &cells, &acc, &layout, params)
    })?;

    let mut counters = CellCounters::default();
    for partial in &partials {
        counters += partial.counters;
    }
    if counters.skipped > 0 {
        warn!(skipped = counters.skipped, "Skipped vertex and line cells");
    }
    if counters.open_loops > 0 {
        warn!(open_loops = counters.open_loops, "Dropped open polyhedron loops");
    }

    let (mesh, merged) = assemble(dataset, &layout, &partials, params.copy_cell_data)?;
    let mut stats = ExtractionStats::new(route, counters);
    stats.merged_points = merged;
    stats.partials = partials.len();

    info!(
        points = mesh.points.len(),
        triangles = mesh.triangles.len(),
        lines = mesh.lines.len(),
        route = %route,
        "Isosurface extraction complete"
    );

    Ok(ExtractionResult {
        isovalue: params.isovalue,
        mesh,
        stats,
    })
}

/// Extract one surface per isovalue, all with the same options.
///
/// # Errors
///
/// Same conditions as [`extract_isosurface`]; the first failure stops the
/// sweep.
///
/// # Example
///
/// ```
/// use mesh_contour::{ContourParams, extract_levels};
/// use mesh_grid::{DataArray, Dataset, Point3, StructuredGrid};
///
/// let grid = StructuredGrid::uniform([3, 3, 3], Point3::origin(), 1.0);
/// let z: Vec<f64> = grid.points().iter().map(|p| p.z).collect();
/// let grid = grid.with_point_data(DataArray::scalars_f64("z", z)).unwrap();
///
/// let params = ContourParams::at(0.0, "z");
/// let levels = extract_levels(&Dataset::from(grid), &params, &[0.5, 1.5, 9.0]).unwrap();
///
/// assert_eq!(levels.len(), 3);
/// assert_eq!(levels[0].mesh.triangles.len(), 8);
/// assert!(levels[2].is_empty());
/// ```
pub fn extract_levels(
    dataset: &Dataset,
    params: &ContourParams,
    isovalues: &[f64],
) -> ContourResult<Vec<ExtractionResult>> {
    isovalues
        .iter()
        .map(|&isovalue| extract_isosurface(dataset, &params.clone().with_isovalue(isovalue)))
        .collect()
}

fn select_scalars<'a>(dataset: &'a Dataset, params: &ContourParams) -> ContourResult<&'a DataArray> {
    let name = params.scalars.as_deref().ok_or(ContourError::MissingScalars)?;
    let array = dataset
        .point_data()
        .get(name)
        .ok_or_else(|| ContourError::UnknownArray {
            name: name.to_string(),
        })?;

    if array.components() != 1 {
        return Err(ContourError::MultiComponentScalars {
            name: name.to_string(),
            components: array.components(),
        });
    }
    if array.tuple_count() != dataset.point_count() {
        return Err(ContourError::ScalarLengthMismatch {
            name: name.to_string(),
            expected: dataset.point_count(),
            actual: array.tuple_count(),
        });
    }
    Ok(array)
}

/// False when every sample is below the isovalue (or missing), so no cell
/// can have an inside corner.
fn may_cross(array: &DataArray, isovalue: f64) -> bool {
    array.range(0).is_some_and(|(_, max)| max >= isovalue)
}

/// Cells to visit, by position.
#[derive(Debug, Clone)]
enum CellList {
    All(usize),
    Sparse(Vec<usize>),
}

impl CellList {
    /// Every cell, or the requested ids sorted with duplicates removed.
    fn new(dataset: &Dataset, requested: Option<&[usize]>) -> ContourResult<Self> {
        let cell_count = dataset.cell_count();
        let Some(requested) = requested else {
            return Ok(Self::All(cell_count));
        };
        if let Some(&cell) = requested.iter().find(|&&c| c >= cell_count) {
            return Err(ContourError::CellOutOfRange { cell, cell_count });
        }
        let mut ids = requested.to_vec();
        ids.sort_unstable();
        ids.dedup();
        Ok(Self::Sparse(ids))
    }

    fn len(&self) -> usize {
        match self {
            Self::All(n) => *n,
            Self::Sparse(ids) => ids.len(),
        }
    }

    #[inline]
    fn get(&self, position: usize) -> usize {
        match self {
            Self::All(_) => position,
            Self::Sparse(ids) => ids[position],
        }
    }
}

fn route_cells<A: ScalarAccessor>(
    dataset: &Dataset,
    cells: &CellList,
    scalars: &A,
    layout: &PointLayout<'_>,
    params: &ContourParams,
) -> ContourResult<(Route, Vec<Partial>)> {
    match dataset {
        Dataset::Structured(grid) => route_lattice(grid.topology(), dataset, cells, scalars, layout, params),
        Dataset::Rectilinear(grid) => route_lattice(grid.topology(), dataset, cells, scalars, layout, params),
        Dataset::Unstructured(grid) => route_unstructured(grid, dataset, cells, scalars, layout, params),
    }
}

fn route_lattice<A: ScalarAccessor>(
    topology: &StructuredTopology,
    dataset: &Dataset,
    cells: &CellList,
    scalars: &A,
    layout: &PointLayout<'_>,
    params: &ContourParams,
) -> ContourResult<(Route, Vec<Partial>)> {
    if topology.is_volumetric() {
        debug!(dims = ?topology.dims(), "Structured fast path");
        let pass = LatticePass {
            topology,
            scalars: StructuredAccessor::new(scalars, topology),
        };
        return Ok((Route::Structured, run_pass(&pass, cells, dataset, layout, params)?));
    }

    debug!(
        dims = ?topology.dims(),
        cell_type = ?topology.cell_type(),
        "Degenerate lattice axis, using generic fallback"
    );
    let pass = LatticeFallbackPass { topology, scalars };
    Ok((Route::GenericFallback, run_pass(&pass, cells, dataset, layout, params)?))
}

fn route_unstructured<A: ScalarAccessor>(
    grid: &UnstructuredGrid,
    dataset: &Dataset,
    cells: &CellList,
    scalars: &A,
    layout: &PointLayout<'_>,
    params: &ContourParams,
) -> ContourResult<(Route, Vec<Partial>)> {
    let mut zoo = Vec::new();
    let mut other = Vec::new();
    for position in 0..cells.len() {
        let id = cells.get(position);
        match grid.cell_type(id).map(CellShape::classify) {
            Some(shape) if shape.is_zoo() => zoo.push(id),
            _ => other.push(id),
        }
    }
    debug!(zoo = zoo.len(), other = other.len(), "Partitioned unstructured cells");

    let route = match (zoo.is_empty(), other.is_empty()) {
        (_, true) => Route::UnstructuredZoo,
        (true, false) => Route::GenericFallback,
        (false, false) => Route::UnstructuredMixed,
    };

    let zoo_pass = ZooPass { grid, scalars };
    let mut partials = run_pass(&zoo_pass, &CellList::Sparse(zoo), dataset, layout, params)?;
    if other.is_empty() {
        return Ok((route, partials));
    }

    let sub_mesh = SubMesh { grid, scalars };
    partials.extend(run_pass(&sub_mesh, &CellList::Sparse(other), dataset, layout, params)?);
    Ok((route, partials))
}

/// One way of contouring a single cell.
trait CellPass: Sync {
    /// Per-chunk scratch buffers.
    type Scratch: Default;

    fn visit(&self, cell: usize, scratch: &mut Self::Scratch, acc: &mut SurfaceAccumulator<'_>);
}

/// Hexahedra synthesized from lattice coordinates.
struct LatticePass<'g, A> {
    topology: &'g StructuredTopology,
    scalars: StructuredAccessor<A>,
}

impl<A: ScalarAccessor> CellPass for LatticePass<'_, A> {
    type Scratch = ();

    fn visit(&self, cell: usize, _: &mut (), acc: &mut SurfaceAccumulator<'_>) {
        contour_lattice(self.topology, cell, &self.scalars, acc);
        acc.counters_mut().zoo += 1;
    }
}

/// Quads or lines of a lattice with a degenerate axis.
struct LatticeFallbackPass<'g, A> {
    topology: &'g StructuredTopology,
    scalars: A,
}

impl<A: ScalarAccessor> CellPass for LatticeFallbackPass<'_, A> {
    type Scratch = (Vec<u32>, Workspace);

    fn visit(&self, cell: usize, (corners, ws): &mut Self::Scratch, acc: &mut SurfaceAccumulator<'_>) {
        self.topology.cell_points(cell, corners);
        let cell = GenericCell {
            id: cell,
            cell_type: self.topology.cell_type(),
            points: corners.as_slice(),
            faces: None,
        };
        contour_generic(cell, &self.scalars, acc, ws);
    }
}

/// Zoo cells of an unstructured grid.
struct ZooPass<'g, A> {
    grid: &'g UnstructuredGrid,
    scalars: A,
}

impl<A: ScalarAccessor> CellPass for ZooPass<'_, A> {
    type Scratch = ();

    fn visit(&self, cell: usize, _: &mut (), acc: &mut SurfaceAccumulator<'_>) {
        let Some(cell_ref) = self.grid.cell(cell) else {
            return;
        };
        if let Some(table) = CellShape::classify(cell_ref.cell_type).table() {
            contour_explicit(table, cell, cell_ref.points, &self.scalars, acc);
            acc.counters_mut().zoo += 1;
        }
    }
}

/// The non-zoo cells of an unstructured grid, seen with their original
/// connectivity and polyhedron face streams.
struct SubMesh<'g, A> {
    grid: &'g UnstructuredGrid,
    scalars: A,
}

impl<A: ScalarAccessor> CellPass for SubMesh<'_, A> {
    type Scratch = Workspace;

    fn visit(&self, cell: usize, ws: &mut Workspace, acc: &mut SurfaceAccumulator<'_>) {
        let Some(cell_ref) = self.grid.cell(cell) else {
            return;
        };
        let cell = GenericCell {
            id: cell,
            cell_type: cell_ref.cell_type,
            points: cell_ref.points,
            faces: cell_ref.faces,
        };
        contour_generic(cell, &self.scalars, acc, ws);
    }
}

/// Run a pass over `cells`, in parallel chunks when enabled and large
/// enough. Always returns at least one partial.
fn run_pass<P: CellPass>(
    pass: &P,
    cells: &CellList,
    dataset: &Dataset,
    layout: &PointLayout<'_>,
    params: &ContourParams,
) -> ContourResult<Vec<Partial>> {
    let n = cells.len();
    if !params.parallel || n < params.parallel_threshold.max(1) {
        return Ok(vec![run_chunk(pass, cells, 0..n, dataset, layout, params)?]);
    }

    let chunk = (n / (rayon::current_num_threads() * 4)).max(MIN_CHUNK);
    let chunks: Vec<Range<usize>> = (0..n).step_by(chunk).map(|s| s..(s + chunk).min(n)).collect();
    debug!(cells = n, chunks = chunks.len(), "Running parallel pass");

    chunks
        .into_par_iter()
        .map(|range| run_chunk(pass, cells, range, dataset, layout, params))
        .collect()
}

fn run_chunk<P: CellPass>(
    pass: &P,
    cells: &CellList,
    range: Range<usize>,
    dataset: &Dataset,
    layout: &PointLayout<'_>,
    params: &ContourParams,
) -> ContourResult<Partial> {
    let mut acc = SurfaceAccumulator::new(dataset, layout, range.len());
    let mut scratch = P::Scratch::default();
    let interval = params.cancel_check_interval.max(1);

    for (visited, position) in range.enumerate() {
        if visited % interval == 0 {
            if let Some(token) = &params.cancel {
                if token.is_cancelled() {
                    return Err(ContourError::Cancelled {
                        cells_visited: visited,
                    });
                }
            }
        }
        pass.visit(cells.get(position), &mut scratch, &mut acc);
        acc.counters_mut().visited += 1;
    }
    Ok(acc.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CancelToken;
    use mesh_grid::{ArrayValues, Point3, RectilinearGrid, StructuredGrid};

    fn ramp(dims: [usize; 3]) -> Dataset {
        let grid = StructuredGrid::uniform(dims, Point3::origin(), 1.0);
        let x: Vec<f64> = grid.points().iter().map(|p| p.x).collect();
        Dataset::from(grid.with_point_data(DataArray::scalars_f64("x", x)).unwrap())
    }

    #[test]
    fn test_requires_scalars() {
        let ds = ramp([2, 2, 2]);
        let err = extract_isosurface(&ds, &ContourParams::default()).unwrap_err();
        assert_eq!(err, ContourError::MissingScalars);

        let err = extract_isosurface(&ds, &ContourParams::at(0.5, "nope")).unwrap_err();
        assert!(matches!(err, ContourError::UnknownArray { .. }));
    }

    #[test]
    fn test_rejects_vector_scalars() {
        let grid = StructuredGrid::uniform([2, 2, 2], Point3::origin(), 1.0)
            .with_point_data(DataArray::new("v", 3, ArrayValues::F64(vec![0.0; 24])).unwrap())
            .unwrap();
        let err = extract_isosurface(&Dataset::from(grid), &ContourParams::at(0.0, "v")).unwrap_err();
        assert_eq!(
            err,
            ContourError::MultiComponentScalars {
                name: "v".to_string(),
                components: 3
            }
        );
    }

    #[test]
    fn test_rejects_out_of_range_cells() {
        let ds = ramp([3, 3, 3]);
        let params = ContourParams::at(0.5, "x").with_cells(vec![0, 8]);
        let err = extract_isosurface(&ds, &params).unwrap_err();
        assert_eq!(err, ContourError::CellOutOfRange { cell: 8, cell_count: 8 });
    }

    #[test]
    fn test_sparse_cells() {
        let ds = ramp([3, 3, 3]);
        // Cells 0 and 2 sit at x in [0, 1]; cell 1 at x in [1, 2].
        let params = ContourParams::at(0.5, "x").with_cells(vec![2, 0, 0, 1]);
        let result = extract_isosurface(&ds, &params).unwrap();
        assert_eq!(result.stats.cells_visited, 3);
        assert_eq!(result.mesh.triangles.len(), 4);
    }

    #[test]
    fn test_range_rejection() {
        let ds = ramp([3, 3, 3]);
        let result = extract_isosurface(&ds, &ContourParams::at(10.0, "x")).unwrap();
        assert_eq!(result.stats.route, Route::RangeRejected);
        assert_eq!(result.stats.cells_visited, 0);
        assert!(result.is_empty());
        assert!(result.mesh.point_data.get("x").is_some());
    }

    #[test]
    fn test_cancelled_before_start() {
        let ds = ramp([3, 3, 3]);
        let token = CancelToken::new();
        token.cancel();
        let params = ContourParams::at(0.5, "x").with_cancel(token);
        let err = extract_isosurface(&ds, &params).unwrap_err();
        assert_eq!(err, ContourError::Cancelled { cells_visited: 0 });
    }

    #[test]
    fn test_rectilinear_route() {
        let grid = RectilinearGrid::new(vec![0.0, 1.0, 3.0], vec![0.0, 1.0], vec![0.0, 2.0]);
        let x: Vec<f64> = (0..grid.topology().point_count())
            .map(|id| grid.point(id).x)
            .collect();
        let grid = grid.with_point_data(DataArray::scalars_f64("x", x)).unwrap();
        let result = extract_isosurface(&Dataset::from(grid), &ContourParams::at(2.0, "x")).unwrap();

        assert_eq!(result.stats.route, Route::Structured);
        assert_eq!(result.mesh.triangles.len(), 2);
        assert!(result.mesh.points.iter().all(|p| (p.x - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_degenerate_axis_yields_lines() {
        let ds = ramp([4, 3, 1]);
        let result = extract_isosurface(&ds, &ContourParams::at(1.5, "x")).unwrap();
        assert_eq!(result.stats.route, Route::GenericFallback);
        assert!(result.mesh.triangles.is_empty());
        assert_eq!(result.mesh.lines.len(), 2);
        assert_eq!(result.mesh.points.len(), 3);
    }

    #[test]
    fn test_cell_list_dedups() {
        let ds = ramp([3, 3, 3]);
        let list = CellList::new(&ds, Some(&[5, 1, 5])).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), 1);
        assert_eq!(CellList::new(&ds, None).unwrap().len(), 8);
    }
}
