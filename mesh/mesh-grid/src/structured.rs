//! Structured and rectilinear grids.
//!
//! Both grid kinds share the same implicit topology: points are numbered with
//! `i` varying fastest, then `j`, then `k`, and cells are numbered the same
//! way over the cell lattice. [`StructuredTopology`] captures that arithmetic
//! so consumers never need explicit connectivity.

// Cell and point counts fit in u32 for every grid this crate accepts.
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::{DataArray, FieldData};
use crate::cell::CellType;
use crate::error::{GridError, GridResult};

/// Hexahedron corner offsets in VTK corner order.
pub const HEX_CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Implicit topology of an `nx × ny × nz` point lattice.
///
/// # Example
///
/// ```
/// use mesh_grid::{CellType, StructuredTopology};
///
/// let topo = StructuredTopology::new([3, 3, 2]);
/// assert_eq!(topo.cell_count(), 4);
/// assert_eq!(topo.cell_type(), CellType::Hexahedron);
///
/// let degenerate = StructuredTopology::new([4, 4, 1]);
/// assert_eq!(degenerate.cell_type(), CellType::Quad);
/// assert_eq!(degenerate.cell_count(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructuredTopology {
    dims: [usize; 3],
}

impl StructuredTopology {
    /// Create the topology for the given point dimensions.
    #[must_use]
    pub const fn new(dims: [usize; 3]) -> Self {
        Self { dims }
    }

    /// Point dimensions.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Number of points.
    #[must_use]
    pub const fn point_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Cells along each axis. A degenerate axis (one point) still counts as
    /// one layer of cells so ids stay dense.
    #[must_use]
    pub fn cell_dims(&self) -> [usize; 3] {
        self.dims.map(|d| d.saturating_sub(1).max(1))
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        if self.point_count() == 0 {
            return 0;
        }
        self.cell_dims().iter().product()
    }

    /// Number of axes with more than one point.
    #[must_use]
    pub fn active_axes(&self) -> usize {
        self.dims.iter().filter(|&&d| d > 1).count()
    }

    /// True when every axis has more than one point, i.e. the cells are
    /// hexahedra.
    #[must_use]
    pub fn is_volumetric(&self) -> bool {
        self.active_axes() == 3
    }

    /// Type of every cell of this lattice.
    #[must_use]
    pub fn cell_type(&self) -> CellType {
        match self.active_axes() {
            3 => CellType::Hexahedron,
            2 => CellType::Quad,
            1 => CellType::Line,
            _ => CellType::Vertex,
        }
    }

    /// Flattened point id of lattice coordinates.
    #[inline]
    #[must_use]
    pub const fn point_id(&self, i: usize, j: usize, k: usize) -> usize {
        i + self.dims[0] * (j + self.dims[1] * k)
    }

    /// Point strides along i, j and k.
    #[inline]
    #[must_use]
    pub const fn point_strides(&self) -> [usize; 3] {
        [1, self.dims[0], self.dims[0] * self.dims[1]]
    }

    /// Lattice coordinates of a point id.
    #[inline]
    #[must_use]
    pub const fn point_ijk(&self, id: usize) -> [usize; 3] {
        let plane = self.dims[0] * self.dims[1];
        [id % self.dims[0], (id % plane) / self.dims[0], id / plane]
    }

    /// Lattice coordinates of a cell id.
    #[inline]
    #[must_use]
    pub fn cell_ijk(&self, id: usize) -> [usize; 3] {
        let [cx, cy, _] = self.cell_dims();
        [id % cx, (id / cx) % cy, id / (cx * cy)]
    }

    /// Corner point ids of cell `id`, in the corner order of
    /// [`StructuredTopology::cell_type`].
    pub fn cell_points(&self, id: usize, out: &mut Vec<u32>) {
        out.clear();
        let [i, j, k] = self.cell_ijk(id);
        let mut active = [0; 3];
        let mut count = 0;
        for axis in 0..3 {
            if self.dims[axis] > 1 {
                active[count] = axis;
                count += 1;
            }
        }

        let mut push = |offset: [usize; 3]| {
            out.push(self.point_id(i + offset[0], j + offset[1], k + offset[2]) as u32);
        };

        match &active[..count] {
            [_, _, _] => HEX_CORNER_OFFSETS.iter().for_each(|&o| push(o)),
            &[a, b] => {
                for (da, db) in [(0, 0), (1, 0), (1, 1), (0, 1)] {
                    let mut offset = [0; 3];
                    offset[a] = da;
                    offset[b] = db;
                    push(offset);
                }
            }
            &[a] => {
                for d in 0..2 {
                    let mut offset = [0; 3];
                    offset[a] = d;
                    push(offset);
                }
            }
            _ => push([0, 0, 0]),
        }
    }
}

/// A curvilinear grid: implicit lattice topology with explicit point
/// positions.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StructuredGrid {
    topology: StructuredTopology,
    points: Vec<Point3<f64>>,
    point_data: FieldData,
    cell_data: FieldData,
}

impl StructuredGrid {
    /// Create a grid from dimensions and points (i fastest).
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionMismatch`] if the point count does not
    /// match the dimensions.
    pub fn new(dims: [usize; 3], points: Vec<Point3<f64>>) -> GridResult<Self> {
        let topology = StructuredTopology::new(dims);
        if topology.point_count() != points.len() {
            return Err(GridError::DimensionMismatch {
                dims,
                expected: topology.point_count(),
                actual: points.len(),
            });
        }
        Ok(Self {
            topology,
            points,
            point_data: FieldData::new(),
            cell_data: FieldData::new(),
        })
    }

    /// Create a uniform grid with the given origin and spacing.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(dims: [usize; 3], origin: Point3<f64>, spacing: f64) -> Self {
        let topology = StructuredTopology::new(dims);
        let points = (0..topology.point_count())
            .map(|id| {
                let [i, j, k] = topology.point_ijk(id);
                Point3::new(
                    (i as f64).mul_add(spacing, origin.x),
                    (j as f64).mul_add(spacing, origin.y),
                    (k as f64).mul_add(spacing, origin.z),
                )
            })
            .collect();
        Self {
            topology,
            points,
            point_data: FieldData::new(),
            cell_data: FieldData::new(),
        }
    }

    /// Attach a point-data array.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple count differs from the point count or
    /// the name is already used.
    pub fn with_point_data(mut self, array: DataArray) -> GridResult<Self> {
        attach(&mut self.point_data, array, self.points.len())?;
        Ok(self)
    }

    /// Attach a cell-data array.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple count differs from the cell count or
    /// the name is already used.
    pub fn with_cell_data(mut self, array: DataArray) -> GridResult<Self> {
        attach(&mut self.cell_data, array, self.topology.cell_count())?;
        Ok(self)
    }

    /// Lattice topology.
    #[must_use]
    pub const fn topology(&self) -> &StructuredTopology {
        &self.topology
    }

    /// Point positions.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Point-data arrays.
    #[must_use]
    pub const fn point_data(&self) -> &FieldData {
        &self.point_data
    }

    /// Cell-data arrays.
    #[must_use]
    pub const fn cell_data(&self) -> &FieldData {
        &self.cell_data
    }
}

/// A grid whose points lie on the tensor product of three coordinate axes.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RectilinearGrid {
    topology: StructuredTopology,
    coords: [Vec<f64>; 3],
    point_data: FieldData,
    cell_data: FieldData,
}

impl RectilinearGrid {
    /// Create a grid from its x, y and z coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_grid::RectilinearGrid;
    ///
    /// let grid = RectilinearGrid::new(vec![0.0, 1.0, 3.0], vec![0.0, 1.0], vec![0.0, 2.0]);
    /// assert_eq!(grid.topology().dims(), [3, 2, 2]);
    /// assert_eq!(grid.point(5).x, 3.0);
    /// ```
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Self {
        let topology = StructuredTopology::new([x.len(), y.len(), z.len()]);
        Self {
            topology,
            coords: [x, y, z],
            point_data: FieldData::new(),
            cell_data: FieldData::new(),
        }
    }

    /// Attach a point-data array.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple count differs from the point count or
    /// the name is already used.
    pub fn with_point_data(mut self, array: DataArray) -> GridResult<Self> {
        attach(&mut self.point_data, array, self.topology.point_count())?;
        Ok(self)
    }

    /// Attach a cell-data array.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple count differs from the cell count or
    /// the name is already used.
    pub fn with_cell_data(mut self, array: DataArray) -> GridResult<Self> {
        attach(&mut self.cell_data, array, self.topology.cell_count())?;
        Ok(self)
    }

    /// Lattice topology.
    #[must_use]
    pub const fn topology(&self) -> &StructuredTopology {
        &self.topology
    }

    /// Coordinate array of one axis (0 = x, 1 = y, 2 = z).
    #[must_use]
    pub fn axis(&self, axis: usize) -> &[f64] {
        &self.coords[axis]
    }

    /// Position of a point id.
    #[inline]
    #[must_use]
    pub fn point(&self, id: usize) -> Point3<f64> {
        let [i, j, k] = self.topology.point_ijk(id);
        Point3::new(self.coords[0][i], self.coords[1][j], self.coords[2][k])
    }

    /// Point-data arrays.
    #[must_use]
    pub const fn point_data(&self) -> &FieldData {
        &self.point_data
    }

    /// Cell-data arrays.
    #[must_use]
    pub const fn cell_data(&self) -> &FieldData {
        &self.cell_data
    }
}

pub(crate) fn attach(field: &mut FieldData, array: DataArray, tuples: usize) -> GridResult<()> {
    use crate::array::NumericArray;

    if array.tuple_count() != tuples {
        return Err(GridError::TupleCountMismatch {
            name: array.name().to_string(),
            expected: tuples,
            actual: array.tuple_count(),
        });
    }
    field.push(array)
}
