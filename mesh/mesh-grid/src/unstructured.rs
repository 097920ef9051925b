//! Unstructured grids with explicit connectivity.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::{DataArray, FieldData};
use crate::cell::CellType;
use crate::error::{GridError, GridResult};
use crate::structured::attach;

/// Borrowed view of one cell of an [`UnstructuredGrid`].
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a> {
    /// Cell id.
    pub id: usize,
    /// Cell type tag.
    pub cell_type: CellType,
    /// Corner point ids. For polyhedra, the distinct points of the face
    /// stream in first-seen order.
    pub points: &'a [u32],
    /// Face stream of a polyhedron; `None` for every other type.
    pub faces: Option<&'a [Vec<u32>]>,
}

/// A grid of arbitrary mixed cells.
///
/// Connectivity is stored compactly: `offsets[c]..offsets[c + 1]` indexes
/// the point ids of cell `c` in `connectivity`. Polyhedra additionally keep
/// their face stream.
///
/// # Example
///
/// ```
/// use mesh_grid::{CellType, Point3, UnstructuredGrid};
///
/// let mut grid = UnstructuredGrid::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
///     Point3::new(0.0, 0.0, 1.0),
/// ]);
/// let tet = grid.push_cell(CellType::Tetrahedron, &[0, 1, 2, 3]).unwrap();
///
/// assert_eq!(grid.cell_count(), 1);
/// assert_eq!(grid.cell(tet).unwrap().points, &[0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnstructuredGrid {
    points: Vec<Point3<f64>>,
    types: Vec<CellType>,
    offsets: Vec<usize>,
    connectivity: Vec<u32>,
    faces: HashMap<usize, Vec<Vec<u32>>>,
    point_data: FieldData,
    cell_data: FieldData,
}

impl UnstructuredGrid {
    /// Create a grid with the given points and no cells.
    #[must_use]
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self {
            points,
            types: Vec::new(),
            offsets: vec![0],
            connectivity: Vec::new(),
            faces: HashMap::new(),
            point_data: FieldData::new(),
            cell_data: FieldData::new(),
        }
    }

    /// Append a cell with explicit corner ids and return its id.
    ///
    /// # Errors
    ///
    /// Returns an error if a point id is out of range, the corner count does
    /// not match a fixed-size type, a polygon has fewer than three corners,
    /// or `cell_type` is [`CellType::Polyhedron`] (use
    /// [`UnstructuredGrid::push_polyhedron`]).
    pub fn push_cell(&mut self, cell_type: CellType, points: &[u32]) -> GridResult<usize> {
        let cell = self.types.len();
        match cell_type.corner_count() {
            Some(expected) if expected != points.len() => {
                return Err(GridError::WrongCornerCount {
                    cell_type,
                    expected,
                    actual: points.len(),
                });
            }
            None if cell_type == CellType::Polyhedron => {
                return Err(GridError::InvalidCell {
                    cell_type,
                    reason: "polyhedra need a face stream".to_string(),
                });
            }
            None if points.len() < 3 => {
                return Err(GridError::InvalidCell {
                    cell_type,
                    reason: format!("{} corners, need at least 3", points.len()),
                });
            }
            _ => {}
        }
        self.check_points(cell, points)?;

        self.types.push(cell_type);
        self.connectivity.extend_from_slice(points);
        self.offsets.push(self.connectivity.len());
        Ok(cell)
    }

    /// Append a polyhedron described by its faces and return its id.
    ///
    /// Faces should be oriented counter-clockwise when viewed from outside;
    /// consumers tolerate inconsistent orientation but lose winding
    /// guarantees.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than four faces, a face has fewer
    /// than three points, or a point id is out of range.
    pub fn push_polyhedron(&mut self, faces: Vec<Vec<u32>>) -> GridResult<usize> {
        let cell = self.types.len();
        if faces.len() < 4 {
            return Err(GridError::InvalidCell {
                cell_type: CellType::Polyhedron,
                reason: format!("{} faces, need at least 4", faces.len()),
            });
        }
        if let Some(face) = faces.iter().find(|f| f.len() < 3) {
            return Err(GridError::InvalidCell {
                cell_type: CellType::Polyhedron,
                reason: format!("face with {} points", face.len()),
            });
        }

        let mut unique: Vec<u32> = Vec::new();
        for &p in faces.iter().flatten() {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        self.check_points(cell, &unique)?;

        self.types.push(CellType::Polyhedron);
        self.connectivity.extend_from_slice(&unique);
        self.offsets.push(self.connectivity.len());
        self.faces.insert(cell, faces);
        Ok(cell)
    }

    fn check_points(&self, cell: usize, points: &[u32]) -> GridResult<()> {
        match points.iter().find(|&&p| p as usize >= self.points.len()) {
            Some(&point) => Err(GridError::PointOutOfRange {
                cell,
                point,
                point_count: self.points.len(),
            }),
            None => Ok(()),
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

    /// Attach a cell-data array. Attach after all cells are pushed.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple count differs from the cell count or
    /// the name is already used.
    pub fn with_cell_data(mut self, array: DataArray) -> GridResult<Self> {
        attach(&mut self.cell_data, array, self.types.len())?;
        Ok(self)
    }

    /// Borrow cell `id`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, id: usize) -> Option<CellRef<'_>> {
        let cell_type = *self.types.get(id)?;
        let points = &self.connectivity[self.offsets[id]..self.offsets[id + 1]];
        Some(CellRef {
            id,
            cell_type,
            points,
            faces: self.faces.get(&id).map(Vec::as_slice),
        })
    }

    /// Type of cell `id`.
    #[must_use]
    pub fn cell_type(&self, id: usize) -> Option<CellType> {
        self.types.get(id).copied()
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.types.len()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_points() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn test_push_mixed_cells() {
        let mut grid = UnstructuredGrid::new(cube_points());
        let hex = grid
            .push_cell(CellType::Hexahedron, &[0, 1, 2, 3, 4, 5, 6, 7])
            .unwrap();
        let tri = grid.push_cell(CellType::Triangle, &[0, 1, 2]).unwrap();

        assert_eq!((hex, tri), (0, 1));
        let cell = grid.cell(tri).unwrap();
        assert_eq!(cell.cell_type, CellType::Triangle);
        assert_eq!(cell.points, &[0, 1, 2]);
        assert!(cell.faces.is_none());
        assert!(grid.cell(2).is_none());
    }

    #[test]
    fn test_rejects_bad_cells() {
        let mut grid = UnstructuredGrid::new(cube_points());
        assert!(matches!(
            grid.push_cell(CellType::Tetrahedron, &[0, 1, 2]),
            Err(GridError::WrongCornerCount { expected: 4, actual: 3, .. })
        ));
        assert!(matches!(
            grid.push_cell(CellType::Triangle, &[0, 1, 8]),
            Err(GridError::PointOutOfRange { point: 8, .. })
        ));
        assert!(matches!(
            grid.push_cell(CellType::Polyhedron, &[0, 1, 2, 3]),
            Err(GridError::InvalidCell { .. })
        ));
        assert!(matches!(
            grid.push_cell(CellType::Polygon, &[0, 1]),
            Err(GridError::InvalidCell { .. })
        ));
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn test_polyhedron_face_stream() {
        let mut grid = UnstructuredGrid::new(cube_points());
        let faces = CellType::Hexahedron
            .local_faces()
            .iter()
            .map(|f| f.iter().map(|&c| u32::from(c)).collect())
            .collect();
        let id = grid.push_polyhedron(faces).unwrap();

        let cell = grid.cell(id).unwrap();
        assert_eq!(cell.cell_type, CellType::Polyhedron);
        assert_eq!(cell.points.len(), 8);
        assert_eq!(cell.faces.map(<[Vec<u32>]>::len), Some(6));

        assert!(grid.push_polyhedron(vec![vec![0, 1, 2]; 3]).is_err());
    }

    #[test]
    fn test_cell_data_after_cells() {
        let mut grid = UnstructuredGrid::new(cube_points());
        grid.push_cell(CellType::Tetrahedron, &[0, 1, 3, 4]).unwrap();
        let grid = grid
            .with_cell_data(DataArray::scalars_f32("material", vec![2.0]))
            .unwrap();
        assert!(grid.cell_data().get("material").is_some());
    }
}
