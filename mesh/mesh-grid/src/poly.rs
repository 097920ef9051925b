//! Polygonal output mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::FieldData;

/// A mesh of triangles and line segments with attached data.
///
/// Output cells are ordered triangles first, then lines; `cell_data`
/// follows that order. `point_data` has one tuple per point.
///
/// # Example
///
/// ```
/// use mesh_grid::{Point3, PolyMesh};
///
/// let mut mesh = PolyMesh::new();
/// mesh.points.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.points.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.points.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.triangles.push([0, 1, 2]);
///
/// assert_eq!(mesh.cell_count(), 1);
/// assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Point positions.
    pub points: Vec<Point3<f64>>,

    /// Triangles as point indices.
    pub triangles: Vec<[u32; 3]>,

    /// Line segments as point indices.
    pub lines: Vec<[u32; 2]>,

    /// Per-point arrays.
    pub point_data: FieldData,

    /// Per-cell arrays (triangles, then lines).
    pub cell_data: FieldData,
}

impl PolyMesh {
    /// Create an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
            lines: Vec::new(),
            point_data: FieldData::new(),
            cell_data: FieldData::new(),
        }
    }

    /// Number of output cells (triangles plus lines).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.triangles.len() + self.lines.len()
    }

    /// True when there are no points and no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.cell_count() == 0
    }

    /// Axis-aligned bounds of the points, or `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.inf(p), hi.sup(p))
        }))
    }

    /// Sum of triangle areas.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                let p0 = self.points[a as usize];
                let p1 = self.points[b as usize];
                let p2 = self.points[c as usize];
                (p1 - p0).cross(&(p2 - p0)).norm() * 0.5
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_mesh() {
        let mesh = PolyMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.bounds().is_none());
        assert_relative_eq!(mesh.surface_area(), 0.0);
    }

    #[test]
    fn test_bounds() {
        let mut mesh = PolyMesh::new();
        mesh.points.push(Point3::new(1.0, -2.0, 0.0));
        mesh.points.push(Point3::new(-1.0, 3.0, 0.5));
        mesh.lines.push([0, 1]);

        let (lo, hi) = mesh.bounds().unwrap();
        assert_relative_eq!(lo.x, -1.0);
        assert_relative_eq!(hi.y, 3.0);
        assert_eq!(mesh.cell_count(), 1);
    }
}
