//! The [`Dataset`] enum unifying every supported grid kind.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::array::FieldData;
use crate::structured::{RectilinearGrid, StructuredGrid};
use crate::unstructured::UnstructuredGrid;

/// A volumetric mesh together with its point and cell data.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dataset {
    /// Curvilinear lattice with explicit points.
    Structured(StructuredGrid),
    /// Lattice on three coordinate axes.
    Rectilinear(RectilinearGrid),
    /// Explicit mixed-cell connectivity.
    Unstructured(UnstructuredGrid),
}

impl Dataset {
    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        match self {
            Self::Structured(g) => g.points().len(),
            Self::Rectilinear(g) => g.topology().point_count(),
            Self::Unstructured(g) => g.points().len(),
        }
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        match self {
            Self::Structured(g) => g.topology().cell_count(),
            Self::Rectilinear(g) => g.topology().cell_count(),
            Self::Unstructured(g) => g.cell_count(),
        }
    }

    /// Position of point `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[inline]
    #[must_use]
    pub fn point(&self, id: usize) -> Point3<f64> {
        match self {
            Self::Structured(g) => g.points()[id],
            Self::Rectilinear(g) => g.point(id),
            Self::Unstructured(g) => g.points()[id],
        }
    }

    /// Point-data arrays.
    #[must_use]
    pub const fn point_data(&self) -> &FieldData {
        match self {
            Self::Structured(g) => g.point_data(),
            Self::Rectilinear(g) => g.point_data(),
            Self::Unstructured(g) => g.point_data(),
        }
    }

    /// Cell-data arrays.
    #[must_use]
    pub const fn cell_data(&self) -> &FieldData {
        match self {
            Self::Structured(g) => g.cell_data(),
            Self::Rectilinear(g) => g.cell_data(),
            Self::Unstructured(g) => g.cell_data(),
        }
    }
}

impl From<StructuredGrid> for Dataset {
    fn from(grid: StructuredGrid) -> Self {
        Self::Structured(grid)
    }
}

impl From<RectilinearGrid> for Dataset {
    fn from(grid: RectilinearGrid) -> Self {
        Self::Rectilinear(grid)
    }
}

impl From<UnstructuredGrid> for Dataset {
    fn from(grid: UnstructuredGrid) -> Self {
        Self::Unstructured(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::DataArray;
    use approx::assert_relative_eq;

    #[test]
    fn test_dataset_delegates() {
        let grid = RectilinearGrid::new(vec![0.0, 2.0], vec![0.0, 1.0, 2.0], vec![0.0, 1.0])
            .with_point_data(DataArray::scalars_f64("s", vec![0.0; 12]))
            .unwrap();
        let ds = Dataset::from(grid);

        assert_eq!(ds.point_count(), 12);
        assert_eq!(ds.cell_count(), 2);
        assert_relative_eq!(ds.point(3).x, 2.0);
        assert_relative_eq!(ds.point(3).y, 1.0);
        assert!(ds.point_data().get("s").is_some());
        assert!(ds.cell_data().is_empty());
    }
}
