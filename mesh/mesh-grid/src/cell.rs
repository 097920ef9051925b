//! Cell types and their local topology.
//!
//! Corner orderings follow the VTK linear cell conventions so that data
//! produced by common readers can be used unchanged. Face templates are
//! listed counter-clockwise when viewed from outside the cell.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    /// Single point.
    Vertex,
    /// Two-point segment.
    Line,
    /// Three-point triangle.
    Triangle,
    /// Four-point quadrilateral, corners in cyclic order.
    Quad,
    /// Planar polygon with any number of corners in cyclic order.
    Polygon,
    /// Four-point tetrahedron.
    Tetrahedron,
    /// Axis-aligned hexahedron with corners in lexicographic (i, j, k) order.
    Voxel,
    /// Eight-point hexahedron: bottom quad 0-3, top quad 4-7.
    Hexahedron,
    /// Six-point wedge: triangles 0-2 and 3-5, with 0-3, 1-4, 2-5 edges.
    Wedge,
    /// Five-point pyramid: quad base 0-3 and apex 4.
    Pyramid,
    /// Ten-point pentagonal prism.
    PentagonalPrism,
    /// Twelve-point hexagonal prism.
    HexagonalPrism,
    /// General polyhedron described by a face stream.
    Polyhedron,
}

const TETRA_FACES: &[&[u8]] = &[&[0, 1, 3], &[1, 2, 3], &[2, 0, 3], &[0, 2, 1]];

const PYRAMID_FACES: &[&[u8]] = &[
    &[0, 3, 2, 1],
    &[0, 1, 4],
    &[1, 2, 4],
    &[2, 3, 4],
    &[3, 0, 4],
];

const WEDGE_FACES: &[&[u8]] = &[
    &[0, 1, 2],
    &[3, 5, 4],
    &[0, 3, 4, 1],
    &[1, 4, 5, 2],
    &[2, 5, 3, 0],
];

const HEXAHEDRON_FACES: &[&[u8]] = &[
    &[0, 4, 7, 3],
    &[1, 2, 6, 5],
    &[0, 1, 5, 4],
    &[3, 7, 6, 2],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

const VOXEL_FACES: &[&[u8]] = &[
    &[0, 4, 6, 2],
    &[1, 3, 7, 5],
    &[0, 1, 5, 4],
    &[2, 6, 7, 3],
    &[0, 2, 3, 1],
    &[4, 5, 7, 6],
];

const PENTAGONAL_PRISM_FACES: &[&[u8]] = &[
    &[0, 4, 3, 2, 1],
    &[5, 6, 7, 8, 9],
    &[0, 1, 6, 5],
    &[1, 2, 7, 6],
    &[2, 3, 8, 7],
    &[3, 4, 9, 8],
    &[4, 0, 5, 9],
];

const HEXAGONAL_PRISM_FACES: &[&[u8]] = &[
    &[0, 5, 4, 3, 2, 1],
    &[6, 7, 8, 9, 10, 11],
    &[0, 1, 7, 6],
    &[1, 2, 8, 7],
    &[2, 3, 9, 8],
    &[3, 4, 10, 9],
    &[4, 5, 11, 10],
    &[5, 0, 6, 11],
];

impl CellType {
    /// Topological dimension of the cell.
    #[must_use]
    pub const fn dimension(self) -> u8 {
        match self {
            Self::Vertex => 0,
            Self::Line => 1,
            Self::Triangle | Self::Quad | Self::Polygon => 2,
            _ => 3,
        }
    }

    /// Fixed corner count, or `None` for polygons and polyhedra.
    #[must_use]
    pub const fn corner_count(self) -> Option<usize> {
        match self {
            Self::Vertex => Some(1),
            Self::Line => Some(2),
            Self::Triangle => Some(3),
            Self::Quad | Self::Tetrahedron => Some(4),
            Self::Pyramid => Some(5),
            Self::Wedge => Some(6),
            Self::Voxel | Self::Hexahedron => Some(8),
            Self::PentagonalPrism => Some(10),
            Self::HexagonalPrism => Some(12),
            Self::Polygon | Self::Polyhedron => None,
        }
    }

    /// Outward-oriented faces of a fixed-topology 3D cell, as local corner
    /// indices. Empty for 0D-2D cells and for polyhedra, whose faces come
    /// from their face stream.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_grid::CellType;
    ///
    /// assert_eq!(CellType::Hexahedron.local_faces().len(), 6);
    /// assert!(CellType::Polyhedron.local_faces().is_empty());
    /// ```
    #[must_use]
    pub const fn local_faces(self) -> &'static [&'static [u8]] {
        match self {
            Self::Tetrahedron => TETRA_FACES,
            Self::Pyramid => PYRAMID_FACES,
            Self::Wedge => WEDGE_FACES,
            Self::Hexahedron => HEXAHEDRON_FACES,
            Self::Voxel => VOXEL_FACES,
            Self::PentagonalPrism => PENTAGONAL_PRISM_FACES,
            Self::HexagonalPrism => HEXAGONAL_PRISM_FACES,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CellType; 13] = [
        CellType::Vertex,
        CellType::Line,
        CellType::Triangle,
        CellType::Quad,
        CellType::Polygon,
        CellType::Tetrahedron,
        CellType::Voxel,
        CellType::Hexahedron,
        CellType::Wedge,
        CellType::Pyramid,
        CellType::PentagonalPrism,
        CellType::HexagonalPrism,
        CellType::Polyhedron,
    ];

    #[test]
    fn test_faces_reference_valid_corners() {
        for ty in ALL {
            let Some(n) = ty.corner_count() else { continue };
            for face in ty.local_faces() {
                assert!(face.len() >= 3);
                assert!(face.iter().all(|&c| usize::from(c) < n), "{ty:?}");
            }
        }
    }

    #[test]
    fn test_every_edge_shared_by_two_faces() {
        // Closed surfaces: each directed edge appears once, its reverse once.
        for ty in ALL {
            let faces = ty.local_faces();
            if faces.is_empty() {
                continue;
            }
            let mut directed = Vec::new();
            for face in faces {
                for i in 0..face.len() {
                    directed.push((face[i], face[(i + 1) % face.len()]));
                }
            }
            for &(a, b) in &directed {
                assert_eq!(directed.iter().filter(|&&e| e == (a, b)).count(), 1);
                assert_eq!(directed.iter().filter(|&&e| e == (b, a)).count(), 1);
            }
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(CellType::Line.dimension(), 1);
        assert_eq!(CellType::Polygon.dimension(), 2);
        assert_eq!(CellType::Polyhedron.dimension(), 3);
    }
}
