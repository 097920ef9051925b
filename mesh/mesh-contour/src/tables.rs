//! Triangulation tables for the linear zoo cells.
//!
//! Each table maps a corner bitmask to a list of triangles over cell-local
//! edges. Bit `i` of the mask is set when corner `i` has a signed distance
//! `>= 0`; values exactly at the isovalue therefore always count as inside.
//!
//! # Ambiguous faces
//!
//! A quad face whose inside corners sit on one diagonal can be cut two ways.
//! These tables always cut off each run of inside corners on a face by its
//! own segment, so inside corners on an ambiguous face are separated and
//! the outside corners are joined. The choice depends only on the signs at
//! the face's corners, so two cells sharing a face always agree on how it is
//! crossed. Triangular faces are never ambiguous, which keeps zoo cells
//! consistent with tetrahedra across shared triangles.
//!
//! The cases are exactly what the generic fallback's face walk produces on
//! the reference cells of [`mesh_grid::CellType::local_faces`]: on each face the segment
//! runs from the crossing where the boundary walk leaves the inside set to
//! the crossing where it re-enters, segments are chained into loops, and
//! each loop is triangulated without chords lying in a cell face. Triangle
//! normals point toward the inside corners.

use mesh_grid::CellType;

/// Cell descriptor used for dispatch.
///
/// The four zoo shapes have precomputed tables; everything else goes
/// through the generic fallback.
///
/// # Example
///
/// ```
/// use mesh_contour::CellShape;
/// use mesh_grid::CellType;
///
/// assert_eq!(CellShape::classify(CellType::Wedge), CellShape::Wedge);
/// assert_eq!(CellShape::classify(CellType::Polyhedron), CellShape::Other);
/// assert!(CellShape::Pyramid.table().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
    /// Four-corner tetrahedron.
    Tetrahedron,
    /// Five-corner pyramid.
    Pyramid,
    /// Six-corner wedge.
    Wedge,
    /// Eight-corner hexahedron.
    Hexahedron,
    /// Any cell without a table.
    Other,
}

impl CellShape {
    /// Classify a cell type.
    #[must_use]
    pub const fn classify(cell_type: CellType) -> Self {
        match cell_type {
            CellType::Tetrahedron => Self::Tetrahedron,
            CellType::Pyramid => Self::Pyramid,
            CellType::Wedge => Self::Wedge,
            CellType::Hexahedron => Self::Hexahedron,
            _ => Self::Other,
        }
    }

    /// True for shapes with a triangulation table.
    #[must_use]
    pub const fn is_zoo(self) -> bool {
        !matches!(self, Self::Other)
    }

    /// Triangulation table of a zoo shape.
    #[must_use]
    pub fn table(self) -> Option<&'static CaseTable> {
        match self {
            Self::Tetrahedron => Some(&TET_TABLE),
            Self::Pyramid => Some(&PYRAMID_TABLE),
            Self::Wedge => Some(&WEDGE_TABLE),
            Self::Hexahedron => Some(&HEX_TABLE),
            Self::Other => None,
        }
    }
}

/// Immutable triangulation data for one zoo shape.
#[derive(Debug)]
pub struct CaseTable {
    /// Corner count.
    pub corners: usize,
    /// Cell-local edges as corner pairs.
    pub edges: &'static [[u8; 2]],
    /// Triangles per corner mask, as cell-local edge indices.
    pub cases: &'static [&'static [[u8; 3]]],
}

impl CaseTable {
    /// Triangles for a corner mask. All-inside and all-outside masks map to
    /// no triangles.
    ///
    /// # Panics
    ///
    /// Panics if `mask` has bits beyond the corner count.
    #[inline]
    #[must_use]
    pub fn triangles(&self, mask: usize) -> &'static [[u8; 3]] {
        self.cases[mask]
    }
}

static TET_TABLE: CaseTable = CaseTable {
    corners: 4,
    edges: &TET_EDGES,
    cases: &TET_CASES,
};

static PYRAMID_TABLE: CaseTable = CaseTable {
    corners: 5,
    edges: &PYRAMID_EDGES,
    cases: &PYRAMID_CASES,
};

static WEDGE_TABLE: CaseTable = CaseTable {
    corners: 6,
    edges: &WEDGE_EDGES,
    cases: &WEDGE_CASES,
};

static HEX_TABLE: CaseTable = CaseTable {
    corners: 8,
    edges: &HEX_EDGES,
    cases: &HEX_CASES,
};

const TET_EDGES: [[u8; 2]; 6] = [[0, 1], [1, 2], [2, 0], [0, 3], [1, 3], [2, 3]];

const PYRAMID_EDGES: [[u8; 2]; 8] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [0, 4],
    [1, 4],
    [2, 4],
    [3, 4],
];

const WEDGE_EDGES: [[u8; 2]; 9] = [
    [0, 1],
    [1, 2],
    [2, 0],
    [3, 4],
    [4, 5],
    [5, 3],
    [0, 3],
    [1, 4],
    [2, 5],
];

const HEX_EDGES: [[u8; 2]; 12] = [
    [0, 1],
    [1, 2],
    [3, 2],
    [0, 3],
    [4, 5],
    [5, 6],
    [7, 6],
    [4, 7],
    [0, 4],
    [1, 5],
    [3, 7],
    [2, 6],
];

/// Tetrahedron cases.
const TET_CASES: [&[[u8; 3]]; 16] = [
    &[], // 0b0000
    &[[0, 3, 2]], // 0b0001
    &[[4, 0, 1]], // 0b0010
    &[[4, 3, 2], [4, 2, 1]], // 0b0011
    &[[5, 1, 2]], // 0b0100
    &[[0, 3, 5], [0, 5, 1]], // 0b0101
    &[[4, 0, 2], [4, 2, 5]], // 0b0110
    &[[4, 3, 5]], // 0b0111
    &[[3, 4, 5]], // 0b1000
    &[[0, 4, 5], [0, 5, 2]], // 0b1001
    &[[3, 0, 1], [3, 1, 5]], // 0b1010
    &[[1, 5, 2]], // 0b1011
    &[[3, 4, 1], [3, 1, 2]], // 0b1100
    &[[0, 4, 1]], // 0b1101
    &[[3, 0, 2]], // 0b1110
    &[], // 0b1111
];

/// Pyramid cases. The quad base is the only face that can be ambiguous.
const PYRAMID_CASES: [&[[u8; 3]]; 32] = [
    &[], // 0b00000
    &[[3, 0, 4]], // 0b00001
    &[[0, 1, 5]], // 0b00010
    &[[3, 1, 5], [3, 5, 4]], // 0b00011
    &[[1, 2, 6]], // 0b00100
    &[[1, 2, 6], [3, 0, 4]], // 0b00101
    &[[0, 2, 6], [0, 6, 5]], // 0b00110
    &[[3, 2, 6], [3, 6, 5], [3, 5, 4]], // 0b00111
    &[[2, 3, 7]], // 0b01000
    &[[2, 0, 4], [2, 4, 7]], // 0b01001
    &[[2, 3, 7], [0, 1, 5]], // 0b01010
    &[[2, 1, 5], [2, 5, 4], [2, 4, 7]], // 0b01011
    &[[1, 3, 7], [1, 7, 6]], // 0b01100
    &[[1, 0, 4], [1, 4, 7], [1, 7, 6]], // 0b01101
    &[[0, 3, 7], [0, 7, 6], [0, 6, 5]], // 0b01110
    &[[5, 4, 7], [5, 7, 6]], // 0b01111
    &[[4, 5, 6], [4, 6, 7]], // 0b10000
    &[[3, 0, 5], [3, 5, 6], [3, 6, 7]], // 0b10001
    &[[0, 1, 6], [0, 6, 7], [0, 7, 4]], // 0b10010
    &[[3, 1, 6], [3, 6, 7]], // 0b10011
    &[[1, 2, 7], [1, 7, 4], [1, 4, 5]], // 0b10100
    &[[1, 2, 7], [1, 7, 5], [7, 3, 0], [7, 0, 5]], // 0b10101
    &[[0, 2, 7], [0, 7, 4]], // 0b10110
    &[[3, 2, 7]], // 0b10111
    &[[2, 3, 4], [2, 4, 5], [2, 5, 6]], // 0b11000
    &[[2, 0, 5], [2, 5, 6]], // 0b11001
    &[[2, 3, 4], [2, 4, 6], [4, 0, 1], [4, 1, 6]], // 0b11010
    &[[2, 1, 6]], // 0b11011
    &[[1, 3, 4], [1, 4, 5]], // 0b11100
    &[[1, 0, 5]], // 0b11101
    &[[0, 3, 4]], // 0b11110
    &[], // 0b11111
];

/// Wedge cases. The three quad side faces can be ambiguous.
const WEDGE_CASES: [&[[u8; 3]]; 64] = [
    &[], // 0b000000
    &[[0, 2, 6]], // 0b000001
    &[[1, 0, 7]], // 0b000010
    &[[1, 2, 6], [1, 6, 7]], // 0b000011
    &[[2, 1, 8]], // 0b000100
    &[[0, 1, 8], [0, 8, 6]], // 0b000101
    &[[2, 0, 7], [2, 7, 8]], // 0b000110
    &[[6, 7, 8]], // 0b000111
    &[[5, 3, 6]], // 0b001000
    &[[0, 2, 5], [0, 5, 3]], // 0b001001
    &[[1, 0, 7], [5, 3, 6]], // 0b001010
    &[[1, 2, 5], [1, 5, 3], [1, 3, 7]], // 0b001011
    &[[2, 1, 8], [5, 3, 6]], // 0b001100
    &[[0, 1, 8], [0, 8, 5], [0, 5, 3]], // 0b001101
    &[[2, 0, 7], [2, 7, 8], [5, 3, 6]], // 0b001110
    &[[5, 3, 7], [5, 7, 8]], // 0b001111
    &[[3, 4, 7]], // 0b010000
    &[[0, 2, 6], [3, 4, 7]], // 0b010001
    &[[1, 0, 3], [1, 3, 4]], // 0b010010
    &[[1, 2, 6], [1, 6, 3], [1, 3, 4]], // 0b010011
    &[[2, 1, 8], [3, 4, 7]], // 0b010100
    &[[0, 1, 8], [0, 8, 6], [3, 4, 7]], // 0b010101
    &[[2, 0, 3], [2, 3, 4], [2, 4, 8]], // 0b010110
    &[[3, 4, 8], [3, 8, 6]], // 0b010111
    &[[5, 4, 7], [5, 7, 6]], // 0b011000
    &[[0, 2, 5], [0, 5, 4], [0, 4, 7]], // 0b011001
    &[[1, 0, 6], [1, 6, 5], [1, 5, 4]], // 0b011010
    &[[1, 2, 5], [1, 5, 4]], // 0b011011
    &[[2, 1, 8], [5, 4, 7], [5, 7, 6]], // 0b011100
    &[[0, 1, 8], [0, 8, 5], [0, 5, 4], [0, 4, 7]], // 0b011101
    &[[2, 0, 4], [0, 6, 5], [0, 5, 4], [2, 4, 8]], // 0b011110
    &[[5, 4, 8]], // 0b011111
    &[[4, 5, 8]], // 0b100000
    &[[0, 2, 6], [4, 5, 8]], // 0b100001
    &[[1, 0, 7], [4, 5, 8]], // 0b100010
    &[[1, 2, 6], [1, 6, 7], [4, 5, 8]], // 0b100011
    &[[2, 1, 4], [2, 4, 5]], // 0b100100
    &[[0, 1, 4], [0, 4, 5], [0, 5, 6]], // 0b100101
    &[[2, 0, 7], [2, 7, 4], [2, 4, 5]], // 0b100110
    &[[4, 5, 6], [4, 6, 7]], // 0b100111
    &[[4, 3, 6], [4, 6, 8]], // 0b101000
    &[[0, 2, 8], [0, 8, 4], [0, 4, 3]], // 0b101001
    &[[1, 0, 7], [4, 3, 6], [4, 6, 8]], // 0b101010
    &[[1, 2, 3], [2, 8, 4], [2, 4, 3], [1, 3, 7]], // 0b101011
    &[[2, 1, 4], [2, 4, 3], [2, 3, 6]], // 0b101100
    &[[0, 1, 4], [0, 4, 3]], // 0b101101
    &[[2, 0, 7], [2, 7, 4], [2, 4, 3], [2, 3, 6]], // 0b101110
    &[[4, 3, 7]], // 0b101111
    &[[3, 5, 8], [3, 8, 7]], // 0b110000
    &[[0, 2, 6], [3, 5, 8], [3, 8, 7]], // 0b110001
    &[[1, 0, 3], [1, 3, 5], [1, 5, 8]], // 0b110010
    &[[1, 2, 6], [1, 6, 3], [1, 3, 5], [1, 5, 8]], // 0b110011
    &[[2, 1, 7], [2, 7, 3], [2, 3, 5]], // 0b110100
    &[[0, 1, 5], [1, 7, 3], [1, 3, 5], [0, 5, 6]], // 0b110101
    &[[2, 0, 3], [2, 3, 5]], // 0b110110
    &[[3, 5, 6]], // 0b110111
    &[[7, 6, 8]], // 0b111000
    &[[0, 2, 8], [0, 8, 7]], // 0b111001
    &[[1, 0, 6], [1, 6, 8]], // 0b111010
    &[[1, 2, 8]], // 0b111011
    &[[2, 1, 7], [2, 7, 6]], // 0b111100
    &[[0, 1, 7]], // 0b111101
    &[[2, 0, 6]], // 0b111110
    &[], // 0b111111
];

/// Hexahedron cases.
const HEX_CASES: [&[[u8; 3]]; 256] = [
    &[], // 0b00000000
    &[[8, 3, 0]], // 0b00000001
    &[[1, 9, 0]], // 0b00000010
    &[[8, 3, 1], [8, 1, 9]], // 0b00000011
    &[[11, 1, 2]], // 0b00000100
    &[[8, 3, 0], [11, 1, 2]], // 0b00000101
    &[[11, 9, 0], [11, 0, 2]], // 0b00000110
    &[[8, 3, 2], [8, 2, 11], [8, 11, 9]], // 0b00000111
    &[[3, 10, 2]], // 0b00001000
    &[[8, 10, 2], [8, 2, 0]], // 0b00001001
    &[[3, 10, 2], [1, 9, 0]], // 0b00001010
    &[[8, 10, 2], [8, 2, 1], [8, 1, 9]], // 0b00001011
    &[[3, 10, 11], [3, 11, 1]], // 0b00001100
    &[[8, 10, 11], [8, 11, 1], [8, 1, 0]], // 0b00001101
    &[[3, 10, 11], [3, 11, 9], [3, 9, 0]], // 0b00001110
    &[[8, 10, 11], [8, 11, 9]], // 0b00001111
    &[[7, 8, 4]], // 0b00010000
    &[[7, 3, 0], [7, 0, 4]], // 0b00010001
    &[[7, 8, 4], [1, 9, 0]], // 0b00010010
    &[[7, 3, 1], [7, 1, 9], [7, 9, 4]], // 0b00010011
    &[[7, 8, 4], [11, 1, 2]], // 0b00010100
    &[[7, 3, 0], [7, 0, 4], [11, 1, 2]], // 0b00010101
    &[[7, 8, 4], [11, 9, 0], [11, 0, 2]], // 0b00010110
    &[[7, 3, 2], [7, 2, 11], [7, 11, 9], [7, 9, 4]], // 0b00010111
    &[[7, 8, 4], [3, 10, 2]], // 0b00011000
    &[[7, 10, 2], [7, 2, 0], [7, 0, 4]], // 0b00011001
    &[[7, 8, 4], [3, 10, 2], [1, 9, 0]], // 0b00011010
    &[[7, 10, 2], [7, 2, 1], [7, 1, 9], [7, 9, 4]], // 0b00011011
    &[[7, 8, 4], [3, 10, 11], [3, 11, 1]], // 0b00011100
    &[[7, 10, 11], [7, 11, 1], [7, 1, 0], [7, 0, 4]], // 0b00011101
    &[[7, 8, 4], [3, 10, 11], [3, 11, 9], [3, 9, 0]], // 0b00011110
    &[[7, 10, 11], [7, 11, 9], [7, 9, 4]], // 0b00011111
    &[[9, 5, 4]], // 0b00100000
    &[[8, 3, 0], [9, 5, 4]], // 0b00100001
    &[[1, 5, 4], [1, 4, 0]], // 0b00100010
    &[[8, 3, 1], [8, 1, 5], [8, 5, 4]], // 0b00100011
    &[[11, 1, 2], [9, 5, 4]], // 0b00100100
    &[[8, 3, 0], [11, 1, 2], [9, 5, 4]], // 0b00100101
    &[[11, 5, 4], [11, 4, 0], [11, 0, 2]], // 0b00100110
    &[[8, 3, 2], [8, 2, 11], [8, 11, 5], [8, 5, 4]], // 0b00100111
    &[[3, 10, 2], [9, 5, 4]], // 0b00101000
    &[[8, 10, 2], [8, 2, 0], [9, 5, 4]], // 0b00101001
    &[[3, 10, 2], [1, 5, 4], [1, 4, 0]], // 0b00101010
    &[[8, 10, 2], [8, 2, 1], [8, 1, 5], [8, 5, 4]], // 0b00101011
    &[[3, 10, 11], [3, 11, 1], [9, 5, 4]], // 0b00101100
    &[[8, 10, 11], [8, 11, 1], [8, 1, 0], [9, 5, 4]], // 0b00101101
    &[[3, 10, 11], [3, 11, 5], [3, 5, 4], [3, 4, 0]], // 0b00101110
    &[[8, 10, 11], [8, 11, 5], [8, 5, 4]], // 0b00101111
    &[[7, 8, 9], [7, 9, 5]], // 0b00110000
    &[[7, 3, 0], [7, 0, 9], [7, 9, 5]], // 0b00110001
    &[[7, 8, 0], [7, 0, 1], [7, 1, 5]], // 0b00110010
    &[[7, 3, 1], [7, 1, 5]], // 0b00110011
    &[[7, 8, 9], [7, 9, 5], [11, 1, 2]], // 0b00110100
    &[[7, 3, 0], [7, 0, 9], [7, 9, 5], [11, 1, 2]], // 0b00110101
    &[[7, 8, 0], [7, 0, 2], [7, 2, 11], [7, 11, 5]], // 0b00110110
    &[[7, 3, 2], [7, 2, 11], [7, 11, 5]], // 0b00110111
    &[[7, 8, 9], [7, 9, 5], [3, 10, 2]], // 0b00111000
    &[[7, 10, 2], [7, 2, 0], [7, 0, 9], [7, 9, 5]], // 0b00111001
    &[[7, 8, 0], [7, 0, 1], [7, 1, 5], [3, 10, 2]], // 0b00111010
    &[[7, 10, 2], [7, 2, 1], [7, 1, 5]], // 0b00111011
    &[[7, 8, 9], [7, 9, 5], [3, 10, 11], [3, 11, 1]], // 0b00111100
    &[[7, 10, 11], [7, 11, 1], [7, 1, 0], [7, 0, 9], [7, 9, 5]], // 0b00111101
    &[[7, 8, 0], [7, 0, 11], [0, 3, 10], [0, 10, 11], [7, 11, 5]], // 0b00111110
    &[[7, 10, 11], [7, 11, 5]], // 0b00111111
    &[[5, 11, 6]], // 0b01000000
    &[[8, 3, 0], [5, 11, 6]], // 0b01000001
    &[[5, 11, 6], [1, 9, 0]], // 0b01000010
    &[[8, 3, 1], [8, 1, 9], [5, 11, 6]], // 0b01000011
    &[[5, 1, 2], [5, 2, 6]], // 0b01000100
    &[[8, 3, 0], [5, 1, 2], [5, 2, 6]], // 0b01000101
    &[[5, 9, 0], [5, 0, 2], [5, 2, 6]], // 0b01000110
    &[[8, 3, 2], [8, 2, 6], [8, 6, 5], [8, 5, 9]], // 0b01000111
    &[[3, 10, 2], [5, 11, 6]], // 0b01001000
    &[[8, 10, 2], [8, 2, 0], [5, 11, 6]], // 0b01001001
    &[[3, 10, 2], [5, 11, 6], [1, 9, 0]], // 0b01001010
    &[[8, 10, 2], [8, 2, 1], [8, 1, 9], [5, 11, 6]], // 0b01001011
    &[[3, 10, 6], [3, 6, 5], [3, 5, 1]], // 0b01001100
    &[[8, 10, 6], [8, 6, 5], [8, 5, 1], [8, 1, 0]], // 0b01001101
    &[[3, 10, 6], [3, 6, 5], [3, 5, 9], [3, 9, 0]], // 0b01001110
    &[[8, 10, 6], [8, 6, 5], [8, 5, 9]], // 0b01001111
    &[[7, 8, 4], [5, 11, 6]], // 0b01010000
    &[[7, 3, 0], [7, 0, 4], [5, 11, 6]], // 0b01010001
    &[[7, 8, 4], [5, 11, 6], [1, 9, 0]], // 0b01010010
    &[[7, 3, 1], [7, 1, 9], [7, 9, 4], [5, 11, 6]], // 0b01010011
    &[[7, 8, 4], [5, 1, 2], [5, 2, 6]], // 0b01010100
    &[[7, 3, 0], [7, 0, 4], [5, 1, 2], [5, 2, 6]], // 0b01010101
    &[[7, 8, 4], [5, 9, 0], [5, 0, 2], [5, 2, 6]], // 0b01010110
    &[[7, 3, 2], [7, 2, 9], [2, 6, 5], [2, 5, 9], [7, 9, 4]], // 0b01010111
    &[[7, 8, 4], [3, 10, 2], [5, 11, 6]], // 0b01011000
    &[[7, 10, 2], [7, 2, 0], [7, 0, 4], [5, 11, 6]], // 0b01011001
    &[[7, 8, 4], [3, 10, 2], [5, 11, 6], [1, 9, 0]], // 0b01011010
    &[[7, 10, 2], [7, 2, 1], [7, 1, 9], [7, 9, 4], [5, 11, 6]], // 0b01011011
    &[[7, 8, 4], [3, 10, 6], [3, 6, 5], [3, 5, 1]], // 0b01011100
    &[[7, 10, 1], [10, 6, 5], [10, 5, 1], [7, 1, 0], [7, 0, 4]], // 0b01011101
    &[[7, 8, 4], [3, 10, 6], [3, 6, 5], [3, 5, 9], [3, 9, 0]], // 0b01011110
    &[[7, 10, 9], [10, 6, 5], [10, 5, 9], [7, 9, 4]], // 0b01011111
    &[[9, 11, 6], [9, 6, 4]], // 0b01100000
    &[[8, 3, 0], [9, 11, 6], [9, 6, 4]], // 0b01100001
    &[[1, 11, 6], [1, 6, 4], [1, 4, 0]], // 0b01100010
    &[[8, 3, 1], [8, 1, 11], [8, 11, 6], [8, 6, 4]], // 0b01100011
    &[[9, 1, 2], [9, 2, 6], [9, 6, 4]], // 0b01100100
    &[[8, 3, 0], [9, 1, 2], [9, 2, 6], [9, 6, 4]], // 0b01100101
    &[[4, 0, 2], [4, 2, 6]], // 0b01100110
    &[[8, 3, 2], [8, 2, 6], [8, 6, 4]], // 0b01100111
    &[[3, 10, 2], [9, 11, 6], [9, 6, 4]], // 0b01101000
    &[[8, 10, 2], [8, 2, 0], [9, 11, 6], [9, 6, 4]], // 0b01101001
    &[[3, 10, 2], [1, 11, 6], [1, 6, 4], [1, 4, 0]], // 0b01101010
    &[[8, 10, 2], [8, 2, 1], [8, 1, 11], [8, 11, 6], [8, 6, 4]], // 0b01101011
    &[[3, 10, 6], [3, 6, 4], [3, 4, 9], [3, 9, 1]], // 0b01101100
    &[[8, 10, 6], [8, 6, 1], [6, 4, 9], [6, 9, 1], [8, 1, 0]], // 0b01101101
    &[[3, 10, 6], [3, 6, 4], [3, 4, 0]], // 0b01101110
    &[[8, 10, 6], [8, 6, 4]], // 0b01101111
    &[[7, 8, 9], [7, 9, 11], [7, 11, 6]], // 0b01110000
    &[[7, 3, 0], [7, 0, 9], [7, 9, 11], [7, 11, 6]], // 0b01110001
    &[[7, 8, 0], [7, 0, 1], [7, 1, 11], [7, 11, 6]], // 0b01110010
    &[[7, 3, 1], [7, 1, 11], [7, 11, 6]], // 0b01110011
    &[[7, 8, 9], [7, 9, 1], [7, 1, 2], [7, 2, 6]], // 0b01110100
    &[[7, 3, 0], [7, 0, 9], [7, 9, 1], [7, 1, 2], [7, 2, 6]], // 0b01110101
    &[[7, 8, 0], [7, 0, 2], [7, 2, 6]], // 0b01110110
    &[[7, 3, 2], [7, 2, 6]], // 0b01110111
    &[[7, 8, 9], [7, 9, 11], [7, 11, 6], [3, 10, 2]], // 0b01111000
    &[[7, 10, 2], [7, 2, 0], [7, 0, 9], [7, 9, 11], [7, 11, 6]], // 0b01111001
    &[[7, 8, 0], [7, 0, 1], [7, 1, 11], [7, 11, 6], [3, 10, 2]], // 0b01111010
    &[[7, 10, 2], [7, 2, 1], [7, 1, 11], [7, 11, 6]], // 0b01111011
    &[[7, 8, 9], [7, 9, 1], [7, 1, 6], [1, 3, 10], [1, 10, 6]], // 0b01111100
    &[[7, 10, 6], [9, 1, 0]], // 0b01111101
    &[[7, 8, 0], [7, 0, 6], [0, 3, 10], [0, 10, 6]], // 0b01111110
    &[[7, 10, 6]], // 0b01111111
    &[[10, 7, 6]], // 0b10000000
    &[[10, 7, 6], [8, 3, 0]], // 0b10000001
    &[[10, 7, 6], [1, 9, 0]], // 0b10000010
    &[[10, 7, 6], [8, 3, 1], [8, 1, 9]], // 0b10000011
    &[[10, 7, 6], [11, 1, 2]], // 0b10000100
    &[[10, 7, 6], [8, 3, 0], [11, 1, 2]], // 0b10000101
    &[[10, 7, 6], [11, 9, 0], [11, 0, 2]], // 0b10000110
    &[[10, 7, 6], [8, 3, 2], [8, 2, 11], [8, 11, 9]], // 0b10000111
    &[[3, 7, 6], [3, 6, 2]], // 0b10001000
    &[[8, 7, 6], [8, 6, 2], [8, 2, 0]], // 0b10001001
    &[[3, 7, 6], [3, 6, 2], [1, 9, 0]], // 0b10001010
    &[[8, 7, 6], [8, 6, 2], [8, 2, 1], [8, 1, 9]], // 0b10001011
    &[[3, 7, 6], [3, 6, 11], [3, 11, 1]], // 0b10001100
    &[[8, 7, 6], [8, 6, 11], [8, 11, 1], [8, 1, 0]], // 0b10001101
    &[[3, 7, 6], [3, 6, 11], [3, 11, 9], [3, 9, 0]], // 0b10001110
    &[[8, 7, 6], [8, 6, 11], [8, 11, 9]], // 0b10001111
    &[[10, 8, 4], [10, 4, 6]], // 0b10010000
    &[[10, 3, 0], [10, 0, 4], [10, 4, 6]], // 0b10010001
    &[[10, 8, 4], [10, 4, 6], [1, 9, 0]], // 0b10010010
    &[[10, 3, 1], [10, 1, 9], [10, 9, 4], [10, 4, 6]], // 0b10010011
    &[[10, 8, 4], [10, 4, 6], [11, 1, 2]], // 0b10010100
    &[[10, 3, 0], [10, 0, 4], [10, 4, 6], [11, 1, 2]], // 0b10010101
    &[[10, 8, 4], [10, 4, 6], [11, 9, 0], [11, 0, 2]], // 0b10010110
    &[[10, 3, 9], [3, 2, 11], [3, 11, 9], [10, 9, 4], [10, 4, 6]], // 0b10010111
    &[[3, 8, 4], [3, 4, 6], [3, 6, 2]], // 0b10011000
    &[[0, 4, 6], [0, 6, 2]], // 0b10011001
    &[[3, 8, 4], [3, 4, 6], [3, 6, 2], [1, 9, 0]], // 0b10011010
    &[[1, 9, 4], [1, 4, 6], [1, 6, 2]], // 0b10011011
    &[[3, 8, 4], [3, 4, 6], [3, 6, 11], [3, 11, 1]], // 0b10011100
    &[[11, 1, 0], [11, 0, 4], [11, 4, 6]], // 0b10011101
    &[[3, 8, 4], [3, 4, 6], [3, 6, 11], [3, 11, 9], [3, 9, 0]], // 0b10011110
    &[[11, 9, 4], [11, 4, 6]], // 0b10011111
    &[[10, 7, 6], [9, 5, 4]], // 0b10100000
    &[[10, 7, 6], [8, 3, 0], [9, 5, 4]], // 0b10100001
    &[[10, 7, 6], [1, 5, 4], [1, 4, 0]], // 0b10100010
    &[[10, 7, 6], [8, 3, 1], [8, 1, 5], [8, 5, 4]], // 0b10100011
    &[[10, 7, 6], [11, 1, 2], [9, 5, 4]], // 0b10100100
    &[[10, 7, 6], [8, 3, 0], [11, 1, 2], [9, 5, 4]], // 0b10100101
    &[[10, 7, 6], [11, 5, 4], [11, 4, 0], [11, 0, 2]], // 0b10100110
    &[[10, 7, 6], [8, 3, 2], [8, 2, 11], [8, 11, 5], [8, 5, 4]], // 0b10100111
    &[[3, 7, 6], [3, 6, 2], [9, 5, 4]], // 0b10101000
    &[[8, 7, 6], [8, 6, 2], [8, 2, 0], [9, 5, 4]], // 0b10101001
    &[[3, 7, 6], [3, 6, 2], [1, 5, 4], [1, 4, 0]], // 0b10101010
    &[[8, 7, 6], [8, 6, 2], [8, 2, 1], [8, 1, 5], [8, 5, 4]], // 0b10101011
    &[[3, 7, 6], [3, 6, 11], [3, 11, 1], [9, 5, 4]], // 0b10101100
    &[[8, 7, 6], [8, 6, 11], [8, 11, 1], [8, 1, 0], [9, 5, 4]], // 0b10101101
    &[[3, 7, 6], [3, 6, 11], [3, 11, 5], [3, 5, 4], [3, 4, 0]], // 0b10101110
    &[[8, 7, 6], [8, 6, 11], [8, 11, 5], [8, 5, 4]], // 0b10101111
    &[[10, 8, 9], [10, 9, 5], [10, 5, 6]], // 0b10110000
    &[[10, 3, 0], [10, 0, 9], [10, 9, 5], [10, 5, 6]], // 0b10110001
    &[[10, 8, 0], [10, 0, 1], [10, 1, 5], [10, 5, 6]], // 0b10110010
    &[[10, 3, 1], [10, 1, 5], [10, 5, 6]], // 0b10110011
    &[[10, 8, 9], [10, 9, 5], [10, 5, 6], [11, 1, 2]], // 0b10110100
    &[[10, 3, 0], [10, 0, 9], [10, 9, 5], [10, 5, 6], [11, 1, 2]], // 0b10110101
    &[[10, 8, 0], [10, 0, 5], [0, 2, 11], [0, 11, 5], [10, 5, 6]], // 0b10110110
    &[[10, 3, 5], [3, 2, 11], [3, 11, 5], [10, 5, 6]], // 0b10110111
    &[[3, 8, 9], [3, 9, 5], [3, 5, 6], [3, 6, 2]], // 0b10111000
    &[[9, 5, 6], [9, 6, 2], [9, 2, 0]], // 0b10111001
    &[[3, 8, 5], [8, 0, 1], [8, 1, 5], [3, 5, 6], [3, 6, 2]], // 0b10111010
    &[[1, 5, 6], [1, 6, 2]], // 0b10111011
    &[[3, 8, 9], [3, 9, 5], [3, 5, 6], [3, 6, 11], [3, 11, 1]], // 0b10111100
    &[[11, 1, 0], [11, 0, 6], [0, 9, 5], [0, 5, 6]], // 0b10111101
    &[[3, 8, 0], [11, 5, 6]], // 0b10111110
    &[[11, 5, 6]], // 0b10111111
    &[[10, 7, 5], [10, 5, 11]], // 0b11000000
    &[[10, 7, 5], [10, 5, 11], [8, 3, 0]], // 0b11000001
    &[[10, 7, 5], [10, 5, 11], [1, 9, 0]], // 0b11000010
    &[[10, 7, 5], [10, 5, 11], [8, 3, 1], [8, 1, 9]], // 0b11000011
    &[[10, 7, 5], [10, 5, 1], [10, 1, 2]], // 0b11000100
    &[[10, 7, 5], [10, 5, 1], [10, 1, 2], [8, 3, 0]], // 0b11000101
    &[[10, 7, 5], [10, 5, 9], [10, 9, 0], [10, 0, 2]], // 0b11000110
    &[[10, 7, 5], [10, 5, 9], [10, 9, 2], [9, 8, 3], [9, 3, 2]], // 0b11000111
    &[[3, 7, 5], [3, 5, 11], [3, 11, 2]], // 0b11001000
    &[[8, 7, 5], [8, 5, 11], [8, 11, 2], [8, 2, 0]], // 0b11001001
    &[[3, 7, 5], [3, 5, 11], [3, 11, 2], [1, 9, 0]], // 0b11001010
    &[[8, 7, 5], [8, 5, 11], [8, 11, 2], [8, 2, 1], [8, 1, 9]], // 0b11001011
    &[[3, 7, 5], [3, 5, 1]], // 0b11001100
    &[[8, 7, 5], [8, 5, 1], [8, 1, 0]], // 0b11001101
    &[[3, 7, 5], [3, 5, 9], [3, 9, 0]], // 0b11001110
    &[[8, 7, 5], [8, 5, 9]], // 0b11001111
    &[[10, 8, 4], [10, 4, 5], [10, 5, 11]], // 0b11010000
    &[[10, 3, 0], [10, 0, 4], [10, 4, 5], [10, 5, 11]], // 0b11010001
    &[[10, 8, 4], [10, 4, 5], [10, 5, 11], [1, 9, 0]], // 0b11010010
    &[[10, 3, 1], [10, 1, 9], [10, 9, 4], [10, 4, 5], [10, 5, 11]], // 0b11010011
    &[[10, 8, 4], [10, 4, 5], [10, 5, 1], [10, 1, 2]], // 0b11010100
    &[[10, 3, 0], [10, 0, 4], [10, 4, 5], [10, 5, 1], [10, 1, 2]], // 0b11010101
    &[[10, 8, 4], [10, 4, 5], [10, 5, 9], [10, 9, 0], [10, 0, 2]], // 0b11010110
    &[[10, 3, 2], [5, 9, 4]], // 0b11010111
    &[[3, 8, 4], [3, 4, 5], [3, 5, 11], [3, 11, 2]], // 0b11011000
    &[[5, 11, 2], [5, 2, 0], [5, 0, 4]], // 0b11011001
    &[[3, 8, 4], [3, 4, 5], [3, 5, 11], [3, 11, 2], [1, 9, 0]], // 0b11011010
    &[[5, 11, 2], [5, 2, 4], [2, 1, 9], [2, 9, 4]], // 0b11011011
    &[[3, 8, 4], [3, 4, 5], [3, 5, 1]], // 0b11011100
    &[[5, 1, 0], [5, 0, 4]], // 0b11011101
    &[[3, 8, 4], [3, 4, 5], [3, 5, 9], [3, 9, 0]], // 0b11011110
    &[[5, 9, 4]], // 0b11011111
    &[[10, 7, 4], [10, 4, 9], [10, 9, 11]], // 0b11100000
    &[[10, 7, 4], [10, 4, 9], [10, 9, 11], [8, 3, 0]], // 0b11100001
    &[[10, 7, 4], [10, 4, 0], [10, 0, 1], [10, 1, 11]], // 0b11100010
    &[[10, 7, 4], [10, 4, 1], [4, 8, 3], [4, 3, 1], [10, 1, 11]], // 0b11100011
    &[[10, 7, 4], [10, 4, 9], [10, 9, 1], [10, 1, 2]], // 0b11100100
    &[[10, 7, 4], [10, 4, 9], [10, 9, 1], [10, 1, 2], [8, 3, 0]], // 0b11100101
    &[[10, 7, 4], [10, 4, 0], [10, 0, 2]], // 0b11100110
    &[[10, 7, 4], [10, 4, 2], [4, 8, 3], [4, 3, 2]], // 0b11100111
    &[[3, 7, 4], [3, 4, 9], [3, 9, 11], [3, 11, 2]], // 0b11101000
    &[[8, 7, 11], [7, 4, 9], [7, 9, 11], [8, 11, 2], [8, 2, 0]], // 0b11101001
    &[[3, 7, 4], [3, 4, 11], [4, 0, 1], [4, 1, 11], [3, 11, 2]], // 0b11101010
    &[[8, 7, 4], [1, 11, 2]], // 0b11101011
    &[[3, 7, 4], [3, 4, 9], [3, 9, 1]], // 0b11101100
    &[[8, 7, 1], [7, 4, 9], [7, 9, 1], [8, 1, 0]], // 0b11101101
    &[[3, 7, 4], [3, 4, 0]], // 0b11101110
    &[[8, 7, 4]], // 0b11101111
    &[[10, 8, 9], [10, 9, 11]], // 0b11110000
    &[[10, 3, 0], [10, 0, 9], [10, 9, 11]], // 0b11110001
    &[[10, 8, 0], [10, 0, 1], [10, 1, 11]], // 0b11110010
    &[[10, 3, 1], [10, 1, 11]], // 0b11110011
    &[[10, 8, 9], [10, 9, 1], [10, 1, 2]], // 0b11110100
    &[[10, 3, 0], [10, 0, 9], [10, 9, 1], [10, 1, 2]], // 0b11110101
    &[[10, 8, 0], [10, 0, 2]], // 0b11110110
    &[[10, 3, 2]], // 0b11110111
    &[[3, 8, 9], [3, 9, 11], [3, 11, 2]], // 0b11111000
    &[[9, 11, 2], [9, 2, 0]], // 0b11111001
    &[[3, 8, 11], [8, 0, 1], [8, 1, 11], [3, 11, 2]], // 0b11111010
    &[[1, 11, 2]], // 0b11111011
    &[[3, 8, 9], [3, 9, 1]], // 0b11111100
    &[[9, 1, 0]], // 0b11111101
    &[[3, 8, 0]], // 0b11111110
    &[], // 0b11111111
];
