//! Error types for grid construction.

use thiserror::Error;

use crate::CellType;

/// Errors raised while building or attaching data to a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A data array must have at least one component.
    #[error("array '{name}' has zero components")]
    ZeroComponents {
        /// Array name.
        name: String,
    },

    /// The flat value count is not a multiple of the component count.
    #[error("array '{name}' has {len} values, not a multiple of {components} components")]
    RaggedArray {
        /// Array name.
        name: String,
        /// Number of flat values.
        len: usize,
        /// Declared component count.
        components: usize,
    },

    /// An array was attached whose tuple count does not match its owner.
    #[error("array '{name}' has {actual} tuples, expected {expected}")]
    TupleCountMismatch {
        /// Array name.
        name: String,
        /// Number of points or cells the array must cover.
        expected: usize,
        /// Number of tuples the array actually has.
        actual: usize,
    },

    /// Two arrays with the same name were attached to one field.
    #[error("duplicate array name '{0}'")]
    DuplicateArray(String),

    /// Grid dimensions do not match the supplied point count.
    #[error("dimensions {dims:?} describe {expected} points, got {actual}")]
    DimensionMismatch {
        /// Point dimensions along i, j and k.
        dims: [usize; 3],
        /// Points implied by the dimensions.
        expected: usize,
        /// Points supplied.
        actual: usize,
    },

    /// A cell references a point that does not exist.
    #[error("cell {cell} references point {point}, grid has {point_count} points")]
    PointOutOfRange {
        /// Cell index being inserted.
        cell: usize,
        /// Offending point id.
        point: u32,
        /// Number of points in the grid.
        point_count: usize,
    },

    /// A fixed-size cell was given the wrong number of corners.
    #[error("{cell_type:?} needs {expected} corners, got {actual}")]
    WrongCornerCount {
        /// Cell type being inserted.
        cell_type: CellType,
        /// Corners the type requires.
        expected: usize,
        /// Corners supplied.
        actual: usize,
    },

    /// A polygon or polyhedron was malformed.
    #[error("invalid {cell_type:?} cell: {reason}")]
    InvalidCell {
        /// Cell type being inserted.
        cell_type: CellType,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = std::result::Result<T, GridError>;
