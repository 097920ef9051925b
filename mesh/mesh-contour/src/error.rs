//! Error types for isosurface extraction.

use mesh_grid::GridError;
use thiserror::Error;

/// Errors that can occur during isosurface extraction.
///
/// Only invalid input and caller cancellation surface as errors. Degenerate
/// topology, unsupported cell types and numeric corner cases are handled by
/// rerouting or clamping and show up in
/// [`ExtractionStats`](crate::ExtractionStats) instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContourError {
    /// No scalar array was selected.
    #[error("No scalar array selected")]
    MissingScalars,

    /// The selected scalar array does not exist in the point data.
    #[error("Point data has no array named '{name}'")]
    UnknownArray {
        /// Requested array name.
        name: String,
    },

    /// The selected scalar array has more than one component.
    #[error("Array '{name}' has {components} components, expected a single-component scalar")]
    MultiComponentScalars {
        /// Array name.
        name: String,
        /// Component count of the array.
        components: usize,
    },

    /// The scalar array does not have one value per point.
    #[error("Array '{name}' has {actual} tuples but the dataset has {expected} points")]
    ScalarLengthMismatch {
        /// Array name.
        name: String,
        /// Point count of the dataset.
        expected: usize,
        /// Tuple count of the array.
        actual: usize,
    },

    /// A requested cell id is past the end of the dataset.
    #[error("Cell {cell} out of range ({cell_count} cells)")]
    CellOutOfRange {
        /// Requested cell id.
        cell: usize,
        /// Number of cells in the dataset.
        cell_count: usize,
    },

    /// Building an output array failed.
    #[error("Output data error: {0}")]
    Grid(#[from] GridError),

    /// The extraction was cancelled through its [`CancelToken`](crate::CancelToken).
    #[error("Extraction cancelled after {cells_visited} cells")]
    Cancelled {
        /// Cells processed by the chunk that observed the cancellation.
        cells_visited: usize,
    },
}

/// Result type for contouring operations.
pub type ContourResult<T> = std::result::Result<T, ContourError>;
