//! Volumetric grid data model for CortenForge.
//!
//! This crate provides the input and output types of the contouring
//! pipeline:
//!
//! - [`StructuredGrid`] / [`RectilinearGrid`] - implicit lattice topology
//! - [`UnstructuredGrid`] - explicit mixed cells, including polyhedra
//! - [`Dataset`] - one enum over all grid kinds
//! - [`DataArray`] / [`FieldData`] - typed point and cell attributes
//! - [`PolyMesh`] - triangles and line segments with attributes
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**. It does no I/O;
//! file readers produce these types and renderers consume them.
//!
//! # Example
//!
//! ```
//! use mesh_grid::{DataArray, Dataset, Point3, StructuredGrid};
//!
//! let grid = StructuredGrid::uniform([3, 3, 3], Point3::origin(), 0.5);
//! let temperature: Vec<f64> = grid.points().iter().map(|p| p.x + p.z).collect();
//! let grid = grid
//!     .with_point_data(DataArray::scalars_f64("temperature", temperature))
//!     .unwrap();
//!
//! let dataset = Dataset::from(grid);
//! assert_eq!(dataset.cell_count(), 8);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod array;
mod cell;
mod dataset;
mod error;
mod poly;
mod structured;
mod unstructured;

pub use array::{ArrayValues, DataArray, FieldData, NumericArray, ValueKind};
pub use cell::CellType;
pub use dataset::Dataset;
pub use error::{GridError, GridResult};
pub use poly::PolyMesh;
pub use structured::{HEX_CORNER_OFFSETS, RectilinearGrid, StructuredGrid, StructuredTopology};
pub use unstructured::{CellRef, UnstructuredGrid};

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
