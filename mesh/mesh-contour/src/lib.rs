//! Isosurface extraction for structured, rectilinear and unstructured grids.
//!
//! This crate extracts the level set `f = isovalue` of a point scalar field
//! as a triangle mesh, interpolating point data onto the surface and
//! copying cell data from the cells that produced each triangle.
//!
//! # Routes
//!
//! - **Structured fast path** - lattices with three active axes; hexahedra
//!   are synthesized from lattice coordinates, no connectivity is read
//! - **Zoo path** - tetrahedra, pyramids, wedges and hexahedra of an
//!   unstructured grid, contoured with precomputed tables
//! - **Generic fallback** - polyhedra, voxels, prisms and the 2D cells of a
//!   lattice with a degenerate axis, contoured by walking cell faces
//!
//! Points are keyed by the input edge they lie on, so adjacent cells share
//! points and the zoo and fallback surfaces weld seamlessly.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero Bevy dependencies**.
//!
//! # Example
//!
//! ```
//! use mesh_contour::{ContourParams, extract_isosurface};
//! use mesh_grid::{CellType, DataArray, Dataset, Point3, UnstructuredGrid};
//!
//! let mut grid = UnstructuredGrid::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 1.0),
//! ]);
//! grid.push_cell(CellType::Tetrahedron, &[0, 1, 2, 3]).unwrap();
//! let grid = grid
//!     .with_point_data(DataArray::scalars_f32("density", vec![1.0, 0.0, 0.0, 0.0]))
//!     .unwrap();
//!
//! let result = extract_isosurface(&Dataset::from(grid), &ContourParams::at(0.5, "density")).unwrap();
//!
//! assert_eq!(result.mesh.triangles.len(), 1);
//! assert_eq!(result.mesh.points.len(), 3);
//! println!("{result}");
//! ```
//!
//! # Parallelism
//!
//! With [`ContourParams::parallel`] set, large cell sets are split into
//! chunks processed on the rayon pool. Each chunk builds its own surface
//! and the chunks are welded by edge identity, so the output has the same
//! points and triangles as a serial run.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod accumulator;
mod assemble;
mod dispatch;
mod error;
mod fallback;
mod kernel;
mod params;
mod result;
mod scalar;
mod tables;
mod walk;

pub use accumulator::EdgeKey;
pub use dispatch::{extract_isosurface, extract_levels};
pub use error::{ContourError, ContourResult};
pub use params::{CancelToken, ContourParams};
pub use result::{ExtractionResult, ExtractionStats, Route};
pub use scalar::{DynAccessor, Sample, ScalarAccessor, StructuredAccessor, TypedAccessor};
pub use tables::{CaseTable, CellShape};
