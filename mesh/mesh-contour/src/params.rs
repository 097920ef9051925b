//! Parameters for isosurface extraction.
//!
//! # Presets
//!
//! - [`ContourParams::default()`] - serial, attributes on, no scalars selected
//! - [`ContourParams::at()`] - the usual starting point: isovalue and array
//! - [`ContourParams::interactive()`] - frequent cancellation checks, geometry only
//! - [`ContourParams::batch()`] - parallel, attributes on
//!
//! # Example
//!
//! ```
//! use mesh_contour::{CancelToken, ContourParams};
//!
//! let token = CancelToken::new();
//! let params = ContourParams::at(0.5, "density")
//!     .with_parallel(true)
//!     .with_cancel(token.clone());
//!
//! assert_eq!(params.scalars.as_deref(), Some("density"));
//! assert!(!token.is_cancelled());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cooperative cancellation flag shared between a caller and a running
/// extraction.
///
/// Clones share the same flag. Workers poll it every
/// [`ContourParams::cancel_check_interval`] cells.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Parameters for isosurface extraction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContourParams {
    /// Scalar threshold of the surface. Default: 0.0
    pub isovalue: f64,

    /// Name of the single-component point-data array to contour. Must be set.
    pub scalars: Option<String>,

    /// Restrict extraction to these cell ids. `None` processes every cell.
    pub cells: Option<Vec<usize>>,

    /// Sentinel scalar value treated like NaN (always outside).
    pub missing_value: Option<f64>,

    /// Interpolate every point-data array onto output points. Default: true
    pub interpolate_point_data: bool,

    /// Copy cell data from each output cell's source cell. Default: true
    pub copy_cell_data: bool,

    /// Split cells across the rayon thread pool. Default: false
    pub parallel: bool,

    /// Minimum cell count before the parallel path is used. Default: 65536
    pub parallel_threshold: usize,

    /// Cells between cancellation checks. Default: 4096
    pub cancel_check_interval: usize,

    /// Optional cancellation flag.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cancel: Option<CancelToken>,
}

impl Default for ContourParams {
    fn default() -> Self {
        Self {
            isovalue: 0.0,
            scalars: None,
            cells: None,
            missing_value: None,
            interpolate_point_data: true,
            copy_cell_data: true,
            parallel: false,
            parallel_threshold: 65_536,
            cancel_check_interval: 4096,
            cancel: None,
        }
    }
}

impl ContourParams {
    /// Contour the named array at `isovalue`.
    #[must_use]
    pub fn at(isovalue: f64, scalars: impl Into<String>) -> Self {
        Self {
            isovalue,
            scalars: Some(scalars.into()),
            ..Default::default()
        }
    }

    /// Settings for interactive use: geometry only, frequent cancellation
    /// checks.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            interpolate_point_data: false,
            copy_cell_data: false,
            cancel_check_interval: 256,
            ..Default::default()
        }
    }

    /// Settings for large offline runs: parallel with full attributes.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 16_384,
            ..Default::default()
        }
    }

    /// Set the isovalue.
    #[must_use]
    pub const fn with_isovalue(mut self, isovalue: f64) -> Self {
        self.isovalue = isovalue;
        self
    }

    /// Select the scalar array.
    #[must_use]
    pub fn with_scalars(mut self, name: impl Into<String>) -> Self {
        self.scalars = Some(name.into());
        self
    }

    /// Restrict extraction to a sparse set of cells.
    #[must_use]
    pub fn with_cells(mut self, cells: Vec<usize>) -> Self {
        self.cells = Some(cells);
        self
    }

    /// Treat `value` as a missing sample.
    #[must_use]
    pub const fn with_missing_value(mut self, value: f64) -> Self {
        self.missing_value = Some(value);
        self
    }

    /// Set point-data interpolation.
    #[must_use]
    pub const fn with_point_data(mut self, interpolate: bool) -> Self {
        self.interpolate_point_data = interpolate;
        self
    }

    /// Set cell-data copying.
    #[must_use]
    pub const fn with_cell_data(mut self, copy: bool) -> Self {
        self.copy_cell_data = copy;
        self
    }

    /// Enable or disable the parallel path.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the cell count at which the parallel path kicks in.
    #[must_use]
    pub const fn with_parallel_threshold(mut self, cells: usize) -> Self {
        self.parallel_threshold = cells;
        self
    }

    /// Attach a cancellation token.
    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Set the number of cells between cancellation checks. Zero is treated
    /// as one.
    #[must_use]
    pub const fn with_cancel_check_interval(mut self, cells: usize) -> Self {
        self.cancel_check_interval = cells;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = ContourParams::default();
        assert_relative_eq!(params.isovalue, 0.0);
        assert!(params.scalars.is_none());
        assert!(params.interpolate_point_data);
        assert!(params.copy_cell_data);
        assert!(!params.parallel);
        assert_eq!(params.cancel_check_interval, 4096);
    }

    #[test]
    fn test_presets() {
        let params = ContourParams::at(1.5, "pressure");
        assert_relative_eq!(params.isovalue, 1.5);
        assert_eq!(params.scalars.as_deref(), Some("pressure"));

        let params = ContourParams::interactive();
        assert!(!params.interpolate_point_data);
        assert!(!params.copy_cell_data);

        let params = ContourParams::batch();
        assert!(params.parallel);
        assert!(params.parallel_threshold < ContourParams::default().parallel_threshold);
    }

    #[test]
    fn test_builder() {
        let params = ContourParams::default()
            .with_isovalue(2.0)
            .with_scalars("t")
            .with_cells(vec![3, 1])
            .with_missing_value(-999.0)
            .with_point_data(false)
            .with_parallel_threshold(10);

        assert_relative_eq!(params.isovalue, 2.0);
        assert_eq!(params.cells, Some(vec![3, 1]));
        assert_eq!(params.missing_value, Some(-999.0));
        assert!(!params.interpolate_point_data);
        assert_eq!(params.parallel_threshold, 10);
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let params = ContourParams::default().with_cancel(token.clone());
        token.cancel();
        assert!(params.cancel.as_ref().is_some_and(CancelToken::is_cancelled));
    }
}
