//! Signed-distance access to the contoured scalar field.
//!
//! Every accessor returns `value - isovalue` for a point. A non-negative
//! distance puts the point inside the surface. NaN samples and the
//! configured missing-value sentinel come back as NaN, which compares false
//! against zero and therefore always classifies as outside.
//!
//! Contiguous `f32`/`f64` arrays get a monomorphized [`TypedAccessor`];
//! everything else goes through the [`DynAccessor`] over
//! [`NumericArray`].

use mesh_grid::{DataArray, NumericArray, StructuredTopology};

/// Signed distance of a point to the isovalue.
pub trait ScalarAccessor: Sync {
    /// `value(point) - isovalue`, or NaN for a missing sample.
    fn distance(&self, point: usize) -> f64;

    /// True when the point classifies as inside (`distance >= 0`).
    #[inline]
    fn is_inside(&self, point: usize) -> bool {
        self.distance(point) >= 0.0
    }
}

impl<A: ScalarAccessor + ?Sized> ScalarAccessor for &A {
    #[inline]
    fn distance(&self, point: usize) -> f64 {
        (**self).distance(point)
    }
}

/// Primitive sample types with a direct accessor.
pub trait Sample: Copy + Send + Sync + 'static {
    /// Widen to `f64`.
    fn to_f64(self) -> f64;
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

#[inline]
#[allow(clippy::float_cmp)]
fn shift(value: f64, isovalue: f64, missing: Option<f64>) -> f64 {
    match missing {
        Some(m) if value == m => f64::NAN,
        _ => value - isovalue,
    }
}

/// Accessor over a contiguous slice of samples.
///
/// # Example
///
/// ```
/// use mesh_contour::{ScalarAccessor, TypedAccessor};
///
/// let values = [0.0_f32, 1.0, f32::NAN];
/// let acc = TypedAccessor::new(&values, 0.5, None);
///
/// assert!(acc.distance(0) < 0.0);
/// assert!(acc.is_inside(1));
/// assert!(!acc.is_inside(2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TypedAccessor<'a, T: Sample> {
    values: &'a [T],
    isovalue: f64,
    missing: Option<f64>,
}

impl<'a, T: Sample> TypedAccessor<'a, T> {
    /// Wrap a slice with one value per point.
    #[must_use]
    pub const fn new(values: &'a [T], isovalue: f64, missing: Option<f64>) -> Self {
        Self {
            values,
            isovalue,
            missing,
        }
    }
}

impl<T: Sample> ScalarAccessor for TypedAccessor<'_, T> {
    #[inline]
    fn distance(&self, point: usize) -> f64 {
        shift(self.values[point].to_f64(), self.isovalue, self.missing)
    }
}

/// Accessor over any [`NumericArray`], one dynamic call per sample.
#[derive(Clone, Copy)]
pub struct DynAccessor<'a> {
    array: &'a dyn NumericArray,
    isovalue: f64,
    missing: Option<f64>,
}

impl<'a> DynAccessor<'a> {
    /// Wrap a single-component array.
    #[must_use]
    pub fn new(array: &'a dyn NumericArray, isovalue: f64, missing: Option<f64>) -> Self {
        Self {
            array,
            isovalue,
            missing,
        }
    }
}

impl std::fmt::Debug for DynAccessor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynAccessor")
            .field("tuples", &self.array.tuple_count())
            .field("isovalue", &self.isovalue)
            .finish_non_exhaustive()
    }
}

impl ScalarAccessor for DynAccessor<'_> {
    #[inline]
    fn distance(&self, point: usize) -> f64 {
        shift(self.array.value(point, 0), self.isovalue, self.missing)
    }
}

/// Accessor that also addresses points by lattice coordinates.
#[derive(Debug, Clone, Copy)]
pub struct StructuredAccessor<A> {
    inner: A,
    strides: [usize; 3],
}

impl<A: ScalarAccessor> StructuredAccessor<A> {
    /// Wrap `inner` with the point strides of `topology`.
    #[must_use]
    pub const fn new(inner: A, topology: &StructuredTopology) -> Self {
        Self {
            inner,
            strides: topology.point_strides(),
        }
    }

    /// Distance at the corner `(di, dj, dk)` of the cell whose lowest corner
    /// is `(i, j, k)`.
    #[inline]
    #[must_use]
    pub fn distance_at(&self, ijk: [usize; 3], offset: [usize; 3]) -> f64 {
        self.inner.distance(self.flat(ijk, offset))
    }

    /// Flattened point id of a cell corner.
    #[inline]
    #[must_use]
    pub const fn flat(&self, ijk: [usize; 3], offset: [usize; 3]) -> usize {
        (ijk[0] + offset[0]) * self.strides[0]
            + (ijk[1] + offset[1]) * self.strides[1]
            + (ijk[2] + offset[2]) * self.strides[2]
    }
}

impl<A: ScalarAccessor> ScalarAccessor for StructuredAccessor<A> {
    #[inline]
    fn distance(&self, point: usize) -> f64 {
        self.inner.distance(point)
    }
}

/// Accessor chosen for an array's storage type.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scalars<'a> {
    F32(TypedAccessor<'a, f32>),
    F64(TypedAccessor<'a, f64>),
    Dynamic(DynAccessor<'a>),
}

impl<'a> Scalars<'a> {
    /// Pick the fastest accessor for `array`.
    pub(crate) fn select(array: &'a DataArray, isovalue: f64, missing: Option<f64>) -> Self {
        if let Some(values) = array.as_f32() {
            Self::F32(TypedAccessor::new(values, isovalue, missing))
        } else if let Some(values) = array.as_f64() {
            Self::F64(TypedAccessor::new(values, isovalue, missing))
        } else {
            Self::Dynamic(DynAccessor::new(array, isovalue, missing))
        }
    }

    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Dynamic(_) => "dynamic",
        }
    }
}

/// Run `$body` with `$acc` bound to the concrete accessor inside a
/// [`Scalars`], so the body is monomorphized once per storage type.
macro_rules! with_accessor {
    ($scalars:expr, $acc:ident => $body:expr) => {
        match $scalars {
            $crate::scalar::Scalars::F32($acc) => $body,
            $crate::scalar::Scalars::F64($acc) => $body,
            $crate::scalar::Scalars::Dynamic($acc) => $body,
        }
    };
}

pub(crate) use with_accessor;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_grid::ArrayValues;

    #[test]
    fn test_typed_distance() {
        let values = [1.0_f64, 2.0, 3.0];
        let acc = TypedAccessor::new(&values, 2.0, None);
        assert_relative_eq!(acc.distance(0), -1.0);
        assert_relative_eq!(acc.distance(1), 0.0);
        assert!(acc.is_inside(1));
        assert!(!acc.is_inside(0));
    }

    #[test]
    fn test_missing_value_is_outside() {
        let values = [-999.0_f32, 5.0];
        let acc = TypedAccessor::new(&values, -1000.0, Some(-999.0));
        assert!(acc.distance(0).is_nan());
        assert!(!acc.is_inside(0));
        assert!(acc.is_inside(1));
    }

    #[test]
    fn test_dynamic_matches_typed() {
        let array = DataArray::new("ids", 1, ArrayValues::I32(vec![0, 4, 8])).unwrap();
        let scalars = Scalars::select(&array, 4.0, None);
        assert_eq!(scalars.kind(), "dynamic");
        let d = with_accessor!(scalars, acc => acc.distance(2));
        assert_relative_eq!(d, 4.0);
    }

    #[test]
    fn test_select_typed() {
        let array = DataArray::scalars_f32("s", vec![0.0, 1.0]);
        assert_eq!(Scalars::select(&array, 0.0, None).kind(), "f32");
        let array = DataArray::scalars_f64("s", vec![0.0, 1.0]);
        assert_eq!(Scalars::select(&array, 0.0, None).kind(), "f64");
    }

    #[test]
    fn test_structured_offsets() {
        let topology = StructuredTopology::new([3, 2, 2]);
        let values: Vec<f64> = (0..12_u8).map(f64::from).collect();
        let acc = StructuredAccessor::new(TypedAccessor::new(&values, 0.0, None), &topology);

        assert_eq!(acc.flat([1, 0, 0], [1, 1, 1]), topology.point_id(2, 1, 1));
        assert_relative_eq!(acc.distance_at([0, 0, 0], [1, 1, 0]), 4.0);
        assert_relative_eq!(acc.distance_at([1, 1, 1], [0, 0, 0]), 10.0);
    }
}
