//! Typed data arrays attached to points or cells.
//!
//! A [`DataArray`] is a named, fixed-width array of tuples backed by one of a
//! handful of primitive storage types. Algorithms that only need numbers go
//! through the [`NumericArray`] trait; hot paths can borrow the contiguous
//! `f32`/`f64` storage directly with [`DataArray::as_f32`] and
//! [`DataArray::as_f64`].

// Values are converted through f64 on purpose; integer payloads are small ids
// and counters in practice.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Storage type of a [`DataArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueKind {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 8-bit unsigned integer.
    U8,
}

/// Flat, interleaved storage of an array's values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArrayValues {
    /// 32-bit floats.
    F32(Vec<f32>),
    /// 64-bit floats.
    F64(Vec<f64>),
    /// 32-bit signed integers.
    I32(Vec<i32>),
    /// 64-bit signed integers.
    I64(Vec<i64>),
    /// 8-bit unsigned integers.
    U8(Vec<u8>),
}

impl ArrayValues {
    /// Number of flat values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::U8(v) => v.len(),
        }
    }

    /// Check whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage type tag.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::U8(_) => ValueKind::U8,
        }
    }

    /// Flat value at `index`, widened to `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        match self {
            Self::F32(v) => f64::from(v[index]),
            Self::F64(v) => v[index],
            Self::I32(v) => f64::from(v[index]),
            Self::I64(v) => v[index] as f64,
            Self::U8(v) => f64::from(v[index]),
        }
    }

    /// Convert `f64` values into storage of the given kind.
    ///
    /// Integer kinds round to nearest and saturate at the type bounds.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_f64(kind: ValueKind, values: Vec<f64>) -> Self {
        match kind {
            ValueKind::F64 => Self::F64(values),
            ValueKind::F32 => Self::F32(values.into_iter().map(|v| v as f32).collect()),
            ValueKind::I32 => Self::I32(values.into_iter().map(|v| v.round() as i32).collect()),
            ValueKind::I64 => Self::I64(values.into_iter().map(|v| v.round() as i64).collect()),
            ValueKind::U8 => Self::U8(values.into_iter().map(|v| v.round() as u8).collect()),
        }
    }

    fn gather(&self, components: usize, tuples: &[usize]) -> Self {
        fn pick<T: Copy>(src: &[T], components: usize, tuples: &[usize]) -> Vec<T> {
            let mut out = Vec::with_capacity(tuples.len() * components);
            for &t in tuples {
                out.extend_from_slice(&src[t * components..(t + 1) * components]);
            }
            out
        }

        match self {
            Self::F32(v) => Self::F32(pick(v, components, tuples)),
            Self::F64(v) => Self::F64(pick(v, components, tuples)),
            Self::I32(v) => Self::I32(pick(v, components, tuples)),
            Self::I64(v) => Self::I64(pick(v, components, tuples)),
            Self::U8(v) => Self::U8(pick(v, components, tuples)),
        }
    }
}

/// Uniform read access to a numeric array of tuples.
///
/// Implemented by [`DataArray`]; callers with their own storage can
/// implement it to feed scalar fields without copying.
pub trait NumericArray: Send + Sync {
    /// Number of tuples.
    fn tuple_count(&self) -> usize;

    /// Number of components per tuple.
    fn components(&self) -> usize;

    /// Component `component` of tuple `tuple`, widened to `f64`.
    fn value(&self, tuple: usize, component: usize) -> f64;
}

/// A named array of fixed-width tuples.
///
/// # Example
///
/// ```
/// use mesh_grid::{ArrayValues, DataArray, NumericArray};
///
/// let velocity = DataArray::new(
///     "velocity",
///     3,
///     ArrayValues::F32(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
/// )
/// .unwrap();
///
/// assert_eq!(velocity.tuple_count(), 2);
/// assert_eq!(velocity.value(1, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataArray {
    name: String,
    components: usize,
    values: ArrayValues,
}

impl DataArray {
    /// Create an array, validating that the values split evenly into tuples.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroComponents`] or [`GridError::RaggedArray`].
    pub fn new(
        name: impl Into<String>,
        components: usize,
        values: ArrayValues,
    ) -> GridResult<Self> {
        let name = name.into();
        if components == 0 {
            return Err(GridError::ZeroComponents { name });
        }
        if values.len() % components != 0 {
            return Err(GridError::RaggedArray {
                name,
                len: values.len(),
                components,
            });
        }
        Ok(Self {
            name,
            components,
            values,
        })
    }

    /// Single-component `f32` array.
    #[must_use]
    pub fn scalars_f32(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            components: 1,
            values: ArrayValues::F32(values),
        }
    }

    /// Single-component `f64` array.
    #[must_use]
    pub fn scalars_f64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            components: 1,
            values: ArrayValues::F64(values),
        }
    }

    /// Build an array of the given storage kind from `f64` values.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataArray::new`].
    pub fn from_f64(
        name: impl Into<String>,
        components: usize,
        kind: ValueKind,
        values: Vec<f64>,
    ) -> GridResult<Self> {
        Self::new(name, components, ArrayValues::from_f64(kind, values))
    }

    /// Array name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw storage.
    #[must_use]
    pub const fn values(&self) -> &ArrayValues {
        &self.values
    }

    /// Storage type tag.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.values.kind()
    }

    /// Contiguous `f32` storage, if that is how the array is stored.
    #[must_use]
    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.values {
            ArrayValues::F32(v) => Some(v),
            _ => None,
        }
    }

    /// Contiguous `f64` storage, if that is how the array is stored.
    #[must_use]
    pub fn as_f64(&self) -> Option<&[f64]> {
        match &self.values {
            ArrayValues::F64(v) => Some(v),
            _ => None,
        }
    }

    /// Minimum and maximum of one component, ignoring NaN.
    ///
    /// Returns `None` when there are no finite-comparable values.
    #[must_use]
    pub fn range(&self, component: usize) -> Option<(f64, f64)> {
        if component >= self.components {
            return None;
        }
        let mut bounds: Option<(f64, f64)> = None;
        for t in 0..self.tuple_count() {
            let v = self.value(t, component);
            if v.is_nan() {
                continue;
            }
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        bounds
    }

    /// Copy the listed tuples into a new array with the same name, width and
    /// storage type. Values are copied bit-exactly.
    ///
    /// # Panics
    ///
    /// Panics if any tuple index is out of bounds.
    #[must_use]
    pub fn gather(&self, tuples: &[usize]) -> Self {
        Self {
            name: self.name.clone(),
            components: self.components,
            values: self.values.gather(self.components, tuples),
        }
    }
}

impl NumericArray for DataArray {
    #[inline]
    fn tuple_count(&self) -> usize {
        self.values.len() / self.components
    }

    #[inline]
    fn components(&self) -> usize {
        self.components
    }

    #[inline]
    fn value(&self, tuple: usize, component: usize) -> f64 {
        self.values.get(tuple * self.components + component)
    }
}

/// An ordered collection of uniquely named arrays.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldData {
    arrays: Vec<DataArray>,
}

impl FieldData {
    /// Create an empty field.
    #[must_use]
    pub const fn new() -> Self {
        Self { arrays: Vec::new() }
    }

    /// Append an array.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DuplicateArray`] if the name is taken.
    pub fn push(&mut self, array: DataArray) -> GridResult<()> {
        if self.get(array.name()).is_some() {
            return Err(GridError::DuplicateArray(array.name().to_string()));
        }
        self.arrays.push(array);
        Ok(())
    }

    /// Look up an array by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    /// Iterate over arrays in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DataArray> {
        self.arrays.iter()
    }

    /// Number of arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Check whether the field has no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Check that every array has exactly `tuples` tuples.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TupleCountMismatch`] for the first offender.
    pub fn validate(&self, tuples: usize) -> GridResult<()> {
        for array in &self.arrays {
            if array.tuple_count() != tuples {
                return Err(GridError::TupleCountMismatch {
                    name: array.name().to_string(),
                    expected: tuples,
                    actual: array.tuple_count(),
                });
            }
        }
        Ok(())
    }
}
