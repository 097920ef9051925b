//! Edge-keyed accumulation of output points and cells.
//!
//! Every output point lies on an edge of the input mesh and is identified by
//! that edge's [`EdgeKey`]. Cells sharing an edge look the key up and reuse
//! the point, so a surface is watertight across cell boundaries without any
//! geometric welding. The key is also carried into the [`Partial`] so the
//! assembler can weld surfaces produced by different passes or threads.

// Output indices are u32 like every mesh in the workspace.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use hashbrown::HashMap;
use mesh_grid::{DataArray, Dataset, FieldData, NumericArray, Point3};

use crate::result::CellCounters;

/// Canonical identity of an input edge: its two global point ids, smaller
/// first.
///
/// # Example
///
/// ```
/// use mesh_contour::EdgeKey;
///
/// assert_eq!(EdgeKey::new(7, 2), EdgeKey::new(2, 7));
/// assert_eq!(EdgeKey::new(7, 2).lo(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: usize,
    hi: usize,
}

impl EdgeKey {
    /// Key of the edge between points `a` and `b`.
    #[inline]
    #[must_use]
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Smaller point id.
    #[inline]
    #[must_use]
    pub const fn lo(self) -> usize {
        self.lo
    }

    /// Larger point id.
    #[inline]
    #[must_use]
    pub const fn hi(self) -> usize {
        self.hi
    }
}

/// Where the surface crosses an edge, as a parameter from the first
/// endpoint, plus whether the crossing was degenerate.
///
/// `t = d0 / (d0 - d1)` clamped to `[0, 1]`. A vanishing denominator puts the
/// crossing at the midpoint; a non-finite distance snaps it onto the finite
/// endpoint so missing samples never leak into positions.
#[inline]
pub(crate) fn crossing_parameter(d0: f64, d1: f64) -> (f64, bool) {
    match (d0.is_finite(), d1.is_finite()) {
        (true, true) => {}
        (false, true) => return (1.0, true),
        (true, false) => return (0.0, true),
        (false, false) => return (0.5, true),
    }
    let denominator = d0 - d1;
    if denominator.abs() < f64::MIN_POSITIVE {
        (0.5, true)
    } else {
        ((d0 / denominator).clamp(0.0, 1.0), false)
    }
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        a
    } else if t >= 1.0 {
        b
    } else {
        a + (b - a) * t
    }
}

/// Expected number of output points for `cells` processed cells.
///
/// A surface through an n-cell volume touches on the order of `n^(2/3)`
/// cells, each contributing a few new points.
pub(crate) fn estimated_points(cells: usize) -> usize {
    ((cells as f64).powf(2.0 / 3.0) * 3.0) as usize
}

/// Point-data arrays carried onto output points, flattened to `f64`.
#[derive(Debug)]
pub(crate) struct PointLayout<'a> {
    arrays: Vec<&'a DataArray>,
    width: usize,
}

impl<'a> PointLayout<'a> {
    pub(crate) fn new(field: &'a FieldData, enabled: bool) -> Self {
        let arrays: Vec<&DataArray> = if enabled { field.iter().collect() } else { Vec::new() };
        let width = arrays.iter().map(|a| a.components()).sum();
        Self { arrays, width }
    }

    pub(crate) const fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn arrays(&self) -> &[&'a DataArray] {
        &self.arrays
    }
}

/// Surface produced by one pass over a set of cells.
#[derive(Debug, Default)]
pub(crate) struct Partial {
    pub keys: Vec<EdgeKey>,
    pub points: Vec<Point3<f64>>,
    /// `width` interleaved values per point.
    pub values: Vec<f64>,
    pub triangles: Vec<[u32; 3]>,
    pub lines: Vec<[u32; 2]>,
    pub triangle_cells: Vec<usize>,
    pub line_cells: Vec<usize>,
    pub counters: CellCounters,
}

/// Builds one [`Partial`], creating each edge point once.
pub(crate) struct SurfaceAccumulator<'a> {
    dataset: &'a Dataset,
    layout: &'a PointLayout<'a>,
    lookup: HashMap<EdgeKey, u32>,
    partial: Partial,
}

impl<'a> SurfaceAccumulator<'a> {
    /// Accumulator sized for a pass over `cells` cells.
    pub(crate) fn new(dataset: &'a Dataset, layout: &'a PointLayout<'a>, cells: usize) -> Self {
        let capacity = estimated_points(cells);
        Self {
            dataset,
            layout,
            lookup: HashMap::with_capacity(capacity),
            partial: Partial {
                keys: Vec::with_capacity(capacity),
                points: Vec::with_capacity(capacity),
                values: Vec::with_capacity(capacity * layout.width()),
                ..Partial::default()
            },
        }
    }

    /// Output id of the crossing on edge `a`-`b`, interpolating it on first
    /// use. `da` and `db` are the signed distances at `a` and `b`.
    pub(crate) fn edge_point(&mut self, a: usize, b: usize, da: f64, db: f64) -> u32 {
        let key = EdgeKey::new(a, b);
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }

        // Always interpolate from the low endpoint so every cell and every
        // partial computes bit-identical positions for the same edge.
        let (d0, d1) = if a == key.lo { (da, db) } else { (db, da) };
        let (t, degenerate) = crossing_parameter(d0, d1);
        if degenerate {
            self.partial.counters.degenerate_edges += 1;
        }

        let p0 = self.dataset.point(key.lo);
        let p1 = self.dataset.point(key.hi);
        let position = Point3::new(lerp(p0.x, p1.x, t), lerp(p0.y, p1.y, t), lerp(p0.z, p1.z, t));

        for array in self.layout.arrays() {
            for c in 0..array.components() {
                let v = lerp(array.value(key.lo, c), array.value(key.hi, c), t);
                self.partial.values.push(v);
            }
        }

        let id = self.partial.points.len() as u32;
        self.partial.points.push(position);
        self.partial.keys.push(key);
        self.lookup.insert(key, id);
        id
    }

    pub(crate) fn push_triangle(&mut self, triangle: [u32; 3], cell: usize) {
        self.partial.triangles.push(triangle);
        self.partial.triangle_cells.push(cell);
    }

    pub(crate) fn push_line(&mut self, line: [u32; 2], cell: usize) {
        self.partial.lines.push(line);
        self.partial.line_cells.push(cell);
    }

    pub(crate) fn counters_mut(&mut self) -> &mut CellCounters {
        &mut self.partial.counters
    }

    pub(crate) fn finish(self) -> Partial {
        self.partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_grid::{ArrayValues, StructuredGrid};

    fn line_dataset() -> Dataset {
        let grid = StructuredGrid::uniform([2, 2, 2], Point3::origin(), 1.0)
            .with_point_data(DataArray::scalars_f64(
                "s",
                vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0],
            ))
            .unwrap()
            .with_point_data(
                DataArray::new("v", 2, ArrayValues::F32((0..16).map(|i| i as f32).collect()))
                    .unwrap(),
            )
            .unwrap();
        Dataset::from(grid)
    }

    #[test]
    fn test_crossing_parameter() {
        let (t, degenerate) = crossing_parameter(-1.0, 3.0);
        assert_relative_eq!(t, 0.25);
        assert!(!degenerate);

        assert_relative_eq!(crossing_parameter(0.0, -2.0).0, 0.0);
        assert_relative_eq!(crossing_parameter(0.0, 0.0).0, 0.5);
        assert!(crossing_parameter(0.0, 0.0).1);
    }

    #[test]
    fn test_crossing_snaps_away_from_nan() {
        assert_relative_eq!(crossing_parameter(f64::NAN, 1.0).0, 1.0);
        assert_relative_eq!(crossing_parameter(0.5, f64::NAN).0, 0.0);
        assert!(crossing_parameter(0.5, f64::NAN).1);
    }

    #[test]
    fn test_edge_point_is_shared() {
        let ds = line_dataset();
        let layout = PointLayout::new(ds.point_data(), true);
        assert_eq!(layout.width(), 3);

        let mut acc = SurfaceAccumulator::new(&ds, &layout, 8);
        let a = acc.edge_point(0, 1, -0.5, 0.5);
        let b = acc.edge_point(1, 0, 0.5, -0.5);
        assert_eq!(a, b);

        let partial = acc.finish();
        assert_eq!(partial.points.len(), 1);
        assert_eq!(partial.keys, vec![EdgeKey::new(0, 1)]);
        assert_relative_eq!(partial.points[0].x, 0.5);
        // s, then both components of v
        assert_relative_eq!(partial.values[0], 0.5);
        assert_relative_eq!(partial.values[1], 1.0);
        assert_relative_eq!(partial.values[2], 2.0);
    }

    #[test]
    fn test_disabled_layout() {
        let ds = line_dataset();
        let layout = PointLayout::new(ds.point_data(), false);
        assert_eq!(layout.width(), 0);
        assert!(layout.arrays().is_empty());
    }

    #[test]
    fn test_capacity_estimate_grows_sublinearly() {
        assert!((299..=300).contains(&estimated_points(1000)));
        assert!(estimated_points(1_000_000) < 1_000_000 / 10);
    }
}
