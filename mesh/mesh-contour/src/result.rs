//! Result types for isosurface extraction.

use std::fmt;
use std::ops::AddAssign;

use mesh_grid::PolyMesh;

/// Path an extraction took through the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Structured or rectilinear grid with three active axes; hexahedra
    /// synthesized from lattice coordinates.
    Structured,
    /// Unstructured grid containing only zoo cells.
    UnstructuredZoo,
    /// Unstructured grid with zoo cells and cells for the generic fallback.
    UnstructuredMixed,
    /// Every cell went through the generic fallback.
    GenericFallback,
    /// No cell could cross the isovalue; nothing was visited.
    RangeRejected,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structured => "structured",
            Self::UnstructuredZoo => "unstructured",
            Self::UnstructuredMixed => "mixed",
            Self::GenericFallback => "fallback",
            Self::RangeRejected => "range-rejected",
        };
        f.write_str(name)
    }
}

/// Counters gathered while contouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Route taken.
    pub route: Route,

    /// Cells examined.
    pub cells_visited: usize,

    /// Cells handled by the triangulation tables.
    pub zoo_cells: usize,

    /// Cells handled by the generic fallback.
    pub fallback_cells: usize,

    /// Cells that cannot carry a surface (vertices and lines).
    pub skipped_cells: usize,

    /// Crossings placed at an edge midpoint or snapped to a finite corner.
    pub degenerate_edges: usize,

    /// Polyhedron face chains that did not close and were dropped.
    pub open_loops: usize,

    /// Points collapsed when merging partial surfaces.
    pub merged_points: usize,

    /// Number of partial surfaces merged.
    pub partials: usize,
}

impl ExtractionStats {
    pub(crate) fn new(route: Route, counters: CellCounters) -> Self {
        Self {
            route,
            cells_visited: counters.visited,
            zoo_cells: counters.zoo,
            fallback_cells: counters.fallback,
            skipped_cells: counters.skipped,
            degenerate_edges: counters.degenerate_edges,
            open_loops: counters.open_loops,
            merged_points: 0,
            partials: 0,
        }
    }
}

/// Per-partial counters, summed across chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CellCounters {
    pub visited: usize,
    pub zoo: usize,
    pub fallback: usize,
    pub skipped: usize,
    pub degenerate_edges: usize,
    pub open_loops: usize,
}

impl AddAssign for CellCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.visited += rhs.visited;
        self.zoo += rhs.zoo;
        self.fallback += rhs.fallback;
        self.skipped += rhs.skipped;
        self.degenerate_edges += rhs.degenerate_edges;
        self.open_loops += rhs.open_loops;
    }
}

/// Result of an isosurface extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Isovalue the surface was extracted at.
    pub isovalue: f64,

    /// The extracted surface.
    pub mesh: PolyMesh,

    /// Extraction counters.
    pub stats: ExtractionStats,
}

impl ExtractionResult {
    /// True when the surface has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }

    /// Number of output triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangles.len()
    }

    /// Number of output line segments.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.mesh.lines.len()
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Isosurface at {}: {} points, {} triangles, {} lines ({} route, {} cells visited)",
            self.isovalue,
            self.mesh.points.len(),
            self.triangle_count(),
            self.line_count(),
            self.stats.route,
            self.stats.cells_visited
        )
    }
}
