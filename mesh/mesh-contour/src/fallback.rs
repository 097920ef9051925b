//! Generic contouring for cells without a triangulation table.
//!
//! Handles polyhedra, voxels, pentagonal and hexagonal prisms, and the 2D
//! cells of lattices with a degenerate axis. Volumetric cells produce
//! triangles; polygonal cells produce line segments. Vertices and lines
//! cannot carry a level set and are skipped.

use mesh_grid::CellType;

use crate::accumulator::{EdgeKey, SurfaceAccumulator};
use crate::scalar::ScalarAccessor;
use crate::walk::{FaceSet, LoopTriangulator, Segment, chain_loops, face_segments};

/// Reusable buffers for the face walk.
#[derive(Debug, Default)]
pub(crate) struct Workspace {
    face: Vec<usize>,
    faces: FaceSet,
    triangulator: LoopTriangulator,
    crossings: Vec<(EdgeKey, bool)>,
    segments: Vec<Segment>,
    ids: Vec<u32>,
}

/// One cell as seen by the fallback.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GenericCell<'c> {
    pub id: usize,
    pub cell_type: CellType,
    pub points: &'c [u32],
    pub faces: Option<&'c [Vec<u32>]>,
}

fn crossing_id<A: ScalarAccessor>(key: EdgeKey, scalars: &A, acc: &mut SurfaceAccumulator<'_>) -> u32 {
    let (lo, hi) = (key.lo(), key.hi());
    acc.edge_point(lo, hi, scalars.distance(lo), scalars.distance(hi))
}

/// Contour one cell by walking its faces.
pub(crate) fn contour_generic<A: ScalarAccessor>(
    cell: GenericCell<'_>,
    scalars: &A,
    acc: &mut SurfaceAccumulator<'_>,
    ws: &mut Workspace,
) {
    let dimension = cell.cell_type.dimension();
    if dimension < 2 {
        acc.counters_mut().skipped += 1;
        return;
    }
    acc.counters_mut().fallback += 1;

    let inside = |p: usize| scalars.is_inside(p);
    let Some((&first, rest)) = cell.points.split_first() else {
        return;
    };
    let first_inside = inside(first as usize);
    if rest.iter().all(|&p| inside(p as usize) == first_inside) {
        return;
    }

    ws.segments.clear();
    if dimension == 2 {
        ws.face.clear();
        ws.face.extend(cell.points.iter().map(|&p| p as usize));
        face_segments(&ws.face, inside, &mut ws.crossings, &mut ws.segments);
        for &(exit, entry) in &ws.segments {
            let a = crossing_id(exit, scalars, acc);
            let b = crossing_id(entry, scalars, acc);
            acc.push_line([a, b], cell.id);
        }
        return;
    }

    ws.faces.clear();
    match cell.faces {
        Some(faces) => {
            for face in faces {
                ws.faces.push(face.iter().map(|&p| p as usize));
            }
        }
        None => {
            for face in cell.cell_type.local_faces() {
                ws.faces
                    .push(face.iter().map(|&c| cell.points[usize::from(c)] as usize));
            }
        }
    }
    for face in ws.faces.faces() {
        face_segments(face, inside, &mut ws.crossings, &mut ws.segments);
    }

    for chain in chain_loops(&ws.segments) {
        if !chain.closed {
            acc.counters_mut().open_loops += 1;
            continue;
        }
        ws.ids.clear();
        for &key in &chain.points {
            let id = crossing_id(key, scalars, acc);
            ws.ids.push(id);
        }
        let points = &chain.points;
        let faces = &ws.faces;
        // Chains through non-manifold polyhedra can revisit a crossing.
        ws.triangulator.triangulate(
            &ws.ids,
            |a, b| faces.share_face(points[a], points[b]),
            |t| {
                if t[0] != t[1] && t[1] != t[2] && t[0] != t[2] {
                    acc.push_triangle(t, cell.id);
                }
            },
        );
    }
}
