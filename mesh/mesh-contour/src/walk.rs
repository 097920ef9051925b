//! Table-free cell contouring by walking cell faces.
//!
//! Each face is walked around its boundary. Wherever the inside flag flips
//! along an edge there is a crossing; consecutive crossings pair up into
//! segments that cut each run of inside corners off the face. Segments from
//! all faces of a closed cell chain into loops, and each closed loop is a
//! polygon of the isosurface.
//!
//! A loop can cross an ambiguous quad face twice. Its four crossings on that
//! face are also seen by the neighbouring cell, so a chord between two of
//! them would be drawn by both cells and carry four triangles. Loops are
//! therefore triangulated without chords that lie in a cell face.

use crate::accumulator::EdgeKey;

/// A segment across one face, from the crossing where the boundary walk
/// leaves the inside corners to the crossing where it enters them again.
pub(crate) type Segment = (EdgeKey, EdgeKey);

/// A chain of crossings built from segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chain {
    pub points: Vec<EdgeKey>,
    pub closed: bool,
}

/// Append the segments of one face to `out`.
///
/// `face` lists point ids in boundary order. `crossings` is scratch space.
pub(crate) fn face_segments(
    face: &[usize],
    inside: impl Fn(usize) -> bool,
    crossings: &mut Vec<(EdgeKey, bool)>,
    out: &mut Vec<Segment>,
) {
    crossings.clear();
    let n = face.len();
    for j in 0..n {
        let a = face[j];
        let b = face[(j + 1) % n];
        let (ia, ib) = (inside(a), inside(b));
        if ia != ib {
            crossings.push((EdgeKey::new(a, b), ib));
        }
    }

    let Some(start) = crossings.iter().position(|&(_, entering)| entering) else {
        return;
    };
    let m = crossings.len();
    for pair in 0..m / 2 {
        let entry = crossings[(start + 2 * pair) % m].0;
        let exit = crossings[(start + 2 * pair + 1) % m].0;
        out.push((exit, entry));
    }
}

/// Chain segments into loops.
///
/// Segments are followed head to tail first; when no segment continues the
/// chain in its own direction, a reversed one is accepted, which tolerates
/// polyhedra whose faces are not consistently oriented. A chain that cannot
/// return to its start is reported open.
pub(crate) fn chain_loops(segments: &[Segment]) -> Vec<Chain> {
    let mut used = vec![false; segments.len()];
    let mut chains = Vec::new();

    for first in 0..segments.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let (head, mut current) = segments[first];
        let mut points = vec![head, current];
        let mut closed = false;

        loop {
            let forward = (0..segments.len()).find(|&i| !used[i] && segments[i].0 == current);
            let next = match forward {
                Some(i) => Some((i, segments[i].1)),
                None => (0..segments.len())
                    .find(|&i| !used[i] && segments[i].1 == current)
                    .map(|i| (i, segments[i].0)),
            };
            let Some((i, next)) = next else {
                break;
            };
            used[i] = true;
            if next == head {
                closed = true;
                break;
            }
            points.push(next);
            current = next;
        }

        chains.push(Chain { points, closed });
    }
    chains
}

/// Faces of one cell, stored flat.
#[derive(Debug, Default)]
pub(crate) struct FaceSet {
    points: Vec<usize>,
    ends: Vec<usize>,
}

impl FaceSet {
    pub fn clear(&mut self) {
        self.points.clear();
        self.ends.clear();
    }

    pub fn push(&mut self, face: impl IntoIterator<Item = usize>) {
        self.points.extend(face);
        self.ends.push(self.points.len());
    }

    pub fn faces(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut start = 0;
        self.ends.iter().map(move |&end| {
            let face = &self.points[start..end];
            start = end;
            face
        })
    }

    /// True when some face contains both crossing edges.
    pub fn share_face(&self, a: EdgeKey, b: EdgeKey) -> bool {
        let corners = [a.lo(), a.hi(), b.lo(), b.hi()];
        self.faces().any(|face| corners.iter().all(|c| face.contains(c)))
    }
}

/// Triangulates closed loops with as few in-face chords as possible.
///
/// Interval dynamic program over the loop's diagonals. Ties keep the fan
/// from the first point, so a loop without in-face chords comes out as that
/// fan.
#[derive(Debug, Default)]
pub(crate) struct LoopTriangulator {
    cost: Vec<u32>,
    split: Vec<usize>,
}

impl LoopTriangulator {
    /// Emit the triangles of `polygon` in boundary orientation.
    ///
    /// `in_face(i, j)` reports whether polygon points `i` and `j` lie on a
    /// common cell face.
    pub fn triangulate<T: Copy>(
        &mut self,
        polygon: &[T],
        in_face: impl Fn(usize, usize) -> bool,
        mut emit: impl FnMut([T; 3]),
    ) {
        let n = polygon.len();
        if n < 3 {
            return;
        }
        self.cost.clear();
        self.cost.resize(n * n, 0);
        self.split.clear();
        self.split.resize(n * n, 0);

        let chord = |a: usize, b: usize| u32::from(b > a + 1 && in_face(a, b));
        for len in 2..n {
            for i in 0..n - len {
                let j = i + len;
                let mut best = u32::MAX;
                for k in i + 1..j {
                    let c = self.cost[i * n + k] + self.cost[k * n + j] + chord(i, k) + chord(k, j);
                    if c <= best {
                        best = c;
                        self.split[i * n + j] = k;
                    }
                }
                self.cost[i * n + j] = best;
            }
        }
        self.emit_range(polygon, 0, n - 1, &mut emit);
    }

    fn emit_range<T: Copy, F: FnMut([T; 3])>(&self, polygon: &[T], i: usize, j: usize, emit: &mut F) {
        if j < i + 2 {
            return;
        }
        let k = self.split[i * polygon.len() + j];
        self.emit_range(polygon, i, k, emit);
        emit([polygon[i], polygon[k], polygon[j]]);
        self.emit_range(polygon, k, j, emit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(a: usize, b: usize) -> EdgeKey {
        EdgeKey::new(a, b)
    }

    #[test]
    fn test_triangle_face_one_inside() {
        let mut scratch = Vec::new();
        let mut segments = Vec::new();
        face_segments(&[0, 1, 2], |p| p == 1, &mut scratch, &mut segments);
        // Walk enters at 0-1 and leaves at 1-2.
        assert_eq!(segments, vec![(key(1, 2), key(0, 1))]);
    }

    #[test]
    fn test_uniform_face_has_no_segments() {
        let mut scratch = Vec::new();
        let mut segments = Vec::new();
        face_segments(&[0, 1, 2, 3], |_| true, &mut scratch, &mut segments);
        face_segments(&[0, 1, 2, 3], |_| false, &mut scratch, &mut segments);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_ambiguous_quad_separates_inside_corners() {
        let mut scratch = Vec::new();
        let mut segments = Vec::new();
        face_segments(&[0, 1, 2, 3], |p| p == 0 || p == 2, &mut scratch, &mut segments);
        assert_eq!(segments.len(), 2);
        // Each segment isolates one inside corner.
        assert!(segments.contains(&(key(0, 1), key(3, 0))));
        assert!(segments.contains(&(key(2, 3), key(1, 2))));
    }

    #[test]
    fn test_chain_closes_tetrahedron_corner() {
        let segments = vec![(key(0, 1), key(0, 2)), (key(0, 2), key(0, 3)), (key(0, 3), key(0, 1))];
        let chains = chain_loops(&segments);
        assert_eq!(chains.len(), 1);
        assert!(chains[0].closed);
        assert_eq!(chains[0].points, vec![key(0, 1), key(0, 2), key(0, 3)]);
    }

    #[test]
    fn test_chain_accepts_reversed_segment() {
        let segments = vec![(key(0, 1), key(0, 2)), (key(0, 3), key(0, 2)), (key(0, 3), key(0, 1))];
        let chains = chain_loops(&segments);
        assert_eq!(chains.len(), 1);
        assert!(chains[0].closed);
        assert_eq!(chains[0].points.len(), 3);
    }

    #[test]
    fn test_open_chain() {
        let segments = vec![(key(0, 1), key(0, 2)), (key(0, 2), key(0, 3))];
        let chains = chain_loops(&segments);
        assert_eq!(chains.len(), 1);
        assert!(!chains[0].closed);
    }

    #[test]
    fn test_loop_without_face_chords_is_a_fan() {
        let mut triangles = Vec::new();
        LoopTriangulator::default().triangulate(&[10, 11, 12, 13], |_, _| false, |t| triangles.push(t));
        assert_eq!(triangles, vec![[10, 11, 12], [10, 12, 13]]);

        triangles.clear();
        LoopTriangulator::default().triangulate(&[1, 2], |_, _| false, |t| triangles.push(t));
        assert!(triangles.is_empty());
    }

    #[test]
    fn test_tunnel_loop_avoids_face_chords() {
        // Hexahedron with corners 0, 2, 4, 5, 6 inside: the loop crosses the
        // bottom face 0-1-2-3 twice.
        let inside = |p: usize| [0, 2, 4, 5, 6].contains(&p);
        let mut faces = FaceSet::default();
        for face in [[0, 4, 7, 3], [1, 2, 6, 5], [0, 1, 5, 4], [3, 7, 6, 2], [0, 3, 2, 1], [4, 5, 6, 7]] {
            faces.push(face);
        }
        let mut scratch = Vec::new();
        let mut segments = Vec::new();
        for face in faces.faces() {
            face_segments(face, inside, &mut scratch, &mut segments);
        }
        let chains = chain_loops(&segments);
        assert_eq!(chains.len(), 1);
        let points = &chains[0].points;
        assert_eq!(points.len(), 7);

        let mut triangles = Vec::new();
        LoopTriangulator::default().triangulate(
            points,
            |a, b| faces.share_face(points[a], points[b]),
            |t| triangles.push(t),
        );
        assert_eq!(triangles.len(), 5);

        let bottom = [key(0, 1), key(1, 2), key(2, 3), key(0, 3)];
        for t in &triangles {
            assert!(!t.iter().all(|k| bottom.contains(k)), "triangle {t:?} lies in a face");
            for (a, b) in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                let boundary = segments.contains(&(a, b)) || segments.contains(&(b, a));
                assert!(boundary || !faces.share_face(a, b), "chord {a:?}-{b:?} lies in a face");
            }
        }
    }

    #[test]
    fn test_share_face() {
        let mut faces = FaceSet::default();
        faces.push([0, 1, 2, 3]);
        faces.push([0, 1, 5, 4]);
        assert!(faces.share_face(key(1, 2), key(0, 3)));
        assert!(faces.share_face(key(0, 4), key(1, 5)));
        assert!(!faces.share_face(key(1, 2), key(0, 4)));
        assert_eq!(faces.faces().count(), 2);
    }
}
