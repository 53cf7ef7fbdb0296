use std::collections::HashMap;

use crate::types::{Point, RawTriangle, Value, Vector};

/// Indexed triangle mesh produced by [`consolidate`].
///
/// `vertices` holds each position once, in the order it was first seen.
/// `faces` holds index triples into `vertices`; no face repeats an index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsoMesh {
    /// Unique vertex positions: `[[x, y, z], ...]`
    pub vertices: Vec<Point>,

    /// Triangle index triples into `vertices`: `[[v0, v1, v2], ...]`
    pub faces: Vec<[usize; 3]>,
}

impl IsoMesh {
    /// Creates an empty mesh with no vertices or faces.
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the three vertex positions of face `face`.
    pub fn face_coords(&self, face: usize) -> [Point; 3] {
        self.faces[face].map(|i| self.vertices[i])
    }

    /// Computes the unit normal of face `face` from its winding.
    ///
    /// Returns the zero vector if the face is collinear.
    pub fn face_normal(&self, face: usize) -> Vector {
        let [a, b, c] = self.face_coords(face);
        let cross = (b - a).cross(&(c - b));

        let nrm = cross.norm();
        if nrm == 0.0 {
            Vector::zeros()
        } else {
            cross / nrm
        }
    }

    /// One normal per face, in face order.
    pub fn face_normals(&self) -> Vec<Vector> {
        (0..self.faces.len()).map(|f| self.face_normal(f)).collect()
    }

    /// Maps grid-space vertices to world space: `origin + bin * p`.
    pub fn to_world(mut self, origin: &Point, bin: Value) -> Self {
        for v in &mut self.vertices {
            *v = *origin + v.coords * bin;
        }
        self
    }
}

/// Exact-equality key for a position. `+ 0.0` folds `-0.0` onto `0.0`.
fn position_key(p: &Point) -> [u64; 3] {
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()]
}

/// A triangle is degenerate when two of its corners are the same position.
#[inline]
fn is_degenerate([a, b, c]: &RawTriangle) -> bool {
    a == b || a == c || b == c
}

/// Turns raw triangles into an indexed mesh.
///
/// Degenerate triangles are dropped before any of their vertices are
/// registered. Remaining vertices are deduplicated by exact position and
/// numbered in first-seen order.
pub fn consolidate(raw: &[RawTriangle]) -> IsoMesh {
    let mut mesh = IsoMesh::new_empty();
    let mut registry: HashMap<[u64; 3], usize> = HashMap::new();
    let mut dropped = 0usize;

    for &tri in raw {
        if is_degenerate(&tri) {
            dropped += 1;
            continue;
        }
        let face = tri.map(|p| {
            *registry.entry(position_key(&p)).or_insert_with(|| {
                mesh.vertices.push(p);
                mesh.vertices.len() - 1
            })
        });
        mesh.faces.push(face);
    }

    log::debug!(
        "consolidated {} raw triangles into {} vertices, {} faces ({} degenerate dropped)",
        raw.len(),
        mesh.vertices.len(),
        mesh.faces.len(),
        dropped
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: Value, y: Value, z: Value) -> Point {
        Point::new(x, y, z)
    }

    #[test]
    fn single_triangle_keeps_order() {
        let raw = [[p(0.1, 0., 0.), p(0., 0.1, 0.), p(0., 0., 0.1)]];
        let mesh = consolidate(&raw);

        assert_eq!(mesh.vertices, raw[0].to_vec());
        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
    }

    #[test]
    fn shared_positions_are_reused() {
        let raw = [
            [p(0., 0., 0.), p(1., 0., 0.), p(0., 1., 0.)],
            [p(1., 0., 0.), p(1., 1., 0.), p(0., 1., 0.)],
        ];
        let mesh = consolidate(&raw);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces, vec![[0, 1, 2], [1, 3, 2]]);
    }

    #[test]
    fn degenerate_triangles_leave_no_trace() {
        let raw = [
            [p(5., 5., 5.), p(5., 5., 5.), p(6., 5., 5.)],
            [p(0., 0., 0.), p(1., 0., 0.), p(0., 1., 0.)],
            [p(0., 0., 0.), p(2., 0., 0.), p(0., 0., 0.)],
        ];
        let mesh = consolidate(&raw);

        assert_eq!(mesh.faces, vec![[0, 1, 2]]);
        assert_eq!(mesh.vertices.len(), 3);
        assert!(!mesh.vertices.contains(&p(5., 5., 5.)));
        assert!(!mesh.vertices.contains(&p(2., 0., 0.)));
    }

    #[test]
    fn negative_zero_is_the_same_vertex() {
        let raw = [
            [p(0., 0., 0.), p(1., 0., 0.), p(0., 1., 0.)],
            [p(-0., 0., 0.), p(0., 1., 0.), p(0., 0., 1.)],
        ];
        let mesh = consolidate(&raw);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces[1], [0, 2, 3]);
    }

    #[test]
    fn normal_follows_winding() {
        let mesh = consolidate(&[[p(0., 0., 0.), p(1., 0., 0.), p(0., 1., 0.)]]);
        assert_eq!(mesh.face_normal(0), Vector::new(0., 0., 1.));

        let flipped = consolidate(&[[p(0., 0., 0.), p(0., 1., 0.), p(1., 0., 0.)]]);
        assert_eq!(flipped.face_normals(), vec![Vector::new(0., 0., -1.)]);
    }

    #[test]
    fn collinear_face_has_zero_normal() {
        let mesh = consolidate(&[[p(0., 0., 0.), p(1., 0., 0.), p(2., 0., 0.)]]);
        assert_eq!(mesh.face_normal(0), Vector::zeros());
    }

    #[test]
    fn world_mapping_scales_then_offsets() {
        let mesh = consolidate(&[[p(0., 0., 0.), p(1., 0., 0.), p(0., 2., 0.)]])
            .to_world(&p(10., 20., 30.), 0.5);
        assert_eq!(
            mesh.vertices,
            vec![p(10., 20., 30.), p(10.5, 20., 30.), p(10., 21., 30.)]
        );
    }
}
