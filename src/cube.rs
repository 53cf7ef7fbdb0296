use ndarray::ArrayView3;

use crate::{
    interp::{edge_fraction, interpolate_points},
    tables::{CORNER_OFFSETS, EDGE_CORNERS, triangles_for},
    types::{CaseIndex, IsoRange, Point, RawTriangle, Value},
};

/// Interpolated crossing point of each cube edge, `None` where not computed.
pub type EdgePoints = [Option<Point>; 12];

/// The eight corner samples of the cube anchored at grid index `(x, y, z)`.
///
/// Corner `i` sits at `anchor + CORNER_OFFSETS[i]` and reads the grid at
/// `[y, z, x]` of that position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    pub anchor: [usize; 3],
    pub values: [Value; 8],
}

impl Cube {
    /// Reads the 8 corner values of the cube anchored at `(x, y, z)`.
    ///
    /// The caller guarantees `x + 1`, `y + 1` and `z + 1` are inside the grid.
    #[inline]
    pub fn sample<T>(grid: &ArrayView3<'_, T>, x: usize, y: usize, z: usize) -> Self
    where
        T: Copy + Into<Value>,
    {
        let values: [Value; 8] =
            CORNER_OFFSETS.map(|[dx, dy, dz]| grid[[y + dy, z + dz, x + dx]].into());
        Self {
            anchor: [x, y, z],
            values,
        }
    }

    /// Computes the marching cubes case for this cube.
    ///
    /// Bit `i` is set when corner `i` lies inside `range`:
    ///
    /// ```text
    /// corner:      v8 v7 v6 v5 v4 v3 v2 v1
    /// case bits:  [_][_][_][_][_][_][_][_]
    ///                                   ^-- v1 inside?
    /// ```
    #[inline]
    pub fn case_index(&self, range: &IsoRange) -> CaseIndex {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| range.contains(**v))
            .fold(0, |case, (i, _)| case | (1 << i))
    }

    /// Grid-space position of corner `corner`.
    #[inline]
    pub fn corner_position(&self, corner: usize) -> Point {
        let [x, y, z] = self.anchor;
        let [dx, dy, dz] = CORNER_OFFSETS[corner];
        Point::new((x + dx) as Value, (y + dy) as Value, (z + dz) as Value)
    }

    /// Crossing point of `edge`, interpolated from its `from` corner.
    #[inline]
    pub fn edge_point(&self, edge: usize, range: &IsoRange) -> Point {
        let [from, to] = EDGE_CORNERS[edge];
        let t = edge_fraction(self.values[from], self.values[to], range);
        interpolate_points(&self.corner_position(from), &self.corner_position(to), t)
    }

    /// Fills in every edge of `edges_mask` that is still `None` in `edges`.
    ///
    /// Edges already present (reused from a neighbouring cube) are left untouched.
    pub fn fill_edge_points(&self, edges_mask: u16, range: &IsoRange, edges: &mut EdgePoints) {
        for (i, slot) in edges.iter_mut().enumerate() {
            if edges_mask & (1 << i) != 0 && slot.is_none() {
                *slot = Some(self.edge_point(i, range));
            }
        }
    }
}

/// Resolves the triangles of `case` against the computed `edges`.
///
/// Every edge referenced by the case must already be present in `edges`;
/// a missing crossing panics.
#[inline]
pub fn triangles_from_case(
    case: CaseIndex,
    edges: &EdgePoints,
) -> impl Iterator<Item = RawTriangle> + '_ {
    triangles_for(case).map(move |tri| tri.map(|e| edges[e].expect("edge crossing missing")))
}

#[cfg(test)]
mod tests {
    use ndarray::Array3;

    use super::*;
    use crate::tables::edge_mask;

    /// 2×2×2 grid with `v1 = 0.5` and every other corner `1.5`.
    fn single_corner_grid() -> Array3<Value> {
        let mut grid = Array3::from_elem((2, 2, 2), 1.5);
        grid[[0, 0, 0]] = 0.5;
        grid
    }

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).norm() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn corners_follow_the_cube_layout() {
        let mut grid = Array3::<Value>::zeros((2, 2, 2));
        // v3 = (x+1, y+1, z), v5 = (x, y, z+1), stored [y, z, x]
        grid[[1, 0, 1]] = 3.;
        grid[[0, 1, 0]] = 5.;
        let cube = Cube::sample(&grid.view(), 0, 0, 0);

        assert_eq!(cube.values, [0., 0., 3., 0., 5., 0., 0., 0.]);
        assert_eq!(cube.corner_position(6), Point::new(1., 1., 1.));
    }

    #[test]
    fn case_index_sets_one_bit_per_inside_corner() {
        let grid = single_corner_grid();
        let cube = Cube::sample(&grid.view(), 0, 0, 0);
        let range = IsoRange::new(0.4, 0.6).unwrap();

        assert_eq!(cube.case_index(&range), 1);
        assert_eq!(cube.case_index(&IsoRange::new(1.0, 2.0).unwrap()), 254);
        assert_eq!(cube.case_index(&IsoRange::new(0.0, 2.0).unwrap()), 255);
        assert_eq!(cube.case_index(&IsoRange::new(2.0, 3.0).unwrap()), 0);
    }

    #[test]
    fn isolated_corner_yields_one_triangle_near_v1() {
        let grid = single_corner_grid();
        let cube = Cube::sample(&grid.view(), 0, 0, 0);
        let range = IsoRange::new(0.4, 0.6).unwrap();
        let case = cube.case_index(&range);

        let mut edges: EdgePoints = [None; 12];
        cube.fill_edge_points(edge_mask(case), &range, &mut edges);
        assert_eq!(edges.iter().filter(|e| e.is_some()).count(), 3);

        let tris: Vec<RawTriangle> = triangles_from_case(case, &edges).collect();
        assert_eq!(tris.len(), 1);
        assert_close(tris[0][0], Point::new(0.1, 0., 0.));
        assert_close(tris[0][1], Point::new(0., 0.1, 0.));
        assert_close(tris[0][2], Point::new(0., 0., 0.1));
    }

    #[test]
    #[should_panic(expected = "edge crossing missing")]
    fn missing_edge_crossing_panics() {
        let edges: EdgePoints = [None; 12];
        let _ = triangles_from_case(1, &edges).count();
    }

    #[test]
    fn present_edges_are_not_recomputed() {
        let grid = single_corner_grid();
        let cube = Cube::sample(&grid.view(), 0, 0, 0);
        let range = IsoRange::new(0.4, 0.6).unwrap();
        let marker = Point::new(9., 9., 9.);

        let mut edges: EdgePoints = [None; 12];
        edges[0] = Some(marker);
        cube.fill_edge_points(edge_mask(1), &range, &mut edges);
        assert_eq!(edges[0], Some(marker));
        assert!(edges[3].is_some());
    }
}
