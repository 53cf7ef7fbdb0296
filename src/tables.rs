//! Static marching cubes case table.
//!
//! Corner and edge numbering used throughout the crate (`v1..v8` are corners
//! `0..7`, `e1..e12` are edges `0..11`):
//!
//! ```text
//!        v8 ------ v7              z
//!       / |       / |              |  y
//!     v5 ------ v6  |              | /
//!     |  v4 ----|- v3              *---- x
//!     |  /      |  /
//!     | /       | /
//!     v1 ------ v2
//!
//!  v1 = (x,   y,   z  )    v5 = (x,   y,   z+1)
//!  v2 = (x+1, y,   z  )    v6 = (x+1, y,   z+1)
//!  v3 = (x+1, y+1, z  )    v7 = (x+1, y+1, z+1)
//!  v4 = (x,   y+1, z  )    v8 = (x,   y+1, z+1)
//! ```
//!
//! Edges `e1..e4` run around the bottom face, `e5..e8` around the top face and
//! `e9..e12` are the vertical edges (see [`EDGE_CORNERS`]).
//!
//! Only cases `0..=127` are tabulated. A case above 127 is the complement of
//! `255 - case` and reuses its triangles, except for the three ambiguous
//! configurations in [`AMBIGUOUS_CASES`], which carry their own triangulation.
//! Cases with several disjoint features are stored already merged: their rows
//! are the concatenation of the rows of their single-feature parts.

use crate::types::CaseIndex;

/// Length of a table row: at most four triangles, then a `-1` terminator.
pub const CASE_ROW_LEN: usize = 13;

/// Offset of each corner from the cube anchor, as `[x, y, z]`.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// `[from, to]` corners of each edge. Interpolation always starts at `from`.
pub const EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [3, 2],
    [0, 3],
    [4, 5],
    [5, 6],
    [7, 6],
    [4, 7],
    [0, 4],
    [1, 5],
    [3, 7],
    [2, 6],
];

/// Triangles per case as edge index triples, terminated by `-1`:
/// ```text
/// TRI_TABLE[case] = [e0, e1, e2,  e3, e4, e5,  -1, ...]
///                    \___tri0__/  \___tri1__/
/// ```
/// Triangle winding is significant and must not be reordered.
#[rustfmt::skip]
pub const TRI_TABLE: [[i8; CASE_ROW_LEN]; 128] = [
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 0: none
    [ 0,  3,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 1: v1
    [ 9,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 2: v2
    [ 1,  3,  8,  1,  8,  9, -1, -1, -1, -1, -1, -1, -1], // 3: v1 v2
    [11,  2,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 4: v3
    [ 0,  3,  8, 11,  2,  1, -1, -1, -1, -1, -1, -1, -1], // 5: v1 v3
    [11,  2,  0, 11,  0,  9, -1, -1, -1, -1, -1, -1, -1], // 6: v2 v3
    [ 2,  3, 11,  3,  8, 11, 11,  8,  9, -1, -1, -1, -1], // 7: v1 v2 v3
    [ 2, 10,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 8: v4
    [ 2, 10,  8,  2,  8,  0, -1, -1, -1, -1, -1, -1, -1], // 9: v1 v4
    [ 9,  1,  0,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 10: v2 v4
    [ 2, 10,  1, 10,  9,  1, 10,  8,  9, -1, -1, -1, -1], // 11: v1 v2 v4
    [10,  3, 11,  1,  3, 11, -1, -1, -1, -1, -1, -1, -1], // 12: v3 v4
    [10,  8, 11, 11,  8,  0, 11,  0,  1, -1, -1, -1, -1], // 13: v1 v3 v4
    [10,  9, 11, 10,  3,  9,  3,  0,  9, -1, -1, -1, -1], // 14: v2 v3 v4
    [10,  8, 11, 11,  8,  9, -1, -1, -1, -1, -1, -1, -1], // 15: v1 v2 v3 v4
    [ 7,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 16: v5
    [ 3,  0,  7,  7,  0,  4, -1, -1, -1, -1, -1, -1, -1], // 17: v1 v5
    [ 7,  8,  4,  9,  1,  0, -1, -1, -1, -1, -1, -1, -1], // 18: v2 v5
    [ 7,  3,  1,  7,  1,  9,  7,  9,  4, -1, -1, -1, -1], // 19: v1 v2 v5
    [ 7,  8,  4, 11,  2,  1, -1, -1, -1, -1, -1, -1, -1], // 20: v3 v5
    [ 3,  0,  7,  7,  0,  4, 11,  2,  1, -1, -1, -1, -1], // 21: v1 v3 v5
    [ 7,  8,  4, 11,  2,  0, 11,  0,  9, -1, -1, -1, -1], // 22: v2 v3 v5
    [ 2,  9,  7,  2,  9, 11,  7,  9,  4,  2,  3,  7, -1], // 23: v1 v2 v3 v5
    [ 7,  8,  4,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 24: v4 v5
    [ 0,  4,  2,  2,  7, 10,  2,  4,  7, -1, -1, -1, -1], // 25: v1 v4 v5
    [ 9,  1,  0,  2, 10,  3,  7,  8,  4, -1, -1, -1, -1], // 26: v2 v4 v5
    [10,  2,  1, 10,  1,  9,  9, 10,  7,  7,  4,  9, -1], // 27: v1 v2 v4 v5
    [ 7,  8,  4, 10,  3, 11,  1,  3, 11, -1, -1, -1, -1], // 28: v3 v4 v5
    [10,  4,  1, 10, 11,  1, 10,  4,  7,  1,  0,  4, -1], // 29: v1 v3 v4 v5
    [10,  9, 11, 10,  3,  9,  3,  0,  9,  7,  8,  4, -1], // 30: v2 v3 v4 v5
    [10, 11,  9, 10,  7,  9,  7,  9,  4, -1, -1, -1, -1], // 31: v1 v2 v3 v4 v5
    [ 5,  4,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 32: v6
    [ 0,  3,  8,  5,  4,  9, -1, -1, -1, -1, -1, -1, -1], // 33: v1 v6
    [ 0,  1,  4,  1,  5,  4, -1, -1, -1, -1, -1, -1, -1], // 34: v2 v6
    [ 3,  1,  5,  3,  8,  5,  5,  8,  4, -1, -1, -1, -1], // 35: v1 v2 v6
    [ 5,  4,  9, 11,  2,  1, -1, -1, -1, -1, -1, -1, -1], // 36: v3 v6
    [ 5,  4,  9, 11,  2,  1,  0,  3,  8, -1, -1, -1, -1], // 37: v1 v3 v6
    [ 2,  0,  4,  2,  4, 11, 11,  4,  5, -1, -1, -1, -1], // 38: v2 v3 v6
    [ 2,  3,  4,  3,  8,  4,  2,  4,  5,  2, 11,  5, -1], // 39: v1 v2 v3 v6
    [ 5,  4,  9,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 40: v4 v6
    [ 5,  4,  9,  2, 10,  8,  2,  8,  0, -1, -1, -1, -1], // 41: v1 v4 v6
    [ 2, 10,  3,  0,  1,  4,  1,  5,  4, -1, -1, -1, -1], // 42: v2 v4 v6
    [10,  2,  8,  2,  8,  5,  2,  1,  5,  8,  4,  5, -1], // 43: v1 v2 v4 v6
    [10,  3, 11,  1,  3, 11,  5,  4,  9, -1, -1, -1, -1], // 44: v3 v4 v6
    [10,  8, 11, 11,  8,  0, 11,  0,  1,  5,  4,  9, -1], // 45: v1 v3 v4 v6
    [ 3, 10, 11,  3, 11,  4, 11,  4,  5,  3,  4,  0, -1], // 46: v2 v3 v4 v6
    [10,  8, 11, 11,  8,  4, 11,  4,  5, -1, -1, -1, -1], // 47: v1 v2 v3 v4 v6
    [ 8,  9,  5,  8,  5,  7, -1, -1, -1, -1, -1, -1, -1], // 48: v5 v6
    [ 3,  7,  5,  3,  5,  0,  5,  0,  9, -1, -1, -1, -1], // 49: v1 v5 v6
    [ 7,  5,  1,  7,  1,  0,  7,  8,  0, -1, -1, -1, -1], // 50: v2 v5 v6
    [ 3,  7,  1,  7,  1,  5, -1, -1, -1, -1, -1, -1, -1], // 51: v1 v2 v5 v6
    [ 8,  9,  5,  8,  5,  7, 11,  2,  1, -1, -1, -1, -1], // 52: v3 v5 v6
    [ 3,  7,  5,  3,  5,  0,  5,  0,  9, 11,  2,  1, -1], // 53: v1 v3 v5 v6
    [ 0,  8,  2,  8,  2,  5,  8,  7,  5, 11,  2,  5, -1], // 54: v2 v3 v5 v6
    [ 3,  7,  5,  3,  5,  2,  5,  2, 11, -1, -1, -1, -1], // 55: v1 v2 v3 v5 v6
    [ 8,  9,  5,  8,  5,  7,  2, 10,  3, -1, -1, -1, -1], // 56: v4 v5 v6
    [ 2, 10,  7,  2,  7,  9,  9,  5,  7,  2,  0,  9, -1], // 57: v1 v4 v5 v6
    [ 7,  5,  1,  7,  1,  0,  7,  8,  0,  2, 10,  3, -1], // 58: v2 v4 v5 v6
    [ 1,  5,  7,  7,  1,  2,  7,  2, 10, -1, -1, -1, -1], // 59: v1 v2 v4 v5 v6
    [ 8,  9,  5,  8,  5,  7, 10,  3, 11,  1,  3, 11, -1], // 60: v3 v4 v5 v6
    [10, 11,  5, 10,  7,  5,  9,  1,  0, -1, -1, -1, -1], // 61: v1 v3 v4 v5 v6
    [10, 11,  5, 10,  7,  5,  0,  3,  8, -1, -1, -1, -1], // 62: v2 v3 v4 v5 v6
    [10, 11,  5, 10,  7,  5, -1, -1, -1, -1, -1, -1, -1], // 63: v1 v2 v3 v4 v5 v6
    [11,  6,  5, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 64: v7
    [11,  6,  5,  0,  3,  8, -1, -1, -1, -1, -1, -1, -1], // 65: v1 v7
    [11,  6,  5,  9,  1,  0, -1, -1, -1, -1, -1, -1, -1], // 66: v2 v7
    [11,  6,  5,  1,  3,  8,  1,  8,  9, -1, -1, -1, -1], // 67: v1 v2 v7
    [ 2,  1,  5,  2,  6,  5, -1, -1, -1, -1, -1, -1, -1], // 68: v3 v7
    [ 2,  1,  5,  2,  6,  5,  0,  3,  8, -1, -1, -1, -1], // 69: v1 v3 v7
    [ 0,  2,  6,  0,  9,  6,  6,  9,  5, -1, -1, -1, -1], // 70: v2 v3 v7
    [ 9,  6,  3,  3,  2,  6,  9,  3,  8,  6,  9,  5, -1], // 71: v1 v2 v3 v7
    [11,  6,  5,  2, 10,  3, -1, -1, -1, -1, -1, -1, -1], // 72: v4 v7
    [11,  6,  5,  2, 10,  8,  2,  8,  0, -1, -1, -1, -1], // 73: v1 v4 v7
    [11,  6,  5,  2, 10,  3,  9,  1,  0, -1, -1, -1, -1], // 74: v2 v4 v7
    [11,  6,  5,  2, 10,  1, 10,  9,  1, 10,  8,  9, -1], // 75: v1 v2 v4 v7
    [ 3,  1,  5,  3, 10,  6,  3,  6,  5, -1, -1, -1, -1], // 76: v3 v4 v7
    [10,  8,  0, 10,  0,  5,  0,  5,  1, 10,  5,  6, -1], // 77: v1 v3 v4 v7
    [ 0,  3,  6,  0,  6,  5,  3, 10,  6,  0,  9,  5, -1], // 78: v2 v3 v4 v7
    [ 8, 10,  9, 10,  6,  9,  6,  9,  5, -1, -1, -1, -1], // 79: v1 v2 v3 v4 v7
    [11,  6,  5,  7,  8,  4, -1, -1, -1, -1, -1, -1, -1], // 80: v5 v7
    [11,  6,  5,  3,  0,  7,  7,  0,  4, -1, -1, -1, -1], // 81: v1 v5 v7
    [11,  6,  5,  7,  8,  4,  9,  1,  0, -1, -1, -1, -1], // 82: v2 v5 v7
    [11,  6,  5,  7,  3,  1,  7,  1,  9,  7,  9,  4, -1], // 83: v1 v2 v5 v7
    [ 7,  8,  4,  2,  1,  5,  2,  6,  5, -1, -1, -1, -1], // 84: v3 v5 v7
    [ 3,  0,  7,  7,  0,  4,  2,  1,  5,  2,  6,  5, -1], // 85: v1 v3 v5 v7
    [ 0,  2,  6,  0,  9,  6,  6,  9,  5,  7,  8,  4, -1], // 86: v2 v3 v5 v7
    [ 3,  2,  6,  3,  7,  6,  5,  4,  9, -1, -1, -1, -1], // 87: v1 v2 v3 v5 v7
    [11,  6,  5,  7,  8,  4,  2, 10,  3, -1, -1, -1, -1], // 88: v4 v5 v7
    [ 0,  4,  2,  2,  7, 10,  2,  4,  7, 11,  6,  5, -1], // 89: v1 v4 v5 v7
    [ 9,  1,  0,  2, 10,  3,  7,  8,  4, 11,  6,  5, -1], // 90: v2 v4 v5 v7
    [11,  2,  1,  5,  4,  9, 10,  6,  7, -1, -1, -1, -1], // 91: v1 v2 v4 v5 v7
    [ 3,  1,  5,  3, 10,  6,  3,  6,  5,  7,  8,  4, -1], // 92: v3 v4 v5 v7
    [10,  6,  7,  0,  1,  4,  1,  5,  4, -1, -1, -1, -1], // 93: v1 v3 v4 v5 v7
    [ 0,  3,  8,  5,  4,  9, 10,  6,  7, -1, -1, -1, -1], // 94: v2 v3 v4 v5 v7
    [ 5,  4,  9, 10,  6,  7, -1, -1, -1, -1, -1, -1, -1], // 95: v1 v2 v3 v4 v5 v7
    [ 6, 11,  4,  4,  9, 11, -1, -1, -1, -1, -1, -1, -1], // 96: v6 v7
    [ 6, 11,  4,  4,  9, 11,  0,  3,  8, -1, -1, -1, -1], // 97: v1 v6 v7
    [ 0,  6,  4,  6,  0, 11,  0, 11,  1, -1, -1, -1, -1], // 98: v2 v6 v7
    [ 8,  1,  6,  8,  1,  3,  1,  6, 11,  6,  8,  4, -1], // 99: v1 v2 v6 v7
    [ 2,  6,  4,  2,  4,  1,  1,  4,  9, -1, -1, -1, -1], // 100: v3 v6 v7
    [ 2,  6,  4,  2,  4,  1,  1,  4,  9,  0,  3,  8, -1], // 101: v1 v3 v6 v7
    [ 0,  2,  6,  0,  6,  4, -1, -1, -1, -1, -1, -1, -1], // 102: v2 v3 v6 v7
    [ 2,  6,  4,  2,  4,  3,  3,  4,  8, -1, -1, -1, -1], // 103: v1 v2 v3 v6 v7
    [ 2, 10,  3,  6, 11,  4,  4,  9, 11, -1, -1, -1, -1], // 104: v4 v6 v7
    [ 6, 11,  4,  4,  9, 11,  2, 10,  8,  2,  8,  0, -1], // 105: v1 v4 v6 v7
    [ 0,  6,  4,  6,  0, 11,  0, 11,  1,  2, 10,  3, -1], // 106: v2 v4 v6 v7
    [11,  2,  1, 10,  8,  6,  8,  6,  4, -1, -1, -1, -1], // 107: v1 v2 v4 v6 v7
    [ 3,  9,  6,  3,  9,  1,  3, 10,  6,  6,  9,  4, -1], // 108: v3 v4 v6 v7
    [10,  8,  6,  8,  6,  4,  9,  1,  0, -1, -1, -1, -1], // 109: v1 v3 v4 v6 v7
    [ 0,  4,  6,  0,  6, 10,  0, 10,  3, -1, -1, -1, -1], // 110: v2 v3 v4 v6 v7
    [10,  8,  6,  8,  6,  4, -1, -1, -1, -1, -1, -1, -1], // 111: v1 v2 v3 v4 v6 v7
    [ 8,  9, 11,  8, 11,  6,  8,  6,  7, -1, -1, -1, -1], // 112: v5 v6 v7
    [ 0,  7, 11,  0,  7,  3,  7,  6, 11, 11,  0,  9, -1], // 113: v1 v5 v6 v7
    [ 0,  8,  6,  0,  6, 11,  0, 11,  1,  8,  7,  6, -1], // 114: v2 v5 v6 v7
    [ 1,  3,  7,  1, 11,  6,  1,  7,  6, -1, -1, -1, -1], // 115: v1 v2 v5 v6 v7
    [ 8,  1,  6,  8,  1,  9,  8,  7,  6,  1,  2,  6, -1], // 116: v3 v5 v6 v7
    [ 9,  1,  0,  3,  2,  6,  3,  7,  6, -1, -1, -1, -1], // 117: v1 v3 v5 v6 v7
    [ 0,  2,  6,  6,  0,  7,  0,  7,  8, -1, -1, -1, -1], // 118: v2 v3 v5 v6 v7
    [ 3,  2,  6,  3,  7,  6, -1, -1, -1, -1, -1, -1, -1], // 119: v1 v2 v3 v5 v6 v7
    [ 8,  9, 11,  8, 11,  6,  8,  6,  7,  2, 10,  3, -1], // 120: v4 v5 v6 v7
    [11,  2,  0, 11,  0,  9, 10,  6,  7, -1, -1, -1, -1], // 121: v1 v4 v5 v6 v7
    [ 0,  3,  8, 11,  2,  1, 10,  6,  7, -1, -1, -1, -1], // 122: v2 v4 v5 v6 v7
    [11,  2,  1, 10,  6,  7, -1, -1, -1, -1, -1, -1, -1], // 123: v1 v2 v4 v5 v6 v7
    [ 1,  3,  8,  1,  8,  9, 10,  6,  7, -1, -1, -1, -1], // 124: v3 v4 v5 v6 v7
    [ 9,  1,  0, 10,  6,  7, -1, -1, -1, -1, -1, -1, -1], // 125: v1 v3 v4 v5 v6 v7
    [ 0,  3,  8, 10,  6,  7, -1, -1, -1, -1, -1, -1, -1], // 126: v2 v3 v4 v5 v6 v7
    [10,  6,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 127: v1 v2 v3 v4 v5 v6 v7
];

/// Ambiguous complements that keep their own triangulation instead of
/// borrowing the rows of `255 - case`.
#[rustfmt::skip]
pub const AMBIGUOUS_CASES: [(u8, [i8; CASE_ROW_LEN]); 3] = [
    (150, [11,  2,  0, 11,  0,  9, 10,  8,  6,  8,  6,  4, -1]), // v2 v3 v5 v8
    (170, [ 3,  2,  6,  3,  7,  6,  0,  1,  4,  1,  5,  4, -1]), // v2 v4 v6 v8
    (195, [10, 11,  5, 10,  7,  5,  1,  3,  8,  1,  8,  9, -1]), // v1 v2 v7 v8
];

/// 12-bit mask of the edges referenced by each row of [`TRI_TABLE`].
pub const EDGE_TABLE: [u16; 128] = build_edge_table();

const fn row_edge_mask(row: &[i8; CASE_ROW_LEN]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < CASE_ROW_LEN && row[i] >= 0 {
        mask |= 1 << (row[i] as u32);
        i += 1;
    }
    mask
}

const fn build_edge_table() -> [u16; 128] {
    let mut table = [0u16; 128];
    let mut case = 0;
    while case < 128 {
        table[case] = row_edge_mask(&TRI_TABLE[case]);
        case += 1;
    }
    table
}

/// Whether `case` is one of the hand-resolved ambiguous complements.
#[inline]
pub fn is_ambiguous(case: CaseIndex) -> bool {
    AMBIGUOUS_CASES.iter().any(|(c, _)| *c == case)
}

/// Maps a case onto the index its triangles are stored under.
///
/// Cases above 127 fold onto their complement `255 - case`, except the
/// ambiguous ones, which are returned unchanged.
#[inline]
pub fn normalize_case(case: CaseIndex) -> CaseIndex {
    if case > 127 && !is_ambiguous(case) {
        255 - case
    } else {
        case
    }
}

/// Returns the `-1` terminated table row for any raw case index.
pub fn case_row(case: CaseIndex) -> [i8; CASE_ROW_LEN] {
    let case = normalize_case(case);
    if case < 128 {
        return TRI_TABLE[case as usize];
    }
    AMBIGUOUS_CASES
        .iter()
        .find(|(c, _)| *c == case)
        .map(|(_, row)| *row)
        .unwrap_or([-1; CASE_ROW_LEN])
}

/// Mask of the edges whose intersections are needed to emit `case`.
pub fn edge_mask(case: CaseIndex) -> u16 {
    row_edge_mask(&case_row(case))
}

/// Triangles of `case` as edge index triples. Cases 0 and 255 yield nothing.
pub fn triangles_for(case: CaseIndex) -> impl Iterator<Item = [usize; 3]> {
    let row = case_row(case);
    let len = row.iter().position(|&e| e < 0).unwrap_or(CASE_ROW_LEN);
    (0..len / 3).map(move |t| {
        [
            row[3 * t] as usize,
            row[3 * t + 1] as usize,
            row[3 * t + 2] as usize,
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tris(case: CaseIndex) -> Vec<[usize; 3]> {
        triangles_for(case).collect()
    }

    #[test]
    fn empty_and_full_cubes_have_no_triangles() {
        assert!(tris(0).is_empty());
        assert!(tris(255).is_empty());
        assert_eq!(edge_mask(0), 0);
    }

    #[test]
    fn isolated_corner_cuts_its_three_edges() {
        // v1 alone: e1, e4, e9
        assert_eq!(tris(1), vec![[0, 3, 8]]);
        // v8 alone: e11, e7, e8
        assert_eq!(tris(127), vec![[10, 6, 7]]);
    }

    #[test]
    fn complement_reuses_triangles() {
        assert_eq!(normalize_case(254), 1);
        assert_eq!(tris(254), tris(1));
        assert_eq!(tris(128), tris(127));
        assert_eq!(tris(200), tris(55));
    }

    #[test]
    fn ambiguous_complements_keep_their_own_triangulation() {
        for case in [150u8, 170, 195] {
            assert!(is_ambiguous(case));
            assert_eq!(normalize_case(case), case);
            assert_eq!(tris(case).len(), 4);
            // same edges as the complement, different connectivity
            assert_eq!(edge_mask(case), EDGE_TABLE[255 - case as usize]);
            assert_ne!(tris(case), tris(255 - case));
        }
    }

    #[test]
    fn composite_rows_concatenate_their_parts() {
        let joined = |parts: &[CaseIndex]| -> Vec<[usize; 3]> {
            parts.iter().flat_map(|&p| tris(p)).collect()
        };
        // two isolated corners
        assert_eq!(tris(5), joined(&[1, 4]));
        // plane plus a corner
        assert_eq!(tris(21), joined(&[17, 4]));
        // three isolated corners
        assert_eq!(tris(26), joined(&[2, 8, 16]));
        // four isolated corners
        assert_eq!(tris(90), joined(&[2, 8, 16, 64]));
    }

    #[test]
    fn every_case_only_touches_edges_next_to_a_changed_corner() {
        for case in 1u8..=254 {
            let inside = |corner: usize| case & (1 << corner) != 0;
            for [a, b, c] in triangles_for(case) {
                assert!(a != b && b != c && a != c, "case {case}");
                for edge in [a, b, c] {
                    let [from, to] = EDGE_CORNERS[edge];
                    assert_ne!(
                        inside(from),
                        inside(to),
                        "case {case} references edge e{} that is not crossed",
                        edge + 1
                    );
                }
            }
        }
    }

    #[test]
    fn every_non_trivial_case_emits_triangles() {
        for case in 1u8..=254 {
            assert!(!tris(case).is_empty(), "case {case}");
            assert!(edge_mask(case).count_ones() >= 3, "case {case}");
        }
    }

    #[test]
    fn edges_join_adjacent_corners() {
        for [from, to] in EDGE_CORNERS {
            let a = CORNER_OFFSETS[from];
            let b = CORNER_OFFSETS[to];
            let diff: usize = (0..3).map(|i| a[i].abs_diff(b[i])).sum();
            assert_eq!(diff, 1);
        }
    }
}
