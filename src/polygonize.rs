use ndarray::ArrayView3;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    cube::{Cube, EdgePoints, triangles_from_case},
    error::{IsosurfaceError, Result},
    tables::edge_mask,
    types::{IsoRange, Point, RawTriangle, Value},
};

/// Bottom-face edges (`e1..e4`) are the top-face edges (`e5..e8`) of the
/// cube below it in the same column.
const FACE_EDGES: usize = 4;

/// Top-face crossings left behind by the previous cube of a Z sweep.
///
/// Only valid while the sweep advances along Z inside one `(x, y)` column.
#[derive(Debug, Default)]
struct ZFaceCache {
    top: Option<[Option<Point>; FACE_EDGES]>,
}

impl ZFaceCache {
    fn clear(&mut self) {
        self.top = None;
    }

    /// Copies the cached top face into the bottom face of `edges`.
    fn seed(&self, edges: &mut EdgePoints) {
        if let Some(top) = self.top {
            edges[..FACE_EDGES].copy_from_slice(&top);
        }
    }

    fn store(&mut self, edges: &EdgePoints) {
        let mut top = [None; FACE_EDGES];
        top.copy_from_slice(&edges[FACE_EDGES..2 * FACE_EDGES]);
        self.top = Some(top);
    }
}

/// Checks the grid shape and that `range` reaches into the grid's values.
pub fn validate<T>(grid: &ArrayView3<'_, T>, range: &IsoRange) -> Result<()>
where
    T: Copy + Into<Value>,
{
    let (ny, nz, nx) = grid.dim();
    if ny < 2 || nz < 2 || nx < 2 {
        return Err(IsosurfaceError::GridTooSmall {
            shape: [ny, nz, nx],
        });
    }

    let (min, max) = grid
        .iter()
        .map(|&v| -> Value { v.into() })
        .fold((Value::INFINITY, Value::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if !range.overlaps(min, max) {
        return Err(IsosurfaceError::IsoRangeOutOfBounds {
            lower: range.lower(),
            upper: range.upper(),
            min,
            max,
        });
    }

    Ok(())
}

/// Sweeps the cubes of one `(x, y)` column along Z, appending their triangles to `out`.
///
/// Returns the number of cubes that produced surface.
fn march_column<T>(
    grid: &ArrayView3<'_, T>,
    range: &IsoRange,
    x: usize,
    y: usize,
    out: &mut Vec<RawTriangle>,
) -> usize
where
    T: Copy + Into<Value>,
{
    let (_, nz, _) = grid.dim();
    let mut cache = ZFaceCache::default();
    let mut active = 0;

    for z in 0..nz - 1 {
        let cube = Cube::sample(grid, x, y, z);
        let case = cube.case_index(range);
        if case == 0 || case == 255 {
            cache.clear();
            continue;
        }

        let mut edges: EdgePoints = [None; 12];
        cache.seed(&mut edges);
        cube.fill_edge_points(edge_mask(case), range, &mut edges);
        out.extend(triangles_from_case(case, &edges));
        cache.store(&edges);
        active += 1;
    }

    active
}

/// Marches every cube of the X slice `x`, Y outer and Z inner.
fn march_slice<T>(
    grid: &ArrayView3<'_, T>,
    range: &IsoRange,
    x: usize,
    out: &mut Vec<RawTriangle>,
) -> usize
where
    T: Copy + Into<Value>,
{
    let (ny, _, _) = grid.dim();
    (0..ny - 1)
        .map(|y| march_column(grid, range, x, y, out))
        .sum()
}

/// Runs marching cubes over `grid` (indexed `[y, z, x]`) for the band `range`.
///
/// Cubes are visited with Z advancing fastest, then Y, then X. Triangles are
/// returned as literal grid-space positions in visiting order, with vertices
/// repeated between neighbouring triangles.
///
/// ```text
/// Per cube:
/// 1. Cube::sample           →  8 corner values
/// 2. case_index             →  8-bit case, skip 0 and 255
/// 3. edge_mask(case)        →  edges the case needs
/// 4. ZFaceCache::seed       →  e1..e4 from the previous cube of the column
/// 5. fill_edge_points       →  remaining interpolated crossings
/// 6. triangles_from_case    →  triangles from the case table
/// ```
pub fn polygonize<T>(grid: ArrayView3<'_, T>, range: &IsoRange) -> Result<Vec<RawTriangle>>
where
    T: Copy + Into<Value>,
{
    validate(&grid, range)?;

    let (_, _, nx) = grid.dim();
    let mut triangles = Vec::new();
    let active: usize = (0..nx - 1)
        .map(|x| march_slice(&grid, range, x, &mut triangles))
        .sum();

    tracing::debug!(active_cubes = active, triangles = triangles.len(), "polygonized grid");
    Ok(triangles)
}

/// Same output as [`polygonize`], with X slices marched concurrently.
///
/// Each column still sweeps Z sequentially so the face cache stays valid, and
/// slices are merged in X order, so the result is identical to the sequential run.
#[cfg(feature = "parallel")]
pub fn polygonize_parallel<T>(
    grid: ArrayView3<'_, T>,
    range: &IsoRange,
) -> Result<Vec<RawTriangle>>
where
    T: Copy + Into<Value> + Sync,
{
    validate(&grid, range)?;

    let (_, _, nx) = grid.dim();
    let per_x: Vec<(Vec<RawTriangle>, usize)> = (0..nx - 1)
        .into_par_iter()
        .map(|x| {
            let mut local = Vec::new();
            let active = march_slice(&grid, range, x, &mut local);
            (local, active)
        })
        .collect();

    // Merge per-X slices into a single triangle list
    let total: usize = per_x.iter().map(|(t, _)| t.len()).sum();
    let mut triangles = Vec::with_capacity(total);
    let mut active = 0;
    for (mut local, n) in per_x {
        triangles.append(&mut local);
        active += n;
    }

    tracing::debug!(active_cubes = active, triangles = triangles.len(), "polygonized grid");
    Ok(triangles)
}
