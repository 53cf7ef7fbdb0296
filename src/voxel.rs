use ndarray::{Array3, ArrayView2, aview2};

use crate::{
    error::{IsosurfaceError, Result},
    types::{Point, Value},
};

/// Dense occupancy grid: the number of points falling in each `bin`-sized voxel.
///
/// Counts are stored as `counts[[y, z, x]]`. The polygonizer reads the grid in
/// this axis order, so it must not be transposed.
///
/// Along each axis there are `ceil(range / bin) + 1` voxels, where `range` is
/// the extent of the point cloud on that axis.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    /// Point counts, indexed `[y, z, x]`.
    pub counts: Array3<u32>,
    /// Per-axis minimum of the point cloud; world position of voxel `(0, 0, 0)`.
    pub origin: Point,
    /// Edge length of one voxel.
    pub bin: Value,
}

impl VoxelGrid {
    /// Number of voxels along X, Y and Z (`Ni, Nj, Nk`).
    pub fn dims(&self) -> [usize; 3] {
        let (nj, nk, ni) = self.counts.dim();
        [ni, nj, nk]
    }

    /// Number of points in voxel `(x, y, z)`.
    pub fn count_at(&self, x: usize, y: usize, z: usize) -> u32 {
        self.counts[[y, z, x]]
    }

    /// Sum of all voxel counts. Always equals the number of voxelized points.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Smallest and largest voxel count.
    pub fn value_range(&self) -> (u32, u32) {
        self.counts
            .iter()
            .fold((u32::MAX, u32::MIN), |(lo, hi), &c| (lo.min(c), hi.max(c)))
    }
}

/// Converts per-axis voxel counts to `usize`, or `None` when the grid could
/// not be allocated as an `Array3<u32>`.
fn grid_dims(dims: [Value; 3]) -> Option<[usize; 3]> {
    let limit = isize::MAX as usize / size_of::<u32>();
    let mut n = [0usize; 3];
    let mut cells = 1usize;
    for (axis, &d) in dims.iter().enumerate() {
        if !d.is_finite() || d > limit as Value {
            return None;
        }
        n[axis] = d as usize;
        cells = cells.checked_mul(n[axis])?;
    }
    (cells <= limit).then_some(n)
}

/// Bins an `N × 3` array of `(x, y, z)` points into a [`VoxelGrid`].
///
/// Each point lands in voxel `floor((coord - axis_min) / bin)` on every axis.
/// Points on the upper boundary always fit because the grid carries one voxel
/// of slack per axis.
pub fn voxelize(points: ArrayView2<'_, Value>, bin: Value) -> Result<VoxelGrid> {
    if points.ncols() != 3 {
        return Err(IsosurfaceError::WrongColumnCount {
            columns: points.ncols(),
        });
    }
    if points.nrows() == 0 {
        return Err(IsosurfaceError::EmptyPointCloud);
    }
    if !bin.is_finite() || bin <= 0. {
        return Err(IsosurfaceError::InvalidBinSize { bin });
    }

    let mut min = [Value::INFINITY; 3];
    let mut max = [Value::NEG_INFINITY; 3];
    for (row, point) in points.rows().into_iter().enumerate() {
        for axis in 0..3 {
            let c = point[axis];
            if !c.is_finite() {
                return Err(IsosurfaceError::NonFiniteCoordinate { row });
            }
            min[axis] = min[axis].min(c);
            max[axis] = max[axis].max(c);
        }
    }

    // [Ni, Nj, Nk]
    let dims: [Value; 3] =
        std::array::from_fn(|axis| ((max[axis] - min[axis]) / bin).ceil() + 1.);
    let n = grid_dims(dims).ok_or(IsosurfaceError::GridTooLarge { dims })?;
    let mut counts = Array3::<u32>::zeros((n[1], n[2], n[0]));

    for point in points.rows() {
        let id: [usize; 3] =
            std::array::from_fn(|axis| ((point[axis] - min[axis]) / bin).floor() as usize);
        debug_assert!((0..3).all(|axis| id[axis] < n[axis]));
        counts[[id[1], id[2], id[0]]] += 1;
    }

    log::debug!(
        "voxelized {} points into {}x{}x{} voxels (bin {})",
        points.nrows(),
        n[0],
        n[1],
        n[2],
        bin
    );

    Ok(VoxelGrid {
        counts,
        origin: Point::new(min[0], min[1], min[2]),
        bin,
    })
}

/// [`voxelize`] for points held as plain `[x, y, z]` triples.
pub fn voxelize_points(points: &[[Value; 3]], bin: Value) -> Result<VoxelGrid> {
    voxelize(aview2(points), bin)
}
