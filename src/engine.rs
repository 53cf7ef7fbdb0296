use ndarray::{ArrayView2, ArrayView3, aview2};

use crate::{
    error::Result,
    mesh::{IsoMesh, consolidate},
    polygonize::polygonize,
    types::{IsoRange, RawTriangle, Value},
    voxel::voxelize,
};

/// Coordinate frame of the vertices returned by [`IsosurfaceEngine::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinateSpace {
    /// Voxel index units, with voxel `(0, 0, 0)` at the origin.
    #[default]
    Grid,
    /// Point cloud units: `origin + bin * p`, where `origin` is the per-axis
    /// minimum of the input points.
    World,
}

/// Configuration for an [`IsosurfaceEngine`].
///
/// ```rust,ignore
/// let engine = IsosurfaceEngine::new(
///     IsosurfaceConfig::default()
///         .with_bin(0.5)
///         .with_space(CoordinateSpace::World),
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IsosurfaceConfig {
    /// Voxel edge length, in point cloud units. Default: `1.0`.
    pub bin: Value,

    /// March X slices on the rayon thread pool.
    ///
    /// The mesh is identical either way. Ignored without the `parallel`
    /// feature. Default: `true`.
    pub parallel: bool,

    /// Frame of the output vertices. Default: [`CoordinateSpace::Grid`].
    pub space: CoordinateSpace,
}

impl Default for IsosurfaceConfig {
    fn default() -> Self {
        Self {
            bin: 1.,
            parallel: true,
            space: CoordinateSpace::Grid,
        }
    }
}

impl IsosurfaceConfig {
    pub fn with_bin(mut self, bin: Value) -> Self {
        self.bin = bin;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_space(mut self, space: CoordinateSpace) -> Self {
        self.space = space;
        self
    }
}

/// Point cloud to isosurface pipeline.
///
/// ```text
/// points (N × 3)
///   → voxelize      →  VoxelGrid, counts indexed [y, z, x]
///   → polygonize    →  raw triangles, vertices repeated
///   → consolidate   →  IsoMesh, unique vertices + faces
/// ```
///
/// Every stage is deterministic: the same input always yields the same mesh.
#[derive(Debug, Clone, Default)]
pub struct IsosurfaceEngine {
    pub config: IsosurfaceConfig,
}

impl IsosurfaceEngine {
    pub fn new(config: IsosurfaceConfig) -> Self {
        Self { config }
    }

    /// Extracts the boundary of the regions whose point density lies in `range`.
    pub fn run(&self, points: ArrayView2<'_, Value>, range: IsoRange) -> Result<IsoMesh> {
        let _span = tracing::info_span!(
            "isosurface",
            points = points.nrows(),
            bin = self.config.bin,
            lower = range.lower(),
            upper = range.upper()
        )
        .entered();

        let grid = {
            let _span = tracing::debug_span!("voxelize").entered();
            voxelize(points, self.config.bin)?
        };

        let raw = {
            let _span = tracing::debug_span!("polygonize").entered();
            self.march(grid.counts.view(), &range)?
        };

        let mesh = {
            let _span = tracing::debug_span!("consolidate").entered();
            consolidate(&raw)
        };

        log::info!(
            "isosurface [{}, {}): {} vertices, {} faces",
            range.lower(),
            range.upper(),
            mesh.vertices.len(),
            mesh.faces.len()
        );

        Ok(match self.config.space {
            CoordinateSpace::Grid => mesh,
            CoordinateSpace::World => mesh.to_world(&grid.origin, grid.bin),
        })
    }

    #[cfg(feature = "parallel")]
    fn march(&self, counts: ArrayView3<'_, u32>, range: &IsoRange) -> Result<Vec<RawTriangle>> {
        if self.config.parallel {
            crate::polygonize::polygonize_parallel(counts, range)
        } else {
            polygonize(counts, range)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn march(&self, counts: ArrayView3<'_, u32>, range: &IsoRange) -> Result<Vec<RawTriangle>> {
        polygonize(counts, range)
    }
}

/// Voxelizes `points` with voxel size `bin`, marches the density band `range`
/// and returns the consolidated mesh in grid coordinates.
pub fn generate_isosurface(
    points: ArrayView2<'_, Value>,
    range: IsoRange,
    bin: Value,
) -> Result<IsoMesh> {
    IsosurfaceEngine::new(IsosurfaceConfig::default().with_bin(bin)).run(points, range)
}

/// [`generate_isosurface`] for points held as plain `[x, y, z]` triples.
pub fn generate_isosurface_from_points(
    points: &[[Value; 3]],
    range: IsoRange,
    bin: Value,
) -> Result<IsoMesh> {
    generate_isosurface(aview2(points), range, bin)
}
