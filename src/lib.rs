pub mod cube;
pub mod engine;
pub mod error;
pub mod interp;
pub mod mesh;
pub mod polygonize;
pub mod tables;
pub mod types;
pub mod voxel;

pub use engine::{
    CoordinateSpace, IsosurfaceConfig, IsosurfaceEngine, generate_isosurface,
    generate_isosurface_from_points,
};
pub use error::{IsosurfaceError, Result};
pub use mesh::{IsoMesh, consolidate};
pub use polygonize::polygonize;
pub use types::{IsoRange, Point, Value};
pub use voxel::{VoxelGrid, voxelize};
