use derive_more::Display;

use crate::types::Value;

pub type Result<T> = core::result::Result<T, IsosurfaceError>;

/// Input validation failures. Every variant aborts the whole extraction; no
/// partial mesh is ever returned.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum IsosurfaceError {
    #[display("point cloud must have exactly 3 columns (x, y, z), got {columns}")]
    WrongColumnCount { columns: usize },

    #[display("point cloud is empty")]
    EmptyPointCloud,

    #[display("point {row} has a non-finite coordinate")]
    NonFiniteCoordinate { row: usize },

    #[display("bin size must be finite and positive, got {bin}")]
    InvalidBinSize { bin: Value },

    #[display("iso range [{lower}, {upper}) is inverted or non-finite")]
    InvertedRange { lower: Value, upper: Value },

    #[display("grid must have at least 2 cells on every axis, got {shape:?} (Y, Z, X)")]
    GridTooSmall { shape: [usize; 3] },

    #[display("voxel grid of {dims:?} cells (X, Y, Z) is too large to allocate")]
    GridTooLarge { dims: [Value; 3] },

    #[display("iso range [{lower}, {upper}) does not overlap grid values [{min}, {max} + 1)")]
    IsoRangeOutOfBounds {
        lower: Value,
        upper: Value,
        min: Value,
        max: Value,
    },
}

impl std::error::Error for IsosurfaceError {}
