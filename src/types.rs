use nalgebra::{Point3, Vector3};

use crate::error::{IsosurfaceError, Result};

/// Scalar used for coordinates and grid values.
pub type Value = f64;

/// A 3D point with [`Value`] components.
pub type Point = Point3<Value>;

/// A 3D vector with [`Value`] components.
pub type Vector = Vector3<Value>;

/// 8-bit corner membership code of one cube. Bit `i` is set when corner `v(i+1)`
/// lies inside the [`IsoRange`].
pub type CaseIndex = u8;

/// One triangle as three literal positions, before vertex deduplication.
pub type RawTriangle = [Point; 3];

/// Half-open density band `[lower, upper)`.
///
/// Grid values inside the band are "inside" the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoRange {
    lower: Value,
    upper: Value,
}

impl IsoRange {
    /// Returns [`IsosurfaceError::InvertedRange`] if `lower > upper` or either bound is not finite.
    pub fn new(lower: Value, upper: Value) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower > upper {
            return Err(IsosurfaceError::InvertedRange { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> Value {
        self.lower
    }

    pub fn upper(&self) -> Value {
        self.upper
    }

    /// `lower <= value < upper`
    #[inline]
    pub fn contains(&self, value: Value) -> bool {
        self.lower <= value && value < self.upper
    }

    /// Whether `[lower, upper)` reaches into the grid's value span `[min, max + 1)`.
    pub fn overlaps(&self, min: Value, max: Value) -> bool {
        self.upper > min && self.lower < max + 1.0
    }
}

impl TryFrom<(Value, Value)> for IsoRange {
    type Error = IsosurfaceError;

    fn try_from((lower, upper): (Value, Value)) -> Result<Self> {
        Self::new(lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_half_open() {
        let range = IsoRange::new(1.0, 3.0).unwrap();
        assert!(range.contains(1.0));
        assert!(range.contains(2.999));
        assert!(!range.contains(3.0));
        assert!(!range.contains(0.5));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            IsoRange::new(2.0, 1.0),
            Err(IsosurfaceError::InvertedRange {
                lower: 2.0,
                upper: 1.0
            })
        );
        assert!(IsoRange::new(Value::NAN, 1.0).is_err());
        assert!(IsoRange::try_from((1.0, 1.0)).is_ok());
    }

    #[test]
    fn overlap_uses_exclusive_upper_grid_bound() {
        let range = IsoRange::new(3.0, 4.0).unwrap();
        assert!(range.overlaps(0.0, 2.5));
        assert!(!range.overlaps(0.0, 2.0));
        assert!(!IsoRange::new(-2.0, 0.0).unwrap().overlaps(0.0, 5.0));
    }
}
