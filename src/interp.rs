use crate::types::{IsoRange, Point, Value};

/// Fraction along an edge, measured from `from`, at which the field leaves the band.
///
/// The crossing is taken at `lower` when `from` sits at or below the band and
/// at `upper` when it sits inside it. Equal endpoints and a `from` value at or
/// above `upper` both yield `0`, i.e. the crossing is placed on the `from` corner.
pub fn edge_fraction(from: Value, to: Value, range: &IsoRange) -> Value {
    if from == to {
        0.
    } else if from <= range.lower() {
        (range.lower() - from) / (to - from)
    } else if from < range.upper() {
        (range.upper() - from) / (to - from)
    } else {
        0.
    }
}

// Linear interpolation
#[inline]
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}

// Linearly interpolate between two points by factor t
#[inline]
pub fn interpolate_points(p0: &Point, p1: &Point, t: Value) -> Point {
    Point::new(
        lerp(p0.x, p1.x, t),
        lerp(p0.y, p1.y, t),
        lerp(p0.z, p1.z, t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band() -> IsoRange {
        IsoRange::new(0.4, 0.6).unwrap()
    }

    #[test]
    fn fraction_from_inside_crosses_upper_bound() {
        let t = edge_fraction(0.5, 1.5, &band());
        assert!((t - 0.1).abs() < 1e-12);
    }

    #[test]
    fn fraction_from_below_crosses_lower_bound() {
        let t = edge_fraction(0.0, 2.0, &band());
        assert!((t - 0.2).abs() < 1e-12);
        assert_eq!(edge_fraction(0.4, 1.4, &band()), 0.);
    }

    #[test]
    fn fraction_degenerates_to_zero() {
        assert_eq!(edge_fraction(0.5, 0.5, &band()), 0.);
        // from above the band
        assert_eq!(edge_fraction(0.8, 0.5, &band()), 0.);
        assert_eq!(edge_fraction(0.6, 0.5, &band()), 0.);
    }

    #[test]
    fn interpolation_moves_along_one_axis() {
        let p = interpolate_points(&Point::new(2., 3., 4.), &Point::new(2., 4., 4.), 0.25);
        assert_eq!(p, Point::new(2., 3.25, 4.));
    }
}
