use crate::math::Point3;

use super::CurveDescriptor;

/// Default grid spacing used to quantize key coordinates.
pub const DEFAULT_KEY_RESOLUTION: f64 = 1e-6;

/// Structural identity of an edge, independent of handle and direction.
///
/// Two edges share a key when their endpoints (in either order) and curve
/// class agree on a grid of `resolution` spacing; curved edges must also
/// agree on their midpoint, which separates arcs that share both ends.
/// Coordinates near a grid boundary may round apart under noise smaller
/// than the spacing, so noisier models need a coarser grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    ends: [[i64; 3]; 2],
    curve: u8,
    midpoint: Option<[i64; 3]>,
}

impl EdgeKey {
    /// Builds the key; `midpoint` is ignored for lines. `resolution` must
    /// be positive.
    #[must_use]
    pub fn new(
        start: &Point3,
        end: &Point3,
        curve: &CurveDescriptor,
        midpoint: Option<&Point3>,
        resolution: f64,
    ) -> Self {
        let quantize = |p: &Point3| quantize(p, resolution);
        let (a, b) = (quantize(start), quantize(end));
        let ends = if a <= b { [a, b] } else { [b, a] };
        let (curve, midpoint) = match curve {
            CurveDescriptor::Line => (0, None),
            CurveDescriptor::Circle { .. } => (1, midpoint.map(quantize)),
            CurveDescriptor::Other => (2, midpoint.map(quantize)),
        };
        Self {
            ends,
            curve,
            midpoint,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn quantize(p: &Point3, resolution: f64) -> [i64; 3] {
    [p.x, p.y, p.z].map(|c| (c / resolution).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn direction_does_not_matter() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(10.0, 0.0, 0.0);
        let forward = EdgeKey::new(&a, &b, &CurveDescriptor::Line, None, DEFAULT_KEY_RESOLUTION);
        let mid = p(5.0, 0.0, 0.0);
        let backward =
            EdgeKey::new(&b, &a, &CurveDescriptor::Line, Some(&mid), DEFAULT_KEY_RESOLUTION);
        assert_eq!(forward, backward);
    }

    #[test]
    fn noise_below_resolution_collapses() {
        let end = p(1.0, 1.0, 0.0);
        let res = DEFAULT_KEY_RESOLUTION;
        let key = |x: f64| EdgeKey::new(&p(x, 0.0, 0.0), &end, &CurveDescriptor::Line, None, res);
        assert_eq!(key(0.0), key(1e-9));
        assert_ne!(key(0.0), key(1e-3));
    }

    #[test]
    fn arc_halves_are_distinct() {
        let circle = CurveDescriptor::Circle {
            radius: 1.0,
            first: 0.0,
            last: std::f64::consts::PI,
        };
        let (a, b) = (p(1.0, 0.0, 0.0), p(-1.0, 0.0, 0.0));
        let res = DEFAULT_KEY_RESOLUTION;
        let upper = EdgeKey::new(&a, &b, &circle, Some(&p(0.0, 1.0, 0.0)), res);
        let lower = EdgeKey::new(&a, &b, &circle, Some(&p(0.0, -1.0, 0.0)), res);
        assert_ne!(upper, lower);
        assert_ne!(upper, EdgeKey::new(&a, &b, &CurveDescriptor::Line, None, res));
    }

    #[test]
    fn coarser_grid_merges_noise_across_boundary() {
        let end = p(1.0, 1.0, 0.0);
        let key = |x: f64, res: f64| {
            EdgeKey::new(&p(x, 0.0, 0.0), &end, &CurveDescriptor::Line, None, res)
        };
        // Straddles the 0.5e-6 rounding boundary of the default grid
        let (lo, hi) = (0.499e-6, 0.501e-6);
        assert_ne!(key(lo, DEFAULT_KEY_RESOLUTION), key(hi, DEFAULT_KEY_RESOLUTION));
        assert_eq!(key(lo, 1e-4), key(hi, 1e-4));
    }
}
