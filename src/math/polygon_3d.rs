use super::{Point3, Vector3};

/// Computes the Newell area vector of a closed polygon.
///
/// The direction is the polygon normal implied by the vertex winding and the
/// magnitude equals the enclosed area. The polygon is implicitly closed; the
/// last point must not repeat the first.
#[must_use]
pub fn area_vector(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut acc = Vector3::zeros();
    if n < 3 {
        return acc;
    }
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        acc.x += (curr.y - next.y) * (curr.z + next.z);
        acc.y += (curr.z - next.z) * (curr.x + next.x);
        acc.z += (curr.x - next.x) * (curr.y + next.y);
    }
    acc * 0.5
}

/// Signed area of a closed planar polygon measured against `normal`.
///
/// Positive when the winding is counter-clockwise seen from the tip of
/// `normal`.
#[must_use]
pub fn signed_area(points: &[Point3], normal: &Vector3) -> f64 {
    area_vector(points).dot(normal)
}

/// Area-weighted centroid of a closed planar polygon.
///
/// Fans the polygon from its first vertex and accumulates triangle centroids
/// weighted by their signed area along `normal`, so non-convex loops are
/// handled exactly. Returns `None` for loops without area.
#[must_use]
pub fn centroid(points: &[Point3], normal: &Vector3) -> Option<Point3> {
    if points.len() < 3 {
        return None;
    }
    let origin = points[0];
    let mut total = 0.0;
    let mut weighted = Vector3::zeros();
    for pair in points[1..].windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let area = (a - origin).cross(&(b - origin)).dot(normal) * 0.5;
        let tri_centroid = (origin.coords + a.coords + b.coords) / 3.0;
        weighted += tri_centroid * area;
        total += area;
    }
    if total.abs() < f64::EPSILON {
        return None;
    }
    Some(Point3::from(weighted / total))
}

/// Drops the closing point of a polyline loop if it repeats the first one.
#[must_use]
pub fn open_loop(mut points: Vec<Point3>, tolerance: f64) -> Vec<Point3> {
    if points.len() > 1 {
        let first = points[0];
        if let Some(last) = points.last() {
            if (last - first).norm() < tolerance {
                points.pop();
            }
        }
    }
    points
}
