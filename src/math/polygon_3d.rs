use super::{Point3, Vector3, TOLERANCE};

/// Computes the area vector of a closed polygon using Newell's method.
///
/// The direction is the polygon normal implied by its winding and the
/// magnitude is the enclosed area. Fewer than three points yield zero.
#[must_use]
pub fn area_vector(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    if n < 3 {
        return normal;
    }
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal * 0.5
}

/// Unit normal of a closed polygon, or `None` if the polygon is degenerate.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let area = area_vector(points);
    let len = area.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(area / len)
}

/// Six times the signed volume of the cone joining the origin to a planar loop.
///
/// The loop is fan-triangulated from its first vertex; for a simple planar
/// polygon the signed contributions of the fan sum to the exact value even
/// when the polygon is not convex. Summing over every face of a consistently
/// oriented closed surface gives six times the enclosed volume.
#[must_use]
pub fn signed_cone_volume6(points: &[Point3]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let v0 = points[0].coords;
    points[1..]
        .windows(2)
        .map(|pair| v0.dot(&pair[0].coords.cross(&pair[1].coords)))
        .sum()
}
