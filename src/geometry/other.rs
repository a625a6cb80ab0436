use crate::math::Point3;

use super::Polyline;

/// Host objects that are neither breps, extrusions nor meshes.
///
/// Some of these can be converted to a brep by a geometry engine; the rest
/// have no volume.
#[derive(Debug, Clone)]
pub enum OtherGeometry {
    /// An axis-aligned box between two corners.
    Box { min: Point3, max: Point3 },
    /// A single planar surface bounded by a closed loop.
    Surface { boundary: Vec<Point3> },
    /// A curve.
    Curve(Polyline),
    /// A point.
    Point(Point3),
}
