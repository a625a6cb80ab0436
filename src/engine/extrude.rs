use crate::geometry::{Brep, Polyline};
use crate::math::polygon_3d::newell_normal;
use crate::math::{Point3, Vector3};

/// Sweeps a planar profile along a direction to build a brep.
///
/// A closed profile is reoriented so its normal agrees with the sweep
/// direction; the bottom cap then faces `-direction`, the top cap faces
/// `+direction` and the side quads face outward, which keeps every shared
/// edge traversed once in each direction.
pub(crate) struct ExtrudeProfile<'a> {
    profile: &'a Polyline,
    direction: Vector3,
    capped: bool,
    tolerance: f64,
}

impl<'a> ExtrudeProfile<'a> {
    pub(crate) fn new(profile: &'a Polyline, direction: Vector3, tolerance: f64) -> Self {
        Self {
            profile,
            direction,
            capped: true,
            tolerance,
        }
    }

    pub(crate) fn with_caps(mut self, capped: bool) -> Self {
        self.capped = capped;
        self
    }

    /// Builds the brep, or `None` if the profile or direction is degenerate.
    pub(crate) fn execute(&self) -> Option<Brep> {
        if self.direction.norm() < self.tolerance {
            return None;
        }

        let mut base_points = self.profile.points.clone();
        if self.profile.closed && base_points.len() > 1 {
            let first = base_points[0];
            let last = base_points[base_points.len() - 1];
            if (last - first).norm() < self.tolerance {
                base_points.pop();
            }
        }

        if self.profile.closed {
            if base_points.len() < 3 {
                return None;
            }
            let normal = newell_normal(&base_points)?;
            let alignment = normal.dot(&self.direction) / self.direction.norm();
            if alignment.abs() < self.tolerance {
                return None;
            }
            if alignment < 0.0 {
                base_points.reverse();
            }
        } else if base_points.len() < 2 {
            return None;
        }

        let n = base_points.len();
        let mut brep = Brep::new();
        for p in &base_points {
            brep.add_vertex(*p);
        }
        for p in &base_points {
            brep.add_vertex(Point3::from(p.coords + self.direction));
        }

        if self.profile.closed && self.capped {
            brep.add_face((0..n).rev().collect());
            brep.add_face((n..2 * n).collect());
        }

        let side_count = if self.profile.closed { n } else { n - 1 };
        for i in 0..side_count {
            let j = (i + 1) % n;
            brep.add_face(vec![i, j, n + j, n + i]);
        }

        Some(brep)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square() -> Polyline {
        Polyline::closed(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ])
    }

    // ── Unit cube ──────────────────────────────────────────────

    #[test]
    fn unit_cube_has_6_faces() {
        let brep = ExtrudeProfile::new(&square(), Vector3::z(), 1e-10)
            .execute()
            .unwrap();
        assert_eq!(brep.faces.len(), 6);
        assert_eq!(brep.vertices.len(), 8);
    }

    #[test]
    fn uncapped_cube_has_only_sides() {
        let brep = ExtrudeProfile::new(&square(), Vector3::z(), 1e-10)
            .with_caps(false)
            .execute()
            .unwrap();
        assert_eq!(brep.faces.len(), 4);
    }

    // ── Open profiles ──────────────────────────────────────────

    #[test]
    fn open_profile_builds_a_strip() {
        let profile = Polyline::open(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
        let brep = ExtrudeProfile::new(&profile, Vector3::z(), 1e-10)
            .execute()
            .unwrap();
        assert_eq!(brep.faces.len(), 2);
    }

    // ── Degenerate input ───────────────────────────────────────

    #[test]
    fn repeated_closing_point_is_dropped() {
        let mut profile = square();
        profile.points.push(p(0.0, 0.0, 0.0));
        let brep = ExtrudeProfile::new(&profile, Vector3::z(), 1e-10)
            .execute()
            .unwrap();
        assert_eq!(brep.vertices.len(), 8);
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(ExtrudeProfile::new(&square(), Vector3::zeros(), 1e-10)
            .execute()
            .is_none());
    }

    #[test]
    fn in_plane_direction_is_rejected() {
        assert!(ExtrudeProfile::new(&square(), Vector3::x(), 1e-10)
            .execute()
            .is_none());
    }

    #[test]
    fn collinear_profile_is_rejected() {
        let profile = Polyline::closed(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)]);
        assert!(ExtrudeProfile::new(&profile, Vector3::z(), 1e-10)
            .execute()
            .is_none());
    }
}
