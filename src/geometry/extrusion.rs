use crate::math::{Point3, Vector3};

/// An ordered list of points, optionally closed back onto its start.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices.
    pub points: Vec<Point3>,
    /// Whether the last point connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Creates a closed polyline through `points`.
    #[must_use]
    pub fn closed(points: Vec<Point3>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// Creates an open polyline through `points`.
    #[must_use]
    pub fn open(points: Vec<Point3>) -> Self {
        Self {
            points,
            closed: false,
        }
    }
}

/// A planar profile swept along a straight direction.
///
/// An extrusion encloses a volume only when its profile is closed and both
/// ends are capped.
#[derive(Debug, Clone)]
pub struct Extrusion {
    /// The planar profile at the start of the sweep.
    pub profile: Polyline,
    /// Sweep vector; its length is the extrusion height.
    pub direction: Vector3,
    /// Whether planar caps close both ends.
    pub capped: bool,
}

impl Extrusion {
    /// Creates a capped extrusion of `profile` along `direction`.
    #[must_use]
    pub fn new(profile: Polyline, direction: Vector3) -> Self {
        Self {
            profile,
            direction,
            capped: true,
        }
    }

    /// Sets whether the ends are capped.
    #[must_use]
    pub fn with_caps(mut self, capped: bool) -> Self {
        self.capped = capped;
        self
    }
}
