use crate::errors::{QrSolidError, Result, ensure_positive};
use crate::float_types::{Real, TAU};
use crate::triangle::Triangle;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;

/// Angular resolution used for the disc base unless configured otherwise.
pub const DEFAULT_SEGMENTS: usize = 100;

/// An upright cylinder standing on the circle around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    /// Center of the bottom cap
    pub center: Point3<Real>,
    pub radius: Real,
    pub height: Real,
    /// Number of pie slices around the axis
    pub segments: usize,
}

impl Cylinder {
    /// Validate and build a cylinder.
    ///
    /// `radius` and `height` must be finite and positive, `segments` non-zero.
    pub fn new(center: Point3<Real>, radius: Real, height: Real, segments: usize) -> Result<Self> {
        ensure_positive("cylinder radius", radius)?;
        ensure_positive("cylinder height", height)?;
        if segments == 0 {
            return Err(QrSolidError::InvalidParameter(
                "cylinder needs at least one segment".to_string(),
            ));
        }
        Ok(Self { center, radius, height, segments })
    }

    /// Point on the bottom circle at slice boundary `i`.
    ///
    /// `i == segments` is computed from its own angle rather than wrapped to 0,
    /// so it may differ from the first sample in the last bits.
    fn rim(&self, i: usize) -> Point3<Real> {
        let angle = i as Real / self.segments as Real * TAU;
        Point3::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
            self.center.z,
        )
    }

    /// The four facets of pie slice `i`: bottom cap, top cap, then the two
    /// halves of the side quad between angles `i` and `i + 1`.
    pub fn slice(&self, i: usize) -> [Triangle; 4] {
        let lift = |p: Point3<Real>| Point3::new(p.x, p.y, p.z + self.height);

        let bottom_center = self.center;
        let top_center = lift(bottom_center);
        let b0 = self.rim(i);
        let b1 = self.rim(i + 1);
        let t0 = lift(b0);
        let t1 = lift(b1);

        [
            Triangle::new(bottom_center, b1, b0),
            Triangle::new(top_center, t0, t1),
            Triangle::new(b0, b1, t0),
            Triangle::new(b1, t1, t0),
        ]
    }
}

impl Triangulated3D for Cylinder {
    fn try_visit_triangles<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Triangle) -> std::result::Result<(), E>,
    {
        for i in 0..self.segments {
            self.slice(i).into_iter().try_for_each(&mut f)?;
        }
        Ok(())
    }

    fn triangle_count(&self) -> usize {
        4 * self.segments
    }
}
