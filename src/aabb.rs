use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Axis-aligned bounds of everything written to a mesh document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn from_point(p: Point3<Real>) -> Self {
        Self { mins: p, maxs: p }
    }

    /// Extend the bounds to contain `p`.
    #[inline]
    pub fn grow(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    #[inline]
    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.mins, &self.maxs)
    }

    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_tracks_extremes() {
        let mut bb = Aabb::from_point(Point3::new(0.0, 0.0, 0.0));
        bb.grow(&Point3::new(2.0, -1.0, 0.5));
        bb.grow(&Point3::new(-1.0, 3.0, -0.5));
        assert_eq!(bb.mins, Point3::new(-1.0, -1.0, -0.5));
        assert_eq!(bb.maxs, Point3::new(2.0, 3.0, 0.5));
        assert_eq!(bb.extents(), Vector3::new(3.0, 4.0, 1.0));
        assert_eq!(bb.center(), Point3::new(0.5, 1.0, 0.0));
    }
}
