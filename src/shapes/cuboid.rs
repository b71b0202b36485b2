use crate::errors::{Result, ensure_positive};
use crate::float_types::Real;
use crate::triangle::Triangle;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;

/// An axis-aligned box given by its center and edge lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Point3<Real>,
    /// Extent along x
    pub length: Real,
    /// Extent along y
    pub width: Real,
    /// Extent along z
    pub height: Real,
}

impl Cuboid {
    /// Validate and build a box centered at `center`.
    ///
    /// Every dimension must be finite and strictly positive.
    pub fn new(center: Point3<Real>, length: Real, width: Real, height: Real) -> Result<Self> {
        ensure_positive("box length", length)?;
        ensure_positive("box width", width)?;
        ensure_positive("box height", height)?;
        Ok(Self { center, length, width, height })
    }

    /// A unit cube centered at `center`, the solid printed for one module.
    pub const fn unit(center: Point3<Real>) -> Self {
        Self { center, length: 1.0, width: 1.0, height: 1.0 }
    }

    /// The 12 facets of the box, two per face.
    ///
    /// ## **Corner Labeling**
    /// ```text
    ///        F-------G        z
    ///       /|      /|        |  y
    ///      E-------H |        | /
    ///      | B-----|-C        |/
    ///      |/      |/         +----x
    ///      A-------D
    /// ```
    /// `A..D` is the bottom ring, `E..H` the top ring directly above it.
    ///
    /// ## **Face Order**
    /// bottom (-z), top (+z), x-min, x-max, y-min, y-max. The order is fixed so
    /// the same box always serializes to the same bytes.
    pub fn triangles(&self) -> [Triangle; 12] {
        let (x, y, z) = (self.center.x, self.center.y, self.center.z);
        let (hl, hw, hh) = (self.length / 2.0, self.width / 2.0, self.height / 2.0);

        let a = Point3::new(x - hl, y - hw, z - hh);
        let b = Point3::new(x - hl, y + hw, z - hh);
        let c = Point3::new(x + hl, y + hw, z - hh);
        let d = Point3::new(x + hl, y - hw, z - hh);
        let e = Point3::new(x - hl, y - hw, z + hh);
        let f = Point3::new(x - hl, y + hw, z + hh);
        let g = Point3::new(x + hl, y + hw, z + hh);
        let h = Point3::new(x + hl, y - hw, z + hh);

        [
            // Bottom
            Triangle::new(a, b, c),
            Triangle::new(a, c, d),
            // Top
            Triangle::new(e, g, f),
            Triangle::new(e, h, g),
            // x-min
            Triangle::new(a, f, b),
            Triangle::new(a, e, f),
            // x-max
            Triangle::new(d, c, g),
            Triangle::new(d, g, h),
            // y-min
            Triangle::new(a, d, h),
            Triangle::new(a, h, e),
            // y-max
            Triangle::new(b, g, c),
            Triangle::new(b, f, g),
        ]
    }

    pub fn volume(&self) -> Real {
        self.length * self.width * self.height
    }
}

impl Triangulated3D for Cuboid {
    fn try_visit_triangles<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Triangle) -> std::result::Result<(), E>,
    {
        self.triangles().into_iter().try_for_each(&mut f)
    }

    fn triangle_count(&self) -> usize {
        12
    }
}
