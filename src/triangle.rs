//! Struct and functions for working with `Triangle`s, the facets every solid is written as.

use crate::float_types::{Real, tolerance};
use nalgebra::{Point3, Vector3};

/// One facet: three vertices in winding order plus the unit normal derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<Real>; 3],
    pub normal: Vector3<Real>,
}

impl Triangle {
    /// Create a new [`Triangle`] from three points.
    ///
    /// The normal is `(b - a) × (c - a)`, normalized, so it points towards the
    /// viewer when `a → b → c` runs counter-clockwise.
    ///
    /// Collinear or coincident points have no direction to normalize; the
    /// normal is then the zero vector (see [`Triangle::is_degenerate`]).
    pub fn new(a: Point3<Real>, b: Point3<Real>, c: Point3<Real>) -> Self {
        let cross = (b - a).cross(&(c - a));
        let normal = cross
            .try_normalize(tolerance())
            .unwrap_or_else(Vector3::zeros);
        Triangle { vertices: [a, b, c], normal }
    }

    /// True if the vertices did not span a plane and the normal is zero.
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vector3::zeros()
    }

    /// Scalar triple product `a · (b × c)`: six times the signed volume of the
    /// tetrahedron spanned with the origin.
    ///
    /// Summed over a closed, outward-wound surface this is six times the enclosed volume.
    pub fn signed_volume_x6(&self) -> Real {
        let [a, b, c] = self.vertices;
        a.coords.dot(&b.coords.cross(&c.coords))
    }

    /// Area of the facet.
    pub fn area(&self) -> Real {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }
}
