/// A trait for any shape which can be represented by triangles
use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::triangle::Triangle;
use nalgebra::Point3;
use std::collections::HashMap;
use std::convert::Infallible;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a stream of triangles in 3D
/// can automatically use all the triangle-based IO backends.
/// Triangles are produced on demand and never collected by the trait itself.
pub trait Triangulated3D {
    /// Call `f` for each triangle, stopping at the first error.
    fn try_visit_triangles<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnMut(Triangle) -> Result<(), E>;

    /// Call `f` for each triangle.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut(Triangle),
    {
        let _ = self.try_visit_triangles(|tri| {
            f(tri);
            Ok::<(), Infallible>(())
        });
    }

    /// Number of triangles the surface yields.
    fn triangle_count(&self) -> usize {
        let mut count = 0;
        self.visit_triangles(|_| count += 1);
        count
    }

    /// Bounds of every vertex, `None` for an empty surface.
    fn bounding_box(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        self.visit_triangles(|tri| {
            for p in tri.vertices {
                match bounds.as_mut() {
                    Some(b) => b.grow(&p),
                    None => bounds = Some(Aabb::from_point(p)),
                }
            }
        });
        bounds
    }

    /// Enclosed volume by the divergence theorem.
    ///
    /// Only meaningful for closed surfaces; negative if the winding is inward.
    fn signed_volume(&self) -> Real {
        let mut six_v = 0.0;
        self.visit_triangles(|tri| six_v += tri.signed_volume_x6());
        six_v / 6.0
    }

    /// Checks that the surface is closed with consistent winding.
    ///
    /// ### Returns
    /// Returns `true` if every directed edge `a → b` is matched by exactly
    /// one `b → a` in a neighbouring triangle.
    ///
    /// ### Notes:
    /// - Positions are quantized with `QUANTIZATION_FACTOR` before comparing.
    /// - Touching boxes of a module grid share faces, so a whole grid is
    ///   expected to fail this; it holds per box and per cylinder.
    fn is_closed(&self) -> bool {
        const QUANTIZATION_FACTOR: Real = 1e5;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct QuantizedPoint(i64, i64, i64);

        fn quantize_point(p: &Point3<Real>) -> QuantizedPoint {
            QuantizedPoint(
                (p.x * QUANTIZATION_FACTOR).round() as i64,
                (p.y * QUANTIZATION_FACTOR).round() as i64,
                (p.z * QUANTIZATION_FACTOR).round() as i64,
            )
        }

        let mut edges: HashMap<(QuantizedPoint, QuantizedPoint), i32> = HashMap::new();
        self.visit_triangles(|tri| {
            let q = tri.vertices.map(|p| quantize_point(&p));
            for (a, b) in [(q[0], q[1]), (q[1], q[2]), (q[2], q[0])] {
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        });

        !edges.is_empty()
            && edges
                .iter()
                .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }
}
