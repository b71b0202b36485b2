//! Solid primitives, each decomposed into outward-wound triangles.

mod cuboid;
mod cylinder;

pub use cuboid::Cuboid;
pub use cylinder::{Cylinder, DEFAULT_SEGMENTS};
