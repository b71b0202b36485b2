//! Mesh emitter: one unit cube per set module, an optional base, streamed as STL.

use crate::config::{MeshConfig, StlFormat};
use crate::disc::compose_disc;
use crate::errors::Result;
use crate::float_types::Real;
use crate::io::stl::write_stl_ascii;
use crate::matrix::{BitMatrix, Grid};
use crate::shapes::{Cuboid, Cylinder};
use crate::triangle::Triangle;
use crate::triangulated::Triangulated3D;
use nalgebra::Point3;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub use crate::io::stl::MeshStats;

/// The support printed under the modules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Base {
    /// Flat slab under a bare square matrix
    Slab(Cuboid),
    /// Round plate under a disc layout
    Cylinder(Cylinder),
}

impl Base {
    /// Slab under an `n × n` matrix, one module below the cubes.
    pub fn slab(n: usize) -> Result<Self> {
        let n = n as Real;
        Cuboid::new(Point3::new(n / 2.0, n / 2.0, -1.0), n, n, 1.0).map(Base::Slab)
    }

    /// Cylinder under a disc grid with `side` cells per side.
    pub fn cylinder(side: usize, segments: usize) -> Result<Self> {
        let span = (side + 1) as Real;
        let centre = span / 2.0 - 1.0;
        Cylinder::new(Point3::new(centre, centre, -1.5), span / 2.0, 1.0, segments)
            .map(Base::Cylinder)
    }
}

impl Triangulated3D for Base {
    fn try_visit_triangles<E, F>(&self, f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Triangle) -> std::result::Result<(), E>,
    {
        match self {
            Base::Slab(cuboid) => cuboid.try_visit_triangles(f),
            Base::Cylinder(cylinder) => cylinder.try_visit_triangles(f),
        }
    }

    fn triangle_count(&self) -> usize {
        match self {
            Base::Slab(cuboid) => cuboid.triangle_count(),
            Base::Cylinder(cylinder) => cylinder.triangle_count(),
        }
    }
}

/// A finished module grid plus its base, ready to be written.
///
/// Triangles are produced lazily while writing; the mesh itself only holds the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ModuleMesh {
    grid: Grid,
    base: Option<Base>,
}

impl ModuleMesh {
    /// Lay out `matrix` per `config`.
    ///
    /// In disc mode the matrix is composited with [`compose_disc`], drawing
    /// filler modules from `rng`; in square mode `rng` is untouched.
    pub fn new<R: Rng + ?Sized>(matrix: &BitMatrix, config: &MeshConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let (grid, base) = if config.use_disc {
            let grid = compose_disc(matrix, rng)?;
            let base = config
                .include_bottom
                .then(|| Base::cylinder(grid.size(), config.cylinder_segments))
                .transpose()?;
            (grid, base)
        } else {
            let base = config.include_bottom.then(|| Base::slab(matrix.size())).transpose()?;
            (matrix.clone(), base)
        };

        tracing::debug!(
            grid_side = grid.size(),
            modules = grid.count_set(),
            "module grid:\n{}",
            grid.render()
        );
        Ok(Self { grid, base })
    }

    /// Use an already finished grid as is.
    pub const fn from_grid(grid: Grid, base: Option<Base>) -> Self {
        Self { grid, base }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn base(&self) -> Option<&Base> {
        self.base.as_ref()
    }

    /// The cube printed for module `(x, y)`.
    fn module(x: usize, y: usize) -> Cuboid {
        Cuboid::unit(Point3::new(x as Real, y as Real, 0.0))
    }

    /// Write the whole document to `sink` in `format`.
    pub fn write<W: Write>(&self, format: StlFormat, sink: &mut W) -> Result<MeshStats> {
        let stats = match format {
            StlFormat::Ascii => write_stl_ascii(self, sink)?,
            #[cfg(feature = "stl-io")]
            StlFormat::Binary => crate::io::stl::write_stl_binary(self, sink)?,
        };

        if stats.degenerate > 0 {
            tracing::warn!(count = stats.degenerate, "wrote facets with a zero normal");
        }
        tracing::info!(triangles = stats.triangles, ?format, "mesh written");
        Ok(stats)
    }
}

impl Triangulated3D for ModuleMesh {
    fn try_visit_triangles<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(Triangle) -> std::result::Result<(), E>,
    {
        for (x, y) in self.grid.iter_set() {
            Self::module(x, y).try_visit_triangles(&mut f)?;
        }
        if let Some(base) = &self.base {
            base.try_visit_triangles(&mut f)?;
        }
        Ok(())
    }

    fn triangle_count(&self) -> usize {
        12 * self.grid.count_set() + self.base.map_or(0, |b| b.triangle_count())
    }
}

/// Build and write the solid for `matrix` to `sink`.
pub fn emit<R: Rng + ?Sized, W: Write>(
    matrix: &BitMatrix,
    config: &MeshConfig,
    rng: &mut R,
    sink: &mut W,
) -> Result<MeshStats> {
    ModuleMesh::new(matrix, config, rng)?.write(config.format, sink)
}

/// Build the solid for `matrix` and write it to a new file at `path`.
///
/// An existing file is truncated. If writing fails the file is left as is.
pub fn emit_to_path<R: Rng + ?Sized, P: AsRef<Path>>(
    matrix: &BitMatrix,
    config: &MeshConfig,
    rng: &mut R,
    path: P,
) -> Result<MeshStats> {
    let mesh = ModuleMesh::new(matrix, config, rng)?;
    let mut sink = BufWriter::new(File::create(path.as_ref())?);
    tracing::debug!(path = %path.as_ref().display(), "writing mesh");
    mesh.write(config.format, &mut sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn diagonal() -> BitMatrix {
        BitMatrix::from_bits(&[[1u8, 0], [0, 1]]).unwrap()
    }

    #[test]
    fn square_mode_keeps_matrix() {
        let config = MeshConfig::default().with_disc(false).with_bottom(false);
        let mesh = ModuleMesh::new(&diagonal(), &config, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(mesh.grid(), &diagonal());
        assert!(mesh.base().is_none());
        assert_eq!(mesh.triangle_count(), 24);
    }

    #[test]
    fn slab_sits_under_the_matrix() {
        let Base::Slab(slab) = Base::slab(21).unwrap() else {
            panic!("expected a slab");
        };
        assert_eq!(slab.center, Point3::new(10.5, 10.5, -1.0));
        assert_eq!((slab.length, slab.width, slab.height), (21.0, 21.0, 1.0));
    }

    #[test]
    fn cylinder_is_centred_on_the_disc() {
        // 21x21 matrix -> 33-cell disc grid centred on cell 16
        let Base::Cylinder(cyl) = Base::cylinder(33, 100).unwrap() else {
            panic!("expected a cylinder");
        };
        assert_eq!(cyl.center, Point3::new(16.0, 16.0, -1.5));
        assert_eq!(cyl.radius, 17.0);
        assert_eq!(cyl.height, 1.0);
        assert_eq!(cyl.triangle_count(), 400);
    }

    #[test]
    fn counted_triangles_match_visited() {
        let matrix: BitMatrix = "101\n010\n101\n".parse().unwrap();
        let config = MeshConfig::default().with_cylinder_segments(8);
        let mesh = ModuleMesh::new(&matrix, &config, &mut StdRng::seed_from_u64(9)).unwrap();
        let mut visited = 0;
        mesh.visit_triangles(|_| visited += 1);
        assert_eq!(mesh.triangle_count(), visited);
    }

    #[test]
    fn zero_segments_fail_before_layout() {
        let config = MeshConfig::default().with_cylinder_segments(0);
        let err = emit(&diagonal(), &config, &mut StdRng::seed_from_u64(0), &mut Vec::new());
        assert!(err.is_err());
    }
}
