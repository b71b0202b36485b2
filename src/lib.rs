//! Turn a **QR code module matrix** into a printable solid, written as an [STL] triangle mesh.
//!
//! Every set module becomes a unit cube. Optionally the code is embedded in a
//! disc of randomly dithered filler modules (with the three finder corners kept
//! clear), and a base is added underneath: a slab for the bare square, a
//! cylinder for the disc.
//!
//! ```rust
//! use qrsolid::{BitMatrix, MeshConfig, emit};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), qrsolid::errors::QrSolidError> {
//! let matrix = BitMatrix::from_bits(&[[1u8, 0], [0, 1]])?;
//! let config = MeshConfig::default().with_disc(false).with_bottom(false);
//! let mut stl = Vec::new();
//! let stats = emit(&matrix, &config, &mut StdRng::seed_from_u64(7), &mut stl)?;
//! assert_eq!(stats.triangles, 24);
//! # Ok(())
//! # }
//! ```
//!
//! Encoding text into a module matrix is left to a QR encoder of your choice;
//! anything that yields square `0`/`1` rows can feed [`BitMatrix::from_bits`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **stl-io**: binary `.stl` export through `stl_io`
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! [STL]: https://en.wikipedia.org/wiki/STL_(file_format)

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod config;
pub mod disc;
pub mod emitter;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod matrix;
pub mod shapes;
pub mod triangle;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::{MeshConfig, StlFormat};
pub use disc::{DiscLayout, compose_disc};
pub use emitter::{MeshStats, ModuleMesh, emit, emit_to_path};
pub use matrix::{BitMatrix, Grid};
pub use triangle::Triangle;
pub use triangulated::Triangulated3D;
