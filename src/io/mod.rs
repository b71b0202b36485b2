//! File export of triangulated solids in [STL]
//!
//! [STL]: https://en.wikipedia.org/wiki/STL_(file_format)

pub mod stl;

pub use stl::{MeshStats, to_stl_ascii, write_stl_ascii};

#[cfg(feature = "stl-io")]
pub use stl::{to_stl_binary, write_stl_binary};
