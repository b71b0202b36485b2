//! Options controlling how a module matrix becomes a solid.

use crate::errors::{QrSolidError, Result};
use crate::shapes::DEFAULT_SEGMENTS;

/// Output encoding of the mesh document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StlFormat {
    /// Plain-text STL, streamed facet by facet
    #[default]
    Ascii,
    /// Binary STL
    #[cfg(feature = "stl-io")]
    Binary,
}

/// Everything the mesh emitter needs besides the matrix and a random source.
///
/// ```
/// # use qrsolid::config::MeshConfig;
/// let config = MeshConfig::default().with_disc(false).with_bottom(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeshConfig {
    /// Add a support base under the modules
    pub include_bottom: bool,
    /// Embed the code in a dithered disc instead of printing the bare square
    pub use_disc: bool,
    /// Angular resolution of the cylindrical base in disc mode
    pub cylinder_segments: usize,
    pub format: StlFormat,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            include_bottom: true,
            use_disc: true,
            cylinder_segments: DEFAULT_SEGMENTS,
            format: StlFormat::Ascii,
        }
    }
}

impl MeshConfig {
    pub const fn with_bottom(mut self, include_bottom: bool) -> Self {
        self.include_bottom = include_bottom;
        self
    }

    pub const fn with_disc(mut self, use_disc: bool) -> Self {
        self.use_disc = use_disc;
        self
    }

    pub const fn with_cylinder_segments(mut self, segments: usize) -> Self {
        self.cylinder_segments = segments;
        self
    }

    pub const fn with_format(mut self, format: StlFormat) -> Self {
        self.format = format;
        self
    }

    /// Reject settings no emission could honour.
    pub fn validate(&self) -> Result<()> {
        if self.cylinder_segments == 0 {
            return Err(QrSolidError::InvalidParameter(
                "cylinder_segments must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
