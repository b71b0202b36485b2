// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Below this length a facet's cross product is treated as zero, i.e. the
/// facet is degenerate and gets a zero normal.
#[inline]
pub const fn tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-6
    }
    #[cfg(feature = "f64")]
    {
        1e-12
    }
}

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;
