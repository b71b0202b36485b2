//! Disc layout: embeds a square module matrix in a round field of random filler modules.
//!
//! ```text
//!           . x x . x .
//!       x . . x x x . x x .
//!     x . +-----------+ x . x      the matrix sits in the middle,
//!     . x |  finder   | . x .      its three finder corners get a
//!     x x |  matrix   | x . x      one-module clear margin, and
//!     . . +-----------+ x x .      everything else inside the
//!       . x . x x . . x . x        circle is a coin flip
//!           x . . x x .
//! ```

use crate::errors::{QrSolidError, Result};
use crate::float_types::Real;
use crate::matrix::{BitMatrix, Grid};
use rand::Rng;
use std::ops::Range;

/// Side of the square cleared around each finder pattern, margin included on the inner side.
pub const FINDER_ZONE: usize = 9;
/// Clear margin outside the matrix edge next to each finder pattern.
pub const FINDER_MARGIN: usize = 1;

/// A rectangular block of grid cells, `x` range then `y` range.
pub type CellRect = (Range<usize>, Range<usize>);

/// The geometry of a disc grid built around a `qr_width × qr_width` matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscLayout {
    qr_width: usize,
    qr_radius: Real,
    circle_radius: Real,
    grid_centre: usize,
    grid_width: usize,
    qr_top_left: usize,
}

impl DiscLayout {
    /// Compute the layout for a matrix of side `qr_width`.
    ///
    /// The circle is the smallest one that contains the matrix square plus one
    /// module, the grid the smallest odd square that contains the circle.
    pub fn for_qr_width(qr_width: usize) -> Result<Self> {
        if qr_width == 0 {
            return Err(QrSolidError::InvalidInput("module matrix is empty".to_string()));
        }
        let qr_radius = (qr_width - 1) as Real / 2.0;
        let circle_radius = (2.0 * qr_radius * qr_radius).sqrt() + 1.0;
        let grid_centre = circle_radius.ceil() as usize;
        let grid_width = 2 * grid_centre;
        // truncation toward zero; both operands are non-negative
        let qr_top_left = (grid_centre as Real - qr_radius) as usize;

        Ok(Self { qr_width, qr_radius, circle_radius, grid_centre, grid_width, qr_top_left })
    }

    pub const fn qr_width(&self) -> usize {
        self.qr_width
    }

    pub const fn qr_radius(&self) -> Real {
        self.qr_radius
    }

    pub const fn circle_radius(&self) -> Real {
        self.circle_radius
    }

    pub const fn grid_centre(&self) -> usize {
        self.grid_centre
    }

    pub const fn grid_width(&self) -> usize {
        self.grid_width
    }

    /// Cells per side of the grid, `grid_width + 1`.
    pub const fn grid_side(&self) -> usize {
        self.grid_width + 1
    }

    /// Grid coordinate of matrix cell `(0, 0)` on both axes.
    pub const fn qr_top_left(&self) -> usize {
        self.qr_top_left
    }

    /// The cells the matrix is copied onto.
    pub fn footprint(&self) -> CellRect {
        let t = self.qr_top_left;
        (t..t + self.qr_width, t..t + self.qr_width)
    }

    /// True if cell `(x, y)` lies strictly inside the circle.
    pub fn in_circle(&self, x: usize, y: usize) -> bool {
        let dx = x as Real - self.grid_centre as Real;
        let dy = y as Real - self.grid_centre as Real;
        dx * dx + dy * dy < self.circle_radius * self.circle_radius
    }

    /// The three blocks around the finder patterns that must stay free of filler:
    /// top-left, top-right, bottom-left.
    ///
    /// Ranges are clipped at 0 for matrices narrower than the zone.
    pub fn corner_zones(&self) -> [CellRect; 3] {
        let t = self.qr_top_left as isize;
        let w = self.qr_width as isize;
        let (zone, margin) = (FINDER_ZONE as isize, FINDER_MARGIN as isize);

        let span = |start: isize, end: isize| start.max(0) as usize..end.max(0) as usize;
        let near = span(t - margin, t + zone);
        let far = span(t + w - zone, t + w + margin);

        [
            (near.clone(), near.clone()),
            (near.clone(), far.clone()),
            (far, near),
        ]
    }

    /// Build the disc grid for `matrix`.
    ///
    /// Cells inside the circle are drawn from `rng` one by one, `y` outer and
    /// `x` inner, so a seeded generator always yields the same grid. The
    /// corner zones and the footprint are then cleared and the matrix copied
    /// onto the footprint as the last write.
    pub fn compose<R: Rng + ?Sized>(&self, matrix: &BitMatrix, rng: &mut R) -> Result<Grid> {
        if matrix.size() != self.qr_width {
            return Err(QrSolidError::InvalidInput(format!(
                "layout is for a {0}x{0} matrix, got {1}x{1}",
                self.qr_width,
                matrix.size()
            )));
        }

        let side = self.grid_side();
        let mut grid = Grid::new(side)?;

        for y in 0..side {
            for x in 0..side {
                if self.in_circle(x, y) && rng.gen_bool(0.5) {
                    grid.set(x, y, true)?;
                }
            }
        }

        for (xs, ys) in self.corner_zones() {
            grid.fill_rect(xs, ys, false);
        }

        let (xs, ys) = self.footprint();
        grid.fill_rect(xs.clone(), ys.clone(), false);
        grid.overlay(matrix, xs.start, ys.start)?;

        tracing::debug!(
            qr_width = self.qr_width,
            circle_radius = self.circle_radius,
            grid_side = side,
            qr_top_left = self.qr_top_left,
            modules = grid.count_set(),
            "composed disc grid"
        );
        Ok(grid)
    }
}

/// Lay `matrix` out on a disc sized for it. See [`DiscLayout::compose`].
pub fn compose_disc<R: Rng + ?Sized>(matrix: &BitMatrix, rng: &mut R) -> Result<Grid> {
    DiscLayout::for_qr_width(matrix.size())?.compose(matrix, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn version_one_layout() {
        let layout = DiscLayout::for_qr_width(21).unwrap();
        assert_eq!(layout.qr_radius(), 10.0);
        assert!((layout.circle_radius() - (200.0 as Real).sqrt() - 1.0).abs() < 1e-9);
        assert_eq!(layout.grid_centre(), 16);
        assert_eq!(layout.grid_width(), 32);
        assert_eq!(layout.grid_side(), 33);
        assert_eq!(layout.qr_top_left(), 6);
        assert_eq!(layout.footprint(), (6..27, 6..27));
    }

    #[test]
    fn even_width_truncates_top_left() {
        let layout = DiscLayout::for_qr_width(2).unwrap();
        assert_eq!(layout.qr_radius(), 0.5);
        assert_eq!(layout.grid_centre(), 2);
        assert_eq!(layout.qr_top_left(), 1);
    }

    #[test]
    fn corner_zones_for_version_one() {
        let layout = DiscLayout::for_qr_width(21).unwrap();
        let [tl, tr, bl] = layout.corner_zones();
        assert_eq!(tl, (5..15, 5..15));
        assert_eq!(tr, (5..15, 18..28));
        assert_eq!(bl, (18..28, 5..15));
    }

    #[test]
    fn tiny_matrix_zones_saturate_at_zero() {
        let layout = DiscLayout::for_qr_width(5).unwrap();
        let [_, tr, bl] = layout.corner_zones();
        assert_eq!(tr.1.start, 0);
        assert_eq!(bl.0.start, 0);
    }

    #[test]
    fn nothing_outside_the_circle() {
        let layout = DiscLayout::for_qr_width(11).unwrap();
        let matrix = BitMatrix::new(11).unwrap();
        let grid = layout.compose(&matrix, &mut StdRng::seed_from_u64(3)).unwrap();
        for (x, y) in grid.iter_set() {
            assert!(layout.in_circle(x, y), "({x}, {y}) set outside the circle");
        }
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let layout = DiscLayout::for_qr_width(21).unwrap();
        let matrix = BitMatrix::new(25).unwrap();
        let err = layout.compose(&matrix, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, QrSolidError::InvalidInput(_)));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(DiscLayout::for_qr_width(0).is_err());
    }
}
