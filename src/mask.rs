//! Rounded-rectangle corner masks.

use crate::buffer::PixelBuffer;
use crate::layout::Background;

/// Binary single-channel mask, same dimensions as the un-transposed source.
///
/// The interior is the source rectangle inset by one pixel on each edge,
/// with the four corners replaced by quarter-circle arcs.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedMask {
    height: u32,
    width: u32,
    data: Vec<f32>,
}

impl RoundedMask {
    /// Rasterize a rounded-rectangle mask.
    ///
    /// With `invert = false` the interior is 0.0 and the exterior 1.0
    /// (for compositing onto white); with `invert = true` the fills swap
    /// (for compositing onto black). The radius is capped at half the
    /// short side so opposing arcs never overlap.
    pub fn build(height: u32, width: u32, radius: u32, invert: bool) -> Self {
        let radius = i64::from(radius.min(height.min(width) / 2));
        let (inside, outside) = if invert { (1.0, 0.0) } else { (0.0, 1.0) };

        let mut data = Vec::with_capacity(height as usize * width as usize);
        for row in 0..i64::from(height) {
            for col in 0..i64::from(width) {
                let v = if inside_rounded_rect(row, col, i64::from(height), i64::from(width), radius)
                {
                    inside
                } else {
                    outside
                };
                data.push(v);
            }
        }
        Self {
            height,
            width,
            data,
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask value at (row, col).
    #[inline]
    pub fn value(&self, row: u32, col: u32) -> f32 {
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Apply the mask to a source buffer, returning a new buffer.
    ///
    /// The two backgrounds use different suppression arithmetic on the
    /// normalized samples, kept as separate paths to avoid rounding
    /// differences at the mask boundary:
    ///
    /// - White: `max(sample, mask)` — a non-inverted mask (exterior 1.0)
    ///   saturates exterior pixels up to white.
    /// - Black: `sample * mask` — an inverted mask (exterior 0.0)
    ///   multiplies exterior pixels down to black.
    ///
    /// The caller is expected to build with `invert` matching the
    /// background (`invert = true` for black).
    pub fn apply(&self, source: &PixelBuffer, background: Background) -> PixelBuffer {
        debug_assert_eq!((self.height, self.width), (source.height(), source.width()));
        let mut out = source.clone();
        for row in 0..self.height {
            for col in 0..self.width {
                let m = self.value(row, col);
                let px = source.pixel(row, col);
                let blended = match background {
                    Background::White => [px[0].max(m), px[1].max(m), px[2].max(m)],
                    Background::Black => [px[0] * m, px[1] * m, px[2] * m],
                };
                out.set_pixel(row, col, blended);
            }
        }
        out
    }
}

/// Point-in-rounded-rectangle test on the pixel grid.
///
/// The rectangle spans rows/cols `1..=len-2`; corner arc centers sit
/// `1 + radius` in from each edge, and pixels in a corner zone must lie
/// within Euclidean distance `radius` of their quadrant's center. Pixels
/// in the non-corner band are always interior.
///
/// Clamping the point to the rectangle spanned by the four arc centers
/// gives exactly that per-quadrant test, and stays well-behaved when a
/// large radius makes opposing arcs meet (the center rectangle collapses
/// toward the midpoint instead of inverting).
fn inside_rounded_rect(row: i64, col: i64, height: i64, width: i64, radius: i64) -> bool {
    let (r0, r1) = (1, height - 2);
    let (c0, c1) = (1, width - 2);
    if row < r0 || col < c0 || row > r1 || col > c1 {
        return false;
    }
    if radius == 0 {
        return true;
    }

    let mid_r = (r0 + r1) / 2;
    let mid_c = (c0 + c1) / 2;
    let cy = row.clamp((r0 + radius).min(mid_r), (r1 - radius).max(mid_r));
    let cx = col.clamp((c0 + radius).min(mid_c), (c1 - radius).max(mid_c));

    let dy = row - cy;
    let dx = col - cx;
    dy * dy + dx * dx <= radius * radius
}
