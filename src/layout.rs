//! Square-canvas geometry planning.
//!
//! Computes the canvas side length and centered placement for a source
//! image, normalizing tall sources to the wide case via a logical
//! transpose. Pure geometry — no pixel operations, no allocations.

use crate::error::FrameError;

/// Canvas background color.
///
/// Chosen from a fixed pair rather than an arbitrary color because mask
/// application is background-asymmetric: compositing onto white saturates
/// masked-out pixels up to 1.0, compositing onto black multiplies them
/// down to 0.0 (see [`crate::mask::RoundedMask::apply`]).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Background {
    /// All channels 1.0 (255 after quantization).
    #[default]
    White,
    /// All channels 0.0.
    Black,
}

impl Background {
    /// Normalized fill value for every channel.
    pub fn fill_value(self) -> f32 {
        match self {
            Self::White => 1.0,
            Self::Black => 0.0,
        }
    }
}

/// Where and how the source sits on the square canvas.
///
/// Computed once per invocation from the source dimensions and the
/// proportion mode; immutable after creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasPlan {
    /// Side of the square output canvas. Always ≥ max(source h, source w).
    pub side_length: u32,
    /// Top row of the pasted source, in post-transpose coordinates.
    pub origin_row: u32,
    /// Left column of the pasted source, in post-transpose coordinates.
    pub origin_col: u32,
    /// Whether the source must be transposed before placement (and the
    /// canvas transposed back afterwards).
    pub needs_transpose: bool,
}

/// Compute the square canvas layout for a source of the given dimensions.
///
/// Tall sources (`height > width`) are planned as if transposed, so a
/// single wide-or-square code path serves all placement math downstream;
/// `needs_transpose` tells the caller to actually perform the swap.
///
/// The side length is `round(max(height, width) * golden_ratio)` in golden
/// mode, else `max(height, width)`, clamped to at least the larger source
/// dimension. Guaranteed by construction for any ratio > 1, clamped anyway.
pub fn plan(
    height: u32,
    width: u32,
    golden: bool,
    golden_ratio: f64,
) -> Result<CanvasPlan, FrameError> {
    if height == 0 || width == 0 {
        return Err(FrameError::ZeroSourceDimension);
    }

    let needs_transpose = height > width;
    let (eff_h, eff_w) = if needs_transpose {
        (width, height)
    } else {
        (height, width)
    };

    let long_side = height.max(width);
    let side_length = if golden {
        ((long_side as f64 * golden_ratio).round() as u32).max(long_side)
    } else {
        long_side
    };

    Ok(CanvasPlan {
        side_length,
        origin_row: (side_length - eff_h) / 2,
        origin_col: (side_length - eff_w) / 2,
        needs_transpose,
    })
}
