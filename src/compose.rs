//! The end-to-end compositing pipeline.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::FrameError;
use crate::extract;
use crate::layout::{self, Background};
use crate::mask::RoundedMask;
use crate::options::{FrameOptions, SWATCH_HEIGHT_DIVISOR};

/// Composite `source` onto a padded square canvas.
///
/// Steps, in order:
///
/// 1. If `rounded`, mask the corners at the source's original dimensions
///    using the background's suppression semantics.
/// 2. Transpose tall sources so placement math only sees the wide case.
/// 3. Plan the canvas ([`layout::plan`]).
/// 4. Fill a `side_length` square with the background color.
/// 5. Paste the (masked, possibly transposed) source, centered.
/// 6. If `include_swatch`, overlay a dominant-color bar — sized from the
///    *original* pre-transpose proportions and extracted from the
///    *original* unmasked pixels — centered at the bottom edge.
/// 7. Transpose back if step 2 transposed.
///
/// The result is always square with side [`layout::CanvasPlan::side_length`];
/// the source is fully contained and centered, and the swatch bar can only
/// cover the bottom margin, never the source region.
pub fn compose(source: &PixelBuffer, options: &FrameOptions) -> Result<PixelBuffer, FrameError> {
    let plan = layout::plan(
        source.height(),
        source.width(),
        options.golden,
        options.golden_ratio,
    )?;
    debug!(
        "composing {}x{} source: {plan:?}",
        source.height(),
        source.width()
    );

    let mut framed = if options.rounded {
        let invert = options.background == Background::Black;
        RoundedMask::build(source.height(), source.width(), options.radius, invert)
            .apply(source, options.background)
    } else {
        source.clone()
    };
    if plan.needs_transpose {
        framed = framed.transposed();
    }

    let mut canvas = PixelBuffer::filled(
        plan.side_length,
        plan.side_length,
        options.background.fill_value(),
    );
    canvas.paste(&framed, plan.origin_row, plan.origin_col);

    if options.include_swatch {
        overlay_swatch(&mut canvas, source, options)?;
    }

    Ok(if plan.needs_transpose {
        canvas.transposed()
    } else {
        canvas
    })
}

/// Overlay the dominant-color bar, horizontally centered at the bottom
/// edge of the (pre-transpose-back) canvas.
///
/// Block width is `original_width / cluster_count` and bar height is the
/// source's side margin divided by [`SWATCH_HEIGHT_DIVISOR`], so the bar
/// never reaches the pasted source. Sources too small to produce a
/// visible bar skip the overlay.
fn overlay_swatch(
    canvas: &mut PixelBuffer,
    source: &PixelBuffer,
    options: &FrameOptions,
) -> Result<(), FrameError> {
    if options.cluster_count == 0 {
        return Err(FrameError::ZeroClusterCount);
    }
    let block_width = source.width() / options.cluster_count as u32;
    let bar_height =
        (source.height() as f64 * options.side_margin_ratio) as u32 / SWATCH_HEIGHT_DIVISOR;
    if block_width == 0 || bar_height == 0 {
        debug!("swatch skipped: degenerate {block_width}x{bar_height} blocks");
        return Ok(());
    }

    let strip = extract::swatch(source, block_width, bar_height, options)?;
    let origin_row = canvas.height() - strip.height();
    let origin_col = (canvas.width() - strip.width()) / 2;
    canvas.paste(&strip, origin_row, origin_col);
    Ok(())
}
