//! Dominant-color extraction and swatch rendering.
//!
//! Pipeline: RGB→HSV, per-image normalization of saturation and value,
//! vivid-pixel filtering, seeded multi-restart k-means in RGB space,
//! hue-ascending ordering of the centroids. The seed and restart count
//! are fixed ([`crate::options::KMEANS_SEED`]) so identical inputs give
//! bit-identical palettes.

use kmeans_colors::{Kmeans, get_kmeans};
use log::debug;
use palette::{FromColor, Hsv, Srgb};

use crate::buffer::PixelBuffer;
use crate::error::FrameError;
use crate::options::{FrameOptions, KMEANS_CONVERGE, KMEANS_MAX_ITER, KMEANS_RESTARTS, KMEANS_SEED};

/// Pixels that survive per-image-normalized saturation/brightness filtering.
///
/// Both channels are divided by their own maximum observed across the
/// image (adaptive, not a fixed scale), then compared against the
/// thresholds. This biases extraction toward vivid colors and keeps
/// near-white, near-black, and near-gray backgrounds out of the palette.
fn vivid_pixels(
    image: &PixelBuffer,
    saturation_threshold: f32,
    brightness_threshold: f32,
) -> Vec<Srgb> {
    let mut samples = Vec::with_capacity(image.height() as usize * image.width() as usize);
    let mut max_s = 0.0f32;
    let mut max_v = 0.0f32;
    for [r, g, b] in image.pixels() {
        let rgb = Srgb::new(r, g, b);
        let hsv = Hsv::from_color(rgb);
        max_s = max_s.max(hsv.saturation);
        max_v = max_v.max(hsv.value);
        samples.push((rgb, hsv.saturation, hsv.value));
    }
    // A zero maximum means the whole image is gray or black; nothing
    // can pass the filter.
    if max_s <= 0.0 || max_v <= 0.0 {
        return Vec::new();
    }
    samples
        .into_iter()
        .filter(|&(_, s, v)| s / max_s > saturation_threshold && v / max_v > brightness_threshold)
        .map(|(rgb, _, _)| rgb)
        .collect()
}

/// Cluster the vivid pixels and return the centroids in hue order.
///
/// Runs [`KMEANS_RESTARTS`] seeded k-means rounds and keeps the best
/// score. Centroids are rounded to 8-bit before the hue sort so the
/// ordering matches the emitted colors exactly; the sort is stable, so
/// equal hues keep cluster-discovery order.
pub(crate) fn dominant_clusters(
    image: &PixelBuffer,
    options: &FrameOptions,
) -> Result<Vec<Srgb<u8>>, FrameError> {
    let k = options.cluster_count;
    if k == 0 {
        return Err(FrameError::ZeroClusterCount);
    }

    let vivid = vivid_pixels(
        image,
        options.saturation_threshold,
        options.brightness_threshold,
    );
    debug!(
        "vivid filter kept {} of {} pixels",
        vivid.len(),
        image.height() as usize * image.width() as usize
    );
    if vivid.len() < k {
        return Err(FrameError::EmptyVividSet {
            found: vivid.len(),
            needed: k,
        });
    }

    let mut best = Kmeans::new();
    for run in 0..KMEANS_RESTARTS {
        let result = get_kmeans(
            k,
            KMEANS_MAX_ITER,
            KMEANS_CONVERGE,
            false,
            &vivid,
            KMEANS_SEED + run,
        );
        if result.score < best.score {
            best = result;
        }
    }

    let mut centroids: Vec<(f32, Srgb<u8>)> = best
        .centroids
        .iter()
        .map(|&c| {
            let rgb: Srgb<u8> = c.into_format();
            let hsv = Hsv::from_color(rgb.into_format::<f32>());
            (hsv.hue.into_positive_degrees(), rgb)
        })
        .collect();
    centroids.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(centroids.into_iter().map(|(_, rgb)| rgb).collect())
}

/// Render the image's dominant colors as a horizontal strip of solid,
/// equal-width blocks in hue order, on a white base layer.
///
/// The strip is `cluster_count * block_width` wide and `block_height`
/// tall. Fails with [`FrameError::EmptyVividSet`] when the image has too
/// few vivid pixels to cluster.
pub fn swatch(
    image: &PixelBuffer,
    block_width: u32,
    block_height: u32,
    options: &FrameOptions,
) -> Result<PixelBuffer, FrameError> {
    if block_width == 0 || block_height == 0 {
        return Err(FrameError::ZeroSwatchDimension);
    }
    let colors = dominant_clusters(image, options)?;

    let mut strip = PixelBuffer::filled(block_height, block_width * colors.len() as u32, 1.0);
    for (i, color) in colors.iter().enumerate() {
        let c: Srgb<f32> = color.into_format();
        let px = [c.red, c.green, c.blue];
        for row in 0..block_height {
            for col in 0..block_width {
                strip.set_pixel(row, i as u32 * block_width + col, px);
            }
        }
    }
    Ok(strip)
}

/// The image's dominant colors as lowercase `"rrggbb"` strings in hue order.
pub fn dominant_hex_colors(
    image: &PixelBuffer,
    options: &FrameOptions,
) -> Result<Vec<String>, FrameError> {
    Ok(dominant_clusters(image, options)?
        .iter()
        .map(|c| format!("{:02x}{:02x}{:02x}", c.red, c.green, c.blue))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four saturated quadrants: red, green, blue, yellow.
    fn quadrant_image(side: u32) -> PixelBuffer {
        let mut img = PixelBuffer::filled(side, side, 0.0);
        let half = side / 2;
        for row in 0..side {
            for col in 0..side {
                let px = match (row < half, col < half) {
                    (true, true) => [1.0, 0.0, 0.0],
                    (true, false) => [0.0, 1.0, 0.0],
                    (false, true) => [0.0, 0.0, 1.0],
                    (false, false) => [1.0, 1.0, 0.0],
                };
                img.set_pixel(row, col, px);
            }
        }
        img
    }

    fn hue_of(hex: &str) -> f32 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap();
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap();
        Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>())
            .hue
            .into_positive_degrees()
    }

    // ── vivid filter ────────────────────────────────────────────────────

    #[test]
    fn saturated_pixels_all_pass() {
        let img = quadrant_image(10);
        assert_eq!(vivid_pixels(&img, 0.5, 0.5).len(), 100);
    }

    #[test]
    fn gray_image_yields_empty_set() {
        let img = PixelBuffer::filled(10, 10, 0.4);
        assert!(vivid_pixels(&img, 0.5, 0.5).is_empty());
    }

    #[test]
    fn washed_out_pixels_are_dropped() {
        // Half vivid red, half near-white: the pale half normalizes to low
        // saturation and falls below the threshold.
        let mut img = PixelBuffer::filled(10, 10, 0.0);
        for row in 0..10 {
            for col in 0..10 {
                let px = if col < 5 {
                    [1.0, 0.0, 0.0]
                } else {
                    [1.0, 0.95, 0.95]
                };
                img.set_pixel(row, col, px);
            }
        }
        assert_eq!(vivid_pixels(&img, 0.5, 0.5).len(), 50);
    }

    // ── clustering ──────────────────────────────────────────────────────

    #[test]
    fn returns_exactly_k_hex_strings() {
        let img = quadrant_image(40);
        let hex = dominant_hex_colors(&img, &FrameOptions::default()).unwrap();
        assert_eq!(hex.len(), 5);
        for h in &hex {
            assert_eq!(h.len(), 6);
            assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(h.to_lowercase(), *h);
        }
    }

    #[test]
    fn hex_colors_are_hue_ordered() {
        let img = quadrant_image(40);
        let hex = dominant_hex_colors(&img, &FrameOptions::default()).unwrap();
        let hues: Vec<f32> = hex.iter().map(|h| hue_of(h)).collect();
        assert!(hues.windows(2).all(|w| w[0] <= w[1]), "hues {hues:?}");
    }

    #[test]
    fn repeated_extraction_is_bit_identical() {
        let img = quadrant_image(40);
        let opts = FrameOptions::default();
        assert_eq!(
            dominant_hex_colors(&img, &opts).unwrap(),
            dominant_hex_colors(&img, &opts).unwrap()
        );
        assert_eq!(
            dominant_clusters(&img, &opts).unwrap(),
            dominant_clusters(&img, &opts).unwrap()
        );
    }

    #[test]
    fn too_few_vivid_pixels_is_an_error() {
        let img = PixelBuffer::filled(20, 20, 0.4);
        assert_eq!(
            dominant_hex_colors(&img, &FrameOptions::default()),
            Err(FrameError::EmptyVividSet {
                found: 0,
                needed: 5
            })
        );
    }

    #[test]
    fn zero_cluster_count_is_an_error() {
        let img = quadrant_image(10);
        let opts = FrameOptions::default().cluster_count(0);
        assert_eq!(
            dominant_hex_colors(&img, &opts),
            Err(FrameError::ZeroClusterCount)
        );
    }

    // ── swatch rendering ────────────────────────────────────────────────

    #[test]
    fn swatch_dimensions_and_uniform_blocks() {
        let img = quadrant_image(40);
        let opts = FrameOptions::default();
        let strip = swatch(&img, 8, 3, &opts).unwrap();
        assert_eq!(strip.height(), 3);
        assert_eq!(strip.width(), 40);
        // Each block is a solid color.
        for block in 0..5u32 {
            let first = strip.pixel(0, block * 8);
            for row in 0..3 {
                for col in 0..8 {
                    assert_eq!(strip.pixel(row, block * 8 + col), first);
                }
            }
        }
    }

    #[test]
    fn swatch_matches_hex_output() {
        let img = quadrant_image(40);
        let opts = FrameOptions::default();
        let strip = swatch(&img, 4, 2, &opts).unwrap();
        let hex = dominant_hex_colors(&img, &opts).unwrap();
        for (i, h) in hex.iter().enumerate() {
            let px = strip.pixel(0, i as u32 * 4);
            let quantized = format!(
                "{:02x}{:02x}{:02x}",
                (px[0] * 255.0).round() as u8,
                (px[1] * 255.0).round() as u8,
                (px[2] * 255.0).round() as u8
            );
            assert_eq!(&quantized, h);
        }
    }

    #[test]
    fn zero_swatch_dimension_is_an_error() {
        let img = quadrant_image(10);
        let opts = FrameOptions::default();
        assert_eq!(
            swatch(&img, 0, 3, &opts),
            Err(FrameError::ZeroSwatchDimension)
        );
        assert_eq!(
            swatch(&img, 3, 0, &opts),
            Err(FrameError::ZeroSwatchDimension)
        );
    }
}
