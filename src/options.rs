//! Framing configuration.
//!
//! All historically hard-coded ratios and thresholds live here as named
//! constants, and every call takes an explicit immutable [`FrameOptions`] —
//! there is no process-wide state.

use crate::layout::Background;

/// Canvas side over source long side in golden mode.
pub const GOLDEN_RATIO: f64 = 1.618;

/// Margin share of a source dimension, `(golden_ratio - 1) / 2`.
pub const SIDE_MARGIN_RATIO: f64 = 0.309;

/// Default corner radius in pixels.
pub const DEFAULT_RADIUS: u32 = 40;

/// Default number of dominant-color clusters.
pub const DEFAULT_CLUSTER_COUNT: usize = 5;

/// Default vivid-pixel saturation threshold (on the per-image-normalized channel).
pub const DEFAULT_SATURATION_THRESHOLD: f32 = 0.5;

/// Default vivid-pixel brightness threshold (on the per-image-normalized channel).
pub const DEFAULT_BRIGHTNESS_THRESHOLD: f32 = 0.5;

/// Divisor applied to the source's side margin to get the swatch bar height.
pub const SWATCH_HEIGHT_DIVISOR: u32 = 30;

/// Clustering seed. Part of the public contract: identical image, cluster
/// count, and seed produce bit-identical centroids.
pub const KMEANS_SEED: u64 = 42;

/// Clustering restarts; the run with the best score wins.
pub const KMEANS_RESTARTS: u64 = 3;

/// Iteration cap per clustering run.
pub const KMEANS_MAX_ITER: usize = 20;

/// Convergence threshold per clustering run (RGB component space).
pub const KMEANS_CONVERGE: f32 = 0.0025;

/// Immutable per-call configuration for the compositing pipeline.
///
/// # Example
///
/// ```
/// use goldframe::{Background, FrameOptions};
///
/// let options = FrameOptions::default()
///     .golden(true)
///     .background(Background::Black)
///     .rounded(true)
///     .include_swatch(true);
/// assert_eq!(options.radius, 40);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOptions {
    /// Scale the canvas side by `golden_ratio` instead of matching the
    /// source's long side.
    pub golden: bool,
    /// Canvas fill color.
    pub background: Background,
    /// Round the source's corners before placement.
    pub rounded: bool,
    /// Corner radius in pixels. Capped at half the source's short side.
    pub radius: u32,
    /// Overlay a dominant-color swatch bar at the bottom edge.
    pub include_swatch: bool,
    /// Canvas side over source long side in golden mode.
    pub golden_ratio: f64,
    /// Margin share used to size the swatch bar.
    pub side_margin_ratio: f64,
    /// Number of dominant-color clusters (k).
    pub cluster_count: usize,
    /// Vivid filter: minimum normalized saturation, in `[0, 1]`.
    pub saturation_threshold: f32,
    /// Vivid filter: minimum normalized brightness, in `[0, 1]`.
    pub brightness_threshold: f32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            golden: false,
            background: Background::White,
            rounded: false,
            radius: DEFAULT_RADIUS,
            include_swatch: false,
            golden_ratio: GOLDEN_RATIO,
            side_margin_ratio: SIDE_MARGIN_RATIO,
            cluster_count: DEFAULT_CLUSTER_COUNT,
            saturation_threshold: DEFAULT_SATURATION_THRESHOLD,
            brightness_threshold: DEFAULT_BRIGHTNESS_THRESHOLD,
        }
    }
}

impl FrameOptions {
    /// Set golden-ratio sizing.
    pub fn golden(mut self, golden: bool) -> Self {
        self.golden = golden;
        self
    }

    /// Set the canvas background.
    pub fn background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable corner rounding.
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Enable or disable the swatch bar overlay.
    pub fn include_swatch(mut self, include_swatch: bool) -> Self {
        self.include_swatch = include_swatch;
        self
    }

    /// Set the number of dominant-color clusters.
    pub fn cluster_count(mut self, cluster_count: usize) -> Self {
        self.cluster_count = cluster_count;
        self
    }
}
