//! Framing pipeline errors.

use thiserror::Error;

/// Error from any public framing operation.
///
/// Every operation either returns a fully valid buffer/value or one of
/// these — there are no partially written results.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Source image has zero width or height.
    #[error("source image has zero width or height")]
    ZeroSourceDimension,

    /// Swatch block width or height is zero.
    #[error("swatch block width or height is zero")]
    ZeroSwatchDimension,

    /// Cluster count must be at least 1.
    #[error("cluster count must be at least 1")]
    ZeroClusterCount,

    /// Too few pixels survived the saturation/brightness filter for
    /// clustering to proceed. Deterministic for a given input — retrying
    /// is futile; the caller decides the fallback (e.g. skip the swatch).
    #[error("{found} vivid pixels after filtering, need at least {needed}")]
    EmptyVividSet {
        /// Pixels remaining after the vivid filter.
        found: usize,
        /// The configured cluster count.
        needed: usize,
    },
}
