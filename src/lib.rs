//! Photo framing: golden-ratio square canvases, rounded corners, and
//! dominant-color swatch bars.
//!
//! Pure in-memory pixel transforms — no decoding, no encoding, no I/O.
//! The caller hands in a normalized [`PixelBuffer`] (RGB, `f32` samples
//! in `[0, 1]`) and gets a new one back; quantization to 8-bit and file
//! handling belong to the caller.
//!
//! # Modules
//!
//! - [`buffer`] — normalized H×W×3 pixel buffer
//! - [`layout`] — square-canvas geometry planning
//! - [`mask`] — rounded-rectangle corner masks
//! - [`extract`] — dominant-color clustering and swatch rendering
//! - [`compose`] — the end-to-end compositing pipeline
//! - [`options`] — configuration surface and named constants
//!
//! # Example
//!
//! ```
//! use goldframe::{FrameOptions, PixelBuffer, compose};
//!
//! let source = PixelBuffer::filled(80, 120, 0.4);
//! let framed = compose(&source, &FrameOptions::default().golden(true))?;
//! // round(120 * 1.618) = 194
//! assert_eq!(framed.height(), 194);
//! assert_eq!(framed.width(), 194);
//! # Ok::<(), goldframe::FrameError>(())
//! ```

#![forbid(unsafe_code)]

pub mod buffer;
pub mod compose;
pub mod error;
pub mod extract;
pub mod layout;
pub mod mask;
pub mod options;

pub use buffer::PixelBuffer;
pub use compose::compose;
pub use error::FrameError;
pub use extract::{dominant_hex_colors, swatch};
pub use layout::{Background, CanvasPlan, plan};
pub use mask::RoundedMask;
pub use options::FrameOptions;
