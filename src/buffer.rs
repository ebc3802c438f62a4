//! Normalized pixel buffer shared by all pipeline stages.

/// Color channels per pixel (RGB).
pub const CHANNELS: usize = 3;

/// Row-major height×width×3 buffer of samples in `[0, 1]`.
///
/// This is the exchange format at every component boundary: the decoder
/// collaborator hands one in, every transform returns a new one, and the
/// encoder collaborator quantizes the final buffer back to 8-bit. Channel
/// order is RGB throughout.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    height: u32,
    width: u32,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Allocate a buffer with every channel of every pixel set to `value`.
    pub fn filled(height: u32, width: u32, value: f32) -> Self {
        Self {
            height,
            width,
            data: vec![value; height as usize * width as usize * CHANNELS],
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

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * CHANNELS
    }

    /// RGB sample at (row, col).
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> [f32; CHANNELS] {
        let i = self.index(row, col);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Overwrite the RGB sample at (row, col).
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, rgb: [f32; CHANNELS]) {
        let i = self.index(row, col);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [f32; CHANNELS]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2]])
    }

    /// New buffer with rows and columns swapped (width×height).
    pub fn transposed(&self) -> Self {
        let mut out = Self::filled(self.width, self.height, 0.0);
        for row in 0..self.height {
            for col in 0..self.width {
                out.set_pixel(col, row, self.pixel(row, col));
            }
        }
        out
    }

    /// Copy `src` into this buffer with its top-left corner at
    /// (`origin_row`, `origin_col`). The region must fit entirely.
    pub fn paste(&mut self, src: &PixelBuffer, origin_row: u32, origin_col: u32) {
        debug_assert!(origin_row + src.height <= self.height);
        debug_assert!(origin_col + src.width <= self.width);
        let row_len = src.width as usize * CHANNELS;
        for row in 0..src.height {
            let from = src.index(row, 0);
            let to = self.index(origin_row + row, origin_col);
            self.data[to..to + row_len].copy_from_slice(&src.data[from..from + row_len]);
        }
    }
}
