//! Depth sources and the canonical field builder.
//!
//! Both source kinds normalize into one canonical [`DepthGrid`]
//! representation with matching near/far polarity:
//!
//! - **Pixel buffers** take `1 - red` per pixel; the channel is assumed
//!   to already lie in `[0, 1]`, so no normalization pass runs.
//! - **Float-maps** arrive normalized from the decoder and are inverted
//!   here (`1 - v`), aligning their depth convention with pixel buffers.

use depth_types::DepthGrid;

use crate::error::{FieldError, FieldResult};

/// A decoded RGBA pixel buffer used as a depth source.
///
/// Pixels are row-major (`index = y * width + x`) with float channels in
/// `[0, 1]`. Only the red channel carries depth.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Buffer width in pixels.
    pub width: usize,
    /// Buffer height in pixels.
    pub height: usize,
    /// RGBA samples, row-major.
    pub pixels: Vec<[f32; 4]>,
}

impl PixelBuffer {
    /// Create a pixel buffer from float RGBA samples.
    #[must_use]
    pub const fn new(width: usize, height: usize, pixels: Vec<[f32; 4]>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a pixel buffer from 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::PixelCountMismatch`] when `bytes.len()` is
    /// not `width * height * 4`.
    ///
    /// # Example
    ///
    /// ```
    /// use depth_field::PixelBuffer;
    ///
    /// let buffer = PixelBuffer::from_rgba8(1, 1, &[255, 0, 0, 255]).unwrap();
    /// assert_eq!(buffer.pixels[0][0], 1.0);
    /// ```
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> FieldResult<Self> {
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(FieldError::PixelCountMismatch {
                expected,
                got: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|c| {
                [
                    f32::from(c[0]) / 255.0,
                    f32::from(c[1]) / 255.0,
                    f32::from(c[2]) / 255.0,
                    f32::from(c[3]) / 255.0,
                ]
            })
            .collect();

        Ok(Self::new(width, height, pixels))
    }
}

/// A raw depth source, exactly one of the two supported kinds.
///
/// The enum makes supplying both kinds unrepresentable; "neither" is an
/// `Option::<DepthSource>::None` at the pipeline boundary and fails with
/// [`FieldError::MissingSource`].
#[derive(Debug, Clone)]
pub enum DepthSource {
    /// An already-decoded RGBA image; red channel is depth.
    Pixels(PixelBuffer),
    /// A decoded float-map grid, normalized but not yet inverted.
    FloatMap(DepthGrid),
}

/// Normalize a raw source into the canonical depth field.
///
/// # Errors
///
/// Returns [`FieldError::MissingSource`] when `source` is `None` and
/// [`FieldError::PixelCountMismatch`] when a pixel buffer's sample count
/// disagrees with its dimensions.
///
/// # Example
///
/// ```
/// use depth_field::{build_depth_field, DepthSource, PixelBuffer};
///
/// let buffer = PixelBuffer::new(1, 1, vec![[0.25, 0.0, 0.0, 1.0]]);
/// let field = build_depth_field(Some(&DepthSource::Pixels(buffer))).unwrap();
/// assert_eq!(field.get(0, 0), 0.75); // 1 - red
/// ```
pub fn build_depth_field(source: Option<&DepthSource>) -> FieldResult<DepthGrid> {
    match source {
        Some(DepthSource::Pixels(buffer)) => pixel_depths(buffer),
        Some(DepthSource::FloatMap(grid)) => {
            let mut inverted = grid.clone();
            inverted.map_in_place(|v| 1.0 - v);
            Ok(inverted)
        }
        None => Err(FieldError::MissingSource),
    }
}

/// Convert a pixel buffer into a depth grid via `1 - red`.
fn pixel_depths(buffer: &PixelBuffer) -> FieldResult<DepthGrid> {
    let expected = buffer.width * buffer.height;
    if buffer.pixels.len() != expected {
        return Err(FieldError::PixelCountMismatch {
            expected,
            got: buffer.pixels.len(),
        });
    }

    let mut grid = DepthGrid::new(buffer.width, buffer.height);
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let red = buffer.pixels[y * buffer.width + x][0];
            grid.set(x, y, 1.0 - red);
        }
    }

    Ok(grid)
}
