//! Pipeline configuration.

use depth_types::DepthCurve;

use crate::error::{BackdropError, BackdropResult};

/// Maximum supported blur radius.
pub const MAX_BLUR_RADIUS: u32 = 12;

/// Maximum supported blur iteration count.
pub const MAX_BLUR_ITERATIONS: u32 = 12;

/// Maximum supported subdivision exponent.
///
/// `2^16` cells on the long axis already exceeds what a backdrop needs;
/// beyond it the vertex count escapes the 32-bit index budget.
pub const MAX_SUB_DIVISIONS: u32 = 16;

/// Configuration for one backdrop generation run.
///
/// Defaults are blur radius 1 with one iteration, the full `[0, 1]`
/// depth band, subdivision exponent 6 and no remap curve.
///
/// `min_depth > max_depth` is deliberately legal: an empty band culls
/// every triangle and still yields the full vertex buffer.
///
/// # Example
///
/// ```
/// use depth_backdrop::BackdropParams;
///
/// let params = BackdropParams::new()
///     .with_blur(2, 3)
///     .with_band(0.1, 0.9)
///     .with_sub_divisions(8);
/// assert!(params.validate().is_ok());
///
/// let params = BackdropParams::new().with_sub_divisions(17);
/// assert!(params.validate().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BackdropParams {
    /// Blur window radius (0-12); 0 disables blurring.
    pub blur_radius: u32,

    /// Blur pass repetitions (0-12); 0 disables blurring.
    pub blur_iterations: u32,

    /// Lower inclusive bound of the retained depth band, in `[0, 1]`.
    pub min_depth: f32,

    /// Upper inclusive bound of the retained depth band, in `[0, 1]`.
    pub max_depth: f32,

    /// Subdivision exponent (0-16); long-axis resolution is `2^value`.
    pub sub_divisions: u32,

    /// Optional per-vertex depth remap, applied before positioning.
    pub depth_curve: Option<DepthCurve>,
}

impl Default for BackdropParams {
    fn default() -> Self {
        Self {
            blur_radius: 1,
            blur_iterations: 1,
            min_depth: 0.0,
            max_depth: 1.0,
            sub_divisions: 6,
            depth_curve: None,
        }
    }
}

impl BackdropParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set blur radius and iteration count.
    #[must_use]
    pub const fn with_blur(mut self, radius: u32, iterations: u32) -> Self {
        self.blur_radius = radius;
        self.blur_iterations = iterations;
        self
    }

    /// Set the retained depth band.
    #[must_use]
    pub const fn with_band(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Set the subdivision exponent.
    #[must_use]
    pub const fn with_sub_divisions(mut self, sub_divisions: u32) -> Self {
        self.sub_divisions = sub_divisions;
        self
    }

    /// Set the depth remap curve.
    #[must_use]
    pub fn with_curve(mut self, curve: DepthCurve) -> Self {
        self.depth_curve = Some(curve);
        self
    }

    /// Target long-axis resolution, `2^sub_divisions`.
    #[inline]
    #[must_use]
    pub const fn long_axis(&self) -> u32 {
        1 << self.sub_divisions
    }

    /// Check every value against its supported range.
    ///
    /// Degenerate values inside the ranges (zero blur, empty band, zero
    /// subdivisions) are legal and validate cleanly.
    ///
    /// # Errors
    ///
    /// Returns [`BackdropError::InvalidParameter`] naming the first
    /// out-of-range value.
    pub fn validate(&self) -> BackdropResult<()> {
        if self.blur_radius > MAX_BLUR_RADIUS {
            return Err(BackdropError::invalid_parameter(format!(
                "blur radius {} exceeds {MAX_BLUR_RADIUS}",
                self.blur_radius
            )));
        }
        if self.blur_iterations > MAX_BLUR_ITERATIONS {
            return Err(BackdropError::invalid_parameter(format!(
                "blur iterations {} exceeds {MAX_BLUR_ITERATIONS}",
                self.blur_iterations
            )));
        }
        if !(0.0..=1.0).contains(&self.min_depth) {
            return Err(BackdropError::invalid_parameter(format!(
                "min depth {} outside [0, 1]",
                self.min_depth
            )));
        }
        if !(0.0..=1.0).contains(&self.max_depth) {
            return Err(BackdropError::invalid_parameter(format!(
                "max depth {} outside [0, 1]",
                self.max_depth
            )));
        }
        if self.sub_divisions > MAX_SUB_DIVISIONS {
            return Err(BackdropError::invalid_parameter(format!(
                "subdivision exponent {} exceeds {MAX_SUB_DIVISIONS}",
                self.sub_divisions
            )));
        }
        Ok(())
    }
}
