//! Depth-field processing for the depth-backdrop pipeline.
//!
//! This crate normalizes raw depth sources into the canonical
//! [`DepthGrid`](depth_types::DepthGrid) representation and prepares the
//! grid for meshing:
//!
//! - [`DepthSource`] / [`build_depth_field`] - source normalization with
//!   matching near/far polarity across both source kinds
//! - [`box_blur`] - in-place iterated separable box blur
//! - [`target_size`] / [`resample`] - power-of-two nearest-neighbor
//!   resampling that preserves aspect ratio
//!
//! The pipeline crate (`depth-backdrop`) chains these in order:
//! source → resample → blur.
//!
//! # Example
//!
//! ```
//! use depth_field::{box_blur, build_depth_field, resample, target_size};
//! use depth_field::{DepthSource, PixelBuffer};
//!
//! let pixels = vec![[0.5, 0.0, 0.0, 1.0]; 64 * 32];
//! let source = DepthSource::Pixels(PixelBuffer::new(64, 32, pixels));
//!
//! let field = build_depth_field(Some(&source)).unwrap();
//! let (w, h) = target_size(field.width(), field.height(), 4);
//! let mut grid = resample(&field, w, h);
//! box_blur(&mut grid, 1, 1);
//!
//! assert_eq!((grid.width(), grid.height()), (16, 8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod blur;
mod error;
mod resample;
mod source;

pub use blur::box_blur;
pub use error::{FieldError, FieldResult};
pub use resample::{resample, target_size};
pub use source::{build_depth_field, DepthSource, PixelBuffer};
