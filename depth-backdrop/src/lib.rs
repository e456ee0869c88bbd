//! Depth-field backdrop generation pipeline.
//!
//! This crate wires the stages of the backdrop pipeline into a single
//! call: a depth source (pixel buffer, float map or PFM file) becomes a
//! normalized depth field, is resampled to a power-of-two grid, blurred
//! and triangulated into [`MeshBuffers`](depth_types::MeshBuffers):
//!
//! - [`BackdropParams`] - blur, band, subdivision and curve settings
//! - [`generate_mesh`] - one-shot pipeline run on a [`DepthSource`](depth_field::DepthSource)
//! - [`BackdropGenerator`] - reusable runner that owns source and settings
//! - [`GeneratedMesh`] - the mesh plus the sizes observed along the way
//!
//! # Example
//!
//! ```
//! use depth_backdrop::{BackdropGenerator, BackdropParams};
//! use depth_types::DepthGrid;
//!
//! let mut grid = DepthGrid::new(16, 16);
//! grid.fill(0.5);
//!
//! let params = BackdropParams::new().with_blur(0, 0).with_sub_divisions(3);
//! let result = BackdropGenerator::new(params)
//!     .with_float_map(grid)
//!     .generate()?;
//!
//! assert_eq!(result.grid_size, (8, 8));
//! assert_eq!(result.vertex_count(), 64);
//! # Ok::<(), depth_backdrop::BackdropError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod pipeline;
mod result;

pub use error::{BackdropError, BackdropResult};
pub use params::{
    BackdropParams, MAX_BLUR_ITERATIONS, MAX_BLUR_RADIUS, MAX_SUB_DIVISIONS,
};
pub use pipeline::{generate_mesh, BackdropGenerator};
pub use result::GeneratedMesh;
