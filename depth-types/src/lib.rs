//! Core data types for the depth-backdrop pipeline.
//!
//! This crate provides the foundational types shared by the pipeline
//! crates:
//!
//! - [`DepthGrid`] - A dense 2D grid of depth samples in `[0, 1]`
//! - [`DepthCurve`] - A sampled depth remapping function
//! - [`MeshBuffers`] - Vertex/UV/index buffers produced by mesh generation
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Conventions
//!
//! Grids are indexed `(x, y)` with `x` the fast-varying axis and stored
//! row-major (`idx = y * width + x`). Depth values are nominally in
//! `[0, 1]` with 0 near and 1 far. Mesh triangle winding is fixed by
//! emission order and relied upon by downstream normal computation.
//!
//! # Example
//!
//! ```
//! use depth_types::DepthGrid;
//!
//! let mut grid = DepthGrid::new(4, 2);
//! grid.set(3, 1, 0.5);
//! assert_eq!(grid.get(3, 1), 0.5);
//! assert_eq!(grid.as_slice().len(), 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod curve;
mod grid;
mod mesh;

pub use bounds::Aabb;
pub use curve::{CurveKey, DepthCurve};
pub use grid::DepthGrid;
pub use mesh::MeshBuffers;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector2, Vector3};
