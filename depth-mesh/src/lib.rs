//! Depth grid to triangle mesh conversion.
//!
//! This crate turns a processed depth grid into
//! [`MeshBuffers`](depth_types::MeshBuffers) - vertex positions, UVs and
//! 32-bit triangle indices - applying an optional per-vertex depth remap
//! curve and inclusive depth-band culling:
//!
//! - [`MeshParams`] - long-axis scale, depth band and remap curve
//! - [`build_mesh`] - the vertex and triangle passes
//!
//! # Example
//!
//! ```
//! use depth_types::DepthGrid;
//! use depth_mesh::{build_mesh, MeshParams};
//!
//! let mut grid = DepthGrid::new(4, 4);
//! grid.fill(0.5);
//!
//! let params = MeshParams::full_band(2).with_band(0.4, 0.6);
//! let mesh = build_mesh(&grid, &params);
//!
//! assert_eq!(mesh.vertex_count(), 16);
//! assert_eq!(mesh.triangle_count(), 18);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod builder;
mod params;

pub use builder::build_mesh;
pub use params::MeshParams;
