//! Float-map I/O for the depth-backdrop pipeline.
//!
//! This crate decodes the single-channel binary PFM (`Pf`) depth format
//! into a normalized [`DepthGrid`](depth_types::DepthGrid), and encodes
//! grids back for fixtures and tooling:
//!
//! - [`read_pfm`] / [`load_pfm`] - decode from a byte stream or file
//! - [`write_pfm`] / [`save_pfm`] - encode to a byte stream or file
//!
//! Decoded grids are rescaled to `[0, 1]` against the global sample
//! min/max; the near/far inversion that aligns float-map polarity with
//! pixel-buffer polarity is applied by the source builder in
//! `depth-field`, not here.
//!
//! # Example
//!
//! ```no_run
//! use depth_io::load_pfm;
//!
//! let grid = load_pfm("midas_output.pfm").unwrap();
//! assert!(grid.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod pfm;

pub use error::{IoError, IoResult};
pub use pfm::{load_pfm, read_pfm, save_pfm, write_pfm};
