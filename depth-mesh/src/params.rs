//! Mesh generation parameters.

use depth_types::DepthCurve;

/// Parameters for converting a depth grid into mesh buffers.
///
/// `long_axis` is the long-axis resolution the grid was resampled to
/// (`2^sub_divisions`); vertex positions are scaled by it so the mesh
/// keeps the same world-space footprint at every subdivision level.
///
/// `min_depth`/`max_depth` bound the inclusive depth band retained in
/// the output; `min > max` is a legal empty band that culls every
/// triangle. The optional curve remaps depth per vertex before
/// positioning and takes effect only with at least two keys.
#[derive(Debug, Clone)]
pub struct MeshParams<'a> {
    /// Long-axis resolution the positions are normalized against.
    pub long_axis: u32,

    /// Lower inclusive bound of the retained depth band.
    pub min_depth: f32,

    /// Upper inclusive bound of the retained depth band.
    pub max_depth: f32,

    /// Optional depth remap applied before positioning.
    pub curve: Option<&'a DepthCurve>,
}

impl<'a> MeshParams<'a> {
    /// Parameters retaining the full `[0, 1]` depth band.
    #[must_use]
    pub const fn full_band(long_axis: u32) -> Self {
        Self {
            long_axis,
            min_depth: 0.0,
            max_depth: 1.0,
            curve: None,
        }
    }

    /// Set the retained depth band.
    #[must_use]
    pub const fn with_band(mut self, min_depth: f32, max_depth: f32) -> Self {
        self.min_depth = min_depth;
        self.max_depth = max_depth;
        self
    }

    /// Set the depth remap curve.
    #[must_use]
    pub const fn with_curve(mut self, curve: &'a DepthCurve) -> Self {
        self.curve = Some(curve);
        self
    }
}
