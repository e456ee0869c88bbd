//! End-to-end backdrop generation.
//!
//! Chains the stages: source to depth field, resample to the subdivision
//! grid, blur, then triangulate. Each stage lives in its own crate; this
//! module only sequences them and reports what happened.

use std::path::Path;

use tracing::{debug, info};

use depth_field::{box_blur, build_depth_field, resample, target_size, DepthSource, PixelBuffer};
use depth_mesh::{build_mesh, MeshParams};
use depth_types::DepthGrid;

use crate::error::BackdropResult;
use crate::params::BackdropParams;
use crate::result::GeneratedMesh;

/// Run the full pipeline on a depth source.
///
/// The source is normalized to a `[0, 1]` depth field, resampled down to
/// the `2^sub_divisions` grid, blurred, then triangulated with the
/// configured band and curve.
///
/// # Errors
///
/// Returns an error if the parameters are out of range or the source
/// cannot be turned into a depth field.
///
/// # Example
///
/// ```
/// use depth_backdrop::{generate_mesh, BackdropParams};
/// use depth_field::DepthSource;
/// use depth_types::DepthGrid;
///
/// let mut grid = DepthGrid::new(4, 4);
/// grid.fill(0.5);
/// let source = DepthSource::FloatMap(grid);
///
/// let params = BackdropParams::new().with_blur(0, 0).with_sub_divisions(2);
/// let result = generate_mesh(&source, &params)?;
/// assert_eq!(result.grid_size, (4, 4));
/// assert_eq!(result.vertex_count(), 16);
/// # Ok::<(), depth_backdrop::BackdropError>(())
/// ```
pub fn generate_mesh(
    source: &DepthSource,
    params: &BackdropParams,
) -> BackdropResult<GeneratedMesh> {
    params.validate()?;

    let field = build_depth_field(Some(source))?;
    let source_size = (field.width(), field.height());
    debug!(
        width = source_size.0,
        height = source_size.1,
        "depth field built"
    );

    let (target_w, target_h) = target_size(field.width(), field.height(), params.sub_divisions);
    let mut grid = resample(&field, target_w, target_h);
    debug!(width = target_w, height = target_h, "field resampled");

    box_blur(&mut grid, params.blur_radius, params.blur_iterations);

    let buffers = build_mesh(&grid, &mesh_params(params));

    let result = GeneratedMesh {
        buffers,
        source_size,
        grid_size: (grid.width(), grid.height()),
    };
    info!(
        vertices = result.vertex_count(),
        triangles = result.triangle_count(),
        "backdrop mesh generated"
    );
    Ok(result)
}

fn mesh_params(params: &BackdropParams) -> MeshParams<'_> {
    let mut mesh = MeshParams::full_band(params.long_axis())
        .with_band(params.min_depth, params.max_depth);
    if let Some(curve) = params.depth_curve.as_ref() {
        mesh = mesh.with_curve(curve);
    }
    mesh
}

/// Reusable pipeline runner that owns its source and parameters.
///
/// Convenient when the same configuration is applied repeatedly or when
/// the source comes from a file.
///
/// # Example
///
/// ```
/// use depth_backdrop::{BackdropGenerator, BackdropParams};
/// use depth_types::DepthGrid;
///
/// let mut grid = DepthGrid::new(8, 8);
/// grid.fill(0.25);
///
/// let generator = BackdropGenerator::new(BackdropParams::new().with_sub_divisions(3))
///     .with_float_map(grid);
/// let result = generator.generate()?;
/// assert_eq!(result.grid_size, (8, 8));
/// # Ok::<(), depth_backdrop::BackdropError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BackdropGenerator {
    source: Option<DepthSource>,
    params: BackdropParams,
}

impl BackdropGenerator {
    /// Create a generator with the given parameters and no source yet.
    #[must_use]
    pub fn new(params: BackdropParams) -> Self {
        Self {
            source: None,
            params,
        }
    }

    /// Use a pixel buffer as the depth source.
    #[must_use]
    pub fn with_pixels(mut self, pixels: PixelBuffer) -> Self {
        self.source = Some(DepthSource::Pixels(pixels));
        self
    }

    /// Use a float map as the depth source.
    #[must_use]
    pub fn with_float_map(mut self, grid: DepthGrid) -> Self {
        self.source = Some(DepthSource::FloatMap(grid));
        self
    }

    /// Load a PFM file and use it as the depth source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed.
    pub fn with_pfm_file<P: AsRef<Path>>(mut self, path: P) -> BackdropResult<Self> {
        self.source = Some(DepthSource::FloatMap(depth_io::load_pfm(path)?));
        Ok(self)
    }

    /// Run the pipeline on the configured source.
    ///
    /// # Errors
    ///
    /// Returns an error if no source has been set, the parameters are out
    /// of range, or the source cannot be turned into a depth field.
    pub fn generate(&self) -> BackdropResult<GeneratedMesh> {
        let source = self
            .source
            .as_ref()
            .ok_or(depth_field::FieldError::MissingSource)?;
        generate_mesh(source, &self.params)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BackdropError;

    fn ramp_grid(width: usize, height: usize) -> DepthGrid {
        let mut grid = DepthGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                #[allow(clippy::cast_precision_loss)]
                grid.set(x, y, (y * width + x) as f32 / (width * height) as f32);
            }
        }
        grid
    }

    #[test]
    fn generator_without_source_fails() {
        let generator = BackdropGenerator::new(BackdropParams::default());
        assert!(matches!(
            generator.generate(),
            Err(BackdropError::Field(
                depth_field::FieldError::MissingSource
            ))
        ));
    }

    #[test]
    fn invalid_parameters_fail_before_field_construction() {
        let source = DepthSource::FloatMap(ramp_grid(4, 4));
        let params = BackdropParams::new().with_sub_divisions(17);
        assert!(matches!(
            generate_mesh(&source, &params),
            Err(BackdropError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn square_source_keeps_square_grid() {
        let source = DepthSource::FloatMap(ramp_grid(16, 16));
        let params = BackdropParams::new().with_blur(0, 0).with_sub_divisions(3);
        let result = generate_mesh(&source, &params).unwrap();
        assert_eq!(result.source_size, (16, 16));
        assert_eq!(result.grid_size, (8, 8));
        assert_eq!(result.vertex_count(), 64);
        assert_eq!(result.triangle_count(), 2 * 7 * 7);
    }

    #[test]
    fn aspect_ratio_follows_the_long_axis() {
        // 32x16 at exponent 3: long axis 8, short axis 8 * 16 / 32 = 4.
        let source = DepthSource::FloatMap(ramp_grid(32, 16));
        let params = BackdropParams::new().with_blur(0, 0).with_sub_divisions(3);
        let result = generate_mesh(&source, &params).unwrap();
        assert_eq!(result.grid_size, (8, 4));
    }
}
