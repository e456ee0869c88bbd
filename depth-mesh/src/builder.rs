//! Grid-to-mesh conversion.
//!
//! Every grid cell becomes one vertex; every interior quad of four
//! grid-adjacent vertices contributes up to two triangles:
//!
//! ```text
//! p01 --- p11        triangle 1: p11, p10, p00
//!  |    /  |         triangle 2: p01, p11, p00
//!  |  /    |
//! p00 --- p10
//! ```
//!
//! A triangle is emitted only when all three of its vertices carry a
//! depth inside the configured band; culling is per-triangle, so a quad
//! may contribute 0, 1 or 2 triangles depending on which corners are
//! in-band.

// Grid-coordinate to position math converts freely between index and
// float spaces
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use depth_types::{DepthGrid, MeshBuffers, Point3, Vector2};
use tracing::debug;

use crate::params::MeshParams;

/// Convert a processed depth grid into mesh buffers.
///
/// Vertices are emitted row-major (`y` outer, `x` inner) with sequential
/// emission-order indices, position
/// `((x - W/2) / long_axis, (y - H/2) / long_axis, depth - 0.5)` and UV
/// `(x / W, y / H)`. The depth used for positioning is remapped through
/// the curve when one with at least two keys is configured; the depth
/// retained for band culling is always the raw grid value.
///
/// Grids narrower than 2 cells on either axis produce vertices but no
/// triangles. Indices are 32-bit unconditionally, which bounds the
/// supported input at `2^32` cells (a square grid of `2^16` per side);
/// larger grids would wrap the emitted indices and are debug-asserted
/// against.
///
/// # Example
///
/// ```
/// use depth_types::DepthGrid;
/// use depth_mesh::{build_mesh, MeshParams};
///
/// let mut grid = DepthGrid::new(3, 3);
/// grid.fill(0.5);
///
/// let mesh = build_mesh(&grid, &MeshParams::full_band(2));
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8); // 2 per interior quad
/// ```
#[must_use]
pub fn build_mesh(grid: &DepthGrid, params: &MeshParams<'_>) -> MeshBuffers {
    let w = grid.width();
    let h = grid.height();
    debug_assert!(
        (w as u64)
            .checked_mul(h as u64)
            .is_some_and(|cells| cells <= 1 << 32),
        "{w}x{h} grid exceeds the 32-bit vertex index space"
    );
    let quads = w.saturating_sub(1) * h.saturating_sub(1);

    let mut mesh = MeshBuffers::with_capacity(w * h, 2 * quads);
    let mut depths = Vec::with_capacity(w * h);

    let long_axis = params.long_axis as f32;
    let half_w = w as f32 / 2.0;
    let half_h = h as f32 / 2.0;
    let curve = params.curve.filter(|c| c.is_effective());

    for y in 0..h {
        for x in 0..w {
            let raw = grid.get(x, y);
            let depth = curve.map_or(raw, |c| c.evaluate(raw));

            mesh.positions.push(Point3::new(
                (x as f32 - half_w) / long_axis,
                (y as f32 - half_h) / long_axis,
                depth - 0.5,
            ));
            mesh.uvs
                .push(Vector2::new(x as f32 / w as f32, y as f32 / h as f32));
            depths.push(raw);
        }
    }

    if w > 1 && h > 1 {
        for y in 0..h - 1 {
            for x in 0..w - 1 {
                let p00 = (y * w + x) as u32;
                let p10 = p00 + 1;
                let p01 = p00 + w as u32;
                let p11 = p01 + 1;

                if in_band(&depths, p11, params)
                    && in_band(&depths, p10, params)
                    && in_band(&depths, p00, params)
                {
                    mesh.triangles.push([p11, p10, p00]);
                }

                if in_band(&depths, p01, params)
                    && in_band(&depths, p11, params)
                    && in_band(&depths, p00, params)
                {
                    mesh.triangles.push([p01, p11, p00]);
                }
            }
        }
    }

    debug!(
        "built mesh from {}x{} grid: {} vertices, {} triangles ({} candidate quads)",
        w,
        h,
        mesh.vertex_count(),
        mesh.triangle_count(),
        quads
    );

    mesh
}

/// Whether the retained depth of a vertex lies inside the band.
#[inline]
fn in_band(depths: &[f32], vertex_id: u32, params: &MeshParams<'_>) -> bool {
    let depth = depths[vertex_id as usize];
    depth >= params.min_depth && depth <= params.max_depth
}
