//! Generation output.

use std::fmt;

use depth_types::MeshBuffers;

/// Output of one backdrop generation run.
///
/// Carries the mesh together with the dimensions observed along the way,
/// so callers can report or log what the pipeline actually did.
#[derive(Debug, Clone)]
pub struct GeneratedMesh {
    /// The triangulated backdrop.
    pub buffers: MeshBuffers,

    /// Width and height of the input depth field.
    pub source_size: (usize, usize),

    /// Width and height of the resampled grid the mesh was built from.
    pub grid_size: (usize, usize),
}

impl GeneratedMesh {
    /// Number of vertices in the mesh.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.buffers.vertex_count()
    }

    /// Number of triangles in the mesh.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.buffers.triangle_count()
    }
}

impl fmt::Display for GeneratedMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} field resampled to {}x{}: {} vertices, {} triangles",
            self.source_size.0,
            self.source_size.1,
            self.grid_size.0,
            self.grid_size.1,
            self.vertex_count(),
            self.triangle_count(),
        )
    }
}
