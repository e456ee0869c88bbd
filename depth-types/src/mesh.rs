//! Mesh output buffers.

use nalgebra::{Point3, Vector2, Vector3};

use crate::Aabb;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex, UV and triangle-index buffers produced by mesh generation.
///
/// Positions and UVs are parallel arrays; each triangle references three
/// vertices by emission-order index. Indices are 32-bit unconditionally,
/// since grids at the maximum subdivision exponent exceed the 16-bit
/// index range. Winding is fixed by the generator; consumers derive
/// normals from it via [`MeshBuffers::vertex_normals`].
///
/// The pipeline produces one `MeshBuffers` per invocation and keeps no
/// reference to it afterwards; the caller owns it outright.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshBuffers {
    /// Vertex positions, in emission order.
    pub positions: Vec<Point3<f32>>,

    /// Per-vertex texture coordinates, parallel to `positions`.
    pub uvs: Vec<Vector2<f32>>,

    /// Triangles as `[v0, v1, v2]` indices into `positions`.
    pub triangles: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Create empty buffers.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create buffers with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh carries no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounding box of all vertex positions.
    ///
    /// Covers every emitted vertex, including vertices not referenced by
    /// any triangle (culled-band vertices stay in the buffer).
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// Per-vertex normals derived from the triangle list.
    ///
    /// Face normals are accumulated unnormalized (area-weighted) onto each
    /// referenced vertex and normalized at the end. Vertices referenced by
    /// no triangle get the zero vector.
    #[must_use]
    pub fn vertex_normals(&self) -> Vec<Vector3<f32>> {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];

        for &[i0, i1, i2] in &self.triangles {
            let v0 = self.positions[i0 as usize];
            let v1 = self.positions[i1 as usize];
            let v2 = self.positions[i2 as usize];

            // Cross product length carries the triangle area weighting
            let face = (v1 - v0).cross(&(v2 - v0));

            normals[i0 as usize] += face;
            normals[i1 as usize] += face;
            normals[i2 as usize] += face;
        }

        for n in &mut normals {
            let len = n.norm();
            if len > f32::EPSILON {
                *n /= len;
            }
        }

        normals
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_triangle() -> MeshBuffers {
        let mut mesh = MeshBuffers::new();
        mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
        mesh.positions.push(Point3::new(0.0, 1.0, 0.0));
        mesh.uvs.push(Vector2::new(0.0, 0.0));
        mesh.uvs.push(Vector2::new(1.0, 0.0));
        mesh.uvs.push(Vector2::new(0.0, 1.0));
        mesh.triangles.push([0, 1, 2]);
        mesh
    }

    #[test]
    fn counts_and_emptiness() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert!(MeshBuffers::new().is_empty());
    }

    #[test]
    fn bounds_cover_vertices() {
        let mesh = single_triangle();
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn flat_triangle_normals_point_along_z() {
        let mesh = single_triangle();
        let normals = mesh.vertex_normals();
        assert_eq!(normals.len(), 3);
        for n in normals {
            assert_relative_eq!(n.x, 0.0);
            assert_relative_eq!(n.y, 0.0);
            assert_relative_eq!(n.z, 1.0);
        }
    }

    #[test]
    fn unreferenced_vertex_gets_zero_normal() {
        let mut mesh = single_triangle();
        mesh.positions.push(Point3::new(5.0, 5.0, 5.0));
        mesh.uvs.push(Vector2::new(0.5, 0.5));

        let normals = mesh.vertex_normals();
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[3], Vector3::zeros());
    }
}
