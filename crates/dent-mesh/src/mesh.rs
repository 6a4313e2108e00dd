//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! This is the buffer handed to the renderer after each simulation tick.

use dent_math::Vec3;
use dent_types::{DentError, DentResult};
use serde::{Deserialize, Serialize};

use crate::bounds::Aabb;

fn readable_default() -> bool {
    true
}

/// A triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    /// U texture coordinates.
    pub uv_u: Vec<f32>,
    /// V texture coordinates.
    pub uv_v: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    /// May be empty for point clouds and polylines.
    pub indices: Vec<u32>,

    /// Axis-aligned bounds of the current positions.
    ///
    /// Not serialized; recompute with
    /// [`compute_bounds`](crate::bounds::compute_bounds) after loading.
    #[serde(skip)]
    pub bounds: Aabb,

    /// Whether vertex data is available on the CPU.
    ///
    /// Meshes imported as GPU-only (or compressed) assets clear this flag
    /// and cannot drive a deformation simulator.
    #[serde(default = "readable_default")]
    pub readable: bool,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `glam::Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Collects all positions into an AoS buffer.
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.vertex_count()).map(|i| self.position_vec3(i)).collect()
    }

    /// Replaces every vertex position with `positions`.
    ///
    /// The slice must have exactly `vertex_count()` entries.
    pub fn write_positions(&mut self, positions: &[Vec3]) -> DentResult<()> {
        if positions.len() != self.vertex_count() {
            return Err(DentError::InvalidMesh(format!(
                "Position buffer length ({}) != vertex count ({})",
                positions.len(),
                self.vertex_count()
            )));
        }
        for (i, p) in positions.iter().enumerate() {
            self.set_position(i, *p);
        }
        Ok(())
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            uv_u: Vec::with_capacity(vertex_capacity),
            uv_v: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            bounds: Aabb::EMPTY,
            readable: true,
        }
    }

    /// Marks the mesh as CPU-readable or not.
    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> DentResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(DentError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(DentError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }
        if self.uv_u.len() != n || self.uv_v.len() != n {
            return Err(DentError::InvalidMesh(
                "UV arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(DentError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(DentError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(DentError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from AoS positions and a flat index buffer.
    ///
    /// Normals start at zero and UVs are filled with zeros; call
    /// [`compute_vertex_normals`](crate::normals::compute_vertex_normals)
    /// if shading data is needed.
    pub fn from_positions(positions: &[Vec3], indices: &[u32]) -> DentResult<Self> {
        let n = positions.len();
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for p in positions {
            mesh.pos_x.push(p.x);
            mesh.pos_y.push(p.y);
            mesh.pos_z.push(p.z);
        }
        mesh.normal_x.resize(n, 0.0);
        mesh.normal_y.resize(n, 0.0);
        mesh.normal_z.resize(n, 0.0);
        mesh.uv_u.resize(n, 0.0);
        mesh.uv_v.resize(n, 0.0);
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        crate::bounds::compute_bounds(&mut mesh);
        Ok(mesh)
    }
}
