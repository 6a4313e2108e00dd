//! Procedural meshes for tests and benchmark scenarios.
//!
//! Every generator returns a mesh with consistent winding, per-vertex
//! normals, UVs and up-to-date bounds.

use std::f32::consts::{PI, TAU};

use dent_math::{Vec2, Vec3};

use crate::bounds::compute_bounds;
use crate::mesh::TriangleMesh;

fn push_vertex(mesh: &mut TriangleMesh, position: Vec3, normal: Vec3, uv: Vec2) {
    mesh.pos_x.push(position.x);
    mesh.pos_y.push(position.y);
    mesh.pos_z.push(position.z);
    mesh.normal_x.push(normal.x);
    mesh.normal_y.push(normal.y);
    mesh.normal_z.push(normal.z);
    mesh.uv_u.push(uv.x);
    mesh.uv_v.push(uv.y);
}

/// Flat sheet of `cols × rows` quads in the XY plane, facing +Z.
///
/// Spans `[-width/2, width/2] × [-height/2, height/2]` at Z = 0. Row 0 is
/// the top edge (+Y).
///
/// # Example
/// ```
/// use dent_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let stride = cols + 1;
    let mut mesh = TriangleMesh::with_capacity(stride * (rows + 1), cols * rows * 2);
    let origin = Vec3::new(-0.5 * width, 0.5 * height, 0.0);

    for row in 0..=rows {
        let v = row as f32 / rows as f32;
        for col in 0..=cols {
            let u = col as f32 / cols as f32;
            let position = origin + Vec3::new(u * width, -v * height, 0.0);
            push_vertex(&mut mesh, position, Vec3::Z, Vec2::new(u, v));
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let a = (row * stride + col) as u32;
            let b = a + 1;
            let c = a + stride as u32;
            let d = c + 1;
            mesh.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    compute_bounds(&mut mesh);
    mesh
}

/// Latitude/longitude sphere of `radius` around the origin, poles on ±Y.
///
/// `stacks` counts latitude bands, `slices` longitude bands. The seam
/// column is duplicated so UVs wrap cleanly. Triangles wind counter-clockwise
/// seen from outside. One seam copy of each pole vertex is left unreferenced.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let ring = slices + 1;
    let mut mesh = TriangleMesh::with_capacity((stacks + 1) * ring, stacks * slices * 2);

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = (PI * v).sin_cos();
        for slice in 0..=slices {
            let u = slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = (TAU * u).sin_cos();
            let normal = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            push_vertex(&mut mesh, normal * radius, normal, Vec2::new(u, v));
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let a = (stack * ring + slice) as u32;
            let b = a + ring as u32;
            // The pole bands collapse to one triangle per quad.
            if stack > 0 {
                mesh.indices.extend_from_slice(&[a, a + 1, b]);
            }
            if stack + 1 < stacks {
                mesh.indices.extend_from_slice(&[a + 1, b + 1, b]);
            }
        }
    }

    compute_bounds(&mut mesh);
    mesh
}

/// `count` unconnected vertices along +X starting at the origin.
///
/// No triangles; useful for exercising per-vertex behaviour in isolation.
pub fn polyline(count: usize, spacing: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(count, 0);
    let last = count.saturating_sub(1).max(1) as f32;
    for i in 0..count {
        let position = Vec3::new(i as f32 * spacing, 0.0, 0.0);
        push_vertex(&mut mesh, position, Vec3::Y, Vec2::new(i as f32 / last, 0.0));
    }
    compute_bounds(&mut mesh);
    mesh
}
