//! # dent-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — The core mesh type. Stores positions, normals, UVs,
//!   and triangle indices in contiguous SoA buffers.
//! - [`Aabb`] — Axis-aligned bounds, refreshed every simulation tick.
//! - Procedural generators for tests and benchmark scenarios.

pub mod bounds;
pub mod generators;
pub mod mesh;
pub mod normals;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
