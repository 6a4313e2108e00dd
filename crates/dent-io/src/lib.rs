//! # dent-io
//!
//! Run configuration for driving the simulator without a game engine.
//!
//! A [`RunConfig`] names the mesh to deform, the probe and the path it
//! follows, the simulation parameters and the mesh transform. Configs are
//! TOML files; meshes may also be loaded from JSON.

pub mod contract;
pub mod mesh_io;
pub mod probe_path;
pub mod validator;

pub use contract::{MeshSource, ProbeConfig, RunConfig};
pub use probe_path::ProbePath;
pub use validator::{validate_mesh, validate_run_config};
