//! # dent-solver
//!
//! Per-vertex deformation of a mesh against a moving spherical probe.
//!
//! Each [`DeformationSimulator::tick`] runs four passes in order:
//!
//! 1. **Classify** — sampled vertices are tagged [`Zone::Outside`],
//!    [`Zone::Influenced`] or [`Zone::Penetrating`] by their distance to
//!    the probe in mesh-local space.
//! 2. **Integrate** — a zone-specific force/correction, damping, and a
//!    semi-implicit Euler step.
//! 3. **Smooth** — temporal blend against the previous frame, then linear
//!    fill of vertices skipped by the sampling stride.
//! 4. **Publish** — the output mesh buffer is replaced, bounds (and every
//!    few ticks normals) are refreshed, and the accumulated reaction force
//!    is handed to the probe.
//!
//! ## Key Types
//!
//! - [`DeformationSimulator`] — the component, with its two-state lifecycle
//! - [`SimulationParams`] — tunables, editable between ticks
//! - [`GeometryCache`] — rest / current / previous / velocity buffers
//! - [`SphereProbe`] and [`ProbeBody`] — the probe boundary

pub mod config;
pub mod integrator;
pub mod probe;
pub mod proximity;
pub mod simulator;
pub mod smoothing;
pub mod state;

pub use config::SimulationParams;
pub use probe::{ForceAccumulator, ProbeBody, SphereProbe};
pub use proximity::{Proximity, ProbeFrame, Zone};
pub use simulator::{DeformationSimulator, InitReport, TickOutcome, TickReport};
pub use state::GeometryCache;
