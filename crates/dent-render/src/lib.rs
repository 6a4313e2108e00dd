//! # dent-render
//!
//! Renderer boundary for the deformation simulator.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` that only counts
//! frames and a `JsonFrameExporter` that records the animation (vertex
//! positions plus the probe sphere) for offline viewing.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
